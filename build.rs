use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `switch-config --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
