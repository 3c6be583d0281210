//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically. Existence of the
//! configuration file is left to the loader so it is reported the same way
//! regardless of how the path was supplied.

use std::path::{Path, PathBuf};

const CONFIG_EXTENSIONS: &[&str] = &["json", "json5"];

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Validate a configuration file path: a `.json` or `.json5` file, not a directory
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if path_str.trim().is_empty() {
        return Err("Configuration file path cannot be empty".to_string());
    }

    if path.is_dir() {
        return Err(format!("Configuration path is a directory: '{}'", path_str));
    }

    if !has_config_extension(&path) {
        return Err(format!(
            "Configuration file must have a .json or .json5 extension, got: '{}'",
            path_str
        ));
    }

    Ok(path)
}

/// Validate the output path of a generated configuration file
pub fn validate_output_path(path_str: &str) -> Result<PathBuf, String> {
    let path = validate_config_file_path(path_str)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(format!(
            "Output directory does not exist: '{}'",
            parent.display()
        ));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_config_file_path_accepts_json_and_json5() {
        assert!(validate_config_file_path("config/switch.json5").is_ok());
        assert!(validate_config_file_path("switch.JSON").is_ok());
    }

    #[test]
    fn test_validate_config_file_path_rejects_other_extensions() {
        let err = validate_config_file_path("switch.toml").unwrap_err();
        assert!(err.contains(".json or .json5"));
        assert!(validate_config_file_path("switch").is_err());
        assert!(validate_config_file_path("").is_err());
    }

    #[test]
    fn test_validate_config_file_path_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("conf.json5");
        std::fs::create_dir(&dir).unwrap();

        let err = validate_config_file_path(dir.to_str().unwrap()).unwrap_err();
        assert!(err.contains("directory"));
    }

    #[test]
    fn test_validate_output_path_requires_existing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let ok = temp_dir.path().join("switch.json5");
        assert!(validate_output_path(ok.to_str().unwrap()).is_ok());

        let missing = temp_dir.path().join("missing").join("switch.json5");
        let err = validate_output_path(missing.to_str().unwrap()).unwrap_err();
        assert!(err.contains("does not exist"));

        assert!(validate_output_path("switch.json5").is_ok());
    }
}
