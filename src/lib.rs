//! Switch-Config Library
//!
//! Schema-driven configuration for a Mojaloop-style switch environment:
//! service endpoints, the switch currency and the participant directory.
//!
//! The configuration is built once with [`config::ConfigLoader`] (or
//! [`config::load_configuration`]) and passed by reference to whatever
//! bootstraps the dependent services.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logger;

pub use crate::config::{ConfigError, ConfigLoader, GlobalConfig, load_configuration};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
