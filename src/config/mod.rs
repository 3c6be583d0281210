//! Configuration management for the switch environment
//!
//! This module builds a validated [`GlobalConfig`] from layered sources:
//! - Schema defaults
//! - Environment variable overrides (`CURRENCY`, `FSPIOP_URL`, `ALS_ADMIN_URL`,
//!   `CENTRAL_LEDGER_ADMIN_URL`, `ORACLE_URL`)
//! - An optional JSON/JSON5 override file
//!
//! # Configuration Priority (lowest to highest)
//! 1. Defaults declared in [`schema::FIELDS`]
//! 2. Bound environment variables
//! 3. The override file
//!
//! Loading is strict: keys not declared in the schema are rejected.

pub mod env;
pub mod error;
pub mod loader;
pub mod schema;
pub mod settings;
pub mod validation;

// Re-export public types
pub use env::EnvOverrides;
pub use error::ConfigError;
pub use loader::{ConfigLoader, load_configuration};
pub use settings::{
    ApplicationUrls, GlobalConfig, Participant, ParticipantType, Party, PartyIdType, ServiceUrls,
};
