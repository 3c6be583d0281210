//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.
//! Handlers write their report to any `io::Write` so they can be tested
//! without capturing stdout.

pub mod check;
pub mod init;
pub mod schema;
pub mod show;

pub use check::CheckCommandHandler;
pub use init::InitCommandHandler;
pub use schema::SchemaCommandHandler;
pub use show::ShowCommandHandler;
