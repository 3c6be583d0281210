//! Configuration loader for the switch environment
//!
//! This module provides the `ConfigLoader` struct that builds a
//! [`GlobalConfig`] from layered sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, Source};
use tracing::{debug, info};

use crate::config::env::EnvOverrides;
use crate::config::error::ConfigError;
use crate::config::schema::{self, FieldDefault, FIELDS};
use crate::config::settings::GlobalConfig;

/// Environment variable naming the default override file
pub const CONFIG_FILE_ENV: &str = "SWITCH_CONFIG_FILE";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority (lowest to highest):
/// 1. Schema defaults
/// 2. Bound environment variables (`CURRENCY`, `FSPIOP_URL`, ...)
/// 3. The override file, if one is set
///
/// Tables in the override file merge into the lower layers key by key;
/// arrays such as `participants` replace them as a whole.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Override file (JSON or JSON5)
    config_file: Option<PathBuf>,
    /// Snapshot of the bound environment variables
    env: EnvOverrides,
}

impl ConfigLoader {
    /// Create a loader over the current process environment
    ///
    /// A non-empty `SWITCH_CONFIG_FILE` becomes the override file; `with_file`
    /// replaces it.
    pub fn new() -> Self {
        Self::with_env(EnvOverrides::from_env()).with_env_file(std::env::var(CONFIG_FILE_ENV).ok())
    }

    /// Create a loader over an explicit set of environment overrides
    pub fn with_env(env: EnvOverrides) -> Self {
        Self {
            config_file: None,
            env,
        }
    }

    /// Merge the given override file over defaults and environment values
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Use the value of `SWITCH_CONFIG_FILE` as the override file, ignoring blanks
    fn with_env_file(self, value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => self.with_file(path),
            _ => self,
        }
    }

    /// Override file, if one is set
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn env(&self) -> &EnvOverrides {
        &self.env
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The override file does not exist (`FileNotFound`) or cannot be read (`Io`)
    /// - The override file is not valid JSON/JSON5 (`ParseError`)
    /// - A key is not declared in the schema, `participants` is not an array,
    ///   a value has the wrong type or an invariant is violated (`ValidationError`).
    ///   Type errors carry the path of the offending value, e.g. `urls.fspiop`.
    pub fn load(&self) -> Result<GlobalConfig, ConfigError> {
        let config = self.build_config()?;
        let document: serde_json::Value = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to read merged configuration: {}", e))
        })?;

        schema::check_document(&document)?;

        let settings: GlobalConfig = serde_path_to_error::deserialize(document).map_err(|e| {
            let field = match e.path().to_string() {
                path if path == "." => "configuration".to_string(),
                path => path,
            };
            ConfigError::validation(field, e.inner().to_string())
        })?;

        settings.validate()?;

        info!(
            currency = %settings.currency,
            participants = settings.participants.len(),
            "Configuration loaded"
        );
        debug!(
            fspiop = %settings.urls.fspiop,
            als_admin = %settings.urls.als_admin,
            central_ledger_admin = %settings.urls.central_ledger_admin,
            oracle = %settings.application_urls.oracle,
            "Resolved switch endpoints"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = self.add_defaults(Config::builder())?;

        let builder = match self.config_file {
            Some(ref path) => Self::add_file_source(builder, path)?,
            None => builder,
        };

        builder.build().map_err(|e| match self.config_file {
            Some(ref path) => ConfigError::ParseError(format!("{}: {}", path.display(), e)),
            None => ConfigError::Other(e),
        })
    }

    /// Seed every schema field with its default or bound environment value
    fn add_defaults(
        &self,
        mut builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if !self.env.is_empty() {
            debug!(variables = ?self.env.applied(), "Applying environment overrides");
        }

        for field in FIELDS {
            builder = match (self.env.value_for(field), field.default) {
                (Some(value), _) => builder.set_default(field.key, value)?,
                (None, FieldDefault::Text(default)) => builder.set_default(field.key, default())?,
                (None, FieldDefault::EmptyList) => {
                    builder.set_default(field.key, Vec::<String>::new())?
                }
            };
        }

        Ok(builder)
    }

    /// Add the override file to the config builder
    ///
    /// Files ending in `.json` are parsed as strict JSON, anything else as JSON5.
    /// The file's own keys are checked against the schema before merging, since
    /// the builder reads a top-level key such as `urls.fspiop` as a path.
    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let format = Self::file_format(path);
        debug!(path = %path.display(), ?format, "Loading configuration override file");

        let source = File::from_str(&contents, format);
        schema::check_document(&Self::file_document(&source, path)?)?;

        Ok(builder.add_source(source))
    }

    /// Parse the override file on its own, keeping its keys verbatim
    fn file_document(source: &impl Source, path: &Path) -> Result<serde_json::Value, ConfigError> {
        let parse_error = |e: config::ConfigError| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e))
        };

        let mut document = serde_json::Map::new();
        for (key, value) in source.collect().map_err(parse_error)? {
            let value = value
                .try_deserialize::<serde_json::Value>()
                .map_err(parse_error)?;
            document.insert(key, value);
        }
        Ok(serde_json::Value::Object(document))
    }

    fn file_format(path: &Path) -> FileFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Json5,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the configuration from the process environment and an optional override file
///
/// Convenience wrapper over [`ConfigLoader`] for process startup. Without
/// `file_path`, `SWITCH_CONFIG_FILE` names the override file if it is set.
pub fn load_configuration(file_path: Option<&Path>) -> Result<GlobalConfig, ConfigError> {
    let loader = ConfigLoader::new();
    match file_path {
        Some(path) => loader.with_file(path).load(),
        None => loader.load(),
    }
}
