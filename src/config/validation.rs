//! Configuration validation logic
//!
//! This module provides validation methods for the configuration structures.
//! Checks are structural: endpoint shape, currency code shape and participant
//! id uniqueness. Nothing is resolved or contacted.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::error::ConfigError;
use crate::config::settings::{ApplicationUrls, GlobalConfig, Participant, Party, ServiceUrls};

/// `[scheme://]host[:port][/path]`, host being a name, IPv4 address or bracketed IPv6 address
static ENDPOINT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn endpoint_pattern() -> &'static Regex {
    ENDPOINT_PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*|\[[0-9A-Fa-f:.]+\])(?::(\d{1,5}))?(?:/\S*)?$",
        )
        .expect("endpoint pattern is a valid regex")
    })
}

/// Validate an endpoint URL
///
/// Schemeless `host:port/path` values are accepted since the switch defaults
/// are written that way.
pub fn validate_endpoint(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::validation(field, "URL cannot be empty."));
    }

    let Some(captures) = endpoint_pattern().captures(url) else {
        return Err(ConfigError::validation(
            field,
            format!("Invalid URL '{url}'. Expected format: [scheme://]host[:port][/path]"),
        ));
    };

    if let Some(port) = captures.get(1) {
        match port.as_str().parse::<u32>() {
            Ok(port) if (1..=65535).contains(&port) => {}
            _ => {
                return Err(ConfigError::validation(
                    field,
                    format!(
                        "Invalid port '{}' in URL '{url}'. Port must be between 1 and 65535.",
                        port.as_str()
                    ),
                ));
            }
        }
    }

    Ok(())
}

fn require_non_empty(field: String, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(field, "Value cannot be empty."));
    }
    Ok(())
}

impl ServiceUrls {
    /// Validate switch service endpoints
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint("urls.fspiop", &self.fspiop)?;
        validate_endpoint("urls.alsAdmin", &self.als_admin)?;
        validate_endpoint("urls.centralLedgerAdmin", &self.central_ledger_admin)?;
        Ok(())
    }
}

impl ApplicationUrls {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint("applicationUrls.oracle", &self.oracle)
    }
}

impl Party {
    /// Validate a party; `prefix` is the party's path in the document
    pub fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        require_non_empty(format!("{prefix}.displayName"), &self.display_name)?;
        require_non_empty(format!("{prefix}.idValue"), &self.id_value)?;
        Ok(())
    }
}

impl Participant {
    /// Validate a participant at position `index` of the directory
    ///
    /// # Validation Rules
    /// - Id and settlement account id must not be empty
    /// - Simulator admin and callback URLs must be well-formed
    /// - Every party must be valid
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let prefix = format!("participants[{index}]");

        require_non_empty(format!("{prefix}.id"), &self.id)?;
        require_non_empty(
            format!("{prefix}.settlementAccountId"),
            &self.settlement_account_id,
        )?;

        validate_endpoint(&format!("{prefix}.simulatorAdminUrl"), &self.simulator_admin_url)?;
        validate_endpoint(&format!("{prefix}.fspiopCallbackUrl"), &self.fspiop_callback_url)?;
        validate_endpoint(
            &format!("{prefix}.thirdpartyCallbackUrl"),
            &self.thirdparty_callback_url,
        )?;

        for (j, party) in self.parties.iter().enumerate() {
            party.validate(&format!("{prefix}.parties[{j}]"))?;
        }

        Ok(())
    }
}

impl GlobalConfig {
    /// Validate the complete configuration
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_currency()?;
        self.urls.validate()?;
        self.application_urls.validate()?;

        let mut seen = HashSet::new();
        for (i, participant) in self.participants.iter().enumerate() {
            participant.validate(i)?;
            if !seen.insert(participant.id.as_str()) {
                return Err(ConfigError::validation(
                    format!("participants[{i}].id"),
                    format!("Duplicate participant id '{}'.", participant.id),
                ));
            }
        }

        Ok(())
    }

    fn validate_currency(&self) -> Result<(), ConfigError> {
        let code = self.currency.as_str();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::validation(
                "currency",
                format!("Invalid currency '{code}'. Expected a three-letter ISO 4217 code such as USD."),
            ));
        }
        Ok(())
    }
}
