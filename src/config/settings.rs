//! Configuration settings structures for the switch environment
//!
//! This module defines the configuration structures that are loaded from
//! defaults, environment variables and an optional JSON/JSON5 override file.
//! Field names are serialized in camelCase so existing override files can be
//! used unchanged.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

pub(crate) fn default_fspiop_url() -> String {
    "0.0.0.0:4003".to_string()
}

pub(crate) fn default_als_admin_url() -> String {
    "0.0.0.0:4004/account-lookup-service-admin".to_string()
}

pub(crate) fn default_central_ledger_admin_url() -> String {
    "0.0.0.0:4004/central-ledger".to_string()
}

pub(crate) fn default_oracle_url() -> String {
    "0.0.0.0:4004/oracle-simulator".to_string()
}

// ============================================================================
// Endpoint Configuration
// ============================================================================

/// Switch service endpoints this environment talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceUrls {
    /// Switch endpoint for the FSPIOP API
    #[serde(default = "default_fspiop_url")]
    pub fspiop: String,

    /// Switch endpoint for the account lookup service admin API
    #[serde(default = "default_als_admin_url")]
    pub als_admin: String,

    /// Switch endpoint for the central-ledger admin API
    #[serde(default = "default_central_ledger_admin_url")]
    pub central_ledger_admin: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self {
            fspiop: default_fspiop_url(),
            als_admin: default_als_admin_url(),
            central_ledger_admin: default_central_ledger_admin_url(),
        }
    }
}

/// Endpoints handed to switch services so they register the right callbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApplicationUrls {
    /// Oracle simulator endpoint, used to point the ALS at the oracle
    #[serde(default = "default_oracle_url")]
    pub oracle: String,
}

impl Default for ApplicationUrls {
    fn default() -> Self {
        Self {
            oracle: default_oracle_url(),
        }
    }
}

// ============================================================================
// Participant Directory
// ============================================================================

/// Kind of switch participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    /// Deposit-taking financial service provider
    Dfsp,
    /// Payment initiation service provider
    Pisp,
}

impl ParticipantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Dfsp => "DFSP",
            ParticipantType::Pisp => "PISP",
        }
    }
}

impl fmt::Display for ParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier type of a party, as used by the account lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyIdType {
    Msisdn,
    Email,
    PersonalId,
    Business,
    Device,
    AccountId,
    Iban,
    Alias,
}

impl PartyIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "MSISDN",
            PartyIdType::Email => "EMAIL",
            PartyIdType::PersonalId => "PERSONAL_ID",
            PartyIdType::Business => "BUSINESS",
            PartyIdType::Device => "DEVICE",
            PartyIdType::AccountId => "ACCOUNT_ID",
            PartyIdType::Iban => "IBAN",
            PartyIdType::Alias => "ALIAS",
        }
    }
}

impl fmt::Display for PartyIdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A party (end user) registered at a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Party {
    pub display_name: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    /// Serialized as `YYYY-MM-DD`
    pub date_of_birth: Date,
    pub id_type: PartyIdType,
    pub id_value: String,
}

/// A switch participant with its callback endpoints and parties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Participant {
    /// Participant identifier, unique within the directory
    pub id: String,

    #[serde(rename = "type")]
    pub participant_type: ParticipantType,

    /// Settlement account identifier at the central ledger
    pub settlement_account_id: String,

    /// Admin endpoint of the participant's simulator
    pub simulator_admin_url: String,

    /// Callback endpoint for FSPIOP requests
    pub fspiop_callback_url: String,

    /// Callback endpoint for third-party requests
    pub thirdparty_callback_url: String,

    #[serde(default)]
    pub parties: Vec<Party>,
}

// ============================================================================
// Main Configuration Structure
// ============================================================================

/// Complete switch environment configuration
///
/// Built once at startup by [`crate::config::ConfigLoader`] and read-only
/// afterwards. Share it by reference or wrap it in an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Currency of the switch (ISO 4217 code)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Switch service endpoints
    #[serde(default)]
    pub urls: ServiceUrls,

    /// Endpoints passed to internal services for callback registration
    #[serde(default)]
    pub application_urls: ApplicationUrls,

    /// Participants (DFSPs, PISPs) with nested parties
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            urls: ServiceUrls::default(),
            application_urls: ApplicationUrls::default(),
            participants: Vec::new(),
        }
    }
}

impl GlobalConfig {
    /// Look up a participant by id
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// All participants of the given type, in directory order
    pub fn participants_of_type(
        &self,
        participant_type: ParticipantType,
    ) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(move |p| p.participant_type == participant_type)
    }

    /// Find the party registered under `id_type`/`id_value` and the participant holding it
    pub fn find_party(&self, id_type: PartyIdType, id_value: &str) -> Option<(&Participant, &Party)> {
        self.participants.iter().find_map(|participant| {
            participant
                .parties
                .iter()
                .find(|party| party.id_type == id_type && party.id_value == id_value)
                .map(|party| (participant, party))
        })
    }
}
