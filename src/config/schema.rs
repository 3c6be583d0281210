//! Declared configuration schema
//!
//! Every top-level field has a default, an optional environment variable
//! binding and a description. The same declaration drives the loader's
//! default layer, the strict undeclared-key check and the `schema` command.

use serde_json::{Map, Value};

use crate::config::error::ConfigError;
use crate::config::settings::{
    default_als_admin_url, default_central_ledger_admin_url, default_currency,
    default_fspiop_url, default_oracle_url,
};

/// Default value of a declared field
#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    Text(fn() -> String),
    EmptyList,
}

impl FieldDefault {
    /// Render the default for display
    pub fn display(&self) -> String {
        match self {
            FieldDefault::Text(default) => default(),
            FieldDefault::EmptyList => "[]".to_string(),
        }
    }
}

/// A declared configuration field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Dotted key path, e.g. `urls.alsAdmin`
    pub key: &'static str,
    /// Environment variable overriding the default
    pub env: Option<&'static str>,
    pub default: FieldDefault,
    pub doc: &'static str,
}

/// All declared fields, in document order
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "currency",
        env: Some("CURRENCY"),
        default: FieldDefault::Text(default_currency),
        doc: "The currency of the switch",
    },
    FieldSpec {
        key: "urls.fspiop",
        env: Some("FSPIOP_URL"),
        default: FieldDefault::Text(default_fspiop_url),
        doc: "Switch endpoint for the FSPIOP API",
    },
    FieldSpec {
        key: "urls.alsAdmin",
        env: Some("ALS_ADMIN_URL"),
        default: FieldDefault::Text(default_als_admin_url),
        doc: "Switch endpoint for the ALS admin API",
    },
    FieldSpec {
        key: "urls.centralLedgerAdmin",
        env: Some("CENTRAL_LEDGER_ADMIN_URL"),
        default: FieldDefault::Text(default_central_ledger_admin_url),
        doc: "Switch endpoint for the central-ledger admin API",
    },
    FieldSpec {
        key: "applicationUrls.oracle",
        env: Some("ORACLE_URL"),
        default: FieldDefault::Text(default_oracle_url),
        doc: "Oracle simulator endpoint, used to point the ALS to the oracle",
    },
    FieldSpec {
        key: "participants",
        env: None,
        default: FieldDefault::EmptyList,
        doc: "A list of participants (DFSPs, PISPs), with nested parties",
    },
];

const TOP_LEVEL_KEYS: &[&str] = &["currency", "urls", "applicationUrls", "participants"];
const URLS_KEYS: &[&str] = &["fspiop", "alsAdmin", "centralLedgerAdmin"];
const APPLICATION_URLS_KEYS: &[&str] = &["oracle"];
const PARTICIPANT_KEYS: &[&str] = &[
    "id",
    "type",
    "settlementAccountId",
    "simulatorAdminUrl",
    "fspiopCallbackUrl",
    "thirdpartyCallbackUrl",
    "parties",
];
const PARTY_KEYS: &[&str] = &[
    "displayName",
    "firstName",
    "middleName",
    "lastName",
    "dateOfBirth",
    "idType",
    "idValue",
];

/// Names of all environment variables bound to schema fields
pub fn bound_env_vars() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().filter_map(|field| field.env)
}

/// Check a configuration document against the schema
///
/// Applied both to the override file as written and to the merged result.
/// Fails on the first key that is not declared, reporting its full path, and
/// when `participants` is present but not an array. Type mismatches of
/// declared keys are left to typed deserialization.
pub fn check_document(document: &Value) -> Result<(), ConfigError> {
    let Some(root) = document.as_object() else {
        return Err(ConfigError::validation(
            "configuration",
            "Configuration root must be an object",
        ));
    };

    check_keys(root, TOP_LEVEL_KEYS, "")?;

    if let Some(Value::Object(urls)) = root.get("urls") {
        check_keys(urls, URLS_KEYS, "urls.")?;
    }
    if let Some(Value::Object(urls)) = root.get("applicationUrls") {
        check_keys(urls, APPLICATION_URLS_KEYS, "applicationUrls.")?;
    }

    match root.get("participants") {
        None | Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(ConfigError::validation(
                "participants",
                "`participants` must be an array",
            ));
        }
    }

    let participants = root
        .get("participants")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (i, participant) in participants.iter().enumerate() {
        let Some(participant) = participant.as_object() else {
            continue;
        };
        let prefix = format!("participants[{i}].");
        check_keys(participant, PARTICIPANT_KEYS, &prefix)?;

        match participant.get("parties") {
            None => {}
            Some(Value::Array(parties)) => {
                for (j, party) in parties.iter().enumerate() {
                    if let Some(party) = party.as_object() {
                        check_keys(party, PARTY_KEYS, &format!("{prefix}parties[{j}]."))?;
                    }
                }
            }
            Some(_) => {
                return Err(ConfigError::validation(
                    format!("{prefix}parties"),
                    "`parties` must be an array".to_string(),
                ));
            }
        }
    }

    Ok(())
}

fn check_keys(object: &Map<String, Value>, declared: &[&str], prefix: &str) -> Result<(), ConfigError> {
    match object.keys().find(|key| !declared.contains(&key.as_str())) {
        Some(key) => Err(ConfigError::validation(
            format!("{prefix}{key}"),
            format!("configuration param '{prefix}{key}' not declared in the schema"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_cover_all_bound_env_vars() {
        let vars: Vec<_> = bound_env_vars().collect();
        assert_eq!(
            vars,
            vec![
                "CURRENCY",
                "FSPIOP_URL",
                "ALS_ADMIN_URL",
                "CENTRAL_LEDGER_ADMIN_URL",
                "ORACLE_URL"
            ]
        );
    }

    #[test]
    fn test_field_default_display() {
        let participants = FIELDS.iter().find(|f| f.key == "participants").unwrap();
        assert_eq!(participants.default.display(), "[]");
        assert_eq!(FIELDS[0].default.display(), "USD");
    }

    #[test]
    fn test_check_document_accepts_declared_keys() {
        let document = json!({
            "currency": "EUR",
            "urls": { "fspiop": "a", "alsAdmin": "b", "centralLedgerAdmin": "c" },
            "applicationUrls": { "oracle": "d" },
            "participants": [{
                "id": "dfspa",
                "type": "DFSP",
                "parties": [{ "displayName": "x", "idValue": "1" }]
            }]
        });
        assert!(check_document(&document).is_ok());
    }

    #[test]
    fn test_check_document_rejects_unknown_top_level_key() {
        let err = check_document(&json!({ "ENV": "dev" })).unwrap_err();
        assert_eq!(err.field(), Some("ENV"));
        assert!(err.to_string().contains("not declared in the schema"));
    }

    #[test]
    fn test_check_document_rejects_unknown_nested_key() {
        let err = check_document(&json!({ "urls": { "als": "x" } })).unwrap_err();
        assert_eq!(err.field(), Some("urls.als"));
    }

    #[test]
    fn test_check_document_reports_party_path() {
        let document = json!({
            "participants": [
                { "id": "dfspa" },
                { "id": "dfspb", "parties": [{ "idValue": "1" }, { "nickname": "bob" }] }
            ]
        });
        let err = check_document(&document).unwrap_err();
        assert_eq!(err.field(), Some("participants[1].parties[1].nickname"));
    }

    #[test]
    fn test_check_document_requires_participants_array() {
        for participants in [json!("dfspa"), json!({ "id": "dfspa" }), json!(3)] {
            let err = check_document(&json!({ "participants": participants })).unwrap_err();
            assert_eq!(err.field(), Some("participants"));
            assert!(err.to_string().contains("`participants` must be an array"));
        }
    }

    #[test]
    fn test_check_document_requires_parties_array() {
        let document = json!({ "participants": [{ "id": "dfspa", "parties": {} }] });
        let err = check_document(&document).unwrap_err();
        assert_eq!(err.field(), Some("participants[0].parties"));
    }
}
