//! Demo participant directory
//!
//! DEMO DATA ONLY. This fixture is never merged into loaded configuration;
//! it backs the `init` command, which writes it out as a starting-point
//! override file, and it is used by tests.

use jiff::civil::date;

use crate::config::{GlobalConfig, Participant, ParticipantType, Party, PartyIdType};

/// A complete demo configuration: default endpoints plus three participants
pub fn demo_config() -> GlobalConfig {
    GlobalConfig {
        participants: demo_participants(),
        ..GlobalConfig::default()
    }
}

/// Two DFSPs with one party each and a PISP without parties
pub fn demo_participants() -> Vec<Participant> {
    vec![
        Participant {
            id: "dfspa".to_string(),
            participant_type: ParticipantType::Dfsp,
            settlement_account_id: "1".to_string(),
            simulator_admin_url: "http://dfspa-backend:3000".to_string(),
            fspiop_callback_url: "http://dfspa-sdk-scheme-adapter:4000".to_string(),
            thirdparty_callback_url: "http://dfspa-thirdparty-sdk:4005".to_string(),
            parties: vec![Party {
                display_name: "Alice Alpaca".to_string(),
                first_name: "Alice".to_string(),
                middle_name: Some("K".to_string()),
                last_name: "Alpaca".to_string(),
                date_of_birth: date(1970, 1, 1),
                id_type: PartyIdType::Msisdn,
                id_value: "123456789".to_string(),
            }],
        },
        Participant {
            id: "dfspb".to_string(),
            participant_type: ParticipantType::Dfsp,
            settlement_account_id: "2".to_string(),
            simulator_admin_url: "http://dfspb-backend:3000".to_string(),
            fspiop_callback_url: "http://dfspb-sdk-scheme-adapter:4000".to_string(),
            thirdparty_callback_url: "http://dfspb-thirdparty-sdk:4005".to_string(),
            parties: vec![Party {
                display_name: "Bob Beaver".to_string(),
                first_name: "Bob".to_string(),
                middle_name: None,
                last_name: "Beaver".to_string(),
                date_of_birth: date(1980, 2, 20),
                id_type: PartyIdType::Msisdn,
                id_value: "987654321".to_string(),
            }],
        },
        Participant {
            id: "pispa".to_string(),
            participant_type: ParticipantType::Pisp,
            settlement_account_id: "3".to_string(),
            simulator_admin_url: "http://pispa-backend:3000".to_string(),
            fspiop_callback_url: "http://pispa-sdk-scheme-adapter:4000".to_string(),
            thirdparty_callback_url: "http://pispa-thirdparty-sdk:4005".to_string(),
            parties: vec![],
        },
    ]
}
