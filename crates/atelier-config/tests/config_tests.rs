// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Atelier configuration system.

use atelier_config::diagnostic::{ConfigError, suggest_key};
use atelier_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_atelier_config() {
    let toml = r#"
[service]
name = "atelier-test"
log_level = "debug"

[storage]
database_path = "/tmp/atelier.db"
wal_mode = false

[sync]
enabled = true
endpoint = "https://realtime.example"
app_id = "app-091dee0e"
connect_timeout_ms = 2500

[mail]
api_key = "re_123"
from_address = "studio@atelier.example"

[gateway]
host = "0.0.0.0"
port = 9090

[admin]
refresh_interval_secs = 15
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "atelier-test");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.storage.database_path, "/tmp/atelier.db");
    assert!(!config.storage.wal_mode);
    assert!(config.sync.enabled);
    assert_eq!(config.sync.app_id.as_deref(), Some("app-091dee0e"));
    assert_eq!(config.sync.connect_timeout_ms, 2500);
    assert_eq!(config.mail.api_key.as_deref(), Some("re_123"));
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 9090);
    assert_eq!(config.admin.refresh_interval_secs, 15);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.service.name, "atelier");
    assert_eq!(config.service.log_level, "info");
    assert!(config.storage.wal_mode);
    assert!(!config.sync.enabled);
    assert_eq!(config.sync.connect_timeout_ms, 5000);
    assert!(config.mail.api_key.is_none());
    assert_eq!(config.mail.from_address, "onboarding@resend.dev");
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.admin.refresh_interval_secs, 30);
}

/// Unknown field in a section produces an UnknownField error.
#[test]
fn unknown_field_in_storage_produces_error() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;
    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("databse_path"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The validating entry point converts figment errors into diagnostics with
/// a fuzzy suggestion for the typo.
#[test]
fn load_and_validate_str_suggests_correction() {
    let toml = r#"
[mail]
from_adress = "studio@atelier.example"
"#;
    let errors = load_and_validate_str(toml).expect_err("typo should fail");
    let found = errors.iter().any(|e| match e {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => key == "from_adress" && suggestion.as_deref() == Some("from_address"),
        _ => false,
    });
    assert!(found, "expected UnknownKey with from_address suggestion");
}

/// Semantic validation runs after successful deserialization.
#[test]
fn load_and_validate_str_collects_semantic_errors() {
    let toml = r#"
[sync]
enabled = true

[admin]
refresh_interval_secs = 0
"#;
    let errors = load_and_validate_str(toml).expect_err("semantic errors expected");
    assert!(errors.len() >= 3, "endpoint, app_id, and interval errors");
    assert!(errors
        .iter()
        .all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Wrong value type maps to an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[gateway]
port = "not-a-port"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject bad type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "expected a type diagnostic, got: {errors:?}"
    );
}

#[test]
fn suggestion_threshold_filters_noise() {
    assert_eq!(suggest_key("qqqqq", &["endpoint", "app_id"]), None);
    assert_eq!(
        suggest_key("endpont", &["endpoint", "app_id"]),
        Some("endpoint".to_string())
    );
}
