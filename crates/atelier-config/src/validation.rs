// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths, plausible addresses, and non-zero
//! intervals.

use crate::diagnostic::ConfigError;
use crate::model::AtelierConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &AtelierConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let host = config.gateway.host.trim();
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.sync.enabled && config.sync.endpoint.is_none() {
        errors.push(ConfigError::Validation {
            message: "sync.endpoint is required when sync.enabled = true".to_string(),
        });
    }

    if config.sync.enabled && config.sync.app_id.is_none() {
        errors.push(ConfigError::Validation {
            message: "sync.app_id is required when sync.enabled = true".to_string(),
        });
    }

    if config.sync.connect_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "sync.connect_timeout_ms must be greater than zero".to_string(),
        });
    }

    if !config.mail.from_address.contains('@') {
        errors.push(ConfigError::Validation {
            message: format!(
                "mail.from_address `{}` is not a plausible email address",
                config.mail.from_address
            ),
        });
    }

    if config.admin.refresh_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "admin.refresh_interval_secs must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AtelierConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = AtelierConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))
        ));
    }

    #[test]
    fn sync_enabled_requires_endpoint_and_app_id() {
        let mut config = AtelierConfig::default();
        config.sync.enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("sync.endpoint"))
        ));
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("sync.app_id"))
        ));
    }

    #[test]
    fn zero_refresh_interval_fails_validation() {
        let mut config = AtelierConfig::default();
        config.admin.refresh_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("refresh_interval_secs"))
        ));
    }

    #[test]
    fn bad_from_address_fails_validation() {
        let mut config = AtelierConfig::default();
        config.mail.from_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("from_address"))
        ));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = AtelierConfig::default();
        config.storage.database_path = "".to_string();
        config.admin.refresh_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
