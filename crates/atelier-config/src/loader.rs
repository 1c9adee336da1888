// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./atelier.toml` > `~/.config/atelier/atelier.toml`
//! > `/etc/atelier/atelier.toml` with environment variable overrides via
//! `ATELIER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AtelierConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/atelier/atelier.toml` (system-wide)
/// 3. `~/.config/atelier/atelier.toml` (user XDG config)
/// 4. `./atelier.toml` (local directory)
/// 5. `ATELIER_*` environment variables
pub fn load_config() -> Result<AtelierConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<AtelierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AtelierConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AtelierConfig::default()))
        .merge(Toml::file("/etc/atelier/atelier.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("atelier/atelier.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("atelier.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `ATELIER_STORAGE_DATABASE_PATH` must map
/// to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("ATELIER_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("sync_", "sync.", 1)
            .replacen("mail_", "mail.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("admin_", "admin.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_string_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[storage]
database_path = "/tmp/atelier-test.db"

[sync]
enabled = true
endpoint = "https://realtime.example"
app_id = "app-1"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.database_path, "/tmp/atelier-test.db");
        assert!(config.sync.enabled);
        assert_eq!(
            config.sync.endpoint.as_deref(),
            Some("https://realtime.example")
        );
        // Untouched sections keep defaults.
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn env_mapping_preserves_underscored_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ATELIER_STORAGE_DATABASE_PATH", "/tmp/env.db");
            jail.set_env("ATELIER_MAIL_FROM_ADDRESS", "studio@atelier.example");
            jail.set_env("ATELIER_SYNC_CONNECT_TIMEOUT_MS", "250");
            let config: AtelierConfig = Figment::new()
                .merge(Serialized::defaults(AtelierConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.storage.database_path, "/tmp/env.db");
            assert_eq!(config.mail.from_address, "studio@atelier.example");
            assert_eq!(config.sync.connect_timeout_ms, 250);
            Ok(())
        });
    }
}
