// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Atelier intake service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Atelier configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AtelierConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Local durable store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote sync client settings.
    #[serde(default)]
    pub sync: SyncConfig,

    /// Mail provider settings for the notification sender.
    #[serde(default)]
    pub mail: MailConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Admin review surface settings.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "atelier".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Local durable store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("atelier").join("atelier.db"))
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| "atelier.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Remote sync client configuration.
///
/// When `enabled` is false (or no endpoint is set), the submission pipeline
/// skips the remote mirror write silently.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Enable the best-effort remote mirror.
    #[serde(default)]
    pub enabled: bool,

    /// Base URL of the hosted realtime database's REST surface.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Application id within the hosted database.
    #[serde(default)]
    pub app_id: Option<String>,

    /// How long a submission waits for connection readiness before
    /// proceeding anyway, in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            app_id: None,
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

/// Mail provider configuration for the notification sender.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    /// Mail provider API key. `None` disables outbound confirmation email.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address for confirmation email.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Base URL of the mail provider's REST API.
    #[serde(default = "default_mail_endpoint")]
    pub endpoint: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from_address: default_from_address(),
            endpoint: default_mail_endpoint(),
        }
    }
}

fn default_from_address() -> String {
    "onboarding@resend.dev".to_string()
}

fn default_mail_endpoint() -> String {
    "https://api.resend.com".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    8080
}

/// Admin review surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Seconds between periodic full reloads of the admin snapshot.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    30
}
