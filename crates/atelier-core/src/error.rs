// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Atelier intake service.

use thiserror::Error;

/// The primary error type used across all Atelier crates.
///
/// The submission pipeline treats only `Storage` during the local write as
/// fatal; `Sync` and `Notify` are degraded-mode errors that callers log and
/// swallow at the pipeline boundary.
#[derive(Debug, Error)]
pub enum AtelierError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Local durable store errors (database open, query failure, malformed rows).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Remote sync client errors (connection, write/delete round trip).
    #[error("sync error: {message}")]
    Sync {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Notification sender errors (mail provider failure, non-2xx response).
    #[error("notify error: {message}")]
    Notify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
