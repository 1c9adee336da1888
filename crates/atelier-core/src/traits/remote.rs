// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote sync store trait for the hosted realtime database boundary.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AtelierError;

/// Best-effort mirror of the local durable store.
///
/// All three operations are fallible and must never block overall submission
/// success: callers log and swallow errors. Queuing and retry are the remote
/// service's internal concern and are not modeled here.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Wait until the underlying connection reports ready, or the timeout
    /// elapses. Returns `false` on timeout and never errors — callers proceed
    /// regardless, since a queued write may still succeed.
    async fn wait_for_connection(&self, timeout: Duration) -> bool;

    /// Write one record's fields into the named collection.
    async fn write(
        &self,
        collection: &str,
        record_id: &str,
        fields: serde_json::Value,
    ) -> Result<(), AtelierError>;

    /// Delete one record from the named collection.
    async fn delete(&self, collection: &str, record_id: &str) -> Result<(), AtelierError>;
}
