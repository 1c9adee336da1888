// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted realtime database.
//!
//! The client keeps a background monitor task that probes the service status
//! endpoint on a fixed interval and publishes readiness over a watch channel.
//! Readiness gates nothing: callers may write while disconnected and the
//! remote service is expected to queue, so every failure here is reported as
//! an error for the caller to log and swallow.

use std::time::Duration;

use async_trait::async_trait;
use atelier_core::AtelierError;
use atelier_core::traits::RemoteStore;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// How often the background monitor re-probes the status endpoint.
pub const MONITOR_INTERVAL: Duration = Duration::from_secs(2);

/// Client for the remote mirror, holding a background connection monitor.
pub struct RemoteSync {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    ready: watch::Receiver<bool>,
    monitor: JoinHandle<()>,
}

impl RemoteSync {
    /// Connect to the remote service and start the connection monitor.
    pub fn connect(endpoint: &str, app_id: &str) -> Self {
        Self::connect_with_interval(endpoint, app_id, MONITOR_INTERVAL)
    }

    /// As [`connect`](Self::connect), with a custom monitor interval.
    pub fn connect_with_interval(endpoint: &str, app_id: &str, interval: Duration) -> Self {
        let http = reqwest::Client::new();
        let base_url = endpoint.trim_end_matches('/').to_string();
        let app_id = app_id.to_string();
        let (tx, ready) = watch::channel(false);

        let monitor = tokio::spawn(monitor_loop(
            http.clone(),
            format!("{base_url}/apps/{app_id}/status"),
            tx,
            interval,
        ));

        Self {
            http,
            base_url,
            app_id,
            ready,
            monitor,
        }
    }

    /// Whether the last status probe succeeded.
    pub fn is_connected(&self) -> bool {
        *self.ready.borrow()
    }

    fn record_url(&self, collection: &str, record_id: &str) -> String {
        format!(
            "{}/apps/{}/collections/{collection}/records/{record_id}",
            self.base_url, self.app_id
        )
    }
}

impl Drop for RemoteSync {
    fn drop(&mut self) {
        self.monitor.abort();
    }
}

async fn monitor_loop(
    http: reqwest::Client,
    status_url: String,
    tx: watch::Sender<bool>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let up = match http.get(&status_url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(error = %e, "status probe failed");
                false
            }
        };
        let was_up = *tx.borrow();
        if up != was_up {
            if up {
                info!("remote sync connection established");
            } else {
                warn!("remote sync connection lost");
            }
        }
        if tx.send(up).is_err() {
            // All receivers dropped; the client is gone.
            return;
        }
    }
}

#[async_trait]
impl RemoteStore for RemoteSync {
    async fn wait_for_connection(&self, timeout: Duration) -> bool {
        let mut ready = self.ready.clone();
        if *ready.borrow() {
            return true;
        }
        matches!(
            tokio::time::timeout(timeout, ready.wait_for(|up| *up)).await,
            Ok(Ok(_))
        )
    }

    async fn write(
        &self,
        collection: &str,
        record_id: &str,
        fields: serde_json::Value,
    ) -> Result<(), AtelierError> {
        let url = self.record_url(collection, record_id);
        let resp = self
            .http
            .put(&url)
            .json(&fields)
            .send()
            .await
            .map_err(|e| AtelierError::Sync {
                message: format!("write to {collection} failed"),
                source: Some(Box::new(e)),
            })?;
        if !resp.status().is_success() {
            return Err(AtelierError::Sync {
                message: format!(
                    "write to {collection} rejected with status {}",
                    resp.status()
                ),
                source: None,
            });
        }
        debug!(collection, record_id, "remote write acknowledged");
        Ok(())
    }

    async fn delete(&self, collection: &str, record_id: &str) -> Result<(), AtelierError> {
        let url = self.record_url(collection, record_id);
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| AtelierError::Sync {
                message: format!("delete from {collection} failed"),
                source: Some(Box::new(e)),
            })?;
        if !resp.status().is_success() {
            return Err(AtelierError::Sync {
                message: format!(
                    "delete from {collection} rejected with status {}",
                    resp.status()
                ),
                source: None,
            });
        }
        debug!(collection, record_id, "remote delete acknowledged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn wait_for_connection_succeeds_once_status_is_up() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/app-1/status"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client =
            RemoteSync::connect_with_interval(&server.uri(), "app-1", Duration::from_millis(20));
        assert!(client.wait_for_connection(Duration::from_secs(2)).await);
        assert!(client.is_connected());
    }

    #[tokio::test]
    async fn wait_for_connection_times_out_while_status_is_down() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/app-1/status"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client =
            RemoteSync::connect_with_interval(&server.uri(), "app-1", Duration::from_millis(20));
        assert!(!client.wait_for_connection(Duration::from_millis(150)).await);
    }

    #[tokio::test]
    async fn write_puts_fields_to_record_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/apps/app-1/collections/inquiries/records/rec-9"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = RemoteSync::connect_with_interval(
            &server.uri(),
            "app-1",
            Duration::from_secs(3600),
        );
        client
            .write("inquiries", "rec-9", json!({"name": "Jane"}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn write_maps_rejection_to_sync_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = RemoteSync::connect_with_interval(
            &server.uri(),
            "app-1",
            Duration::from_secs(3600),
        );
        let err = client
            .write("inquiries", "rec-9", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, AtelierError::Sync { .. }));
    }

    #[tokio::test]
    async fn delete_targets_record_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/apps/app-1/collections/inquiries/records/rec-9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = RemoteSync::connect_with_interval(
            &server.uri(),
            "app-1",
            Duration::from_secs(3600),
        );
        client.delete("inquiries", "rec-9").await.unwrap();
    }
}
