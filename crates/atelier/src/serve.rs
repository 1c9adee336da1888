// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `atelier serve` command implementation.
//!
//! Wires the local durable store, the optional remote mirror, the optional
//! mail provider, the submission pipeline, the admin refresh loop, and the
//! HTTP gateway, then serves until interrupted.

use std::sync::Arc;
use std::time::Duration;

use atelier_admin::{AdminSurface, start_refresh};
use atelier_config::model::AtelierConfig;
use atelier_core::AtelierError;
use atelier_core::traits::{Notifier, RemoteStore};
use atelier_gateway::{GatewayState, ServerConfig, start_server};
use atelier_intake::{ChatRecorder, SubmissionPipeline};
use atelier_notify::{MailNotifier, Mailer, ResendMailer};
use atelier_storage::Database;
use atelier_sync::RemoteSync;
use tracing::{info, warn};

/// Runs the `atelier serve` command.
pub async fn run_serve(config: AtelierConfig) -> Result<(), AtelierError> {
    init_tracing(&config.service.log_level);

    info!("starting atelier serve");

    let db = Database::open(&config.storage.database_path, config.storage.wal_mode).await?;

    let remote: Option<Arc<dyn RemoteStore>> = if config.sync.enabled {
        match (&config.sync.endpoint, &config.sync.app_id) {
            (Some(endpoint), Some(app_id)) => {
                info!(endpoint, "remote sync enabled");
                Some(Arc::new(RemoteSync::connect(endpoint, app_id)))
            }
            _ => {
                // Validation rejects this combination; tolerate it here too.
                warn!("sync enabled without endpoint and app_id, running local-only");
                None
            }
        }
    } else {
        info!("remote sync disabled, running local-only");
        None
    };

    let mailer: Option<Arc<dyn Mailer>> = match &config.mail.api_key {
        Some(api_key) => Some(Arc::new(ResendMailer::new(
            api_key,
            &config.mail.from_address,
            &config.mail.endpoint,
        ))),
        None => {
            info!("mail api key not set, confirmation emails disabled");
            None
        }
    };
    let notifier: Option<Arc<dyn Notifier>> = mailer
        .clone()
        .map(|m| Arc::new(MailNotifier::new(m)) as Arc<dyn Notifier>);

    let connect_timeout = Duration::from_millis(config.sync.connect_timeout_ms);
    let pipeline = Arc::new(SubmissionPipeline::new(
        db.clone(),
        remote.clone(),
        notifier,
        connect_timeout,
    ));
    let admin = Arc::new(AdminSurface::new(db.clone(), remote.clone()));
    let snapshot = start_refresh(
        admin.clone(),
        Duration::from_secs(config.admin.refresh_interval_secs),
    );
    let chat = Arc::new(ChatRecorder::new(db.clone(), remote).await?);

    let state = GatewayState {
        pipeline,
        admin,
        chat,
        mailer,
        snapshot: Some(snapshot),
    };
    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    tokio::select! {
        result = start_server(&server_config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
            db.close().await?;
            Ok(())
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("atelier={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
