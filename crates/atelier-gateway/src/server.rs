// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the intake, chat, and
//! admin APIs.

use std::sync::Arc;

use atelier_admin::{AdminSnapshot, AdminSurface};
use atelier_core::AtelierError;
use atelier_intake::{ChatRecorder, SubmissionPipeline};
use atelier_notify::Mailer;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::watch;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The only write path for inquiries.
    pub pipeline: Arc<SubmissionPipeline>,
    /// Read-and-delete surface over stored inquiries.
    pub admin: Arc<AdminSurface>,
    /// Bounded chat history recorder.
    pub chat: Arc<ChatRecorder>,
    /// Mail provider for the confirmation endpoint (None = not configured).
    pub mailer: Option<Arc<dyn Mailer>>,
    /// Periodic admin snapshot, when the refresh loop is running.
    pub snapshot: Option<watch::Receiver<AdminSnapshot>>,
}

/// Gateway server configuration (mirrors GatewayConfig from atelier-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the full route table. Separated from [`start_server`] so tests can
/// drive the router without binding a socket.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route(
            "/api/send-confirmation-email",
            post(handlers::post_send_confirmation_email),
        )
        .route(
            "/api/inquiries",
            post(handlers::post_inquiry).get(handlers::get_inquiries),
        )
        .route(
            "/api/inquiries/{id}",
            axum::routing::delete(handlers::delete_inquiry),
        )
        .route(
            "/api/chat/messages",
            post(handlers::post_chat_message).get(handlers::get_chat_messages),
        )
        .route("/api/admin/snapshot", get(handlers::get_admin_snapshot))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), AtelierError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AtelierError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AtelierError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
    }
}
