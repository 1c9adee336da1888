// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded chat history recording with best-effort remote mirroring.

use std::sync::Arc;

use atelier_core::AtelierError;
use atelier_core::traits::RemoteStore;
use atelier_core::types::{ChatMessage, ChatSender};
use atelier_storage::Database;
use atelier_storage::queries::chat;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tracing::warn;

/// Remote collection receiving mirrored chat messages.
pub const CHAT_COLLECTION: &str = "chat_messages";

/// Remote collection tracking per-session activity.
pub const SESSION_COLLECTION: &str = "chat_sessions";

/// Records chat messages into the local bounded history and mirrors them to
/// the remote store when one is configured.
pub struct ChatRecorder {
    db: Database,
    remote: Option<Arc<dyn RemoteStore>>,
    session_id: String,
}

impl ChatRecorder {
    /// Create a recorder bound to the persistent chat session.
    pub async fn new(
        db: Database,
        remote: Option<Arc<dyn RemoteStore>>,
    ) -> Result<Self, AtelierError> {
        let session_id = chat::get_or_create_session_id(&db).await?;
        Ok(Self {
            db,
            remote,
            session_id,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Append a message. The local write is fatal; the remote mirror is
    /// best-effort and its failures are logged and swallowed.
    pub async fn record(&self, text: &str, sender: ChatSender) -> Result<(), AtelierError> {
        let message = ChatMessage {
            text: text.to_string(),
            sender,
        };
        chat::append_message(&self.db, &message).await?;

        if let Some(remote) = &self.remote {
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            let record_id = uuid::Uuid::new_v4().to_string();
            let fields = json!({
                "sessionId": self.session_id,
                "message": message.text,
                "sender": message.sender,
                "timestamp": timestamp,
            });
            if let Err(e) = remote.write(CHAT_COLLECTION, &record_id, fields).await {
                warn!(error = %e, "chat message mirror failed");
            }
            let session_fields = json!({ "lastMessageAt": timestamp });
            if let Err(e) = remote
                .write(SESSION_COLLECTION, &self.session_id, session_fields)
                .await
            {
                warn!(error = %e, "chat session update failed");
            }
        }

        Ok(())
    }

    /// The retained history, oldest first.
    pub async fn history(&self) -> Result<Vec<ChatMessage>, AtelierError> {
        chat::list_messages(&self.db).await
    }
}
