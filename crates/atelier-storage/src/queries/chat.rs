// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded chat history queries.
//!
//! The history holds at most [`CHAT_HISTORY_CAP`] messages. Appending past the
//! cap evicts the oldest rows in the same transaction, so readers never
//! observe an over-full history.

use std::str::FromStr;

use atelier_core::AtelierError;
use atelier_core::types::{ChatMessage, ChatSender};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

/// Maximum number of retained chat messages.
pub const CHAT_HISTORY_CAP: usize = 50;

const SESSION_KEY: &str = "chat_session_id";

/// Append a message, evicting the oldest rows beyond the cap.
pub async fn append_message(db: &Database, message: &ChatMessage) -> Result<(), AtelierError> {
    let message = message.clone();
    db.connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO chat_messages (text, sender) VALUES (?1, ?2)",
                params![message.text, message.sender.to_string()],
            )?;
            tx.execute(
                "DELETE FROM chat_messages WHERE seq NOT IN \
                 (SELECT seq FROM chat_messages ORDER BY seq DESC LIMIT ?1)",
                params![CHAT_HISTORY_CAP as i64],
            )?;
            tx.commit()?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// List retained messages oldest first.
pub async fn list_messages(db: &Database) -> Result<Vec<ChatMessage>, AtelierError> {
    db.connection()
        .call(|conn| {
            let mut stmt =
                conn.prepare("SELECT text, sender FROM chat_messages ORDER BY seq ASC")?;
            let rows = stmt.query_map([], |row| {
                let raw_sender: String = row.get(1)?;
                let sender = ChatSender::from_str(&raw_sender).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(ChatMessage {
                    text: row.get(0)?,
                    sender,
                })
            })?;
            let mut messages = Vec::new();
            for row in rows {
                messages.push(row?);
            }
            Ok(messages)
        })
        .await
        .map_err(map_tr_err)
}

/// Return the persistent chat session id, generating one on first use.
pub async fn get_or_create_session_id(db: &Database) -> Result<String, AtelierError> {
    let candidate = atelier_core::ids::session_id();
    db.connection()
        .call(move |conn| {
            let existing: Option<String> = conn
                .query_row(
                    "SELECT value FROM meta WHERE key = ?1",
                    params![SESSION_KEY],
                    |row| row.get(0),
                )
                .map(Some)
                .or_else(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => Ok(None),
                    other => Err(other),
                })?;
            match existing {
                Some(id) => Ok(id),
                None => {
                    conn.execute(
                        "INSERT INTO meta (key, value) VALUES (?1, ?2)",
                        params![SESSION_KEY, candidate],
                    )?;
                    Ok(candidate)
                }
            }
        })
        .await
        .map_err(map_tr_err)
}
