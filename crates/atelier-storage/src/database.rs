// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Async SQLite database handle.
//!
//! All access goes through a single [`tokio_rusqlite::Connection`], which owns
//! a dedicated thread for the underlying rusqlite connection. Writes are
//! therefore serialized without any locking on our side, and reads queue
//! behind writes in submission order. Cloning [`Database`] clones the handle,
//! not the connection.

use std::path::Path;

use atelier_core::AtelierError;
use tokio_rusqlite::Connection;
use tracing::{debug, info};

/// Convert a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> AtelierError {
    AtelierError::Storage {
        source: Box::new(e),
    }
}

/// Handle to the local durable store.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if necessary) the database at `path`, apply pragmas and
    /// run any pending migrations.
    ///
    /// Parent directories are created if missing. With `wal_mode` set the
    /// journal runs in WAL mode, which lets reads proceed concurrently with
    /// the single writer.
    pub async fn open(path: impl AsRef<Path>, wal_mode: bool) -> Result<Self, AtelierError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| AtelierError::Storage {
                    source: Box::new(e),
                })?;
            }
        }

        let conn = Connection::open(path.clone())
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        let journal_mode = if wal_mode { "WAL" } else { "DELETE" };
        conn.call(move |conn| -> Result<(), AtelierError> {
            conn.execute_batch(&format!(
                "PRAGMA journal_mode = {journal_mode};\n\
                 PRAGMA synchronous = NORMAL;\n\
                 PRAGMA foreign_keys = ON;\n\
                 PRAGMA busy_timeout = 5000;"
            ))
            .map_err(|e| AtelierError::Storage {
                source: Box::new(e),
            })?;
            crate::migrations::run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(|e| AtelierError::Storage {
            source: Box::new(e),
        })?;

        info!(path = %path.display(), journal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Access the underlying async connection.
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoint the WAL (a no-op in rollback mode) and close the connection.
    pub async fn close(self) -> Result<(), AtelierError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("database closed");
        self.conn.close().await.map_err(map_tr_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("atelier.db");
        let db = Database::open(&path, true).await.unwrap();
        assert!(path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_is_idempotent_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.db");
        let db = Database::open(&path, true).await.unwrap();
        db.close().await.unwrap();
        // Reopening must not re-run applied migrations.
        let db = Database::open(&path, true).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn rollback_journal_mode_is_supported() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("plain.db"), false)
            .await
            .unwrap();
        db.close().await.unwrap();
    }
}
