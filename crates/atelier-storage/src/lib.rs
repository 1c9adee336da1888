// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local durable persistence for the Atelier intake service.
//!
//! Backed by SQLite through `tokio-rusqlite`, with refinery-managed schema
//! migrations. The local database is the system of record: a submission is
//! accepted if and only if its row lands here, regardless of what the remote
//! mirror or the mail provider do afterwards.

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use database::Database;
pub use queries::chat::CHAT_HISTORY_CAP;
