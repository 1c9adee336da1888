// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort remote mirroring for the Atelier intake service.
//!
//! Implements [`atelier_core::traits::RemoteStore`] against the hosted
//! realtime database's HTTP API. Nothing in this crate is load-bearing for
//! submission success; the local store remains the system of record.

pub mod client;

pub use client::{MONITOR_INTERVAL, RemoteSync};
