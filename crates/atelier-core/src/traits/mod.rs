// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Atelier external boundaries.
//!
//! The submission pipeline and admin surface depend on these seams rather
//! than on concrete clients, so both remote persistence and notification can
//! be absent, degraded, or mocked without touching the orchestration logic.

pub mod notify;
pub mod remote;

pub use notify::Notifier;
pub use remote::RemoteStore;
