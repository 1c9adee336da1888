// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin review surface for the Atelier intake service.
//!
//! Read-only listing and stats over the local store, destructive delete with
//! best-effort mirror cleanup, and a periodic snapshot loop for polling
//! consumers.

pub mod refresh;
pub mod surface;

pub use refresh::{AdminSnapshot, snapshot_now, start_refresh};
pub use surface::{AdminSurface, CardDetail, InquiryCard, InquiryStats};
