// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for the local durable store.

pub mod chat;
pub mod inquiries;
