// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Atelier intake service.
//!
//! Provides the workspace error type, the inquiry and chat domain types,
//! client-side id generation, and the adapter traits for the two external
//! boundaries (remote sync store, notification sender).

pub mod error;
pub mod ids;
pub mod traits;
pub mod types;

pub use error::AtelierError;
pub use traits::{Notifier, RemoteStore};
pub use types::{ChatMessage, ChatSender, ConfirmationRequest, Inquiry, ServiceType};
