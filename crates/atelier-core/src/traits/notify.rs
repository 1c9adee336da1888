// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sender trait for the email-confirmation boundary.

use async_trait::async_trait;

use crate::error::AtelierError;
use crate::types::ConfirmationRequest;

/// One-shot outbound confirmation after a successful submission.
///
/// Fire-and-forget from the pipeline's perspective: the call is spawned
/// detached and its failure never reaches the submitting caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), AtelierError>;
}
