// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Notifier`] implementation that renders and sends the confirmation email.

use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::AtelierError;
use atelier_core::traits::Notifier;
use atelier_core::types::ConfirmationRequest;
use tracing::info;

use crate::mailer::Mailer;
use crate::template;

/// Sends confirmation emails through a [`Mailer`].
pub struct MailNotifier {
    mailer: Arc<dyn Mailer>,
}

impl MailNotifier {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl Notifier for MailNotifier {
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), AtelierError> {
        let html = template::confirmation_html(&request.name, request.service_type);
        let message_id = self
            .mailer
            .send(&request.email, template::confirmation_subject(), &html)
            .await?;
        info!(%message_id, "confirmation email sent");
        Ok(())
    }
}
