// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound confirmation email for the Atelier intake service.
//!
//! A thin provider client behind the [`Mailer`] trait plus the template
//! rendering used by the submission pipeline's fire-and-forget notification
//! step.

pub mod mailer;
pub mod sender;
pub mod template;

pub use mailer::{Mailer, ResendMailer};
pub use sender::MailNotifier;
