// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Form validation and submission orchestration for the Atelier intake
//! service.
//!
//! The submission pipeline is the only write path for inquiries: clean,
//! store locally, mirror remotely, notify. Validation lives here too so the
//! gateway and any embedded form share one rule set.

pub mod chat;
pub mod fields;
pub mod form;
pub mod pipeline;
pub mod validate;

pub use chat::ChatRecorder;
pub use fields::FieldMap;
pub use form::FormState;
pub use pipeline::SubmissionPipeline;
