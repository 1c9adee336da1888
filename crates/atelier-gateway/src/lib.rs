// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Atelier intake service.
//!
//! Exposes the submission pipeline, the confirmation email endpoint, the
//! bounded chat history, and the admin review surface over a small REST API.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
