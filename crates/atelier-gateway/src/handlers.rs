// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! The confirmation email endpoint keeps its exact response contract:
//! 405 for non-POST, 400 for malformed JSON, missing fields, or a bad email,
//! 500 with details when the provider fails, and 200 with the provider's
//! message id on success.

use std::str::FromStr;

use atelier_core::AtelierError;
use atelier_core::types::{ChatSender, ServiceType};
use atelier_intake::{FieldMap, validate};
use atelier_notify::template;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::server::GatewayState;

/// Request body for POST /api/send-confirmation-email.
///
/// Fields are optional so that missing keys produce the structured
/// "Missing required fields" response rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service_type: Option<ServiceType>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct MissingFieldsResponse {
    error: String,
    required: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct EmailFailureResponse {
    error: String,
    details: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailSuccessResponse {
    success: bool,
    message_id: String,
    message: String,
}

fn internal_error(e: AtelierError) -> Response {
    tracing::error!(error = %e, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// POST /api/send-confirmation-email
pub async fn post_send_confirmation_email(
    State(state): State<GatewayState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid JSON in request body".to_string(),
            }),
        )
            .into_response();
    };

    let (Some(name), Some(email), Some(service_type)) =
        (body.name, body.email, body.service_type)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(MissingFieldsResponse {
                error: "Missing required fields".to_string(),
                required: vec!["name", "email", "serviceType"],
            }),
        )
            .into_response();
    };

    if !validate::is_valid_email(&email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid email format".to_string(),
            }),
        )
            .into_response();
    }

    let Some(mailer) = &state.mailer else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(EmailFailureResponse {
                error: "Failed to send email".to_string(),
                details: "mail provider not configured".to_string(),
            }),
        )
            .into_response();
    };

    let html = template::confirmation_html(&name, service_type);
    match mailer
        .send(&email, template::confirmation_subject(), &html)
        .await
    {
        Ok(message_id) => (
            StatusCode::OK,
            Json(EmailSuccessResponse {
                success: true,
                message_id,
                message: "Confirmation email sent successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(EmailFailureResponse {
                error: "Failed to send email".to_string(),
                details: e.to_string(),
            }),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
struct ValidationFailureResponse {
    errors: std::collections::BTreeMap<String, String>,
}

/// POST /api/inquiries
///
/// Validates the raw field map and runs it through the submission pipeline.
/// Validation failures come back as a per-field error map with 422.
pub async fn post_inquiry(
    State(state): State<GatewayState>,
    payload: Result<Json<FieldMap>, JsonRejection>,
) -> Response {
    let Ok(Json(values)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid JSON in request body".to_string(),
            }),
        )
            .into_response();
    };

    let service_type = values
        .get("serviceType")
        .and_then(|v| ServiceType::from_str(v.trim()).ok());
    let errors = validate::validate_form(service_type, &values);
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationFailureResponse { errors }),
        )
            .into_response();
    }

    match state.pipeline.submit(values).await {
        Ok(inquiry) => (StatusCode::OK, Json(inquiry)).into_response(),
        Err(e) => internal_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
struct InquiryListResponse {
    inquiries: Vec<atelier_admin::InquiryCard>,
    stats: atelier_admin::InquiryStats,
}

/// GET /api/inquiries?filter=tob|toc
pub async fn get_inquiries(
    State(state): State<GatewayState>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = match params.filter.as_deref() {
        None | Some("all") => None,
        Some(raw) => match ServiceType::from_str(raw) {
            Ok(st) => Some(st),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("unknown service type filter: {raw}"),
                    }),
                )
                    .into_response();
            }
        },
    };

    let inquiries = match state.admin.load(filter).await {
        Ok(cards) => cards,
        Err(e) => return internal_error(e),
    };
    match state.admin.stats().await {
        Ok(stats) => (StatusCode::OK, Json(InquiryListResponse { inquiries, stats }))
            .into_response(),
        Err(e) => internal_error(e),
    }
}

/// DELETE /api/inquiries/{id}
pub async fn delete_inquiry(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Response {
    match state.admin.delete(&id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Inquiry not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

/// Request body for POST /api/chat/messages.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    pub sender: ChatSender,
}

#[derive(Debug, Serialize)]
struct ChatAcceptedResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatHistoryResponse {
    session_id: String,
    messages: Vec<atelier_core::types::ChatMessage>,
}

/// POST /api/chat/messages
pub async fn post_chat_message(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Response {
    match state.chat.record(&body.text, body.sender).await {
        Ok(()) => (StatusCode::OK, Json(ChatAcceptedResponse { success: true })).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/chat/messages
pub async fn get_chat_messages(State(state): State<GatewayState>) -> Response {
    match state.chat.history().await {
        Ok(messages) => (
            StatusCode::OK,
            Json(ChatHistoryResponse {
                session_id: state.chat.session_id().to_string(),
                messages,
            }),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/admin/snapshot
///
/// Serves the latest periodic snapshot when the refresh loop is running,
/// otherwise reads one on demand.
pub async fn get_admin_snapshot(State(state): State<GatewayState>) -> Response {
    match &state.snapshot {
        Some(rx) => (StatusCode::OK, Json(rx.borrow().clone())).into_response(),
        None => {
            let snapshot = atelier_admin::snapshot_now(&state.admin).await;
            (StatusCode::OK, Json(snapshot)).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
