// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Atelier workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two mutually exclusive inquiry schemas: to-business and to-consumer.
///
/// Selects which conditional field group is semantically valid on an
/// [`Inquiry`]; immutable once a record is created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Tob,
    Toc,
}

/// A lead-capture form submission.
///
/// Exactly one of the two conditional field groups is populated, selected by
/// `service_type`. Optional fields absent from input are `None` and are
/// omitted from serialized output rather than stored as empty strings. The
/// local store's copy is authoritative; `remote_id` is present only after a
/// successful remote mirror write and is used exclusively to target later
/// remote deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Client-generated unique identifier, never reused or mutated.
    pub id: String,
    pub service_type: ServiceType,
    pub name: String,
    pub contact: String,
    pub email: String,
    /// RFC 3339 UTC timestamp, set once at creation; sole descending sort key.
    pub created_at: String,

    // tob group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objectives: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    // toc group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_dates: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
}

/// Who authored a chat message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Ai,
}

/// One entry in the bounded chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: ChatSender,
}

/// Payload handed to the notification sender after a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest {
    pub name: String,
    pub email: String,
    pub service_type: ServiceType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn service_type_round_trips_lowercase() {
        assert_eq!(ServiceType::Tob.to_string(), "tob");
        assert_eq!(ServiceType::Toc.to_string(), "toc");
        assert_eq!(ServiceType::from_str("tob").unwrap(), ServiceType::Tob);
        assert_eq!(ServiceType::from_str("toc").unwrap(), ServiceType::Toc);
        assert!(ServiceType::from_str("b2b").is_err());
    }

    #[test]
    fn service_type_serde_matches_wire_names() {
        let json = serde_json::to_string(&ServiceType::Tob).unwrap();
        assert_eq!(json, "\"tob\"");
        let parsed: ServiceType = serde_json::from_str("\"toc\"").unwrap();
        assert_eq!(parsed, ServiceType::Toc);
    }

    #[test]
    fn inquiry_omits_absent_optionals() {
        let inquiry = Inquiry {
            id: "inq_1".into(),
            service_type: ServiceType::Toc,
            name: "Jane".into(),
            contact: "+1 555 1234".into(),
            email: "jane@x.com".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
            company: None,
            industry: None,
            company_size: None,
            role: None,
            challenges: None,
            objectives: None,
            budget: None,
            timeline: None,
            city: Some("Paris".into()),
            timezone: None,
            service_interest: None,
            vision: Some("quiet luxury".into()),
            referral: Some("friend".into()),
            travel_budget: None,
            travel_dates: None,
            additional: None,
            remote_id: None,
        };
        let json = serde_json::to_string(&inquiry).unwrap();
        assert!(json.contains("\"serviceType\":\"toc\""));
        assert!(json.contains("\"city\":\"Paris\""));
        assert!(!json.contains("company"));
        assert!(!json.contains("challenges"));
        assert!(!json.contains("remoteId"));
    }

    #[test]
    fn chat_message_serde_uses_lowercase_sender() {
        let msg = ChatMessage {
            text: "hello".into(),
            sender: ChatSender::Ai,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"text":"hello","sender":"ai"}"#);
    }

    #[test]
    fn confirmation_request_uses_camel_case() {
        let req = ConfirmationRequest {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            service_type: ServiceType::Toc,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"serviceType\":\"toc\""));
    }
}
