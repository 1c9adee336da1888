// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail provider abstraction and the Resend implementation.

use async_trait::async_trait;
use atelier_core::AtelierError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sends a single HTML email and returns the provider's message id.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, AtelierError>;
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

/// [`Mailer`] backed by the Resend HTTP API.
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: String,
    from: String,
    base_url: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            from: from.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, AtelierError> {
        let body = SendEmailBody {
            from: &self.from,
            to: [to],
            subject,
            html,
        };
        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AtelierError::Notify {
                message: "mail provider request failed".to_string(),
                source: Some(Box::new(e)),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = match resp.json::<ProviderError>().await {
                Ok(e) => e.message,
                Err(_) => format!("status {status}"),
            };
            return Err(AtelierError::Notify {
                message: detail,
                source: None,
            });
        }

        let parsed: SendEmailResponse =
            resp.json().await.map_err(|e| AtelierError::Notify {
                message: "mail provider returned malformed response".to_string(),
                source: Some(Box::new(e)),
            })?;
        debug!(message_id = %parsed.id, "confirmation email accepted by provider");
        Ok(parsed.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn send_posts_bearer_authed_payload_and_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test_key"))
            .and(body_partial_json(json!({
                "from": "studio@atelier.example",
                "to": ["jane@example.com"],
                "subject": "Welcome"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg-42"})))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ResendMailer::new("re_test_key", "studio@atelier.example", &server.uri());
        let id = mailer
            .send("jane@example.com", "Welcome", "<p>hi</p>")
            .await
            .unwrap();
        assert_eq!(id, "msg-42");
    }

    #[tokio::test]
    async fn provider_rejection_surfaces_its_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "invalid from"})),
            )
            .mount(&server)
            .await;

        let mailer = ResendMailer::new("re_test_key", "bad", &server.uri());
        let err = mailer
            .send("jane@example.com", "Welcome", "<p>hi</p>")
            .await
            .unwrap_err();
        match err {
            AtelierError::Notify { message, .. } => assert_eq!(message, "invalid from"),
            other => panic!("expected Notify error, got {other:?}"),
        }
    }
}
