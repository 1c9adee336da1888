// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The submission pipeline.
//!
//! Four steps in order: clean the raw field map, write the local durable row,
//! mirror to the remote store, and hand off the confirmation email. Only the
//! local write is fatal. The remote and notification steps degrade to a
//! warning log, and the notification runs detached so provider latency never
//! delays the caller's response.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use atelier_core::AtelierError;
use atelier_core::traits::{Notifier, RemoteStore};
use atelier_core::types::{ConfirmationRequest, Inquiry, ServiceType};
use atelier_storage::Database;
use atelier_storage::queries::inquiries;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tracing::{info, warn};

use crate::fields::{self, FieldMap};

/// Remote collection receiving mirrored inquiries.
pub const INQUIRY_COLLECTION: &str = "inquiries";

/// Orchestrates one submission end to end.
pub struct SubmissionPipeline {
    db: Database,
    remote: Option<Arc<dyn RemoteStore>>,
    notifier: Option<Arc<dyn Notifier>>,
    connect_timeout: Duration,
}

impl SubmissionPipeline {
    pub fn new(
        db: Database,
        remote: Option<Arc<dyn RemoteStore>>,
        notifier: Option<Arc<dyn Notifier>>,
        connect_timeout: Duration,
    ) -> Self {
        Self {
            db,
            remote,
            notifier,
            connect_timeout,
        }
    }

    /// Accept a validated field map and run it through the pipeline.
    ///
    /// Returns the stored inquiry, with `remote_id` populated when the mirror
    /// write succeeded. Callers are expected to have run
    /// [`crate::validate::validate_form`] first; a structurally unusable map
    /// here is an internal error, not a validation result.
    pub async fn submit(&self, values: FieldMap) -> Result<Inquiry, AtelierError> {
        let mut inquiry = clean(&values)?;

        inquiries::insert_inquiry(&self.db, &inquiry).await?;
        info!(id = %inquiry.id, service_type = %inquiry.service_type, "inquiry stored");

        if let Some(remote) = &self.remote {
            if !remote.wait_for_connection(self.connect_timeout).await {
                warn!(id = %inquiry.id, "remote store not connected, attempting write anyway");
            }
            let record_id = uuid::Uuid::new_v4().to_string();
            match remote
                .write(INQUIRY_COLLECTION, &record_id, remote_payload(&inquiry))
                .await
            {
                Ok(()) => {
                    // The row is already durable; a failed write-back must not
                    // turn a stored submission into a caller-visible error.
                    match inquiries::set_remote_id(&self.db, &inquiry.id, &record_id).await {
                        Ok(()) => inquiry.remote_id = Some(record_id),
                        Err(e) => {
                            warn!(id = %inquiry.id, error = %e, "remote id write-back failed");
                        }
                    }
                }
                Err(e) => {
                    warn!(id = %inquiry.id, error = %e, "remote mirror write failed");
                }
            }
        }

        if let Some(notifier) = &self.notifier {
            let notifier = Arc::clone(notifier);
            let request = ConfirmationRequest {
                name: inquiry.name.clone(),
                email: inquiry.email.clone(),
                service_type: inquiry.service_type,
            };
            tokio::spawn(async move {
                if let Err(e) = notifier.send_confirmation(&request).await {
                    warn!(error = %e, "confirmation email failed");
                }
            });
        }

        Ok(inquiry)
    }
}

fn take(values: &FieldMap, key: &str) -> Option<String> {
    values
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn require(values: &FieldMap, key: &str) -> Result<String, AtelierError> {
    take(values, key).ok_or_else(|| AtelierError::Internal(format!("submission missing {key}")))
}

/// Build a stored inquiry from the raw field map: trims every value, drops
/// empties, and keeps only base fields plus the selected track's group.
fn clean(values: &FieldMap) -> Result<Inquiry, AtelierError> {
    let service_type = values
        .get("serviceType")
        .and_then(|v| ServiceType::from_str(v.trim()).ok())
        .ok_or_else(|| AtelierError::Internal("submission missing serviceType".to_string()))?;

    let mut inquiry = Inquiry {
        id: atelier_core::ids::inquiry_id(),
        service_type,
        name: require(values, "name")?,
        contact: require(values, "contact")?,
        email: require(values, "email")?,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        company: None,
        industry: None,
        company_size: None,
        role: None,
        challenges: None,
        objectives: None,
        budget: None,
        timeline: None,
        city: None,
        timezone: None,
        service_interest: None,
        vision: None,
        referral: None,
        travel_budget: None,
        travel_dates: None,
        additional: take(values, fields::ADDITIONAL_FIELD),
        remote_id: None,
    };

    match service_type {
        ServiceType::Tob => {
            inquiry.company = take(values, "company");
            inquiry.industry = take(values, "industry");
            inquiry.company_size = take(values, "companySize");
            inquiry.role = take(values, "role");
            inquiry.challenges = take(values, "challenges");
            inquiry.objectives = take(values, "objectives");
            inquiry.budget = take(values, "budget");
            inquiry.timeline = take(values, "timeline");
        }
        ServiceType::Toc => {
            inquiry.city = take(values, "city");
            inquiry.timezone = take(values, "timezone");
            inquiry.service_interest = take(values, "serviceInterest");
            inquiry.vision = take(values, "vision");
            inquiry.referral = take(values, "referral");
            inquiry.travel_budget = take(values, "travelBudget");
            inquiry.travel_dates = take(values, "travelDates");
        }
    }

    Ok(inquiry)
}

/// Fields mirrored to the remote store: the base trio, the track's summary
/// trio, and the free-text note. Absent values are omitted rather than sent
/// as empty strings.
fn remote_payload(inquiry: &Inquiry) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    map.insert("name".to_string(), json!(inquiry.name));
    map.insert("contact".to_string(), json!(inquiry.contact));
    map.insert("email".to_string(), json!(inquiry.email));
    map.insert("serviceType".to_string(), json!(inquiry.service_type));
    map.insert("createdAt".to_string(), json!(inquiry.created_at));
    let trio: [(&str, &Option<String>); 3] = match inquiry.service_type {
        ServiceType::Tob => [
            ("company", &inquiry.company),
            ("challenges", &inquiry.challenges),
            ("objectives", &inquiry.objectives),
        ],
        ServiceType::Toc => [
            ("city", &inquiry.city),
            ("vision", &inquiry.vision),
            ("referral", &inquiry.referral),
        ],
    };
    for (key, value) in trio {
        if let Some(value) = value {
            map.insert(key.to_string(), json!(value));
        }
    }
    if let Some(additional) = &inquiry.additional {
        map.insert(fields::ADDITIONAL_FIELD.to_string(), json!(additional));
    }
    serde_json::Value::Object(map)
}
