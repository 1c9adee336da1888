// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-and-delete surface over stored inquiries.
//!
//! Reads are served from the local store only. Deleting removes the local
//! row unconditionally and then, when the row carried a remote id, attempts
//! the mirror delete as well; mirror failures are logged and swallowed so
//! the admin's view and the system of record stay consistent.

use std::sync::Arc;

use atelier_core::AtelierError;
use atelier_core::traits::RemoteStore;
use atelier_core::types::{Inquiry, ServiceType};
use atelier_storage::Database;
use atelier_storage::queries::inquiries;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

const NOT_PROVIDED: &str = "Not provided";

/// One labeled display field on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetail {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready view of one inquiry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCard {
    pub id: String,
    pub service_type: ServiceType,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub created_at: String,
    pub details: Vec<CardDetail>,
}

/// Aggregate counts shown in the admin header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InquiryStats {
    pub total: usize,
    pub today: usize,
    pub tob: usize,
    pub toc: usize,
}

fn detail(label: &'static str, value: &Option<String>) -> CardDetail {
    CardDetail {
        label,
        value: value.clone().unwrap_or_else(|| NOT_PROVIDED.to_string()),
    }
}

fn card_from(inquiry: Inquiry) -> InquiryCard {
    let details = match inquiry.service_type {
        ServiceType::Tob => vec![
            detail("Company", &inquiry.company),
            detail("Industry", &inquiry.industry),
            detail("Company size", &inquiry.company_size),
            detail("Role", &inquiry.role),
            detail("Challenges", &inquiry.challenges),
            detail("Objectives", &inquiry.objectives),
            detail("Budget", &inquiry.budget),
            detail("Timeline", &inquiry.timeline),
        ],
        ServiceType::Toc => vec![
            detail("City", &inquiry.city),
            detail("Timezone", &inquiry.timezone),
            detail("Service interest", &inquiry.service_interest),
            detail("Vision", &inquiry.vision),
            detail("Referral", &inquiry.referral),
            detail("Travel budget", &inquiry.travel_budget),
            detail("Travel dates", &inquiry.travel_dates),
        ],
    };
    let mut details = details;
    details.push(detail("Additional", &inquiry.additional));
    InquiryCard {
        id: inquiry.id,
        service_type: inquiry.service_type,
        name: inquiry.name,
        contact: inquiry.contact,
        email: inquiry.email,
        created_at: inquiry.created_at,
        details,
    }
}

/// The admin review surface.
pub struct AdminSurface {
    db: Database,
    remote: Option<Arc<dyn RemoteStore>>,
}

impl AdminSurface {
    pub fn new(db: Database, remote: Option<Arc<dyn RemoteStore>>) -> Self {
        Self { db, remote }
    }

    /// Display cards newest first, optionally filtered by track.
    pub async fn load(
        &self,
        filter: Option<ServiceType>,
    ) -> Result<Vec<InquiryCard>, AtelierError> {
        let inquiries = inquiries::list_inquiries(&self.db, filter).await?;
        Ok(inquiries.into_iter().map(card_from).collect())
    }

    /// Aggregate counts over all stored inquiries.
    pub async fn stats(&self) -> Result<InquiryStats, AtelierError> {
        let all = inquiries::list_inquiries(&self.db, None).await?;
        let today = Utc::now().date_naive();
        let mut stats = InquiryStats {
            total: all.len(),
            ..Default::default()
        };
        for inquiry in &all {
            match inquiry.service_type {
                ServiceType::Tob => stats.tob += 1,
                ServiceType::Toc => stats.toc += 1,
            }
            let is_today = DateTime::parse_from_rfc3339(&inquiry.created_at)
                .map(|dt| dt.with_timezone(&Utc).date_naive() == today)
                .unwrap_or(false);
            if is_today {
                stats.today += 1;
            }
        }
        Ok(stats)
    }

    /// Delete an inquiry. Returns whether a local row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, AtelierError> {
        let existing = inquiries::get_inquiry(&self.db, id).await?;
        let Some(existing) = existing else {
            return Ok(false);
        };
        let removed = inquiries::delete_inquiry(&self.db, id).await?;
        if removed {
            info!(id, "inquiry deleted");
            if let (Some(remote), Some(remote_id)) = (&self.remote, &existing.remote_id) {
                if let Err(e) = remote.delete("inquiries", remote_id).await {
                    warn!(id, error = %e, "remote mirror delete failed");
                }
            }
        }
        Ok(removed)
    }
}
