// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inquiry persistence queries.
//!
//! The `inquiries` table is the system of record. Every submission lands here
//! before any remote mirroring is attempted, and admin reads are served from
//! here exclusively.

use std::str::FromStr;

use atelier_core::AtelierError;
use atelier_core::types::{Inquiry, ServiceType};
use rusqlite::{Row, params};

use crate::database::{Database, map_tr_err};

const INQUIRY_COLUMNS: &str = "id, service_type, name, contact, email, created_at, \
     company, industry, company_size, role, challenges, objectives, budget, timeline, \
     city, timezone, service_interest, vision, referral, travel_budget, travel_dates, \
     additional, remote_id";

fn inquiry_from_row(row: &Row<'_>) -> rusqlite::Result<Inquiry> {
    let raw_type: String = row.get(1)?;
    let service_type = ServiceType::from_str(&raw_type).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Inquiry {
        id: row.get(0)?,
        service_type,
        name: row.get(2)?,
        contact: row.get(3)?,
        email: row.get(4)?,
        created_at: row.get(5)?,
        company: row.get(6)?,
        industry: row.get(7)?,
        company_size: row.get(8)?,
        role: row.get(9)?,
        challenges: row.get(10)?,
        objectives: row.get(11)?,
        budget: row.get(12)?,
        timeline: row.get(13)?,
        city: row.get(14)?,
        timezone: row.get(15)?,
        service_interest: row.get(16)?,
        vision: row.get(17)?,
        referral: row.get(18)?,
        travel_budget: row.get(19)?,
        travel_dates: row.get(20)?,
        additional: row.get(21)?,
        remote_id: row.get(22)?,
    })
}

/// Insert a new inquiry row. Fails if the id already exists.
pub async fn insert_inquiry(db: &Database, inquiry: &Inquiry) -> Result<(), AtelierError> {
    let inquiry = inquiry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO inquiries (id, service_type, name, contact, email, created_at, \
                 company, industry, company_size, role, challenges, objectives, budget, timeline, \
                 city, timezone, service_interest, vision, referral, travel_budget, travel_dates, \
                 additional, remote_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, \
                 ?17, ?18, ?19, ?20, ?21, ?22, ?23)",
                params![
                    inquiry.id,
                    inquiry.service_type.to_string(),
                    inquiry.name,
                    inquiry.contact,
                    inquiry.email,
                    inquiry.created_at,
                    inquiry.company,
                    inquiry.industry,
                    inquiry.company_size,
                    inquiry.role,
                    inquiry.challenges,
                    inquiry.objectives,
                    inquiry.budget,
                    inquiry.timeline,
                    inquiry.city,
                    inquiry.timezone,
                    inquiry.service_interest,
                    inquiry.vision,
                    inquiry.referral,
                    inquiry.travel_budget,
                    inquiry.travel_dates,
                    inquiry.additional,
                    inquiry.remote_id,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// List inquiries newest first, optionally restricted to one service type.
pub async fn list_inquiries(
    db: &Database,
    filter: Option<ServiceType>,
) -> Result<Vec<Inquiry>, AtelierError> {
    db.connection()
        .call(move |conn| {
            let sql = format!(
                "SELECT {INQUIRY_COLUMNS} FROM inquiries {} ORDER BY created_at DESC",
                if filter.is_some() {
                    "WHERE service_type = ?1"
                } else {
                    ""
                }
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = match filter {
                Some(st) => stmt.query_map(params![st.to_string()], inquiry_from_row)?,
                None => stmt.query_map([], inquiry_from_row)?,
            };
            let mut inquiries = Vec::new();
            for row in rows {
                inquiries.push(row?);
            }
            Ok(inquiries)
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch a single inquiry by id.
pub async fn get_inquiry(db: &Database, id: &str) -> Result<Option<Inquiry>, AtelierError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {INQUIRY_COLUMNS} FROM inquiries WHERE id = ?1"
            ))?;
            let mut rows = stmt.query_map(params![id], inquiry_from_row)?;
            match rows.next() {
                Some(row) => Ok(Some(row?)),
                None => Ok(None),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Delete an inquiry by id. Returns whether a row was removed.
pub async fn delete_inquiry(db: &Database, id: &str) -> Result<bool, AtelierError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let affected = conn.execute("DELETE FROM inquiries WHERE id = ?1", params![id])?;
            Ok(affected > 0)
        })
        .await
        .map_err(map_tr_err)
}

/// Record the mirror's id on a locally stored inquiry after a successful
/// remote write.
pub async fn set_remote_id(db: &Database, id: &str, remote_id: &str) -> Result<(), AtelierError> {
    let id = id.to_string();
    let remote_id = remote_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE inquiries SET remote_id = ?1 WHERE id = ?2",
                params![remote_id, id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("test.db"), true).await.unwrap();
        (db, dir)
    }

    fn make_inquiry(id: &str, service_type: ServiceType, created_at: &str) -> Inquiry {
        let mut inquiry = Inquiry {
            id: id.to_string(),
            service_type,
            name: "Jane Doe".into(),
            contact: "+1 555 0100".into(),
            email: "jane@example.com".into(),
            created_at: created_at.to_string(),
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
            additional: None,
            remote_id: None,
        };
        match service_type {
            ServiceType::Tob => {
                inquiry.company = Some("Acme Corp".into());
                inquiry.challenges = Some("brand positioning".into());
            }
            ServiceType::Toc => {
                inquiry.city = Some("Paris".into());
                inquiry.vision = Some("a signature look".into());
                inquiry.referral = Some("instagram".into());
            }
        }
        inquiry
    }

    #[tokio::test]
    async fn insert_and_get_round_trips_all_fields() {
        let (db, _dir) = test_db().await;
        let inquiry = make_inquiry("inq_1_aaaaaaaaa", ServiceType::Toc, "2026-08-01T10:00:00Z");
        insert_inquiry(&db, &inquiry).await.unwrap();
        let fetched = get_inquiry(&db, "inq_1_aaaaaaaaa").await.unwrap().unwrap();
        assert_eq!(fetched, inquiry);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let (db, _dir) = test_db().await;
        let inquiry = make_inquiry("inq_1_aaaaaaaaa", ServiceType::Tob, "2026-08-01T10:00:00Z");
        insert_inquiry(&db, &inquiry).await.unwrap();
        assert!(insert_inquiry(&db, &inquiry).await.is_err());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_orders_newest_first_and_filters() {
        let (db, _dir) = test_db().await;
        let a = make_inquiry("inq_a", ServiceType::Tob, "2026-08-01T10:00:00Z");
        let b = make_inquiry("inq_b", ServiceType::Toc, "2026-08-02T10:00:00Z");
        let c = make_inquiry("inq_c", ServiceType::Tob, "2026-08-03T10:00:00Z");
        for inquiry in [&a, &b, &c] {
            insert_inquiry(&db, inquiry).await.unwrap();
        }

        let all = list_inquiries(&db, None).await.unwrap();
        let ids: Vec<_> = all.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["inq_c", "inq_b", "inq_a"]);

        let tob = list_inquiries(&db, Some(ServiceType::Tob)).await.unwrap();
        assert_eq!(tob.len(), 2);
        assert!(tob.iter().all(|i| i.service_type == ServiceType::Tob));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let (db, _dir) = test_db().await;
        let inquiry = make_inquiry("inq_del", ServiceType::Toc, "2026-08-01T10:00:00Z");
        insert_inquiry(&db, &inquiry).await.unwrap();
        assert!(delete_inquiry(&db, "inq_del").await.unwrap());
        assert!(!delete_inquiry(&db, "inq_del").await.unwrap());
        assert!(get_inquiry(&db, "inq_del").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn set_remote_id_updates_existing_row() {
        let (db, _dir) = test_db().await;
        let inquiry = make_inquiry("inq_rid", ServiceType::Tob, "2026-08-01T10:00:00Z");
        insert_inquiry(&db, &inquiry).await.unwrap();
        set_remote_id(&db, "inq_rid", "7e6f2c1a-0000-4000-8000-000000000000")
            .await
            .unwrap();
        let fetched = get_inquiry(&db, "inq_rid").await.unwrap().unwrap();
        assert_eq!(
            fetched.remote_id.as_deref(),
            Some("7e6f2c1a-0000-4000-8000-000000000000")
        );
        db.close().await.unwrap();
    }
}
