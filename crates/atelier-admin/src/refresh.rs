// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Periodic snapshot loop behind the admin view.
//!
//! The surface is re-read on a fixed interval and published over a watch
//! channel; consumers always see the latest complete snapshot. A failed
//! reload keeps the previous data and carries the error message, so a
//! transient storage fault degrades the view instead of blanking it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tracing::warn;

use crate::surface::{AdminSurface, InquiryCard, InquiryStats};

/// One complete refresh of the admin view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminSnapshot {
    pub cards: Vec<InquiryCard>,
    pub stats: InquiryStats,
    /// Set when the last reload failed; `cards` and `stats` then hold the
    /// previous successful snapshot.
    pub error: Option<String>,
}

async fn take_snapshot(surface: &AdminSurface, previous: &AdminSnapshot) -> AdminSnapshot {
    let loaded = surface.load(None).await;
    let stats = surface.stats().await;
    match (loaded, stats) {
        (Ok(cards), Ok(stats)) => AdminSnapshot {
            cards,
            stats,
            error: None,
        },
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "admin snapshot reload failed");
            AdminSnapshot {
                cards: previous.cards.clone(),
                stats: previous.stats.clone(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Start the refresh loop. The loop stops once every receiver is dropped.
pub fn start_refresh(
    surface: Arc<AdminSurface>,
    interval: Duration,
) -> watch::Receiver<AdminSnapshot> {
    let (tx, rx) = watch::channel(AdminSnapshot::default());
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let previous = tx.borrow().clone();
            let snapshot = take_snapshot(&surface, &previous).await;
            if tx.send(snapshot).is_err() {
                return;
            }
        }
    });
    rx
}

/// Load one snapshot immediately, outside the refresh loop.
pub async fn snapshot_now(surface: &AdminSurface) -> AdminSnapshot {
    take_snapshot(surface, &AdminSnapshot::default()).await
}
