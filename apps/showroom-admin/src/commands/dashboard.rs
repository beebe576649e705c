//! # Dashboard Commands
//!
//! The metrics overview screen, rendered in one call.

use serde::Serialize;
use tracing::debug;

use crate::state::DashboardState;
use showroom_core::dashboard::{ActivityKind, ListingTime, PopularVehicle, RecentEdit, StatCard};

/// Rows in the "Most Viewed Vehicles" card.
pub const MOST_VIEWED_LIMIT: usize = 5;

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLine {
    pub kind: ActivityKind,
    /// "John Smith edited 2023 Toyota Camry"
    pub summary: String,
    /// "2 minutes ago"
    pub when: String,
}

/// Everything the overview screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub cards: Vec<StatCard>,
    pub most_viewed: Vec<PopularVehicle>,
    pub recent_activity: Vec<ActivityLine>,
    pub time_spent: Vec<ListingTime>,
    pub recently_edited: Vec<RecentEdit>,
}

/// Builds the overview: stats cards, top listings by views, the activity
/// feed newest first, time spent per listing and recent edits.
pub fn dashboard_overview(dashboard: &DashboardState) -> DashboardView {
    debug!("dashboard_overview command");

    let snapshot = dashboard.snapshot();
    DashboardView {
        cards: snapshot.metrics.cards(),
        most_viewed: snapshot
            .most_viewed(MOST_VIEWED_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        recent_activity: snapshot
            .activity_feed()
            .into_iter()
            .map(|entry| ActivityLine {
                kind: entry.kind,
                summary: entry.summary(),
                when: entry.when(),
            })
            .collect(),
        time_spent: snapshot.time_spent.clone(),
        recently_edited: snapshot.recently_edited.clone(),
    }
}
