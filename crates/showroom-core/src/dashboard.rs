//! # Dashboard
//!
//! The metrics overview screen: four stats cards, the most viewed listings,
//! a recent-activity feed, time spent per listing, and recent edits.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dealership Dashboard                               [Manage Inventory]  │
//! │                                                                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐ ┌─────────────┐       │
//! │  │ Page Visits │ │ Total Veh.  │ │ WhatsApp    │ │ Avg. Time   │       │
//! │  │ 2,847 +12.5%│ │ 47    +8.3% │ │ 156  +23.1% │ │ 4m 32s -2.3%│       │
//! │  └─────────────┘ └─────────────┘ └─────────────┘ └─────────────┘       │
//! │                                                                         │
//! │  Most Viewed         │ Recent Activity | Time Spent │ Recently Edited  │
//! │  1. 2024 Honda CR-V  │ John Smith edited ...        │ 2023 Toyota ...  │
//! │  2. ...              │ ...                          │ ...              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is read-only demo data. Nothing is derived from the live
//! inventory; the cards describe traffic the admin has no other source for.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::{group_thousands, Dollars};
use crate::types::Status;

// =============================================================================
// Trend
// =============================================================================

/// Period-over-period change, in tenths of a percent.
///
/// ```rust
/// use showroom_core::dashboard::Trend;
///
/// assert_eq!(Trend::from_tenths(125).to_string(), "+12.5%");
/// assert_eq!(Trend::from_tenths(-23).to_string(), "-2.3%");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Trend(i32);

impl Trend {
    pub const fn from_tenths(tenths: i32) -> Self {
        Trend(tenths)
    }

    pub const fn tenths(&self) -> i32 {
        self.0
    }

    /// Zero counts as up, like the card's arrow.
    pub const fn is_up(&self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_up() { '+' } else { '-' };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{}%", sign, abs / 10, abs % 10)
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// `272` → `"4m 32s"`, `242` → `"4m 02s"`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}

/// `2` → `"2 minutes ago"`, `60` → `"1 hour ago"`, `1500` → `"1 day ago"`.
pub fn relative_time(minutes_ago: u32) -> String {
    let (amount, unit) = match minutes_ago {
        0 => return "just now".to_string(),
        m if m < 60 => (m, "minute"),
        m if m < 24 * 60 => (m / 60, "hour"),
        m => (m / (24 * 60), "day"),
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} ago", amount, unit, plural)
}

// =============================================================================
// Metrics
// =============================================================================

/// Traffic numbers behind the four stats cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DealerMetrics {
    pub total_visits: u64,
    pub visits_trend: Trend,
    pub total_vehicles: u64,
    pub vehicles_trend: Trend,
    pub whatsapp_clicks: u64,
    pub whatsapp_trend: Trend,
    pub avg_time_spent_secs: u32,
    pub time_spent_trend: Trend,
}

/// One rendered stats card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub trend: Trend,
    pub description: String,
}

impl StatCard {
    fn new(title: &str, value: String, trend: Trend, description: &str) -> Self {
        StatCard {
            title: title.to_string(),
            value,
            trend,
            description: description.to_string(),
        }
    }
}

impl DealerMetrics {
    /// The four cards in screen order.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new(
                "Page Visits",
                group_thousands(self.total_visits),
                self.visits_trend,
                "This month",
            ),
            StatCard::new(
                "Total Vehicles",
                self.total_vehicles.to_string(),
                self.vehicles_trend,
                "In inventory",
            ),
            StatCard::new(
                "WhatsApp Clicks",
                self.whatsapp_clicks.to_string(),
                self.whatsapp_trend,
                "This week",
            ),
            StatCard::new(
                "Avg. Time Spent",
                format_duration(self.avg_time_spent_secs),
                self.time_spent_trend,
                "Per listing view",
            ),
        ]
    }
}

// =============================================================================
// Activity Feed
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Edit,
    View,
    Whatsapp,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Edit => "edit",
            ActivityKind::View => "view",
            ActivityKind::Whatsapp => "whatsapp",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            ActivityKind::Edit => "edited",
            ActivityKind::View => "viewed",
            ActivityKind::Whatsapp => "contacted about",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub vehicle: String,
    /// Team member name, or "Customer" for site visitors.
    pub user: String,
    pub minutes_ago: u32,
}

impl ActivityEntry {
    /// `"John Smith edited 2023 Toyota Camry"`
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.user, self.kind.verb(), self.vehicle)
    }

    pub fn when(&self) -> String {
        relative_time(self.minutes_ago)
    }
}

// =============================================================================
// Listings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PopularVehicle {
    pub name: String,
    pub views: u32,
    pub price: Dollars,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecentEdit {
    pub name: String,
    pub edited_by: String,
    pub minutes_ago: u32,
    /// Short badge text, e.g. "Price updated".
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListingTime {
    pub vehicle: String,
    pub avg_time_secs: u32,
    pub views: u32,
}

impl ListingTime {
    pub fn avg_time_display(&self) -> String {
        format_duration(self.avg_time_secs)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the overview screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: DealerMetrics,
    pub recent_activity: Vec<ActivityEntry>,
    pub popular_vehicles: Vec<PopularVehicle>,
    pub recently_edited: Vec<RecentEdit>,
    pub time_spent: Vec<ListingTime>,
}

impl DashboardSnapshot {
    /// Listings by views, highest first, at most `limit`. Ties keep their
    /// original order.
    pub fn most_viewed(&self, limit: usize) -> Vec<&PopularVehicle> {
        let mut ranked: Vec<&PopularVehicle> = self.popular_vehicles.iter().collect();
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(limit);
        ranked
    }

    /// Activity newest first.
    pub fn activity_feed(&self) -> Vec<&ActivityEntry> {
        let mut feed: Vec<&ActivityEntry> = self.recent_activity.iter().collect();
        feed.sort_by_key(|entry| entry.minutes_ago);
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_dashboard;

    #[test]
    fn test_trend_display() {
        assert_eq!(Trend::from_tenths(0).to_string(), "+0.0%");
        assert_eq!(Trend::from_tenths(231).to_string(), "+23.1%");
        assert_eq!(Trend::from_tenths(-5).to_string(), "-0.5%");
        assert!(!Trend::from_tenths(-23).is_up());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(272), "4m 32s");
        assert_eq!(format_duration(242), "4m 02s");
        assert_eq!(format_duration(0), "0m 00s");
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(relative_time(0), "just now");
        assert_eq!(relative_time(1), "1 minute ago");
        assert_eq!(relative_time(12), "12 minutes ago");
        assert_eq!(relative_time(60), "1 hour ago");
        assert_eq!(relative_time(179), "2 hours ago");
        assert_eq!(relative_time(3 * 24 * 60), "3 days ago");
    }

    #[test]
    fn test_demo_cards() {
        let cards = demo_dashboard().metrics.cards();
        let rendered: Vec<(&str, &str)> = cards
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str()))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Page Visits", "2,847"),
                ("Total Vehicles", "47"),
                ("WhatsApp Clicks", "156"),
                ("Avg. Time Spent", "4m 32s"),
            ]
        );
        assert_eq!(cards[3].trend.to_string(), "-2.3%");
    }

    #[test]
    fn test_activity_summary() {
        let dashboard = demo_dashboard();
        let feed = dashboard.activity_feed();
        assert_eq!(feed[0].summary(), "John Smith edited 2023 Toyota Camry");
        assert_eq!(feed[0].when(), "2 minutes ago");
        assert_eq!(
            feed[2].summary(),
            "Sarah Johnson contacted about 2022 Ford F-150"
        );
    }

    #[test]
    fn test_most_viewed_ranks_and_limits() {
        let mut dashboard = demo_dashboard();
        dashboard.popular_vehicles.reverse();

        let top: Vec<&str> = dashboard
            .most_viewed(3)
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(top, vec!["2024 Honda CR-V", "2023 Toyota Camry", "2022 Ford F-150"]);
        assert_eq!(dashboard.most_viewed(50).len(), 5);
    }
}
