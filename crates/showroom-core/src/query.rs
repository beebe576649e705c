//! # Query View
//!
//! Pure derivations over the inventory: the search-filtered listing and the
//! stats cards. Nothing here is stored; callers recompute on every render.
//!
//! ## Search Semantics
//! ```text
//! term = "cr"
//!
//!   2023 Toyota Camry   make "toyota"  model "camry"  year "2023"   ✓ (camry)
//!   2024 Honda CR-V     make "honda"   model "cr-v"   year "2024"   ✓ (cr-v)
//!   2022 Ford F-150     make "ford"    model "f-150"  year "2022"   ✗
//! ```
//! A record matches when the lowercased term is a substring of the
//! lowercased make, the lowercased model, or the decimal year. An empty term
//! matches everything. Input order is preserved.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::price::Dollars;
use crate::types::{Status, VehicleRecord};

/// Shown when a search has no hits.
pub const NO_MATCHES_MESSAGE: &str = "No vehicles match your search criteria.";

/// Shown when the inventory itself is empty.
pub const EMPTY_INVENTORY_MESSAGE: &str = "Add your first vehicle to get started.";

// =============================================================================
// Filter
// =============================================================================

/// Returns the records matching `term`, in input order.
///
/// ```rust
/// use showroom_core::query::filter;
/// use showroom_core::seed::demo_vehicles;
///
/// let records = demo_vehicles();
/// let hits = filter(&records, "2024");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].model, "CR-V");
/// ```
pub fn filter<'a>(records: &'a [VehicleRecord], term: &str) -> Vec<&'a VehicleRecord> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_term(record: &VehicleRecord, needle: &str) -> bool {
    record.make.to_lowercase().contains(needle)
        || record.model.to_lowercase().contains(needle)
        || record.year.to_string().contains(needle)
}

/// Message for an empty result list.
///
/// Returns `None` when there is something to show.
pub fn empty_message(shown: usize, term: &str) -> Option<&'static str> {
    if shown > 0 {
        None
    } else if term.is_empty() {
        Some(EMPTY_INVENTORY_MESSAGE)
    } else {
        Some(NO_MATCHES_MESSAGE)
    }
}

// =============================================================================
// Aggregate
// =============================================================================

/// Numbers shown on the inventory stats cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub available_count: usize,
    pub sold_count: usize,
    /// Mean price rounded half up; zero for an empty collection.
    pub average_price: Dollars,
}

/// Computes [`Stats`] over `records`.
///
/// Always computed over whatever slice is passed in; the stats cards pass
/// the whole inventory, not the filtered view.
pub fn aggregate(records: &[VehicleRecord]) -> Stats {
    let count_status = |status: Status| records.iter().filter(|r| r.status == status).count();
    let total_price: u128 = records.iter().map(|r| u128::from(r.price.whole())).sum();

    Stats {
        total: records.len(),
        available_count: count_status(Status::Available),
        sold_count: count_status(Status::Sold),
        average_price: Dollars::average(total_price, records.len()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
