//! # Inventory Commands
//!
//! Read commands for the vehicle table and stats cards, plus removal.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Vehicle Inventory                                   [+ Add Vehicle]    │
//! │                                                                         │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐               │
//! │  │ Total  2 │ │ Avail. 2 │ │ Sold   0 │ │ Avg $30,250  │ ◄─ inventory_ │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────────┘    stats      │
//! │                                                                         │
//! │  [ Search by make, model, or year... ]  ◄─── search_vehicles(term)     │
//! │                                                                         │
//! │  2023 Toyota Camry    $28,500   15,000 miles   used   [✎] [🗑]          │
//! │  2024 Honda CR-V      $32,000    5,000 miles   cert.  [✎] [🗑]          │
//! │                                                  │     ▲                │
//! │                                 open_edit_dialog ┘     └ remove_vehicle │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::notify::{Notification, Notifier};
use crate::state::InventoryState;
use showroom_core::query::{self, Stats};
use showroom_core::VehicleRecord;

/// The vehicle table for one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    /// Matching records in store order.
    pub vehicles: Vec<VehicleRecord>,

    /// Stats over the whole inventory, not just the matches.
    pub stats: Stats,

    pub search_term: String,

    /// Set when `vehicles` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Every vehicle, in insertion order.
pub fn list_vehicles(inventory: &InventoryState) -> Vec<VehicleRecord> {
    debug!("list_vehicles command");
    inventory.with_session(|s| s.store.list().to_vec())
}

/// Filters the table by make, model, or year.
///
/// ## Matching
/// - Empty term: every vehicle
/// - Otherwise: lowercased make or model contains the term, or the year's
///   digits contain it. The term is used as typed.
pub fn search_vehicles(inventory: &InventoryState, term: &str) -> InventoryView {
    debug!(term = %term, "search_vehicles command");

    inventory.with_session(|s| {
        let records = s.store.list();
        let vehicles: Vec<VehicleRecord> =
            query::filter(records, term).into_iter().cloned().collect();
        let empty_message = query::empty_message(vehicles.len(), term).map(str::to_string);

        InventoryView {
            stats: query::aggregate(records),
            search_term: term.to_string(),
            empty_message,
            vehicles,
        }
    })
}

/// Numbers for the four stats cards.
pub fn inventory_stats(inventory: &InventoryState) -> Stats {
    debug!("inventory_stats command");
    inventory.with_session(|s| query::aggregate(s.store.list()))
}

/// Removes a vehicle by id.
///
/// Removing an id that isn't there is a no-op and sends no notification.
pub fn remove_vehicle(
    inventory: &InventoryState,
    notifier: &dyn Notifier,
    id: &str,
) -> Option<VehicleRecord> {
    debug!(id = %id, "remove_vehicle command");

    let removed = inventory.with_session_mut(|s| s.store.remove(id));
    if let Some(record) = &removed {
        notifier.notify(Notification::vehicle_removed(record));
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use showroom_core::query::{EMPTY_INVENTORY_MESSAGE, NO_MATCHES_MESSAGE};
    use showroom_core::seed::demo_vehicles;
    use showroom_core::{Dollars, InventoryStore};

    fn demo_state() -> InventoryState {
        InventoryState::new(InventoryStore::with_seed(demo_vehicles()).unwrap())
    }

    #[test]
    fn test_search_by_make_and_year() {
        let inventory = demo_state();

        let view = search_vehicles(&inventory, "toyota");
        assert_eq!(view.vehicles.len(), 1);
        assert_eq!(view.vehicles[0].id, "1");
        assert_eq!(view.empty_message, None);

        let view = search_vehicles(&inventory, "2024");
        assert_eq!(view.vehicles.len(), 1);
        assert_eq!(view.vehicles[0].model, "CR-V");
    }

    #[test]
    fn test_search_without_matches() {
        let view = search_vehicles(&demo_state(), "tesla");
        assert!(view.vehicles.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(NO_MATCHES_MESSAGE));
        assert_eq!(view.stats.total, 2);
    }

    #[test]
    fn test_empty_inventory_view() {
        let view = search_vehicles(&InventoryState::default(), "");
        assert_eq!(view.empty_message.as_deref(), Some(EMPTY_INVENTORY_MESSAGE));
        assert_eq!(view.stats.average_price, Dollars::zero());
    }

    #[test]
    fn test_stats_for_demo_lot() {
        let stats = inventory_stats(&demo_state());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.available_count, 2);
        assert_eq!(stats.sold_count, 0);
        assert_eq!(stats.average_price.to_string(), "$30,250");
    }

    #[test]
    fn test_remove_notifies_once() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        let removed = remove_vehicle(&inventory, &notifier, "1");
        assert_eq!(removed.map(|r| r.title()).as_deref(), Some("2023 Toyota Camry"));

        assert!(remove_vehicle(&inventory, &notifier, "1").is_none());
        assert_eq!(list_vehicles(&inventory).len(), 1);
        assert_eq!(notifier.titles(), vec!["Vehicle Removed"]);
    }
}
