//! # showroom-core: Domain Logic for the Dealership Admin
//!
//! Pure, in-memory logic behind the admin dashboard: the vehicle inventory,
//! its search and statistics, the add/edit dialog state machine, and the
//! settings screen's profile and team roster.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Showroom Admin Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Render surface (browser)                       │   │
//! │  │   Search box ──► Vehicle cards ──► Stats cards ──► Dialogs      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                showroom-admin (composition root)                │   │
//! │  │   owns the one store + form instance, config, toasts, logging   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ showroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────────┐  │   │
//! │  │  │ inventory │ │   query   │ │   form    │ │ profile/roster │  │   │
//! │  │  │   Store   │ │ filter    │ │ FormState │ │   settings     │  │   │
//! │  │  │           │ │ aggregate │ │ Draft     │ │                │  │   │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • SYNCHRONOUS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Vehicle records, `Condition`, `Status`
//! - [`price`] - Whole-dollar prices and thousands formatting
//! - [`inventory`] - `InventoryStore`, the only mutator of the collection
//! - [`query`] - Search filter and stats (pure functions)
//! - [`form`] - Add/edit dialog state machine
//! - [`profile`], [`roster`] - Settings screen domain
//! - [`dashboard`] - Metrics overview screen
//! - [`validation`], [`error`] - Field rules and error types
//! - [`seed`] - Demo data every session starts from
//!
//! ## Example Usage
//!
//! ```rust
//! use showroom_core::form::{DraftEdit, FormState};
//! use showroom_core::inventory::InventoryStore;
//! use showroom_core::{query, seed};
//!
//! let mut store = InventoryStore::with_seed(seed::demo_vehicles()).unwrap();
//! let mut form = FormState::new();
//!
//! // Edit the Camry's price, then change our mind
//! form.open_edit(&store, "1").unwrap();
//! form.edit(DraftEdit::Price(99_999)).unwrap();
//! form.cancel();
//! assert_eq!(store.get("1").unwrap().price.whole(), 28_500);
//!
//! let stats = query::aggregate(store.list());
//! assert_eq!(stats.average_price.to_string(), "$30,250");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dashboard;
pub mod error;
pub mod form;
pub mod inventory;
pub mod price;
pub mod profile;
pub mod query;
pub mod roster;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dashboard::DashboardSnapshot;
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{Commit, DraftEdit, FormState, VehicleDraft};
pub use inventory::InventoryStore;
pub use price::Dollars;
pub use profile::{Address, DealerProfile, ProfileStore};
pub use query::Stats;
pub use roster::{AuthorizedUser, Role, TeamRoster, UserStatus};
pub use types::*;
