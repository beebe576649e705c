//! # Inventory Store
//!
//! The single authority over which vehicles are in the inventory.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Store Operations                           │
//! │                                                                         │
//! │  Dialog Action            Store Method            Collection Change     │
//! │  ─────────────            ────────────            ─────────────────     │
//! │                                                                         │
//! │  Commit "Add Vehicle" ───► add(new) ────────────► records.push(rec)    │
//! │                                                                         │
//! │  Commit "Update" ────────► update(id, new) ─────► records[i] = rec     │
//! │                                                                         │
//! │  Click Remove ───────────► remove(id) ──────────► records.remove(i)    │
//! │                                                                         │
//! │  Render ─────────────────► list() ──────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Ids are unique across the collection at every observable point
//! - Insertion order is preserved; `update` keeps a record's position
//! - Every record passed [`NewVehicle::validate`] before it was stored
//!
//! The store is an ordinary value. Whoever builds it owns it and passes it
//! around by reference; there is no global instance.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{NewVehicle, VehicleRecord};

/// In-memory vehicle collection.
///
/// ## Example
/// ```rust
/// use showroom_core::inventory::InventoryStore;
/// use showroom_core::seed;
///
/// let mut store = InventoryStore::new();
/// let camry = seed::demo_vehicles().remove(0).to_new_vehicle();
///
/// let stored = store.add(camry).unwrap();
/// assert_eq!(store.list(), &[stored]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<VehicleRecord>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `seed`, in order.
    ///
    /// ## Errors
    /// `DuplicateVehicleId` if two seed records share an id. Seed records are
    /// also run through [`NewVehicle::validate`].
    pub fn with_seed(seed: Vec<VehicleRecord>) -> CoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(seed.len());
            for record in &seed {
                if !seen.insert(record.id.as_str()) {
                    return Err(CoreError::DuplicateVehicleId(record.id.clone()));
                }
                record.to_new_vehicle().validate()?;
            }
        }

        debug!(count = seed.len(), "Inventory seeded");
        Ok(InventoryStore { records: seed })
    }

    /// Stores a new vehicle under a freshly generated id and returns it.
    ///
    /// The record is appended, so it shows up last in [`list`](Self::list).
    pub fn add(&mut self, vehicle: NewVehicle) -> CoreResult<VehicleRecord> {
        vehicle.validate()?;

        let record = vehicle.into_record(self.fresh_id());
        self.records.push(record.clone());

        debug!(id = %record.id, count = self.records.len(), "Vehicle added");
        Ok(record)
    }

    /// Replaces the whole record with this `id`, keeping its position.
    ///
    /// ## Errors
    /// - `VehicleNotFound` if no record has this id (store untouched)
    /// - `Validation` if `vehicle` breaks a field rule (store untouched)
    pub fn update(&mut self, id: &str, vehicle: NewVehicle) -> CoreResult<VehicleRecord> {
        let index = self
            .position(id)
            .ok_or_else(|| CoreError::VehicleNotFound(id.to_string()))?;

        vehicle.validate()?;

        let record = vehicle.into_record(id.to_string());
        self.records[index] = record.clone();

        debug!(id = %id, "Vehicle updated");
        Ok(record)
    }

    /// Removes the record with this `id`, returning it.
    ///
    /// Removing an id that isn't present does nothing and returns `None`.
    pub fn remove(&mut self, id: &str) -> Option<VehicleRecord> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        debug!(id = %id, count = self.records.len(), "Vehicle removed");
        Some(removed)
    }

    /// All records, oldest first.
    #[inline]
    pub fn list(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&VehicleRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// UUID v4, redrawn in the (seed-injected) case that it is already taken.
    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
