//! # Domain Types
//!
//! Core inventory types shared by the store, the query derivations and the
//! draft state machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory Types                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  VehicleDraft   │   │   NewVehicle    │   │  VehicleRecord  │       │
//! │  │  (form.rs)      │──►│  ─────────────  │──►│  ─────────────  │       │
//! │  │  raw widget     │   │  validated,     │   │  id (assigned)  │       │
//! │  │  values         │   │  no id yet      │   │  + NewVehicle   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │         validate()            InventoryStore::add / update             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   Condition     │   │     Status      │                             │
//! │  │  New            │   │  Available      │                             │
//! │  │  Used           │   │  Pending        │                             │
//! │  │  Certified      │   │  Sold           │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stored collection only ever holds `VehicleRecord`s, so `condition`
//! and `status` can only take their enumerated values there. Free-form
//! widget input is checked on the way in (see [`crate::form`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::price::{group_thousands, Dollars};
use crate::validation::{self, ValidationResult};

// =============================================================================
// Select Options
// =============================================================================

/// Fuel types offered by the vehicle form's select box.
pub const FUEL_TYPE_OPTIONS: &[&str] = &["Gasoline", "Diesel", "Hybrid", "Electric"];

/// Transmissions offered by the vehicle form's select box.
pub const TRANSMISSION_OPTIONS: &[&str] = &["Manual", "Automatic", "CVT"];

// =============================================================================
// Condition
// =============================================================================

/// The condition a vehicle is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Never titled.
    New,
    /// Pre-owned, no certification.
    #[default]
    Used,
    /// Certified pre-owned.
    Certified,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::Used, Condition::Certified];

    /// The wire value (`"new"`, `"used"`, `"certified"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Certified => "certified",
        }
    }

    /// Human-readable label for select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Certified => "Certified Pre-Owned",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            "certified" => Ok(Condition::Certified),
            _ => Err(ValidationError::NotAllowed {
                field: "condition".to_string(),
                allowed: Condition::ALL.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Status
// =============================================================================

/// Where a vehicle is in the sales pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// On the lot and for sale.
    #[default]
    Available,
    /// A deal is in progress.
    Pending,
    /// Sold.
    Sold,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Available, Status::Pending, Status::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Pending => "pending",
            Status::Sold => "sold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Pending => "Pending",
            Status::Sold => "Sold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Status::Available),
            "pending" => Ok(Status::Pending),
            "sold" => Ok(Status::Sold),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: Status::ALL.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// New Vehicle
// =============================================================================

/// A validated vehicle that has not been assigned an id yet.
///
/// This is what a committed draft turns into, and what
/// [`InventoryStore::add`](crate::inventory::InventoryStore::add) and
/// [`InventoryStore::update`](crate::inventory::InventoryStore::update)
/// accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Dollars,
    pub mileage: u64,
    pub fuel_type: String,
    pub transmission: String,
    pub condition: Condition,
    pub color: String,
    pub description: String,
    pub vin: String,
    pub status: Status,
}

impl NewVehicle {
    /// Checks the rules the type system can't: required strings, model year
    /// range and VIN length.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_required("make", &self.make)?;
        validation::validate_required("model", &self.model)?;
        validation::validate_model_year(self.year)?;
        validation::validate_vin(&self.vin)?;
        Ok(())
    }

    /// Attaches an id, producing the stored form of the record.
    pub fn into_record(self, id: String) -> VehicleRecord {
        VehicleRecord {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            condition: self.condition,
            color: self.color,
            description: self.description,
            vin: self.vin,
            status: self.status,
        }
    }
}

// =============================================================================
// Vehicle Record
// =============================================================================

/// A vehicle in the inventory.
///
/// ## Identity
/// `id` is opaque, unique across the collection and never changes after the
/// record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Dollars,
    pub mileage: u64,
    pub fuel_type: String,
    pub transmission: String,
    pub condition: Condition,
    pub color: String,
    pub description: String,
    pub vin: String,
    pub status: Status,
}

impl VehicleRecord {
    /// Card title, e.g. `"2023 Toyota Camry"`.
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Odometer reading for display, e.g. `"15,000 miles"`.
    pub fn mileage_display(&self) -> String {
        format!("{} miles", group_thousands(self.mileage))
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Copies everything but the id, for seeding an edit draft.
    pub fn to_new_vehicle(&self) -> NewVehicle {
        NewVehicle {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type.clone(),
            transmission: self.transmission.clone(),
            condition: self.condition,
            color: self.color.clone(),
            description: self.description.clone(),
            vin: self.vin.clone(),
            status: self.status,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> VehicleRecord {
        NewVehicle {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2023,
            price: Dollars::from_whole(28_500),
            mileage: 15_000,
            fuel_type: "Gasoline".to_string(),
            transmission: "Automatic".to_string(),
            condition: Condition::Used,
            color: "Silver".to_string(),
            description: String::new(),
            vin: "1HGBH41JXMN109186".to_string(),
            status: Status::Available,
        }
        .into_record("1".to_string())
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!("certified".parse::<Condition>(), Ok(Condition::Certified));
        assert_eq!(" NEW ".parse::<Condition>(), Ok(Condition::New));

        let err = "salvage".parse::<Condition>().unwrap_err();
        assert_eq!(err.field(), "condition");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("sold".parse::<Status>(), Ok(Status::Sold));
        assert!("reserved".parse::<Status>().is_err());
    }

    #[test]
    fn test_defaults_match_new_vehicle_form() {
        assert_eq!(Condition::default(), Condition::Used);
        assert_eq!(Status::default(), Status::Available);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Condition::Certified.label(), "Certified Pre-Owned");
        assert_eq!(Status::Pending.label(), "Pending");
    }

    #[test]
    fn test_record_display_helpers() {
        let record = camry();
        assert_eq!(record.title(), "2023 Toyota Camry");
        assert_eq!(record.mileage_display(), "15,000 miles");
        assert_eq!(record.price.to_string(), "$28,500");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(camry()).unwrap();
        assert_eq!(json["fuelType"], "Gasoline");
        assert_eq!(json["condition"], "used");
        assert_eq!(json["status"], "available");
        assert_eq!(json["price"], 28_500);
    }

    #[test]
    fn test_to_new_vehicle_round_trips_fields() {
        let record = camry();
        let again = record.to_new_vehicle().into_record(record.id.clone());
        assert_eq!(again, record);
    }

    #[test]
    fn test_new_vehicle_validation() {
        let mut vehicle = camry().to_new_vehicle();
        assert!(vehicle.validate().is_ok());

        vehicle.model = "  ".to_string();
        let err = vehicle.validate().unwrap_err();
        assert_eq!(err.field(), "model");
    }
}
