//! # Vehicle Form State
//!
//! The add/edit dialog as an explicit state machine. A draft is a detached
//! copy: nothing typed into it is visible to the store until it is
//! committed.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                          ┌────────────┐                                 │
//! │           open_new() ┌───│    Idle    │───┐ open_edit(id)               │
//! │                      │   └────────────┘   │                             │
//! │                      ▼         ▲  ▲       ▼                             │
//! │          ┌───────────────┐     │  │     ┌──────────────────┐            │
//! │          │  DraftingNew  │     │  │     │ DraftingEdit(id) │            │
//! │          │   edit(..) ⟲  │     │  │     │    edit(..) ⟲    │            │
//! │          └───────┬───────┘     │  │     └────────┬─────────┘            │
//! │                  │  commit ────┘  └──── commit   │                      │
//! │                  │  (store.add)     (store.update)│                     │
//! │                  └──── cancel: back to Idle, store untouched            │
//! │                                                                         │
//! │  A commit that fails validation stays in the drafting state so the     │
//! │  dialog can point at the bad field.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::InventoryStore;
use crate::price::Dollars;
use crate::types::{Condition, NewVehicle, Status, VehicleRecord};
use crate::validation::{self, ValidationResult};

// =============================================================================
// Vehicle Draft
// =============================================================================

/// Raw values bound to the dialog's widgets.
///
/// Numbers are signed and the enum fields are plain strings, because that
/// is what number inputs and select boxes can produce. [`validate`] turns a
/// draft into a [`NewVehicle`] or says which field is wrong.
///
/// [`validate`]: VehicleDraft::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub mileage: i64,
    pub fuel_type: String,
    pub transmission: String,
    pub condition: String,
    pub color: String,
    pub description: String,
    pub vin: String,
    pub status: String,
}

impl VehicleDraft {
    /// The "Add Vehicle" form for a given model year: zero price and
    /// mileage, used, available, everything else blank.
    pub fn blank(year: i32) -> Self {
        VehicleDraft {
            make: String::new(),
            model: String::new(),
            year,
            price: 0,
            mileage: 0,
            fuel_type: String::new(),
            transmission: String::new(),
            condition: Condition::default().to_string(),
            color: String::new(),
            description: String::new(),
            vin: String::new(),
            status: Status::default().to_string(),
        }
    }

    /// Applies one field edit, leaving every other field as it was.
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Make(v) => self.make = v,
            DraftEdit::Model(v) => self.model = v,
            DraftEdit::Year(v) => self.year = v,
            DraftEdit::Price(v) => self.price = v,
            DraftEdit::Mileage(v) => self.mileage = v,
            DraftEdit::FuelType(v) => self.fuel_type = v,
            DraftEdit::Transmission(v) => self.transmission = v,
            DraftEdit::Condition(v) => self.condition = v,
            DraftEdit::Color(v) => self.color = v,
            DraftEdit::Description(v) => self.description = v,
            DraftEdit::Vin(v) => self.vin = v,
            DraftEdit::Status(v) => self.status = v,
        }
    }

    /// Checks every field and produces the typed vehicle.
    ///
    /// Fields are checked in form order; the first failure is reported.
    /// Text is stored exactly as typed; blankness is judged on the trimmed
    /// value only.
    pub fn validate(&self) -> ValidationResult<NewVehicle> {
        validation::validate_required("make", &self.make)?;
        validation::validate_required("model", &self.model)?;
        validation::validate_model_year(self.year)?;
        let price = validation::validate_non_negative("price", self.price)?;
        let mileage = validation::validate_non_negative("mileage", self.mileage)?;
        let condition = self.condition.parse::<Condition>()?;
        let status = self.status.parse::<Status>()?;
        validation::validate_vin(&self.vin)?;

        Ok(NewVehicle {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            price: Dollars::from_whole(price),
            mileage,
            fuel_type: self.fuel_type.clone(),
            transmission: self.transmission.clone(),
            condition,
            color: self.color.clone(),
            description: self.description.clone(),
            vin: self.vin.clone(),
            status,
        })
    }
}

impl Default for VehicleDraft {
    /// Blank draft for the current calendar year.
    fn default() -> Self {
        VehicleDraft::blank(chrono::Local::now().year())
    }
}

impl From<&VehicleRecord> for VehicleDraft {
    fn from(record: &VehicleRecord) -> Self {
        VehicleDraft {
            make: record.make.clone(),
            model: record.model.clone(),
            year: record.year,
            price: i64::try_from(record.price.whole()).unwrap_or(i64::MAX),
            mileage: i64::try_from(record.mileage).unwrap_or(i64::MAX),
            fuel_type: record.fuel_type.clone(),
            transmission: record.transmission.clone(),
            condition: record.condition.to_string(),
            color: record.color.clone(),
            description: record.description.clone(),
            vin: record.vin.clone(),
            status: record.status.to_string(),
        }
    }
}

// =============================================================================
// Draft Edit
// =============================================================================

/// A single-field change coming from one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Make(String),
    Model(String),
    Year(i32),
    Price(i64),
    Mileage(i64),
    FuelType(String),
    Transmission(String),
    Condition(String),
    Color(String),
    Description(String),
    Vin(String),
    Status(String),
}

impl DraftEdit {
    /// Field names accepted by [`from_input`](Self::from_input), matching
    /// the widget ids.
    pub const FIELDS: [&'static str; 12] = [
        "make",
        "model",
        "year",
        "price",
        "mileage",
        "fuelType",
        "transmission",
        "condition",
        "color",
        "description",
        "vin",
        "status",
    ];

    /// Builds an edit from a widget id and its raw text.
    ///
    /// ## Errors
    /// - `InvalidFormat` when a numeric field isn't an integer
    /// - `NotAllowed` when `field` isn't one of [`FIELDS`](Self::FIELDS)
    ///
    /// ```rust
    /// use showroom_core::form::DraftEdit;
    ///
    /// assert_eq!(DraftEdit::from_input("price", "28500"), Ok(DraftEdit::Price(28_500)));
    /// assert!(DraftEdit::from_input("price", "cheap").is_err());
    /// ```
    pub fn from_input(field: &str, raw: &str) -> ValidationResult<Self> {
        let text = raw.to_string();
        let edit = match field {
            "make" => DraftEdit::Make(text),
            "model" => DraftEdit::Model(text),
            "year" => DraftEdit::Year(parse_number(field, raw)?),
            "price" => DraftEdit::Price(parse_number(field, raw)?),
            "mileage" => DraftEdit::Mileage(parse_number(field, raw)?),
            "fuelType" => DraftEdit::FuelType(text),
            "transmission" => DraftEdit::Transmission(text),
            "condition" => DraftEdit::Condition(text),
            "color" => DraftEdit::Color(text),
            "description" => DraftEdit::Description(text),
            "vin" => DraftEdit::Vin(text),
            "status" => DraftEdit::Status(text),
            _ => {
                return Err(ValidationError::NotAllowed {
                    field: "field".to_string(),
                    allowed: Self::FIELDS.iter().map(|f| f.to_string()).collect(),
                })
            }
        };
        Ok(edit)
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> ValidationResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })
}

// =============================================================================
// Form State
// =============================================================================

/// Which dialog is open, and its draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// No dialog open.
    #[default]
    Idle,
    /// "Add New Vehicle" dialog.
    DraftingNew { draft: VehicleDraft },
    /// "Edit Vehicle" dialog for the record with this id.
    DraftingEdit { id: String, draft: VehicleDraft },
}

/// What a successful commit did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Added(VehicleRecord),
    Updated(VehicleRecord),
}

impl Commit {
    pub fn record(&self) -> &VehicleRecord {
        match self {
            Commit::Added(record) | Commit::Updated(record) => record,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FormState::Idle)
    }

    /// The active draft, if a dialog is open.
    pub fn draft(&self) -> Option<&VehicleDraft> {
        match self {
            FormState::Idle => None,
            FormState::DraftingNew { draft } | FormState::DraftingEdit { draft, .. } => Some(draft),
        }
    }

    /// Id being edited, for the edit dialog.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormState::DraftingEdit { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Opens the add dialog with a blank draft for the current year.
    pub fn open_new(&mut self) -> CoreResult<()> {
        self.open_new_with(VehicleDraft::default())
    }

    /// Opens the add dialog with a specific starting draft.
    pub fn open_new_with(&mut self, draft: VehicleDraft) -> CoreResult<()> {
        self.ensure_idle()?;
        *self = FormState::DraftingNew { draft };
        Ok(())
    }

    /// Opens the edit dialog on a copy of the stored record.
    ///
    /// ## Errors
    /// `VehicleNotFound` if `id` isn't in `store`.
    pub fn open_edit(&mut self, store: &InventoryStore, id: &str) -> CoreResult<()> {
        self.ensure_idle()?;
        let record = store
            .get(id)
            .ok_or_else(|| CoreError::VehicleNotFound(id.to_string()))?;

        *self = FormState::DraftingEdit {
            id: record.id.clone(),
            draft: VehicleDraft::from(record),
        };
        Ok(())
    }

    /// Applies one field edit to the open draft.
    pub fn edit(&mut self, edit: DraftEdit) -> CoreResult<()> {
        match self {
            FormState::Idle => Err(CoreError::NoActiveDraft),
            FormState::DraftingNew { draft } | FormState::DraftingEdit { draft, .. } => {
                draft.apply(edit);
                Ok(())
            }
        }
    }

    /// Writes the draft into `store` and closes the dialog.
    ///
    /// ## Errors
    /// - `NoActiveDraft` when idle
    /// - `Validation` when the draft is invalid; the dialog stays open
    /// - `VehicleNotFound` when the edited record was removed meanwhile; the
    ///   dialog closes since there is nothing left to edit
    pub fn commit(&mut self, store: &mut InventoryStore) -> CoreResult<Commit> {
        let outcome = match &*self {
            FormState::Idle => return Err(CoreError::NoActiveDraft),
            FormState::DraftingNew { draft } => {
                let vehicle = draft.validate()?;
                store.add(vehicle).map(Commit::Added)
            }
            FormState::DraftingEdit { id, draft } => {
                let vehicle = draft.validate()?;
                store.update(id, vehicle).map(Commit::Updated)
            }
        };

        match outcome {
            Ok(commit) => {
                *self = FormState::Idle;
                Ok(commit)
            }
            Err(err @ CoreError::VehicleNotFound(_)) => {
                *self = FormState::Idle;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Discards the draft, if any. The store is never touched.
    pub fn cancel(&mut self) {
        *self = FormState::Idle;
    }

    fn ensure_idle(&self) -> CoreResult<()> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(CoreError::DraftInProgress)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_vehicles;

    fn seeded() -> InventoryStore {
        InventoryStore::with_seed(demo_vehicles()).unwrap()
    }

    fn fill_camry(form: &mut FormState) {
        for (field, raw) in [
            ("make", "Toyota"),
            ("model", "Camry"),
            ("year", "2023"),
            ("price", "28500"),
            ("mileage", "15000"),
            ("status", "available"),
        ] {
            form.edit(DraftEdit::from_input(field, raw).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_blank_draft_defaults() {
        let draft = VehicleDraft::blank(2025);
        assert_eq!(draft.year, 2025);
        assert_eq!(draft.price, 0);
        assert_eq!(draft.mileage, 0);
        assert_eq!(draft.condition, "used");
        assert_eq!(draft.status, "available");
        assert!(draft.make.is_empty() && draft.vin.is_empty());
    }

    #[test]
    fn test_apply_changes_one_field_only() {
        let mut draft = VehicleDraft::from(&demo_vehicles()[0]);
        let before = draft.clone();

        draft.apply(DraftEdit::Color("Red".to_string()));

        assert_eq!(draft.color, "Red");
        assert_eq!(
            VehicleDraft {
                color: before.color.clone(),
                ..draft
            },
            before
        );
    }

    #[test]
    fn test_add_flow_commits_and_resets() {
        let mut store = InventoryStore::new();
        let mut form = FormState::new();

        form.open_new().unwrap();
        fill_camry(&mut form);
        let commit = form.commit(&mut store).unwrap();

        assert!(matches!(commit, Commit::Added(_)));
        assert!(form.is_idle());
        assert_eq!(store.list(), std::slice::from_ref(commit.record()));
        assert_eq!(commit.record().title(), "2023 Toyota Camry");

        // Reopening starts from a fresh blank draft
        form.open_new_with(VehicleDraft::blank(2023)).unwrap();
        assert_eq!(form.draft(), Some(&VehicleDraft::blank(2023)));
    }

    #[test]
    fn test_text_is_stored_as_typed() {
        let mut store = InventoryStore::new();
        let mut form = FormState::new();

        form.open_new().unwrap();
        fill_camry(&mut form);
        form.edit(DraftEdit::Make(" Toyota ".to_string())).unwrap();
        form.edit(DraftEdit::Vin("WDB-12345".to_string())).unwrap();

        let record = form.commit(&mut store).unwrap().record().clone();
        assert_eq!(record.make, " Toyota ");
        assert_eq!(record.vin, "WDB-12345");
    }

    #[test]
    fn test_max_prices_commit_and_aggregate() {
        let mut store = InventoryStore::new();
        let mut form = FormState::new();

        for _ in 0..3 {
            form.open_new().unwrap();
            fill_camry(&mut form);
            form.edit(DraftEdit::from_input("price", "9223372036854775807").unwrap())
                .unwrap();
            form.commit(&mut store).unwrap();
        }

        let stats = crate::query::aggregate(store.list());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_price.whole(), i64::MAX as u64);
    }

    #[test]
    fn test_edit_then_cancel_leaves_store_untouched() {
        let mut store = seeded();
        let mut form = FormState::new();

        form.open_edit(&store, "1").unwrap();
        form.edit(DraftEdit::Price(99_999)).unwrap();
        assert_eq!(form.draft().unwrap().price, 99_999);
        assert_eq!(store.get("1").unwrap().price.whole(), 28_500);

        form.cancel();

        assert!(form.is_idle());
        assert_eq!(store.get("1").unwrap().price.whole(), 28_500);
        assert!(form.commit(&mut store).is_err());
    }

    #[test]
    fn test_edit_commit_replaces_record_in_place() {
        let mut store = seeded();
        let mut form = FormState::new();

        form.open_edit(&store, "1").unwrap();
        assert_eq!(form.editing_id(), Some("1"));
        form.edit(DraftEdit::Status("sold".to_string())).unwrap();
        let commit = form.commit(&mut store).unwrap();

        assert!(matches!(commit, Commit::Updated(_)));
        assert_eq!(store.list()[0].id, "1");
        assert_eq!(store.list()[0].status, Status::Sold);
        assert_eq!(store.list()[1], demo_vehicles()[1]);
    }

    #[test]
    fn test_invalid_commit_keeps_dialog_open() {
        let mut store = InventoryStore::new();
        let mut form = FormState::new();

        form.open_new().unwrap();
        fill_camry(&mut form);
        form.edit(DraftEdit::Mileage(-10)).unwrap();

        let err = form.commit(&mut store).unwrap_err();

        match err {
            CoreError::Validation(v) => assert_eq!(v.field(), "mileage"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!form.is_idle());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_condition_is_rejected() {
        let mut store = InventoryStore::new();
        let mut form = FormState::new();

        form.open_new().unwrap();
        fill_camry(&mut form);
        form.edit(DraftEdit::Condition("salvage".to_string())).unwrap();

        let err = form.commit(&mut store).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::NotAllowed { .. })));
    }

    #[test]
    fn test_commit_after_record_removed_closes_dialog() {
        let mut store = seeded();
        let mut form = FormState::new();

        form.open_edit(&store, "2").unwrap();
        store.remove("2");

        let err = form.commit(&mut store).unwrap_err();
        assert!(matches!(err, CoreError::VehicleNotFound(_)));
        assert!(form.is_idle());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_only_one_draft_at_a_time() {
        let store = seeded();
        let mut form = FormState::new();

        form.open_new().unwrap();
        assert!(matches!(form.open_edit(&store, "1"), Err(CoreError::DraftInProgress)));
        assert!(matches!(form.open_new(), Err(CoreError::DraftInProgress)));
    }

    #[test]
    fn test_open_edit_missing_record() {
        let store = seeded();
        let mut form = FormState::new();

        assert!(matches!(
            form.open_edit(&store, "404"),
            Err(CoreError::VehicleNotFound(_))
        ));
        assert!(form.is_idle());
    }

    #[test]
    fn test_edit_while_idle() {
        let mut form = FormState::new();
        assert!(matches!(
            form.edit(DraftEdit::Make("Kia".to_string())),
            Err(CoreError::NoActiveDraft)
        ));
    }

    #[test]
    fn test_from_input_parsing() {
        assert_eq!(
            DraftEdit::from_input("fuelType", "Hybrid"),
            Ok(DraftEdit::FuelType("Hybrid".to_string()))
        );
        assert_eq!(DraftEdit::from_input("year", " 2024 "), Ok(DraftEdit::Year(2024)));
        assert_eq!(DraftEdit::from_input("mileage", "-3"), Ok(DraftEdit::Mileage(-3)));

        let err = DraftEdit::from_input("year", "").unwrap_err();
        assert_eq!(err.field(), "year");
        assert!(DraftEdit::from_input("horsepower", "300").is_err());
    }
}
