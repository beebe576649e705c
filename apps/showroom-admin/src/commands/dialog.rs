//! # Dialog Commands
//!
//! Drives the add/edit vehicle dialog.
//!
//! ## Dialog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open_add_dialog ──┐                    ┌── cancel_draft ──► closed     │
//! │                    ├──► edit_draft* ────┤                               │
//! │  open_edit_dialog ─┘         ▲          └── commit_draft                │
//! │                              │                 │                        │
//! │                              └── invalid ◄─────┤                        │
//! │                                  (stays open)  └── ok ──► closed        │
//! │                                                                         │
//! │  Edits touch only the draft. The table keeps showing stored values     │
//! │  until commit_draft succeeds.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::notify::{Notification, Notifier};
use crate::state::InventoryState;
use showroom_core::{Commit, CoreError, DraftEdit, FormState, VehicleDraft, VehicleRecord};

/// The open dialog, as the render surface shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    /// "Add New Vehicle" or "Edit Vehicle"
    pub title: &'static str,

    /// Id of the record being edited; `None` in the add dialog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_id: Option<String>,

    pub draft: VehicleDraft,
}

impl DraftView {
    fn of(form: &FormState) -> Option<Self> {
        let draft = form.draft()?.clone();
        let editing_id = form.editing_id().map(str::to_string);
        let title = if editing_id.is_some() {
            "Edit Vehicle"
        } else {
            "Add New Vehicle"
        };

        Some(DraftView {
            title,
            editing_id,
            draft,
        })
    }
}

/// Opens the add dialog with a blank draft for the current year.
///
/// ## Errors
/// `FORM_ERROR` if a dialog is already open.
pub fn open_add_dialog(inventory: &InventoryState) -> Result<DraftView, ApiError> {
    debug!("open_add_dialog command");

    inventory.with_session_mut(|s| {
        s.form.open_new()?;
        current(&s.form)
    })
}

/// Opens the edit dialog on a copy of a stored vehicle.
///
/// ## Errors
/// - `NOT_FOUND` if there is no vehicle with `id`
/// - `FORM_ERROR` if a dialog is already open
pub fn open_edit_dialog(inventory: &InventoryState, id: &str) -> Result<DraftView, ApiError> {
    debug!(id = %id, "open_edit_dialog command");

    inventory.with_session_mut(|s| {
        s.form.open_edit(&s.store, id)?;
        current(&s.form)
    })
}

/// Sets one field of the open draft from the widget's raw text.
///
/// ## Arguments
/// * `field` - Widget id, one of [`DraftEdit::FIELDS`]
/// * `raw` - Text as typed; numeric fields must parse as integers
pub fn edit_draft(inventory: &InventoryState, field: &str, raw: &str) -> Result<DraftView, ApiError> {
    debug!(field = %field, "edit_draft command");

    let edit = DraftEdit::from_input(field, raw)?;
    inventory.with_session_mut(|s| {
        s.form.edit(edit)?;
        current(&s.form)
    })
}

/// Saves the draft: adds a new vehicle or replaces the edited one.
///
/// ## Behavior
/// - Success: dialog closes, "Vehicle Added" / "Vehicle Updated" toast
/// - Invalid draft: dialog stays open, "Invalid Vehicle" / "Update Failed"
///   toast, error names the field
/// - Edited vehicle removed meanwhile: dialog closes, "Update Failed" toast
pub fn commit_draft(
    inventory: &InventoryState,
    notifier: &dyn Notifier,
) -> Result<VehicleRecord, ApiError> {
    debug!("commit_draft command");

    let (editing, outcome) = inventory.with_session_mut(|s| {
        let editing = s.form.editing_id().is_some();
        (editing, s.form.commit(&mut s.store))
    });

    match outcome {
        Ok(commit) => {
            let notification = match &commit {
                Commit::Added(record) => Notification::vehicle_added(record),
                Commit::Updated(_) => Notification::vehicle_updated(),
            };
            info!(id = %commit.record().id, "Vehicle saved");
            notifier.notify(notification);

            Ok(match commit {
                Commit::Added(record) | Commit::Updated(record) => record,
            })
        }
        Err(CoreError::NoActiveDraft) => Err(CoreError::NoActiveDraft.into()),
        Err(err) => {
            let err = ApiError::from(err);
            if editing {
                notifier.notify(Notification::update_failed(&err.message));
            } else {
                notifier.notify(Notification::invalid_vehicle(&err.message));
            }
            Err(err)
        }
    }
}

/// Closes the dialog without saving. Safe to call when nothing is open.
pub fn cancel_draft(inventory: &InventoryState) {
    debug!("cancel_draft command");
    inventory.with_session_mut(|s| s.form.cancel());
}

/// The open dialog, or `None` when closed.
pub fn current_draft(inventory: &InventoryState) -> Option<DraftView> {
    debug!("current_draft command");
    inventory.with_session(|s| DraftView::of(&s.form))
}

fn current(form: &FormState) -> Result<DraftView, ApiError> {
    DraftView::of(form).ok_or_else(|| CoreError::NoActiveDraft.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::inventory::{list_vehicles, remove_vehicle, search_vehicles};
    use crate::error::ErrorCode;
    use crate::notify::RecordingNotifier;
    use showroom_core::seed::demo_vehicles;
    use showroom_core::{Dollars, InventoryStore};

    fn demo_state() -> InventoryState {
        InventoryState::new(InventoryStore::with_seed(demo_vehicles()).unwrap())
    }

    fn type_into(inventory: &InventoryState, field: &str, raw: &str) {
        edit_draft(inventory, field, raw).unwrap();
    }

    #[test]
    fn test_add_vehicle_flow() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        let view = open_add_dialog(&inventory).unwrap();
        assert_eq!(view.title, "Add New Vehicle");
        assert_eq!(view.editing_id, None);

        type_into(&inventory, "make", "Ford");
        type_into(&inventory, "model", "F-150");
        type_into(&inventory, "year", "2022");
        type_into(&inventory, "price", "41000");

        let record = commit_draft(&inventory, &notifier).unwrap();
        assert_eq!(record.title(), "2022 Ford F-150");
        assert_eq!(record.price, Dollars::from_whole(41_000));
        assert!(current_draft(&inventory).is_none());
        assert_eq!(list_vehicles(&inventory).len(), 3);

        let toasts = notifier.notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts[0].description,
            "2022 Ford F-150 has been added to inventory."
        );
    }

    #[test]
    fn test_edit_is_invisible_until_commit() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        open_edit_dialog(&inventory, "1").unwrap();
        type_into(&inventory, "price", "27000");
        assert_eq!(
            search_vehicles(&inventory, "camry").vehicles[0].price,
            Dollars::from_whole(28_500)
        );

        commit_draft(&inventory, &notifier).unwrap();
        assert_eq!(
            search_vehicles(&inventory, "camry").vehicles[0].price,
            Dollars::from_whole(27_000)
        );
        assert_eq!(notifier.titles(), vec!["Vehicle Updated"]);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let inventory = demo_state();
        let before = list_vehicles(&inventory);

        open_edit_dialog(&inventory, "2").unwrap();
        type_into(&inventory, "make", "Acura");
        cancel_draft(&inventory);

        assert!(current_draft(&inventory).is_none());
        assert_eq!(list_vehicles(&inventory), before);
    }

    #[test]
    fn test_invalid_draft_keeps_dialog_open() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        open_add_dialog(&inventory).unwrap();
        let err = commit_draft(&inventory, &notifier).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("make"));
        assert!(current_draft(&inventory).is_some());
        assert_eq!(notifier.titles(), vec!["Invalid Vehicle"]);
        assert!(notifier.notifications()[0].is_error);
    }

    #[test]
    fn test_commit_after_removal_closes_dialog() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        open_edit_dialog(&inventory, "1").unwrap();
        remove_vehicle(&inventory, &notifier, "1");

        let err = commit_draft(&inventory, &notifier).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(current_draft(&inventory).is_none());
        assert_eq!(notifier.titles(), vec!["Vehicle Removed", "Update Failed"]);
        assert_eq!(list_vehicles(&inventory).len(), 1);
    }

    #[test]
    fn test_dialog_errors() {
        let inventory = demo_state();
        let notifier = RecordingNotifier::new();

        assert_eq!(
            edit_draft(&inventory, "make", "Ford").unwrap_err().code,
            ErrorCode::FormError
        );
        assert_eq!(
            commit_draft(&inventory, &notifier).unwrap_err().code,
            ErrorCode::FormError
        );
        assert_eq!(
            open_edit_dialog(&inventory, "99").unwrap_err().code,
            ErrorCode::NotFound
        );

        open_add_dialog(&inventory).unwrap();
        assert_eq!(
            open_add_dialog(&inventory).unwrap_err().code,
            ErrorCode::FormError
        );
        assert_eq!(
            edit_draft(&inventory, "price", "a lot").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert!(notifier.notifications().is_empty());
    }
}
