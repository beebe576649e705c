//! # Inventory State
//!
//! The session's inventory store and the add/edit dialog, behind one lock.
//!
//! ## Thread Safety
//! Store and form share a single `Mutex` because a commit reads the draft
//! and writes the store in one step. Two locks would let a removal slip in
//! between the two halves.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Session Operations                         │
//! │                                                                         │
//! │  Screen Action            Command                 Session Change        │
//! │  ─────────────            ───────                 ──────────────        │
//! │                                                                         │
//! │  Type in search ─────────► search_vehicles() ───► (read only)          │
//! │                                                                         │
//! │  Click "Add Vehicle" ────► open_add_dialog() ───► form = DraftingNew   │
//! │                                                                         │
//! │  Click pencil icon ──────► open_edit_dialog() ──► form = DraftingEdit  │
//! │                                                                         │
//! │  Change a field ─────────► edit_draft() ────────► draft.field = value  │
//! │                                                                         │
//! │  Click "Save" ───────────► commit_draft() ──────► store.add / update   │
//! │                                                                         │
//! │  Click trash icon ───────► remove_vehicle() ────► store.remove(id)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use showroom_core::{FormState, InventoryStore};

/// Everything the inventory screen mutates.
#[derive(Debug, Default)]
pub struct InventorySession {
    pub store: InventoryStore,
    pub form: FormState,
}

/// Inventory state wrapper for commands.
#[derive(Debug, Default)]
pub struct InventoryState {
    session: Mutex<InventorySession>,
}

impl InventoryState {
    /// Wraps a seeded store with the dialog closed.
    pub fn new(store: InventoryStore) -> Self {
        InventoryState {
            session: Mutex::new(InventorySession {
                store,
                form: FormState::Idle,
            }),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = inventory.with_session(|s| s.store.len());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventorySession) -> R,
    {
        let session = self.session.lock().expect("Inventory mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventorySession) -> R,
    {
        let mut session = self.session.lock().expect("Inventory mutex poisoned");
        f(&mut session)
    }
}
