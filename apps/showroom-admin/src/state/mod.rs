//! # State Module
//!
//! Session state owned by the composition root.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs, so the inventory
//! screen never locks the settings screen's data and vice versa.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┬──────────────────────┐               │
//! │          ▼                      ▼                      ▼                │
//! │  ┌────────────────┐   ┌──────────────────┐   ┌──────────────────┐      │
//! │  │ InventoryState │   │  SettingsState   │   │   AdminConfig    │      │
//! │  │                │   │                  │   │                  │      │
//! │  │  Mutex<        │   │  Mutex<          │   │  read-only after │      │
//! │  │   store +      │   │   profile +      │   │  startup         │      │
//! │  │   form >       │   │   roster >       │   │                  │      │
//! │  └────────────────┘   └──────────────────┘   └──────────────────┘      │
//! │                                                                         │
//! │  One instance of each per running session; nothing is shared across    │
//! │  sessions or persisted.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod dashboard;
mod inventory;
mod settings;

pub use config::ConfigState;
pub use dashboard::DashboardState;
pub use inventory::{InventorySession, InventoryState};
pub use settings::{Settings, SettingsState};
