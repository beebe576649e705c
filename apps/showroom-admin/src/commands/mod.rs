//! # Commands
//!
//! Functions the render surface calls, grouped by screen.
//!
//! ```text
//! commands/
//! ├── dashboard.rs  ◄─── metrics overview
//! ├── inventory.rs  ◄─── list, search, stats, remove
//! ├── dialog.rs     ◄─── add/edit dialog lifecycle
//! ├── settings.rs   ◄─── dealer profile and team roster
//! └── config.rs     ◄─── read-only session config
//! ```
//!
//! Every command takes the state it needs by reference and returns
//! `Result<T, ApiError>` when it can fail. Mutations that succeed (and
//! commits that fail) are reported to the [`Notifier`](crate::notify::Notifier)
//! after the state change, never before.

pub mod config;
pub mod dashboard;
pub mod dialog;
pub mod inventory;
pub mod settings;
