//! # Notifications
//!
//! The toast collaborator. Commands tell a [`Notifier`] what happened after
//! a mutation has already succeeded (or failed); delivery returns nothing,
//! so a notifier can never fail or roll back the store operation.

use std::sync::Mutex;

use serde::Serialize;
use showroom_core::{AuthorizedUser, VehicleRecord};
use tracing::info;

/// A toast: short title plus one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    /// Failure toasts are rendered in the destructive style.
    pub is_error: bool,
}

impl Notification {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Notification {
            title: title.to_string(),
            description: description.into(),
            is_error: false,
        }
    }

    fn failure(title: &str, description: impl Into<String>) -> Self {
        Notification {
            title: title.to_string(),
            description: description.into(),
            is_error: true,
        }
    }

    pub fn vehicle_added(record: &VehicleRecord) -> Self {
        Self::success(
            "Vehicle Added",
            format!("{} has been added to inventory.", record.title()),
        )
    }

    pub fn vehicle_updated() -> Self {
        Self::success(
            "Vehicle Updated",
            "Vehicle information has been updated successfully.",
        )
    }

    pub fn vehicle_removed(record: &VehicleRecord) -> Self {
        Self::success(
            "Vehicle Removed",
            format!("{} has been removed from inventory.", record.title()),
        )
    }

    pub fn invalid_vehicle(message: &str) -> Self {
        Self::failure("Invalid Vehicle", message)
    }

    pub fn update_failed(message: &str) -> Self {
        Self::failure("Update Failed", message)
    }

    pub fn profile_updated() -> Self {
        Self::success(
            "Profile Updated",
            "Your dealership profile has been successfully updated.",
        )
    }

    pub fn logo_uploaded() -> Self {
        Self::success(
            "Logo Uploaded",
            "Your dealership logo has been uploaded successfully.",
        )
    }

    pub fn user_invited(user: &AuthorizedUser) -> Self {
        Self::success(
            "User Invited",
            format!("{} has been invited to join your dealership.", user.name),
        )
    }

    pub fn user_removed() -> Self {
        Self::success(
            "User Removed",
            "User has been removed from your dealership.",
        )
    }
}

/// Receives notifications. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. The default when no UI is attached.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error {
            tracing::warn!(title = %notification.title, "{}", notification.description);
        } else {
            info!(title = %notification.title, "{}", notification.description);
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of what has been delivered so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        // A poisoned recorder drops the toast rather than failing the caller
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
