//! # Settings Commands
//!
//! Dealer profile and team roster.
//!
//! Profile editing is staged: the screen edits its own copy and sends the
//! whole profile to [`update_profile`], which either replaces the stored
//! profile entirely or leaves it untouched.

use std::str::FromStr;

use tracing::debug;

use crate::error::ApiError;
use crate::notify::{Notification, Notifier};
use crate::state::SettingsState;
use showroom_core::validation::validate_required;
use showroom_core::{AuthorizedUser, DealerProfile, Role};

// =============================================================================
// Profile
// =============================================================================

pub fn get_profile(settings: &SettingsState) -> DealerProfile {
    debug!("get_profile command");
    settings.with_settings(|s| s.profile.get().clone())
}

/// Replaces the dealer profile.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first bad field; nothing is stored.
pub fn update_profile(
    settings: &SettingsState,
    notifier: &dyn Notifier,
    profile: DealerProfile,
) -> Result<DealerProfile, ApiError> {
    debug!(name = %profile.dealership_name, "update_profile command");

    let updated = settings.with_settings_mut(|s| s.profile.update(profile).cloned())?;
    notifier.notify(Notification::profile_updated());
    Ok(updated)
}

/// Stores a new logo, given as a data URL.
pub fn upload_logo(
    settings: &SettingsState,
    notifier: &dyn Notifier,
    data_url: &str,
) -> Result<DealerProfile, ApiError> {
    debug!(bytes = data_url.len(), "upload_logo command");
    validate_required("logo", data_url)?;

    let updated = settings.with_settings_mut(|s| s.profile.set_logo(data_url).clone());
    notifier.notify(Notification::logo_uploaded());
    Ok(updated)
}

// =============================================================================
// Team
// =============================================================================

pub fn list_users(settings: &SettingsState) -> Vec<AuthorizedUser> {
    debug!("list_users command");
    settings.with_settings(|s| s.roster.list().to_vec())
}

/// Adds a pending user to the roster.
///
/// ## Arguments
/// * `role` - "admin", "manager", "sales" or "viewer" (any case)
pub fn invite_user(
    settings: &SettingsState,
    notifier: &dyn Notifier,
    name: &str,
    email: &str,
    role: &str,
) -> Result<AuthorizedUser, ApiError> {
    debug!(email = %email, role = %role, "invite_user command");

    let role = Role::from_str(role)?;
    let user = settings.with_settings_mut(|s| s.roster.invite(name, email, role))?;
    notifier.notify(Notification::user_invited(&user));
    Ok(user)
}

/// Removes a user. Unknown ids are a no-op and send no notification.
pub fn remove_user(
    settings: &SettingsState,
    notifier: &dyn Notifier,
    id: &str,
) -> Option<AuthorizedUser> {
    debug!(id = %id, "remove_user command");

    let removed = settings.with_settings_mut(|s| s.roster.remove(id));
    if removed.is_some() {
        notifier.notify(Notification::user_removed());
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::notify::RecordingNotifier;
    use showroom_core::UserStatus;

    #[test]
    fn test_update_profile() {
        let settings = SettingsState::demo().unwrap();
        let notifier = RecordingNotifier::new();

        let mut profile = get_profile(&settings);
        profile.phone = "(555) 987-6543".to_string();
        update_profile(&settings, &notifier, profile).unwrap();

        assert_eq!(get_profile(&settings).phone, "(555) 987-6543");
        assert_eq!(notifier.titles(), vec!["Profile Updated"]);
    }

    #[test]
    fn test_invalid_profile_is_not_stored() {
        let settings = SettingsState::demo().unwrap();
        let notifier = RecordingNotifier::new();

        let mut profile = get_profile(&settings);
        profile.email = "not-an-email".to_string();
        let err = update_profile(&settings, &notifier, profile).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("email"));
        assert_eq!(get_profile(&settings).email, "contact@premiumauto.com");
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_upload_logo() {
        let settings = SettingsState::demo().unwrap();
        let notifier = RecordingNotifier::new();

        let profile = upload_logo(&settings, &notifier, "data:image/png;base64,AAAA").unwrap();
        assert_eq!(profile.logo.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(notifier.titles(), vec!["Logo Uploaded"]);

        assert!(upload_logo(&settings, &notifier, " ").is_err());
    }

    #[test]
    fn test_invite_and_remove_user() {
        let settings = SettingsState::demo().unwrap();
        let notifier = RecordingNotifier::new();

        let user = invite_user(&settings, &notifier, "Ana Lee", "ana@premiumauto.com", "Viewer")
            .unwrap();
        assert_eq!(user.role, Role::Viewer);
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(list_users(&settings).len(), 4);

        assert!(remove_user(&settings, &notifier, &user.id).is_some());
        assert!(remove_user(&settings, &notifier, &user.id).is_none());
        assert_eq!(notifier.titles(), vec!["User Invited", "User Removed"]);
        assert_eq!(
            notifier.notifications()[0].description,
            "Ana Lee has been invited to join your dealership."
        );
    }

    #[test]
    fn test_invite_rejections() {
        let settings = SettingsState::demo().unwrap();
        let notifier = RecordingNotifier::new();

        let dup = invite_user(&settings, &notifier, "John", "JOHN@premiumauto.com", "sales")
            .unwrap_err();
        assert_eq!(dup.code, ErrorCode::ValidationError);
        assert_eq!(dup.field.as_deref(), Some("email"));

        let role = invite_user(&settings, &notifier, "Zed", "zed@premiumauto.com", "owner")
            .unwrap_err();
        assert_eq!(role.field.as_deref(), Some("role"));

        assert_eq!(list_users(&settings).len(), 3);
        assert!(notifier.notifications().is_empty());
    }
}
