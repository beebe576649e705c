//! # Settings State
//!
//! Dealer profile and team roster for the settings screen.

use std::sync::Mutex;

use showroom_core::seed::{demo_profile, demo_team};
use showroom_core::{CoreResult, ProfileStore, TeamRoster};

#[derive(Debug, Default)]
pub struct Settings {
    pub profile: ProfileStore,
    pub roster: TeamRoster,
}

/// Settings state wrapper for commands.
#[derive(Debug, Default)]
pub struct SettingsState {
    settings: Mutex<Settings>,
}

impl SettingsState {
    pub fn new(profile: ProfileStore, roster: TeamRoster) -> Self {
        SettingsState {
            settings: Mutex::new(Settings { profile, roster }),
        }
    }

    /// Demo profile and the three seeded team members.
    pub fn demo() -> CoreResult<Self> {
        let roster = TeamRoster::with_seed(demo_team())?;
        Ok(Self::new(ProfileStore::new(demo_profile()), roster))
    }

    pub fn with_settings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Settings) -> R,
    {
        let settings = self.settings.lock().expect("Settings mutex poisoned");
        f(&settings)
    }

    pub fn with_settings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Settings) -> R,
    {
        let mut settings = self.settings.lock().expect("Settings mutex poisoned");
        f(&mut settings)
    }
}
