//! # Configuration State
//!
//! The parts of [`AdminConfig`] commands may read.
//!
//! ## Thread Safety
//! Read-only after startup, so no mutex.

use serde::Serialize;

use crate::config::AdminConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header of every screen.
    pub dealership_name: String,

    /// Where the inventory came from, for the about box.
    pub seed_source: String,
}

impl From<&AdminConfig> for ConfigState {
    fn from(config: &AdminConfig) -> Self {
        ConfigState {
            dealership_name: config.dealership.name.clone(),
            seed_source: config
                .inventory
                .seed_file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in demo".to_string()),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from(&AdminConfig::default())
    }
}
