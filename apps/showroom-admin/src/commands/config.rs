//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Returns the session configuration for the header.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
