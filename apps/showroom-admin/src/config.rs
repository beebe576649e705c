//! # Admin Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOWROOM_DEALERSHIP_NAME="Premium Auto Sales"                      │
//! │     SHOWROOM_SEED_FILE=./inventory.json                                │
//! │     SHOWROOM_LOG=debug                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else                                              │
//! │     ~/.config/showroom-admin/config.toml (Linux)                       │
//! │     ~/Library/Application Support/com.showroom.admin/config.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     built-in demo seed, "info" logging                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [dealership]
//! name = "Premium Auto Sales"
//!
//! [inventory]
//! seed_file = "inventory.json"  # JSON array of vehicle records
//!
//! [logging]
//! filter = "info,showroom_core=debug"
//! ```
//!
//! Nothing here is ever written back. Each launch starts from the seed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use showroom_core::seed::demo_vehicles;
use showroom_core::{InventoryStore, VehicleRecord};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealershipSettings {
    /// Shown in the overview header and log lines.
    #[serde(default = "default_dealership_name")]
    pub name: String,
}

fn default_dealership_name() -> String {
    "Premium Auto Sales".to_string()
}

impl Default for DealershipSettings {
    fn default() -> Self {
        Self {
            name: default_dealership_name(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySettings {
    /// JSON seed. Relative paths resolve against the config file's folder.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directives when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,showroom_core=debug,showroom_admin=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Admin Config
// =============================================================================

/// Complete configuration for one admin session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub dealership: DealershipSettings,

    #[serde(default)]
    pub inventory: InventorySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AdminConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading admin config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                config = Self::from_toml(&contents)?;
                config.resolve_relative_to(path.parent());
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load admin config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses the TOML file format.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dealership.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dealership.name must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SHOWROOM_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SHOWROOM_DEALERSHIP_NAME") {
            debug!(name = %name, "Overriding dealership name from environment");
            self.dealership.name = name;
        }

        if let Some(path) = lookup("SHOWROOM_SEED_FILE") {
            debug!(path = %path, "Overriding seed file from environment");
            self.inventory.seed_file = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("SHOWROOM_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Builds the session's inventory from the configured seed.
    ///
    /// Without a seed file the two demo vehicles are used.
    pub fn load_inventory(&self) -> Result<InventoryStore, ConfigError> {
        let seed = match &self.inventory.seed_file {
            Some(path) => {
                info!(?path, "Loading inventory seed");
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_seed(&contents)?
            }
            None => demo_vehicles(),
        };

        Ok(InventoryStore::with_seed(seed)?)
    }

    fn resolve_relative_to(&mut self, base: Option<&Path>) {
        if let (Some(base), Some(seed)) = (base, self.inventory.seed_file.as_mut()) {
            if seed.is_relative() {
                *seed = base.join(&*seed);
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "showroom", "admin")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Parses a JSON array of vehicle records.
///
/// Enum fields must hold their lowercase names; anything else is rejected
/// here rather than reaching the store.
pub fn parse_seed(json: &str) -> Result<Vec<VehicleRecord>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.dealership.name, "Premium Auto Sales");
        assert!(config.inventory.seed_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AdminConfig::from_toml(
            r#"
            [inventory]
            seed_file = "lot.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.dealership, DealershipSettings::default());
        assert_eq!(config.inventory.seed_file, Some(PathBuf::from("lot.json")));
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            AdminConfig::from_toml("[dealership\nname = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHOWROOM_DEALERSHIP_NAME", "Budget Cars"),
            ("SHOWROOM_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = AdminConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.dealership.name, "Budget Cars");
        assert_eq!(config.logging.filter, "warn");
        assert!(config.inventory.seed_file.is_none());
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let mut config = AdminConfig::default();
        config.dealership.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_relative_seed_resolves_against_config_dir() {
        let mut config = AdminConfig::default();
        config.inventory.seed_file = Some(PathBuf::from("lot.json"));
        config.resolve_relative_to(Some(Path::new("/etc/showroom")));

        assert_eq!(
            config.inventory.seed_file,
            Some(PathBuf::from("/etc/showroom/lot.json"))
        );
    }

    #[test]
    fn test_default_inventory_is_demo_seed() {
        let store = AdminConfig::default().load_inventory().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[1].title(), "2024 Honda CR-V");
    }

    #[test]
    fn test_parse_seed() {
        let json = serde_json::to_string(&demo_vehicles()).unwrap();
        assert_eq!(parse_seed(&json).unwrap(), demo_vehicles());

        let bad = json.replace("\"certified\"", "\"salvage\"");
        assert!(matches!(parse_seed(&bad), Err(ConfigError::SeedFormat(_))));
    }

    #[test]
    fn test_missing_seed_file_is_io_error() {
        let mut config = AdminConfig::default();
        config.inventory.seed_file = Some(PathBuf::from("/nonexistent/showroom/seed.json"));
        assert!(matches!(config.load_inventory(), Err(ConfigError::Io { .. })));
    }
}
