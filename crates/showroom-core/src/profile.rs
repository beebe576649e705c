//! # Dealer Profile
//!
//! The settings screen's dealership profile. The screen edits a clone and
//! saves it back in one piece with [`ProfileStore::update`].

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::{self, ValidationResult};

/// Postal address of the dealership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Public-facing details of the dealership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DealerProfile {
    pub dealership_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    /// Logo as a data URL, if one was uploaded.
    pub logo: Option<String>,
    pub description: String,
    pub established_year: String,
    pub license_number: String,
}

impl DealerProfile {
    /// ## Rules
    /// - Dealership name is required
    /// - Email must be well-formed
    /// - Website, when given, must be an http(s) URL
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_required("dealershipName", &self.dealership_name)?;
        validation::validate_email(&self.email)?;
        validation::validate_website(&self.website)?;
        Ok(())
    }
}

/// Owns the current profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: DealerProfile,
}

impl ProfileStore {
    /// Starts from `profile` as-is. Seeds are trusted; updates are not.
    pub fn new(profile: DealerProfile) -> Self {
        ProfileStore { profile }
    }

    pub fn get(&self) -> &DealerProfile {
        &self.profile
    }

    /// Replaces the whole profile after validating it.
    ///
    /// On error the stored profile is unchanged.
    pub fn update(&mut self, profile: DealerProfile) -> CoreResult<&DealerProfile> {
        profile.validate()?;
        self.profile = profile;

        debug!(name = %self.profile.dealership_name, "Dealer profile updated");
        Ok(&self.profile)
    }

    /// Replaces only the logo.
    pub fn set_logo(&mut self, data_url: impl Into<String>) -> &DealerProfile {
        self.profile.logo = Some(data_url.into());
        debug!("Dealer logo replaced");
        &self.profile
    }
}
