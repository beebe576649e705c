//! # Team Roster
//!
//! Authorized users listed on the settings screen. Invitations land as
//! `pending`; roles are informational only and grant nothing by themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation;

// =============================================================================
// Role / Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Sales,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Sales, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Sales => "sales",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ALL.iter().map(|r| r.to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Suspended,
}

// =============================================================================
// Authorized User
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    /// `None` until the user has signed in once.
    #[ts(as = "Option<String>")]
    pub last_login: Option<NaiveDate>,
}

impl AuthorizedUser {
    /// "2024-01-15", or "Never".
    pub fn last_login_display(&self) -> String {
        self.last_login
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Never".to_string())
    }
}

// =============================================================================
// Roster
// =============================================================================

/// Users in insertion order. Emails are unique (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    users: Vec<AuthorizedUser>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster holding `seed`, in order.
    ///
    /// ## Errors
    /// - `DuplicateUserId` if two users share an id
    /// - `Duplicate` (email) if two users share an email, ignoring case
    pub fn with_seed(seed: Vec<AuthorizedUser>) -> CoreResult<Self> {
        {
            let mut ids = HashSet::with_capacity(seed.len());
            let mut emails = HashSet::with_capacity(seed.len());
            for user in &seed {
                if !ids.insert(user.id.as_str()) {
                    return Err(CoreError::DuplicateUserId(user.id.clone()));
                }
                if !emails.insert(user.email.to_ascii_lowercase()) {
                    return Err(ValidationError::Duplicate {
                        field: "email".to_string(),
                        value: user.email.clone(),
                    }
                    .into());
                }
            }
        }

        debug!(count = seed.len(), "Roster seeded");
        Ok(TeamRoster { users: seed })
    }

    pub fn list(&self) -> &[AuthorizedUser] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&AuthorizedUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Adds a pending user.
    ///
    /// ## Errors
    /// - `Required` for a blank name
    /// - `InvalidFormat` for a malformed email
    /// - `Duplicate` when the email is already on the roster
    pub fn invite(&mut self, name: &str, email: &str, role: Role) -> CoreResult<AuthorizedUser> {
        validation::validate_required("name", name)?;
        validation::validate_email(email)?;

        let email = email.trim();
        if self
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(ValidationError::Duplicate {
                field: "email".to_string(),
                value: email.to_string(),
            }
            .into());
        }

        let user = AuthorizedUser {
            id: self.fresh_id(),
            name: name.trim().to_string(),
            email: email.to_string(),
            role,
            status: UserStatus::Pending,
            last_login: None,
        };
        self.users.push(user.clone());

        debug!(id = %user.id, role = %role, "User invited");
        Ok(user)
    }

    /// Removes a user; absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<AuthorizedUser> {
        let index = self.users.iter().position(|u| u.id == id)?;
        let removed = self.users.remove(index);
        debug!(id = %id, "User removed");
        Some(removed)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
