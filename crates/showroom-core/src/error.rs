//! # Error Types
//!
//! Domain-specific error types for showroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  showroom-core errors (this file)                                      │
//! │  ├── CoreError        - Store / form state failures                    │
//! │  └── ValidationError  - Draft rejected at commit time                  │
//! │                                                                         │
//! │  showroom-admin errors (app crate)                                     │
//! │  ├── ConfigError      - Config file / seed loading                     │
//! │  └── ApiError         - What the render surface sees (serialized)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Render surface         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// None of these leave the store in a partially-modified state: every
/// mutation is a whole-record swap that happens only after all checks pass.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No vehicle with this id is in the inventory.
    ///
    /// ## When This Occurs
    /// - `update` for an id that was never added
    /// - Committing an edit draft after the record was removed
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// A seed collection contained the same id twice.
    #[error("Duplicate vehicle id in seed: {0}")]
    DuplicateVehicleId(String),

    /// A roster seed contained the same user id twice.
    #[error("Duplicate user id in seed: {0}")]
    DuplicateUserId(String),

    /// No authorized user with this id is on the roster.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A draft operation was attempted while no dialog is open.
    #[error("No vehicle draft is open")]
    NoActiveDraft,

    /// A dialog was opened while another draft is still active.
    #[error("Another vehicle draft is already open")]
    DraftInProgress,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant carries the name of the offending field so the dialog can
/// highlight it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric price, malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., an email already on the roster).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::Duplicate { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VehicleNotFound("42".to_string());
        assert_eq!(err.to_string(), "Vehicle not found: 42");

        let err = CoreError::NoActiveDraft;
        assert_eq!(err.to_string(), "No vehicle draft is open");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "make".to_string(),
        };
        assert_eq!(err.to_string(), "make is required");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "price must be between 0 and 10");
    }

    #[test]
    fn test_validation_error_reports_field() {
        let err = ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["available".to_string()],
        };
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "model".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
