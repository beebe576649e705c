//! # API Error Type
//!
//! Unified error type for commands, plus the config loading error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Showroom Admin                         │
//! │                                                                         │
//! │  Render surface               Rust                                      │
//! │  ──────────────               ────                                      │
//! │                                                                         │
//! │  commit_draft()                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<T, ApiError>                          │  │
//! │  │                                                                  │  │
//! │  │  Draft invalid?  ─── CoreError::Validation ─────┐               │  │
//! │  │  Record gone?    ─── CoreError::VehicleNotFound ┼──► ApiError ──►│  │
//! │  │  Dialog closed?  ─── CoreError::NoActiveDraft ──┘               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR", "message": "...", "field": "price" }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::Serialize;
use showroom_core::{CoreError, ValidationError};
use thiserror::Error;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must be between 0 and 9223372036854775807",
///   "field": "price"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Offending form field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Dialog state doesn't allow the operation
    FormError,

    /// Config or seed could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error pointing at the field it names.
    pub fn validation(err: &ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            field: Some(err.field().to_string()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VehicleNotFound(id) => ApiError::not_found("Vehicle", &id),
            CoreError::UserNotFound(id) => ApiError::not_found("User", &id),
            CoreError::Validation(e) => ApiError::validation(&e),
            e @ (CoreError::NoActiveDraft | CoreError::DraftInProgress) => {
                ApiError::new(ErrorCode::FormError, e.to_string())
            }
            CoreError::DuplicateVehicleId(id) | CoreError::DuplicateUserId(id) => {
                tracing::error!(id = %id, "Duplicate id reached the command layer");
                ApiError::internal("Inventory is in an inconsistent state")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(&err)
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `config.toml` or the inventory seed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("Invalid seed data: {0}")]
    SeedData(#[from] CoreError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = CoreError::VehicleNotFound("7".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Vehicle not found: 7");
        assert_eq!(err.field, None);
    }

    #[test]
    fn test_validation_mapping_keeps_field() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "make".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("make"));
    }

    #[test]
    fn test_form_state_mapping() {
        let err: ApiError = CoreError::NoActiveDraft.into();
        assert_eq!(err.code, ErrorCode::FormError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("User", "9");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("field").is_none());
    }
}
