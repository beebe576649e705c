//! # Validation Module
//!
//! Field rules applied when a draft is committed.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Render surface                                               │
//! │  └── Widgets hand raw text to DraftEdit::from_input                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field parsing (form.rs)                                      │
//! │  └── Numbers must parse; unknown fields are rejected                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Commit (THIS MODULE)                                         │
//! │  ├── Required strings, ranges, enum membership                         │
//! │  └── A failure keeps the dialog open and names the field               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  InventoryStore only ever sees NewVehicle values                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use showroom_core::validation::{validate_required, validate_non_negative};
//!
//! assert!(validate_required("make", "Toyota").is_ok());
//! assert_eq!(validate_non_negative("price", 28_500).unwrap(), 28_500);
//! assert!(validate_non_negative("mileage", -1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Earliest model year accepted (the first production automobile).
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Latest model year accepted.
pub const MAX_MODEL_YEAR: i32 = 2100;

/// A VIN is 17 characters; older vehicles may carry shorter ones.
pub const MAX_VIN_LENGTH: usize = 17;

// =============================================================================
// String Validators
// =============================================================================

/// Fails with `Required` when `value` is empty or only whitespace.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Fails with `TooLong` when `value` has more than `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a VIN.
///
/// ## Rules
/// - May be blank; the form never requires it
/// - At most 17 characters, counted as typed
///
/// Any characters are accepted; dealers paste hyphenated and partial VINs.
pub fn validate_vin(vin: &str) -> ValidationResult<()> {
    validate_max_len("vin", vin, MAX_VIN_LENGTH)
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part
/// - Domain contains a dot that is neither first nor last
///
/// ```rust
/// use showroom_core::validation::validate_email;
///
/// assert!(validate_email("contact@premiumauto.com").is_ok());
/// assert!(validate_email("contact@localhost").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    validate_required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    match domain.find('.') {
        Some(dot) if dot > 0 && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid("domain must contain a dot")),
    }
}

/// Validates a website address. Blank is allowed.
pub fn validate_website(url: &str) -> ValidationResult<()> {
    let url = url.trim();
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        return Ok(());
    }

    Err(ValidationError::InvalidFormat {
        field: "website".to_string(),
        reason: "must start with http:// or https://".to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Checks that a numeric widget value is not negative and narrows it.
///
/// Price and mileage arrive from number inputs as signed integers; only
/// values `>= 0` may reach the store.
pub fn validate_non_negative(field: &str, value: i64) -> ValidationResult<u64> {
    u64::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    })
}

/// Validates a model year against [`MIN_MODEL_YEAR`]..=[`MAX_MODEL_YEAR`].
pub fn validate_model_year(year: i32) -> ValidationResult<()> {
    if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "year".to_string(),
            min: MIN_MODEL_YEAR as i64,
            max: MAX_MODEL_YEAR as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("make", "Honda").is_ok());
        assert!(validate_required("make", "").is_err());
        assert!(validate_required("make", "   ").is_err());
    }

    #[test]
    fn test_validate_max_len_counts_chars() {
        assert!(validate_max_len("color", "Rouge élégant", 13).is_ok());
        assert!(validate_max_len("color", "Rouge élégant", 12).is_err());
    }

    #[test]
    fn test_validate_vin() {
        assert!(validate_vin("1HGBH41JXMN109186").is_ok());
        assert!(validate_vin("").is_ok());
        assert!(validate_vin("1HGBH41JXMN1091860").is_err());
        assert!(validate_vin("WDB-12345").is_ok());
        assert!(validate_vin("WDB-12345-6789-ABCD").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@premiumauto.com").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("@premiumauto.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("john@.com").is_err());
        assert!(validate_email("john@premiumauto.").is_err());
        assert!(validate_email("jo hn@premiumauto.com").is_err());
    }

    #[test]
    fn test_validate_website() {
        assert!(validate_website("https://premiumauto.com").is_ok());
        assert!(validate_website("").is_ok());
        assert!(validate_website("premiumauto.com").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(validate_non_negative("price", 0).unwrap(), 0);
        assert_eq!(validate_non_negative("price", 32_000).unwrap(), 32_000);

        let err = validate_non_negative("mileage", -5).unwrap_err();
        assert_eq!(err.field(), "mileage");
    }

    #[test]
    fn test_validate_model_year() {
        assert!(validate_model_year(2024).is_ok());
        assert!(validate_model_year(MIN_MODEL_YEAR).is_ok());
        assert!(validate_model_year(1885).is_err());
        assert!(validate_model_year(0).is_err());
        assert!(validate_model_year(-2023).is_err());
    }
}
