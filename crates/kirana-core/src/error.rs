//! # Error Types
//!
//! Domain-specific error types for kirana-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kirana-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kirana-db errors (separate crate)                                     │
//! │  └── DbError          - Repository failures                            │
//! │                                                                         │
//! │  dashboard errors (in app)                                             │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these errors is fatal. Every one of them ends up as a transient
//! notification while the session keeps running.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart operation referenced a line that is not in the cart.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(String),

    /// Checkout was requested on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The scan workflow was asked to do something its current state forbids.
    ///
    /// ## When This Occurs
    /// - Committing a review while still scanning
    /// - Reporting a detection while the camera is being acquired
    /// - Opening manual entry from the review form
    #[error("Cannot {action} while scan workflow is {from}")]
    InvalidScanTransition { from: String, action: String },

    /// Camera access was denied or the device is unavailable.
    #[error("Camera unavailable: {reason}")]
    CameraUnavailable { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an invalid-transition error from a state label and an action.
    pub fn invalid_transition(from: impl Into<String>, action: impl Into<String>) -> Self {
        CoreError::InvalidScanTransition {
            from: from.into(),
            action: action.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of form input (add-product form, scan review
/// form, manual barcode entry, cart quantity edits).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. non-numeric quantity, malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. duplicate barcode).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::invalid_transition("scanning", "commit");
        assert_eq!(err.to_string(), "Cannot commit while scan workflow is scanning");

        let err = CoreError::ItemNotInCart("7".to_string());
        assert_eq!(err.to_string(), "Product 7 is not in the cart");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooShort {
            field: "barcode".to_string(),
            min: 8,
        };
        assert_eq!(err.to_string(), "barcode must be at least 8 characters");

        let err = ValidationError::Required {
            field: "category".to_string(),
        };
        assert_eq!(err.to_string(), "category is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
