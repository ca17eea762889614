//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kirana POS                             │
//! │                                                                         │
//! │  Front end                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  add_to_cart("42")                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ────── DbError::NotFound ───────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Domain Error? ───── CoreError::EmptyCart ──────► ApiError ─────►│  │
//! │  │         │                                          ▲             │  │
//! │  │         ▼                                          │             │  │
//! │  │  Settings Error? ─── ConfigError::Save ───────────┘             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The console prints { "code": "NOT_FOUND", "message": "..." }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable: the state a command touched is left as
//! it was, except a camera failure which parks the scan dialog in `Error`.

use kirana_core::{CoreError, ValidationError};
use kirana_db::DbError;
use serde::Serialize;

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 8901234567890"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Store operation failed
    DatabaseError,

    /// Cart operation failed
    CartError,

    /// Scan dialog asked to do something its state forbids
    InvalidState,

    /// Camera denied or missing
    CameraUnavailable,

    /// Settings could not be read or written
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts store errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Store operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::ItemNotInCart(_) | CoreError::EmptyCart => ApiError::cart(err.to_string()),
            CoreError::InvalidScanTransition { .. } => {
                ApiError::new(ErrorCode::InvalidState, err.to_string())
            }
            CoreError::CameraUnavailable { reason } => {
                ApiError::new(ErrorCode::CameraUnavailable, reason)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Form validation failures surface as `VALIDATION_ERROR`.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts settings errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownLanguage(e) => ApiError::validation(e.to_string()),
            other => {
                tracing::warn!(error = %other, "Settings error");
                ApiError::new(ErrorCode::ConfigError, other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::CartError);

        let err: ApiError = CoreError::invalid_transition("scanning", "commit").into();
        assert_eq!(err.code, ErrorCode::InvalidState);

        let err: ApiError = CoreError::CameraUnavailable {
            reason: "Permission denied".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CameraUnavailable);
        assert_eq!(err.message, "Permission denied");

        let err: ApiError = CoreError::from(ValidationError::Required {
            field: "category".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_db_errors_map_to_codes() {
        let err: ApiError = DbError::not_found("Product", "99").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");

        let err: ApiError = DbError::duplicate("barcode", "8901234567890").into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serializes_screaming_snake_code() {
        let json = serde_json::to_string(&ApiError::not_found("Product", "1")).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
    }
}
