//! # API Error Type
//!
//! Unified error type for catalog commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Catalog Shell                      │
//! │                                                                         │
//! │  {"cmd": "set_price_range", "args": {"lower": 120, "upper": 90}}       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ───── CoreError::InvalidArgument ─┐                  │  │
//! │  │         │                                     │                  │  │
//! │  │         ▼                                     ▼                  │  │
//! │  │  Bad data?  ───── CoreError::UnrankedClass ── ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok": false, "error": {"code": "INVALID_ARGUMENT", "message": ...}}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rentdrive_core::{CoreError, ErrorKind};
use serde::Serialize;

use crate::state::ConfigError;

/// API error returned from catalog commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Vehicle not found: 42"
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
    /// Filter input rejected (400)
    InvalidArgument,

    /// Inventory data inconsistent (500)
    InvalidState,

    /// Resource not found (404)
    NotFound,

    /// Request line could not be understood (400)
    BadRequest,

    /// Configuration or inventory loading failed
    ConfigError,

    /// Response could not be produced (500)
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

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(error = %message, "Internal failure");
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err.kind() {
            ErrorKind::InvalidArgument => {
                tracing::warn!(error = %err, "Rejected filter input");
                ApiError::new(ErrorCode::InvalidArgument, err.to_string())
            }
            ErrorKind::InvalidState => {
                tracing::error!(error = %err, "Inventory integrity failure");
                ApiError::new(ErrorCode::InvalidState, err.to_string())
            }
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "Configuration failure");
        ApiError::new(ErrorCode::ConfigError, err.to_string())
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
    use rentdrive_core::ValidationError;

    #[test]
    fn test_invalid_argument_mapping() {
        let core: CoreError = ValidationError::MustBePositive {
            field: "capacity".to_string(),
        }
        .into();
        let api = ApiError::from(core);
        assert_eq!(api.code, ErrorCode::InvalidArgument);
        assert_eq!(api.message, "Invalid argument: capacity must be positive");
    }

    #[test]
    fn test_invalid_state_mapping() {
        let api = ApiError::from(CoreError::DuplicateVehicle("3".to_string()));
        assert_eq!(api.code, ErrorCode::InvalidState);
    }

    #[test]
    fn test_internal_code() {
        let json = serde_json::to_value(ApiError::internal("encoder failed")).unwrap();
        assert_eq!(json["code"], "INTERNAL");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Vehicle", "42")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Vehicle not found: 42");
    }
}
