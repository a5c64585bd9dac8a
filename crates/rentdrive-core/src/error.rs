//! # Error Types
//!
//! Domain-specific error types for rentdrive-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rentdrive-core errors (this file)                                     │
//! │  ├── CoreError        - Operation failures, classified by ErrorKind    │
//! │  │   ├── InvalidArgument  (bad filter mutation input)                  │
//! │  │   └── InvalidState     (inventory violates its own invariants)      │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  catalog shell errors (apps/catalog)                                   │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front End              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty query result is NOT an error. It is an empty `QueryResult`, and
//! the front end offers a reset.

use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// The two failure classes of the catalog core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed input. Never retried, never coerced.
    InvalidArgument,
    /// The inventory data is inconsistent. Fatal to the operation.
    InvalidState,
}

// =============================================================================
// Core Error
// =============================================================================

/// Catalog core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A filter mutation received malformed input.
    ///
    /// ## When This Occurs
    /// - Price bounds inverted or outside the price domain
    /// - Unknown class name coming from the front end
    /// - Zero or negative seat capacity
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A vehicle's class has no place in the configured class priority.
    ///
    /// ## When This Occurs
    /// The class priority policy was configured without one of the classes
    /// present in the inventory. The query refuses to guess an order.
    #[error("Vehicle {vehicle_id} has class {class} with no configured priority")]
    UnrankedClass { vehicle_id: String, class: String },

    /// An inventory record breaks a field rule.
    #[error("Inventory record '{vehicle_id}' is invalid: {reason}")]
    InvalidRecord {
        vehicle_id: String,
        reason: ValidationError,
    },

    /// Two inventory records share an identifier.
    #[error("Duplicate vehicle id in inventory: {0}")]
    DuplicateVehicle(String),

    /// Inventory JSON could not be parsed.
    #[error("Inventory data is malformed: {0}")]
    MalformedInventory(#[from] serde_json::Error),
}

impl CoreError {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::{CoreError, ErrorKind};
    ///
    /// let err = CoreError::DuplicateVehicle("7".to_string());
    /// assert_eq!(err.kind(), ErrorKind::InvalidState);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CoreError::UnrankedClass { .. }
            | CoreError::InvalidRecord { .. }
            | CoreError::DuplicateVehicle(_)
            | CoreError::MalformedInventory(_) => ErrorKind::InvalidState,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Shorthand for `kind() == ErrorKind::InvalidState`.
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ErrorKind::InvalidState
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the validators in [`crate::validation`]. Filter mutations wrap
/// them as `CoreError::InvalidArgument`; inventory loading wraps them as
/// `CoreError::InvalidRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Lower bound exceeds upper bound.
    #[error("{field} lower bound {lower} exceeds upper bound {upper}")]
    Inverted {
        field: String,
        lower: String,
        upper: String,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Duplicate value.
    #[error("{field} '{value}' appears more than once")]
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
        let err = CoreError::UnrankedClass {
            vehicle_id: "8".to_string(),
            class: "Sedan".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Vehicle 8 has class Sedan with no configured priority"
        );

        let err = CoreError::DuplicateVehicle("3".to_string());
        assert_eq!(err.to_string(), "Duplicate vehicle id in inventory: 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "price_range.upper".to_string(),
            min: 0,
            max: 200,
        };
        assert_eq!(err.to_string(), "price_range.upper must be between 0 and 200");

        let err = ValidationError::Inverted {
            field: "price_range".to_string(),
            lower: "$120.00".to_string(),
            upper: "$90.00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price_range lower bound $120.00 exceeds upper bound $90.00"
        );
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::MustBePositive {
            field: "capacity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert!(core_err.is_invalid_argument());
        assert!(!core_err.is_invalid_state());
    }

    #[test]
    fn test_inventory_errors_are_invalid_state() {
        let err = CoreError::InvalidRecord {
            vehicle_id: "4".to_string(),
            reason: ValidationError::Required {
                field: "name".to_string(),
            },
        };
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            "Inventory record '4' is invalid: name is required"
        );
    }
}
