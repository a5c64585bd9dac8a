//! # Validation Module
//!
//! Input validation for filter mutations and inventory records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front End (slider, checkboxes)                               │
//! │  ├── Slider snaps to the step and never inverts its thumbs             │
//! │  └── Checkboxes only offer known classes and capacities                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog shell (apps/catalog)                                 │
//! │  └── Type validation (JSON deserialization)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Price bounds inside the domain, lower <= upper                    │
//! │  ├── Capacities positive                                               │
//! │  └── Inventory records complete and well-formed                        │
//! │                                                                         │
//! │  Nothing is clamped or coerced: bad input is reported, not repaired.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentdrive_core::validation::{validate_capacity, validate_price_range};
//! use rentdrive_core::{Money, PriceDomain};
//!
//! let domain = PriceDomain::default();
//! assert!(validate_price_range(Money::from_major(90), Money::from_major(200), &domain).is_ok());
//! assert!(validate_price_range(Money::from_major(120), Money::from_major(90), &domain).is_err());
//!
//! assert_eq!(validate_capacity(7).unwrap(), 7);
//! assert!(validate_capacity(0).is_err());
//! ```

use crate::config::PriceDomain;
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest daily rate a record may carry, in whole units.
const MAX_DAILY_RATE_UNITS: i64 = i64::MAX / 100;

// =============================================================================
// Filter Validators
// =============================================================================

/// Validates a price range against the price domain.
///
/// ## Rules
/// - Both bounds inside `[floor, ceiling]` (inclusive)
/// - `lower <= upper` (equal bounds select a single price point)
///
/// Out-of-domain bounds are reported before inversion, so `(250, 100)`
/// reports the lower bound as out of range.
pub fn validate_price_range(lower: Money, upper: Money, domain: &PriceDomain) -> ValidationResult<()> {
    validate_price_bound("price_range.lower", lower, domain)?;
    validate_price_bound("price_range.upper", upper, domain)?;

    if lower > upper {
        return Err(ValidationError::Inverted {
            field: "price_range".to_string(),
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }

    Ok(())
}

fn validate_price_bound(field: &str, bound: Money, domain: &PriceDomain) -> ValidationResult<()> {
    if !domain.contains(bound) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: domain.floor().dollars(),
            max: domain.ceiling().dollars(),
        });
    }

    Ok(())
}

/// Validates a seat capacity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit the seat counter (`u32`)
///
/// ## Returns
/// The capacity narrowed to `u32`.
pub fn validate_capacity(capacity: i64) -> ValidationResult<u32> {
    if capacity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "capacity".to_string(),
        });
    }

    u32::try_from(capacity).map_err(|_| ValidationError::OutOfRange {
        field: "capacity".to_string(),
        min: 1,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// Inventory Record Validators
// =============================================================================

/// Validates a vehicle identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_vehicle_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a vehicle display name.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_vehicle_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a daily rate given in whole currency units.
///
/// ## Rules
/// - Must be non-negative (zero is allowed)
///
/// ## Returns
/// The rate as `Money`.
pub fn validate_daily_rate_units(units: i64) -> ValidationResult<Money> {
    if !(0..=MAX_DAILY_RATE_UNITS).contains(&units) {
        return Err(ValidationError::OutOfRange {
            field: "pricePerDay".to_string(),
            min: 0,
            max: MAX_DAILY_RATE_UNITS,
        });
    }

    Ok(Money::from_major(units))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price_range() {
        let domain = PriceDomain::default();

        assert!(validate_price_range(Money::from_major(0), Money::from_major(200), &domain).is_ok());
        assert!(validate_price_range(Money::from_major(90), Money::from_major(90), &domain).is_ok());

        let err = validate_price_range(Money::from_major(120), Money::from_major(90), &domain)
            .unwrap_err();
        assert!(matches!(err, ValidationError::Inverted { .. }));

        let err = validate_price_range(Money::from_major(0), Money::from_major(210), &domain)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "price_range.upper".to_string(),
                min: 0,
                max: 200,
            }
        );

        assert!(validate_price_range(Money::from_cents(-1), Money::from_major(10), &domain).is_err());
    }

    #[test]
    fn test_out_of_domain_reported_before_inversion() {
        let domain = PriceDomain::default();
        let err = validate_price_range(Money::from_major(250), Money::from_major(100), &domain)
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "price_range.lower"));
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(1).unwrap(), 1);
        assert_eq!(validate_capacity(7).unwrap(), 7);

        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-5).is_err());
        assert!(validate_capacity(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_validate_record_fields() {
        assert!(validate_vehicle_id("9").is_ok());
        assert!(validate_vehicle_id("  ").is_err());
        assert!(validate_vehicle_name("Toyota Camry").is_ok());
        assert!(validate_vehicle_name("").is_err());
    }

    #[test]
    fn test_validate_daily_rate_units() {
        assert_eq!(validate_daily_rate_units(0).unwrap(), Money::zero());
        assert_eq!(validate_daily_rate_units(95).unwrap(), Money::from_major(95));
        assert!(validate_daily_rate_units(-1).is_err());
    }
}
