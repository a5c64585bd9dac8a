//! # Catalog Configuration
//!
//! Tunable business policy consumed by the filter state and the query
//! engine: the price domain of the slider and the class display priority.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogConfig                                                          │
//! │  ├── PriceDomain    floor $0 ── step $10 ──► ceiling $200               │
//! │  │                  valid bounds for set_price_range, full reset range  │
//! │  └── ClassPriority  MPV (0) ► SUV (1) ► Sedan (2)                       │
//! │                     family vehicles first; sort key of the query        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are supplied by the shell (environment overrides) and are fixed
//! for the lifetime of a catalog view.

use serde::Serialize;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::VehicleClass;
use crate::validation::ValidationResult;
use crate::{PRICE_CEILING_UNITS, PRICE_FLOOR_UNITS, PRICE_STEP_UNITS};

/// Upper bound on the number of slider steps a price domain may span.
pub const MAX_PRICE_TICKS: i64 = 1_000;

// =============================================================================
// Price Domain
// =============================================================================

/// The inclusive range of selectable prices and the slider granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceDomain {
    floor: Money,
    ceiling: Money,
    step: Money,
}

impl PriceDomain {
    /// Creates a price domain.
    ///
    /// ## Rules
    /// - `floor >= 0`
    /// - `floor <= ceiling`
    /// - `step > 0`
    /// - at most [`MAX_PRICE_TICKS`] steps from floor to ceiling
    pub fn new(floor: Money, ceiling: Money, step: Money) -> ValidationResult<Self> {
        if floor.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "price_domain.floor".to_string(),
                min: 0,
                max: ceiling.dollars(),
            });
        }

        if floor > ceiling {
            return Err(ValidationError::Inverted {
                field: "price_domain".to_string(),
                lower: floor.to_string(),
                upper: ceiling.to_string(),
            });
        }

        if step.is_zero() || step.is_negative() {
            return Err(ValidationError::MustBePositive {
                field: "price_domain.step".to_string(),
            });
        }

        // floor >= 0 and floor <= ceiling, so the span cannot overflow
        let span = ceiling.cents() - floor.cents();
        if span / step.cents() > MAX_PRICE_TICKS {
            let min_step_cents = span / MAX_PRICE_TICKS + i64::from(span % MAX_PRICE_TICKS != 0);
            return Err(ValidationError::OutOfRange {
                field: "price_domain.step".to_string(),
                min: (min_step_cents + 99) / 100,
                max: span / 100,
            });
        }

        Ok(PriceDomain { floor, ceiling, step })
    }

    /// Creates a price domain from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::{Money, PriceDomain};
    ///
    /// let domain = PriceDomain::from_units(0, 300, 25).unwrap();
    /// assert_eq!(domain.ceiling(), Money::from_major(300));
    /// assert!(PriceDomain::from_units(100, 50, 10).is_err());
    /// ```
    pub fn from_units(floor: i64, ceiling: i64, step: i64) -> ValidationResult<Self> {
        PriceDomain::new(
            units_to_money("price_domain.floor", floor)?,
            units_to_money("price_domain.ceiling", ceiling)?,
            units_to_money("price_domain.step", step)?,
        )
    }

    #[inline]
    pub fn floor(&self) -> Money {
        self.floor
    }

    #[inline]
    pub fn ceiling(&self) -> Money {
        self.ceiling
    }

    #[inline]
    pub fn step(&self) -> Money {
        self.step
    }

    /// Whether `price` lies inside `[floor, ceiling]`.
    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.floor <= price && price <= self.ceiling
    }

    /// Slider stops from floor to ceiling by step.
    ///
    /// The ceiling is always the last stop, even when the span is not a
    /// multiple of the step.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::{Money, PriceDomain};
    ///
    /// let ticks = PriceDomain::from_units(0, 25, 10).unwrap().ticks();
    /// let units: Vec<i64> = ticks.iter().map(|m| m.dollars()).collect();
    /// assert_eq!(units, [0, 10, 20, 25]);
    /// ```
    pub fn ticks(&self) -> Vec<Money> {
        let mut ticks = Vec::new();
        let mut next = Some(self.floor);
        while let Some(tick) = next.filter(|tick| *tick <= self.ceiling) {
            ticks.push(tick);
            next = tick.checked_add(self.step);
        }

        if ticks.last() != Some(&self.ceiling) {
            ticks.push(self.ceiling);
        }

        ticks
    }
}

fn units_to_money(field: &str, units: i64) -> ValidationResult<Money> {
    Money::checked_from_major(units).ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX / 100,
    })
}

impl Default for PriceDomain {
    /// $0 to $200 in $10 steps.
    fn default() -> Self {
        PriceDomain {
            floor: Money::from_major(PRICE_FLOOR_UNITS),
            ceiling: Money::from_major(PRICE_CEILING_UNITS),
            step: Money::from_major(PRICE_STEP_UNITS),
        }
    }
}

// =============================================================================
// Class Priority
// =============================================================================

/// Display order of vehicle classes in query results.
///
/// A class's rank is its position in the list. Classes missing from the list
/// have no rank, and the query engine treats a vehicle of such a class as an
/// inventory integrity failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ClassPriority(Vec<VehicleClass>);

impl ClassPriority {
    /// Creates a priority list, highest priority first.
    ///
    /// ## Rules
    /// - At least one class
    /// - No class listed twice
    pub fn new(order: Vec<VehicleClass>) -> ValidationResult<Self> {
        if order.is_empty() {
            return Err(ValidationError::Required {
                field: "class_priority".to_string(),
            });
        }

        for (i, class) in order.iter().enumerate() {
            if order[..i].contains(class) {
                return Err(ValidationError::Duplicate {
                    field: "class_priority".to_string(),
                    value: class.to_string(),
                });
            }
        }

        Ok(ClassPriority(order))
    }

    /// Parses a comma-separated list such as `"SUV, MPV, Sedan"`.
    pub fn parse_list(list: &str) -> ValidationResult<Self> {
        let order = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<VehicleClass>)
            .collect::<ValidationResult<Vec<_>>>()?;

        ClassPriority::new(order)
    }

    /// Sort rank of `class`; lower ranks come first.
    #[inline]
    pub fn rank(&self, class: VehicleClass) -> Option<usize> {
        self.0.iter().position(|c| *c == class)
    }

    /// Classes in priority order (also the order of the class checkboxes).
    #[inline]
    pub fn classes(&self) -> &[VehicleClass] {
        &self.0
    }
}

impl Default for ClassPriority {
    /// MPV, then SUV, then Sedan.
    fn default() -> Self {
        ClassPriority(vec![VehicleClass::Mpv, VehicleClass::Suv, VehicleClass::Sedan])
    }
}

// =============================================================================
// Catalog Config
// =============================================================================

/// All catalog policy in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    pub price_domain: PriceDomain,
    pub class_priority: ClassPriority,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_price_domain() {
        let domain = PriceDomain::default();
        assert_eq!(domain.floor(), Money::zero());
        assert_eq!(domain.ceiling(), Money::from_major(200));
        assert_eq!(domain.step(), Money::from_major(10));
        assert!(domain.contains(Money::from_major(200)));
        assert!(!domain.contains(Money::from_cents(20001)));
    }

    #[test]
    fn test_price_domain_rules() {
        assert!(PriceDomain::from_units(-10, 200, 10).is_err());
        assert!(PriceDomain::from_units(50, 40, 10).is_err());
        assert!(PriceDomain::from_units(0, 200, 0).is_err());
        assert!(PriceDomain::from_units(100, 100, 10).is_ok());
    }

    #[test]
    fn test_oversized_units_are_rejected() {
        let err = PriceDomain::from_units(0, 100_000_000_000_000_000, 10).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "price_domain.ceiling"));

        assert!(PriceDomain::from_units(i64::MIN, 0, 10).is_err());
        assert!(PriceDomain::from_units(0, 200, i64::MAX).is_err());
    }

    #[test]
    fn test_too_many_steps_are_rejected() {
        let err = PriceDomain::from_units(0, 1_000_000_000_000, 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "price_domain.step"));

        assert!(PriceDomain::from_units(0, 1_000, 1).is_ok());
        assert!(PriceDomain::from_units(0, 1_001, 1).is_err());
    }

    #[test]
    fn test_ticks_near_the_money_limit() {
        // 9e16 and 5e16 units: the second step would overflow past the ceiling
        let domain = PriceDomain::new(
            Money::zero(),
            Money::from_cents(9_000_000_000_000_000_000),
            Money::from_cents(5_000_000_000_000_000_000),
        )
        .unwrap();

        let ticks = domain.ticks();
        assert_eq!(ticks, [Money::zero(), domain.step(), domain.ceiling()]);
    }

    #[test]
    fn test_default_ticks() {
        let ticks = PriceDomain::default().ticks();
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks.first(), Some(&Money::zero()));
        assert_eq!(ticks.last(), Some(&Money::from_major(200)));
    }

    #[test]
    fn test_default_class_priority() {
        let priority = ClassPriority::default();
        assert_eq!(priority.rank(VehicleClass::Mpv), Some(0));
        assert_eq!(priority.rank(VehicleClass::Suv), Some(1));
        assert_eq!(priority.rank(VehicleClass::Sedan), Some(2));
    }

    #[test]
    fn test_class_priority_rules() {
        assert!(ClassPriority::new(vec![]).is_err());

        let err = ClassPriority::new(vec![VehicleClass::Suv, VehicleClass::Suv]).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));

        let partial = ClassPriority::new(vec![VehicleClass::Sedan]).unwrap();
        assert_eq!(partial.rank(VehicleClass::Mpv), None);
    }

    #[test]
    fn test_parse_class_priority_list() {
        let priority = ClassPriority::parse_list("Sedan, SUV ,MPV").unwrap();
        assert_eq!(
            priority.classes(),
            [VehicleClass::Sedan, VehicleClass::Suv, VehicleClass::Mpv]
        );

        assert!(ClassPriority::parse_list("MPV,Truck").is_err());
        assert!(ClassPriority::parse_list(" , ").is_err());
    }
}
