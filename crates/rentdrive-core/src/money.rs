//! # Money Module
//!
//! Provides the `Money` type for daily rates and price bounds.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE BOUNDARY PROBLEM                                                   │
//! │                                                                         │
//! │  The price facet is inclusive at both ends:                             │
//! │    lower <= daily_rate <= upper                                         │
//! │                                                                         │
//! │  With floating point, a $90 rate computed as 89.99999999 silently       │
//! │  drops out of a [90, 200] band.                                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    9000 cents <= 9000 cents  ✓ exact, every time                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rentdrive_core::money::Money;
//!
//! let rate = Money::from_major(95);      // $95.00 per day
//! let step = Money::from_cents(1000);    // $10.00 slider step
//!
//! assert_eq!((rate + step).cents(), 10500);
//! assert_eq!(format!("{}", rate), "$95.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Vehicle.daily_rate ──────┬──► price filter (inclusive compare)        │
/// │                           │                                             │
/// │                           └──► Displayed as "$95 / day" on the card     │
/// │                                                                         │
/// │  PriceDomain floor/ceiling/step ──► PriceRange lower/upper             │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::money::Money;
    ///
    /// let rate = Money::from_cents(9550); // $95.50
    /// assert_eq!(rate.cents(), 9550);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Slider positions and the inventory's `pricePerDay` are whole units,
    /// so this is the usual entry point at the edges of the system.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(200).cents(), 20000);
    /// ```
    #[inline]
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    /// Like [`Money::from_major`], but `None` instead of overflowing.
    #[inline]
    pub const fn checked_from_major(units: i64) -> Option<Self> {
        match units.checked_mul(100) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checked addition. `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and error messages. Card labels go through the shell's
/// currency formatter, which honours the configured symbol and decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by i64 (slider tick offsets).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, times: i64) -> Self {
        Money(self.0 * times)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(95).cents(), 9500);
        assert_eq!(Money::from_major(0), Money::zero());
        assert_eq!(Money::checked_from_major(90), Some(Money::from_major(90)));
        assert_eq!(Money::checked_from_major(i64::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major(150)), "$150.00");
        assert_eq!(format!("{}", Money::from_cents(9550)), "$95.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let floor = Money::from_major(0);
        let step = Money::from_major(10);
        assert_eq!(floor + step * 3, Money::from_major(30));
        assert_eq!(floor.checked_add(step), Some(Money::from_major(10)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_ordering_is_exact_at_boundaries() {
        let bound = Money::from_major(90);
        let rate = Money::from_cents(9000);
        assert!(bound <= rate && rate <= bound);
        assert!(Money::from_cents(8999) < bound);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
