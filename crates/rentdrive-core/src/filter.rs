//! # Filter State
//!
//! The facet selection of one catalog view, with pure mutators.
//!
//! ## Mutator Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Facet control            Mutator                 Result                │
//! │  ─────────────            ───────                 ──────                │
//! │                                                                         │
//! │  Class checkbox ────────► toggle_class() ───────► add or remove class  │
//! │                                                                         │
//! │  Seat checkbox ─────────► toggle_capacity() ────► add or remove seats  │
//! │                                                                         │
//! │  Price slider ──────────► set_price_range() ────► replace (validated)  │
//! │                                                                         │
//! │  Reset button ──────────► reset() ──────────────► defaults             │
//! │                                                                         │
//! │  Every mutator takes `&self` and returns a NEW FilterState. The old    │
//! │  value stays readable while the new one is computed.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Empty Means Everything
//! An empty class or capacity selection places no restriction on that facet.
//! The price range always applies, but its default spans the whole domain.

use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use crate::config::PriceDomain;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Vehicle, VehicleClass};
use crate::validation::{validate_capacity, validate_price_range};

// =============================================================================
// Price Range
// =============================================================================

/// An inclusive price band. Always `lower <= upper` once inside a FilterState.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub lower: Money,
    pub upper: Money,
}

impl PriceRange {
    /// Whether `rate` lies inside the band. Both ends are inclusive.
    #[inline]
    pub fn contains(&self, rate: Money) -> bool {
        self.lower <= rate && rate <= self.upper
    }
}

impl From<&PriceDomain> for PriceRange {
    /// The full domain, i.e. the default band.
    fn from(domain: &PriceDomain) -> Self {
        PriceRange {
            lower: domain.floor(),
            upper: domain.ceiling(),
        }
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// The facet selection of a catalog view.
///
/// Fields are private so that every value in circulation satisfies the
/// invariants: bounds inside the domain and ordered, capacities positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    selected_classes: BTreeSet<VehicleClass>,
    price_range: PriceRange,
    selected_capacities: BTreeSet<u32>,
    #[serde(skip)]
    domain: PriceDomain,
}

impl FilterState {
    /// Default selection over `domain`: no classes, full range, no capacities.
    pub fn new(domain: PriceDomain) -> Self {
        FilterState {
            selected_classes: BTreeSet::new(),
            price_range: PriceRange::from(&domain),
            selected_capacities: BTreeSet::new(),
            domain,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn selected_classes(&self) -> &BTreeSet<VehicleClass> {
        &self.selected_classes
    }

    #[inline]
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    #[inline]
    pub fn selected_capacities(&self) -> &BTreeSet<u32> {
        &self.selected_capacities
    }

    #[inline]
    pub fn domain(&self) -> &PriceDomain {
        &self.domain
    }

    /// Whether the class checkbox for `class` is ticked.
    pub fn is_class_selected(&self, class: VehicleClass) -> bool {
        self.selected_classes.contains(&class)
    }

    /// Whether the seat checkbox for `capacity` is ticked.
    pub fn is_capacity_selected(&self, capacity: u32) -> bool {
        self.selected_capacities.contains(&capacity)
    }

    /// Whether this equals the state `reset` would produce.
    pub fn is_default(&self) -> bool {
        *self == self.reset()
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Adds `class` to the selection, or removes it if already present.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::{FilterState, VehicleClass};
    ///
    /// let state = FilterState::default();
    /// let toggled = state.toggle_class(VehicleClass::Mpv);
    /// assert!(toggled.is_class_selected(VehicleClass::Mpv));
    /// assert_eq!(toggled.toggle_class(VehicleClass::Mpv), state);
    /// ```
    pub fn toggle_class(&self, class: VehicleClass) -> Self {
        let mut next = self.clone();
        if !next.selected_classes.remove(&class) {
            next.selected_classes.insert(class);
        }
        next
    }

    /// Toggles a class given by its wire name.
    ///
    /// ## Errors
    /// `InvalidArgument` when `name` is not a known class.
    pub fn toggle_class_named(&self, name: &str) -> CoreResult<Self> {
        let class: VehicleClass = name.parse()?;
        Ok(self.toggle_class(class))
    }

    /// Adds `capacity` to the selection, or removes it if already present.
    ///
    /// ## Errors
    /// `InvalidArgument` when `capacity` is zero.
    pub fn toggle_capacity(&self, capacity: u32) -> CoreResult<Self> {
        let capacity = validate_capacity(i64::from(capacity))?;

        let mut next = self.clone();
        if !next.selected_capacities.remove(&capacity) {
            next.selected_capacities.insert(capacity);
        }
        Ok(next)
    }

    /// Replaces the price band.
    ///
    /// ## Errors
    /// `InvalidArgument` when `lower > upper` or either bound lies outside
    /// the price domain. Bounds are never clamped.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::{FilterState, Money};
    ///
    /// let state = FilterState::default();
    /// assert!(state.set_price_range(Money::from_major(50), Money::from_major(120)).is_ok());
    /// assert!(state.set_price_range(Money::from_major(120), Money::from_major(50)).is_err());
    /// assert!(state.set_price_range(Money::from_major(0), Money::from_major(250)).is_err());
    /// ```
    pub fn set_price_range(&self, lower: Money, upper: Money) -> CoreResult<Self> {
        validate_price_range(lower, upper, &self.domain)?;

        let mut next = self.clone();
        next.price_range = PriceRange { lower, upper };
        Ok(next)
    }

    /// Returns the default selection, whatever the current one is.
    pub fn reset(&self) -> Self {
        FilterState::new(self.domain)
    }

    // -------------------------------------------------------------------------
    // Predicates
    // -------------------------------------------------------------------------

    /// Whether `vehicle` passes the class facet.
    #[inline]
    pub fn matches_class(&self, vehicle: &Vehicle) -> bool {
        self.selected_classes.is_empty() || self.selected_classes.contains(&vehicle.class)
    }

    /// Whether `vehicle` passes the price facet.
    #[inline]
    pub fn matches_price(&self, vehicle: &Vehicle) -> bool {
        self.price_range.contains(vehicle.daily_rate)
    }

    /// Whether `vehicle` passes the capacity facet.
    #[inline]
    pub fn matches_capacity(&self, vehicle: &Vehicle) -> bool {
        self.selected_capacities.is_empty() || self.selected_capacities.contains(&vehicle.capacity)
    }

    /// Whether `vehicle` passes every facet.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.matches_class(vehicle) && self.matches_price(vehicle) && self.matches_capacity(vehicle)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::new(PriceDomain::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
