//! # Query Engine
//!
//! Maps (Inventory, FilterState) to the ordered result grid.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Inventory (store order)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rank every vehicle by class priority ── unranked? ──► InvalidState    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  class facet    (empty selection = no restriction)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price facet    (lower <= rate <= upper, always applied)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  capacity facet (empty selection = no restriction)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  STABLE sort by class rank: MPV ► SUV ► Sedan, ties keep store order   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QueryResult ("Showing N vehicles"; empty is not an error)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is re-run in full on every filter change. It is O(n) in the
//! inventory plus an O(k log k) sort of the k matches.

use serde::Serialize;

use crate::config::ClassPriority;
use crate::error::{CoreError, CoreResult};
use crate::filter::FilterState;
use crate::inventory::Inventory;
use crate::types::Vehicle;

// =============================================================================
// Query Result
// =============================================================================

/// The ordered vehicles matching a filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    vehicles: Vec<&'a Vehicle>,
}

impl<'a> QueryResult<'a> {
    /// Matching vehicles, in display order.
    #[inline]
    pub fn vehicles(&self) -> &[&'a Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a Vehicle> + '_ {
        self.vehicles.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicle ids in display order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    /// The count line above the grid.
    pub fn summary(&self) -> String {
        format!("Showing {} vehicles", self.len())
    }
}

// =============================================================================
// Query
// =============================================================================

/// Runs a query with the default class priority (MPV, SUV, Sedan).
pub fn query<'a>(inventory: &'a Inventory, filters: &FilterState) -> CoreResult<QueryResult<'a>> {
    query_with(inventory, filters, &ClassPriority::default())
}

/// Runs a query with an explicit class priority.
///
/// ## Errors
/// `InvalidState` when any vehicle in the inventory, matching or not, has a
/// class missing from `priority`.
///
/// ## Example
/// ```rust
/// use rentdrive_core::{fleet, query_with, ClassPriority, FilterState, VehicleClass};
///
/// let inventory = fleet::default_inventory().unwrap();
/// let sedans_first = ClassPriority::parse_list("Sedan,SUV,MPV").unwrap();
///
/// let result = query_with(&inventory, &FilterState::default(), &sedans_first).unwrap();
/// assert_eq!(result.vehicles()[0].class, VehicleClass::Sedan);
///
/// let mpv_only = ClassPriority::new(vec![VehicleClass::Mpv]).unwrap();
/// assert!(query_with(&inventory, &FilterState::default(), &mpv_only)
///     .unwrap_err()
///     .is_invalid_state());
/// ```
pub fn query_with<'a>(
    inventory: &'a Inventory,
    filters: &FilterState,
    priority: &ClassPriority,
) -> CoreResult<QueryResult<'a>> {
    let ranked = inventory
        .iter()
        .map(|vehicle| {
            priority
                .rank(vehicle.class)
                .map(|rank| (rank, vehicle))
                .ok_or_else(|| CoreError::UnrankedClass {
                    vehicle_id: vehicle.id.clone(),
                    class: vehicle.class.to_string(),
                })
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let mut matches: Vec<(usize, &'a Vehicle)> = ranked
        .into_iter()
        .filter(|(_, v)| filters.matches_class(v))
        .filter(|(_, v)| filters.matches_price(v))
        .filter(|(_, v)| filters.matches_capacity(v))
        .collect();

    // sort_by_key is stable: equal ranks keep store order
    matches.sort_by_key(|(rank, _)| *rank);

    Ok(QueryResult {
        vehicles: matches.into_iter().map(|(_, v)| v).collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
