//! # rentdrive-core: Catalog Query Engine for RentDrive
//!
//! This crate holds the only real decision logic of the RentDrive site:
//! filtering a fixed vehicle inventory by the facets a visitor selects and
//! ordering the result. Everything here is a pure function over in-memory
//! data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RentDrive Catalog Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front End                                │   │
//! │  │    Class checkboxes ──► Price slider ──► Seat checkboxes        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON line bridge                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/catalog commands                        │   │
//! │  │    toggle_class, set_price_range, reset_filters, query_catalog  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rentdrive-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  facets   │  │  filter   │  │   query   │  │   │
//! │  │   │  Vehicle  │  │ capacities│  │FilterState│  │ class-    │  │   │
//! │  │   │  records  │  │ registry  │  │ toggles   │  │ priority  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, VehicleClass, Transmission)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Filter and inventory input validation
//! - [`config`] - Price domain and class priority policy
//! - [`inventory`] - The immutable inventory store
//! - [`facets`] - Facet registry (selectable capacities)
//! - [`filter`] - Filter state and its pure mutators
//! - [`query`] - The query engine
//! - [`fleet`] - The built-in RentDrive fleet
//!
//! ## Example Usage
//!
//! ```rust
//! use rentdrive_core::{fleet, query, FilterState, Money, VehicleClass};
//!
//! let inventory = fleet::default_inventory().unwrap();
//!
//! let filters = FilterState::default()
//!     .toggle_class(VehicleClass::Suv)
//!     .set_price_range(Money::from_major(90), Money::from_major(200))
//!     .unwrap();
//!
//! let result = query(&inventory, &filters).unwrap();
//! let names: Vec<&str> = result.iter().map(|v| v.name.as_str()).collect();
//! assert_eq!(names, ["Honda CR-V", "Mitsubishi Pajero", "Mazda CX-5"]);
//! assert_eq!(result.summary(), "Showing 3 vehicles");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod fleet;
pub mod inventory;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{CatalogConfig, ClassPriority, PriceDomain};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use facets::{capacities, FacetRegistry};
pub use filter::{FilterState, PriceRange};
pub use inventory::Inventory;
pub use money::Money;
pub use query::{query, query_with, QueryResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest selectable daily rate, in whole currency units.
pub const PRICE_FLOOR_UNITS: i64 = 0;

/// Highest selectable daily rate, in whole currency units.
///
/// ## Business Reason
/// Matches the top of the catalog's price slider. Vehicles priced above the
/// ceiling can never match the price facet.
pub const PRICE_CEILING_UNITS: i64 = 200;

/// Slider granularity, in whole currency units.
pub const PRICE_STEP_UNITS: i64 = 10;
