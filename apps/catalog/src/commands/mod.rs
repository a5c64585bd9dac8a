//! # Catalog Commands Module
//!
//! All commands exposed to the web front end through the bridge.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, shared DTOs)
//! ├── facets.rs   ◄─── Facet control population
//! ├── filters.rs  ◄─── View lifecycle and filter mutations
//! └── catalog.rs  ◄─── Result grid, featured strip, vehicle lookup
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Command Flow                                 │
//! │                                                                         │
//! │  Front end writes one line:                                             │
//! │    {"cmd": "toggle_class", "args": {"class": "SUV"}}                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  bridge::dispatch ──► commands::filters::toggle_class(catalog, config)  │
//! │         │                 │                                             │
//! │         │                 ├── FilterState::toggle_class (pure)          │
//! │         │                 └── query_with (full recompute)               │
//! │         ▼                                                               │
//! │  Front end reads one line:                                              │
//! │    {"ok": true, "data": {"filters": {...}, "page": {...}}}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every filter mutation answers with the recomputed page, so the grid is
//! never out of date with the controls.

pub mod catalog;
pub mod facets;
pub mod filters;

use rentdrive_core::{FilterState, Transmission, Vehicle, VehicleClass};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// A vehicle card as rendered in the grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCard {
    pub id: String,
    pub name: String,
    pub class: VehicleClass,
    pub daily_rate_cents: i64,
    /// e.g. `"$95"`
    pub price_label: String,
    pub capacity: u32,
    /// e.g. `"7 seats"`
    pub seats_label: String,
    pub transmission: Transmission,
    pub image_ref: String,
    pub featured: bool,
}

impl VehicleCard {
    pub fn new(vehicle: &Vehicle, config: &ConfigState) -> Self {
        VehicleCard {
            id: vehicle.id.clone(),
            name: vehicle.name.clone(),
            class: vehicle.class,
            daily_rate_cents: vehicle.daily_rate.cents(),
            price_label: config.format_currency(vehicle.daily_rate.cents()),
            capacity: vehicle.capacity,
            seats_label: vehicle.seats_label(),
            transmission: vehicle.transmission,
            image_ref: vehicle.image_ref.clone(),
            featured: vehicle.featured,
        }
    }
}

/// The result grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub vehicles: Vec<VehicleCard>,
    pub count: usize,
    /// "Showing N vehicles"
    pub summary: String,
    /// Show the empty-state card with its reset button.
    pub empty: bool,
}

/// The facet controls' checked/slider state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersDto {
    pub selected_classes: Vec<VehicleClass>,
    pub selected_capacities: Vec<u32>,
    pub price_lower_cents: i64,
    pub price_upper_cents: i64,
    /// e.g. `"Price Range: $0 - $200/day"`
    pub price_label: String,
    /// Whether a reset would change anything.
    pub is_default: bool,
}

impl FiltersDto {
    pub fn new(filters: &FilterState, config: &ConfigState) -> Self {
        let range = filters.price_range();
        FiltersDto {
            selected_classes: filters.selected_classes().iter().copied().collect(),
            selected_capacities: filters.selected_capacities().iter().copied().collect(),
            price_lower_cents: range.lower.cents(),
            price_upper_cents: range.upper.cents(),
            price_label: format!(
                "Price Range: {} - {}/day",
                config.format_currency(range.lower.cents()),
                config.format_currency(range.upper.cents())
            ),
            is_default: filters.is_default(),
        }
    }
}

/// Filters plus the page they produce.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub filters: FiltersDto,
    pub page: CatalogPage,
}

/// Runs the query for `filters` and packages the response.
pub(crate) fn respond(
    catalog: &CatalogState,
    config: &ConfigState,
    filters: &FilterState,
) -> Result<CatalogResponse, ApiError> {
    let result = catalog.run_query(filters)?;
    let vehicles: Vec<VehicleCard> = result.iter().map(|v| VehicleCard::new(v, config)).collect();

    Ok(CatalogResponse {
        filters: FiltersDto::new(filters, config),
        page: CatalogPage {
            count: vehicles.len(),
            summary: result.summary(),
            empty: result.is_empty(),
            vehicles,
        },
    })
}
