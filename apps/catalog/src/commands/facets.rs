//! # Facet Commands
//!
//! Populates the filter sidebar: class checkboxes, seat checkboxes and the
//! price slider. The registry is computed once at start-up, so this command
//! never touches the inventory.

use rentdrive_core::VehicleClass;
use serde::Serialize;
use tracing::debug;

use crate::state::{CatalogState, ConfigState};

/// Facet controls for the sidebar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetsDto {
    /// Class checkboxes, in display priority order.
    pub classes: Vec<VehicleClass>,
    /// Seat checkboxes, ascending.
    pub capacities: Vec<u32>,
    /// Checkbox labels, e.g. `"7 seats"`.
    pub capacity_labels: Vec<String>,
    pub price_floor_cents: i64,
    pub price_ceiling_cents: i64,
    pub price_step_cents: i64,
    /// Slider stops, for tick marks.
    pub price_ticks: Vec<String>,
}

/// Gets the facet controls.
pub fn get_facets(catalog: &CatalogState, config: &ConfigState) -> FacetsDto {
    debug!("get_facets command");
    let facets = catalog.facets();
    let domain = facets.price_domain;

    FacetsDto {
        classes: facets.classes.clone(),
        capacities: facets.capacities.clone(),
        capacity_labels: facets
            .capacities
            .iter()
            .map(|c| format!("{} seats", c))
            .collect(),
        price_floor_cents: domain.floor().cents(),
        price_ceiling_cents: domain.ceiling().cents(),
        price_step_cents: domain.step().cents(),
        price_ticks: domain
            .ticks()
            .iter()
            .map(|tick| config.format_currency(tick.cents()))
            .collect(),
    }
}
