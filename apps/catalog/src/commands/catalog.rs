//! # Catalog Commands
//!
//! Read-only views over the inventory: the result grid, the home page's
//! featured strip, single vehicle lookup and the booking form's select.

use rentdrive_core::Inventory;
use serde::Serialize;
use tracing::debug;

use crate::commands::{respond, CatalogPage, VehicleCard};
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// One entry of the booking form's vehicle select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    pub id: String,
    pub name: String,
}

/// Gets the result grid for the active view's filters.
pub fn query_catalog(catalog: &CatalogState, config: &ConfigState) -> Result<CatalogPage, ApiError> {
    debug!("query_catalog command");
    let response = respond(catalog, config, &catalog.current_filters())?;
    Ok(response.page)
}

/// Gets the featured vehicles, in store order.
pub fn get_featured(catalog: &CatalogState, config: &ConfigState) -> Vec<VehicleCard> {
    debug!("get_featured command");
    catalog
        .inventory()
        .featured()
        .into_iter()
        .map(|v| VehicleCard::new(v, config))
        .collect()
}

/// Gets a vehicle by ID.
///
/// ## Errors
/// `NOT_FOUND` when no vehicle has this ID.
pub fn get_vehicle(catalog: &CatalogState, config: &ConfigState, id: &str) -> Result<VehicleCard, ApiError> {
    debug!(id, "get_vehicle command");
    catalog
        .inventory()
        .get(id)
        .map(|v| VehicleCard::new(v, config))
        .ok_or_else(|| ApiError::not_found("Vehicle", id))
}

/// Lists every vehicle for the booking form, in store order.
pub fn list_booking_options(catalog: &CatalogState) -> Vec<BookingOption> {
    booking_options(catalog.inventory())
}

fn booking_options(inventory: &Inventory) -> Vec<BookingOption> {
    inventory
        .iter()
        .map(|v| BookingOption {
            id: v.id.clone(),
            name: v.name.clone(),
        })
        .collect()
}
