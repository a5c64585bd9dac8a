//! # Filter Commands
//!
//! View lifecycle and the four filter mutators. Each mutator replaces the
//! view's filter state with the value the core returns and answers with the
//! freshly recomputed page.
//!
//! ## Reset Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "No cars match your filters."                                          │
//! │                 [ Reset Filters ]                                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  {"cmd": "reset_filters"}                                               │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  FilterState::reset ──► full inventory, MPV ► SUV ► Sedan               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rentdrive_core::validation::validate_capacity;
use rentdrive_core::{CoreError, Money, ValidationError};
use tracing::debug;

use crate::commands::{respond, CatalogResponse};
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState};

/// Enters the catalog view with default filters.
pub fn enter_catalog(catalog: &CatalogState, config: &ConfigState) -> Result<CatalogResponse, ApiError> {
    let view = catalog.enter_view();
    respond(catalog, config, &view.filters)
}

/// Leaves the catalog view. Returns whether a view was active.
pub fn leave_catalog(catalog: &CatalogState) -> bool {
    catalog.leave_view()
}

/// Gets the current filters and their page.
pub fn get_filters(catalog: &CatalogState, config: &ConfigState) -> Result<CatalogResponse, ApiError> {
    debug!("get_filters command");
    respond(catalog, config, &catalog.current_filters())
}

/// Ticks or unticks a class checkbox.
///
/// ## Errors
/// `INVALID_ARGUMENT` for an unknown class name.
pub fn toggle_class(
    catalog: &CatalogState,
    config: &ConfigState,
    class: &str,
) -> Result<CatalogResponse, ApiError> {
    debug!(class, "toggle_class command");
    let filters = catalog.apply(|f| f.toggle_class_named(class))?;
    respond(catalog, config, &filters)
}

/// Ticks or unticks a seat checkbox.
///
/// ## Errors
/// `INVALID_ARGUMENT` for zero or negative capacities.
pub fn toggle_capacity(
    catalog: &CatalogState,
    config: &ConfigState,
    capacity: i64,
) -> Result<CatalogResponse, ApiError> {
    debug!(capacity, "toggle_capacity command");
    let capacity = validate_capacity(capacity).map_err(CoreError::from)?;
    let filters = catalog.apply(|f| f.toggle_capacity(capacity))?;
    respond(catalog, config, &filters)
}

/// Moves the price slider. Bounds are whole currency units.
///
/// ## Errors
/// `INVALID_ARGUMENT` for inverted or out-of-domain bounds.
pub fn set_price_range(
    catalog: &CatalogState,
    config: &ConfigState,
    lower: i64,
    upper: i64,
) -> Result<CatalogResponse, ApiError> {
    debug!(lower, upper, "set_price_range command");
    let domain = catalog.config().price_domain;
    let to_money = |units: i64, field: &str| {
        Money::checked_from_major(units).ok_or_else(|| {
            CoreError::from(ValidationError::OutOfRange {
                field: field.to_string(),
                min: domain.floor().dollars(),
                max: domain.ceiling().dollars(),
            })
        })
    };
    let lower = to_money(lower, "price_range.lower")?;
    let upper = to_money(upper, "price_range.upper")?;

    let filters = catalog.apply(|f| f.set_price_range(lower, upper))?;
    respond(catalog, config, &filters)
}

/// Restores the default filters.
pub fn reset_filters(catalog: &CatalogState, config: &ConfigState) -> Result<CatalogResponse, ApiError> {
    debug!("reset_filters command");
    let filters = catalog.apply(|f| Ok(f.reset()))?;
    respond(catalog, config, &filters)
}
