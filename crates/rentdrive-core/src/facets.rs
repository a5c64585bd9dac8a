//! # Facet Registry
//!
//! The selectable facet values offered next to the result grid. Computed
//! once per inventory; independent of any filter state.

use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use crate::config::{CatalogConfig, PriceDomain};
use crate::inventory::Inventory;
use crate::types::VehicleClass;

/// Distinct seat capacities present in `inventory`, ascending.
///
/// ## Example
/// ```rust
/// use rentdrive_core::{capacities, fleet};
///
/// let inventory = fleet::default_inventory().unwrap();
/// assert_eq!(capacities(&inventory), [5, 7]);
/// ```
pub fn capacities(inventory: &Inventory) -> Vec<u32> {
    inventory
        .iter()
        .map(|v| v.capacity)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Everything the facet controls need to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FacetRegistry {
    /// Class checkboxes, in display priority order.
    pub classes: Vec<VehicleClass>,
    /// Seat checkboxes, ascending.
    pub capacities: Vec<u32>,
    /// Slider bounds and step.
    pub price_domain: PriceDomain,
}

impl FacetRegistry {
    pub fn build(inventory: &Inventory, config: &CatalogConfig) -> Self {
        FacetRegistry {
            classes: config.class_priority.classes().to_vec(),
            capacities: capacities(inventory),
            price_domain: config.price_domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Transmission, Vehicle};

    fn vehicle(id: &str, capacity: u32) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: format!("Vehicle {}", id),
            class: VehicleClass::Suv,
            daily_rate: Money::from_major(100),
            capacity,
            transmission: Transmission::Manual,
            image_ref: String::new(),
            featured: false,
        }
    }

    #[test]
    fn test_capacities_sorted_and_deduplicated() {
        let inventory = Inventory::new(vec![
            vehicle("a", 7),
            vehicle("b", 2),
            vehicle("c", 7),
            vehicle("d", 5),
        ])
        .unwrap();
        assert_eq!(capacities(&inventory), [2, 5, 7]);
    }

    #[test]
    fn test_empty_inventory_has_no_capacities() {
        assert!(capacities(&Inventory::default()).is_empty());
    }

    #[test]
    fn test_registry_uses_configured_class_order() {
        let inventory = Inventory::new(vec![vehicle("a", 5)]).unwrap();
        let registry = FacetRegistry::build(&inventory, &CatalogConfig::default());
        assert_eq!(
            registry.classes,
            [VehicleClass::Mpv, VehicleClass::Suv, VehicleClass::Sedan]
        );
        assert_eq!(registry.capacities, [5]);
        assert_eq!(registry.price_domain, PriceDomain::default());
    }
}
