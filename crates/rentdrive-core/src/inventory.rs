//! # Inventory Store
//!
//! The immutable, ordered collection of vehicles the catalog works over.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  start-up                                                               │
//! │     │  records (JSON file or built-in fleet)                            │
//! │     ▼                                                                   │
//! │  Inventory::from_records ──► validate every record ──► fail fast        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Inventory (frozen) ──► shared read-only by facets, query, lookups      │
//! │                                                                         │
//! │  Store order is significant: it is the tie-break of the query sort.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Transmission, Vehicle, VehicleClass, VehicleRecord};
use crate::validation::{
    validate_capacity, validate_daily_rate_units, validate_vehicle_id, validate_vehicle_name,
};

/// The inventory store.
///
/// There is no way to add, remove or modify a vehicle after construction.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    vehicles: Vec<Vehicle>,
    by_id: HashMap<String, usize>,
}

impl Inventory {
    /// Builds an inventory from typed vehicles, in the given order.
    ///
    /// ## Errors
    /// `InvalidState` when a vehicle has an empty id or name, a zero
    /// capacity, a negative rate, or an id already used by an earlier vehicle.
    pub fn new(vehicles: Vec<Vehicle>) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(vehicles.len());

        for (position, vehicle) in vehicles.iter().enumerate() {
            check_vehicle(vehicle)?;
            if by_id.insert(vehicle.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateVehicle(vehicle.id.clone()));
            }
        }

        Ok(Inventory { vehicles, by_id })
    }

    /// Builds an inventory from raw records, validating each one.
    pub fn from_records(records: Vec<VehicleRecord>) -> CoreResult<Self> {
        let vehicles = records
            .into_iter()
            .map(vehicle_from_record)
            .collect::<CoreResult<Vec<_>>>()?;

        Inventory::new(vehicles)
    }

    /// Parses a JSON array of records (the site's `cars` data shape).
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_core::Inventory;
    ///
    /// let json = r#"[{"id": "8", "name": "Honda Civic", "type": "Sedan",
    ///     "pricePerDay": 70, "capacity": 5, "transmission": "Automatic",
    ///     "image": "civic.jpg"}]"#;
    /// let inventory = Inventory::from_json_str(json).unwrap();
    /// assert_eq!(inventory.len(), 1);
    ///
    /// let bad = json.replace("Sedan", "Truck");
    /// assert!(Inventory::from_json_str(&bad).unwrap_err().is_invalid_state());
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let records: Vec<VehicleRecord> = serde_json::from_str(json)?;
        Inventory::from_records(records)
    }

    /// Vehicles in store order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Looks a vehicle up by id.
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.by_id.get(id).map(|&position| &self.vehicles[position])
    }

    /// The home page highlight subset, in store order.
    pub fn featured(&self) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.featured).collect()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}

// =============================================================================
// Record Checks
// =============================================================================

fn check_vehicle(vehicle: &Vehicle) -> CoreResult<()> {
    let reason = validate_vehicle_id(&vehicle.id)
        .and_then(|_| validate_vehicle_name(&vehicle.name))
        .and_then(|_| validate_capacity(i64::from(vehicle.capacity)).map(|_| ()))
        .and_then(|_| {
            if vehicle.daily_rate.is_negative() {
                Err(ValidationError::OutOfRange {
                    field: "dailyRate".to_string(),
                    min: 0,
                    max: i64::MAX / 100,
                })
            } else {
                Ok(())
            }
        });

    reason.map_err(|reason| invalid_record(&vehicle.id, reason))
}

fn vehicle_from_record(record: VehicleRecord) -> CoreResult<Vehicle> {
    let id = record.id;
    let convert = || -> Result<Vehicle, ValidationError> {
        validate_vehicle_id(&id)?;
        validate_vehicle_name(&record.name)?;
        let class: VehicleClass = record.class.parse()?;
        let transmission: Transmission = record.transmission.parse()?;
        let daily_rate = validate_daily_rate_units(record.price_per_day)?;
        let capacity = validate_capacity(record.capacity)?;

        Ok(Vehicle {
            id: id.clone(),
            name: record.name.clone(),
            class,
            daily_rate,
            capacity,
            transmission,
            image_ref: record.image.clone(),
            featured: record.featured,
        })
    };

    convert().map_err(|reason| invalid_record(&id, reason))
}

fn invalid_record(vehicle_id: &str, reason: ValidationError) -> CoreError {
    CoreError::InvalidRecord {
        vehicle_id: vehicle_id.to_string(),
        reason,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn record(id: &str, class: &str, price: i64, capacity: i64) -> VehicleRecord {
        VehicleRecord {
            id: id.to_string(),
            name: format!("Vehicle {}", id),
            class: class.to_string(),
            price_per_day: price,
            capacity,
            transmission: "Automatic".to_string(),
            image: format!("https://img.example/{}.jpg", id),
            featured: false,
        }
    }

    #[test]
    fn test_from_records_keeps_store_order() {
        let inventory = Inventory::from_records(vec![
            record("b", "Sedan", 70, 5),
            record("a", "MPV", 150, 7),
        ])
        .unwrap();

        let ids: Vec<&str> = inventory.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(inventory.get("a").unwrap().daily_rate, Money::from_major(150));
        assert!(inventory.get("zzz").is_none());
    }

    #[test]
    fn test_unknown_class_is_invalid_state() {
        let err = Inventory::from_records(vec![record("1", "Truck", 90, 3)]).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(matches!(err, CoreError::InvalidRecord { ref vehicle_id, .. } if vehicle_id == "1"));
    }

    #[test]
    fn test_bad_fields_are_invalid_state() {
        assert!(Inventory::from_records(vec![record("1", "MPV", 90, 0)])
            .unwrap_err()
            .is_invalid_state());
        assert!(Inventory::from_records(vec![record("1", "MPV", -5, 7)])
            .unwrap_err()
            .is_invalid_state());
        assert!(Inventory::from_records(vec![record("", "MPV", 90, 7)])
            .unwrap_err()
            .is_invalid_state());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Inventory::from_records(vec![record("1", "MPV", 90, 7), record("1", "SUV", 95, 5)])
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateVehicle(ref id) if id == "1"));
    }

    #[test]
    fn test_malformed_json_is_invalid_state() {
        let err = Inventory::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::MalformedInventory(_)));
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_featured_subset() {
        let mut featured = record("2", "SUV", 95, 5);
        featured.featured = true;
        let inventory =
            Inventory::from_records(vec![record("1", "MPV", 150, 7), featured]).unwrap();

        let ids: Vec<&str> = inventory.featured().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::new(Vec::new()).unwrap();
        assert!(inventory.is_empty());
        assert!(inventory.featured().is_empty());
    }
}
