//! # RentDrive Fleet
//!
//! The built-in inventory the site ships with. Store order matters: it is the
//! tie-break inside each class when results are sorted.

use crate::error::CoreResult;
use crate::inventory::Inventory;
use crate::types::VehicleRecord;

/// (id, name, class, price per day, seats, transmission, image, featured)
const FLEET: &[(&str, &str, &str, i64, i64, &str, &str, bool)] = &[
    (
        "1",
        "Toyota Alphard",
        "MPV",
        150,
        7,
        "Automatic",
        "https://images.unsplash.com/photo-1559416523-140ddc3d238c?w=800&auto=format&fit=crop&q=60",
        true,
    ),
    (
        "2",
        "Honda CR-V",
        "SUV",
        95,
        5,
        "Automatic",
        "https://images.unsplash.com/photo-1568844293986-8c1a5c4fe939?w=800&auto=format&fit=crop&q=60",
        true,
    ),
    (
        "3",
        "Toyota Innova",
        "MPV",
        85,
        7,
        "Automatic",
        "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=800&auto=format&fit=crop&q=60",
        true,
    ),
    (
        "4",
        "Mitsubishi Pajero",
        "SUV",
        120,
        7,
        "Automatic",
        "https://images.unsplash.com/photo-1519641471654-76ce0107ad1b?w=800&auto=format&fit=crop&q=60",
        true,
    ),
    (
        "5",
        "Hyundai Stargazer",
        "MPV",
        75,
        7,
        "Automatic",
        "https://images.unsplash.com/photo-1605559424843-9e4c228bf1c2?w=800&auto=format&fit=crop&q=60",
        false,
    ),
    (
        "6",
        "Mazda CX-5",
        "SUV",
        100,
        5,
        "Automatic",
        "https://images.unsplash.com/photo-1606664515524-ed2f786a0bd6?w=800&auto=format&fit=crop&q=60",
        false,
    ),
    (
        "7",
        "Toyota Avanza",
        "MPV",
        55,
        7,
        "Manual",
        "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?w=800&auto=format&fit=crop&q=60",
        false,
    ),
    (
        "8",
        "Honda Civic",
        "Sedan",
        70,
        5,
        "Automatic",
        "https://images.unsplash.com/photo-1590362891991-f776e747a588?w=800&auto=format&fit=crop&q=60",
        false,
    ),
    (
        "9",
        "Toyota Camry",
        "Sedan",
        90,
        5,
        "Automatic",
        "https://images.unsplash.com/photo-1621007947382-bb3c3994e3fb?w=800&auto=format&fit=crop&q=60",
        false,
    ),
];

/// The fleet as raw records, for callers that want to extend it.
pub fn fleet_records() -> Vec<VehicleRecord> {
    FLEET
        .iter()
        .map(
            |&(id, name, class, price_per_day, capacity, transmission, image, featured)| VehicleRecord {
                id: id.to_string(),
                name: name.to_string(),
                class: class.to_string(),
                price_per_day,
                capacity,
                transmission: transmission.to_string(),
                image: image.to_string(),
                featured,
            },
        )
        .collect()
}

/// The fleet as a validated inventory.
pub fn default_inventory() -> CoreResult<Inventory> {
    Inventory::from_records(fleet_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VehicleClass;

    #[test]
    fn test_fleet_loads() {
        let inventory = default_inventory().unwrap();
        assert_eq!(inventory.len(), 9);

        let count = |class| inventory.iter().filter(|v| v.class == class).count();
        assert_eq!(count(VehicleClass::Mpv), 4);
        assert_eq!(count(VehicleClass::Suv), 3);
        assert_eq!(count(VehicleClass::Sedan), 2);
    }

    #[test]
    fn test_featured_vehicles() {
        let inventory = default_inventory().unwrap();
        let featured: Vec<&str> = inventory.featured().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            featured,
            ["Toyota Alphard", "Honda CR-V", "Toyota Innova", "Mitsubishi Pajero"]
        );
    }
}
