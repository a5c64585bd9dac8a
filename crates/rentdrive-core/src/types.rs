//! # Domain Types
//!
//! Core domain types used throughout the RentDrive catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │  VehicleClass   │   │  Transmission   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  MPV            │   │  Automatic      │       │
//! │  │  name           │   │  SUV            │   │  Manual         │       │
//! │  │  class          │   │  Sedan          │   └─────────────────┘       │
//! │  │  daily_rate     │   └─────────────────┘                              │
//! │  │  capacity       │                                                    │
//! │  │  featured       │   ┌─────────────────┐                              │
//! │  └─────────────────┘   │  VehicleRecord  │  raw JSON shape, validated   │
//! │                        │  (pricePerDay)  │  into a Vehicle on load      │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Vehicle Class
// =============================================================================

/// The body class of a vehicle. Drives both the class facet and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VehicleClass {
    /// Multi-purpose vehicle (family people carrier).
    #[serde(rename = "MPV")]
    Mpv,
    /// Sport utility vehicle.
    #[serde(rename = "SUV")]
    Suv,
    /// Sedan / saloon.
    Sedan,
}

impl VehicleClass {
    /// Every class, in declaration order.
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Mpv, VehicleClass::Suv, VehicleClass::Sedan];

    /// Display name, also the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mpv => "MPV",
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire name. Names are matched exactly; `"suv"` is rejected.
///
/// ## Example
/// ```rust
/// use rentdrive_core::VehicleClass;
///
/// assert_eq!("SUV".parse::<VehicleClass>().unwrap(), VehicleClass::Suv);
/// assert!("Truck".parse::<VehicleClass>().is_err());
/// ```
impl FromStr for VehicleClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "class".to_string(),
                value: s.to_string(),
                allowed: VehicleClass::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Transmission
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
        }
    }
}

impl FromStr for Transmission {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Automatic" => Ok(Self::Automatic),
            "Manual" => Ok(Self::Manual),
            _ => Err(ValidationError::NotAllowed {
                field: "transmission".to_string(),
                value: s.to_string(),
                allowed: vec!["Automatic".to_string(), "Manual".to_string()],
            }),
        }
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle in the rental fleet.
///
/// Vehicles only exist inside an [`Inventory`](crate::inventory::Inventory),
/// which hands out shared references. Nothing downstream can mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique opaque key.
    pub id: String,

    /// Display name shown on the card.
    pub name: String,

    /// Body class (facet and sort key).
    pub class: VehicleClass,

    /// Rental price per day.
    pub daily_rate: Money,

    /// Number of seats.
    pub capacity: u32,

    /// Gearbox type.
    pub transmission: Transmission,

    /// Image URI. Never interpreted by the core.
    pub image_ref: String,

    /// Shown in the home page highlight strip.
    pub featured: bool,
}

impl Vehicle {
    /// Seat count as the card shows it, e.g. `"7 seats"`.
    pub fn seats_label(&self) -> String {
        format!("{} seats", self.capacity)
    }
}

// =============================================================================
// Vehicle Record
// =============================================================================

/// A vehicle as it arrives from the data-loading collaborator.
///
/// Class and transmission are free strings and the rate is a signed number of
/// whole currency units, so that bad data surfaces as an inventory error
/// naming the offending record instead of a bare parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub class: String,
    pub price_per_day: i64,
    pub capacity: i64,
    pub transmission: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
