//! # State Module
//!
//! Application state for the catalog shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        CatalogState          │   │        ConfigState           │   │
//! │  │                              │   │                              │   │
//! │  │  Arc<Inventory>  (frozen)    │   │  price domain, priority      │   │
//! │  │  FacetRegistry   (frozen)    │   │  inventory path              │   │
//! │  │  Mutex<Option<CatalogView>>  │   │  currency symbol             │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: view protected by a Mutex, everything else immutable  │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::{CatalogState, CatalogView};
pub use config::{ConfigError, ConfigState};
