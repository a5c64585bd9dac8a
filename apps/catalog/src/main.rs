//! # RentDrive Catalog Entry Point
//!
//! Stands behind the catalog page of the web front end. The front end writes
//! commands to stdin and reads results from stdout.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Web front end (Vehicles page)                                          │
//! │        │  {"cmd": "toggle_class", ...}          ▲  {"ok": true, ...}   │
//! │        ▼                                        │                       │
//! │  rentdrive-catalog ── bridge ── commands ── rentdrive-core              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    rentdrive_catalog::run()
}
