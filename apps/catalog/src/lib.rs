//! # RentDrive Catalog Library
//!
//! Core library for the RentDrive catalog shell.
//! This is the main entry point that loads configuration and runs the bridge.
//!
//! ## Module Organization
//! ```text
//! rentdrive_catalog/
//! ├── lib.rs          ◄─── You are here (start-up & run)
//! ├── bridge.rs       ◄─── JSON line invoke loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Inventory, facets, active view
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, shared DTOs
//! │   ├── facets.rs   ◄─── Facet control commands
//! │   ├── filters.rs  ◄─── Filter mutation commands
//! │   └── catalog.rs  ◄─── Grid, featured, lookup commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin  ──► requests, one JSON object per line                          │
//! │  stdout ──► responses, one JSON object per line                         │
//! │  stderr ──► tracing output (never mixed into the protocol)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use std::io;
use std::sync::Arc;

use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigState};

/// Runs the catalog shell until stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Load configuration from the environment
/// 3. Load and validate the inventory
/// 4. Build the catalog state (facets computed once)
/// 5. Serve the bridge over stdin/stdout
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting RentDrive catalog v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigState::from_env()?;
    let inventory = config.load_inventory()?;
    let source = config
        .inventory_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in fleet".to_string());
    info!(vehicles = inventory.len(), source = %source, "Inventory loaded");

    let catalog = CatalogState::new(Arc::new(inventory), config.catalog.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    bridge::serve(stdin.lock(), stdout.lock(), &catalog, &config)?;

    info!("RentDrive catalog stopped");
    Ok(())
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,rentdrive=debug";

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` for development
/// - `RUST_LOG=info` for production
/// - Default: `info,rentdrive=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    subscriber(filter).init();
}

/// Formatting subscriber writing to stderr, gated only by `filter`.
fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_env_filter_controls_levels() {
        tracing::subscriber::with_default(subscriber(EnvFilter::new("warn")), || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::DEBUG));
            assert!(!tracing::enabled!(Level::TRACE));
        });
    }

    #[test]
    fn test_default_filter_levels() {
        tracing::subscriber::with_default(subscriber(EnvFilter::new(DEFAULT_LOG_FILTER)), || {
            assert!(tracing::enabled!(target: "rentdrive_catalog::bridge", Level::DEBUG));
            assert!(!tracing::enabled!(target: "rentdrive_catalog::bridge", Level::TRACE));
            assert!(!tracing::enabled!(target: "other_crate", Level::DEBUG));
        });
    }
}
