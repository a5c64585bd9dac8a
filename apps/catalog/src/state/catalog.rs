//! # Catalog State
//!
//! Owns the inventory, its facet registry, and the filter state of the
//! active catalog view.
//!
//! ## View Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog View Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐  enter_view()  ┌──────────────┐  leave_view()  ┌───────┐ │
//! │  │ No view  │──────────────► │ Active view  │──────────────► │ Gone  │ │
//! │  └──────────┘                │ FilterState  │                └───────┘ │
//! │       ▲                      └──────┬───────┘                    │     │
//! │       │                             │ toggle / set / reset       │     │
//! │       │                             ▼                            │     │
//! │       │                 replace state, re-run query              │     │
//! │       └──────────────────────────────────────────────────────────┘     │
//! │                                                                         │
//! │  Filter state is never persisted. Leaving the view drops it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The view sits behind a `Mutex`: one active view, one mutation at a time.
//! Inventory and facets are immutable and shared through `Arc`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::{DateTime, Utc};
use rentdrive_core::{
    query_with, CatalogConfig, CoreResult, FacetRegistry, FilterState, Inventory, QueryResult,
};
use tracing::{debug, info};
use uuid::Uuid;

/// The filter state of one visit to the catalog page.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Identifies the view in logs.
    pub id: Uuid,

    /// When the view was entered.
    pub entered_at: DateTime<Utc>,

    /// Current facet selection.
    pub filters: FilterState,
}

impl CatalogView {
    fn enter(config: &CatalogConfig) -> Self {
        CatalogView {
            id: Uuid::new_v4(),
            entered_at: Utc::now(),
            filters: FilterState::new(config.price_domain),
        }
    }
}

/// Shell-managed catalog state.
#[derive(Debug)]
pub struct CatalogState {
    inventory: Arc<Inventory>,
    config: CatalogConfig,
    facets: FacetRegistry,
    view: Mutex<Option<CatalogView>>,
}

impl CatalogState {
    /// Creates the state and computes the facet registry once.
    pub fn new(inventory: Arc<Inventory>, config: CatalogConfig) -> Self {
        let facets = FacetRegistry::build(&inventory, &config);
        info!(
            vehicles = inventory.len(),
            capacities = ?facets.capacities,
            "Catalog state initialized"
        );

        CatalogState {
            inventory,
            config,
            facets,
            view: Mutex::new(None),
        }
    }

    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[inline]
    pub fn facets(&self) -> &FacetRegistry {
        &self.facets
    }

    #[inline]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Enters the catalog view with default filters, replacing any view.
    pub fn enter_view(&self) -> CatalogView {
        let view = CatalogView::enter(&self.config);
        info!(view_id = %view.id, "Catalog view entered");

        let mut slot = self.view.lock().expect("Catalog view mutex poisoned");
        *slot = Some(view.clone());
        view
    }

    /// Leaves the catalog view, discarding its filters.
    ///
    /// Returns `false` when no view was active.
    pub fn leave_view(&self) -> bool {
        let mut slot = self.view.lock().expect("Catalog view mutex poisoned");
        match slot.take() {
            Some(view) => {
                let seconds = (Utc::now() - view.entered_at).num_seconds();
                info!(view_id = %view.id, seconds, "Catalog view left");
                true
            }
            None => false,
        }
    }

    /// The active view's filters. Enters a view first if none is active.
    pub fn current_filters(&self) -> FilterState {
        self.with_view(|view| view.filters.clone())
    }

    /// Applies a pure mutator to the active view's filters.
    ///
    /// The view keeps its old filters when the mutator fails.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let filters = catalog.apply(|f| f.toggle_capacity(7))?;
    /// ```
    pub fn apply<F>(&self, mutate: F) -> CoreResult<FilterState>
    where
        F: FnOnce(&FilterState) -> CoreResult<FilterState>,
    {
        self.with_view(|view| {
            let next = mutate(&view.filters)?;
            debug!(view_id = %view.id, filters = ?next, "Filters updated");
            view.filters = next.clone();
            Ok(next)
        })
    }

    /// Runs the query engine over the inventory.
    pub fn run_query(&self, filters: &FilterState) -> CoreResult<QueryResult<'_>> {
        let start = Instant::now();
        let result = query_with(&self.inventory, filters, &self.config.class_priority)?;

        debug!(
            matches = result.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Catalog query complete"
        );
        Ok(result)
    }

    fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogView) -> R,
    {
        let mut slot = self.view.lock().expect("Catalog view mutex poisoned");
        let view = slot.get_or_insert_with(|| {
            let view = CatalogView::enter(&self.config);
            debug!(view_id = %view.id, "Catalog view entered implicitly");
            view
        });
        f(view)
    }
}
