//! # Inventory State
//!
//! Holds the inventory screen's filter between commands. The catalog
//! itself lives in [`DbState`](super::DbState); this is only the lens.

use std::sync::{Arc, Mutex};

use kirana_core::filter::InventoryFilter;

/// Managed filter state.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    filter: Arc<Mutex<InventoryFilter>>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(low_stock_threshold: i64) -> Self {
        let filter = InventoryFilter {
            low_stock_threshold,
            ..InventoryFilter::default()
        };
        InventoryState {
            filter: Arc::new(Mutex::new(filter)),
        }
    }

    /// Copy of the current filter.
    pub fn snapshot(&self) -> InventoryFilter {
        self.with_filter(|f| f.clone())
    }

    pub fn with_filter<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryFilter) -> R,
    {
        let filter = self.filter.lock().expect("filter mutex poisoned");
        f(&filter)
    }

    pub fn with_filter_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryFilter) -> R,
    {
        let mut filter = self.filter.lock().expect("filter mutex poisoned");
        f(&mut filter)
    }
}
