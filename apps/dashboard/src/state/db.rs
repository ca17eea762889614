//! # Store State
//!
//! Wraps the in-memory store and the mock sales history for commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_products(db: &DbState, ...) -> Result<Vec<Product>, ApiError> {
//!     let catalog = db.inner().products().list().await?;
//!     ...
//! }
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use kirana_core::reports;
use kirana_core::DailySale;
use kirana_db::MemoryStore;
use rand::Rng;

/// Wrapper around `MemoryStore` for command state.
///
/// The sales series is generated once at startup and stays fixed for the
/// session, so the charts do not jump between refreshes.
#[derive(Debug, Clone)]
pub struct DbState {
    store: Arc<MemoryStore>,
    daily_sales: Arc<Vec<DailySale>>,
}

impl DbState {
    pub fn new(store: MemoryStore, daily_sales: Vec<DailySale>) -> Self {
        DbState {
            store: Arc::new(store),
            daily_sales: Arc::new(daily_sales),
        }
    }

    /// Seeded store plus a fresh 31-day sales history ending `today`.
    pub fn seeded<R: Rng + ?Sized>(
        now: chrono::DateTime<chrono::Utc>,
        today: NaiveDate,
        rng: &mut R,
    ) -> Self {
        Self::new(
            MemoryStore::seeded(now),
            reports::generate_daily_sales(today, rng),
        )
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.store
    }

    /// Shared handle for background tasks.
    pub fn store(&self) -> Arc<MemoryStore> {
        Arc::clone(&self.store)
    }

    pub fn daily_sales(&self) -> &[DailySale] {
        &self.daily_sales
    }
}
