//! # kirana-db: Repository Layer for Kirana POS
//!
//! This crate owns the catalog, the bill history and the staff list. All
//! data lives in memory and is rebuilt from mock data on every start.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana POS Data Flow                             │
//! │                                                                         │
//! │  Dashboard command (list_products, scan flush, checkout)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kirana-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  MemoryStore  │    │  Repositories │    │  Seed data   │  │   │
//! │  │   │  (memory.rs)  │    │  (traits)     │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ RwLock<Vec>   │───►│ ProductRepo   │    │ 10 products  │  │   │
//! │  │   │ per entity    │    │ BillRepo      │    │ 2 bills      │  │   │
//! │  │   │               │    │ UserRepo      │    │ 2 users      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Repository error types
//! - [`repository`] - Repository traits
//! - [`memory`] - In-memory implementation
//! - [`seed`] - Mock catalog, bills and users
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kirana_db::{MemoryStore, ProductRepository};
//!
//! let store = MemoryStore::seeded(Utc::now());
//! let salt = store.products().get_by_barcode("8901234567890").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use memory::{MemoryBills, MemoryProducts, MemoryStore, MemoryUsers};
pub use repository::{BillRepository, ProductRepository, UserRepository};
