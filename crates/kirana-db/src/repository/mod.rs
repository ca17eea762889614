//! # Repository Module
//!
//! Repository interfaces for Kirana POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Dashboard command                                                     │
//! │       │                                                                 │
//! │       │  store.products().list()                                       │
//! │       ▼                                                                 │
//! │  ProductRepository (trait)                                             │
//! │  ├── get(&self, id)                                                    │
//! │  ├── get_by_barcode(&self, barcode)                                    │
//! │  ├── list(&self)                                                       │
//! │  └── upsert(&self, product)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryStore (RwLock<Vec<Product>>)                                    │
//! │                                                                         │
//! │  A SQL-backed store only has to implement the same three traits.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - Catalog lookups and upserts
//! - [`BillRepository`] - Recorded bills
//! - [`UserRepository`] - Mock staff accounts

use async_trait::async_trait;
use kirana_core::{Bill, Product, User};

use crate::error::DbResult;

/// Catalog access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Product by id.
    async fn get(&self, id: &str) -> DbResult<Product>;

    /// Product by exact barcode.
    async fn get_by_barcode(&self, barcode: &str) -> DbResult<Product>;

    /// Whole catalog, newest first.
    async fn list(&self) -> DbResult<Vec<Product>>;

    /// Replaces the product with the same id, or inserts it at the head
    /// of the catalog. A new id may not reuse an existing barcode.
    async fn upsert(&self, product: Product) -> DbResult<Product>;
}

/// Bill history.
#[async_trait]
pub trait BillRepository: Send + Sync {
    async fn list(&self) -> DbResult<Vec<Bill>>;

    async fn insert(&self, bill: Bill) -> DbResult<Bill>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DbResult<Vec<User>>;
}
