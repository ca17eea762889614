//! # In-Memory Store
//!
//! The only store the dashboard ships with. Each collection sits behind a
//! `tokio::sync::RwLock`, so reads run concurrently and writes are atomic
//! per call.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MemoryStore                                                            │
//! │  ├── products() → MemoryProducts  RwLock<Vec<Product>>  newest first   │
//! │  ├── bills()    → MemoryBills     RwLock<Vec<Bill>>     newest first   │
//! │  └── users()    → MemoryUsers     RwLock<Vec<User>>                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kirana_core::{Bill, Product, User};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{BillRepository, ProductRepository, UserRepository};
use crate::seed;

// =============================================================================
// Store
// =============================================================================

/// All collections of the dashboard.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: MemoryProducts,
    bills: MemoryBills,
    users: MemoryUsers,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the mock catalog, bills and users.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let products = seed::mock_products(now);
        let bills = seed::mock_bills(&products, now);
        let users = seed::mock_users(now);
        debug!(
            products = products.len(),
            bills = bills.len(),
            users = users.len(),
            "Seeded in-memory store"
        );
        Self::with_data(products, bills, users)
    }

    pub fn with_data(products: Vec<Product>, bills: Vec<Bill>, users: Vec<User>) -> Self {
        MemoryStore {
            products: MemoryProducts(RwLock::new(products)),
            bills: MemoryBills(RwLock::new(bills)),
            users: MemoryUsers(RwLock::new(users)),
        }
    }

    pub fn products(&self) -> &MemoryProducts {
        &self.products
    }

    pub fn bills(&self) -> &MemoryBills {
        &self.bills
    }

    pub fn users(&self) -> &MemoryUsers {
        &self.users
    }
}

// =============================================================================
// Products
// =============================================================================

/// Catalog collection.
#[derive(Debug, Default)]
pub struct MemoryProducts(RwLock<Vec<Product>>);

#[async_trait]
impl ProductRepository for MemoryProducts {
    async fn get(&self, id: &str) -> DbResult<Product> {
        self.0
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    async fn get_by_barcode(&self, barcode: &str) -> DbResult<Product> {
        self.0
            .read()
            .await
            .iter()
            .find(|p| p.barcode == barcode)
            .cloned()
            .ok_or_else(|| DbError::not_found("Product", barcode))
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        Ok(self.0.read().await.clone())
    }

    async fn upsert(&self, product: Product) -> DbResult<Product> {
        let mut products = self.0.write().await;

        if products
            .iter()
            .any(|p| p.barcode == product.barcode && p.id != product.id)
        {
            return Err(DbError::duplicate("barcode", product.barcode));
        }

        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                debug!(product_id = %product.id, "Replacing product");
                *existing = product.clone();
            }
            None => {
                debug!(product_id = %product.id, barcode = %product.barcode, "Inserting product");
                products.insert(0, product.clone());
            }
        }

        Ok(product)
    }
}

// =============================================================================
// Bills
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryBills(RwLock<Vec<Bill>>);

#[async_trait]
impl BillRepository for MemoryBills {
    async fn list(&self) -> DbResult<Vec<Bill>> {
        Ok(self.0.read().await.clone())
    }

    async fn insert(&self, bill: Bill) -> DbResult<Bill> {
        let mut bills = self.0.write().await;
        if bills.iter().any(|b| b.id == bill.id) {
            return Err(DbError::duplicate("bill id", bill.id));
        }
        debug!(bill_id = %bill.id, total = %bill.total, "Recording bill");
        bills.insert(0, bill.clone());
        Ok(bill)
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryUsers(RwLock<Vec<User>>);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn list(&self) -> DbResult<Vec<User>> {
        Ok(self.0.read().await.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::Money;

    fn new_product(id: &str, barcode: &str) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: "Parle-G".to_string(),
            barcode: barcode.to_string(),
            category: "Snacks".to_string(),
            price: Money::from_rupees(10),
            quantity: 12,
            expiry_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_seeded_lookups() {
        let store = MemoryStore::seeded(Utc::now());

        assert_eq!(store.products().list().await.unwrap().len(), 10);
        assert_eq!(store.bills().list().await.unwrap().len(), 2);
        assert_eq!(store.users().list().await.unwrap().len(), 2);

        let salt = store.products().get_by_barcode("8901234567890").await.unwrap();
        assert_eq!(salt.id, "1");
        assert_eq!(store.products().get("7").await.unwrap().name, "Red Label Tea");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let store = MemoryStore::seeded(Utc::now());
        let err = store.products().get("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert!(store.products().get_by_barcode("0000").await.is_err());
    }

    #[tokio::test]
    async fn test_upsert_inserts_new_at_head() {
        let store = MemoryStore::seeded(Utc::now());
        store
            .products()
            .upsert(new_product("p-new", "8901719100017"))
            .await
            .unwrap();

        let list = store.products().list().await.unwrap();
        assert_eq!(list.len(), 11);
        assert_eq!(list[0].id, "p-new");
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let store = MemoryStore::seeded(Utc::now());
        let mut salt = store.products().get("1").await.unwrap();
        salt.quantity = 75;
        store.products().upsert(salt).await.unwrap();

        let list = store.products().list().await.unwrap();
        assert_eq!(list.len(), 10);
        assert_eq!(list[0].id, "1");
        assert_eq!(list[0].quantity, 75);
    }

    #[tokio::test]
    async fn test_upsert_rejects_duplicate_barcode() {
        let store = MemoryStore::seeded(Utc::now());
        let err = store
            .products()
            .upsert(new_product("p-new", "8901234567890"))
            .await
            .unwrap_err();

        assert_eq!(err, DbError::duplicate("barcode", "8901234567890"));
        assert_eq!(store.products().list().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_bill_insert() {
        let now = Utc::now();
        let store = MemoryStore::seeded(now);
        let mut bill = store.bills().list().await.unwrap()[1].clone();

        assert!(store.bills().insert(bill.clone()).await.is_err());

        bill.id = "B003".to_string();
        bill.created_at = now;
        store.bills().insert(bill).await.unwrap();
        assert_eq!(store.bills().list().await.unwrap()[0].id, "B003");
    }
}
