//! # Product Commands
//!
//! Commands behind the inventory screen: the filtered product table, the
//! filter panel and the add-product form.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Listing                                    │
//! │                                                                         │
//! │  User types "milk" / toggles "Low stock" / opens the filter panel      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products / toggle_low_stock / apply_filter_panel               │
//! │       │  (mutates InventoryState only)                                  │
//! │       ▼                                                                 │
//! │  list_products                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  catalog = db.products().list()           │                         │
//! │  │  filter.apply(catalog, today)             │──► Vec<Product>         │
//! │  │  (search, low stock, ranges, category,    │                         │
//! │  │   expiry, then name sort)                 │                         │
//! │  └───────────────────────────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use kirana_core::filter::{self, ExpiryFilter, InventoryFilter};
use kirana_core::validation::normalize_search_query;
use kirana_core::{Category, Money, NewProduct, Notification, Product, LOW_STOCK_ALERT_LIMIT};
use kirana_db::ProductRepository;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState, InventoryState};

/// Product created through the add-product form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub product: Product,
    pub notification: Notification,
}

/// Changes submitted from the filter panel. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub price_range: Option<(Money, Money)>,
    pub quantity_range: Option<(i64, i64)>,
    /// `Some("")` selects all categories.
    pub category: Option<String>,
    /// `Some(None)` clears the expiry bucket.
    pub expiry: Option<Option<ExpiryFilter>>,
}

// =============================================================================
// Listing
// =============================================================================

/// The inventory table: the whole catalog run through the current filter.
pub async fn list_products(
    db: &DbState,
    inventory: &InventoryState,
) -> Result<Vec<Product>, ApiError> {
    let catalog = db.inner().products().list().await?;
    let products = inventory.with_filter(|f| f.apply(&catalog, crate::today()));

    debug!(
        total = catalog.len(),
        shown = products.len(),
        "list_products command"
    );
    Ok(products)
}

/// Sets the search term and returns the filtered table.
///
/// ## Arguments
/// * `term` - Matched case-insensitively against name, barcode and
///   category. Empty shows everything.
pub async fn search_products(
    db: &DbState,
    inventory: &InventoryState,
    term: &str,
) -> Result<Vec<Product>, ApiError> {
    let term = normalize_search_query(term);
    debug!(term = %term, "search_products command");

    inventory.with_filter_mut(|f| f.set_search_term(term));
    list_products(db, inventory).await
}

/// Flips the "Low stock" quick filter.
pub fn toggle_low_stock(inventory: &InventoryState) -> Notification {
    debug!("toggle_low_stock command");
    inventory.with_filter_mut(|f| f.toggle_low_stock())
}

/// Flips the A-Z / Z-A sort.
pub fn toggle_sort_order(inventory: &InventoryState) -> Notification {
    debug!("toggle_sort_order command");
    inventory.with_filter_mut(|f| f.toggle_sort_order())
}

// =============================================================================
// Filter Panel
// =============================================================================

/// Opens the filter panel, spanning both sliders over the live catalog.
pub async fn open_filter_panel(
    db: &DbState,
    inventory: &InventoryState,
) -> Result<InventoryFilter, ApiError> {
    let catalog = db.inner().products().list().await?;
    debug!(products = catalog.len(), "open_filter_panel command");

    Ok(inventory.with_filter_mut(|f| {
        f.open_panel(&catalog);
        f.clone()
    }))
}

/// Applies the filter panel's fields.
pub fn apply_filter_panel(inventory: &InventoryState, update: FilterUpdate) -> InventoryFilter {
    debug!(?update, "apply_filter_panel command");

    inventory.with_filter_mut(|f| {
        if let Some((min, max)) = update.price_range {
            f.set_price_range(min, max);
        }
        if let Some((min, max)) = update.quantity_range {
            f.set_quantity_range(min, max);
        }
        if let Some(category) = update.category {
            f.set_category(Some(category));
        }
        if let Some(expiry) = update.expiry {
            f.set_expiry_filter(expiry);
        }
        f.clone()
    })
}

/// "Clear filters": everything except the search term.
pub fn clear_filters(inventory: &InventoryState) -> Notification {
    debug!("clear_filters command");
    inventory.with_filter_mut(|f| f.clear())
}

// =============================================================================
// Lookups
// =============================================================================

/// Gets a single product by id.
pub async fn get_product(db: &DbState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(db.inner().products().get(id).await?)
}

/// Gets a single product by barcode.
pub async fn get_product_by_barcode(db: &DbState, barcode: &str) -> Result<Product, ApiError> {
    debug!(barcode = %barcode, "get_product_by_barcode command");
    Ok(db.inner().products().get_by_barcode(barcode.trim()).await?)
}

/// The first few products under the low-stock threshold, for the
/// dashboard alert card.
pub async fn low_stock_alerts(
    db: &DbState,
    config: &ConfigState,
) -> Result<Vec<Product>, ApiError> {
    let catalog = db.inner().products().list().await?;
    Ok(filter::low_stock(
        &catalog,
        config.low_stock_threshold,
        LOW_STOCK_ALERT_LIMIT,
    ))
}

/// Categories offered by the add-product and review forms.
pub fn product_categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.label()).collect()
}

// =============================================================================
// Add Product
// =============================================================================

/// Saves the add-product form. The new product goes to the head of the
/// catalog.
///
/// ## Errors
/// - `VALIDATION_ERROR` for a missing name, category or barcode, a
///   negative price or quantity, or a barcode already in the catalog
pub async fn add_product(db: &DbState, form: NewProduct) -> Result<ProductCreated, ApiError> {
    debug!(name = %form.name, barcode = %form.barcode, "add_product command");

    let product = form.into_product(Utc::now())?;
    let product = db.inner().products().upsert(product).await?;

    info!(product_id = %product.id, name = %product.name, "Product added");
    Ok(ProductCreated {
        notification: Notification::new(
            "Product added",
            format!("{} has been added to inventory.", product.name),
        ),
        product,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kirana_core::filter::SortOrder;
    use kirana_db::MemoryStore;

    fn db() -> DbState {
        DbState::new(MemoryStore::seeded(Utc::now()), Vec::new())
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_products_sorted_by_name() {
        let db = db();
        let inventory = InventoryState::new();

        let products = list_products(&db, &inventory).await.unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].name, "Aashirvaad Atta");

        let note = toggle_sort_order(&inventory);
        assert_eq!(note.title, "Sort order: Z to A");
        let products = list_products(&db, &inventory).await.unwrap();
        assert_eq!(products.last().map(|p| p.name.as_str()), Some("Aashirvaad Atta"));
        assert_eq!(products[0].name, "Tata Salt");
        assert_eq!(inventory.snapshot().sort_order, SortOrder::Desc);
    }

    #[tokio::test]
    async fn test_search_and_low_stock() {
        let db = db();
        let inventory = InventoryState::new();

        let products = search_products(&db, &inventory, "personal").await.unwrap();
        assert_eq!(names(&products), vec!["Colgate Toothpaste", "Dove Soap"]);

        search_products(&db, &inventory, "").await.unwrap();
        let note = toggle_low_stock(&inventory);
        assert_eq!(note.title, "Low stock filter on");
        let products = list_products(&db, &inventory).await.unwrap();
        assert_eq!(names(&products), vec!["Kissan Ketchup"]);
    }

    #[tokio::test]
    async fn test_long_query_matches_nothing() {
        let db = db();
        let inventory = InventoryState::new();
        let long = "x".repeat(500);
        let products = search_products(&db, &inventory, &long).await.unwrap();
        assert!(products.is_empty());
        assert_eq!(inventory.snapshot().search_term, long);
    }

    #[tokio::test]
    async fn test_filter_panel_and_clear() {
        let db = db();
        let inventory = InventoryState::new();

        let panel = open_filter_panel(&db, &inventory).await.unwrap();
        let price = panel.price_range.unwrap();
        assert_eq!(price.min, Money::zero());
        assert_eq!(price.max, Money::from_rupees(299));
        assert_eq!(panel.quantity_range.map(|q| q.max), Some(60));

        apply_filter_panel(
            &inventory,
            FilterUpdate {
                category: Some("Personal Care".to_string()),
                price_range: Some((Money::zero(), Money::from_rupees(50))),
                ..FilterUpdate::default()
            },
        );
        let products = list_products(&db, &inventory).await.unwrap();
        assert_eq!(names(&products), vec!["Dove Soap"]);

        let note = clear_filters(&inventory);
        assert_eq!(note.title, "Filters cleared");
        assert!(!inventory.snapshot().is_filtered());
        assert_eq!(list_products(&db, &inventory).await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_add_product_goes_first_and_rejects_duplicate_barcode() {
        let db = db();
        let form = NewProduct {
            name: "Haldiram Bhujia".to_string(),
            category: "Snacks".to_string(),
            barcode: "8904063200011".to_string(),
            price: Money::from_rupees(55),
            quantity: 12,
            expiry_date: None,
        };

        let created = add_product(&db, form.clone()).await.unwrap();
        assert_eq!(created.notification.title, "Product added");
        let catalog = db.inner().products().list().await.unwrap();
        assert_eq!(catalog[0].id, created.product.id);

        let err = add_product(&db, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(db.inner().products().list().await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_add_product_validates_form() {
        let db = db();
        let form = NewProduct {
            name: "  ".to_string(),
            category: "Snacks".to_string(),
            barcode: "8904063200011".to_string(),
            price: Money::from_rupees(55),
            quantity: 12,
            expiry_date: None,
        };
        let err = add_product(&db, form).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_lookups_and_alerts() {
        let db = db();
        let config = ConfigState::default();

        let salt = get_product_by_barcode(&db, " 8901234567890 ").await.unwrap();
        assert_eq!(salt.name, "Tata Salt");
        assert_eq!(get_product(&db, &salt.id).await.unwrap(), salt);

        let err = get_product(&db, "missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let alerts = low_stock_alerts(&db, &config).await.unwrap();
        assert!(alerts.len() <= LOW_STOCK_ALERT_LIMIT);
        assert!(alerts.iter().all(|p| p.quantity < config.low_stock_threshold));
        assert_eq!(product_categories().len(), 9);
    }
}
