//! # Cart Commands
//!
//! Commands for the billing screen: the cart beside the product grid and
//! bill generation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Customer │────►│   Bill   │       │
//! │  │  Cart    │     │          │     │ details  │     │ generated│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                        checkout          │
//! │                   scan_to_bill                            │             │
//! │                   update_cart_item                        ▼             │
//! │                   remove_from_cart                  cart emptied       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use kirana_core::billing::{self, ProductGrid};
use kirana_core::{Bill, BillItem, CoreError, Notification, Product};
use kirana_db::{BillRepository, ProductRepository};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, ConfigState, DbState};

/// Cart after a change, with the acknowledgement to show.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMutation {
    pub cart: CartResponse,
    pub notification: Notification,
}

/// A generated bill.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub bill: Bill,
    /// Whether the bill was kept in the bill repository.
    pub recorded: bool,
    pub notification: Notification,
}

fn response(cart: &CartState, config: &ConfigState) -> CartResponse {
    cart.with_cart(|c| CartResponse::new(c, config.tax_rate(), config.tax_rounding))
}

// =============================================================================
// Product Grid
// =============================================================================

/// The product picker beside the cart.
///
/// ## Arguments
/// * `search` - Name or barcode substring, case-insensitive
/// * `category` - Exact category, `None` for all
pub async fn billing_products(
    db: &DbState,
    search: &str,
    category: Option<&str>,
) -> Result<Vec<Product>, ApiError> {
    let catalog = db.inner().products().list().await?;
    debug!(search = %search, ?category, "billing_products command");
    Ok(ProductGrid::filter(&catalog, search, category))
}

/// Category chips above the product picker, in catalog order.
pub async fn billing_categories(db: &DbState) -> Result<Vec<String>, ApiError> {
    let catalog = db.inner().products().list().await?;
    Ok(ProductGrid::categories(&catalog))
}

// =============================================================================
// Cart
// =============================================================================

/// Gets the current cart contents.
///
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Current Bill                                      3 items     │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Tata Salt               x2                         ₹40.00     │
/// │  Amul Butter             x1                         ₹50.00     │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Subtotal                                           ₹90.00     │
/// │  GST (5%)                                            ₹5.00     │
/// │  Total                                              ₹95.00     │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    response(cart, config)
}

/// Adds one unit of a product by id.
///
/// ## Behavior
/// - Already in cart: quantity increases by one
/// - Not in cart: appended with quantity 1 at the current catalog price
pub async fn add_to_cart(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> Result<CartMutation, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = db.inner().products().get(product_id).await?;
    let notification = cart.with_cart_mut(|c| c.add_product(&product));

    Ok(CartMutation {
        cart: response(cart, config),
        notification,
    })
}

/// Adds several products at once. Nothing is added if any id is unknown.
pub async fn add_many_to_cart(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    product_ids: &[String],
) -> Result<CartMutation, ApiError> {
    debug!(count = product_ids.len(), "add_many_to_cart command");

    let mut products = Vec::with_capacity(product_ids.len());
    for id in product_ids {
        products.push(db.inner().products().get(id).await?);
    }
    let notification = cart.with_cart_mut(|c| c.add_products(&products));

    Ok(CartMutation {
        cart: response(cart, config),
        notification,
    })
}

/// A barcode scanned on the billing screen.
///
/// An unknown barcode leaves the cart alone and answers with a "Product
/// not found" notification instead of an error.
pub async fn scan_to_bill(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
    barcode: &str,
) -> Result<CartMutation, ApiError> {
    let barcode = barcode.trim();
    debug!(barcode = %barcode, "scan_to_bill command");

    let catalog = db.inner().products().list().await?;
    let notification = match cart.with_cart_mut(|c| c.add_by_barcode(&catalog, barcode)) {
        Ok(notification) => notification,
        Err(CoreError::ProductNotFound(_)) => {
            info!(barcode = %barcode, "Scanned barcode not in catalog");
            Notification::new(
                "Product not found",
                format!("No product found with barcode {}", barcode),
            )
        }
        Err(e) => return Err(e.into()),
    };

    Ok(CartMutation {
        cart: response(cart, config),
        notification,
    })
}

/// Sets a line's quantity.
///
/// A quantity below 1 is ignored and the unchanged cart comes back.
///
/// ## Errors
/// - `VALIDATION_ERROR` above the quantity limit; the cart is unchanged
/// - `CART_ERROR` when the product is not in the cart
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    if !cart.with_cart_mut(|c| c.set_quantity(product_id, quantity))? {
        debug!(product_id = %product_id, "Quantity below one ignored");
    }
    Ok(response(cart, config))
}

/// Replaces every line at once.
///
/// ## Errors
/// - `VALIDATION_ERROR` when a line is out of range; the cart is unchanged
pub fn update_cart_items(
    cart: &CartState,
    config: &ConfigState,
    items: Vec<BillItem>,
) -> Result<CartResponse, ApiError> {
    debug!(lines = items.len(), "update_cart_items command");
    cart.with_cart_mut(|c| c.update_items(items))?;
    Ok(response(cart, config))
}

/// Removes a line.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> Result<CartMutation, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let notification = cart.with_cart_mut(|c| c.remove_item(product_id))?;
    Ok(CartMutation {
        cart: response(cart, config),
        notification,
    })
}

/// Empties the cart, customer details included.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| c.clear());
    response(cart, config)
}

/// Sets the optional customer name and phone printed on the bill.
pub fn set_customer(
    cart: &CartState,
    config: &ConfigState,
    name: Option<String>,
    phone: Option<String>,
) -> CartResponse {
    debug!("set_customer command");
    cart.with_cart_mut(|c| c.set_customer(name, phone));
    response(cart, config)
}

// =============================================================================
// Checkout
// =============================================================================

/// "Generate Bill": freezes the cart into a bill and empties it.
///
/// ## Flow
/// ```text
/// cart ──checkout()──► Bill { id, items, subtotal, tax, total, ... }
///                       │
///                       ├── record_bills on ──► bills().insert()
///                       │
///                       ▼
///                 "Bill Generated" notification
/// ```
///
/// ## Errors
/// - `CART_ERROR` when the cart is empty; nothing changes
pub async fn checkout(
    db: &DbState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let bill = cart.with_cart_mut(|c| {
        c.checkout(
            &config.cashier_id,
            config.tax_rate(),
            config.tax_rounding,
            Utc::now(),
        )
    })?;

    if config.record_bills {
        db.inner().bills().insert(bill.clone()).await?;
    }

    info!(
        bill_id = %bill.id,
        lines = bill.line_count(),
        total = %bill.total,
        recorded = config.record_bills,
        "Bill generated"
    );

    Ok(CheckoutResponse {
        notification: billing::bill_generated(&bill),
        recorded: config.record_bills,
        bill,
    })
}

/// Plain-text receipt for a bill.
///
/// ```text
/// MyStore
/// 123 Main Street, City
/// Ph: +91 9876543210  GSTIN: 22AAAAA0000A1Z5
/// ----------------------------------------
/// Tata Salt x2                      ₹40.00
/// ----------------------------------------
/// Subtotal                          ₹40.00
/// Tax                                ₹2.00
/// Total                             ₹42.00
/// ```
pub fn render_receipt(bill: &Bill, config: &ConfigState) -> String {
    const WIDTH: usize = 40;
    let rule = "-".repeat(WIDTH);
    let line = |label: String, amount: String| {
        let pad = WIDTH.saturating_sub(label.chars().count() + amount.chars().count());
        format!("{}{}{}", label, " ".repeat(pad.max(1)), amount)
    };

    let mut out = vec![
        config.store_name.clone(),
        config.store_address.clone(),
        format!("Ph: {}  GSTIN: {}", config.store_phone, config.gstin),
        format!("Bill {}  {}", bill.id, bill.created_at.format("%d/%m/%Y %H:%M")),
    ];
    if let Some(name) = &bill.customer_name {
        out.push(format!("Customer: {}", name));
    }
    if let Some(phone) = &bill.customer_phone {
        out.push(format!("Phone: {}", phone));
    }

    out.push(rule.clone());
    for item in &bill.items {
        out.push(line(
            format!("{} x{}", item.product.name, item.quantity_in_bill),
            config.format_money(item.total),
        ));
    }
    out.push(rule);
    out.push(line("Subtotal".to_string(), config.format_money(bill.subtotal)));
    out.push(line("Tax".to_string(), config.format_money(bill.tax)));
    out.push(line("Total".to_string(), config.format_money(bill.total)));
    out.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use kirana_core::Money;
    use kirana_db::MemoryStore;

    fn db() -> DbState {
        DbState::new(MemoryStore::seeded(Utc::now()), Vec::new())
    }

    #[tokio::test]
    async fn test_add_and_totals() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();

        add_to_cart(&db, &cart, &config, "1").await.unwrap();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();
        let result = add_to_cart(&db, &cart, &config, "3").await.unwrap();

        assert_eq!(result.cart.items.len(), 2);
        assert_eq!(result.cart.totals.subtotal, Money::from_rupees(90));
        assert_eq!(result.cart.totals.tax, Money::from_rupees(5));
        assert_eq!(result.cart.totals.total, Money::from_rupees(95));
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let db = db();
        let cart = CartState::new();
        let err = add_to_cart(&db, &cart, &ConfigState::default(), "99")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_add_many_is_all_or_nothing() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();

        let ids = vec!["1".to_string(), "nope".to_string()];
        assert!(add_many_to_cart(&db, &cart, &config, &ids).await.is_err());
        assert!(cart.with_cart(|c| c.is_empty()));

        let ids = vec!["1".to_string(), "5".to_string()];
        let result = add_many_to_cart(&db, &cart, &config, &ids).await.unwrap();
        assert_eq!(result.cart.totals.line_count, 2);
    }

    #[tokio::test]
    async fn test_scan_to_bill() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();

        let found = scan_to_bill(&db, &cart, &config, "8905678901234").await.unwrap();
        assert_eq!(found.cart.items.len(), 1);

        let missing = scan_to_bill(&db, &cart, &config, "0000000000").await.unwrap();
        assert_eq!(missing.notification.title, "Product not found");
        assert_eq!(
            missing.notification.description,
            "No product found with barcode 0000000000"
        );
        assert_eq!(missing.cart.items.len(), 1);
    }

    #[tokio::test]
    async fn test_update_quantity_below_one_is_a_no_op() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();

        let updated = update_cart_item(&cart, &config, "1", 4).unwrap();
        assert_eq!(updated.totals.total_quantity, 4);

        let unchanged = update_cart_item(&cart, &config, "1", 0).unwrap();
        assert_eq!(unchanged.totals.total_quantity, 4);
        assert_eq!(unchanged.totals.subtotal, updated.totals.subtotal);
        let unchanged = update_cart_item(&cart, &config, "1", -1).unwrap();
        assert_eq!(unchanged.totals.total_quantity, 4);

        let err = update_cart_item(&cart, &config, "9", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[tokio::test]
    async fn test_replace_lines() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();

        let mut items = get_cart(&cart, &config).items;
        items[0].quantity_in_bill = 3;
        let updated = update_cart_items(&cart, &config, items.clone()).unwrap();
        assert_eq!(updated.totals.total_quantity, 3);

        items[0].quantity_in_bill = i64::MAX;
        let err = update_cart_items(&cart, &config, items).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart, &config).totals.total_quantity, 3);
    }

    #[tokio::test]
    async fn test_huge_quantity_leaves_cart_usable() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();

        let err = update_cart_item(&cart, &config, "1", i64::MAX).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // The cart lock is still healthy and the line kept its quantity.
        let current = get_cart(&cart, &config);
        assert_eq!(current.totals.total_quantity, 1);
        add_to_cart(&db, &cart, &config, "1").await.unwrap();
        assert_eq!(get_cart(&cart, &config).totals.total_quantity, 2);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();
        add_to_cart(&db, &cart, &config, "2").await.unwrap();

        let result = remove_from_cart(&cart, &config, "1").unwrap();
        assert_eq!(result.cart.items.len(), 1);
        assert_eq!(
            remove_from_cart(&cart, &config, "1").unwrap_err().code,
            ErrorCode::CartError
        );

        set_customer(&cart, &config, Some("Asha".to_string()), None);
        let cleared = clear_cart(&cart, &config);
        assert!(cleared.items.is_empty());
        assert_eq!(cleared.customer_name, None);
    }

    #[tokio::test]
    async fn test_checkout_records_when_enabled() {
        let db = db();
        let cart = CartState::new();
        let mut config = ConfigState::default();

        let err = checkout(&db, &cart, &config).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        add_to_cart(&db, &cart, &config, "5").await.unwrap();
        set_customer(&cart, &config, Some("Priya".to_string()), Some("8765432109".to_string()));
        let result = checkout(&db, &cart, &config).await.unwrap();
        assert!(!result.recorded);
        assert_eq!(result.bill.total, Money::from_rupees(63));
        assert_eq!(result.bill.customer_name.as_deref(), Some("Priya"));
        assert_eq!(result.notification.title, "Bill Generated");
        assert!(cart.with_cart(|c| c.is_empty()));
        assert_eq!(db.inner().bills().list().await.unwrap().len(), 2);

        config.record_bills = true;
        add_to_cart(&db, &cart, &config, "5").await.unwrap();
        let result = checkout(&db, &cart, &config).await.unwrap();
        assert!(result.recorded);
        let bills = db.inner().bills().list().await.unwrap();
        assert_eq!(bills.len(), 3);
        assert_eq!(bills[0].id, result.bill.id);
    }

    #[tokio::test]
    async fn test_receipt_lists_lines_and_totals() {
        let db = db();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();
        add_to_cart(&db, &cart, &config, "1").await.unwrap();

        let bill = checkout(&db, &cart, &config).await.unwrap().bill;
        let receipt = render_receipt(&bill, &config);
        assert!(receipt.starts_with("MyStore\n"));
        assert!(receipt.contains("Tata Salt x2"));
        assert!(receipt.contains("₹40.00"));
        assert!(receipt.lines().last().unwrap().ends_with("₹42.00"));
    }

    #[tokio::test]
    async fn test_billing_grid() {
        let db = db();
        let products = billing_products(&db, "amul", None).await.unwrap();
        assert_eq!(products.len(), 1);
        let products = billing_products(&db, "", Some("Personal Care")).await.unwrap();
        assert_eq!(products.len(), 2);
        let categories = billing_categories(&db).await.unwrap();
        assert_eq!(categories[0], "Grocery");
    }
}
