//! # Billing Cart
//!
//! The in-progress bill on the billing screen, plus the product grid that
//! feeds it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing Cart Operations                              │
//! │                                                                         │
//! │  Operator Action          Method                  Cart Change           │
//! │  ───────────────          ──────                  ───────────           │
//! │                                                                         │
//! │  Click product ─────────► add_product() ────────► qty += 1 or push     │
//! │  Scan barcode ──────────► add_by_barcode() ─────► same, or not found   │
//! │  Edit quantity ─────────► set_quantity() ───────► qty = n (n >= 1)     │
//! │  Click remove ──────────► remove_item() ────────► line dropped         │
//! │  Generate bill ─────────► checkout() ───────────► Bill out, cart empty │
//! │                                                                         │
//! │  subtotal = Σ line.total                                               │
//! │  tax      = round(subtotal × rate)                                     │
//! │  total    = subtotal + tax                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id
//! - Every line has `quantity_in_bill >= 1`
//! - `line.total == price × quantity_in_bill` (discount is not applied)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Bill, BillItem, Notification, Product, TaxRate, TaxRounding};
use crate::validation;

// =============================================================================
// Billing Cart
// =============================================================================

/// The open bill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCart {
    items: Vec<BillItem>,
    customer_name: Option<String>,
    customer_phone: Option<String>,
}

impl BillingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Line already present: `quantity_in_bill += 1`, total recomputed
    /// - Otherwise: new line with `quantity_in_bill = 1`
    pub fn add_product(&mut self, product: &Product) -> Notification {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            let quantity = item.quantity_in_bill.saturating_add(1);
            if let Err(e) = item.set_quantity(quantity) {
                warn!(product_id = %product.id, error = %e, "Bill line not incremented");
                return Notification::new("Quantity limit reached", e.to_string());
            }
            debug!(product_id = %product.id, quantity, "Incremented bill line");
        } else {
            self.items.push(BillItem::from_product(product));
            debug!(product_id = %product.id, "Added bill line");
        }

        Notification::new(
            "Added to bill",
            format!("{} has been added to the bill.", product.name),
        )
    }

    /// Adds one unit of each product, as the scan dialog's batch does.
    pub fn add_products(&mut self, products: &[Product]) -> Notification {
        for product in products {
            self.add_product(product);
        }
        Notification::new(
            "Multiple products added",
            format!("Added {} products to the bill.", products.len()),
        )
    }

    /// Looks a scanned barcode up in the catalog and adds the product.
    ///
    /// An unknown barcode leaves the cart untouched and returns
    /// `ProductNotFound`.
    pub fn add_by_barcode(&mut self, catalog: &[Product], barcode: &str) -> CoreResult<Notification> {
        let barcode = barcode.trim();
        let product = catalog
            .iter()
            .find(|p| p.barcode == barcode)
            .ok_or_else(|| CoreError::ProductNotFound(barcode.to_string()))?;
        Ok(self.add_product(product))
    }

    /// Replaces the cart lines wholesale.
    ///
    /// Lines with a quantity below 1 are dropped and every line total is
    /// recomputed, so the cart invariants hold whatever the caller sends.
    ///
    /// ## Errors
    /// `Validation` when a line's quantity or price is out of range; the
    /// cart is untouched.
    pub fn update_items(&mut self, items: Vec<BillItem>) -> CoreResult<()> {
        let items = items
            .into_iter()
            .filter(|i| i.quantity_in_bill >= 1)
            .map(|mut i| -> CoreResult<BillItem> {
                validation::validate_quantity(i.quantity_in_bill)?;
                validation::validate_price(i.product.price)?;
                i.recompute_total()?;
                Ok(i)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        self.items = items;
        debug!(lines = self.items.len(), "Replaced bill lines");
        Ok(())
    }

    /// Sets a line's quantity.
    ///
    /// ## Returns
    /// - `Ok(true)` when the line changed
    /// - `Ok(false)` when `quantity < 1` (ignored, cart unchanged)
    /// - `Err(ItemNotInCart)` when no line has that product id
    /// - `Err(Validation)` above `MAX_QUANTITY`; the cart is unchanged
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == product_id)
            .ok_or_else(|| CoreError::ItemNotInCart(product_id.to_string()))?;

        if quantity < 1 {
            debug!(product_id, quantity, "Ignored quantity below one");
            return Ok(false);
        }

        item.set_quantity(quantity)?;
        Ok(true)
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<Notification> {
        let before = self.items.len();
        self.items.retain(|i| i.id() != product_id);

        if self.items.len() == before {
            return Err(CoreError::ItemNotInCart(product_id.to_string()));
        }

        Ok(Notification::new(
            "Item removed",
            "Item removed from cart successfully",
        ))
    }

    /// Empties the cart and forgets the customer.
    pub fn clear(&mut self) {
        self.items.clear();
        self.customer_name = None;
        self.customer_phone = None;
    }

    /// Attaches optional customer details; blank values are stored as `None`.
    pub fn set_customer(&mut self, name: Option<String>, phone: Option<String>) {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        self.customer_name = clean(name);
        self.customer_phone = clean(phone);
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn customer_phone(&self) -> Option<&str> {
        self.customer_phone.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity_in_bill).sum()
    }

    /// Σ line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.total).sum()
    }

    /// Tax on the subtotal.
    pub fn tax(&self, rate: TaxRate, rounding: TaxRounding) -> Money {
        rounding.tax_on(self.subtotal(), rate)
    }

    /// `subtotal + tax`.
    pub fn total(&self, rate: TaxRate, rounding: TaxRounding) -> Money {
        self.subtotal() + self.tax(rate, rounding)
    }

    /// Totals summary for display.
    pub fn totals(&self, rate: TaxRate, rounding: TaxRounding) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = rounding.tax_on(subtotal, rate);
        CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Turns the cart into an immutable bill and empties the cart.
    ///
    /// ## Errors
    /// `EmptyCart` when there is nothing to bill; the cart is untouched.
    pub fn checkout(
        &mut self,
        cashier_id: &str,
        rate: TaxRate,
        rounding: TaxRounding,
        now: DateTime<Utc>,
    ) -> CoreResult<Bill> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let totals = self.totals(rate, rounding);
        let bill = Bill {
            id: Uuid::new_v4().to_string(),
            items: std::mem::take(&mut self.items),
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: Money::zero(),
            total: totals.total,
            customer_name: self.customer_name.take(),
            customer_phone: self.customer_phone.take(),
            created_at: now,
            cashier_id: cashier_id.to_string(),
        };

        debug!(bill_id = %bill.id, lines = bill.items.len(), total = %bill.total, "Checked out");
        Ok(bill)
    }
}

/// Notification shown after a successful checkout.
pub fn bill_generated(bill: &Bill) -> Notification {
    Notification::new(
        "Bill Generated",
        format!("Successfully created bill for {} items.", bill.line_count()),
    )
}

/// Cart totals summary for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Product Grid
// =============================================================================

/// The product picker beside the billing cart.
pub struct ProductGrid;

impl ProductGrid {
    /// Products matching a search term (name or barcode, case-insensitive)
    /// and an optional exact category, in catalog order.
    pub fn filter(catalog: &[Product], search: &str, category: Option<&str>) -> Vec<Product> {
        let term = search.trim().to_lowercase();
        catalog
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.barcode.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Unique categories in first-seen order.
    pub fn categories(catalog: &[Product]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for p in catalog {
            if !seen.iter().any(|c| c == &p.category) {
                seen.push(p.category.clone());
            }
        }
        seen
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
