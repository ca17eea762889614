//! # Cart State
//!
//! Manages the open bill on the billing screen.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Front-end Action         Command                 Cart State Change     │
//! │  ────────────────         ───────                 ─────────────────     │
//! │                                                                         │
//! │  Click Product ──────────► add_to_cart() ───────► line += 1 or push    │
//! │                                                                         │
//! │  Scan Barcode ───────────► scan_to_bill() ──────► same, by barcode     │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ──► line.qty = n (n ≥ 1) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► lines.remove(i)      │
//! │                                                                         │
//! │  Generate Bill ──────────► checkout() ──────────► Bill, cart emptied   │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use kirana_core::billing::{BillingCart, CartTotals};
use kirana_core::{BillItem, TaxRate, TaxRounding};
use serde::{Deserialize, Serialize};

/// Cart response including lines, customer and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<BillItem>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &BillingCart, rate: TaxRate, rounding: TaxRounding) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            customer_name: cart.customer_name().map(str::to_string),
            customer_phone: cart.customer_phone().map(str::to_string),
            totals: cart.totals(rate, rounding),
        }
    }
}

/// Managed cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<BillingCart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals(rate, rounding));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillingCart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillingCart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kirana_core::{Money, Product};

    fn product() -> Product {
        Product {
            id: "1".to_string(),
            name: "Tata Salt".to_string(),
            barcode: "8901234567890".to_string(),
            category: "Grocery".to_string(),
            price: Money::from_rupees(20),
            quantity: 50,
            expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_state_mutation() {
        let state = CartState::new();
        state.with_cart_mut(|c| {
            c.add_product(&product());
            c.add_product(&product());
        });

        let response =
            state.with_cart(|c| CartResponse::new(c, TaxRate::default(), TaxRounding::WholeUnits));
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.totals.total_quantity, 2);
        assert_eq!(response.totals.subtotal, Money::from_rupees(40));
        assert_eq!(response.totals.tax, Money::from_rupees(2));
    }

    #[test]
    fn test_cart_state_is_shared_between_clones() {
        let state = CartState::new();
        let other = state.clone();
        other.with_cart_mut(|c| {
            c.add_product(&product());
        });
        assert!(!state.with_cart(|c| c.is_empty()));
    }
}
