//! # Mock Data
//!
//! The catalog, bills and users the dashboard starts with. Everything is
//! rebuilt on each start; nothing here is persisted.
//!
//! ```text
//! Products  10  ids "1".."10", whole-rupee prices, 2023 timestamps
//! Bills      2  B001 (1 hour ago, cashier U001), B002 (2 hours ago, U002)
//! Users      2  U001 admin, U002 cashier
//! ```

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use kirana_core::{Bill, BillItem, Money, Product, Role, TaxRate, User};

/// Catalog row as it appears in the mock table.
struct Row {
    id: &'static str,
    name: &'static str,
    barcode: &'static str,
    category: &'static str,
    price: i64,
    quantity: i64,
    expiry: (i32, u32, u32),
    created: (u32, u32, u32, u32),
}

const PRODUCTS: [Row; 10] = [
    Row { id: "1", name: "Tata Salt", barcode: "8901234567890", category: "Grocery", price: 20, quantity: 50, expiry: (2025, 12, 31), created: (1, 10, 0, 0) },
    Row { id: "2", name: "Aashirvaad Atta", barcode: "8902345678901", category: "Grocery", price: 299, quantity: 20, expiry: (2024, 11, 30), created: (2, 11, 0, 0) },
    Row { id: "3", name: "Amul Butter", barcode: "8903456789012", category: "Dairy", price: 50, quantity: 35, expiry: (2023, 9, 15), created: (3, 9, 30, 0) },
    Row { id: "4", name: "Britannia Good Day", barcode: "8904567890123", category: "Biscuits", price: 30, quantity: 45, expiry: (2023, 12, 25), created: (4, 14, 15, 0) },
    Row { id: "5", name: "Colgate Toothpaste", barcode: "8905678901234", category: "Personal Care", price: 60, quantity: 40, expiry: (2025, 6, 20), created: (5, 16, 45, 0) },
    Row { id: "6", name: "Dove Soap", barcode: "8906789012345", category: "Personal Care", price: 45, quantity: 55, expiry: (2024, 8, 10), created: (6, 13, 20, 0) },
    Row { id: "7", name: "Red Label Tea", barcode: "8907890123456", category: "Beverages", price: 140, quantity: 30, expiry: (2024, 5, 15), created: (7, 10, 10, 0) },
    Row { id: "8", name: "Maggi Noodles", barcode: "8908901234567", category: "Ready to Cook", price: 15, quantity: 60, expiry: (2023, 11, 5), created: (8, 11, 55, 0) },
    Row { id: "9", name: "Surf Excel", barcode: "8909012345678", category: "Laundry", price: 120, quantity: 25, expiry: (2025, 3, 12), created: (9, 15, 30, 0) },
    Row { id: "10", name: "Kissan Ketchup", barcode: "8900123456789", category: "Sauces", price: 85, quantity: 15, expiry: (2023, 10, 18), created: (10, 9, 5, 0) },
];

/// January 2023 timestamp, `now` if the calendar rejects it.
fn jan_2023(day: u32, hour: u32, min: u32, sec: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, hour, min, sec)
        .single()
        .unwrap_or(now)
}

/// The ten mock products, in catalog order.
pub fn mock_products(now: DateTime<Utc>) -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|row| {
            let (y, m, d) = row.expiry;
            let (day, hour, min, sec) = row.created;
            let created_at = jan_2023(day, hour, min, sec, now);
            Product {
                id: row.id.to_string(),
                name: row.name.to_string(),
                barcode: row.barcode.to_string(),
                category: row.category.to_string(),
                price: Money::from_rupees(row.price),
                quantity: row.quantity,
                expiry_date: NaiveDate::from_ymd_opt(y, m, d),
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}

fn line(products: &[Product], id: &str, quantity: i64) -> Option<BillItem> {
    let product = products.iter().find(|p| p.id == id)?;
    let mut item = BillItem::from_product(product);
    item.set_quantity(quantity).ok()?;
    Some(item)
}

fn bill(
    id: &str,
    items: Vec<BillItem>,
    customer: (&str, &str),
    created_at: DateTime<Utc>,
    cashier_id: &str,
) -> Bill {
    let subtotal: Money = items.iter().map(|i| i.total).sum();
    let tax = subtotal.calculate_tax_whole(TaxRate::default());
    Bill {
        id: id.to_string(),
        items,
        subtotal,
        tax,
        discount: Money::zero(),
        total: subtotal + tax,
        customer_name: Some(customer.0.to_string()),
        customer_phone: Some(customer.1.to_string()),
        created_at,
        cashier_id: cashier_id.to_string(),
    }
}

/// The two mock bills, newest first. Lines reference `products`.
pub fn mock_bills(products: &[Product], now: DateTime<Utc>) -> Vec<Bill> {
    let b001: Vec<BillItem> = [line(products, "1", 2), line(products, "3", 1)]
        .into_iter()
        .flatten()
        .collect();
    let b002: Vec<BillItem> = line(products, "5", 1).into_iter().collect();

    vec![
        bill("B001", b001, ("Rahul Kumar", "9876543210"), now - Duration::hours(1), "U001"),
        bill("B002", b002, ("Priya Singh", "8765432109"), now - Duration::hours(2), "U002"),
    ]
}

/// The two mock staff accounts.
pub fn mock_users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        User {
            id: "U001".to_string(),
            name: "Admin User".to_string(),
            email: "admin@storemanager.com".to_string(),
            role: Role::Admin,
            created_at: jan_2023(1, 0, 0, 0, now),
        },
        User {
            id: "U002".to_string(),
            name: "Cashier User".to_string(),
            email: "cashier@storemanager.com".to_string(),
            role: Role::Cashier,
            created_at: jan_2023(2, 0, 0, 0, now),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
