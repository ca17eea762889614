//! # Domain Types
//!
//! Core domain types used throughout Kirana POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    BillItem     │   │      Bill       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  product (flat) │──►│  items          │       │
//! │  │  barcode        │   │  quantity_in_   │   │  subtotal, tax  │       │
//! │  │  category       │   │    bill         │   │  total          │       │
//! │  │  price, qty     │   │  total          │   │  cashier_id     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │          ▲                                                              │
//! │  ┌───────┴─────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ScannedProduct-  │   │    TaxRate      │   │  Notification   │       │
//! │  │Info (ephemeral) │   │  bps (u32)      │   │  title, desc    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use uuid::Uuid;

use crate::error::ValidationError;
use crate::filter::ExpiryFilter;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5% GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

/// Precision to which bill tax is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxRounding {
    /// Round half-up to whole rupees (printed bills).
    #[default]
    WholeUnits,
    /// Round half-up to the nearest paisa.
    MinorUnits,
}

impl TaxRounding {
    /// Applies this rounding mode to compute tax on an amount.
    pub fn tax_on(&self, amount: Money, rate: TaxRate) -> Money {
        match self {
            TaxRounding::WholeUnits => amount.calculate_tax_whole(rate),
            TaxRounding::MinorUnits => amount.calculate_tax(rate),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store catalog.
///
/// ## Invariants
/// - `id` is unique within the catalog
/// - `price >= 0`, `quantity >= 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (mock ids like "1", or UUID v4 for new products).
    pub id: String,

    /// Display name shown in tables, grids and bills.
    pub name: String,

    /// Barcode (EAN-13, UPC-A, ...). Not checksum-validated.
    pub barcode: String,

    /// Free-form category label.
    pub category: String,

    /// Unit price.
    pub price: Money,

    /// Units in stock.
    pub quantity: i64,

    /// Optional best-before date.
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Checks if stock is below the given threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }

    /// Stock band used by the inventory status report.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    /// First expiry bucket the product falls into, checked in the order
    /// expired, this month, next month. `None` without an expiry date.
    pub fn expiry_bucket(&self, today: NaiveDate) -> Option<ExpiryFilter> {
        let expiry = self.expiry_date?;
        [ExpiryFilter::Expired, ExpiryFilter::ThisMonth, ExpiryFilter::NextMonth]
            .into_iter()
            .find(|bucket| bucket.contains(expiry, today))
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Stock band shown on the inventory status chart.
///
/// ```text
///   0 ──── 9 │ 10 ──── 29 │ 30 ────►
///     Low    │   Medium   │  Good
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Medium,
    Good,
}

impl StockStatus {
    pub const fn for_quantity(quantity: i64) -> Self {
        if quantity < 10 {
            StockStatus::Low
        } else if quantity < 30 {
            StockStatus::Medium
        } else {
            StockStatus::Good
        }
    }
}

// =============================================================================
// New Product (add-product form)
// =============================================================================

/// Input from the add-product form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub barcode: String,
    pub price: Money,
    pub quantity: i64,
    #[ts(as = "Option<String>")]
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl NewProduct {
    /// Validates the form: name, category and barcode present, price and
    /// quantity not negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_product_name(&self.name)?;
        validation::validate_category(&self.category)?;
        validation::validate_required("barcode", &self.barcode)?;
        validation::validate_price(self.price)?;
        validation::validate_stock_quantity(self.quantity)?;
        Ok(())
    }

    /// Validates and turns the form into a catalog product with a fresh id.
    pub fn into_product(self, now: DateTime<Utc>) -> Result<Product, ValidationError> {
        self.validate()?;
        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            barcode: self.barcode.trim().to_string(),
            category: self.category.trim().to_string(),
            price: self.price,
            quantity: self.quantity,
            expiry_date: self.expiry_date,
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Category
// =============================================================================

/// Categories offered by the add-product and scan review forms.
///
/// Catalog products may still carry other labels ("Biscuits", "Sauces"),
/// so `Product::category` stays a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Grocery,
    Dairy,
    Beverages,
    Snacks,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Household,
    #[serde(rename = "Fruits & Vegetables")]
    FruitsAndVegetables,
    Bakery,
    Others,
}

impl Category {
    /// Every selectable category, in form order.
    pub const ALL: [Category; 9] = [
        Category::Grocery,
        Category::Dairy,
        Category::Beverages,
        Category::Snacks,
        Category::PersonalCare,
        Category::Household,
        Category::FruitsAndVegetables,
        Category::Bakery,
        Category::Others,
    ];

    /// Display label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Grocery => "Grocery",
            Category::Dairy => "Dairy",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::PersonalCare => "Personal Care",
            Category::Household => "Household",
            Category::FruitsAndVegetables => "Fruits & Vegetables",
            Category::Bakery => "Bakery",
            Category::Others => "Others",
        }
    }

    /// Looks a category up by its label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Bill Item
// =============================================================================

/// A line in the billing cart: the product plus bill-specific fields.
///
/// ## Snapshot Pattern
/// The product is copied in when the line is created, so later catalog
/// edits never change an open bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillItem {
    /// Frozen copy of the product.
    #[serde(flatten)]
    pub product: Product,

    /// Units of this product on the bill (always >= 1).
    pub quantity_in_bill: i64,

    /// Per-line discount. Tracked but not applied to `total`.
    pub discount: Money,

    /// `price × quantity_in_bill`.
    pub total: Money,
}

impl BillItem {
    /// Creates a one-unit line from a product.
    pub fn from_product(product: &Product) -> Self {
        BillItem {
            product: product.clone(),
            quantity_in_bill: 1,
            discount: Money::zero(),
            total: product.price,
        }
    }

    /// Product id of this line.
    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Sets the quantity and recomputes the line total.
    ///
    /// The line is untouched when the quantity is outside `1..=MAX_QUANTITY`
    /// or the total would not fit.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ValidationError> {
        validation::validate_quantity(quantity)?;
        self.total = line_total(self.product.price, quantity)?;
        self.quantity_in_bill = quantity;
        Ok(())
    }

    /// Recomputes `total = price × quantity_in_bill`.
    pub fn recompute_total(&mut self) -> Result<(), ValidationError> {
        self.total = line_total(self.product.price, self.quantity_in_bill)?;
        Ok(())
    }
}

fn line_total(price: Money, quantity: i64) -> Result<Money, ValidationError> {
    price
        .checked_mul(quantity)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "total".to_string(),
            min: 0,
            max: i64::MAX,
        })
}

// =============================================================================
// Bill
// =============================================================================

/// A checked-out bill. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bill {
    pub id: String,
    pub items: Vec<BillItem>,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Bill-level discount (always zero today, see DESIGN.md).
    pub discount: Money,
    /// `subtotal + tax`.
    pub total: Money,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub cashier_id: String,
}

impl Bill {
    /// Number of lines on the bill.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Scanned Product Info
// =============================================================================

/// What the scan workflow knows about a barcode before the operator picks
/// a category and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScannedProductInfo {
    pub barcode: String,
    pub name: String,
    pub price: Money,
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
}

impl From<&Product> for ScannedProductInfo {
    fn from(p: &Product) -> Self {
        ScannedProductInfo {
            barcode: p.barcode.clone(),
            name: p.name.clone(),
            price: p.price,
            expiry_date: p.expiry_date,
        }
    }
}

// =============================================================================
// Users
// =============================================================================

/// Staff role. Informational only; there is no authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Cashier,
}

/// A staff member shown on the user management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Sales
// =============================================================================

/// One day of sales for the reports chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySale {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub amount: Money,
    pub transactions: u32,
}

// =============================================================================
// Notification
// =============================================================================

/// A transient, informational message for the operator ("toast").
///
/// Notifications never carry error semantics; failures are `Err` values
/// that the UI layer turns into notifications itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, quantity: i64) -> Product {
        Product {
            id: "1".to_string(),
            name: "Tata Salt".to_string(),
            barcode: "8901234567890".to_string(),
            category: "Grocery".to_string(),
            price: Money::from_rupees(price),
            quantity,
            expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(5.0);
        assert_eq!(rate.bps(), 500);
        assert!((rate.percentage() - 5.0).abs() < 0.001);
        assert_eq!(TaxRate::default(), rate);
    }

    #[test]
    fn test_low_stock() {
        assert!(product(20, 19).is_low_stock(20));
        assert!(!product(20, 20).is_low_stock(20));
    }

    #[test]
    fn test_stock_status_bands() {
        assert_eq!(product(20, 9).stock_status(), StockStatus::Low);
        assert_eq!(product(20, 10).stock_status(), StockStatus::Medium);
        assert_eq!(product(20, 29).stock_status(), StockStatus::Medium);
        assert_eq!(product(20, 30).stock_status(), StockStatus::Good);
    }

    #[test]
    fn test_expiry_bucket() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let mut p = product(20, 5);
        assert_eq!(p.expiry_bucket(today), None);

        p.expiry_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(p.expiry_bucket(today), Some(ExpiryFilter::Expired));
        p.expiry_date = NaiveDate::from_ymd_opt(2024, 5, 20);
        assert_eq!(p.expiry_bucket(today), Some(ExpiryFilter::ThisMonth));
        p.expiry_date = NaiveDate::from_ymd_opt(2024, 6, 2);
        assert_eq!(p.expiry_bucket(today), Some(ExpiryFilter::NextMonth));
        p.expiry_date = NaiveDate::from_ymd_opt(2024, 9, 2);
        assert_eq!(p.expiry_bucket(today), None);
    }

    #[test]
    fn test_new_product_into_product() {
        let form = NewProduct {
            name: "  Parle-G ".to_string(),
            category: "Snacks".to_string(),
            barcode: "8901719101014".to_string(),
            price: Money::from_rupees(10),
            quantity: 0,
            expiry_date: None,
        };
        let p = form.into_product(Utc::now()).unwrap();
        assert_eq!(p.name, "Parle-G");
        assert_eq!(p.quantity, 0);
        assert_eq!(p.id.len(), 36);
    }

    #[test]
    fn test_new_product_rejects_missing_fields() {
        let form = NewProduct {
            name: "Parle-G".to_string(),
            category: "".to_string(),
            barcode: "8901719101014".to_string(),
            price: Money::from_rupees(10),
            quantity: 5,
            expiry_date: None,
        };
        assert!(matches!(form.validate(), Err(ValidationError::Required { .. })));

        let form = NewProduct {
            category: "Snacks".to_string(),
            price: Money::from_rupees(-1),
            ..form
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_bill_item_totals() {
        let mut item = BillItem::from_product(&product(20, 50));
        assert_eq!(item.quantity_in_bill, 1);
        assert_eq!(item.total, Money::from_rupees(20));

        item.set_quantity(3).unwrap();
        assert_eq!(item.total, Money::from_rupees(60));

        assert!(item.set_quantity(i64::MAX).is_err());
        assert!(item.set_quantity(0).is_err());
        assert_eq!(item.quantity_in_bill, 3);
        assert_eq!(item.total, Money::from_rupees(60));
    }

    #[test]
    fn test_bill_item_serializes_flat() {
        let item = BillItem::from_product(&product(20, 50));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["barcode"], "8901234567890");
        assert_eq!(json["quantity_in_bill"], 1);
        assert_eq!(json["total"], 2000);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from_label("personal care"), Some(Category::PersonalCare));
        assert_eq!(Category::from_label("Biscuits"), None);
        assert_eq!(
            serde_json::to_string(&Category::FruitsAndVegetables).unwrap(),
            "\"Fruits & Vegetables\""
        );
    }

    #[test]
    fn test_tax_rounding_modes() {
        let rate = TaxRate::from_bps(500);
        let amount = Money::from_rupees(50);
        assert_eq!(TaxRounding::WholeUnits.tax_on(amount, rate), Money::from_rupees(3));
        assert_eq!(TaxRounding::MinorUnits.tax_on(amount, rate), Money::from_paise(250));
    }
}
