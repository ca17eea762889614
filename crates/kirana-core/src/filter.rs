//! # Inventory Filter Engine
//!
//! Narrows and orders the catalog for the inventory table.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     InventoryFilter::apply                              │
//! │                                                                         │
//! │   catalog ──► search ──► low stock ──► price ──► quantity              │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │   result  ◄── sort by name ◄── expiry bucket ◄── category              │
//! │                                                                         │
//! │   Every active predicate must hold (logical AND).                      │
//! │   An unset predicate passes everything through.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The filter never touches the catalog it is given. Toggles that the
//! operator sees acknowledged return a [`Notification`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Notification, Product};
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Sort Order
// =============================================================================

/// Direction of the name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Button label ("A to Z" / "Z to A").
    pub const fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "A to Z",
            SortOrder::Desc => "Z to A",
        }
    }
}

// =============================================================================
// Expiry Buckets
// =============================================================================

/// Expiry bucket relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryFilter {
    /// `expiry <= today`
    Expired,
    /// Same month and year as today.
    ThisMonth,
    /// Same month and year as the month after today.
    NextMonth,
}

impl ExpiryFilter {
    /// Checks whether an expiry date falls into this bucket.
    pub fn contains(self, expiry: NaiveDate, today: NaiveDate) -> bool {
        match self {
            ExpiryFilter::Expired => expiry <= today,
            ExpiryFilter::ThisMonth => {
                expiry.year() == today.year() && expiry.month() == today.month()
            }
            ExpiryFilter::NextMonth => {
                let (year, month) = if today.month() == 12 {
                    (today.year() + 1, 1)
                } else {
                    (today.year(), today.month() + 1)
                };
                expiry.year() == year && expiry.month() == month
            }
        }
    }

    /// Products without an expiry date never match a bucket.
    pub fn matches(self, product: &Product, today: NaiveDate) -> bool {
        product
            .expiry_date
            .is_some_and(|expiry| self.contains(expiry, today))
    }
}

impl std::str::FromStr for ExpiryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expired" => Ok(ExpiryFilter::Expired),
            "thismonth" | "this-month" | "this_month" => Ok(ExpiryFilter::ThisMonth),
            "nextmonth" | "next-month" | "next_month" => Ok(ExpiryFilter::NextMonth),
            other => Err(format!("unknown expiry filter '{}'", other)),
        }
    }
}

// =============================================================================
// Inclusive Range
// =============================================================================

/// Inclusive `[min, max]` bounds, as set by a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Builds bounds, swapping the ends if they arrive reversed.
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Bounds { min: b, max: a }
        } else {
            Bounds { min: a, max: b }
        }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

// =============================================================================
// Inventory Filter
// =============================================================================

/// Session-local filter state for the inventory screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    pub search_term: String,
    pub low_stock: bool,
    pub price_range: Option<Bounds<Money>>,
    pub quantity_range: Option<Bounds<i64>>,
    pub category: Option<String>,
    pub expiry: Option<ExpiryFilter>,
    pub sort_order: SortOrder,
    pub low_stock_threshold: i64,
}

impl Default for InventoryFilter {
    fn default() -> Self {
        InventoryFilter {
            search_term: String::new(),
            low_stock: false,
            price_range: None,
            quantity_range: None,
            category: None,
            expiry: None,
            sort_order: SortOrder::Asc,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that opens with only low-stock items showing, as when the
    /// dashboard's low-stock card links to the inventory screen.
    pub fn low_stock_only() -> Self {
        InventoryFilter {
            low_stock: true,
            ..Self::default()
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_low_stock(&mut self, enabled: bool) {
        self.low_stock = enabled;
    }

    /// Flips the low-stock flag and returns the acknowledgement.
    pub fn toggle_low_stock(&mut self) -> Notification {
        self.low_stock = !self.low_stock;
        debug!(low_stock = self.low_stock, "Toggled low stock filter");
        if self.low_stock {
            Notification::new(
                "Low stock filter on",
                format!("Showing items with fewer than {} units.", self.low_stock_threshold),
            )
        } else {
            Notification::new("Low stock filter off", "Showing all stock levels.")
        }
    }

    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.price_range = Some(Bounds::new(min, max));
    }

    pub fn set_quantity_range(&mut self, min: i64, max: i64) {
        self.quantity_range = Some(Bounds::new(min, max));
    }

    /// Sets the category; `None` or an empty label means all categories.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.trim().is_empty());
    }

    pub fn set_expiry_filter(&mut self, expiry: Option<ExpiryFilter>) {
        self.expiry = expiry;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Reverses the sort order and returns the acknowledgement.
    pub fn toggle_sort_order(&mut self) -> Notification {
        self.sort_order = self.sort_order.reversed();
        debug!(order = ?self.sort_order, "Toggled sort order");
        Notification::new(
            format!("Sort order: {}", self.sort_order.label()),
            "Product list has been re-sorted.",
        )
    }

    /// Initialises both range sliders to `[0, max observed]` for the
    /// catalog as it is right now. Later catalog changes are not tracked
    /// until the panel is opened again.
    pub fn open_panel(&mut self, catalog: &[Product]) {
        let max_price = catalog.iter().map(|p| p.price).max().unwrap_or_default();
        let max_quantity = catalog.iter().map(|p| p.quantity).max().unwrap_or(0);

        self.price_range = Some(Bounds::new(Money::zero(), max_price));
        self.quantity_range = Some(Bounds::new(0, max_quantity));
    }

    /// Drops every predicate except the search term.
    pub fn clear(&mut self) -> Notification {
        self.low_stock = false;
        self.price_range = None;
        self.quantity_range = None;
        self.category = None;
        self.expiry = None;
        debug!("Cleared inventory filters");
        Notification::new("Filters cleared", "Showing all inventory items.")
    }

    /// Whether any predicate besides the search term is active.
    pub fn is_filtered(&self) -> bool {
        self.low_stock
            || self.price_range.is_some()
            || self.quantity_range.is_some()
            || self.category.is_some()
            || self.expiry.is_some()
    }

    /// Checks a single product against every active predicate.
    pub fn matches(&self, product: &Product, today: NaiveDate) -> bool {
        matches_search(product, &self.search_term)
            && (!self.low_stock || product.is_low_stock(self.low_stock_threshold))
            && self.price_range.map_or(true, |r| r.contains(product.price))
            && self.quantity_range.map_or(true, |r| r.contains(product.quantity))
            && self
                .category
                .as_deref()
                .map_or(true, |c| product.category == c)
            && self.expiry.map_or(true, |e| e.matches(product, today))
    }

    /// Filters and sorts the catalog. The input order is the tie-break.
    pub fn apply(&self, catalog: &[Product], today: NaiveDate) -> Vec<Product> {
        let mut result: Vec<Product> = catalog
            .iter()
            .filter(|p| self.matches(p, today))
            .cloned()
            .collect();

        sort_by_name(&mut result, self.sort_order);
        result
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Case-insensitive substring search over name, barcode and category.
/// An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&term)
        || product.barcode.to_lowercase().contains(&term)
        || product.category.to_lowercase().contains(&term)
}

/// Case-insensitive name comparison, falling back to the raw names so the
/// order is total over distinct names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort by name in the given direction.
pub fn sort_by_name(products: &mut [Product], order: SortOrder) {
    products.sort_by(|a, b| match order {
        SortOrder::Asc => compare_names(&a.name, &b.name),
        SortOrder::Desc => compare_names(&b.name, &a.name),
    });
}

/// Products below the threshold, in catalog order, capped at `limit`.
pub fn low_stock(catalog: &[Product], threshold: i64, limit: usize) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| p.is_low_stock(threshold))
        .take(limit)
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, name: &str, category: &str, price: i64, qty: i64, expiry: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            barcode: format!("89000000000{}", id),
            category: category.to_string(),
            price: Money::from_rupees(price),
            quantity: qty,
            expiry_date: expiry.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Tata Salt", "Grocery", 20, 50, Some("2025-12-31")),
            product("2", "Aashirvaad Atta", "Grocery", 299, 20, Some("2024-11-30")),
            product("3", "Amul Butter", "Dairy", 50, 35, Some("2023-09-15")),
            product("4", "Kissan Ketchup", "Sauces", 85, 15, Some("2023-10-18")),
            product("5", "Maggi Noodles", "Ready to Cook", 15, 60, None),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, 20).unwrap()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_sorts_everything() {
        let result = InventoryFilter::new().apply(&catalog(), today());
        assert_eq!(
            names(&result),
            vec!["Aashirvaad Atta", "Amul Butter", "Kissan Ketchup", "Maggi Noodles", "Tata Salt"]
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert!(InventoryFilter::new().apply(&[], today()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let mut filter = InventoryFilter::new();

        filter.set_search_term("AMUL");
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Amul Butter"]);

        filter.set_search_term("grocery");
        assert_eq!(filter.apply(&catalog(), today()).len(), 2);

        filter.set_search_term("890000000004");
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Kissan Ketchup"]);
    }

    #[test]
    fn test_low_stock_filter() {
        let mut filter = InventoryFilter::new();
        let note = filter.toggle_low_stock();
        assert!(filter.low_stock);
        assert_eq!(note.title, "Low stock filter on");

        // quantity 20 is not low stock; only 15 is.
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Kissan Ketchup"]);
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let mut filter = InventoryFilter::new();
        filter.set_price_range(Money::from_rupees(20), Money::from_rupees(85));
        assert_eq!(
            names(&filter.apply(&catalog(), today())),
            vec!["Amul Butter", "Kissan Ketchup", "Tata Salt"]
        );

        filter.set_quantity_range(50, 35);
        assert_eq!(
            names(&filter.apply(&catalog(), today())),
            vec!["Amul Butter", "Tata Salt"]
        );
    }

    #[test]
    fn test_category_is_exact() {
        let mut filter = InventoryFilter::new();
        filter.set_category(Some("Dairy".to_string()));
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Amul Butter"]);

        filter.set_category(Some("dairy".to_string()));
        assert!(filter.apply(&catalog(), today()).is_empty());

        filter.set_category(Some(String::new()));
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_expiry_buckets() {
        let mut filter = InventoryFilter::new();

        filter.set_expiry_filter(Some(ExpiryFilter::Expired));
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Amul Butter"]);

        filter.set_expiry_filter(Some(ExpiryFilter::ThisMonth));
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Amul Butter"]);

        filter.set_expiry_filter(Some(ExpiryFilter::NextMonth));
        assert_eq!(names(&filter.apply(&catalog(), today())), vec!["Kissan Ketchup"]);
    }

    #[test]
    fn test_missing_expiry_only_excluded_by_buckets() {
        let mut filter = InventoryFilter::new();
        filter.set_search_term("maggi");
        assert_eq!(filter.apply(&catalog(), today()).len(), 1);

        filter.set_expiry_filter(Some(ExpiryFilter::Expired));
        assert!(filter.apply(&catalog(), today()).is_empty());
    }

    #[test]
    fn test_next_month_wraps_year() {
        let december = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        let january = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert!(ExpiryFilter::NextMonth.contains(january, december));
        assert!(!ExpiryFilter::ThisMonth.contains(january, december));
    }

    #[test]
    fn test_toggle_sort_reverses_sequence() {
        let mut filter = InventoryFilter::new();
        let asc = filter.apply(&catalog(), today());

        let note = filter.toggle_sort_order();
        assert_eq!(note.title, "Sort order: Z to A");
        assert_eq!(note.description, "Product list has been re-sorted.");

        let mut desc = filter.apply(&catalog(), today());
        desc.reverse();
        assert_eq!(names(&asc), names(&desc));

        assert_eq!(filter.toggle_sort_order().title, "Sort order: A to Z");
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let items = vec![
            product("1", "Salt", "Grocery", 20, 1, None),
            product("2", "Atta", "Grocery", 20, 1, None),
            product("3", "Salt", "Grocery", 25, 1, None),
        ];
        let result = InventoryFilter::new().apply(&items, today());
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_ignores_case_first() {
        let items = vec![
            product("1", "banana chips", "Snacks", 20, 1, None),
            product("2", "Apple Juice", "Beverages", 20, 1, None),
        ];
        let result = InventoryFilter::new().apply(&items, today());
        assert_eq!(names(&result), vec!["Apple Juice", "banana chips"]);
    }

    #[test]
    fn test_removing_a_criterion_never_removes_items() {
        let mut full = InventoryFilter::new();
        full.set_search_term("a");
        full.set_low_stock(true);
        full.set_price_range(Money::zero(), Money::from_rupees(100));
        full.set_quantity_range(0, 100);
        full.set_category(Some("Sauces".to_string()));
        full.set_expiry_filter(Some(ExpiryFilter::NextMonth));
        let narrow = full.apply(&catalog(), today()).len();

        let relaxations: [fn(&mut InventoryFilter); 6] = [
            |f| f.set_search_term(""),
            |f| f.set_low_stock(false),
            |f| f.price_range = None,
            |f| f.quantity_range = None,
            |f| f.set_category(None),
            |f| f.set_expiry_filter(None),
        ];
        for relax in relaxations {
            let mut relaxed = full.clone();
            relax(&mut relaxed);
            let wider = relaxed.apply(&catalog(), today());
            assert!(wider.len() >= narrow);
            assert!(wider.iter().all(|p| catalog().iter().any(|c| c.id == p.id)));
        }
    }

    #[test]
    fn test_open_panel_uses_max_observed() {
        let mut filter = InventoryFilter::new();
        filter.open_panel(&catalog());
        assert_eq!(
            filter.price_range,
            Some(Bounds { min: Money::zero(), max: Money::from_rupees(299) })
        );
        assert_eq!(filter.quantity_range, Some(Bounds { min: 0, max: 60 }));
        assert_eq!(filter.apply(&catalog(), today()).len(), 5);
    }

    #[test]
    fn test_clear_keeps_search_term() {
        let mut filter = InventoryFilter::low_stock_only();
        filter.set_search_term("salt");
        filter.set_category(Some("Grocery".to_string()));
        assert!(filter.is_filtered());

        let note = filter.clear();
        assert_eq!(note.title, "Filters cleared");
        assert_eq!(note.description, "Showing all inventory items.");
        assert!(!filter.is_filtered());
        assert_eq!(filter.search_term, "salt");
    }

    #[test]
    fn test_low_stock_alert_list() {
        let list = low_stock(&catalog(), 20, 5);
        assert_eq!(names(&list), vec!["Kissan Ketchup"]);
        assert_eq!(low_stock(&catalog(), 100, 2).len(), 2);
    }

    #[test]
    fn test_expiry_filter_from_str() {
        assert_eq!("thisMonth".parse::<ExpiryFilter>(), Ok(ExpiryFilter::ThisMonth));
        assert_eq!("next-month".parse::<ExpiryFilter>(), Ok(ExpiryFilter::NextMonth));
        assert!("soon".parse::<ExpiryFilter>().is_err());
    }
}
