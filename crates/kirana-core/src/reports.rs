//! # Reports
//!
//! Aggregations behind the dashboard cards and the reports screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard                          Reports                             │
//! │  ─────────                          ───────                             │
//! │  DashboardSummary (stat cards)      SalesPeriod::slice (week/month/all) │
//! │  last 14 days of sales (chart)      inventory_status (low/medium/good)  │
//! │  recent_transactions                                                    │
//! │  filter::low_stock (alert card)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Chart rendering is left to the front end; this module only shapes data.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Bill, DailySale, Product, StockStatus};

/// Days of sales shown on the dashboard chart.
pub const DASHBOARD_CHART_DAYS: usize = 14;

/// Days of history produced by [`generate_daily_sales`] (today included).
pub const SALES_HISTORY_DAYS: i64 = 31;

// =============================================================================
// Inventory Status
// =============================================================================

/// Product counts per stock band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryStatus {
    /// `quantity < 10`
    pub low: usize,
    /// `10 <= quantity < 30`
    pub medium: usize,
    /// `quantity >= 30`
    pub good: usize,
}

/// Counts products per stock band.
pub fn inventory_status(catalog: &[Product]) -> InventoryStatus {
    catalog
        .iter()
        .fold(InventoryStatus::default(), |mut acc, p| {
            match p.stock_status() {
                StockStatus::Low => acc.low += 1,
                StockStatus::Medium => acc.medium += 1,
                StockStatus::Good => acc.good += 1,
            }
            acc
        })
}

// =============================================================================
// Sales
// =============================================================================

/// Period picker on the sales report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    #[default]
    Week,
    Month,
    All,
}

impl SalesPeriod {
    /// The trailing part of a chronological series covered by the period.
    pub fn slice(self, sales: &[DailySale]) -> &[DailySale] {
        match self {
            SalesPeriod::Week => last_days(sales, 7),
            SalesPeriod::Month => last_days(sales, 30),
            SalesPeriod::All => sales,
        }
    }
}

impl std::str::FromStr for SalesPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(SalesPeriod::Week),
            "month" => Ok(SalesPeriod::Month),
            "all" => Ok(SalesPeriod::All),
            other => Err(format!("unknown sales period '{}'", other)),
        }
    }
}

/// The last `n` entries of a chronological series.
pub fn last_days(sales: &[DailySale], n: usize) -> &[DailySale] {
    &sales[sales.len().saturating_sub(n)..]
}

/// Mock sales history: one entry per day from `today - 30` to `today`,
/// amount ₹1000..=₹5999, 5..=24 transactions.
pub fn generate_daily_sales<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<DailySale> {
    (0..SALES_HISTORY_DAYS)
        .rev()
        .map(|days_ago| DailySale {
            date: today - Duration::days(days_ago),
            amount: Money::from_rupees(rng.gen_range(1000..6000)),
            transactions: rng.gen_range(5..25),
        })
        .collect()
}

/// Sum of amounts over a series.
pub fn total_sales(sales: &[DailySale]) -> Money {
    sales.iter().map(|s| s.amount).sum()
}

// =============================================================================
// Dashboard
// =============================================================================

/// Figures on the dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub todays_sales: Money,
    pub total_products: usize,
    pub todays_transactions: u32,
    pub low_stock_items: usize,
}

impl DashboardSummary {
    /// Builds the summary. Today's figures come from the sales series
    /// plus any bills recorded today.
    pub fn compute(
        catalog: &[Product],
        bills: &[Bill],
        sales: &[DailySale],
        today: NaiveDate,
        low_stock_threshold: i64,
    ) -> Self {
        let (series_amount, series_count) = sales
            .iter()
            .find(|s| s.date == today)
            .map_or((Money::zero(), 0), |s| (s.amount, s.transactions));

        let todays_bills: Vec<&Bill> = bills
            .iter()
            .filter(|b| b.created_at.date_naive() == today)
            .collect();
        let bill_amount: Money = todays_bills.iter().map(|b| b.total).sum();

        DashboardSummary {
            todays_sales: series_amount + bill_amount,
            total_products: catalog.len(),
            todays_transactions: series_count + todays_bills.len() as u32,
            low_stock_items: catalog
                .iter()
                .filter(|p| p.is_low_stock(low_stock_threshold))
                .count(),
        }
    }
}

/// Most recent bills first, capped at `limit`.
pub fn recent_transactions(bills: &[Bill], limit: usize) -> Vec<Bill> {
    let mut sorted: Vec<Bill> = bills.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillItem;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn product(id: &str, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Item {}", id),
            barcode: format!("8900000000{}", id),
            category: "Grocery".to_string(),
            price: Money::from_rupees(10),
            quantity,
            expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn bill(id: &str, hour: u32, total: i64) -> Bill {
        let item = BillItem::from_product(&product("1", 10));
        Bill {
            id: id.to_string(),
            items: vec![item],
            subtotal: Money::from_rupees(total),
            tax: Money::zero(),
            discount: Money::zero(),
            total: Money::from_rupees(total),
            customer_name: None,
            customer_phone: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap(),
            cashier_id: "U001".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_inventory_status_bands() {
        let catalog = vec![product("1", 9), product("2", 10), product("3", 29), product("4", 30), product("5", 60)];
        assert_eq!(
            inventory_status(&catalog),
            InventoryStatus { low: 1, medium: 2, good: 2 }
        );
        assert_eq!(inventory_status(&[]), InventoryStatus::default());
    }

    #[test]
    fn test_generate_daily_sales_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let sales = generate_daily_sales(today(), &mut rng);

        assert_eq!(sales.len(), 31);
        assert_eq!(sales[0].date, today() - Duration::days(30));
        assert_eq!(sales[30].date, today());
        for s in &sales {
            assert!(s.amount >= Money::from_rupees(1000) && s.amount <= Money::from_rupees(5999));
            assert!((5..=24).contains(&s.transactions));
        }
    }

    #[test]
    fn test_sales_period_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let sales = generate_daily_sales(today(), &mut rng);

        assert_eq!(SalesPeriod::Week.slice(&sales).len(), 7);
        assert_eq!(SalesPeriod::Month.slice(&sales).len(), 30);
        assert_eq!(SalesPeriod::All.slice(&sales).len(), 31);
        assert_eq!(SalesPeriod::Week.slice(&sales).last().map(|s| s.date), Some(today()));
        assert_eq!(last_days(&sales[..3], DASHBOARD_CHART_DAYS).len(), 3);
        assert_eq!("month".parse::<SalesPeriod>(), Ok(SalesPeriod::Month));
    }

    #[test]
    fn test_dashboard_summary() {
        let catalog = vec![product("1", 5), product("2", 50), product("3", 15)];
        let sales = vec![DailySale {
            date: today(),
            amount: Money::from_rupees(2000),
            transactions: 7,
        }];
        let bills = vec![bill("B001", 9, 95), bill("B002", 8, 63)];

        let summary = DashboardSummary::compute(&catalog, &bills, &sales, today(), 20);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.low_stock_items, 2);
        assert_eq!(summary.todays_sales, Money::from_rupees(2158));
        assert_eq!(summary.todays_transactions, 9);
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let bills = vec![bill("B002", 8, 63), bill("B001", 9, 95), bill("B000", 7, 10)];
        let recent = recent_transactions(&bills, 2);
        let ids: Vec<&str> = recent.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["B001", "B002"]);
    }
}
