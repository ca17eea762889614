//! # Report Commands
//!
//! Data for the dashboard cards, the reports screen and the user list.
//!
//! ```text
//! ┌──────────────────────────────── Dashboard ──────────────────────────────┐
//! │  Today's Sales │ Total Products │ Transactions │ Low Stock Items        │
//! ├─────────────────────────────────────┬───────────────────────────────────┤
//! │  Sales overview (last 14 days)      │  Low stock alert (first 5)        │
//! ├─────────────────────────────────────┴───────────────────────────────────┤
//! │  Recent transactions (newest first)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use kirana_core::filter;
use kirana_core::reports::{
    self, DashboardSummary, InventoryStatus, SalesPeriod, DASHBOARD_CHART_DAYS,
};
use kirana_core::{Bill, DailySale, Money, Product, User, LOW_STOCK_ALERT_LIMIT};
use kirana_db::{BillRepository, ProductRepository, UserRepository};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};

/// Bills listed on the dashboard.
pub const RECENT_TRANSACTIONS: usize = 5;

/// Everything the dashboard screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub sales_chart: Vec<DailySale>,
    pub low_stock: Vec<Product>,
    pub recent_transactions: Vec<Bill>,
}

/// The sales report for one period.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub period: SalesPeriod,
    pub sales: Vec<DailySale>,
    pub total: Money,
    pub transactions: u32,
}

pub async fn dashboard(db: &DbState, config: &ConfigState) -> Result<DashboardResponse, ApiError> {
    debug!("dashboard command");
    let catalog = db.inner().products().list().await?;
    let bills = db.inner().bills().list().await?;
    let sales = db.daily_sales();

    Ok(DashboardResponse {
        summary: DashboardSummary::compute(
            &catalog,
            &bills,
            sales,
            crate::today(),
            config.low_stock_threshold,
        ),
        sales_chart: reports::last_days(sales, DASHBOARD_CHART_DAYS).to_vec(),
        low_stock: filter::low_stock(&catalog, config.low_stock_threshold, LOW_STOCK_ALERT_LIMIT),
        recent_transactions: reports::recent_transactions(&bills, RECENT_TRANSACTIONS),
    })
}

/// Sales for the week, the month or the whole history.
pub fn sales_report(db: &DbState, period: SalesPeriod) -> SalesReport {
    debug!(?period, "sales_report command");
    let sales = period.slice(db.daily_sales());
    SalesReport {
        period,
        total: reports::total_sales(sales),
        transactions: sales.iter().map(|s| s.transactions).sum(),
        sales: sales.to_vec(),
    }
}

/// Product counts per stock band.
pub async fn inventory_report(db: &DbState) -> Result<InventoryStatus, ApiError> {
    debug!("inventory_report command");
    let catalog = db.inner().products().list().await?;
    Ok(reports::inventory_status(&catalog))
}

/// Every bill, newest first.
pub async fn list_bills(db: &DbState) -> Result<Vec<Bill>, ApiError> {
    let bills = db.inner().bills().list().await?;
    Ok(reports::recent_transactions(&bills, bills.len()))
}

pub async fn list_users(db: &DbState) -> Result<Vec<User>, ApiError> {
    debug!("list_users command");
    Ok(db.inner().users().list().await?)
}
