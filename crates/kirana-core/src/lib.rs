//! # kirana-core: Pure Business Logic for Kirana POS
//!
//! This crate is the **heart** of Kirana POS. It contains the store's
//! business rules as pure functions and plain state machines with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard (console / web front end)             │   │
//! │  │   Inventory ──► Scan dialog ──► Billing ──► Reports ──► Chat   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐       │   │
//! │  │   │ filter │ │billing │ │  scan  │ │  chat  │ │  i18n  │       │   │
//! │  │   └────────┘ └────────┘ └────────┘ └────────┘ └────────┘       │   │
//! │  │   ┌────────┐ ┌────────┐ ┌────────────┐ ┌─────────┐             │   │
//! │  │   │ types  │ │ money  │ │ validation │ │ reports │             │   │
//! │  │   └────────┘ └────────┘ └────────────┘ └─────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO TIMERS • CALLER-OWNED RNG             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kirana-db (Repository Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, BillItem, Bill, ...)
//! - [`money`] - Money type with integer arithmetic (paise, no floating point)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`filter`] - Inventory filter/search/sort engine
//! - [`billing`] - Billing cart arithmetic and checkout
//! - [`scan`] - Barcode scan workflow state machine
//! - [`chat`] - Rule-based help assistant
//! - [`i18n`] - Static UI string tables
//! - [`reports`] - Dashboard and report aggregations
//!
//! ## Example Usage
//!
//! ```rust
//! use kirana_core::money::Money;
//! use kirana_core::types::TaxRate;
//!
//! // ₹50 subtotal at 5% GST, rounded to whole rupees
//! let subtotal = Money::from_rupees(50);
//! let tax = subtotal.calculate_tax_whole(TaxRate::from_bps(500));
//! assert_eq!(tax, Money::from_rupees(3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod chat;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod money;
pub mod reports;
pub mod scan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a product counts as "low stock".
///
/// Informal threshold used by the inventory filter and the dashboard alert.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Number of low-stock products shown on the dashboard alert card.
pub const LOW_STOCK_ALERT_LIMIT: usize = 5;

/// Minimum length of a manually entered barcode. No checksum is verified.
pub const MIN_BARCODE_LENGTH: usize = 8;

/// Largest quantity accepted on a bill line or a stock count.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest unit price accepted from a form, in whole rupees (₹1 crore).
pub const MAX_PRICE_RUPEES: i64 = 10_000_000;

/// Default tax rate in basis points (5% GST).
pub const DEFAULT_TAX_RATE_BPS: u32 = 500;

/// Frames evaluated per scanning run before the simulated detector gives up.
pub const MAX_SCAN_ATTEMPTS: u32 = 30;

/// Support line quoted by the chat assistant's fallback answer.
pub const SUPPORT_PHONE: &str = "+91 94713 59517";
