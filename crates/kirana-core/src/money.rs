//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹20.00 is stored as 2000 paise                                       │
//! │    5% GST on ₹50 = 250 paise, rounded to ₹3 on the bill                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kirana_core::money::Money;
//!
//! let price = Money::from_rupees(20); // ₹20.00
//! let line_total = price * 3;         // ₹60.00
//! assert_eq!(line_total.paise(), 6000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for discounts and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► BillItem.total ──► Bill.subtotal ──► Bill.tax ──► Bill.total
///        │
///        └──► price range filter (inventory), report totals
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// let price = Money::from_paise(2999); // ₹29.99
    /// assert_eq!(price.paise(), 2999);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// The mock catalog prices everything in whole rupees, so this is the
    /// constructor used by seed data and the placeholder generator.
    /// Saturates at the `i64` bounds; use `checked_from_rupees` for input.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees.saturating_mul(PAISE_PER_RUPEE))
    }

    /// Creates a Money value from whole rupees, or `None` if the amount
    /// does not fit in paise.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_rupees(299), Some(Money::from_paise(29_900)));
    /// assert_eq!(Money::checked_from_rupees(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_from_rupees(rupees: i64) -> Option<Self> {
        match rupees.checked_mul(PAISE_PER_RUPEE) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(2999).rupees(), 29);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax rounded half-up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, applied to the
    /// absolute value so refunds round symmetrically.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    /// use kirana_core::types::TaxRate;
    ///
    /// let tax = Money::from_paise(1999).calculate_tax(TaxRate::from_bps(500));
    /// // 1999 × 5% = 99.95 paise → 100 paise
    /// assert_eq!(tax.paise(), 100);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let magnitude = (self.0.unsigned_abs() as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money::from_paise(self.0.signum() * magnitude as i64)
    }

    /// Calculates tax rounded half-up to whole rupees.
    ///
    /// This is how printed bills compute GST: `round(subtotal × rate)` on
    /// rupee amounts. The rounding is done once on the exact product, never
    /// on an already-rounded paise value.
    ///
    /// ## Example
    /// ```rust
    /// use kirana_core::money::Money;
    /// use kirana_core::types::TaxRate;
    ///
    /// let rate = TaxRate::from_bps(500);
    /// // ₹50 × 5% = ₹2.50 → ₹3
    /// assert_eq!(Money::from_rupees(50).calculate_tax_whole(rate), Money::from_rupees(3));
    /// // ₹40 × 5% = ₹2.00 → ₹2
    /// assert_eq!(Money::from_rupees(40).calculate_tax_whole(rate), Money::from_rupees(2));
    /// ```
    pub fn calculate_tax_whole(&self, rate: TaxRate) -> Money {
        // paise × bps / 10000 gives paise; a further / 100 gives rupees.
        let denominator: i128 = 10_000 * PAISE_PER_RUPEE as i128;
        let rupees =
            (self.0.unsigned_abs() as i128 * rate.bps() as i128 + denominator / 2) / denominator;
        Money::from_rupees(self.0.signum() * rupees as i64)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount in rupees, e.g. `₹299.00`.
///
/// ## Note
/// For debugging and console output. Locale-aware formatting (lakh grouping)
/// belongs to the front end.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().unsigned_abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity. Saturates like `multiply_quantity`.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
