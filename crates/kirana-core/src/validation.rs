//! # Validation Module
//!
//! Input validation for Kirana POS forms.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Add-product form ──► validate_product_name, validate_category,        │
//! │                       validate_price, validate_stock_quantity           │
//! │                                                                         │
//! │  Scan review form ──► validate_category, parse_quantity                 │
//! │                                                                         │
//! │  Manual entry     ──► validate_barcode (length only, no checksum)       │
//! │                                                                         │
//! │  Cart qty edit    ──► validate_quantity                                 │
//! │                                                                         │
//! │  A failure blocks the action and is shown to the operator.             │
//! │  The entered value is kept so it can be corrected.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kirana_core::validation::{validate_barcode, validate_quantity};
//!
//! assert_eq!(validate_barcode(" 8901234567890 ").unwrap(), "8901234567890");
//! assert!(validate_barcode("1234").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRICE_RUPEES, MAX_QUANTITY, MIN_BARCODE_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only input for the named field.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a manually entered barcode and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - At least `MIN_BARCODE_LENGTH` (8) characters after trimming
/// - No checksum or digit check; any characters are accepted
pub fn validate_barcode(barcode: &str) -> ValidationResult<String> {
    let barcode = barcode.trim();

    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.chars().count() < MIN_BARCODE_LENGTH {
        return Err(ValidationError::TooShort {
            field: "barcode".to_string(),
            min: MIN_BARCODE_LENGTH,
        });
    }

    Ok(barcode.to_string())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category selection. Any non-empty label is accepted, since
/// the catalog carries categories outside the form's fixed list.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required("category", category)
}

/// Normalizes a search query by trimming it.
///
/// Any length is accepted. An empty query matches everything and an
/// over-long one simply matches nothing.
pub fn normalize_search_query(query: &str) -> String {
    query.trim().to_string()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity on a bill line or scan review form.
///
/// ## Rules
/// - Must be at least 1
/// - At most `MAX_QUANTITY`
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a stock level entered on the add-product form. Zero is allowed.
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if !(0..=MAX_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most `MAX_PRICE_RUPEES`
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > Money::from_rupees(MAX_PRICE_RUPEES) {
        return Err(price_out_of_range());
    }

    Ok(())
}

fn price_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_PRICE_RUPEES,
    }
}

/// Parses a quantity typed into a form field (must be an integer >= 1).
///
/// ```text
/// "3"   → Ok(3)
/// ""    → Required
/// "abc" → InvalidFormat
/// "0"   → MustBePositive
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses a rupee amount such as `"299"` or `"29.99"` into `Money`.
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let input = input.trim().trim_start_matches('₹');
    let invalid = || ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be an amount like 299 or 29.99".to_string(),
    };

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    // Digits only by now, so a failed parse means the number is too large.
    let rupees: i64 = whole.parse().map_err(|_| price_out_of_range())?;
    let paise: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    let price = Money::checked_from_rupees(rupees)
        .and_then(|r| r.checked_add(Money::from_paise(paise)))
        .ok_or_else(price_out_of_range)?;
    validate_price(price)?;
    Ok(price)
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
