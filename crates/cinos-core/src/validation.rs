//! # Validation Module
//!
//! Name normalisation and menu entry checks.
//!
//! ## Two Kinds of Validation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Menu load (once, at startup)                                           │
//! │  ├── entry names non-empty, ≤ 50 chars, unique per category             │
//! │  ├── prices 0..=MAX_PRICE_CENTS (zero = free add-on)                    │
//! │  └── tax rate 0..=10000 bps                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Order taking (every request)                                           │
//! │  └── is the (lower-cased) value in the catalog?  → catalog.rs           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Names
// =============================================================================

/// Canonical form of a catalog name: lower-case.
///
/// Every comparison against the catalog goes through this, so "Sbrite",
/// "SBRITE" and "sbrite" are the same base.
///
/// ```rust
/// use cinos_core::validation::normalize_name;
///
/// assert_eq!(normalize_name("Mint Chocolate Chip"), "mint chocolate chip");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Validates and normalises a menu entry name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
///
/// Returns the canonical (trimmed, lower-cased) name.
pub fn validate_entry_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(normalize_name(name))
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// Zero is allowed (free toppings and mix-ins). The ceiling is
/// [`MAX_PRICE_CENTS`].
///
/// ```rust
/// use cinos_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents("toppings", 0).is_ok());
/// assert!(validate_price_cents("toppings", -5).is_err());
/// assert!(validate_price_cents("toppings", i64::MAX).is_err());
/// ```
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate_bps".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Sbrite"), "sbrite");
        assert_eq!(normalize_name("T&T's"), "t&t's");
        assert_eq!(normalize_name("mr. salt"), "mr. salt");
    }

    #[test]
    fn test_validate_entry_name() {
        assert_eq!(validate_entry_name("bases", "  Hill Fog ").unwrap(), "hill fog");
        assert!(matches!(
            validate_entry_name("bases", "   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_entry_name("bases", &"x".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_entry_name("bases", &"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("sizes", 0).is_ok());
        assert!(validate_price_cents("sizes", 215).is_ok());
        assert!(validate_price_cents("sizes", -1).is_err());
        assert!(validate_price_cents("sizes", MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents("sizes", MAX_PRICE_CENTS + 1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(725).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
