//! # Error Types
//!
//! Domain-specific error types for cinos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cinos-core errors (this file)                                          │
//! │  ├── OrderError       - Rejected item options, bad indices              │
//! │  └── ValidationError  - Malformed menu definitions                      │
//! │                                                                         │
//! │  order-api errors (in app)                                              │
//! │  └── ApiError         - What HTTP clients see ({ code, message })       │
//! │                                                                         │
//! │  Flow: OrderError → ApiError → 400 response                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is local and recoverable. A rejected mutation never
//! changes the item or order it was applied to.

use thiserror::Error;

// =============================================================================
// Order Error
// =============================================================================

/// Rejected order operations.
///
/// Each variant carries the value that was rejected, as the caller sent it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Drink size is not on the menu.
    #[error("Invalid size: '{0}'")]
    InvalidSize(String),

    /// Drink base is not on the menu.
    #[error("Invalid base: '{0}'")]
    InvalidBase(String),

    /// Drink flavor or frozen dessert flavor is not on the menu.
    #[error("Invalid flavor: '{0}'")]
    InvalidFlavor(String),

    #[error("Invalid food type: '{0}'")]
    InvalidFoodType(String),

    #[error("Invalid topping: '{0}'")]
    InvalidTopping(String),

    #[error("Invalid mix in: '{0}'")]
    InvalidMixIn(String),

    /// Index outside `0..len`.
    ///
    /// `index` is signed so transport layers can report negative input
    /// through the same variant.
    #[error("Invalid index: {index} (order has {len} items)")]
    InvalidIndex { index: i64, len: usize },

    /// The primary selection of a submission is absent.
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Menu definition errors.
///
/// Raised while building a [`Catalog`](crate::Catalog) from a
/// [`Menu`](crate::Menu), never while taking orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Same name listed twice in one category (after lower-casing).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_messages() {
        assert_eq!(
            OrderError::InvalidSize("venti".to_string()).to_string(),
            "Invalid size: 'venti'"
        );
        assert_eq!(
            OrderError::InvalidIndex { index: 3, len: 1 }.to_string(),
            "Invalid index: 3 (order has 1 items)"
        );
        assert_eq!(
            OrderError::MissingRequiredField { field: "size" }.to_string(),
            "size is required"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "sizes".to_string(),
            value: "small".to_string(),
        };
        assert_eq!(err.to_string(), "sizes 'small' already exists");

        let err = ValidationError::TooLong {
            field: "foods".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "foods must be at most 50 characters");
    }
}
