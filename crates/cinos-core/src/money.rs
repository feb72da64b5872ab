//! # Money Module
//!
//! Provides `Money` for prices and `TaxRate` for the sales tax.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    1.75 + 0.15 + 0.15 = 2.0500000000000003  ❌                          │
//! │    every price needs a round(_, 2) pass to stay honest                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    175 + 15 + 15 = 205 cents, exactly                                   │
//! │    only tax needs rounding, and it happens in one place                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinos_core::money::{Money, TaxRate};
//!
//! let drink = Money::from_cents(205);
//! let tax = drink.calculate_tax(TaxRate::from_bps(725));
//! assert_eq!(tax.cents(), 15);
//! assert_eq!((drink + tax).to_string(), "$2.20");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Catalog price ──► Selection.price ──► LineItem::price ──► Order::subtotal
///                                                               │
///                                          Totals { subtotal, tax, total }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use cinos_core::money::Money;
    ///
    /// let price = Money::from_cents(175); // $1.75
    /// assert_eq!(price.cents(), 175);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounded to the nearest cent.
    ///
    /// Halves round away from zero: `(cents × bps + 5000) / 10000` for
    /// non-negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::money::{Money, TaxRate};
    ///
    /// // $2.05 × 7.25% = $0.148625 → $0.15
    /// let tax = Money::from_cents(205).calculate_tax(TaxRate::from_bps(725));
    /// assert_eq!(tax.cents(), 15);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large subtotals cannot overflow before the division
        let scaled = self.0 as i128 * rate.bps() as i128;
        let tax_cents = if scaled >= 0 {
            (scaled + 5000) / 10000
        } else {
            (scaled - 5000) / 10000
        };
        Money::from_cents(tax_cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a count (e.g. surcharge × number of flavors).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0.saturating_mul(count))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (1 bps = 0.01%).
///
/// 725 bps = 7.25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

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

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(205).to_string(), "$2.05");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let size = Money::from_cents(175);
        let surcharge = Money::from_cents(15);
        assert_eq!((size + surcharge * 2).cents(), 205);

        let mut running = Money::zero();
        running += size;
        assert_eq!(running, size);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(15)).cents(), i64::MAX);
        assert_eq!((max * 2).cents(), i64::MAX);

        let mut running = max;
        running += Money::from_cents(1);
        assert_eq!(running, max);

        let tax = max.calculate_tax(TaxRate::from_bps(10000));
        assert_eq!(tax, max);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(230), Money::from_cents(60), Money::from_cents(30)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 320);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 205 × 7.25% = 14.8625 cents → 15
        assert_eq!(Money::from_cents(205).calculate_tax(TaxRate::from_bps(725)).cents(), 15);
        // 1000 × 8.25% = 82.5 cents → 83
        assert_eq!(Money::from_cents(1000).calculate_tax(TaxRate::from_bps(825)).cents(), 83);
        // 320 × 7.25% = 23.2 cents → 23
        assert_eq!(Money::from_cents(320).calculate_tax(TaxRate::from_bps(725)).cents(), 23);
        // 200 × 7.25% = 14.5 cents, an exact tie → 15
        assert_eq!(Money::from_cents(200).calculate_tax(TaxRate::from_bps(725)).cents(), 15);
    }

    #[test]
    fn test_tax_on_zero() {
        let tax = Money::zero().calculate_tax(TaxRate::default());
        assert!(tax.is_zero());
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(725).to_string(), "7.25%");
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10.00%");
        assert!((TaxRate::from_bps(725).percentage() - 7.25).abs() < 0.001);
    }
}
