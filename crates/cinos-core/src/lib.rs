//! # cinos-core: Order Composition & Pricing for Cinos
//!
//! Pure order logic with zero I/O dependencies. A customer builds up an
//! [`Order`] of drinks, food and frozen desserts; every option is validated
//! against a [`Catalog`] and every item prices itself deterministically.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cinos Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 order-api (HTTP, axum)                          │   │
//! │  │    POST /order ──► POST /order/food ──► GET /order              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cinos-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   item    │  │   order   │  │   money   │  │   │
//! │  │   │  Menu     │  │  Drink    │  │  Receipt  │  │  Money    │  │   │
//! │  │   │  Category │  │  Food     │  │  Totals   │  │  TaxRate  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Valid options and their prices
//! - [`item`] - Drink, Food and FrozenDessert line items
//! - [`order`] - The order, its receipt and totals
//! - [`money`] - Integer-cent money and basis-point tax rates
//! - [`error`] - Domain error types
//! - [`validation`] - Name normalisation and menu entry checks
//!
//! ## Example Usage
//!
//! ```rust
//! use cinos_core::{Catalog, Drink, Order};
//!
//! let catalog = Catalog::default();
//! let mut drink = Drink::new(&catalog, "Medium").unwrap();
//! drink.set_base(&catalog, "Sbrite").unwrap();
//! drink.add_flavor(&catalog, "lemon").unwrap();
//! drink.add_flavor(&catalog, "lime").unwrap();
//!
//! let mut order = Order::for_catalog(&catalog);
//! order.add(drink);
//!
//! let totals = order.totals();
//! assert_eq!(totals.subtotal.cents(), 205);
//! assert_eq!(totals.tax.cents(), 15);
//! assert_eq!(totals.total.cents(), 220);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Category, Menu};
pub use error::{OrderError, OrderResult, ValidationError};
pub use item::{Drink, Food, FrozenDessert, LineItem};
pub use money::{Money, TaxRate};
pub use order::{Order, ReceiptLine, Totals};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order on the built-in menu (7.25%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 725;

/// Surcharge per flavor shot added to a drink, in cents.
pub const EXTRA_OPTION_SURCHARGE_CENTS: i64 = 15;

/// Longest accepted catalog entry name.
pub const MAX_NAME_LEN: usize = 50;

/// Highest price a menu entry or the surcharge may carry ($10,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000;
