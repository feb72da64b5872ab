//! # Order Module
//!
//! The customer's current order and its read views.
//!
//! ## Order Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  add(item) ──────────► items.push(item)        returns new index        │
//! │                                                                         │
//! │  remove_at(i) ───────► items.remove(i)         later items shift down   │
//! │                        (InvalidIndex if i ≥ len, order untouched)       │
//! │                                                                         │
//! │  receipt() ──────────► [ReceiptLine]           live, in index order     │
//! │                                                                         │
//! │  totals() ───────────► subtotal = Σ price                               │
//! │                        tax      = round(subtotal × rate)                │
//! │                        total    = subtotal + tax                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{OrderError, OrderResult};
use crate::item::LineItem;
use crate::money::{Money, TaxRate};

// =============================================================================
// Receipt
// =============================================================================

/// One receipt row: the item's position, its selections and current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReceiptLine {
    Drink {
        index: usize,
        size: Option<String>,
        base: Option<String>,
        flavors: Vec<String>,
        #[serde(rename = "price_cents")]
        price: Money,
    },
    Food {
        index: usize,
        food_type: Option<String>,
        toppings: Vec<String>,
        #[serde(rename = "price_cents")]
        price: Money,
    },
    FrozenDessert {
        index: usize,
        flavor: Option<String>,
        mix_ins: Vec<String>,
        #[serde(rename = "price_cents")]
        price: Money,
    },
}

impl ReceiptLine {
    fn from_item(index: usize, item: &LineItem) -> Self {
        match item {
            LineItem::Drink(drink) => ReceiptLine::Drink {
                index,
                size: drink.size().map(str::to_string),
                base: drink.base().map(str::to_string),
                flavors: drink.flavors().names(),
                price: drink.price(),
            },
            LineItem::Food(food) => ReceiptLine::Food {
                index,
                food_type: food.food_type().map(str::to_string),
                toppings: food.toppings().names(),
                price: food.price(),
            },
            LineItem::FrozenDessert(dessert) => ReceiptLine::FrozenDessert {
                index,
                flavor: dessert.flavor().map(str::to_string),
                mix_ins: dessert.mix_ins().names(),
                price: dessert.price(),
            },
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ReceiptLine::Drink { index, .. }
            | ReceiptLine::Food { index, .. }
            | ReceiptLine::FrozenDessert { index, .. } => *index,
        }
    }

    pub fn price(&self) -> Money {
        match self {
            ReceiptLine::Drink { price, .. }
            | ReceiptLine::Food { price, .. }
            | ReceiptLine::FrozenDessert { price, .. } => *price,
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Subtotal, tax and tax-inclusive total of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Totals {
    #[serde(rename = "subtotal_cents")]
    pub subtotal: Money,
    #[serde(rename = "tax_cents")]
    pub tax: Money,
    #[serde(rename = "total_cents")]
    pub total: Money,
}

impl Totals {
    /// Applies `rate` to an already summed subtotal.
    pub fn from_subtotal(subtotal: Money, rate: TaxRate) -> Self {
        let tax = subtotal.calculate_tax(rate);
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// An ordered list of line items.
///
/// ## Invariants
/// - Indices are positions: 0-based and contiguous after any removal
/// - `add` always succeeds; items were validated when they were built
/// - A failed `remove_at` leaves the order untouched
#[derive(Debug, Clone)]
pub struct Order {
    items: Vec<LineItem>,
    tax_rate: TaxRate,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(tax_rate: TaxRate) -> Self {
        Order {
            items: Vec::new(),
            tax_rate,
            created_at: Utc::now(),
        }
    }

    /// An empty order taxed at the catalog's rate.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Order::new(catalog.tax_rate())
    }

    /// Appends an item and returns its index.
    pub fn add(&mut self, item: impl Into<LineItem>) -> usize {
        self.items.push(item.into());
        self.items.len() - 1
    }

    /// Removes the item at `index`; later items move down by one.
    pub fn remove_at(&mut self, index: usize) -> OrderResult<LineItem> {
        if index >= self.items.len() {
            return Err(OrderError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Empties the order and starts a fresh one.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Mutable access to an item already in the order. Later receipts and
    /// totals reflect whatever is changed here.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        self.items.get_mut(index)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn receipt(&self) -> Vec<ReceiptLine> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ReceiptLine::from_item(index, item))
            .collect()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::price).sum()
    }

    /// Tax is computed from the subtotal, not per line.
    pub fn totals(&self) -> Totals {
        Totals::from_subtotal(self.subtotal(), self.tax_rate)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new(TaxRate::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
