//! # Line Items
//!
//! Drinks, food and frozen desserts share one shape: a required primary
//! selection plus an ordered set of optional add-ons, each validated against
//! the catalog and priced from it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Configured<K: ItemKind>                             │
//! │                                                                         │
//! │   primary: Option<Selection>     add_ons: AddOnSet (ordered, distinct)  │
//! │   ┌──────────────────────┐       ┌──────────────────────────────────┐   │
//! │   │ "medium"  $1.75      │       │ "lemon" $0.15 │ "lime" $0.15     │   │
//! │   └──────────────────────┘       └──────────────────────────────────┘   │
//! │                                                                         │
//! │   price = 0 if primary unset, else primary + Σ add-ons                  │
//! │                                                                         │
//! │   Drink         = Configured<DrinkKind> + optional base                 │
//! │   Food          = Configured<FoodKind>                                  │
//! │   FrozenDessert = Configured<DessertKind>                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices are resolved from the catalog at the moment a selection is
//! validated and frozen into the item, so pricing needs no catalog access.

mod dessert;
mod drink;
mod food;

use std::fmt;
use std::marker::PhantomData;

use crate::catalog::{Catalog, Category};
use crate::error::{OrderError, OrderResult};
use crate::money::Money;
use crate::validation::normalize_name;

pub use dessert::{DessertKind, FrozenDessert};
pub use drink::{Drink, DrinkKind};
pub use food::{Food, FoodKind};

// =============================================================================
// Item Kind
// =============================================================================

/// The catalog tables and error variants one kind of item draws on.
pub trait ItemKind {
    /// Table the required selection comes from.
    const PRIMARY: Category;

    /// Table the add-ons come from.
    const ADD_ON: Category;

    fn invalid_primary(value: &str) -> OrderError;

    fn invalid_add_on(value: &str) -> OrderError;

    /// Price of one add-on, or `None` if it is not on the menu.
    fn add_on_price(catalog: &Catalog, name: &str) -> Option<Money> {
        catalog.price_of(Self::ADD_ON, name)
    }
}

// =============================================================================
// Selection
// =============================================================================

/// A validated catalog name together with the price it had when chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    name: String,
    price: Money,
}

impl Selection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Add-on Set
// =============================================================================

/// Insertion-ordered set of add-ons. Inserting a name twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOnSet {
    entries: Vec<Selection>,
}

impl AddOnSet {
    /// Appends the selection unless its name is already present.
    ///
    /// Returns `true` if it was added.
    pub fn insert(&mut self, selection: Selection) -> bool {
        if self.contains(&selection.name) {
            return false;
        }
        self.entries.push(selection);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> Money {
        self.entries.iter().map(Selection::price).sum()
    }
}

// =============================================================================
// Configured Item
// =============================================================================

/// A primary selection plus add-ons, validated against the catalog tables
/// named by `K`.
pub struct Configured<K> {
    primary: Option<Selection>,
    add_ons: AddOnSet,
    kind: PhantomData<K>,
}

impl<K: ItemKind> Configured<K> {
    /// An item whose primary selection is not set yet. Prices as zero.
    pub fn unset() -> Self {
        Configured {
            primary: None,
            add_ons: AddOnSet::default(),
            kind: PhantomData,
        }
    }

    /// Sets the primary selection if `value` is on the menu.
    ///
    /// On failure the previous selection (or its absence) is kept.
    pub fn set_primary(&mut self, catalog: &Catalog, value: &str) -> OrderResult<()> {
        let name = normalize_name(value);
        let price = catalog
            .price_of(K::PRIMARY, &name)
            .ok_or_else(|| K::invalid_primary(value))?;
        self.primary = Some(Selection { name, price });
        Ok(())
    }

    /// Adds an add-on if it is on the menu and not already present.
    ///
    /// Returns `Ok(false)` for a duplicate, which changes nothing.
    pub fn add_add_on(&mut self, catalog: &Catalog, value: &str) -> OrderResult<bool> {
        let name = normalize_name(value);
        let price = K::add_on_price(catalog, &name).ok_or_else(|| K::invalid_add_on(value))?;
        Ok(self.add_ons.insert(Selection { name, price }))
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_ref().map(Selection::name)
    }

    pub fn add_ons(&self) -> &AddOnSet {
        &self.add_ons
    }

    pub fn price(&self) -> Money {
        match &self.primary {
            Some(primary) => primary.price + self.add_ons.total(),
            None => Money::zero(),
        }
    }
}

impl<K: ItemKind> Default for Configured<K> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<K> Clone for Configured<K> {
    fn clone(&self) -> Self {
        Configured {
            primary: self.primary.clone(),
            add_ons: self.add_ons.clone(),
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Configured<K> {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary && self.add_ons == other.add_ons
    }
}

impl<K> fmt::Debug for Configured<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configured")
            .field("primary", &self.primary)
            .field("add_ons", &self.add_ons)
            .finish()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced entry of an order.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItem {
    Drink(Drink),
    Food(Food),
    FrozenDessert(FrozenDessert),
}

impl LineItem {
    pub fn price(&self) -> Money {
        match self {
            LineItem::Drink(drink) => drink.price(),
            LineItem::Food(food) => food.price(),
            LineItem::FrozenDessert(dessert) => dessert.price(),
        }
    }

    /// Variant tag as it appears on receipts.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LineItem::Drink(_) => "drink",
            LineItem::Food(_) => "food",
            LineItem::FrozenDessert(_) => "frozen_dessert",
        }
    }
}

impl From<Drink> for LineItem {
    fn from(drink: Drink) -> Self {
        LineItem::Drink(drink)
    }
}

impl From<Food> for LineItem {
    fn from(food: Food) -> Self {
        LineItem::Food(food)
    }
}

impl From<FrozenDessert> for LineItem {
    fn from(dessert: FrozenDessert) -> Self {
        LineItem::FrozenDessert(dessert)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str, cents: i64) -> Selection {
        Selection {
            name: name.to_string(),
            price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_add_on_set_keeps_insertion_order() {
        let mut set = AddOnSet::default();
        assert!(set.insert(selection("storios", 100)));
        assert!(set.insert(selection("cherry", 0)));
        assert!(set.insert(selection("pecans", 50)));
        assert_eq!(set.names(), vec!["storios", "cherry", "pecans"]);
        assert_eq!(set.total().cents(), 150);
    }

    #[test]
    fn test_add_on_set_ignores_duplicates() {
        let mut set = AddOnSet::default();
        assert!(set.insert(selection("chili", 60)));
        assert!(!set.insert(selection("chili", 60)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.total().cents(), 60);
    }

    #[test]
    fn test_unset_item_prices_as_zero() {
        let mut item: Configured<FoodKind> = Configured::unset();
        assert_eq!(item.price(), Money::zero());
        assert_eq!(item.primary(), None);

        // add-ons alone do not make an item chargeable
        let catalog = Catalog::default();
        item.add_add_on(&catalog, "chili").unwrap();
        assert_eq!(item.price(), Money::zero());
    }

    #[test]
    fn test_failed_primary_keeps_previous() {
        let catalog = Catalog::default();
        let mut item: Configured<FoodKind> = Configured::unset();
        item.set_primary(&catalog, "corndog").unwrap();
        assert_eq!(
            item.set_primary(&catalog, "pizza"),
            Err(OrderError::InvalidFoodType("pizza".to_string()))
        );
        assert_eq!(item.primary(), Some("corndog"));
    }

    #[test]
    fn test_line_item_dispatch() {
        let catalog = Catalog::default();
        let item: LineItem = Food::new(&catalog, "french fries").unwrap().into();
        assert_eq!(item.kind_name(), "food");
        assert_eq!(item.price().cents(), 150);
    }
}
