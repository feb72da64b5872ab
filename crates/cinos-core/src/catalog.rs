//! # Catalog Module
//!
//! The menu: which options exist for each item category and what they cost.
//!
//! ## Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Tables                                  │
//! │                                                                         │
//! │  Drink            Food              Frozen Dessert                      │
//! │  ─────            ────              ──────────────                      │
//! │  Size   (priced)  Food    (priced)  DessertFlavor (priced)              │
//! │  Base   (names)   Topping (priced)  MixIn         (priced)              │
//! │  Flavor (names)                                                         │
//! │                                                                         │
//! │  Globals: extra_option_surcharge (per drink flavor), tax_rate           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names are stored lower-case and looked up case-insensitively. A missing
//! name is simply "not valid"; the caller decides which error to raise.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{Money, TaxRate};
use crate::validation::{
    normalize_name, validate_entry_name, validate_price_cents, validate_tax_rate_bps,
    ValidationResult,
};
use crate::{DEFAULT_TAX_RATE_BPS, EXTRA_OPTION_SURCHARGE_CENTS};

// =============================================================================
// Category
// =============================================================================

/// One table of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Size,
    Base,
    Flavor,
    Food,
    Topping,
    DessertFlavor,
    MixIn,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Size,
        Category::Base,
        Category::Flavor,
        Category::Food,
        Category::Topping,
        Category::DessertFlavor,
        Category::MixIn,
    ];

    /// Whether entries of this category carry their own price.
    pub const fn is_priced(&self) -> bool {
        !matches!(self, Category::Base | Category::Flavor)
    }

    /// The menu field holding this category.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Category::Size => "sizes",
            Category::Base => "bases",
            Category::Flavor => "flavors",
            Category::Food => "foods",
            Category::Topping => "toppings",
            Category::DessertFlavor => "dessert_flavors",
            Category::MixIn => "mix_ins",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

// =============================================================================
// Built-in Menu
// =============================================================================

const SIZES: &[(&str, i64)] = &[("small", 150), ("medium", 175), ("large", 205), ("mega", 215)];

const BASES: &[&str] = &["water", "sbrite", "pokeacola", "mr. salt", "hill fog", "leaf wine"];

const FLAVORS: &[&str] = &["lemon", "cherry", "strawberry", "mint", "blueberry", "lime"];

const FOODS: &[(&str, i64)] = &[
    ("hotdog", 230),
    ("corndog", 200),
    ("ice cream", 300),
    ("onion rings", 175),
    ("french fries", 150),
    ("tater tots", 170),
    ("nacho chips", 190),
];

const TOPPINGS: &[(&str, i64)] = &[
    ("cherry", 0),
    ("whipped cream", 0),
    ("caramel sauce", 50),
    ("chocolate sauce", 50),
    ("nacho cheese", 30),
    ("chili", 60),
    ("bacon bits", 30),
    ("ketchup", 0),
    ("mustard", 0),
];

const DESSERT_FLAVORS: &[(&str, i64)] = &[
    ("mint chocolate chip", 400),
    ("chocolate", 300),
    ("vanilla bean", 300),
    ("banana", 350),
    ("butter pecan", 350),
    ("s'more", 400),
];

const MIX_INS: &[(&str, i64)] = &[
    ("cherry", 0),
    ("whipped cream", 0),
    ("caramel sauce", 50),
    ("chocolate sauce", 50),
    ("storios", 100),
    ("dig dogs", 100),
    ("t&t's", 100),
    ("cookie dough", 100),
    ("pecans", 50),
];

fn price_table(entries: &[(&str, i64)]) -> BTreeMap<String, Money> {
    entries
        .iter()
        .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
        .collect()
}

fn name_set(entries: &[&str]) -> BTreeSet<String> {
    entries.iter().map(|name| name.to_string()).collect()
}

// =============================================================================
// Menu (serialisable description)
// =============================================================================

/// Serialisable description of a catalog, as found in a menu file.
///
/// ## Format (TOML)
/// ```toml
/// bases = ["water", "sbrite"]
/// flavors = ["lemon", "lime"]
/// extra_option_surcharge_cents = 15
/// tax_rate_bps = 725
///
/// [sizes]
/// small = 150
/// medium = 175
///
/// [foods]
/// hotdog = 230
/// # ... toppings, dessert_flavors, mix_ins
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Menu {
    pub sizes: BTreeMap<String, i64>,
    pub bases: Vec<String>,
    pub flavors: Vec<String>,
    pub foods: BTreeMap<String, i64>,
    pub toppings: BTreeMap<String, i64>,
    pub dessert_flavors: BTreeMap<String, i64>,
    pub mix_ins: BTreeMap<String, i64>,
    pub extra_option_surcharge_cents: i64,
    pub tax_rate_bps: u32,
}

impl Default for Menu {
    fn default() -> Self {
        Catalog::default().to_menu()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, read-only lookup tables for every category.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    sizes: BTreeMap<String, Money>,
    bases: BTreeSet<String>,
    flavors: BTreeSet<String>,
    foods: BTreeMap<String, Money>,
    toppings: BTreeMap<String, Money>,
    dessert_flavors: BTreeMap<String, Money>,
    mix_ins: BTreeMap<String, Money>,
    extra_option_surcharge: Money,
    tax_rate: TaxRate,
}

impl Default for Catalog {
    /// The built-in Cinos menu.
    fn default() -> Self {
        Catalog {
            sizes: price_table(SIZES),
            bases: name_set(BASES),
            flavors: name_set(FLAVORS),
            foods: price_table(FOODS),
            toppings: price_table(TOPPINGS),
            dessert_flavors: price_table(DESSERT_FLAVORS),
            mix_ins: price_table(MIX_INS),
            extra_option_surcharge: Money::from_cents(EXTRA_OPTION_SURCHARGE_CENTS),
            tax_rate: TaxRate::from_bps(DEFAULT_TAX_RATE_BPS),
        }
    }
}

impl Catalog {
    /// Builds a catalog from a menu description.
    ///
    /// ## Rules
    /// - Names are trimmed and lower-cased; empty or over-long names fail
    /// - Two names that collide after lower-casing fail with `Duplicate`
    /// - Prices and the surcharge must be ≥ 0
    /// - Tax rate must be within 0..=10000 bps
    pub fn from_menu(menu: Menu) -> ValidationResult<Self> {
        validate_price_cents("extra_option_surcharge_cents", menu.extra_option_surcharge_cents)?;
        validate_tax_rate_bps(menu.tax_rate_bps)?;

        Ok(Catalog {
            sizes: build_price_table(Category::Size, menu.sizes)?,
            bases: build_name_set(Category::Base, menu.bases)?,
            flavors: build_name_set(Category::Flavor, menu.flavors)?,
            foods: build_price_table(Category::Food, menu.foods)?,
            toppings: build_price_table(Category::Topping, menu.toppings)?,
            dessert_flavors: build_price_table(Category::DessertFlavor, menu.dessert_flavors)?,
            mix_ins: build_price_table(Category::MixIn, menu.mix_ins)?,
            extra_option_surcharge: Money::from_cents(menu.extra_option_surcharge_cents),
            tax_rate: TaxRate::from_bps(menu.tax_rate_bps),
        })
    }

    /// Describes this catalog as a [`Menu`].
    pub fn to_menu(&self) -> Menu {
        let cents = |table: &BTreeMap<String, Money>| {
            table
                .iter()
                .map(|(name, price)| (name.clone(), price.cents()))
                .collect()
        };

        Menu {
            sizes: cents(&self.sizes),
            bases: self.bases.iter().cloned().collect(),
            flavors: self.flavors.iter().cloned().collect(),
            foods: cents(&self.foods),
            toppings: cents(&self.toppings),
            dessert_flavors: cents(&self.dessert_flavors),
            mix_ins: cents(&self.mix_ins),
            extra_option_surcharge_cents: self.extra_option_surcharge.cents(),
            tax_rate_bps: self.tax_rate.bps(),
        }
    }

    /// Checks whether `value` is on the menu for `category`, ignoring case.
    pub fn is_valid(&self, category: Category, value: &str) -> bool {
        let name = normalize_name(value);
        match self.price_table(category) {
            Some(table) => table.contains_key(&name),
            None => self
                .name_set(category)
                .is_some_and(|names| names.contains(&name)),
        }
    }

    /// Looks up the price of `value` in a priced category, ignoring case.
    ///
    /// Returns `None` for unknown values and for categories without
    /// per-entry prices (bases, flavors).
    pub fn price_of(&self, category: Category, value: &str) -> Option<Money> {
        self.price_table(category)?
            .get(&normalize_name(value))
            .copied()
    }

    /// Lists the valid names of a category in sorted order.
    pub fn names(&self, category: Category) -> Vec<&str> {
        match self.price_table(category) {
            Some(table) => table.keys().map(String::as_str).collect(),
            None => self
                .name_set(category)
                .map(|names| names.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// Surcharge per flavor added to a drink.
    pub fn extra_option_surcharge(&self) -> Money {
        self.extra_option_surcharge
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    fn price_table(&self, category: Category) -> Option<&BTreeMap<String, Money>> {
        match category {
            Category::Size => Some(&self.sizes),
            Category::Food => Some(&self.foods),
            Category::Topping => Some(&self.toppings),
            Category::DessertFlavor => Some(&self.dessert_flavors),
            Category::MixIn => Some(&self.mix_ins),
            Category::Base | Category::Flavor => None,
        }
    }

    fn name_set(&self, category: Category) -> Option<&BTreeSet<String>> {
        match category {
            Category::Base => Some(&self.bases),
            Category::Flavor => Some(&self.flavors),
            _ => None,
        }
    }
}

fn build_price_table(
    category: Category,
    entries: BTreeMap<String, i64>,
) -> ValidationResult<BTreeMap<String, Money>> {
    let field = category.field_name();
    let mut table = BTreeMap::new();

    for (name, cents) in entries {
        let name = validate_entry_name(field, &name)?;
        validate_price_cents(field, cents)?;
        if table.contains_key(&name) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: name,
            });
        }
        table.insert(name, Money::from_cents(cents));
    }

    Ok(table)
}

fn build_name_set(category: Category, entries: Vec<String>) -> ValidationResult<BTreeSet<String>> {
    let field = category.field_name();
    let mut names = BTreeSet::new();

    for name in entries {
        let name = validate_entry_name(field, &name)?;
        if !names.insert(name.clone()) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: name,
            });
        }
    }

    Ok(names)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::default();
        assert!(catalog.is_valid(Category::Size, "MEDIUM"));
        assert!(catalog.is_valid(Category::Base, "Sbrite"));
        assert!(catalog.is_valid(Category::Flavor, "LiMe"));
        assert_eq!(
            catalog.price_of(Category::DessertFlavor, "Mint Chocolate Chip"),
            Some(Money::from_cents(400))
        );
    }

    #[test]
    fn test_unknown_values_are_invalid() {
        let catalog = Catalog::default();
        assert!(!catalog.is_valid(Category::Size, "venti"));
        assert!(!catalog.is_valid(Category::Food, "pizza"));
        assert_eq!(catalog.price_of(Category::MixIn, "sprinkles"), None);
    }

    #[test]
    fn test_categories_are_separate_tables() {
        let catalog = Catalog::default();
        // "cherry" is a drink flavor, topping and mix-in, but not a dessert flavor
        assert!(catalog.is_valid(Category::Flavor, "cherry"));
        assert!(catalog.is_valid(Category::Topping, "cherry"));
        assert!(catalog.is_valid(Category::MixIn, "cherry"));
        assert!(!catalog.is_valid(Category::DessertFlavor, "cherry"));
        assert!(!catalog.is_valid(Category::Base, "hotdog"));
    }

    #[test]
    fn test_unpriced_categories_have_no_price() {
        let catalog = Catalog::default();
        assert_eq!(catalog.price_of(Category::Base, "water"), None);
        assert_eq!(catalog.price_of(Category::Flavor, "lemon"), None);
        assert!(!Category::Base.is_priced());
        assert!(Category::Topping.is_priced());
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = Catalog::default();
        for category in Category::ALL {
            let names = catalog.names(category);
            assert!(!names.is_empty(), "{} is empty", category);
            for name in names {
                assert!(catalog.is_valid(category, name));
                assert_eq!(catalog.price_of(category, name).is_some(), category.is_priced());
            }
        }
    }

    #[test]
    fn test_free_entries_are_valid() {
        let catalog = Catalog::default();
        assert_eq!(catalog.price_of(Category::Topping, "ketchup"), Some(Money::zero()));
        assert!(catalog.is_valid(Category::MixIn, "whipped cream"));
    }

    #[test]
    fn test_builtin_constants() {
        let catalog = Catalog::default();
        assert_eq!(catalog.extra_option_surcharge().cents(), 15);
        assert_eq!(catalog.tax_rate().bps(), 725);
        assert_eq!(catalog.names(Category::Size), vec!["large", "medium", "mega", "small"]);
        assert_eq!(catalog.names(Category::Base).len(), 6);
    }

    #[test]
    fn test_menu_round_trip() {
        let catalog = Catalog::default();
        let rebuilt = Catalog::from_menu(catalog.to_menu()).unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_from_menu_normalizes_names() {
        let mut menu = Menu::default();
        menu.sizes.insert("  Kids ".to_string(), 100);
        let catalog = Catalog::from_menu(menu).unwrap();
        assert_eq!(catalog.price_of(Category::Size, "kids"), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_from_menu_rejects_duplicates_after_lowercasing() {
        let mut menu = Menu::default();
        menu.foods.insert("Hotdog".to_string(), 250);
        let err = Catalog::from_menu(menu).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "foods".to_string(),
                value: "hotdog".to_string(),
            }
        );

        let mut menu = Menu::default();
        menu.bases.push("WATER".to_string());
        assert!(matches!(
            Catalog::from_menu(menu),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_from_menu_rejects_bad_values() {
        let mut menu = Menu::default();
        menu.toppings.insert("gravy".to_string(), -10);
        assert!(matches!(
            Catalog::from_menu(menu),
            Err(ValidationError::OutOfRange { .. })
        ));

        let mut menu = Menu::default();
        menu.tax_rate_bps = 20000;
        assert!(Catalog::from_menu(menu).is_err());

        let mut menu = Menu::default();
        menu.flavors.push(String::new());
        assert!(matches!(
            Catalog::from_menu(menu),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_from_menu_rejects_prices_above_ceiling() {
        let mut menu = Menu::default();
        menu.sizes.insert("bucket".to_string(), i64::MAX);
        assert_eq!(
            Catalog::from_menu(menu),
            Err(ValidationError::OutOfRange {
                field: "sizes".to_string(),
                min: 0,
                max: crate::MAX_PRICE_CENTS,
            })
        );

        let mut menu = Menu::default();
        menu.extra_option_surcharge_cents = crate::MAX_PRICE_CENTS + 1;
        assert!(matches!(
            Catalog::from_menu(menu),
            Err(ValidationError::OutOfRange { .. })
        ));

        let mut menu = Menu::default();
        menu.mix_ins.insert("gold leaf".to_string(), crate::MAX_PRICE_CENTS);
        assert!(Catalog::from_menu(menu).is_ok());
    }

    #[test]
    fn test_menu_json_shape() {
        let json = serde_json::to_value(Menu::default()).unwrap();
        assert_eq!(json["sizes"]["medium"], 175);
        assert_eq!(json["mix_ins"]["t&t's"], 100);
        assert_eq!(json["tax_rate_bps"], 725);
    }
}
