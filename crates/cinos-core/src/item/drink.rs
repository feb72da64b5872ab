//! Drinks: a size, an optional base and any number of flavor shots.

use crate::catalog::{Catalog, Category};
use crate::error::{OrderError, OrderResult};
use crate::money::Money;
use crate::validation::normalize_name;

use super::{AddOnSet, Configured, ItemKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrinkKind;

impl ItemKind for DrinkKind {
    const PRIMARY: Category = Category::Size;
    const ADD_ON: Category = Category::Flavor;

    fn invalid_primary(value: &str) -> OrderError {
        OrderError::InvalidSize(value.to_string())
    }

    fn invalid_add_on(value: &str) -> OrderError {
        OrderError::InvalidFlavor(value.to_string())
    }

    /// Flavors have no table price; each one costs the catalog's surcharge.
    fn add_on_price(catalog: &Catalog, name: &str) -> Option<Money> {
        catalog
            .is_valid(Category::Flavor, name)
            .then(|| catalog.extra_option_surcharge())
    }
}

/// A drink.
///
/// `Drink::default()` has no size yet and prices as zero until a valid size
/// is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drink {
    core: Configured<DrinkKind>,
    base: Option<String>,
}

impl Drink {
    /// Creates a drink of the given size.
    ///
    /// ```rust
    /// use cinos_core::{Catalog, Drink, OrderError};
    ///
    /// let catalog = Catalog::default();
    /// assert_eq!(Drink::new(&catalog, "Mega").unwrap().price().cents(), 215);
    /// assert_eq!(
    ///     Drink::new(&catalog, "venti"),
    ///     Err(OrderError::InvalidSize("venti".to_string()))
    /// );
    /// ```
    pub fn new(catalog: &Catalog, size: &str) -> OrderResult<Self> {
        let mut drink = Drink::default();
        drink.set_size(catalog, size)?;
        Ok(drink)
    }

    /// Changes the size. An invalid size keeps the previous one.
    pub fn set_size(&mut self, catalog: &Catalog, size: &str) -> OrderResult<()> {
        self.core.set_primary(catalog, size)
    }

    /// Sets the base. An invalid base keeps the previous one (or none).
    pub fn set_base(&mut self, catalog: &Catalog, base: &str) -> OrderResult<()> {
        if !catalog.is_valid(Category::Base, base) {
            return Err(OrderError::InvalidBase(base.to_string()));
        }
        self.base = Some(normalize_name(base));
        Ok(())
    }

    /// Adds a flavor shot. Returns `Ok(false)` if the flavor is already in.
    pub fn add_flavor(&mut self, catalog: &Catalog, flavor: &str) -> OrderResult<bool> {
        self.core.add_add_on(catalog, flavor)
    }

    pub fn size(&self) -> Option<&str> {
        self.core.primary()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn flavors(&self) -> &AddOnSet {
        self.core.add_ons()
    }

    /// Size price plus the surcharge for every flavor, or zero without a size.
    pub fn price(&self) -> Money {
        self.core.price()
    }
}
