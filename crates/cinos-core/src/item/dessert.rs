//! Frozen desserts (Ice Storms): a flavor plus mix-ins.

use crate::catalog::{Catalog, Category};
use crate::error::{OrderError, OrderResult};
use crate::money::Money;

use super::{AddOnSet, Configured, ItemKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DessertKind;

impl ItemKind for DessertKind {
    const PRIMARY: Category = Category::DessertFlavor;
    const ADD_ON: Category = Category::MixIn;

    fn invalid_primary(value: &str) -> OrderError {
        OrderError::InvalidFlavor(value.to_string())
    }

    fn invalid_add_on(value: &str) -> OrderError {
        OrderError::InvalidMixIn(value.to_string())
    }
}

/// A frozen dessert. `FrozenDessert::default()` has no flavor yet and prices
/// as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrozenDessert {
    core: Configured<DessertKind>,
}

impl FrozenDessert {
    pub fn new(catalog: &Catalog, flavor: &str) -> OrderResult<Self> {
        let mut dessert = FrozenDessert::default();
        dessert.set_flavor(catalog, flavor)?;
        Ok(dessert)
    }

    pub fn set_flavor(&mut self, catalog: &Catalog, flavor: &str) -> OrderResult<()> {
        self.core.set_primary(catalog, flavor)
    }

    pub fn add_mix_in(&mut self, catalog: &Catalog, mix_in: &str) -> OrderResult<bool> {
        self.core.add_add_on(catalog, mix_in)
    }

    pub fn flavor(&self) -> Option<&str> {
        self.core.primary()
    }

    pub fn mix_ins(&self) -> &AddOnSet {
        self.core.add_ons()
    }

    pub fn price(&self) -> Money {
        self.core.price()
    }
}
