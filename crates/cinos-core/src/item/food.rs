//! Food: a food type plus toppings priced from the topping table.

use crate::catalog::{Catalog, Category};
use crate::error::{OrderError, OrderResult};
use crate::money::Money;

use super::{AddOnSet, Configured, ItemKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoodKind;

impl ItemKind for FoodKind {
    const PRIMARY: Category = Category::Food;
    const ADD_ON: Category = Category::Topping;

    fn invalid_primary(value: &str) -> OrderError {
        OrderError::InvalidFoodType(value.to_string())
    }

    fn invalid_add_on(value: &str) -> OrderError {
        OrderError::InvalidTopping(value.to_string())
    }
}

/// A food order. `Food::default()` has no type yet and prices as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Food {
    core: Configured<FoodKind>,
}

impl Food {
    pub fn new(catalog: &Catalog, food_type: &str) -> OrderResult<Self> {
        let mut food = Food::default();
        food.set_type(catalog, food_type)?;
        Ok(food)
    }

    /// Changes the food type. An invalid type keeps the previous one.
    pub fn set_type(&mut self, catalog: &Catalog, food_type: &str) -> OrderResult<()> {
        self.core.set_primary(catalog, food_type)
    }

    /// Adds a topping. Returns `Ok(false)` if it is already on.
    pub fn add_topping(&mut self, catalog: &Catalog, topping: &str) -> OrderResult<bool> {
        self.core.add_add_on(catalog, topping)
    }

    pub fn food_type(&self) -> Option<&str> {
        self.core.primary()
    }

    pub fn toppings(&self) -> &AddOnSet {
        self.core.add_ons()
    }

    pub fn price(&self) -> Money {
        self.core.price()
    }
}
