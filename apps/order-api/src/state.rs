//! # Service State
//!
//! The catalog (read-only after startup) and the single live order.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  HTTP Request             Handler                 Order State Change    │
//! │  ────────────             ───────                 ──────────────────    │
//! │                                                                         │
//! │  POST /order ────────────► add_drink() ─────────► items.push(drink)     │
//! │  POST /order/food ───────► add_food() ──────────► items.push(food)      │
//! │  POST /order/ice-storm ──► add_dessert() ───────► items.push(dessert)   │
//! │  DELETE /order/{i} ──────► remove_item() ───────► items.remove(i)       │
//! │  DELETE /order ──────────► clear_order() ───────► items.clear()         │
//! │  GET /order ─────────────► get_order() ─────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Items are built and validated before the lock is taken.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cinos_core::{Catalog, Order};

/// Shared handle to the live order.
///
/// `Arc<Mutex<Order>>`: every mutation is short and the order is plain data,
/// so a poisoned lock is taken over rather than propagated.
#[derive(Debug, Clone)]
pub struct OrderState {
    order: Arc<Mutex<Order>>,
}

impl OrderState {
    pub fn new(order: Order) -> Self {
        OrderState {
            order: Arc::new(Mutex::new(order)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Order> {
        self.order.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_order(|order| order.totals());
    /// ```
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Order) -> R,
    {
        let order = self.lock();
        f(&order)
    }

    /// Executes a function with write access to the order.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Order) -> R,
    {
        let mut order = self.lock();
        f(&mut order)
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

/// Application state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub order: OrderState,
}

impl AppState {
    /// Creates state with an empty order taxed at the catalog's rate.
    pub fn new(catalog: Catalog) -> Self {
        let order = Order::for_catalog(&catalog);
        AppState {
            catalog: Arc::new(catalog),
            order: OrderState::new(order),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinos_core::Drink;

    #[test]
    fn test_clones_share_one_order() {
        let state = AppState::default();
        let other = state.clone();

        let drink = Drink::new(&state.catalog, "small").unwrap();
        state.order.with_order_mut(|order| order.add(drink));

        assert_eq!(other.order.with_order(|order| order.len()), 1);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let state = OrderState::default();
        let poisoner = state.clone();

        let result = std::thread::spawn(move || {
            poisoner.with_order_mut(|_| panic!("handler panicked"));
        })
        .join();
        assert!(result.is_err());

        assert!(state.with_order(|order| order.is_empty()));
    }

    #[test]
    fn test_order_uses_catalog_tax_rate() {
        let state = AppState::default();
        let bps = state.order.with_order(|order| order.tax_rate().bps());
        assert_eq!(bps, 725);
    }
}
