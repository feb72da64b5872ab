//! # Cinos Order API
//!
//! HTTP front end over [`cinos_core`]: one live order, built up through
//! JSON requests and read back as a receipt with totals.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order API Structure                                  │
//! │                                                                         │
//! │  lib.rs (this file)                                                     │
//! │  ├── router()            ─── axum routes → handlers                     │
//! │  └── init_tracing()      ─── fmt subscriber + EnvFilter                 │
//! │                                                                         │
//! │  config.rs               ─── ServiceConfig (TOML + CINOS_* env)         │
//! │  error.rs                ─── ApiError { code, message } → 400 JSON      │
//! │  routes.rs               ─── handlers and request/response bodies       │
//! │  state.rs                ─── AppState { catalog, OrderState }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ApiError, ErrorCode};
pub use state::{AppState, OrderState};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,cinos=debug";

/// Builds the service router.
///
/// ## Routes
/// | Method | Path                | Handler       |
/// |--------|---------------------|---------------|
/// | GET    | `/`                 | `home`        |
/// | GET    | `/health`           | `health`      |
/// | GET    | `/menu`             | `get_menu`    |
/// | GET    | `/order`            | `get_order`   |
/// | POST   | `/order`            | `add_drink`   |
/// | POST   | `/order/drink`      | `add_drink`   |
/// | POST   | `/order/food`       | `add_food`    |
/// | POST   | `/order/ice-storm`  | `add_dessert` |
/// | POST   | `/order/dessert`    | `add_dessert` |
/// | DELETE | `/order/{index}`    | `remove_item` |
/// | DELETE | `/order`            | `clear_order` |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/menu", get(routes::get_menu))
        .route(
            "/order",
            get(routes::get_order)
                .post(routes::add_drink)
                .delete(routes::clear_order),
        )
        .route("/order/drink", post(routes::add_drink))
        .route("/order/food", post(routes::add_food))
        .route("/order/ice-storm", post(routes::add_dessert))
        .route("/order/dessert", post(routes::add_dessert))
        .route("/order/{index}", delete(routes::remove_item))
        .with_state(state)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cinos=trace` - Show trace for cinos crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
