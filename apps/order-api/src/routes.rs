//! # Order Routes
//!
//! HTTP handlers for building up the order.
//!
//! ## Submission Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Submission Lifecycle                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  JSON    │────►│ Request  │────►│  Built   │────►│ Appended │       │
//! │  │  body    │     │  DTO     │     │  item    │     │ to order │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       │                │                │                              │
//! │  MALFORMED_REQUEST  MISSING_         INVALID_*                         │
//! │                     REQUIRED_FIELD                                     │
//! │                                                                         │
//! │  Any failure before "Appended" leaves the order exactly as it was.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use cinos_core::{
    Catalog, Drink, Food, FrozenDessert, LineItem, Menu, Order, OrderError, OrderResult,
    ReceiptLine, Totals,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /order`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddDrinkRequest {
    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub base: Option<String>,

    #[serde(default)]
    pub flavors: Vec<String>,
}

impl AddDrinkRequest {
    pub fn build(&self, catalog: &Catalog) -> OrderResult<Drink> {
        let size = required(self.size.as_deref(), "size")?;
        let mut drink = Drink::new(catalog, size)?;

        if let Some(base) = present(self.base.as_deref()) {
            drink.set_base(catalog, base)?;
        }
        for flavor in &self.flavors {
            drink.add_flavor(catalog, flavor)?;
        }

        Ok(drink)
    }
}

/// Body of `POST /order/food`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddFoodRequest {
    #[serde(default, alias = "foodType")]
    pub food_type: Option<String>,

    #[serde(default)]
    pub toppings: Vec<String>,
}

impl AddFoodRequest {
    pub fn build(&self, catalog: &Catalog) -> OrderResult<Food> {
        let food_type = required(self.food_type.as_deref(), "food_type")?;
        let mut food = Food::new(catalog, food_type)?;

        for topping in &self.toppings {
            food.add_topping(catalog, topping)?;
        }

        Ok(food)
    }
}

/// Body of `POST /order/ice-storm`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddDessertRequest {
    #[serde(default)]
    pub flavor: Option<String>,

    #[serde(default, alias = "mixIns")]
    pub mix_ins: Vec<String>,
}

impl AddDessertRequest {
    pub fn build(&self, catalog: &Catalog) -> OrderResult<FrozenDessert> {
        let flavor = required(self.flavor.as_deref(), "flavor")?;
        let mut dessert = FrozenDessert::new(catalog, flavor)?;

        for mix_in in &self.mix_ins {
            dessert.add_mix_in(catalog, mix_in)?;
        }

        Ok(dessert)
    }
}

/// Blank strings count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> OrderResult<&'a str> {
    present(value).ok_or(OrderError::MissingRequiredField { field })
}

// =============================================================================
// Responses
// =============================================================================

/// Full view of the order returned by `GET /order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub items: Vec<ReceiptLine>,
    pub totals: Totals,
    pub num_items: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        OrderResponse {
            items: order.receipt(),
            totals: order.totals(),
            num_items: order.len(),
            created_at: order.created_at(),
        }
    }
}

/// Acknowledgement for every mutating route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    pub num_items: usize,
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Use /order to view the order, POST /order, /order/food or /order/ice-storm to add to it"
    }))
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn get_menu(State(state): State<AppState>) -> Json<Menu> {
    debug!("get_menu");
    Json(state.catalog.to_menu())
}

pub async fn get_order(State(state): State<AppState>) -> Json<OrderResponse> {
    debug!("get_order");
    Json(state.order.with_order(|order| OrderResponse::from(order)))
}

/// Appends an already validated item and acknowledges it.
fn append(
    state: &AppState,
    item: LineItem,
    label: &str,
) -> (StatusCode, Json<MutationResponse>) {
    let kind = item.kind_name();
    let price = item.price();

    let (index, num_items) = state.order.with_order_mut(|order| {
        let index = order.add(item);
        (index, order.len())
    });

    info!(kind, index, price = %price, num_items, "Item added to order");

    (
        StatusCode::CREATED,
        Json(MutationResponse {
            message: format!("{} added to order", label),
            index: Some(index),
            num_items,
        }),
    )
}

pub async fn add_drink(
    State(state): State<AppState>,
    payload: Result<Json<AddDrinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let Json(request) = payload?;
    debug!(?request, "add_drink");

    let drink = request.build(&state.catalog)?;
    Ok(append(&state, drink.into(), "Drink"))
}

pub async fn add_food(
    State(state): State<AppState>,
    payload: Result<Json<AddFoodRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let Json(request) = payload?;
    debug!(?request, "add_food");

    let food = request.build(&state.catalog)?;
    Ok(append(&state, food.into(), "Food"))
}

pub async fn add_dessert(
    State(state): State<AppState>,
    payload: Result<Json<AddDessertRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let Json(request) = payload?;
    debug!(?request, "add_dessert");

    let dessert = request.build(&state.catalog)?;
    Ok(append(&state, dessert.into(), "Ice Storm"))
}

pub async fn remove_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Path(index) = path?;
    debug!(index, "remove_item");

    let (position, removed, num_items) = state.order.with_order_mut(|order| {
        let position = usize::try_from(index).map_err(|_| OrderError::InvalidIndex {
            index,
            len: order.len(),
        })?;
        let removed = order.remove_at(position)?;
        Ok::<_, OrderError>((position, removed, order.len()))
    })?;

    info!(index, kind = removed.kind_name(), num_items, "Item removed from order");

    Ok(Json(MutationResponse {
        message: format!("Item {} removed from order", position),
        index: Some(position),
        num_items,
    }))
}

pub async fn clear_order(State(state): State<AppState>) -> Json<MutationResponse> {
    state.order.with_order_mut(Order::clear);
    info!("Order cleared");

    Json(MutationResponse {
        message: "Order cleared".to_string(),
        index: None,
        num_items: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn drink_request(size: &str, base: &str, flavors: &[&str]) -> AddDrinkRequest {
        AddDrinkRequest {
            size: Some(size.to_string()),
            base: Some(base.to_string()),
            flavors: flavors.iter().map(|f| f.to_string()).collect(),
        }
    }

    async fn order_view(state: &AppState) -> OrderResponse {
        let Json(view) = get_order(State(state.clone())).await;
        view
    }

    #[tokio::test]
    async fn test_add_drink() {
        let state = AppState::default();
        let request = drink_request("medium", "sbrite", &["lemon", "lime"]);

        let (status, Json(body)) = add_drink(State(state.clone()), Ok(Json(request)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.index, Some(0));
        assert_eq!(body.num_items, 1);

        let view = order_view(&state).await;
        assert_eq!(view.totals.subtotal.cents(), 205);
        assert_eq!(view.totals.tax.cents(), 15);
        assert_eq!(view.totals.total.cents(), 220);
    }

    #[tokio::test]
    async fn test_add_food_and_dessert() {
        let state = AppState::default();

        let food = AddFoodRequest {
            food_type: Some("hotdog".to_string()),
            toppings: vec!["chili".to_string(), "bacon bits".to_string()],
        };
        let (status, _) = add_food(State(state.clone()), Ok(Json(food))).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let dessert = AddDessertRequest {
            flavor: Some("chocolate".to_string()),
            mix_ins: vec!["storios".to_string(), "t&t's".to_string()],
        };
        let (_, Json(body)) = add_dessert(State(state.clone()), Ok(Json(dessert)))
            .await
            .unwrap();
        assert_eq!(body.index, Some(1));

        let view = order_view(&state).await;
        assert_eq!(view.num_items, 2);
        assert_eq!(view.items[0].price().cents(), 320);
        assert_eq!(view.items[1].price().cents(), 500);
        assert_eq!(view.totals.subtotal.cents(), 820);
    }

    #[tokio::test]
    async fn test_invalid_add_on_adds_nothing() {
        let state = AppState::default();
        let request = drink_request("large", "water", &["lemon", "grape"]);

        let err = add_drink(State(state.clone()), Ok(Json(request)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFlavor);
        assert_eq!(err.message, "Invalid flavor: 'grape'");
        assert_eq!(order_view(&state).await.num_items, 0);
    }

    #[tokio::test]
    async fn test_error_codes() {
        let state = AppState::default();

        let err = add_drink(State(state.clone()), Ok(Json(drink_request("huge", "water", &[]))))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSize);

        let err = add_drink(State(state.clone()), Ok(Json(drink_request("small", "juice", &[]))))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBase);

        let food = AddFoodRequest {
            food_type: Some("burrito".to_string()),
            toppings: vec![],
        };
        let err = add_food(State(state.clone()), Ok(Json(food))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFoodType);

        let food = AddFoodRequest {
            food_type: Some("hotdog".to_string()),
            toppings: vec!["gravy".to_string()],
        };
        let err = add_food(State(state.clone()), Ok(Json(food))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTopping);

        let dessert = AddDessertRequest {
            flavor: Some("vanilla bean".to_string()),
            mix_ins: vec!["sprinkles".to_string()],
        };
        let err = add_dessert(State(state.clone()), Ok(Json(dessert)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMixIn);

        assert_eq!(order_view(&state).await.num_items, 0);
    }

    #[tokio::test]
    async fn test_missing_primary() {
        let state = AppState::default();

        let err = add_drink(State(state.clone()), Ok(Json(AddDrinkRequest::default())))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.message, "size is required");

        let food = AddFoodRequest {
            food_type: Some("  ".to_string()),
            toppings: vec![],
        };
        let err = add_food(State(state.clone()), Ok(Json(food))).await.unwrap_err();
        assert_eq!(err.message, "food_type is required");

        let err = add_dessert(State(state.clone()), Ok(Json(AddDessertRequest::default())))
            .await
            .unwrap_err();
        assert_eq!(err.message, "flavor is required");
    }

    #[test]
    fn test_request_aliases() {
        let food: AddFoodRequest =
            serde_json::from_str(r#"{"foodType": "corndog", "toppings": ["ketchup"]}"#).unwrap();
        assert_eq!(food.food_type.as_deref(), Some("corndog"));

        let dessert: AddDessertRequest =
            serde_json::from_str(r#"{"flavor": "banana", "mixIns": ["pecans"]}"#).unwrap();
        assert_eq!(dessert.mix_ins, vec!["pecans"]);

        let drink: AddDrinkRequest = serde_json::from_str(r#"{"size": "mega"}"#).unwrap();
        assert!(drink.base.is_none());
        assert!(drink.flavors.is_empty());
    }

    #[tokio::test]
    async fn test_remove_item() {
        let state = AppState::default();
        for (expected, size) in ["small", "medium", "large"].into_iter().enumerate() {
            let (_, Json(body)) =
                add_drink(State(state.clone()), Ok(Json(drink_request(size, "water", &[]))))
                    .await
                    .unwrap();
            assert_eq!(body.index, Some(expected));
        }

        let Json(body) = remove_item(State(state.clone()), Ok(Path(1))).await.unwrap();
        assert_eq!(body.num_items, 2);

        let view = order_view(&state).await;
        assert_eq!(view.items[0].price().cents(), 150);
        assert_eq!(view.items[1].price().cents(), 205);
        assert_eq!(view.items[1].index(), 1);
    }

    #[tokio::test]
    async fn test_remove_invalid_index() {
        let state = AppState::default();

        let err = remove_item(State(state.clone()), Ok(Path(0))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidIndex);

        let err = remove_item(State(state.clone()), Ok(Path(-1))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidIndex);
        assert_eq!(err.message, "Invalid index: -1 (order has 0 items)");
    }

    #[tokio::test]
    async fn test_clear_order() {
        let state = AppState::default();
        let (status, _) =
            add_drink(State(state.clone()), Ok(Json(drink_request("small", "water", &[]))))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(body) = clear_order(State(state.clone())).await;
        assert_eq!(body.num_items, 0);
        assert!(body.index.is_none());
        assert_eq!(order_view(&state).await.totals, Totals::default());
    }

    #[tokio::test]
    async fn test_menu_reflects_catalog() {
        let state = AppState::default();
        let Json(menu) = get_menu(State(state)).await;
        assert_eq!(menu.sizes.get("mega"), Some(&215));
        assert_eq!(menu.tax_rate_bps, 725);
    }

    #[tokio::test]
    async fn test_order_response_json_shape() {
        let state = AppState::default();
        let (_, Json(body)) =
            add_drink(State(state.clone()), Ok(Json(drink_request("small", "water", &["mint"]))))
                .await
                .unwrap();
        assert_eq!(body.num_items, 1);

        let json = serde_json::to_value(order_view(&state).await).unwrap();
        assert_eq!(json["num_items"], 1);
        assert_eq!(json["items"][0]["type"], "drink");
        assert_eq!(json["items"][0]["price_cents"], 165);
        assert_eq!(json["totals"]["subtotal_cents"], 165);
        assert!(json["created_at"].is_string());
    }
}
