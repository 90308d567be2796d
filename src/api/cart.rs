//! Cart endpoints
//!
//! The server holds one ledger per user id. Adds validate the product, the
//! size, and available stock; nothing is reserved.

use axum::{
    extract::State,
    http::HeaderMap,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::{current_user, AppState};
use crate::domain::cart::{Cart, CartItem};
use crate::{Result, StoreError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/cart",
            get(get_cart)
                .post(add_item)
                .put(set_quantity)
                .delete(remove_item),
        )
        .route("/api/cart/clear", delete(clear_cart))
}

/// Ledger plus its derived totals.
#[derive(Debug, Serialize)]
struct CartView {
    items: Vec<CartItem>,
    total: i64,
    count: u32,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total(),
            count: cart.count(),
            items: cart.items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItemRequest {
    product_id: String,
    size: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetQuantityRequest {
    product_id: String,
    size: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveItemRequest {
    product_id: String,
    size: String,
}

async fn get_cart(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<CartView>> {
    let user = current_user(&state, &headers)?;
    Ok(Json(state.carts.cart(&user.id).into()))
}

async fn add_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartView>> {
    let user = current_user(&state, &headers)?;
    if req.quantity < 1 {
        return Err(StoreError::Validation("Quantity must be at least 1".into()));
    }
    let product = state.products.get(&req.product_id)?;
    let size = product
        .size(&req.size)
        .ok_or_else(|| StoreError::Validation("Invalid size".into()))?;
    if size.stock < req.quantity {
        return Err(StoreError::Validation(
            "Not enough stock for this size".into(),
        ));
    }

    // Snapshot the product fields at add time.
    let cart = state.carts.add_item(
        &user.id,
        CartItem {
            product_id: product.id.clone(),
            size: req.size,
            quantity: req.quantity,
            name: product.name.clone(),
            image: product.main_image(),
            price: product.price,
        },
    );
    Ok(Json(cart.into()))
}

async fn set_quantity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SetQuantityRequest>,
) -> Result<Json<CartView>> {
    let user = current_user(&state, &headers)?;
    let cart = state
        .carts
        .set_quantity(&user.id, &req.product_id, &req.size, req.quantity);
    Ok(Json(cart.into()))
}

async fn remove_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RemoveItemRequest>,
) -> Result<Json<CartView>> {
    let user = current_user(&state, &headers)?;
    let cart = state.carts.remove_item(&user.id, &req.product_id, &req.size);
    Ok(Json(cart.into()))
}

async fn clear_cart(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<CartView>> {
    let user = current_user(&state, &headers)?;
    state.carts.clear(&user.id);
    Ok(Json(Cart::default().into()))
}
