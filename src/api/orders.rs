//! Order endpoints: checkout, history, status, revenue, dashboard stats

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::{current_user, AppState};
use crate::domain::order::{CheckoutRequest, Order, OrderStatus};
use crate::reporting::{self, DashboardStats, Period, RevenueBucket};
use crate::{Result, StoreError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/:id", get(get_order))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/orders/:id/status", put(update_status))
        .route("/api/orders/revenue/:period", get(revenue))
        .route("/api/admin/stats", get(stats))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOrdersQuery {
    user_id: Option<String>,
}

async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>> {
    let user = current_user(&state, &headers)?;
    let orders = match query.user_id {
        Some(target) if target == user.id || user.is_admin => state.orders.list_for_user(&target),
        Some(_) => return Err(StoreError::Forbidden),
        None if user.is_admin => state.orders.list_all(),
        None => state.orders.list_for_user(&user.id),
    };
    Ok(Json(orders))
}

async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let user = current_user(&state, &headers)?;
    let order = state
        .orders
        .append(Order::from_checkout(user.id.clone(), req)?);
    // Checkout consumes the server-held cart.
    state.carts.clear(&user.id);
    tracing::info!(order = %order.id, total = order.total_amount, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let user = current_user(&state, &headers)?;
    let order = state.orders.get(&id)?;
    // Shoppers only see their own orders.
    if !user.is_admin && order.user_id != user.id {
        return Err(StoreError::NotFound("Order"));
    }
    Ok(Json(order))
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    status: OrderStatus,
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let order = state.orders.update_status(&id, req.status)?;
    tracing::info!(order = %order.id, status = ?order.status, "order status updated");
    Ok(Json(order))
}

async fn revenue(
    State(state): State<AppState>,
    Path(period): Path<Period>,
) -> Json<Vec<RevenueBucket>> {
    Json(reporting::revenue_buckets(
        &state.orders.list_all(),
        period,
        Utc::now(),
    ))
}

async fn stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(reporting::dashboard_stats(
        state.users.count(),
        state.products.count(),
        &state.orders.list_all(),
        Utc::now(),
    ))
}
