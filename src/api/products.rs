//! Product and category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::api::AppState;
use crate::domain::catalog::{CatalogPage, CatalogQuery};
use crate::domain::product::{Product, ProductInput};
use crate::Result;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/categories", get(list_categories))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/products", post(create_product))
        .route(
            "/api/admin/products/:id",
            put(update_product).delete(delete_product),
        )
}

async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogPage> {
    Json(state.products.query(&query))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state.products.get(&id).map(Json)
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.products.categories())
}

async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.products.insert(input)?;
    tracing::info!(product = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>> {
    state.products.update(&id, input).map(Json)
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.products.remove(&id)?;
    tracing::info!(product = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
