//! HTTP surface
//!
//! Routers per area, assembled here around shared state. Identity travels in
//! a `user-id` header resolved against the user store; admin routes sit
//! behind a gate middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};

use crate::domain::user::User;
use crate::store::{seed, CartStore, OrderStore, ProductStore, UserStore};
use crate::{Result, StoreError};

pub mod cart;
pub mod orders;
pub mod products;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductStore>,
    pub users: Arc<UserStore>,
    pub orders: Arc<OrderStore>,
    pub carts: Arc<CartStore>,
}

impl AppState {
    /// Product and user stores seeded with fixtures; orders and carts empty.
    pub fn seeded() -> Self {
        Self {
            products: Arc::new(ProductStore::with_products(seed::products())),
            users: Arc::new(UserStore::with_users(seed::users())),
            orders: Arc::new(OrderStore::default()),
            carts: Arc::new(CartStore::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .merge(products::admin_router())
        .merge(users::admin_router())
        .merge(orders::admin_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health))
        .merge(products::router())
        .merge(users::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(admin)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy", "service": "storefront" }))
}

/// Resolves the caller from the `user-id` header.
pub(crate) fn current_user(state: &AppState, headers: &HeaderMap) -> Result<User> {
    let id = headers
        .get("user-id")
        .and_then(|v| v.to_str().ok())
        .ok_or(StoreError::Unauthorized)?;
    state.users.find(id).map_err(|_| StoreError::Unauthorized)
}

async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let user = current_user(&state, request.headers())?;
    if !user.is_admin {
        return Err(StoreError::Forbidden);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::seeded())
    }

    async fn send(app: Router, req: HttpRequest<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_as(uri: &str, user_id: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(id) = user_id {
            builder = builder.header("user-id", id);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_as(method: &str, uri: &str, user_id: Option<&str>, body: serde_json::Value) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(id) = user_id {
            builder = builder.header("user-id", id);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn shipping_address() -> serde_json::Value {
        serde_json::json!({
            "fullName": "Nguyen Van An",
            "email": "an@example.com",
            "phone": "0901234567",
            "address": "123 Nguyen Hue",
            "province": "79",
            "district": "760",
            "ward": "26734"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_as("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_catalog_listing_and_lookup() {
        let app = app();
        let (status, body) = send(app.clone(), get_as("/api/products?limit=4", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"].as_array().unwrap().len(), 4);
        assert_eq!(body["total"], 6);
        assert_eq!(body["pages"], 2);

        let (status, body) = send(app.clone(), get_as("/api/products/P001", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ao thun nam basic");
        assert!(body.get("originalPrice").is_some());

        let (status, _) = send(app, get_as("/api/products/missing", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_gate() {
        let app = app();
        let (status, _) = send(app.clone(), get_as("/api/admin/stats", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(app.clone(), get_as("/api/admin/stats", Some("U002"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(app, get_as("/api/admin/stats", Some("U001"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalUsers"], 3);
        assert_eq!(body["totalProducts"], 6);
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        let app = app();
        let payload = serde_json::json!({
            "items": [
                { "productId": "P001", "size": "M", "quantity": 2,
                  "name": "Ao thun nam basic", "image": "/images/products/tshirt-1.jpg",
                  "price": 199000 },
                { "productId": "P002", "size": "30", "quantity": 1,
                  "name": "Quan jean nam slim fit", "image": "/images/products/jeans-1.jpg",
                  "price": 499000 }
            ],
            "shippingAddress": shipping_address(),
            "paymentMethod": "cod",
            "note": ""
        });
        let (status, body) = send(app.clone(), json_as("POST", "/api/orders", Some("U002"), payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["totalAmount"], 897_000);
        assert_eq!(body["status"], "pending");
        let order_id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(app.clone(), get_as("/api/orders", Some("U002"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        // Another shopper cannot read it; the admin can.
        let (status, _) = send(app.clone(), get_as(&format!("/api/orders/{order_id}"), Some("U003"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(app.clone(), get_as(&format!("/api/orders/{order_id}"), Some("U001"))).await;
        assert_eq!(status, StatusCode::OK);

        // Admin moves the status along.
        let (status, body) = send(
            app,
            json_as(
                "PUT",
                &format!("/api/orders/{order_id}/status"),
                Some("U001"),
                serde_json::json!({ "status": "shipped" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "shipped");
    }

    #[tokio::test]
    async fn test_checkout_without_address_is_rejected() {
        let payload = serde_json::json!({
            "items": [
                { "productId": "P001", "size": "M", "quantity": 1,
                  "name": "Ao thun nam basic", "image": "/x.jpg", "price": 199000 }
            ],
            "paymentMethod": "bank"
        });
        let (status, body) = send(app(), json_as("POST", "/api/orders", Some("U002"), payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("shipping"));
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let app = app();
        let add = serde_json::json!({ "productId": "P001", "size": "M", "quantity": 2 });
        let (status, body) = send(app.clone(), json_as("POST", "/api/cart", Some("U002"), add.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 398_000);
        assert_eq!(body["count"], 2);

        // Same line again merges.
        let (_, body) = send(app.clone(), json_as("POST", "/api/cart", Some("U002"), add)).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["count"], 4);

        // Oversized request bounces off the stock check.
        let too_many = serde_json::json!({ "productId": "P001", "size": "XL", "quantity": 99 });
        let (status, _) = send(app.clone(), json_as("POST", "/api/cart", Some("U002"), too_many)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(app, get_as("/api/cart", Some("U002"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 4);
    }

    #[tokio::test]
    async fn test_login() {
        let app = app();
        let ok = serde_json::json!({ "email": "an@example.com", "password": "password123" });
        let (status, body) = send(app.clone(), json_as("POST", "/api/users/login", None, ok)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "U002");
        assert!(body.get("password").is_none());

        let bad = serde_json::json!({ "email": "an@example.com", "password": "nope" });
        let (status, _) = send(app, json_as("POST", "/api/users/login", None, bad)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
