//! User endpoints: login, register, admin listing

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::api::AppState;
use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::Result;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
}

pub fn admin_router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>> {
    let user = state.users.authenticate(&req.email, &req.password)?;
    tracing::info!(user = %user.id, "login");
    Ok(Json(user))
}

async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.users.register(req)?;
    tracing::info!(user = %user.id, "registered");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list())
}
