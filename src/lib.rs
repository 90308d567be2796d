//! Storefront Service
//!
//! Backend for a small storefront: product catalog, shopping cart,
//! checkout, order history, and an admin dashboard.
//!
//! ## Features
//! - Catalog browsing with filtering, sorting, and pagination
//! - Per-user cart ledger with snapshot pricing
//! - Order creation and status lifecycle
//! - Revenue aggregation and dashboard statistics

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub mod api;
pub mod domain;
pub mod reporting;
pub mod store;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Admin access required")]
    Forbidden,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl StoreError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Unexpected failures surface as a generic message; the detail stays
        // in the server log.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
