//! Order model and checkout

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::cart::CartItem;
use crate::StoreError;

/// Canonical order lifecycle. One legacy call path used "completed" for the
/// final state; that spelling is accepted on input and mapped to `Delivered`,
/// never emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    #[serde(alias = "completed")]
    Delivered,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Bank,
    Momo,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Street address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Province is required"))]
    pub province: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    #[validate(length(min = 1, message = "Ward is required"))]
    pub ward: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total_amount: i64,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[serde(default)]
    pub note: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Checkout payload: the cart snapshot plus shipping and payment details.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[validate]
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub note: String,
}

impl Order {
    /// Builds a pending order from a checkout. The total is recomputed here
    /// from the submitted lines; a client-sent total is never trusted.
    pub fn from_checkout(user_id: impl Into<String>, req: CheckoutRequest) -> crate::Result<Self> {
        req.validate()?;
        if req.items.is_empty() {
            return Err(StoreError::Validation(
                "Order must contain at least one item".into(),
            ));
        }
        let shipping_address = req
            .shipping_address
            .ok_or_else(|| StoreError::Validation("Missing shipping address".into()))?;
        let total_amount = req.items.iter().map(CartItem::line_total).sum();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            items: req.items,
            total_amount,
            shipping_address,
            payment_method: req.payment_method,
            status: OrderStatus::Pending,
            note: req.note,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Overwrites the status unconditionally; no transition table is
    /// enforced.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Some(Utc::now());
    }
}
