//! Order repository
//!
//! Append-only: orders are created and their status mutated, never deleted.

use parking_lot::RwLock;

use crate::domain::order::{Order, OrderStatus};
use crate::{Result, StoreError};

#[derive(Default)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    pub fn append(&self, order: Order) -> Order {
        self.orders.write().push(order.clone());
        order
    }

    pub fn get(&self, id: &str) -> Result<Order> {
        self.orders
            .read()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("Order"))
    }

    pub fn list_for_user(&self, user_id: &str) -> Vec<Order> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound("Order"))?;
        order.set_status(status);
        Ok(order.clone())
    }

    pub fn count(&self) -> usize {
        self.orders.read().len()
    }
}
