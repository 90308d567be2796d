//! Cart repository
//!
//! Carts are keyed by user id, one ledger per user. The fixed-storage-key
//! scheme of earlier revisions collided across users on a shared browser.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::cart::{Cart, CartItem};

#[derive(Default)]
pub struct CartStore {
    carts: RwLock<HashMap<String, Cart>>,
}

impl CartStore {
    /// Snapshot of a user's cart; users without one get an empty ledger.
    pub fn cart(&self, user_id: &str) -> Cart {
        self.carts.read().get(user_id).cloned().unwrap_or_default()
    }

    pub fn add_item(&self, user_id: &str, item: CartItem) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(user_id.to_string()).or_default();
        cart.add_item(item);
        cart.clone()
    }

    pub fn set_quantity(&self, user_id: &str, product_id: &str, size: &str, quantity: u32) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(user_id.to_string()).or_default();
        cart.set_quantity(product_id, size, quantity);
        cart.clone()
    }

    pub fn remove_item(&self, user_id: &str, product_id: &str, size: &str) -> Cart {
        let mut carts = self.carts.write();
        let cart = carts.entry(user_id.to_string()).or_default();
        cart.remove_item(product_id, size);
        cart.clone()
    }

    pub fn clear(&self, user_id: &str) {
        self.carts.write().remove(user_id);
    }
}
