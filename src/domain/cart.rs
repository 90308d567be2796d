//! Cart ledger
//!
//! Lines are snapshots: name, image, and price are captured when the item is
//! added and never re-synced with later catalog edits.

use serde::{Deserialize, Serialize};

/// One cart line, keyed by (product_id, size).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub size: String,
    pub quantity: u32,
    pub name: String,
    pub image: String,
    pub price: i64,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Merges on (product_id, size): an existing line gains the new quantity,
    /// anything else appends a fresh snapshot line.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id && i.size == item.size)
        {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    pub fn remove_item(&mut self, product_id: &str, size: &str) {
        self.items
            .retain(|i| !(i.product_id == product_id && i.size == size));
    }

    /// Quantities below 1 leave the cart untouched.
    pub fn set_quantity(&mut self, product_id: &str, size: &str, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id && i.size == size)
        {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
