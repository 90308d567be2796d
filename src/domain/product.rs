//! Product catalog data model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A sellable product. Prices are integer minor currency units.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub category: String,
    pub images: Vec<String>,
    pub sizes: Vec<SizeOption>,
    pub rating: f64,
    pub review_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: String,
    pub stock: u32,
}

impl Product {
    pub fn new(input: ProductInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            original_price: input.original_price,
            category: input.category,
            images: input.images,
            sizes: input.sizes,
            rating: 0.0,
            review_count: 0,
        }
    }

    pub fn size(&self, size: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.size == size)
    }

    /// Admin edit: replaces everything except id, rating, and review count.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.original_price = input.original_price;
        self.category = input.category;
        self.images = input.images;
        self.sizes = input.sizes;
    }

    pub fn main_image(&self) -> String {
        self.images
            .first()
            .cloned()
            .unwrap_or_else(|| "/images/placeholder.jpg".to_string())
    }
}

/// Payload for admin product create/update.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,
    pub original_price: Option<i64>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            name: "Basic tee".into(),
            description: "Cotton tee".into(),
            price: 199_000,
            original_price: Some(299_000),
            category: "tshirt".into(),
            images: vec!["/images/tee-1.jpg".into()],
            sizes: vec![SizeOption { size: "M".into(), stock: 10 }],
        }
    }

    #[test]
    fn test_create_and_lookup_size() {
        let p = Product::new(input());
        assert_eq!(p.rating, 0.0);
        assert!(p.size("M").is_some());
        assert!(p.size("XXL").is_none());
    }

    #[test]
    fn test_apply_keeps_rating() {
        let mut p = Product::new(input());
        p.rating = 4.5;
        p.review_count = 128;
        let mut edit = input();
        edit.price = 149_000;
        p.apply(edit);
        assert_eq!(p.price, 149_000);
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.review_count, 128);
    }

    #[test]
    fn test_main_image_fallback() {
        let mut p = Product::new(input());
        p.images.clear();
        assert_eq!(p.main_image(), "/images/placeholder.jpg");
    }
}
