//! Boot-time fixtures
//!
//! The product and user stores start from these collections; the order store
//! starts empty. Everything resets on restart.

use crate::domain::product::{Product, SizeOption};
use crate::domain::user::User;

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    original_price: i64,
    category: &str,
    sizes: &[(&str, u32)],
    rating: f64,
    review_count: u32,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        original_price: Some(original_price),
        category: category.into(),
        images: vec![
            format!("/images/products/{category}-1.jpg"),
            format!("/images/products/{category}-2.jpg"),
        ],
        sizes: sizes
            .iter()
            .map(|(size, stock)| SizeOption {
                size: (*size).into(),
                stock: *stock,
            })
            .collect(),
        rating,
        review_count,
    }
}

pub fn products() -> Vec<Product> {
    let clothing_sizes: &[(&str, u32)] = &[("S", 10), ("M", 15), ("L", 20), ("XL", 5)];
    let waist_sizes: &[(&str, u32)] = &[("28", 8), ("29", 12), ("30", 15), ("31", 10)];

    vec![
        product(
            "P001",
            "Ao thun nam basic",
            "Ao thun nam basic chat lieu cotton 100%",
            199_000,
            299_000,
            "tshirt",
            clothing_sizes,
            4.5,
            128,
        ),
        product(
            "P002",
            "Quan jean nam slim fit",
            "Quan jean nam slim fit om dang thoi trang",
            499_000,
            699_000,
            "jeans",
            waist_sizes,
            4.8,
            256,
        ),
        product(
            "P003",
            "Ao so mi nam cong so",
            "Ao so mi nam cong so phong cach hien dai",
            399_000,
            599_000,
            "shirt",
            clothing_sizes,
            4.6,
            189,
        ),
        product(
            "P004",
            "Quan short nam the thao",
            "Quan short nam the thao thoang mat",
            299_000,
            399_000,
            "shorts",
            clothing_sizes,
            4.3,
            94,
        ),
        product(
            "P005",
            "Ao khoac bomber",
            "Ao khoac bomber phong cach duong pho",
            599_000,
            799_000,
            "jacket",
            clothing_sizes,
            4.7,
            167,
        ),
        product(
            "P006",
            "Ao polo nam",
            "Ao polo nam van vai ca sau cao cap",
            259_000,
            359_000,
            "tshirt",
            clothing_sizes,
            4.4,
            73,
        ),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "U001".into(),
            name: "Admin".into(),
            email: "admin@storefront.dev".into(),
            password: "admin123".into(),
            is_admin: true,
        },
        User {
            id: "U002".into(),
            name: "Nguyen Van An".into(),
            email: "an@example.com".into(),
            password: "password123".into(),
            is_admin: false,
        },
        User {
            id: "U003".into(),
            name: "Tran Thi Binh".into(),
            email: "binh@example.com".into(),
            password: "password123".into(),
            is_admin: false,
        },
    ]
}
