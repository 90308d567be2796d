//! Domain model: products, catalog queries, carts, orders, users.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use catalog::{CatalogPage, CatalogQuery, SortKey};
pub use order::{CheckoutRequest, Order, OrderStatus, PaymentMethod, ShippingAddress};
pub use product::{Product, ProductInput, SizeOption};
pub use user::{LoginRequest, RegisterRequest, User};
