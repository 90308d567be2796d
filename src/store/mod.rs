//! In-memory repositories
//!
//! One store per collection, each serializing writes behind its own lock.
//! Stores are injected into handlers through shared state; nothing here is a
//! process global, and everything resets on restart.

pub mod carts;
pub mod orders;
pub mod products;
pub mod seed;
pub mod users;

pub use carts::CartStore;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use users::UserStore;
