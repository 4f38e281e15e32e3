//! Resource modules: each one owns its record type, checks, handlers and routes

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor};
pub use order::{Order, OrderDescriptor, OrderStatus};
