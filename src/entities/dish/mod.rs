//! Dish entity module

pub mod checks;
pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::DishDescriptor;
pub use handlers::*;
pub use model::{Dish, DishDraft};
