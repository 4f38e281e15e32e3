//! Order entity module

pub mod checks;
pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderDraft, OrderStatus};
