//! # grubdash
//!
//! A validated CRUD service for two resources held in memory: the dishes a
//! restaurant offers and the delivery orders placed for them.
//!
//! Every route runs an ordered chain of checks before its effect. The first
//! failing check stops the chain and its error (404 or 400, with a message
//! naming the offending field, index or id) is returned to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grubdash::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! ServerBuilder::new()
//!     .register(DishDescriptor::new(InMemoryStore::<Dish>::new()))
//!     .register(OrderDescriptor::new(InMemoryStore::<Order>::new()))
//!     .serve("127.0.0.1:5000")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataResponse, ErrorResponse, GrubError, GrubResult, IdGenerator, Pipeline, Record,
        RequestContext, Store,
    };

    // === Resources ===
    pub use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor, OrderStatus};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};
}
