//! Server module for building the HTTP router
//!
//! The `ServerBuilder` registers:
//! - CRUD routes for every registered entity descriptor
//! - Health check routes
//! - A not-found fallback reporting unknown paths

pub mod builder;
pub mod entity_registry;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
