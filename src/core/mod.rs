//! Core module containing the record, store, pipeline and error types

pub mod entity;
pub mod error;
pub mod id;
pub mod pipeline;
pub mod response;
pub mod store;
pub mod validation;

pub use entity::Record;
pub use error::{ErrorResponse, GrubError, GrubResult};
pub use id::IdGenerator;
pub use pipeline::{Check, Pipeline, RequestContext};
pub use response::DataResponse;
pub use store::Store;
