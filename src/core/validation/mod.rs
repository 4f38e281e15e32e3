//! Request payload extraction and field validators

pub mod extractor;
pub mod validators;

pub use extractor::Payload;
