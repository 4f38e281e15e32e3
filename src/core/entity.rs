//! Base trait shared by every stored record

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record held in a [`Store`](crate::core::store::Store)
///
/// Records are flat, cloneable and identified by an immutable string id.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Singular resource name used in log lines (e.g. "dish")
    fn resource_name() -> &'static str;

    /// The record's identifier
    fn id(&self) -> &str;
}
