//! Success envelope shared by every resource

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used for every successful response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
