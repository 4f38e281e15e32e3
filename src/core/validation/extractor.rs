//! Axum extractor for request payloads
//!
//! Mutating routes receive `{ "data": { ... } }`. The [`Payload`] extractor
//! parses the body and hands the `data` object to the checks. A missing body,
//! or a body without an object `data`, yields an empty object so that every
//! field is reported as missing by the field checks rather than by the
//! transport.

use crate::core::error::GrubError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

/// The `data` object of a request body
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl Payload {
    /// Build a payload from a full request body
    pub fn from_body(body: &Value) -> Self {
        let data = body
            .get("data")
            .filter(|data| data.is_object())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        Self(data)
    }

    /// Parse raw body bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GrubError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::from_body(&Value::Null));
        }
        let body: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_body(&body))
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = GrubError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| GrubError::bad_request(rejection.body_text()))?;

        Payload::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_data_object() {
        let payload = Payload::from_body(&json!({ "data": { "name": "Taco" } }));
        assert_eq!(payload.0, json!({ "name": "Taco" }));
    }

    #[test]
    fn test_missing_data_is_empty_object() {
        assert_eq!(Payload::from_body(&json!({})).0, json!({}));
        assert_eq!(Payload::from_body(&json!({ "data": "oops" })).0, json!({}));
        assert_eq!(Payload::from_body(&json!(null)).0, json!({}));
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(Payload::from_bytes(b"").map(|payload| payload.0), Ok(json!({})));
        assert_eq!(Payload::from_bytes(b"  \n").map(|payload| payload.0), Ok(json!({})));
    }

    #[test]
    fn test_invalid_json_is_bad_request() {
        let err = Payload::from_bytes(b"{\"data\":").unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parses_data_from_bytes() {
        let payload = Payload::from_bytes(br#"{"data":{"price":5}}"#).expect("valid json");
        assert_eq!(payload.0.get("price"), Some(&json!(5)));
    }
}
