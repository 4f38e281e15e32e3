//! Reusable field validators
//!
//! These operate on raw JSON values taken from the request's `data` object so
//! that missing fields, wrong types and out-of-range values are all reported
//! through the same check functions.

use serde_json::{Number, Value};

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else is truthy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field is present and truthy
pub fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Field is a non-empty string
pub fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Number with no fractional part (`2` and `2.0` both qualify)
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Number less than or equal to zero
///
/// Numeric strings are compared by their numeric value, so `"-1"` counts.
pub fn is_non_positive(value: &Value) -> bool {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.is_some_and(|f| f <= 0.0)
}

/// JSON number strictly greater than zero
pub fn positive_number(value: Option<&Value>) -> Option<&Number> {
    match value? {
        Value::Number(n) if n.as_f64().is_some_and(|f| f > 0.0) => Some(n),
        _ => None,
    }
}

/// Index of the first array element failing `is_valid`
pub fn first_invalid_index<F>(items: &[Value], is_valid: F) -> Option<usize>
where
    F: Fn(&Value) -> bool,
{
    items.iter().position(|item| !is_valid(item))
}

/// The body `id` when it is truthy and differs from `route_id`
///
/// Absent, `null` and empty-string ids never conflict.
pub fn conflicting_id<'v>(id: Option<&'v Value>, route_id: &str) -> Option<&'v Value> {
    id.filter(|id| is_truthy(id) && id.as_str() != Some(route_id))
}

/// Render a value for an error message (strings without quotes)
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
