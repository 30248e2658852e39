//! Presence checks on JSON values.
//!
//! SEOmatic leaves unset fields as `null`, `""` or `false` depending on the
//! field, so "is there something to render" is a single rule applied
//! everywhere: `null`, `false`, `0` and `""` are empty, anything else is
//! present. Empty arrays and objects count as present here; callers that
//! iterate them handle emptiness themselves.

use serde_json::{Number, Value};

/// Whether a value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A non-empty string field, or `None`.
pub fn present_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Convert a JSON attribute value to its HTML attribute text.
///
/// `true` becomes an empty (boolean) attribute. `false`, `null` and
/// structured values have no attribute form and yield `None`.
pub fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(true) => Some(String::new()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Number text as a browser would print it: integral floats lose the `.0`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
