//! Replacement value coercion
//!
//! Raw replacement strings are coerced like YAML scalars, so `true` becomes a
//! boolean and `3` an integer, while `0.1.0` stays a string. Anything that
//! does not parse as a scalar is kept verbatim as a string.

use serde_yaml::Value;

/// Parse a raw replacement string into a YAML scalar value
pub(crate) fn parse(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }

    match serde_yaml::from_str::<Value>(raw) {
        Ok(value) if is_scalar(&value) => value,
        _ => Value::String(raw.to_string()),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}
