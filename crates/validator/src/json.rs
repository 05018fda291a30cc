//! `serde_json::Value` bridges.
//!
//! Form payloads and schema options usually arrive as JSON. This module maps
//! JSON values onto the runtime value model and decodes number formats from
//! their JSON option objects.
//!
//! # Examples
//!
//! ```
//! use sift_validator::json::{number_format_from_json, validate_json_type};
//! use sift_validator::validators::validate_number;
//! use serde_json::json;
//!
//! assert!(validate_json_type(&json!([1, 2]), "Array"));
//! assert!(validate_json_type(&json!(null), "Null"));
//!
//! let format = number_format_from_json(&json!({ "fixed": 2 })).unwrap();
//! assert!(validate_number("1.25", Some(&format)));
//! ```

use serde_json::Value;

use crate::validators::{Dynamic, NumberFormat, validate_type};

impl From<Value> for Dynamic {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Dynamic {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

/// Returns whether a JSON value belongs to the named category.
///
/// JSON has no NaN, so `"NaN"` never matches.
#[must_use]
pub fn validate_json_type(value: &Value, type_name: &str) -> bool {
    validate_type(&Dynamic::from(value), type_name)
}

/// Decodes a [`NumberFormat`] from a JSON options object.
///
/// Missing fields take their defaults; `null` counts as missing.
pub fn number_format_from_json(options: &Value) -> Result<NumberFormat, serde_json::Error> {
    match options {
        Value::Null => Ok(NumberFormat::default()),
        Value::Object(map) => {
            let present: serde_json::Map<String, Value> = map
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            serde_json::from_value(Value::Object(present))
        }
        other => serde_json::from_value(other.clone()),
    }
}
