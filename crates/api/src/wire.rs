//! Typed access to untyped wire structures.
//!
//! Requests arrive as `serde_json::Value`. Fields that are missing and fields
//! that are explicitly `null` are both treated as absent.

use samples_core::{Error, Result};
use serde_json::{Map, Value};

/// A JSON object
pub type Object = Map<String, Value>;

/// Require the request structure itself.
///
/// A missing structure is a caller bug, not a user error.
pub(crate) fn require_params<'a>(params: Option<&'a Value>, name: &str) -> Result<&'a Object> {
    match params {
        None | Some(Value::Null) => Err(Error::invalid_argument(format!(
            "{} cannot be None",
            name
        ))),
        Some(Value::Object(m)) => Ok(m),
        Some(_) => Err(Error::invalid_argument(format!(
            "{} must be a mapping",
            name
        ))),
    }
}

/// The request structure if present; anything else reads as empty.
pub(crate) fn optional_params(params: Option<&Value>) -> Option<&Object> {
    params.and_then(Value::as_object)
}

/// Field value, with `null` read as absent
pub(crate) fn field<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Render a value for an error message.
///
/// Strings are rendered without quotes, absent values as `None`, and
/// everything else as compact JSON.
pub fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}
