//! Response envelopes
//!
//! Endpoints wrap their row arrays differently: some return the bare array,
//! some `{"data": [...]}`, some `{"data": {"data": [...]}}`. Each endpoint
//! declares which one it uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Where the row array sits in a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeShape {
	/// `[...]`
	Bare,
	/// `{"data": [...]}`
	Data,
	/// `{"data": {"data": [...]}}`
	NestedData,
}

impl fmt::Display for EnvelopeShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EnvelopeShape::Bare => f.write_str("bare array"),
			EnvelopeShape::Data => f.write_str("data array"),
			EnvelopeShape::NestedData => f.write_str("data.data array"),
		}
	}
}

/// Describes which envelope `body` actually is, for error messages
pub(crate) fn describe(body: &Value) -> String {
	match body {
		Value::Array(_) => EnvelopeShape::Bare.to_string(),
		Value::Object(map) => match map.get("data") {
			Some(Value::Array(_)) => EnvelopeShape::Data.to_string(),
			Some(Value::Object(inner)) if matches!(inner.get("data"), Some(Value::Array(_))) => {
				EnvelopeShape::NestedData.to_string()
			}
			Some(_) => "object with non-array data".to_string(),
			None => "object without data".to_string(),
		},
		Value::Null => "null".to_string(),
		_ => "scalar".to_string(),
	}
}

/// Extracts the row array from `body` according to `shape`
///
/// Returns the body back unchanged when it does not have the declared shape.
///
/// # Examples
///
/// ```
/// use easycredit_client::{EnvelopeShape, unwrap_envelope};
/// use serde_json::json;
///
/// let body = json!({"data": {"data": [{"_id": "a"}], "total": 1}});
/// let rows = unwrap_envelope(body, EnvelopeShape::NestedData).unwrap();
/// assert_eq!(rows, vec![json!({"_id": "a"})]);
///
/// assert!(unwrap_envelope(json!([1, 2]), EnvelopeShape::Data).is_err());
/// ```
pub fn unwrap_envelope(body: Value, shape: EnvelopeShape) -> Result<Vec<Value>, Value> {
	match (shape, body) {
		(EnvelopeShape::Bare, Value::Array(rows)) => Ok(rows),
		(EnvelopeShape::Data, Value::Object(mut map)) => match map.remove("data") {
			Some(Value::Array(rows)) => Ok(rows),
			Some(other) => {
				map.insert("data".to_string(), other);
				Err(Value::Object(map))
			}
			None => Err(Value::Object(map)),
		},
		(EnvelopeShape::NestedData, Value::Object(mut map)) => match map.remove("data") {
			Some(Value::Object(mut inner)) => match inner.remove("data") {
				Some(Value::Array(rows)) => Ok(rows),
				Some(other) => {
					inner.insert("data".to_string(), other);
					map.insert("data".to_string(), Value::Object(inner));
					Err(Value::Object(map))
				}
				None => {
					map.insert("data".to_string(), Value::Object(inner));
					Err(Value::Object(map))
				}
			},
			Some(other) => {
				map.insert("data".to_string(), other);
				Err(Value::Object(map))
			}
			None => Err(Value::Object(map)),
		},
		(_, body) => Err(body),
	}
}
