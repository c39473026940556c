//! Scalar cell values
//!
//! A [`Value`] is what a single table cell holds once the backend payload has
//! been decoded: a string, a number, a boolean, a timestamp, or nothing.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A scalar value stored in a table cell
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | `null` | `Null` |
/// | boolean | `Bool` |
/// | integral number | `Integer` |
/// | other number | `Float` |
/// | string | `Text` |
/// | array / object | `Text` (serialized JSON) |
///
/// `Timestamp` is never produced from JSON directly; typed records convert
/// their `DateTime<Utc>` fields into it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	/// Absent or null value
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// 64-bit integer
	Integer(i64),
	/// 64-bit floating point
	Float(f64),
	/// Text value
	Text(String),
	/// Point in time
	Timestamp(DateTime<Utc>),
}

impl Value {
	/// Returns true for [`Value::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the text if this is a [`Value::Text`]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the numeric value for `Integer` and `Float`
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Integer(i) => Some(*i as f64),
			Value::Float(f) => Some(*f),
			_ => None,
		}
	}

	// Null < Bool < number < Timestamp < Text
	fn rank(&self) -> u8 {
		match self {
			Value::Null => 0,
			Value::Bool(_) => 1,
			Value::Integer(_) | Value::Float(_) => 2,
			Value::Timestamp(_) => 3,
			Value::Text(_) => 4,
		}
	}

	/// Total order over values
	///
	/// Values of the same kind use their native ordering. Integers and floats
	/// compare numerically. `Null` is smaller than every other value; other
	/// mixed kinds order by kind.
	///
	/// # Examples
	///
	/// ```
	/// use easycredit_tables::Value;
	/// use std::cmp::Ordering;
	///
	/// assert_eq!(Value::Integer(2).compare(&Value::Float(2.5)), Ordering::Less);
	/// assert_eq!(Value::Null.compare(&Value::from("a")), Ordering::Less);
	/// assert_eq!(Value::from("b").compare(&Value::from("a")), Ordering::Greater);
	/// ```
	pub fn compare(&self, other: &Value) -> Ordering {
		match (self, other) {
			(Value::Null, Value::Null) => Ordering::Equal,
			(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
			(Value::Integer(a), Value::Integer(b)) => a.cmp(b),
			(Value::Integer(a), Value::Float(b)) => compare_int_float(*a, *b),
			(Value::Float(a), Value::Integer(b)) => compare_int_float(*b, *a).reverse(),
			(Value::Float(a), Value::Float(b)) => compare_floats(*a, *b),
			(Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
			(Value::Text(a), Value::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

// -0.0 equals 0.0 so that both equal Integer(0); NaN sits at the ends
fn compare_floats(a: f64, b: f64) -> Ordering {
	a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

// Exact: `i as f64` rounds above 2^53
fn compare_int_float(i: i64, f: f64) -> Ordering {
	if !f.is_finite() {
		return (i as f64).total_cmp(&f);
	}
	let whole = f.floor();
	// Saturates outside the i128 range, which is still beyond every i64
	match i128::from(i).cmp(&(whole as i128)) {
		Ordering::Equal if f > whole => Ordering::Less,
		ordering => ordering,
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Integer(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{}", x),
			Value::Text(s) => f.write_str(s),
			Value::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Integer(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Integer(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Integer(i64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(i) => Value::Integer(i),
			Err(_) => Value::Float(value as f64),
		}
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<&String> for Value {
	fn from(value: &String) -> Self {
		Value::Text(value.clone())
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(value: DateTime<Utc>) -> Self {
		Value::Timestamp(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Value::Null)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => Value::Integer(i),
				None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
			},
			serde_json::Value::String(s) => Value::Text(s),
			other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
				Value::Text(other.to_string())
			}
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Integer(i) => serializer.serialize_i64(*i),
			Value::Float(x) => serializer.serialize_f64(*x),
			Value::Text(s) => serializer.serialize_str(s),
			Value::Timestamp(_) => serializer.collect_str(self),
		}
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		serde_json::Value::deserialize(deserializer).map(Value::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Value::Null, "")]
	#[case(Value::Bool(true), "true")]
	#[case(Value::Integer(42), "42")]
	#[case(Value::Float(5.0), "5")]
	#[case(Value::Float(2.5), "2.5")]
	#[case(Value::from("john@example.com"), "john@example.com")]
	fn test_display(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[test]
	fn test_timestamp_display_is_rfc3339() {
		let ts = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
		assert_eq!(Value::from(ts).to_string(), "2024-01-15T09:30:00Z");
	}

	#[test]
	fn test_null_sorts_before_everything() {
		for other in [
			Value::Bool(false),
			Value::Integer(i64::MIN),
			Value::Float(f64::NEG_INFINITY),
			Value::from(""),
		] {
			assert_eq!(Value::Null.compare(&other), Ordering::Less);
			assert_eq!(other.compare(&Value::Null), Ordering::Greater);
		}
	}

	#[test]
	fn test_mixed_numbers_compare_numerically() {
		assert_eq!(Value::Integer(3).compare(&Value::Float(2.9)), Ordering::Greater);
		assert_eq!(Value::Float(3.0).compare(&Value::Integer(3)), Ordering::Equal);
	}

	#[test]
	fn test_mixed_numbers_are_exact_beyond_f64_precision() {
		let low = Value::Integer(1 << 53);
		let float = Value::Float((1u64 << 53) as f64);
		let high = Value::Integer((1 << 53) + 1);

		assert_eq!(low.compare(&float), Ordering::Equal);
		assert_eq!(float.compare(&high), Ordering::Less);
		assert_eq!(high.compare(&float), Ordering::Greater);
		assert_eq!(low.compare(&high), Ordering::Less);
	}

	#[rstest]
	#[case(Value::Integer(0), Value::Float(-0.0), Ordering::Equal)]
	#[case(Value::Float(-0.0), Value::Float(0.0), Ordering::Equal)]
	#[case(Value::Integer(-3), Value::Float(-2.5), Ordering::Less)]
	#[case(Value::Integer(-2), Value::Float(-2.5), Ordering::Greater)]
	#[case(Value::Integer(i64::MAX), Value::Float(f64::INFINITY), Ordering::Less)]
	#[case(Value::Integer(i64::MIN), Value::Float(-1e300), Ordering::Greater)]
	#[case(Value::Integer(i64::MAX), Value::Float(f64::NAN), Ordering::Less)]
	fn test_int_float_edges(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
		assert_eq!(a.compare(&b), expected);
		assert_eq!(b.compare(&a), expected.reverse());
	}

	#[test]
	fn test_from_json() {
		assert_eq!(Value::from(json!(null)), Value::Null);
		assert_eq!(Value::from(json!(7)), Value::Integer(7));
		assert_eq!(Value::from(json!(7.5)), Value::Float(7.5));
		assert_eq!(Value::from(json!("x")), Value::from("x"));
		assert_eq!(Value::from(json!([1, 2])), Value::from("[1,2]"));
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(None::<i64>), Value::Null);
		assert_eq!(Value::from(Some("a")), Value::from("a"));
	}

	#[test]
	fn test_serialize_round_trip_through_json() {
		let value = Value::from("Jane");
		let json = serde_json::to_value(&value).unwrap();
		assert_eq!(json, json!("Jane"));
		let back: Value = serde_json::from_value(json).unwrap();
		assert_eq!(back, value);
	}
}
