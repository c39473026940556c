//! Records: the rows a table displays
//!
//! The pipeline only needs to read named fields from a row. [`Record`] is that
//! seam: dynamic [`Row`]s implement it over an ordered map, and typed per-screen
//! structs implement it with [`record_fields!`](crate::record_fields).

use crate::value::Value;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// Read access to the named fields of a table row
///
/// A field that does not exist on the row returns `None`, which the pipeline
/// treats exactly like [`Value::Null`].
pub trait Record {
	/// Returns the value of the named field, if present
	fn field(&self, name: &str) -> Option<Cow<'_, Value>>;

	/// Returns the row identifier stored in `key_field`
	///
	/// Null and missing keys yield `None`; such rows cannot be selected.
	fn key(&self, key_field: &str) -> Option<String> {
		self.field(key_field)
			.filter(|value| !value.is_null())
			.map(|value| value.to_string())
	}
}

impl<R: Record + ?Sized> Record for &R {
	fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
		(**self).field(name)
	}
}

impl<R: Record + ?Sized> Record for Box<R> {
	fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
		(**self).field(name)
	}
}

impl<R: Record + ?Sized> Record for Arc<R> {
	fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
		(**self).field(name)
	}
}

/// Dynamic row: an ordered mapping from field name to value
///
/// # Examples
///
/// ```
/// use easycredit_tables::{Record, Row, Value};
///
/// let row: Row = serde_json::from_str(r#"{"_id": "a1", "amount": 250}"#).unwrap();
/// assert_eq!(row.key("_id").as_deref(), Some("a1"));
/// assert_eq!(row.get("amount"), Some(&Value::Integer(250)));
/// assert!(row.field("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a field, returning the row for chaining
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(name.into(), value.into());
		self
	}

	/// Returns the value of a field
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Iterates fields in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of fields
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the row has no fields
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Record for Row {
	fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
		self.0.get(name).map(Cow::Borrowed)
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

/// Conversion of a typed record field into a cell [`Value`]
///
/// Used by [`record_fields!`](crate::record_fields) so typed structs do not
/// need to store `Value`s themselves.
pub trait ToValue {
	/// Converts the field into a value
	fn to_value(&self) -> Value;
}

impl ToValue for String {
	fn to_value(&self) -> Value {
		Value::Text(self.clone())
	}
}

impl ToValue for str {
	fn to_value(&self) -> Value {
		Value::Text(self.to_string())
	}
}

impl ToValue for bool {
	fn to_value(&self) -> Value {
		Value::Bool(*self)
	}
}

impl ToValue for i32 {
	fn to_value(&self) -> Value {
		Value::Integer(i64::from(*self))
	}
}

impl ToValue for i64 {
	fn to_value(&self) -> Value {
		Value::Integer(*self)
	}
}

impl ToValue for u32 {
	fn to_value(&self) -> Value {
		Value::Integer(i64::from(*self))
	}
}

impl ToValue for f64 {
	fn to_value(&self) -> Value {
		Value::Float(*self)
	}
}

impl ToValue for DateTime<Utc> {
	fn to_value(&self) -> Value {
		Value::Timestamp(*self)
	}
}

impl ToValue for Value {
	fn to_value(&self) -> Value {
		self.clone()
	}
}

impl<T: ToValue> ToValue for Option<T> {
	fn to_value(&self) -> Value {
		self.as_ref().map(ToValue::to_value).unwrap_or(Value::Null)
	}
}

/// Implements [`Record`] for a typed struct by naming its fields
///
/// Each entry maps the field name used by columns, search and sorting to a
/// (possibly nested) struct field whose type implements
/// [`ToValue`](crate::record::ToValue).
///
/// # Examples
///
/// ```
/// use easycredit_tables::{Record, Value, record_fields};
///
/// struct Customer {
///     id: String,
///     name: String,
///     balance: Option<f64>,
/// }
///
/// record_fields!(Customer {
///     "_id" => id,
///     "name" => name,
///     "balance" => balance,
/// });
///
/// let customer = Customer { id: "c1".into(), name: "Ada".into(), balance: None };
/// assert_eq!(customer.field("name").unwrap().into_owned(), Value::from("Ada"));
/// assert_eq!(customer.field("balance").unwrap().into_owned(), Value::Null);
/// assert!(customer.field("email").is_none());
/// ```
#[macro_export]
macro_rules! record_fields {
	($ty:ty { $($name:literal => $($field:ident).+),* $(,)? }) => {
		impl $crate::Record for $ty {
			fn field(
				&self,
				name: &str,
			) -> ::std::option::Option<::std::borrow::Cow<'_, $crate::Value>> {
				match name {
					$(
						$name => ::std::option::Option::Some(::std::borrow::Cow::Owned(
							$crate::record::ToValue::to_value(&self$(.$field)+),
						)),
					)*
					_ => ::std::option::Option::None,
				}
			}
		}
	};
}
