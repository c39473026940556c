//! Filter predicate builder
//!
//! A row passes the filter when it matches the free-text query on at least
//! one searchable field AND its category field is one of the selected
//! categories. An empty query or an empty category set disables that half.

use crate::error::{TableError, TableResult};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User-controlled filter input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
	/// Free-text search query
	pub query: String,
	/// Selected category values
	pub categories: BTreeSet<String>,
}

impl FilterState {
	/// Creates a filter with only a query
	pub fn with_query(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			categories: BTreeSet::new(),
		}
	}

	/// Adds a selected category
	pub fn category(mut self, category: impl Into<String>) -> Self {
		self.categories.insert(category.into());
		self
	}

	/// Returns true if neither the query nor the categories filter anything
	pub fn is_empty(&self) -> bool {
		self.query.is_empty() && self.categories.is_empty()
	}
}

/// Per-screen filter configuration: which fields the query and categories read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
	/// Fields searched by the free-text query
	pub searchable_fields: Vec<String>,
	/// Field whose value must be among the selected categories
	pub category_field: Option<String>,
}

impl FilterConfig {
	/// Creates a configuration searching the given fields
	pub fn searching<I, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			searchable_fields: fields.into_iter().map(Into::into).collect(),
			category_field: None,
		}
	}

	/// Sets the category field
	pub fn category_field(mut self, field: impl Into<String>) -> Self {
		self.category_field = Some(field.into());
		self
	}
}

/// Builds a row predicate from the filter input and configuration
///
/// Matching is case-insensitive substring search over the display text of
/// each searchable field. Missing fields never match.
///
/// # Errors
///
/// - [`TableError::NoSearchableFields`] if the query is non-empty but no
///   field is searchable
/// - [`TableError::NoCategoryField`] if categories are selected but no
///   category field is configured
///
/// # Examples
///
/// ```
/// use easycredit_tables::{FilterConfig, FilterState, Row, build_predicate};
///
/// let config = FilterConfig::searching(["email"]);
/// let filter = FilterState::with_query("JOHN");
/// let predicate = build_predicate(&filter, &config).unwrap();
/// assert!(predicate(&Row::new().with("email", "john@example.com")));
/// assert!(!predicate(&Row::new().with("email", "jane@example.com")));
/// ```
pub fn build_predicate<'a, R: Record + ?Sized>(
	filter: &'a FilterState,
	config: &'a FilterConfig,
) -> TableResult<impl Fn(&R) -> bool + 'a> {
	if !filter.query.is_empty() && config.searchable_fields.is_empty() {
		return Err(TableError::NoSearchableFields(filter.query.clone()));
	}
	if !filter.categories.is_empty() && config.category_field.is_none() {
		return Err(TableError::NoCategoryField);
	}

	let needle = filter.query.to_lowercase();

	Ok(move |row: &R| {
		let query_matches = needle.is_empty()
			|| config.searchable_fields.iter().any(|name| {
				row.field(name)
					.filter(|value| !value.is_null())
					.is_some_and(|value| value.to_string().to_lowercase().contains(&needle))
			});
		if !query_matches {
			return false;
		}

		match &config.category_field {
			Some(name) if !filter.categories.is_empty() => row
				.field(name)
				.filter(|value| !value.is_null())
				.is_some_and(|value| filter.categories.contains(&value.to_string())),
			_ => true,
		}
	})
}
