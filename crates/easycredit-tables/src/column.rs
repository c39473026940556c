//! Column descriptors
//!
//! A column names the row field it displays and the header label shown for it.
//! Columns with an empty id are symbolic (an actions column, a checkbox column)
//! and are neither sortable nor exported unless explicitly included.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// Left aligned
	Left,
	/// Centered
	Center,
	/// Right aligned
	Right,
}

/// Column definition for a list screen
///
/// # Example
///
/// ```rust
/// use easycredit_tables::{Align, ColumnDescriptor};
///
/// let amount = ColumnDescriptor::new("amount", "Amount").align(Align::Right);
/// assert!(amount.is_sortable());
/// assert!(amount.is_exported());
///
/// let actions = ColumnDescriptor::new("", "Actions");
/// assert!(!actions.is_sortable());
/// assert!(!actions.is_exported());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
	/// Field name this column reads, empty for symbolic columns
	pub id: String,
	/// Header text
	pub label: String,
	/// Cell alignment
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub align: Option<Align>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	exported: Option<bool>,
}

impl ColumnDescriptor {
	/// Creates a new column descriptor
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			align: None,
			exported: None,
		}
	}

	/// Sets the cell alignment
	pub fn align(mut self, align: Align) -> Self {
		self.align = Some(align);
		self
	}

	/// Overrides whether this column is written by the exporters
	pub fn include_in_export(mut self, exported: bool) -> Self {
		self.exported = Some(exported);
		self
	}

	/// Returns whether this column can drive sorting
	pub fn is_sortable(&self) -> bool {
		!self.id.is_empty()
	}

	/// Returns whether the exporters write this column
	///
	/// Defaults to true for columns bound to a field.
	pub fn is_exported(&self) -> bool {
		self.exported.unwrap_or(!self.id.is_empty())
	}
}
