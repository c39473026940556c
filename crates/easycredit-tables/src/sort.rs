//! Comparator builder
//!
//! Builds the primary-key comparator used by the pipeline. Stability is not
//! this module's concern: [`Pipeline`](crate::Pipeline) breaks ties by the
//! original row index.

use crate::record::Record;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	/// Smallest value first
	#[default]
	Asc,
	/// Largest value first
	Desc,
}

impl SortOrder {
	/// Returns the opposite direction
	pub fn toggle(self) -> Self {
		match self {
			SortOrder::Asc => SortOrder::Desc,
			SortOrder::Desc => SortOrder::Asc,
		}
	}

	/// Applies this direction to an ascending ordering
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			SortOrder::Asc => ordering,
			SortOrder::Desc => ordering.reverse(),
		}
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SortOrder::Asc => f.write_str("asc"),
			SortOrder::Desc => f.write_str("desc"),
		}
	}
}

impl FromStr for SortOrder {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"asc" => Ok(SortOrder::Asc),
			"desc" => Ok(SortOrder::Desc),
			other => Err(format!("unknown sort order '{}'", other)),
		}
	}
}

/// The single active sort key of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	/// Field to sort by
	pub order_by: String,
	/// Direction
	pub order: SortOrder,
}

impl SortState {
	/// Creates a sort state
	pub fn new(order_by: impl Into<String>, order: SortOrder) -> Self {
		Self {
			order_by: order_by.into(),
			order,
		}
	}

	/// Applies a header click on `field`
	///
	/// Clicking the column that is already sorted ascending flips it to
	/// descending; every other click sorts ascending by the clicked column.
	///
	/// # Examples
	///
	/// ```
	/// use easycredit_tables::{SortOrder, SortState};
	///
	/// let mut sort = SortState::new("name", SortOrder::Asc);
	/// sort.request_sort("name");
	/// assert_eq!(sort.order, SortOrder::Desc);
	/// sort.request_sort("name");
	/// assert_eq!(sort.order, SortOrder::Asc);
	/// sort.request_sort("amount");
	/// assert_eq!(sort, SortState::new("amount", SortOrder::Asc));
	/// ```
	pub fn request_sort(&mut self, field: &str) {
		let is_asc = self.order_by == field && self.order == SortOrder::Asc;
		self.order = if is_asc { SortOrder::Desc } else { SortOrder::Asc };
		self.order_by = field.to_string();
	}
}

/// Builds a comparator over `order_by` in the given direction
///
/// A missing field compares as [`Value::Null`], which is smaller than any
/// present value: such rows come first when ascending and last when
/// descending. The descending comparator is the exact reverse of the
/// ascending one.
///
/// # Examples
///
/// ```
/// use easycredit_tables::{Row, SortOrder, build_comparator};
/// use std::cmp::Ordering;
///
/// let small = Row::new().with("amount", 1);
/// let large = Row::new().with("amount", 5);
/// let compare = build_comparator("amount", SortOrder::Desc);
/// assert_eq!(compare(&small, &large), Ordering::Greater);
/// ```
pub fn build_comparator<R: Record + ?Sized>(
	order_by: &str,
	order: SortOrder,
) -> impl Fn(&R, &R) -> Ordering + '_ {
	move |a: &R, b: &R| {
		let left = a.field(order_by);
		let right = b.field(order_by);
		let ordering = match (left.as_deref(), right.as_deref()) {
			(Some(x), Some(y)) => x.compare(y),
			(Some(x), None) => x.compare(&Value::Null),
			(None, Some(y)) => Value::Null.compare(y),
			(None, None) => Ordering::Equal,
		};
		order.apply(ordering)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::Row;
	use rstest::rstest;

	#[rstest]
	#[case("asc", SortOrder::Asc)]
	#[case("DESC", SortOrder::Desc)]
	fn test_parse_sort_order(#[case] input: &str, #[case] expected: SortOrder) {
		assert_eq!(input.parse::<SortOrder>().unwrap(), expected);
	}

	#[test]
	fn test_parse_sort_order_rejects_unknown() {
		assert!("sideways".parse::<SortOrder>().is_err());
	}

	#[test]
	fn test_missing_field_sorts_first_ascending() {
		let missing = Row::new().with("_id", "x");
		let present = Row::new().with("amount", 0);
		let asc = build_comparator("amount", SortOrder::Asc);
		assert_eq!(asc(&missing, &present), Ordering::Less);

		let desc = build_comparator("amount", SortOrder::Desc);
		assert_eq!(desc(&missing, &present), Ordering::Greater);
	}

	#[test]
	fn test_equal_values_compare_equal_both_directions() {
		let a = Row::new().with("amount", 5);
		let b = Row::new().with("amount", 5);
		assert_eq!(build_comparator("amount", SortOrder::Asc)(&a, &b), Ordering::Equal);
		assert_eq!(build_comparator("amount", SortOrder::Desc)(&a, &b), Ordering::Equal);
	}

	#[test]
	fn test_strings_compare_natively() {
		let alice = Row::new().with("name", "Alice");
		let bob = Row::new().with("name", "Bob");
		let asc = build_comparator("name", SortOrder::Asc);
		assert_eq!(asc(&alice, &bob), Ordering::Less);
	}
}
