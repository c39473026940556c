//! Page state
//!
//! Pages are zero-based. A page past the end of the filtered rows is valid
//! and simply shows nothing.

use crate::error::{TableError, TableResult};
use serde::{Deserialize, Serialize};

/// Rows-per-page choices offered by list screens
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Rows per page used when a screen does not say otherwise
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Zero-based page position and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
	page: usize,
	rows_per_page: usize,
}

impl PageState {
	/// Creates a page state
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidPageSize`] when `rows_per_page` is zero.
	///
	/// # Examples
	///
	/// ```
	/// use easycredit_tables::PageState;
	///
	/// let page = PageState::new(2, 10).unwrap();
	/// assert_eq!(page.offset(), 20);
	/// assert!(PageState::new(0, 0).is_err());
	/// ```
	pub fn new(page: usize, rows_per_page: usize) -> TableResult<Self> {
		if rows_per_page == 0 {
			return Err(TableError::InvalidPageSize);
		}
		Ok(Self {
			page,
			rows_per_page,
		})
	}

	/// Current page, zero-based
	pub fn page(&self) -> usize {
		self.page
	}

	/// Rows shown per page
	pub fn rows_per_page(&self) -> usize {
		self.rows_per_page
	}

	/// Index of the first row on this page
	pub fn offset(&self) -> usize {
		self.page.saturating_mul(self.rows_per_page)
	}

	/// Half-open row range of this page, clamped to `total`
	pub fn range(&self, total: usize) -> std::ops::Range<usize> {
		let start = self.offset().min(total);
		let end = start.saturating_add(self.rows_per_page).min(total);
		start..end
	}

	/// Number of pages needed for `total` rows
	pub fn page_count(&self, total: usize) -> usize {
		total.div_ceil(self.rows_per_page)
	}

	/// Returns this state moved to `page`
	pub fn with_page(self, page: usize) -> Self {
		Self { page, ..self }
	}

	/// Returns this state back on the first page
	pub fn first_page(self) -> Self {
		self.with_page(0)
	}

	/// Returns this state on the last page that still has rows
	///
	/// Used after a filter narrows the result so the view does not sit on an
	/// empty page. With no rows at all this is the first page.
	pub fn clamp_to(self, total: usize) -> Self {
		let last = self.page_count(total).saturating_sub(1);
		self.with_page(self.page.min(last))
	}
}

impl Default for PageState {
	fn default() -> Self {
		Self {
			page: 0,
			rows_per_page: DEFAULT_ROWS_PER_PAGE,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 10)]
	#[case(10, 1)]
	#[case(11, 2)]
	#[case(25, 3)]
	fn test_page_count(#[case] total: usize, #[case] expected: usize) {
		assert_eq!(PageState::default().page_count(total), expected);
	}

	#[test]
	fn test_range_past_end_is_empty() {
		let page = PageState::new(5, 10).unwrap();
		assert!(page.range(3).is_empty());
	}

	#[test]
	fn test_range_partial_last_page() {
		let page = PageState::new(1, 10).unwrap();
		assert_eq!(page.range(13), 10..13);
	}

	#[test]
	fn test_huge_page_does_not_overflow() {
		let page = PageState::new(usize::MAX, usize::MAX).unwrap();
		assert!(page.range(3).is_empty());
	}

	#[test]
	fn test_clamp_to() {
		let page = PageState::new(7, 10).unwrap();
		assert_eq!(page.clamp_to(25).page(), 2);
		assert_eq!(page.clamp_to(0).page(), 0);
		assert_eq!(page.clamp_to(1000).page(), 7);
	}
}
