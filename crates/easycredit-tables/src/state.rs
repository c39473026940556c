//! View-owned table state
//!
//! A list screen owns one [`TableState`]: the current row snapshot plus the
//! sort, filter, page and selection the user has chosen. The row snapshot is
//! replaced wholesale on every refetch while the user's choices persist.

use crate::error::{TableError, TableResult};
use crate::filter::FilterState;
use crate::pagination::PageState;
use crate::pipeline::{Pipeline, PipelineOutput};
use crate::record::Record;
use crate::selection::Selection;
use crate::sort::{SortOrder, SortState};
use std::collections::HashSet;
use std::sync::Arc;

/// Key field used when a screen does not name one
pub const DEFAULT_KEY_FIELD: &str = "_id";

/// State of one list screen
#[derive(Debug, Clone)]
pub struct TableState<R> {
	rows: Arc<[R]>,
	sort: SortState,
	filter: FilterState,
	page: PageState,
	selection: Selection,
	key_field: String,
}

impl<R: Record> TableState<R> {
	/// Creates an empty state sorted by `sort`
	pub fn new(sort: SortState) -> Self {
		Self {
			rows: Arc::from(Vec::new()),
			sort,
			filter: FilterState::default(),
			page: PageState::default(),
			selection: Selection::new(),
			key_field: DEFAULT_KEY_FIELD.to_string(),
		}
	}

	/// Sets the field identifying rows for selection
	pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
		self.key_field = key_field.into();
		self
	}

	/// Sets the initial page state
	pub fn with_page(mut self, page: PageState) -> Self {
		self.page = page;
		self
	}

	/// Replaces the row set with a freshly fetched one
	///
	/// Sort, filter and page are kept. Selected keys that no longer exist are
	/// dropped and returned.
	pub fn replace_rows(&mut self, rows: Vec<R>) -> Vec<String> {
		self.rows = Arc::from(rows);
		let existing: Vec<String> = self
			.rows
			.iter()
			.filter_map(|row| row.key(&self.key_field))
			.collect();
		let dropped = self
			.selection
			.retain_existing(existing.iter().map(String::as_str));
		if !dropped.is_empty() {
			tracing::debug!(
				dropped = dropped.len(),
				"selection pruned after refetch"
			);
		}
		dropped
	}

	/// Current row snapshot
	///
	/// The snapshot stays valid after a later [`replace_rows`](Self::replace_rows).
	pub fn snapshot(&self) -> Arc<[R]> {
		Arc::clone(&self.rows)
	}

	/// All fetched rows
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	/// Active sort
	pub fn sort(&self) -> &SortState {
		&self.sort
	}

	/// Active filter
	pub fn filter(&self) -> &FilterState {
		&self.filter
	}

	/// Active page
	pub fn page(&self) -> &PageState {
		&self.page
	}

	/// Current selection
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	fn has_key(&self, key: &str) -> bool {
		self.rows
			.iter()
			.any(|row| row.key(&self.key_field).as_deref() == Some(key))
	}

	/// Selects `key` if unselected, unselects it otherwise
	///
	/// Returns whether the row is selected afterwards.
	///
	/// # Errors
	///
	/// Returns [`TableError::UnknownRowKey`] if no current row has `key`;
	/// unselecting a key is always allowed.
	pub fn toggle_selected(&mut self, key: &str) -> TableResult<bool> {
		if !self.selection.contains(key) && !self.has_key(key) {
			return Err(TableError::UnknownRowKey(key.to_string()));
		}
		Ok(self.selection.toggle(key))
	}

	/// Selects every key naming a current row and returns the ones ignored
	pub fn select_keys<I, S>(&mut self, keys: I) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let existing: HashSet<String> = self
			.rows
			.iter()
			.filter_map(|row| row.key(&self.key_field))
			.collect();
		let (known, unknown): (Vec<String>, Vec<String>) = keys
			.into_iter()
			.map(Into::into)
			.partition(|key| existing.contains(key));
		self.selection.select_all(known);
		if !unknown.is_empty() {
			tracing::debug!(ignored = unknown.len(), "selection ignored unknown keys");
		}
		unknown
	}

	/// Unselects everything
	pub fn clear_selection(&mut self) {
		self.selection.clear();
	}

	/// Key field name
	pub fn key_field(&self) -> &str {
		&self.key_field
	}

	/// Applies a header click on `field`
	pub fn request_sort(&mut self, field: &str) {
		self.sort.request_sort(field);
	}

	/// Sets the sort explicitly
	pub fn set_sort(&mut self, order_by: impl Into<String>, order: SortOrder) {
		self.sort = SortState::new(order_by, order);
	}

	/// Sets the search query and returns to the first page
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.filter.query = query.into();
		self.page = self.page.first_page();
	}

	/// Toggles a category and returns to the first page
	pub fn toggle_category(&mut self, category: impl Into<String>) {
		let category = category.into();
		if !self.filter.categories.remove(&category) {
			self.filter.categories.insert(category);
		}
		self.page = self.page.first_page();
	}

	/// Replaces the selected categories and returns to the first page
	pub fn set_categories<I, S>(&mut self, categories: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.filter.categories = categories.into_iter().map(Into::into).collect();
		self.page = self.page.first_page();
	}

	/// Clears query and categories
	pub fn clear_filters(&mut self) {
		self.filter = FilterState::default();
		self.page = self.page.first_page();
	}

	/// Moves to `page`
	pub fn set_page(&mut self, page: usize) {
		self.page = self.page.with_page(page);
	}

	/// Changes the page size and returns to the first page
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidPageSize`](crate::TableError::InvalidPageSize)
	/// for zero; the state is left unchanged.
	pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> TableResult<()> {
		self.page = PageState::new(0, rows_per_page)?;
		Ok(())
	}

	/// Selects every row on the current page
	pub fn select_page(&mut self, pipeline: &Pipeline) -> TableResult<()> {
		let output = pipeline.run(&self.rows, &self.sort, &self.filter, &self.page)?;
		let keys: Vec<String> = output
			.page_slice
			.iter()
			.filter_map(|row| row.key(&self.key_field))
			.collect();
		self.selection.select_all(keys);
		Ok(())
	}

	/// Runs the pipeline for the current page
	pub fn view<'a>(&'a self, pipeline: &Pipeline) -> TableResult<PipelineOutput<'a, R>> {
		pipeline.run(&self.rows, &self.sort, &self.filter, &self.page)
	}

	/// Moves back to the last page that still has rows
	///
	/// Call after a refetch: a shrinking row set can otherwise leave the view
	/// on an empty page.
	pub fn clamp_page(&mut self, pipeline: &Pipeline) -> TableResult<()> {
		let filtered = pipeline.filtered(&self.rows, &self.sort, &self.filter)?.len();
		let clamped = self.page.clamp_to(filtered);
		if clamped != self.page {
			tracing::debug!(
				from = self.page.page(),
				to = clamped.page(),
				"page clamped to filtered rows"
			);
			self.page = clamped;
		}
		Ok(())
	}

	/// Every filtered row in display order, for export
	pub fn export_rows<'a>(&'a self, pipeline: &Pipeline) -> TableResult<Vec<&'a R>> {
		pipeline.filtered(&self.rows, &self.sort, &self.filter)
	}
}
