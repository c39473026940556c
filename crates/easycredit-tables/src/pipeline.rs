//! Pipeline orchestrator
//!
//! Runs sort -> filter -> paginate over a borrowed row slice. Every stage is
//! total before the next one starts, and the output refers to the caller's
//! rows instead of copying them.

use crate::error::TableResult;
use crate::filter::{FilterConfig, FilterState, build_predicate};
use crate::pagination::PageState;
use crate::record::Record;
use crate::sort::{SortState, build_comparator};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<'a, R> {
	/// Rows on the requested page, in sorted order
	pub page_slice: Vec<&'a R>,
	/// Number of rows that passed the filter, before slicing
	pub filtered_count: usize,
}

impl<R> PipelineOutput<'_, R> {
	/// Returns true when no row passed the filter
	pub fn is_empty(&self) -> bool {
		self.filtered_count == 0
	}
}

/// Sort, filter and paginate pipeline for one list screen
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
	filter_config: FilterConfig,
}

impl Pipeline {
	/// Creates a pipeline with the screen's filter configuration
	pub fn new(filter_config: FilterConfig) -> Self {
		Self { filter_config }
	}

	/// Filter configuration of this pipeline
	pub fn filter_config(&self) -> &FilterConfig {
		&self.filter_config
	}

	/// Returns every row passing the filter, in stable sorted order
	///
	/// This is the row set the exporters receive: all filtered rows, not just
	/// the current page.
	///
	/// # Errors
	///
	/// Propagates precondition violations from
	/// [`build_predicate`](crate::build_predicate).
	pub fn filtered<'a, R: Record>(
		&self,
		rows: &'a [R],
		sort: &SortState,
		filter: &FilterState,
	) -> TableResult<Vec<&'a R>> {
		let predicate = build_predicate::<R>(filter, &self.filter_config)?;
		let compare = build_comparator::<R>(&sort.order_by, sort.order);

		let mut indexed: Vec<(usize, &'a R)> = rows.iter().enumerate().collect();
		indexed.sort_unstable_by(|(ia, a), (ib, b)| compare(*a, *b).then_with(|| ia.cmp(ib)));

		let filtered: Vec<&'a R> = indexed
			.into_iter()
			.map(|(_, row)| row)
			.filter(|row| predicate(*row))
			.collect();

		tracing::debug!(
			total = rows.len(),
			filtered = filtered.len(),
			order_by = %sort.order_by,
			order = %sort.order,
			"table pipeline filtered rows"
		);

		Ok(filtered)
	}

	/// Runs the full pipeline and returns the requested page
	///
	/// Never fails for empty input, a page past the end or a sort field that
	/// no row has.
	///
	/// # Errors
	///
	/// Propagates precondition violations from
	/// [`build_predicate`](crate::build_predicate).
	///
	/// # Examples
	///
	/// ```
	/// use easycredit_tables::{FilterConfig, FilterState, PageState, Pipeline, Record, Row, SortOrder, SortState};
	///
	/// let rows = vec![
	///     Row::new().with("_id", "a").with("amount", 5),
	///     Row::new().with("_id", "b").with("amount", 5),
	///     Row::new().with("_id", "c").with("amount", 1),
	/// ];
	/// let output = Pipeline::default()
	///     .run(
	///         &rows,
	///         &SortState::new("amount", SortOrder::Asc),
	///         &FilterState::default(),
	///         &PageState::default(),
	///     )
	///     .unwrap();
	///
	/// let ids: Vec<String> = output.page_slice.iter().filter_map(|r| r.key("_id")).collect();
	/// assert_eq!(ids, ["c", "a", "b"]);
	/// ```
	pub fn run<'a, R: Record>(
		&self,
		rows: &'a [R],
		sort: &SortState,
		filter: &FilterState,
		page: &PageState,
	) -> TableResult<PipelineOutput<'a, R>> {
		let filtered = self.filtered(rows, sort, filter)?;
		let filtered_count = filtered.len();
		let range = page.range(filtered_count);
		let page_slice = filtered[range].to_vec();

		Ok(PipelineOutput {
			page_slice,
			filtered_count,
		})
	}
}
