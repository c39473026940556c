//! Property-based tests for the table pipeline
//!
//! Covers stability, filter monotonicity, pagination bounds and export purity.

use easycredit_tables::{
	ColumnDescriptor, FilterConfig, FilterState, PageState, Pipeline, Record, Row, SortOrder,
	SortState, to_csv,
};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
	prop::collection::vec((0i64..4, "[a-c]{0,4}"), 0..30).prop_map(|items| {
		items
			.into_iter()
			.enumerate()
			.map(|(i, (amount, name))| {
				Row::new()
					.with("_id", i as i64)
					.with("amount", amount)
					.with("name", name)
			})
			.collect()
	})
}

fn order_strategy() -> impl Strategy<Value = SortOrder> {
	prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

fn position(row: &Row) -> i64 {
	match row.get("_id") {
		Some(easycredit_tables::Value::Integer(i)) => *i,
		_ => -1,
	}
}

// ============================================================================
// Sorting
// ============================================================================

proptest! {
	/// Rows with equal sort keys keep their original relative order
	#[test]
	fn prop_sort_is_stable(rows in rows_strategy(), order in order_strategy()) {
		let sorted = Pipeline::default()
			.filtered(&rows, &SortState::new("amount", order), &FilterState::default())
			.unwrap();

		prop_assert_eq!(sorted.len(), rows.len());
		for pair in sorted.windows(2) {
			let (a, b) = (pair[0], pair[1]);
			if a.get("amount") == b.get("amount") {
				prop_assert!(position(a) < position(b));
			}
		}
	}

	/// Sorted output is ordered by the sort key in the requested direction
	#[test]
	fn prop_sort_is_ordered(rows in rows_strategy(), order in order_strategy()) {
		let sorted = Pipeline::default()
			.filtered(&rows, &SortState::new("amount", order), &FilterState::default())
			.unwrap();

		for pair in sorted.windows(2) {
			let a = pair[0].field("amount").unwrap().into_owned();
			let b = pair[1].field("amount").unwrap().into_owned();
			prop_assert_ne!(order.apply(a.compare(&b)), std::cmp::Ordering::Greater);
		}
	}
}

// ============================================================================
// Filtering and pagination
// ============================================================================

proptest! {
	/// Narrowing the query never grows the result
	#[test]
	fn prop_filter_is_monotone(rows in rows_strategy(), query in "[a-c]{0,3}", extra in "[a-c]{1,2}") {
		let pipeline = Pipeline::new(FilterConfig::searching(["name"]));
		let sort = SortState::new("amount", SortOrder::Asc);
		let page = PageState::default();

		let broad = pipeline.run(&rows, &sort, &FilterState::with_query(query.clone()), &page).unwrap();
		let narrow_query = format!("{}{}", query, extra);
		let narrow = pipeline.run(&rows, &sort, &FilterState::with_query(narrow_query), &page).unwrap();

		prop_assert!(broad.filtered_count <= rows.len());
		prop_assert!(narrow.filtered_count <= broad.filtered_count);
	}

	/// Any page at or past the last one is empty
	#[test]
	fn prop_pages_past_end_are_empty(rows in rows_strategy(), rows_per_page in 1usize..8, extra in 0usize..5) {
		let pipeline = Pipeline::default();
		let sort = SortState::new("amount", SortOrder::Asc);
		let filter = FilterState::default();

		let first = pipeline.run(&rows, &sort, &filter, &PageState::new(0, rows_per_page).unwrap()).unwrap();
		let last_page = first.filtered_count.div_ceil(rows_per_page);
		let page = PageState::new(last_page + extra, rows_per_page).unwrap();
		let output = pipeline.run(&rows, &sort, &filter, &page).unwrap();

		prop_assert!(output.page_slice.is_empty());
		prop_assert_eq!(output.filtered_count, rows.len());
	}

	/// Concatenating every page yields the full filtered set
	#[test]
	fn prop_pages_partition_filtered_rows(rows in rows_strategy(), rows_per_page in 1usize..8) {
		let pipeline = Pipeline::default();
		let sort = SortState::new("name", SortOrder::Desc);
		let filter = FilterState::default();
		let all = pipeline.filtered(&rows, &sort, &filter).unwrap();

		let mut paged = Vec::new();
		for page in 0..all.len().div_ceil(rows_per_page) {
			let state = PageState::new(page, rows_per_page).unwrap();
			paged.extend(pipeline.run(&rows, &sort, &filter, &state).unwrap().page_slice);
		}

		prop_assert_eq!(paged, all);
	}
}

// ============================================================================
// Export
// ============================================================================

proptest! {
	/// CSV export is a pure function of its inputs
	#[test]
	fn prop_csv_is_idempotent(rows in rows_strategy()) {
		let columns = vec![
			ColumnDescriptor::new("_id", "ID"),
			ColumnDescriptor::new("name", "Name"),
			ColumnDescriptor::new("", "Actions"),
		];
		let refs: Vec<&Row> = rows.iter().collect();

		let first = to_csv(&refs, &columns).unwrap();
		let second = to_csv(&refs, &columns).unwrap();
		prop_assert_eq!(&first, &second);

		let header = first.split('\n').next().unwrap_or_default();
		prop_assert_eq!(header.split(',').count(), columns.iter().filter(|c| !c.id.is_empty()).count());
	}
}
