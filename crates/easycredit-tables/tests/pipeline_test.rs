use easycredit_tables::{
	FilterConfig, FilterState, PageState, Pipeline, Record, Row, SortOrder, SortState, TableError,
	TableState, Value,
};
use rstest::*;

#[fixture]
fn amounts() -> Vec<Row> {
	vec![
		Row::new().with("_id", "a").with("amount", 5),
		Row::new().with("_id", "b").with("amount", 5),
		Row::new().with("_id", "c").with("amount", 1),
	]
}

#[fixture]
fn customers() -> Vec<Row> {
	vec![
		Row::new()
			.with("_id", "1")
			.with("name", "John Smith")
			.with("email", "john@example.com")
			.with("status", "active"),
		Row::new()
			.with("_id", "2")
			.with("name", "Jane Doe")
			.with("email", "jane@example.com")
			.with("status", "blocked"),
		Row::new()
			.with("_id", "3")
			.with("name", "Ada Obi")
			.with("email", "ada@corp.io")
			.with("status", "active"),
		Row::new().with("_id", "4").with("name", "No Email"),
	]
}

#[fixture]
fn customer_pipeline() -> Pipeline {
	Pipeline::new(FilterConfig::searching(["name", "email"]).category_field("status"))
}

fn ids(rows: &[&Row]) -> Vec<String> {
	rows.iter().filter_map(|r| r.key("_id")).collect()
}

#[rstest]
fn test_ties_keep_original_order(amounts: Vec<Row>) {
	let output = Pipeline::default()
		.run(
			&amounts,
			&SortState::new("amount", SortOrder::Asc),
			&FilterState::default(),
			&PageState::default(),
		)
		.unwrap();

	assert_eq!(ids(&output.page_slice), vec!["c", "a", "b"]);
}

#[rstest]
fn test_empty_filter_counts_everything(amounts: Vec<Row>) {
	let output = Pipeline::default()
		.run(
			&amounts,
			&SortState::new("amount", SortOrder::Asc),
			&FilterState::default(),
			&PageState::default(),
		)
		.unwrap();

	assert_eq!(output.filtered_count, 3);
}

#[rstest]
fn test_page_past_end_is_empty(amounts: Vec<Row>) {
	let output = Pipeline::default()
		.run(
			&amounts,
			&SortState::new("amount", SortOrder::Asc),
			&FilterState::default(),
			&PageState::new(5, 10).unwrap(),
		)
		.unwrap();

	assert!(output.page_slice.is_empty());
	assert_eq!(output.filtered_count, 3);
}

#[rstest]
fn test_query_is_case_insensitive(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let output = customer_pipeline
		.run(
			&customers,
			&SortState::new("name", SortOrder::Asc),
			&FilterState::with_query("JOHN"),
			&PageState::default(),
		)
		.unwrap();

	assert_eq!(ids(&output.page_slice), vec!["1"]);
}

#[rstest]
fn test_query_and_category(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let filter = FilterState::with_query("example.com").category("active");
	let output = customer_pipeline
		.run(
			&customers,
			&SortState::new("name", SortOrder::Asc),
			&filter,
			&PageState::default(),
		)
		.unwrap();

	assert_eq!(output.filtered_count, 1);
	assert_eq!(ids(&output.page_slice), vec!["1"]);
}

#[rstest]
fn test_sort_filter_paginate(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let filter = FilterState::default().category("active");
	let sort = SortState::new("name", SortOrder::Desc);

	let first = customer_pipeline
		.run(&customers, &sort, &filter, &PageState::new(0, 1).unwrap())
		.unwrap();
	assert_eq!(ids(&first.page_slice), vec!["1"]);
	assert_eq!(first.filtered_count, 2);

	let second = customer_pipeline
		.run(&customers, &sort, &filter, &PageState::new(1, 1).unwrap())
		.unwrap();
	assert_eq!(ids(&second.page_slice), vec!["3"]);
}

#[rstest]
fn test_missing_sort_field_sorts_first(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let asc = customer_pipeline
		.filtered(
			&customers,
			&SortState::new("email", SortOrder::Asc),
			&FilterState::default(),
		)
		.unwrap();
	assert_eq!(ids(&asc), vec!["4", "3", "2", "1"]);

	let desc = customer_pipeline
		.filtered(
			&customers,
			&SortState::new("email", SortOrder::Desc),
			&FilterState::default(),
		)
		.unwrap();
	assert_eq!(ids(&desc), vec!["1", "2", "3", "4"]);
}

#[rstest]
fn test_sort_by_field_no_row_has(amounts: Vec<Row>) {
	let output = Pipeline::default()
		.filtered(
			&amounts,
			&SortState::new("nonexistent", SortOrder::Desc),
			&FilterState::default(),
		)
		.unwrap();

	assert_eq!(ids(&output), vec!["a", "b", "c"]);
}

#[rstest]
fn test_query_without_searchable_fields_fails(amounts: Vec<Row>) {
	let result = Pipeline::default().run(
		&amounts,
		&SortState::new("amount", SortOrder::Asc),
		&FilterState::with_query("5"),
		&PageState::default(),
	);

	assert!(matches!(result, Err(TableError::NoSearchableFields(_))));
}

#[rstest]
fn test_zero_rows_per_page_fails() {
	assert_eq!(PageState::new(0, 0), Err(TableError::InvalidPageSize));
}

#[rstest]
fn test_table_state_end_to_end(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let mut state = TableState::new(SortState::new("name", SortOrder::Asc));
	state.replace_rows(customers.clone());
	state.request_sort("name");
	state.set_query("example");

	let view = state.view(&customer_pipeline).unwrap();
	assert_eq!(ids(&view.page_slice), vec!["1", "2"]);

	assert!(state.select_keys(["1", "2"]).is_empty());
	let refetched: Vec<Row> = customers.into_iter().filter(|r| r.key("_id").as_deref() != Some("2")).collect();
	let dropped = state.replace_rows(refetched);

	assert_eq!(dropped, vec!["2".to_string()]);
	assert_eq!(state.sort(), &SortState::new("name", SortOrder::Desc));
	assert_eq!(state.filter().query, "example");

	let export_rows = state.export_rows(&customer_pipeline).unwrap();
	assert_eq!(ids(&export_rows), vec!["1"]);
}

#[rstest]
fn test_selection_only_names_current_rows() {
	let mut state = TableState::new(SortState::new("_id", SortOrder::Asc));
	state.replace_rows(vec![Row::new().with("_id", "a")]);

	assert_eq!(
		state.toggle_selected("ghost"),
		Err(TableError::UnknownRowKey("ghost".to_string()))
	);
	assert_eq!(state.select_keys(["phantom", "a"]), vec!["phantom".to_string()]);
	assert_eq!(state.selection().keys().collect::<Vec<_>>(), vec!["a"]);

	assert_eq!(state.toggle_selected("a"), Ok(false));
	assert!(state.selection().is_empty());
	assert_eq!(state.toggle_selected("a"), Ok(true));

	state.replace_rows(vec![Row::new().with("_id", "b")]);
	assert!(state.selection().is_empty());
	state.select_keys(["b"]);
	state.clear_selection();
	assert!(state.selection().is_empty());
}

#[rstest]
fn test_large_integers_and_floats_sort_exactly() {
	const TWO_POW_53: i64 = 1 << 53;
	let values = [
		Value::Integer(TWO_POW_53 + 1),
		Value::Float(TWO_POW_53 as f64),
		Value::Integer(TWO_POW_53),
	];
	let rows: Vec<Row> = (0..200)
		.map(|i| {
			Row::new()
				.with("_id", i.to_string())
				.with("n", values[i % values.len()].clone())
		})
		.collect();

	let sorted = Pipeline::default()
		.filtered(
			&rows,
			&SortState::new("n", SortOrder::Asc),
			&FilterState::default(),
		)
		.unwrap();

	let integers: Vec<i64> = sorted
		.iter()
		.filter_map(|row| match row.get("n") {
			Some(Value::Integer(i)) => Some(*i),
			_ => None,
		})
		.collect();
	assert!(integers.windows(2).all(|w| w[0] <= w[1]));
	assert_eq!(integers.first(), Some(&TWO_POW_53));
	assert_eq!(integers.last(), Some(&(TWO_POW_53 + 1)));
	assert!(
		sorted
			.windows(2)
			.all(|w| w[0].get("n").unwrap().compare(w[1].get("n").unwrap()).is_le())
	);
}

#[rstest]
fn test_clamp_page_after_shrinking_refetch(customers: Vec<Row>, customer_pipeline: Pipeline) {
	let mut state = TableState::new(SortState::new("_id", SortOrder::Asc))
		.with_page(PageState::new(0, 1).unwrap());
	state.replace_rows(customers.clone());
	state.set_page(3);
	state.clamp_page(&customer_pipeline).unwrap();
	assert_eq!(state.page().page(), 3);

	state.replace_rows(customers.into_iter().take(2).collect());
	state.clamp_page(&customer_pipeline).unwrap();
	assert_eq!(state.page().page(), 1);
	assert_eq!(ids(&state.view(&customer_pipeline).unwrap().page_slice), vec!["2"]);

	state.replace_rows(Vec::new());
	state.clamp_page(&customer_pipeline).unwrap();
	assert_eq!(state.page().page(), 0);
}
