//! Screen definitions

use easycredit_client::EnvelopeShape;
use easycredit_tables::state::DEFAULT_KEY_FIELD;
use easycredit_tables::{ColumnDescriptor, FilterConfig, Record, SortState};
use serde::de::DeserializeOwned;

/// A back office list screen
///
/// Implementors are unit structs; everything a [`ListPage`](crate::ListPage)
/// needs is static.
pub trait Screen {
	/// Row type returned by [`Screen::ENDPOINT`]
	type Record: Record + DeserializeOwned;

	/// Human readable screen name
	const NAME: &'static str;

	/// List endpoint, relative to the API base URL
	const ENDPOINT: &'static str;

	/// Envelope the endpoint wraps its rows in
	const ENVELOPE: EnvelopeShape;

	/// Field identifying rows for selection and actions
	const KEY_FIELD: &'static str = DEFAULT_KEY_FIELD;

	/// Displayed and exported columns, in order
	fn columns() -> Vec<ColumnDescriptor>;

	/// Searchable and category fields
	fn filter_config() -> FilterConfig;

	/// Sort applied when the screen opens
	fn default_sort() -> SortState;

	/// File name stem for exports
	fn export_stem() -> String {
		Self::NAME.to_lowercase().replace(' ', "_")
	}
}
