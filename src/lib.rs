//! # Easy Credit
//!
//! Admin back office for the Easy Credit lending platform. Every list screen
//! (customers, loans, bills, KYC submissions, complaints, roles, staff, chat
//! sessions, transfers) runs fetched rows through the same pipeline:
//!
//! 1. a stable sort by one column,
//! 2. a free-text and category filter,
//! 3. a page slice,
//!
//! and can export the filtered rows as CSV or as a spreadsheet document.
//!
//! ## Feature Flags
//!
//! The table pipeline ([`tables`]) is always built; with
//! `default-features = false` it is all you get.
//!
//! - `conf` - Settings from TOML files and `EASYCREDIT_*` variables
//! - `client` - REST client with explicit credentials and declared envelopes
//! - `admin` - The list screens
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use easycredit::prelude::*;
//!
//! let rows = vec![
//!     Row::new().with("_id", "a").with("amount", 500),
//!     Row::new().with("_id", "b").with("amount", 100),
//!     Row::new().with("_id", "c").with("amount", 300),
//! ];
//!
//! let pipeline = Pipeline::new(FilterConfig::searching(["_id"]));
//! let sort = SortState::new("amount", SortOrder::Asc);
//! let page = PageState::new(0, 2).unwrap();
//! let output = pipeline.run(&rows, &sort, &FilterState::default(), &page).unwrap();
//!
//! assert_eq!(output.filtered_count, 3);
//! assert_eq!(output.page_slice[0].key("_id").as_deref(), Some("b"));
//! ```

pub mod tables;

#[cfg(feature = "admin")]
pub mod admin;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "conf")]
pub mod conf;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::tables::{
		Align, ColumnDescriptor, ExportFile, ExportFormat, FilterConfig, FilterState, PageState,
		Pipeline, PipelineOutput, Record, Row, Selection, SortOrder, SortState, TableError,
		TableResult, TableState, Value, export,
	};

	#[cfg(feature = "conf")]
	pub use crate::conf::{AdminSettings, ApiSettings, TableSettings};

	#[cfg(feature = "client")]
	pub use crate::client::{
		ApiClient, ClientError, Credential, EnvelopeShape, Method, Mutation, RequestContext,
	};

	#[cfg(feature = "admin")]
	pub use crate::admin::{AdminError, ListPage, Screen, bulk_mutation};
}
