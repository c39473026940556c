//! Tabular data pipeline for the Easy Credit back office
//!
//! Every list screen of the back office (customers, loans, bills, KYC,
//! complaints, ...) shows the same thing: a fetched row set that is sorted,
//! filtered, paginated and optionally exported. This crate holds that logic
//! once, parameterized by column and field configuration at each call site.
//!
//! # Features
//!
//! - **Records**: Dynamic [`Row`]s or typed per-screen structs via [`record_fields!`]
//! - **Sorting**: Single-key comparator with a stable index tie-break
//! - **Filtering**: Case-insensitive free-text search plus category membership
//! - **Pagination**: Zero-based page slices that never fail when out of range
//! - **Selection**: Key-based selection reconciled on every refetch
//! - **Export**: CSV and HTML-table spreadsheet documents
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableState] --> B[Rows snapshot]
//!     A --> C[SortState]
//!     A --> D[FilterState]
//!     A --> E[PageState]
//!     A --> F[Selection]
//!     G[Pipeline] --> H[build_comparator]
//!     G --> I[build_predicate]
//!     G --> J[PipelineOutput]
//!     K[export] --> L[CSV]
//!     K --> M[Spreadsheet]
//! ```
//!
//! # Example
//!
//! ```rust
//! use easycredit_tables::{FilterConfig, FilterState, PageState, Pipeline, Row, SortOrder, SortState};
//!
//! let rows: Vec<Row> = vec![
//!     Row::from_iter([("_id", "a".into()), ("amount", 5.into())]),
//!     Row::from_iter([("_id", "b".into()), ("amount", 5.into())]),
//!     Row::from_iter([("_id", "c".into()), ("amount", 1.into())]),
//! ];
//!
//! let pipeline = Pipeline::new(FilterConfig::default());
//! let output = pipeline
//!     .run(
//!         &rows,
//!         &SortState::new("amount", SortOrder::Asc),
//!         &FilterState::default(),
//!         &PageState::new(0, 10).unwrap(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(output.filtered_count, 3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod pipeline;
pub mod record;
pub mod selection;
pub mod sort;
pub mod state;
pub mod value;

// Re-exports for convenience
pub use column::{Align, ColumnDescriptor};
pub use error::{TableError, TableResult};
pub use export::{ExportFile, ExportFormat, export, to_csv, to_spreadsheet_document};
pub use filter::{FilterConfig, FilterState, build_predicate};
pub use pagination::{DEFAULT_ROWS_PER_PAGE, PageState, ROWS_PER_PAGE_OPTIONS};
pub use pipeline::{Pipeline, PipelineOutput};
pub use record::{Record, Row};
pub use selection::Selection;
pub use sort::{SortOrder, SortState, build_comparator};
pub use state::TableState;
pub use value::Value;
