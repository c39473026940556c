//! Error types for the table pipeline

use thiserror::Error;

/// Table pipeline error type
///
/// Only configuration mistakes are errors. Missing fields, empty row sets and
/// out-of-range pages are handled permissively by the pipeline itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
	/// Rows per page must be at least one
	#[error("Invalid page size: rows per page must be greater than zero")]
	InvalidPageSize,

	/// A search query was given but no field is searchable
	#[error("Search query '{0}' given but no searchable fields are configured")]
	NoSearchableFields(String),

	/// Categories were selected but no category field is configured
	#[error("Category filter given but no category field is configured")]
	NoCategoryField,

	/// A selection named a row that is not in the current row set
	#[error("No row with key '{0}' in the current rows")]
	UnknownRowKey(String),

	/// Export serialization failed
	#[error("Export error: {0}")]
	Export(String),
}

/// Result type for table pipeline operations
pub type TableResult<T> = Result<T, TableError>;
