//! Tabular data pipeline: sort, filter, paginate and export
//!
//! Always available; the other modules build on it.

pub use easycredit_tables::*;
