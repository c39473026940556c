//! Export of filtered rows
//!
//! Both exporters are pure string producers over the rows they are given
//! (normally every filtered row, see [`Pipeline::filtered`](crate::Pipeline::filtered)).
//! Handing the result to the browser or the filesystem is the caller's job.

use crate::column::ColumnDescriptor;
use crate::error::{TableError, TableResult};
use crate::record::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	/// Comma-separated values
	Csv,
	/// HTML table document opened by spreadsheet applications
	Spreadsheet,
}

impl ExportFormat {
	/// Get file extension for this format
	pub fn extension(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "csv",
			ExportFormat::Spreadsheet => "xls",
		}
	}

	/// Get MIME type for this format
	pub fn mime_type(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "text/csv;charset=utf-8;",
			ExportFormat::Spreadsheet => "application/vnd.ms-excel",
		}
	}
}

/// Export result ready to be downloaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
	/// Exported document
	pub data: Vec<u8>,
	/// MIME type
	pub mime_type: String,
	/// Suggested filename
	pub filename: String,
	/// Number of rows exported
	pub row_count: usize,
}

impl ExportFile {
	/// Get data size in bytes
	pub fn size_bytes(&self) -> usize {
		self.data.len()
	}
}

fn exported_columns(columns: &[ColumnDescriptor]) -> Vec<&ColumnDescriptor> {
	columns.iter().filter(|c| c.is_exported()).collect()
}

fn cell_text<R: Record + ?Sized>(row: &R, column: &ColumnDescriptor) -> String {
	if column.id.is_empty() {
		return String::new();
	}
	row.field(&column.id)
		.map(|value| value.to_string())
		.unwrap_or_default()
}

/// Serializes rows to CSV text
///
/// The header line holds the labels of the exported columns; each following
/// line holds one row's values in column order. Lines end with `\n` and there
/// is no trailing newline. Values containing a comma, a quote or a line break
/// are quoted.
///
/// # Errors
///
/// Returns [`TableError::Export`] if the CSV writer fails.
///
/// # Examples
///
/// ```
/// use easycredit_tables::{ColumnDescriptor, Row, to_csv};
///
/// let row = Row::new().with("name", "Jane,Doe");
/// let csv = to_csv(&[&row], &[ColumnDescriptor::new("name", "Name")]).unwrap();
/// assert_eq!(csv, "Name\n\"Jane,Doe\"");
/// ```
pub fn to_csv<R: Record>(rows: &[&R], columns: &[ColumnDescriptor]) -> TableResult<String> {
	let columns = exported_columns(columns);
	let mut writer = WriterBuilder::new()
		.terminator(Terminator::Any(b'\n'))
		.quote_style(QuoteStyle::Necessary)
		.from_writer(Vec::new());

	writer
		.write_record(columns.iter().map(|c| c.label.as_str()))
		.map_err(|e| TableError::Export(format!("Failed to write CSV headers: {}", e)))?;

	for row in rows {
		writer
			.write_record(columns.iter().map(|c| cell_text(*row, c)))
			.map_err(|e| TableError::Export(format!("Failed to write CSV row: {}", e)))?;
	}

	let output = writer
		.into_inner()
		.map_err(|e| TableError::Export(format!("Failed to get CSV output: {}", e)))?;
	let mut text = String::from_utf8(output)
		.map_err(|e| TableError::Export(format!("CSV output is not UTF-8: {}", e)))?;

	if text.ends_with('\n') {
		text.pop();
	}
	Ok(text)
}

fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Serializes rows to an HTML document holding a single table
///
/// Spreadsheet applications open this document when it is served as
/// `application/vnd.ms-excel`. Header and cell text is HTML-escaped.
///
/// # Examples
///
/// ```
/// use easycredit_tables::{ColumnDescriptor, Row, to_spreadsheet_document};
///
/// let row = Row::new().with("name", "A & B");
/// let html = to_spreadsheet_document(&[&row], &[ColumnDescriptor::new("name", "Name")]);
/// assert!(html.contains("<th>Name</th>"));
/// assert!(html.contains("<td>A &amp; B</td>"));
/// ```
pub fn to_spreadsheet_document<R: Record>(rows: &[&R], columns: &[ColumnDescriptor]) -> String {
	let columns = exported_columns(columns);
	let mut html = String::from(
		"<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
		 xmlns:x=\"urn:schemas-microsoft-com:office:excel\">\n\
		 <head><meta charset=\"utf-8\"></head>\n<body>\n<table>\n<thead>\n<tr>",
	);

	for column in &columns {
		// Writing into a String cannot fail
		let _ = write!(html, "<th>{}</th>", html_escape(&column.label));
	}
	html.push_str("</tr>\n</thead>\n<tbody>\n");

	for row in rows {
		html.push_str("<tr>");
		for column in &columns {
			let _ = write!(html, "<td>{}</td>", html_escape(&cell_text(*row, column)));
		}
		html.push_str("</tr>\n");
	}

	html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
	html
}

/// Exports rows in `format` and names the file after `file_stem`
///
/// The format's extension is appended unless `file_stem` already ends with it.
///
/// # Errors
///
/// Returns [`TableError::Export`] if serialization fails.
pub fn export<R: Record>(
	format: ExportFormat,
	rows: &[&R],
	columns: &[ColumnDescriptor],
	file_stem: &str,
) -> TableResult<ExportFile> {
	let data = match format {
		ExportFormat::Csv => to_csv(rows, columns)?,
		ExportFormat::Spreadsheet => to_spreadsheet_document(rows, columns),
	};

	let extension = format!(".{}", format.extension());
	let filename = if file_stem.ends_with(&extension) {
		file_stem.to_string()
	} else {
		format!("{}{}", file_stem, extension)
	};

	tracing::debug!(
		rows = rows.len(),
		format = format.extension(),
		filename = %filename,
		"exported table rows"
	);

	Ok(ExportFile {
		data: data.into_bytes(),
		mime_type: format.mime_type().to_string(),
		filename,
		row_count: rows.len(),
	})
}
