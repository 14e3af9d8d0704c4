//! Export functionality for report rows
//!
//! Rows are cleaned before serialization: every field whose value is an
//! explicit `null` is dropped. Absent fields and empty strings are kept apart
//! from `null`.

use crate::error::{ExportError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use reportgrid_core::Row;
use reportgrid_core::model::value_to_text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base name used when no filename is given
pub const DEFAULT_FILENAME: &str = "report";

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	/// Comma-separated values
	Csv,
	/// Pretty-printed JSON array
	Json,
}

impl ExportFormat {
	/// Get file extension for this format
	pub fn extension(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "csv",
			ExportFormat::Json => "json",
		}
	}

	/// Get MIME type for this format
	pub fn mime_type(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "text/csv",
			ExportFormat::Json => "application/json",
		}
	}

	/// MIME type with the UTF-8 charset parameter, as sent with the download
	pub fn content_type(&self) -> String {
		format!("{};charset=utf-8", self.mime_type())
	}
}

impl fmt::Display for ExportFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.extension())
	}
}

impl FromStr for ExportFormat {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"csv" => Ok(ExportFormat::Csv),
			"json" => Ok(ExportFormat::Json),
			other => Err(format!("unknown export format '{}'", other)),
		}
	}
}

/// Export result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
	/// Exported data as bytes
	pub data: Vec<u8>,
	/// MIME type
	pub mime_type: String,
	/// Suggested filename
	pub filename: String,
	/// Number of rows exported
	pub row_count: usize,
}

impl ExportResult {
	/// Create a new export result
	pub fn new(
		data: Vec<u8>,
		mime_type: impl Into<String>,
		filename: impl Into<String>,
		row_count: usize,
	) -> Self {
		Self {
			data,
			mime_type: mime_type.into(),
			filename: filename.into(),
			row_count,
		}
	}

	/// Get data size in bytes
	pub fn size_bytes(&self) -> usize {
		self.data.len()
	}

	/// Content-Type header value for the download
	pub fn content_type(&self) -> String {
		format!("{};charset=utf-8", self.mime_type)
	}
}

/// Drops explicitly `null` fields from every row
pub fn clean_rows(rows: &[Row]) -> Vec<Row> {
	rows.iter().map(Row::without_nulls).collect()
}

/// CSV exporter
///
/// The header is the field list of the first cleaned row; later rows are
/// projected onto it, so fields that only appear in later rows are not
/// exported. A value containing a comma is wrapped in double quotes as-is,
/// without doubling embedded quotes. Lines are joined with `\n` and there is
/// no trailing newline.
pub struct CsvExporter;

impl CsvExporter {
	/// Export data to CSV format
	///
	/// # Examples
	///
	/// ```
	/// use reportgrid_core::Row;
	/// use reportgrid_export::CsvExporter;
	/// use serde_json::Value;
	///
	/// let rows = vec![
	///     Row::new().with("a", 1).with("b", "x,y"),
	///     Row::new().with("a", 2).with("b", Value::Null),
	/// ];
	/// let output = CsvExporter::export(&rows).unwrap();
	///
	/// assert_eq!(String::from_utf8(output).unwrap(), "a,b\n1,\"x,y\"\n2,");
	/// ```
	pub fn export(rows: &[Row]) -> Result<Vec<u8>> {
		let cleaned = clean_rows(rows);
		let Some(first) = cleaned.first() else {
			return Ok(Vec::new());
		};
		let header: Vec<String> = first.fields().map(str::to_string).collect();

		let builder = {
			let mut builder = WriterBuilder::new();
			builder
				.quote_style(QuoteStyle::Never)
				.terminator(Terminator::Any(b'\n'))
				.flexible(true);
			builder
		};

		let mut output = Vec::new();
		write_line(&builder, &mut output, &header)?;
		for row in &cleaned {
			let values: Vec<String> = header
				.iter()
				.map(|field| row.get(field).map(csv_cell).unwrap_or_default())
				.collect();
			write_line(&builder, &mut output, &values)?;
		}

		if output.last() == Some(&b'\n') {
			output.pop();
		}
		Ok(output)
	}
}

fn csv_cell(value: &serde_json::Value) -> String {
	let text = value_to_text(value);
	if text.contains(',') {
		format!("\"{}\"", text)
	} else {
		text
	}
}

/// The csv writer emits `""` for a record made of a single empty field; such
/// lines (and an empty header) are written as a bare newline instead.
fn write_line(builder: &WriterBuilder, output: &mut Vec<u8>, values: &[String]) -> Result<()> {
	if values.len() <= 1 && values.iter().all(String::is_empty) {
		output.push(b'\n');
		return Ok(());
	}
	let mut writer = builder.from_writer(output);
	writer.write_record(values)?;
	writer.flush()?;
	Ok(())
}

/// JSON exporter
pub struct JsonExporter;

impl JsonExporter {
	/// Export data to a pretty-printed (2-space indent) JSON array
	///
	/// # Examples
	///
	/// ```
	/// use reportgrid_core::Row;
	/// use reportgrid_export::JsonExporter;
	/// use serde_json::Value;
	///
	/// let rows = vec![Row::new().with("a", 1).with("b", Value::Null)];
	/// let output = JsonExporter::export(&rows).unwrap();
	///
	/// assert_eq!(String::from_utf8(output).unwrap(), "[\n  {\n    \"a\": 1\n  }\n]");
	/// ```
	pub fn export(rows: &[Row]) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec_pretty(&clean_rows(rows))?)
	}
}

/// Export builder for fluent API
///
/// # Examples
///
/// ```
/// use reportgrid_core::Row;
/// use reportgrid_export::{ExportBuilder, ExportFormat};
///
/// let result = ExportBuilder::new(ExportFormat::Csv)
///     .filename("clicks")
///     .rows(vec![Row::new().with("id", 1)])
///     .build()
///     .unwrap();
///
/// assert_eq!(result.filename, "clicks.csv");
/// assert_eq!(result.row_count, 1);
/// ```
pub struct ExportBuilder {
	format: ExportFormat,
	filename: String,
	rows: Vec<Row>,
}

impl ExportBuilder {
	/// Create a new export builder
	pub fn new(format: ExportFormat) -> Self {
		Self {
			format,
			filename: DEFAULT_FILENAME.to_string(),
			rows: Vec::new(),
		}
	}

	/// Set the download base name (without extension)
	pub fn filename(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		if !name.trim().is_empty() {
			self.filename = name;
		}
		self
	}

	/// Set rows
	pub fn rows(mut self, rows: Vec<Row>) -> Self {
		self.rows = rows;
		self
	}

	/// Build and export
	///
	/// # Errors
	///
	/// Returns [`ExportError::EmptyDataset`] when there are no rows.
	pub fn build(self) -> Result<ExportResult> {
		if self.rows.is_empty() {
			return Err(ExportError::EmptyDataset);
		}

		let data = match self.format {
			ExportFormat::Csv => CsvExporter::export(&self.rows)?,
			ExportFormat::Json => JsonExporter::export(&self.rows)?,
		};
		let filename = format!("{}.{}", self.filename, self.format.extension());

		tracing::debug!(
			format = %self.format,
			rows = self.rows.len(),
			bytes = data.len(),
			filename = %filename,
			"Exported rows"
		);

		Ok(ExportResult::new(
			data,
			self.format.mime_type(),
			filename,
			self.rows.len(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::Value;

	#[test]
	fn test_export_format_extension() {
		assert_eq!(ExportFormat::Csv.extension(), "csv");
		assert_eq!(ExportFormat::Json.extension(), "json");
	}

	#[test]
	fn test_export_format_mime_type() {
		assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
		assert_eq!(ExportFormat::Json.mime_type(), "application/json");
		assert_eq!(
			ExportFormat::Csv.content_type(),
			"text/csv;charset=utf-8"
		);
	}

	#[test]
	fn test_export_format_parse() {
		assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
		assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
		assert!("xlsx".parse::<ExportFormat>().is_err());
	}

	#[test]
	fn test_clean_rows_drops_nulls() {
		let rows = vec![Row::new().with("a", Value::Null).with("b", "")];
		let cleaned = clean_rows(&rows);
		assert_eq!(cleaned[0].fields().collect::<Vec<_>>(), vec!["b"]);
	}

	#[test]
	fn test_empty_rows_refused() {
		let result = ExportBuilder::new(ExportFormat::Json).build();
		assert!(matches!(result, Err(ExportError::EmptyDataset)));
	}

	#[test]
	fn test_blank_filename_keeps_default() {
		let result = ExportBuilder::new(ExportFormat::Json)
			.filename("  ")
			.rows(vec![Row::new().with("id", 1)])
			.build()
			.unwrap();
		assert_eq!(result.filename, "report.json");
		assert_eq!(result.content_type(), "application/json;charset=utf-8");
	}

	#[test]
	fn test_export_result() {
		let result = ExportResult::new(vec![1, 2, 3, 4, 5], "text/csv", "test.csv", 10);

		assert_eq!(result.row_count, 10);
		assert_eq!(result.size_bytes(), 5);
	}
}
