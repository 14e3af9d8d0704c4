//! Column definitions

use crate::error::{GridError, Result};
use crate::format::format_cell;
use crate::model::row::Row;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

/// Custom cell renderer: receives the row and its index within the visible page
pub type RenderFn = Arc<dyn Fn(&Row, usize) -> String + Send + Sync>;

/// How a column's raw values are formatted for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
	/// Plain text (the default)
	#[default]
	Text,
	/// Numeric value, displayed as-is
	Number,
	/// Timestamp, displayed with the smart date rule
	Date,
}

/// A grid column definition
///
/// A column reads one field of a [`Row`] and knows how to display it:
/// - `key` identifies the column inside the grid and is the field read by default
/// - `source_field` is the name forwarded to an external data source for sorting
/// - `render` overrides the default `value_kind` based formatting
///
/// # Example
///
/// ```rust
/// use reportgrid_core::{Column, Row, ValueKind};
///
/// let clicks = Column::new("clicks", "Clicks")
///     .value_kind(ValueKind::Number)
///     .source_field("total_clicks")
///     .sortable(true);
///
/// let row = Row::new().with("clicks", 12);
/// assert_eq!(clicks.display(&row, 0), "12");
/// assert_eq!(clicks.source_field_name(), "total_clicks");
/// ```
#[derive(Clone)]
pub struct Column {
	key: String,
	label: String,
	value_kind: ValueKind,
	source_field: Option<String>,
	sortable: bool,
	render: Option<RenderFn>,
}

impl Column {
	/// Creates a new text column that is not sortable
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			value_kind: ValueKind::Text,
			source_field: None,
			sortable: false,
			render: None,
		}
	}

	/// Sets how raw values are formatted
	pub fn value_kind(mut self, kind: ValueKind) -> Self {
		self.value_kind = kind;
		self
	}

	/// Sets the field name used by the external data source
	pub fn source_field(mut self, field: impl Into<String>) -> Self {
		self.source_field = Some(field.into());
		self
	}

	/// Sets whether header clicks sort by this column
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets a custom renderer that replaces the default formatter
	pub fn render<F>(mut self, render: F) -> Self
	where
		F: Fn(&Row, usize) -> String + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}

	/// Returns the column key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the value kind
	pub fn kind(&self) -> ValueKind {
		self.value_kind
	}

	/// Returns the data-source field name (defaults to the key)
	pub fn source_field_name(&self) -> &str {
		self.source_field.as_deref().unwrap_or(&self.key)
	}

	/// Returns whether this column is sortable
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Display value of this column for `row`, relative to the current time
	pub fn display(&self, row: &Row, index: usize) -> String {
		self.display_at(row, index, &Local::now())
	}

	/// Display value of this column for `row`, relative to `now`
	pub fn display_at(&self, row: &Row, index: usize, now: &DateTime<Local>) -> String {
		if let Some(render) = &self.render {
			return render(row, index);
		}
		match row.get(&self.key) {
			Some(value) => format_cell(self.value_kind, value, now),
			None => String::new(),
		}
	}
}

impl Debug for Column {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("label", &self.label)
			.field("value_kind", &self.value_kind)
			.field("source_field", &self.source_field)
			.field("sortable", &self.sortable)
			.field("render", &self.render.is_some())
			.finish()
	}
}

/// Checks that column keys are unique within one grid
pub fn validate_columns(columns: &[Column]) -> Result<()> {
	let mut seen = HashSet::with_capacity(columns.len());
	for column in columns {
		if !seen.insert(column.key()) {
			return Err(GridError::DuplicateColumn(column.key().to_string()));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_column_creation() {
		let column = Column::new("test", "Test Column");
		assert_eq!(column.key(), "test");
		assert_eq!(column.label(), "Test Column");
		assert_eq!(column.kind(), ValueKind::Text);
		assert_eq!(column.source_field_name(), "test");
		assert!(!column.is_sortable());
	}

	#[test]
	fn test_column_display_reads_key() {
		let column = Column::new("name", "Name");
		let row = Row::new().with("name", "Hello");
		assert_eq!(column.display(&row, 0), "Hello");
	}

	#[test]
	fn test_column_display_missing_field() {
		let column = Column::new("name", "Name");
		assert_eq!(column.display(&Row::new(), 0), "");
	}

	#[test]
	fn test_column_render_overrides_kind() {
		let column = Column::new("created", "Created")
			.value_kind(ValueKind::Date)
			.render(|row, index| format!("#{} {}", index, row.len()));
		let row = Row::new().with("created", 0);
		assert_eq!(column.display(&row, 4), "#4 1");
	}

	#[test]
	fn test_column_date_kind_uses_smart_date() {
		let now = Local.with_ymd_and_hms(2024, 5, 10, 15, 30, 0).unwrap();
		let column = Column::new("created", "Created").value_kind(ValueKind::Date);
		let row = Row::new().with("created", now.timestamp_millis());
		assert_eq!(column.display_at(&row, 0, &now), "Today at 15:30");
	}

	#[test]
	fn test_column_builder() {
		let column = Column::new("test", "Test")
			.sortable(true)
			.source_field("db_test")
			.value_kind(ValueKind::Number);

		assert!(column.is_sortable());
		assert_eq!(column.source_field_name(), "db_test");
		assert_eq!(column.kind(), ValueKind::Number);
	}

	#[test]
	fn test_validate_columns_rejects_duplicates() {
		let columns = vec![Column::new("a", "A"), Column::new("a", "Again")];
		assert_eq!(
			validate_columns(&columns),
			Err(GridError::DuplicateColumn("a".to_string()))
		);
	}
}
