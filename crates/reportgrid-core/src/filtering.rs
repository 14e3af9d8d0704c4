//! Search filtering for locally held datasets

use crate::model::{Row, value_to_text};

/// Case-insensitive substring search over a configured set of columns
///
/// A row passes when the search text is empty or whitespace-only, or when at
/// least one searchable column's value contains the text. A filter with no
/// searchable columns lets every row through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
	text: String,
	columns: Vec<String>,
}

impl SearchFilter {
	/// Creates a filter over the given searchable column keys
	pub fn new<I, S>(columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			text: String::new(),
			columns: columns.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the current search text
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replaces the search text
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}

	/// Returns the searchable column keys
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Returns true when the filter currently lets every row through
	pub fn is_inactive(&self) -> bool {
		self.columns.is_empty() || self.text.trim().is_empty()
	}

	/// Tests a single row
	pub fn matches(&self, row: &Row) -> bool {
		if self.is_inactive() {
			return true;
		}
		let needle = self.text.to_lowercase();
		self.columns.iter().any(|column| {
			row.get(column)
				.map(|value| value_to_text(value).to_lowercase().contains(&needle))
				.unwrap_or(false)
		})
	}

	/// Returns the rows that pass the filter, in their original order
	pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
		if self.is_inactive() {
			return rows.to_vec();
		}
		rows.iter().filter(|row| self.matches(row)).cloned().collect()
	}
}
