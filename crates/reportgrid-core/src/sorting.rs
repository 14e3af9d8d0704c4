//! Sorting functionality for grids

use crate::model::{Column, Row, compare_values};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[default]
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order
	#[serde(rename = "desc")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the wire form of this direction (`asc` / `desc`)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Header sort marker for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
	/// Column cannot be sorted right now
	None,
	/// Column is sortable but not the active sort column
	Unsorted,
	/// Active sort column, ascending
	Ascending,
	/// Active sort column, descending
	Descending,
}

/// Active sort column and direction
///
/// Once a column has been engaged there is no "unsorted" state: clicking the
/// same column flips the direction, clicking another column starts ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	column: Option<String>,
	direction: SortDirection,
}

impl SortState {
	/// Creates an unsorted state
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the key of the active sort column
	pub fn column(&self) -> Option<&str> {
		self.column.as_deref()
	}

	/// Returns the active direction
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Applies a header click on `column`
	///
	/// Returns `false` (and leaves the state untouched) when the column is not sortable.
	pub fn toggle(&mut self, column: &Column) -> bool {
		if !column.is_sortable() {
			return false;
		}
		if self.column.as_deref() == Some(column.key()) {
			self.direction = self.direction.toggle();
		} else {
			self.column = Some(column.key().to_string());
			self.direction = SortDirection::Ascending;
		}
		tracing::debug!(column = column.key(), direction = %self.direction, "Sort toggled");
		true
	}

	/// Returns the header marker for `column`
	pub fn indicator(&self, column: &Column, enabled: bool) -> SortIndicator {
		if !enabled || !column.is_sortable() {
			return SortIndicator::None;
		}
		match (self.column.as_deref() == Some(column.key()), self.direction) {
			(false, _) => SortIndicator::Unsorted,
			(true, SortDirection::Ascending) => SortIndicator::Ascending,
			(true, SortDirection::Descending) => SortIndicator::Descending,
		}
	}
}

/// Stable in-place sort of rows by the raw value of `field`
///
/// Missing and `null` values sort first when ascending and last when
/// descending. Rows whose values compare equal keep their original relative
/// order in both directions.
pub fn sort_rows(rows: &mut [Row], field: &str, direction: SortDirection) {
	rows.sort_by(|a, b| {
		let ordering = compare_values(a.get(field), b.get(field));
		match direction {
			SortDirection::Ascending => ordering,
			SortDirection::Descending => ordering.reverse(),
		}
	});
}
