//! Error types for the grid engine

use crate::model::RowKey;
use thiserror::Error;

/// Grid engine error type
///
/// Out-of-range page numbers and unknown sort columns are not errors; they are
/// clamped or ignored. Only structural problems with the column model or the
/// dataset are rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
	/// Two columns share the same key
	#[error("Duplicate column key '{0}'")]
	DuplicateColumn(String),

	/// A row has no usable value for the row identity field
	#[error("Row {index} has no usable value for row key field '{field}'")]
	MissingRowKey {
		/// Position of the offending row in the dataset
		index: usize,
		/// Name of the row identity field
		field: String,
	},

	/// Two rows share the same identity value
	#[error("Duplicate row key '{0}'")]
	DuplicateRowKey(RowKey),

	/// Page size of zero was requested
	#[error("Page size must be greater than zero")]
	InvalidPageSize,
}

/// Result type for grid engine operations
pub type Result<T> = std::result::Result<T, GridError>;
