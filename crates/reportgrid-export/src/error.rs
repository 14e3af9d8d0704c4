//! Export error types

use thiserror::Error;

/// Errors raised while exporting rows
#[derive(Debug, Error)]
pub enum ExportError {
	/// The row set to export is empty
	#[error("Nothing to export: the row set is empty")]
	EmptyDataset,

	/// CSV writer failure
	#[error("Failed to write CSV: {0}")]
	Csv(#[from] csv::Error),

	/// JSON serialization failure
	#[error("JSON export failed: {0}")]
	Json(#[from] serde_json::Error),

	/// Buffer I/O failure
	#[error("Export I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
