//! Error types for the grid orchestrator

use reportgrid_conf::ConfError;
use reportgrid_core::GridError;
use reportgrid_export::ExportError;
use reportgrid_query::QueryError;
use thiserror::Error;

/// Grid orchestrator error type
#[derive(Debug, Error)]
pub enum EngineError {
	/// Invalid column model, dataset or page size
	#[error(transparent)]
	Grid(#[from] GridError),

	/// Export failed or was refused
	#[error(transparent)]
	Export(#[from] ExportError),

	/// Data source failure
	#[error(transparent)]
	Query(#[from] QueryError),

	/// Settings or preference failure
	#[error(transparent)]
	Conf(#[from] ConfError),

	/// Export requested while data is loading or refreshing
	#[error("Export is unavailable while data is loading")]
	ExportUnavailable,
}

/// Result type for grid orchestrator operations
pub type EngineResult<T> = Result<T, EngineError>;
