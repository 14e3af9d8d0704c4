//! Error types for report queries

use thiserror::Error;

/// Message shown for fetch failures that carry no recognised error code
pub const UNKNOWN_FETCH_ERROR: &str = "Fetching report failed due to an unknown error.";

/// Report query error type
#[derive(Debug, Error)]
pub enum QueryError {
	/// The request was cancelled before a response arrived
	#[error("Request was cancelled.")]
	Cancelled,

	/// The data source could not be reached
	#[error("Please check your internet connection and try again.")]
	Network,

	/// The data source answered with an error
	#[error("{message}")]
	Api {
		/// HTTP-like status code, when known
		status: Option<u16>,
		/// Server-provided message
		message: String,
		/// Machine-readable error code, when provided
		error_code: Option<String>,
	},

	/// The field catalog is malformed
	#[error("Invalid report catalog: {0}")]
	Catalog(String),

	/// JSON decoding failure
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// TOML decoding failure
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Anything else
	#[error("An unexpected error occurred: {0}")]
	Unknown(String),
}

impl QueryError {
	/// Message to show the user for a failed fetch
	///
	/// No error codes are classified yet, so every failure maps to
	/// [`UNKNOWN_FETCH_ERROR`].
	pub fn user_message(&self) -> &'static str {
		UNKNOWN_FETCH_ERROR
	}

	/// Machine-readable error code, if the source sent one
	pub fn error_code(&self) -> Option<&str> {
		match self {
			QueryError::Api { error_code, .. } => error_code.as_deref(),
			_ => None,
		}
	}

	/// Returns true for cancellations
	pub fn is_cancelled(&self) -> bool {
		matches!(self, QueryError::Cancelled)
	}
}

/// Result type for report queries
pub type QueryResult<T> = Result<T, QueryError>;
