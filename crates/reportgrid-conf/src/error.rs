//! Configuration error types

/// Error type for settings sources and preference stores
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid setting '{key}': {reason}")]
	Invalid { key: String, reason: String },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfError>;
