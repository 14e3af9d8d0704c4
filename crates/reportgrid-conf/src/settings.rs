//! Layered grid settings
//!
//! Sources are merged in priority order:
//! `REPORTGRID_*` environment variables > TOML file > defaults.

use crate::error::{ConfError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Prefix of environment variables read by [`EnvSource::reportgrid`]
pub const ENV_PREFIX: &str = "REPORTGRID_";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Settings shared by every grid in the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
	/// Page size used when neither the caller nor the stored preference picks one
	pub default_page_size: usize,
	/// Page sizes offered to the user
	pub page_size_options: Vec<usize>,
	/// Upper bound on skeleton rows shown while loading
	pub placeholder_row_limit: usize,
	/// Where the preference file lives; `None` keeps preferences in memory
	pub preferences_path: Option<PathBuf>,
}

impl Default for GridSettings {
	fn default() -> Self {
		Self {
			default_page_size: 30,
			page_size_options: vec![10, 20, 30, 50, 100],
			placeholder_row_limit: 15,
			preferences_path: None,
		}
	}
}

impl GridSettings {
	/// Rejects zero page sizes
	pub fn validate(&self) -> Result<()> {
		if self.default_page_size == 0 {
			return Err(ConfError::Invalid {
				key: "default_page_size".to_string(),
				reason: "must be greater than zero".to_string(),
			});
		}
		if self.page_size_options.contains(&0) {
			return Err(ConfError::Invalid {
				key: "page_size_options".to_string(),
				reason: "options must be greater than zero".to_string(),
			});
		}
		Ok(())
	}

	/// Number of skeleton rows to show while loading a page of `page_size`
	pub fn placeholder_rows(&self, page_size: usize) -> usize {
		page_size.min(self.placeholder_row_limit)
	}
}

/// Built-in defaults, lowest priority
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Defaults taken from [`GridSettings::default`]
	pub fn new() -> Self {
		let values = match serde_json::to_value(GridSettings::default()) {
			Ok(Value::Object(map)) => map.into_iter().collect(),
			_ => IndexMap::new(),
		};
		Self { values }
	}

	/// Overrides one default value
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// TOML file configuration source
///
/// A missing file contributes nothing.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Create a new TOML file configuration source
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Value = toml::from_str(&content)?;

		// Convert TOML value to JSON value
		let json_value = serde_json::to_value(&toml_value)?;

		let map = json_value
			.as_object()
			.ok_or_else(|| ConfError::Parse("Expected table at root".to_string()))?;

		Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Environment variable configuration source
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Reads variables starting with `prefix`
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// Reads `REPORTGRID_*` variables
	pub fn reportgrid() -> Self {
		Self::new(ENV_PREFIX)
	}

	/// Converts `(name, value)` pairs the way [`ConfigSource::load`] does
	///
	/// Names lose the prefix and are lowercased. Keys ending in `_options` are
	/// split on commas; other values become integers or booleans when they parse
	/// as such.
	pub fn parse_vars<I>(&self, vars: I) -> IndexMap<String, Value>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut config = IndexMap::new();
		for (key, value) in vars {
			let Some(clean_key) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let lower_key = clean_key.to_lowercase();
			let parsed = if lower_key.ends_with("_options") {
				Value::Array(
					value
						.split(',')
						.map(str::trim)
						.filter(|s| !s.is_empty())
						.map(parse_scalar)
						.collect(),
				)
			} else {
				parse_scalar(&value)
			};
			config.insert(lower_key, parsed);
		}
		config
	}
}

fn parse_scalar(value: &str) -> Value {
	if let Ok(num) = value.trim().parse::<i64>() {
		Value::Number(num.into())
	} else if let Ok(b) = value.trim().parse::<bool>() {
		Value::Bool(b)
	} else {
		Value::String(value.to_string())
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		Ok(self.parse_vars(std::env::vars()))
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// Merges configuration sources into [`GridSettings`]
///
/// ```
/// use reportgrid_conf::{DefaultSource, SettingsLoader};
/// use serde_json::json;
///
/// let settings = SettingsLoader::new()
///     .add_source(DefaultSource::new().with_value("default_page_size", json!(50)))
///     .load()
///     .unwrap();
///
/// assert_eq!(settings.default_page_size, 50);
/// assert_eq!(settings.placeholder_row_limit, 15);
/// ```
#[derive(Default)]
pub struct SettingsLoader {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsLoader {
	/// Creates a loader with no sources
	pub fn new() -> Self {
		Self::default()
	}

	/// Defaults, then `path` if given, then `REPORTGRID_*` variables
	pub fn standard(path: Option<PathBuf>) -> Self {
		let mut loader = Self::new().add_source(DefaultSource::new());
		if let Some(path) = path {
			loader = loader.add_source(TomlFileSource::new(path));
		}
		loader.add_source(EnvSource::reportgrid())
	}

	/// Adds a source
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads and merges every source, lowest priority first
	pub fn load(&self) -> Result<GridSettings> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		ordered.sort_by_key(|s| s.priority());

		let mut merged = serde_json::Map::new();
		for source in ordered {
			let values = source.load()?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"Loaded settings source"
			);
			merged.extend(values);
		}

		let settings: GridSettings = serde_json::from_value(Value::Object(merged))?;
		settings.validate()?;
		Ok(settings)
	}
}
