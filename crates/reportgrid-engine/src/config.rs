//! Per-grid configuration

use reportgrid_conf::GridSettings;
use reportgrid_core::{Column, ShiftAnchor};

/// Row identity field used when none is configured
pub const DEFAULT_ROW_KEY: &str = "key";

/// How a grid obtains its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceMode {
	/// The grid holds the full dataset and filters, sorts and pages it itself
	#[default]
	Local,
	/// An external data source pages and sorts; the grid holds one page
	Controlled,
}

/// Configuration of one grid instance
///
/// ```
/// use reportgrid_core::Column;
/// use reportgrid_engine::{DataSourceMode, GridConfig};
///
/// let config = GridConfig::local(vec![Column::new("name", "Name")])
///     .row_key("id")
///     .searchable(["name"])
///     .selectable(true);
///
/// assert_eq!(config.mode, DataSourceMode::Local);
/// assert_eq!(config.default_page_size, 30);
/// ```
#[derive(Debug, Clone)]
pub struct GridConfig {
	/// Column definitions, keys unique
	pub columns: Vec<Column>,
	/// Field holding each row's identity
	pub row_key: String,
	/// Local or controlled data
	pub mode: DataSourceMode,
	/// Column keys the search text is matched against (local mode)
	pub searchable: Vec<String>,
	/// Whether rows have selection checkboxes
	pub selectable: bool,
	/// Whether rows can be expanded
	pub expandable: bool,
	/// Page size chosen by the caller; wins over the stored preference
	pub page_size: Option<usize>,
	/// Page size when neither the caller nor the preference picks one
	pub default_page_size: usize,
	/// Page sizes offered to the user
	pub page_size_options: Vec<usize>,
	/// Upper bound on skeleton rows while loading
	pub placeholder_row_limit: usize,
	/// Anchor policy for repeated shift-clicks
	pub shift_anchor: ShiftAnchor,
}

impl GridConfig {
	fn with_mode(columns: Vec<Column>, mode: DataSourceMode) -> Self {
		let settings = GridSettings::default();
		Self {
			columns,
			row_key: DEFAULT_ROW_KEY.to_string(),
			mode,
			searchable: Vec::new(),
			selectable: false,
			expandable: false,
			page_size: None,
			default_page_size: settings.default_page_size,
			page_size_options: settings.page_size_options,
			placeholder_row_limit: settings.placeholder_row_limit,
			shift_anchor: ShiftAnchor::default(),
		}
	}

	/// A grid that holds and processes its whole dataset
	pub fn local(columns: Vec<Column>) -> Self {
		Self::with_mode(columns, DataSourceMode::Local)
	}

	/// A grid driven by an external data source
	pub fn controlled(columns: Vec<Column>) -> Self {
		Self::with_mode(columns, DataSourceMode::Controlled)
	}

	/// Applies process-wide settings (page sizes and placeholder limit)
	pub fn settings(mut self, settings: &GridSettings) -> Self {
		self.default_page_size = settings.default_page_size;
		self.page_size_options = settings.page_size_options.clone();
		self.placeholder_row_limit = settings.placeholder_row_limit;
		self
	}

	/// Sets the row identity field
	pub fn row_key(mut self, field: impl Into<String>) -> Self {
		self.row_key = field.into();
		self
	}

	/// Sets the searchable column keys
	pub fn searchable<I, S>(mut self, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.searchable = columns.into_iter().map(Into::into).collect();
		self
	}

	/// Enables row selection
	pub fn selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	/// Enables row expansion
	pub fn expandable(mut self, expandable: bool) -> Self {
		self.expandable = expandable;
		self
	}

	/// Fixes the initial page size
	pub fn page_size(mut self, size: usize) -> Self {
		self.page_size = Some(size);
		self
	}

	/// Sets the fallback page size
	pub fn default_page_size(mut self, size: usize) -> Self {
		self.default_page_size = size;
		self
	}

	/// Sets the offered page sizes
	pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
		self.page_size_options = options;
		self
	}

	/// Caps the number of placeholder rows shown while loading
	pub fn placeholder_row_limit(mut self, limit: usize) -> Self {
		self.placeholder_row_limit = limit;
		self
	}

	/// Sets the shift-click anchor policy
	pub fn shift_anchor(mut self, anchor: ShiftAnchor) -> Self {
		self.shift_anchor = anchor;
		self
	}

	/// Returns true if rows need a usable identity
	pub fn needs_row_keys(&self) -> bool {
		self.selectable || self.expandable
	}
}
