//! # reportgrid-conf
//!
//! Layered settings and persisted preferences for report grids.
//!
//! ## Settings
//!
//! [`SettingsLoader`] merges [`ConfigSource`]s by priority into [`GridSettings`]:
//! built-in defaults, an optional TOML file, then `REPORTGRID_*` environment variables.
//!
//! ## Preferences
//!
//! The last chosen page size is stored under the process-wide key
//! [`PAGE_SIZE_KEY`] in a [`PreferenceStore`], so every grid shares it. It is
//! read when a grid is created and written whenever the page size changes.

pub mod error;
pub mod preferences;
pub mod settings;
pub mod store;

pub use error::{ConfError, Result};
pub use preferences::{PAGE_SIZE_KEY, Preferences};
pub use settings::{
	ConfigSource, DefaultSource, ENV_PREFIX, EnvSource, GridSettings, SettingsLoader,
	TomlFileSource,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};

use std::sync::Arc;

/// Opens the preference store selected by `settings`
///
/// A configured `preferences_path` gives a [`FileStore`]; otherwise preferences
/// live in a fresh [`MemoryStore`].
pub fn open_preferences(settings: &GridSettings) -> Preferences {
	let store: Arc<dyn PreferenceStore> = match &settings.preferences_path {
		Some(path) => Arc::new(FileStore::new(path.clone())),
		None => Arc::new(MemoryStore::new()),
	};
	Preferences::new(store)
}
