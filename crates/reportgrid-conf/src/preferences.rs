//! Typed access to persisted preferences

use crate::error::Result;
use crate::store::PreferenceStore;
use serde_json::Value;
use std::sync::Arc;

/// Process-wide key for the last chosen page size, shared by every grid
pub const PAGE_SIZE_KEY: &str = "table_size";

/// Typed facade over a [`PreferenceStore`]
///
/// ```
/// use reportgrid_conf::{MemoryStore, Preferences};
/// use std::sync::Arc;
///
/// let prefs = Preferences::new(Arc::new(MemoryStore::new()));
/// assert_eq!(prefs.page_size(), None);
///
/// prefs.set_page_size(50).unwrap();
/// assert_eq!(prefs.page_size(), Some(50));
/// assert_eq!(prefs.resolve_page_size(None, 30), 50);
/// assert_eq!(prefs.resolve_page_size(Some(10), 30), 10);
/// ```
#[derive(Clone)]
pub struct Preferences {
	store: Arc<dyn PreferenceStore>,
}

impl Preferences {
	/// Wraps a store
	pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
		Self { store }
	}

	/// Last chosen page size, if one is stored and valid
	///
	/// Read failures and malformed values are logged and treated as absent.
	pub fn page_size(&self) -> Option<usize> {
		match self.store.get(PAGE_SIZE_KEY) {
			Ok(Some(value)) => parse_page_size(&value),
			Ok(None) => None,
			Err(e) => {
				tracing::warn!(error = %e, key = PAGE_SIZE_KEY, "Failed to read stored page size");
				None
			}
		}
	}

	/// Stores the chosen page size
	pub fn set_page_size(&self, size: usize) -> Result<()> {
		self.store.set(PAGE_SIZE_KEY, Value::from(size as u64))
	}

	/// Initial page size: explicit > stored > default
	pub fn resolve_page_size(&self, explicit: Option<usize>, default: usize) -> usize {
		explicit
			.filter(|size| *size > 0)
			.or_else(|| self.page_size())
			.unwrap_or(default)
	}
}

/// Accepts positive integers, also when stored as strings.
fn parse_page_size(value: &Value) -> Option<usize> {
	let size = match value {
		Value::Number(n) => n.as_u64(),
		Value::String(s) => s.trim().parse::<u64>().ok(),
		_ => None,
	}?;
	(size > 0).then_some(size as usize)
}
