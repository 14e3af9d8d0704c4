//! Preference stores
//!
//! A [`PreferenceStore`] is a flat key/value map of JSON values shared by every
//! grid in the process. Two backends are provided:
//!
//! - [`MemoryStore`]: in-process only, lost on exit
//! - [`FileStore`]: a JSON object on disk, created on first write

use crate::error::{ConfError, Result};
use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key/value storage for process-wide preferences
pub trait PreferenceStore: Send + Sync {
	/// Reads a value
	fn get(&self, key: &str) -> Result<Option<Value>>;

	/// Writes a value, replacing any previous one
	fn set(&self, key: &str, value: Value) -> Result<()>;

	/// Removes a value, returning whether it existed
	fn remove(&self, key: &str) -> Result<bool>;
}

/// In-memory preference store
///
/// Cloning shares the underlying map.
///
/// ```
/// use reportgrid_conf::{MemoryStore, PreferenceStore};
/// use serde_json::json;
///
/// let store = MemoryStore::new();
/// store.set("table_size", json!(50)).unwrap();
/// assert_eq!(store.get("table_size").unwrap(), Some(json!(50)));
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
	data: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
	/// Create a new memory store
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored keys
	pub fn len(&self) -> usize {
		self.data.read().len()
	}

	/// Returns true if nothing is stored
	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<Value>> {
		Ok(self.data.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: Value) -> Result<()> {
		self.data.write().insert(key.to_string(), value);
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<bool> {
		Ok(self.data.write().remove(key).is_some())
	}
}

/// Preference store backed by a JSON file
///
/// The file holds one JSON object. A missing or empty file reads as an empty
/// store; parent directories are created on first write.
pub struct FileStore {
	path: PathBuf,
	lock: Mutex<()>,
}

impl FileStore {
	/// Create a file store at `path`
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: Mutex::new(()),
		}
	}

	/// Path of the backing file
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_map(&self) -> Result<IndexMap<String, Value>> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}
		let content = fs::read_to_string(&self.path)?;
		if content.trim().is_empty() {
			return Ok(IndexMap::new());
		}
		match serde_json::from_str::<Value>(&content)? {
			Value::Object(map) => Ok(map.into_iter().collect()),
			_ => Err(ConfError::Parse(format!(
				"{}: expected a JSON object at root",
				self.path.display()
			))),
		}
	}

	fn write_map(&self, map: &IndexMap<String, Value>) -> Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}
		fs::write(&self.path, serde_json::to_vec_pretty(map)?)?;
		tracing::debug!(path = %self.path.display(), keys = map.len(), "Wrote preferences");
		Ok(())
	}
}

impl PreferenceStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<Value>> {
		let _guard = self.lock.lock();
		Ok(self.read_map()?.get(key).cloned())
	}

	fn set(&self, key: &str, value: Value) -> Result<()> {
		let _guard = self.lock.lock();
		let mut map = self.read_map()?;
		map.insert(key.to_string(), value);
		self.write_map(&map)
	}

	fn remove(&self, key: &str) -> Result<bool> {
		let _guard = self.lock.lock();
		let mut map = self.read_map()?;
		if map.shift_remove(key).is_none() {
			return Ok(false);
		}
		self.write_map(&map)?;
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_memory_store_roundtrip() {
		let store = MemoryStore::new();
		store.set("a", json!(1)).unwrap();
		assert_eq!(store.get("a").unwrap(), Some(json!(1)));
		assert!(store.remove("a").unwrap());
		assert!(!store.remove("a").unwrap());
		assert!(store.is_empty());
	}

	#[test]
	fn test_memory_store_clones_share_data() {
		let store = MemoryStore::new();
		let other = store.clone();
		store.set("k", json!("v")).unwrap();
		assert_eq!(other.get("k").unwrap(), Some(json!("v")));
	}

	#[test]
	fn test_file_store_missing_file_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path().join("prefs.json"));
		assert_eq!(store.get("table_size").unwrap(), None);
		assert!(!store.remove("table_size").unwrap());
		assert!(!store.path().exists());
	}

	#[test]
	fn test_file_store_rejects_non_object() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("prefs.json");
		fs::write(&path, "[1, 2]").unwrap();
		let store = FileStore::new(&path);
		assert!(matches!(store.get("x"), Err(ConfError::Parse(_))));
	}
}
