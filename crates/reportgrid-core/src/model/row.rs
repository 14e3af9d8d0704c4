//! Dataset rows and row identity

use crate::error::{GridError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Identity of a row within a dataset
///
/// Selection and expansion state is indexed by this value rather than by
/// position, so it survives sorting, filtering and paging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey(String);

impl RowKey {
	/// Creates a row key from its string form
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Derives a row key from a raw field value
	///
	/// Strings, numbers and booleans are usable identities; `null`, arrays and
	/// objects are not.
	pub fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(s) => Some(Self(s.clone())),
			Value::Number(n) => Some(Self(n.to_string())),
			Value::Bool(b) => Some(Self(b.to_string())),
			Value::Null | Value::Array(_) | Value::Object(_) => None,
		}
	}

	/// Returns the key as a string slice
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for RowKey {
	fn from(key: &str) -> Self {
		Self(key.to_string())
	}
}

impl From<String> for RowKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl From<i64> for RowKey {
	fn from(key: i64) -> Self {
		Self(key.to_string())
	}
}

/// A single dataset row: an ordered mapping from field name to value
///
/// Field order is preserved, which matters for export where the first row's
/// fields become the CSV header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field and returns the row (builder style)
	pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(field.into(), value.into());
		self
	}

	/// Sets a field value, replacing any previous value
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.0.insert(field.into(), value.into());
	}

	/// Returns the raw value of a field
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.0.get(field)
	}

	/// Returns the identity of this row, read from `key_field`
	pub fn key(&self, key_field: &str) -> Option<RowKey> {
		self.get(key_field).and_then(RowKey::from_value)
	}

	/// Iterates over field names in insertion order
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Iterates over `(field, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns the number of fields
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the row has no fields
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns a copy of this row with every explicitly `null` field removed
	pub fn without_nulls(&self) -> Row {
		Row(self
			.0
			.iter()
			.filter(|(_, v)| !v.is_null())
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect())
	}
}

impl From<IndexMap<String, Value>> for Row {
	fn from(fields: IndexMap<String, Value>) -> Self {
		Self(fields)
	}
}

impl FromIterator<(String, Value)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Checks that every row has a usable, unique identity in `key_field`
pub fn validate_rows(rows: &[Row], key_field: &str) -> Result<()> {
	let mut seen = HashSet::with_capacity(rows.len());
	for (index, row) in rows.iter().enumerate() {
		let key = row.key(key_field).ok_or_else(|| GridError::MissingRowKey {
			index,
			field: key_field.to_string(),
		})?;
		if !seen.insert(key.clone()) {
			return Err(GridError::DuplicateRowKey(key));
		}
	}
	Ok(())
}
