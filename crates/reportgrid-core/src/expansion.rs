//! Per-row expand/collapse state

use crate::model::RowKey;
use indexmap::IndexSet;

/// Set of expanded rows
///
/// Independent of selection and pagination: a row that scrolls off the current
/// page keeps its expanded state until it is toggled again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
	expanded: IndexSet<RowKey>,
}

impl Expansion {
	/// Creates an empty expansion set
	pub fn new() -> Self {
		Self::default()
	}

	/// Flips the expanded state of `key`, returning the new state
	pub fn toggle(&mut self, key: &RowKey) -> bool {
		if self.expanded.shift_remove(key) {
			false
		} else {
			self.expanded.insert(key.clone());
			true
		}
	}

	/// Returns true if `key` is expanded
	pub fn is_expanded(&self, key: &RowKey) -> bool {
		self.expanded.contains(key)
	}

	/// Expanded keys in the order they were expanded
	pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
		self.expanded.iter()
	}

	/// Returns the number of expanded rows
	pub fn len(&self) -> usize {
		self.expanded.len()
	}

	/// Returns true if no row is expanded
	pub fn is_empty(&self) -> bool {
		self.expanded.is_empty()
	}

	/// Collapses every row
	pub fn clear(&mut self) {
		self.expanded.clear();
	}
}
