//! Row selection state
//!
//! Selection is keyed by [`RowKey`] so it survives sorting, filtering and page
//! changes, but every bulk operation (shift-click ranges, select-all, the
//! header checkbox) only looks at the rows of the current page.

use crate::model::RowKey;
use indexmap::IndexSet;

/// Which index a repeated shift-click extends from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftAnchor {
	/// Keep the index of the last plain click; shift-clicks never move the anchor
	#[default]
	Original,
	/// Every click, shift or not, becomes the new anchor
	LastClicked,
}

/// Tri-state header checkbox derived from the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckboxState {
	/// No visible row is selected, or the page is empty
	Unchecked,
	/// Some but not all visible rows are selected
	Indeterminate,
	/// Every visible row is selected
	Checked,
}

/// Page-scoped row selection with shift-click ranges
#[derive(Debug, Clone, Default)]
pub struct Selection {
	selected: IndexSet<RowKey>,
	last_selected_index: Option<usize>,
	anchor: ShiftAnchor,
}

impl Selection {
	/// Creates an empty selection using the default anchor policy
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty selection with the given anchor policy
	pub fn with_anchor(anchor: ShiftAnchor) -> Self {
		Self {
			anchor,
			..Self::default()
		}
	}

	/// Returns the anchor policy
	pub fn anchor(&self) -> ShiftAnchor {
		self.anchor
	}

	/// Index within the visible page of the last anchoring click
	pub fn last_selected_index(&self) -> Option<usize> {
		self.last_selected_index
	}

	/// Check if a row is selected.
	pub fn is_selected(&self, key: &RowKey) -> bool {
		self.selected.contains(key)
	}

	/// Selected keys in the order they were selected
	pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
		self.selected.iter()
	}

	/// Get the number of selected rows.
	pub fn len(&self) -> usize {
		self.selected.len()
	}

	/// Check if nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	/// Clears the selection and the shift anchor
	pub fn clear(&mut self) {
		self.selected.clear();
		self.last_selected_index = None;
	}

	/// Applies a checkbox click on the row at `visible_index` of the current page
	///
	/// `visible` lists the keys of the current page in display order. A plain
	/// click flips the row and records `visible_index` as the anchor. A
	/// shift-click with an anchor applies the clicked row's new state to every
	/// visible row between the anchor and the click: if the clicked row was
	/// selected the whole range is deselected, otherwise it is selected.
	pub fn toggle_row(
		&mut self,
		key: &RowKey,
		visible_index: usize,
		shift: bool,
		visible: &[RowKey],
	) {
		let anchor = match self.last_selected_index {
			Some(anchor) if shift => anchor,
			_ => {
				if !self.selected.shift_remove(key) {
					self.selected.insert(key.clone());
				}
				self.last_selected_index = Some(visible_index);
				return;
			}
		};

		let start = anchor.min(visible_index).min(visible.len());
		let end = (anchor.max(visible_index) + 1).min(visible.len());
		let range = &visible[start..end];

		if self.selected.contains(key) {
			for k in range {
				self.selected.shift_remove(k);
			}
		} else {
			self.selected.extend(range.iter().cloned());
		}

		if self.anchor == ShiftAnchor::LastClicked {
			self.last_selected_index = Some(visible_index);
		}
	}

	/// Selects every visible row, or deselects them all if they already are
	///
	/// Rows outside `visible` are never touched. An empty page is a no-op.
	pub fn toggle_all_visible(&mut self, visible: &[RowKey]) {
		if visible.is_empty() {
			return;
		}
		if self.all_selected(visible) {
			for key in visible {
				self.selected.shift_remove(key);
			}
		} else {
			self.selected.extend(visible.iter().cloned());
		}
	}

	/// Header checkbox state for the current page
	pub fn header_state(&self, visible: &[RowKey]) -> HeaderCheckboxState {
		let count = visible.iter().filter(|k| self.is_selected(k)).count();
		match count {
			0 => HeaderCheckboxState::Unchecked,
			n if n == visible.len() => HeaderCheckboxState::Checked,
			_ => HeaderCheckboxState::Indeterminate,
		}
	}

	fn all_selected(&self, visible: &[RowKey]) -> bool {
		visible.iter().all(|k| self.is_selected(k))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn page() -> Vec<RowKey> {
		["A", "B", "C", "D"].into_iter().map(RowKey::from).collect()
	}

	fn keys(selection: &Selection) -> Vec<&str> {
		let mut keys: Vec<_> = selection.iter().map(RowKey::as_str).collect();
		keys.sort();
		keys
	}

	#[rstest]
	fn test_plain_toggle_is_an_involution(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_row(&page[0], 0, false, &page);
		assert!(selection.is_selected(&page[0]));
		selection.toggle_row(&page[0], 0, false, &page);
		assert!(selection.is_empty());
	}

	#[rstest]
	fn test_shift_click_selects_range(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_row(&page[0], 0, false, &page);
		selection.toggle_row(&page[3], 3, true, &page);
		assert_eq!(keys(&selection), vec!["A", "B", "C", "D"]);
	}

	#[rstest]
	fn test_shift_click_on_selected_row_deselects_range(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_all_visible(&page);
		selection.toggle_row(&page[1], 1, false, &page);
		selection.toggle_row(&page[1], 1, false, &page);
		selection.toggle_row(&page[3], 3, true, &page);
		assert_eq!(keys(&selection), vec!["A"]);
	}

	#[rstest]
	fn test_shift_click_without_anchor_acts_as_plain_click(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_row(&page[2], 2, true, &page);
		assert_eq!(keys(&selection), vec!["C"]);
		assert_eq!(selection.last_selected_index(), Some(2));
	}

	#[rstest]
	fn test_original_anchor_is_kept_after_shift_click(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_row(&page[1], 1, false, &page);
		selection.toggle_row(&page[3], 3, true, &page);
		selection.toggle_row(&page[0], 0, true, &page);

		assert_eq!(selection.last_selected_index(), Some(1));
		assert_eq!(keys(&selection), vec!["A", "B", "C", "D"]);
	}

	#[rstest]
	fn test_last_clicked_anchor_moves_on_shift_click(page: Vec<RowKey>) {
		let mut selection = Selection::with_anchor(ShiftAnchor::LastClicked);
		selection.toggle_row(&page[0], 0, false, &page);
		selection.toggle_row(&page[1], 1, true, &page);
		assert_eq!(selection.last_selected_index(), Some(1));

		// Range now runs from index 1, so A stays selected.
		selection.toggle_row(&page[3], 3, true, &page);
		assert_eq!(keys(&selection), vec!["A", "B", "C", "D"]);
		selection.toggle_row(&page[2], 2, true, &page);
		assert_eq!(keys(&selection), vec!["A", "B"]);
	}

	#[rstest]
	fn test_range_is_truncated_to_visible_rows(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		selection.toggle_row(&page[2], 2, false, &page);
		let shorter = &page[..2];
		selection.toggle_row(&page[0], 0, true, shorter);
		assert_eq!(keys(&selection), vec!["A", "B", "C"]);
	}

	#[rstest]
	fn test_toggle_all_visible_is_page_scoped(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		let elsewhere = RowKey::from("Z");
		selection.toggle_row(&elsewhere, 0, false, std::slice::from_ref(&elsewhere));
		selection.toggle_row(&page[1], 1, false, &page);

		selection.toggle_all_visible(&page);
		assert_eq!(selection.len(), 5);

		selection.toggle_all_visible(&page);
		assert_eq!(keys(&selection), vec!["Z"]);
	}

	#[rstest]
	fn test_toggle_all_on_empty_page_is_noop() {
		let mut selection = Selection::new();
		selection.toggle_all_visible(&[]);
		assert!(selection.is_empty());
	}

	#[rstest]
	fn test_header_state(page: Vec<RowKey>) {
		let mut selection = Selection::new();
		assert_eq!(selection.header_state(&page), HeaderCheckboxState::Unchecked);
		assert_eq!(selection.header_state(&[]), HeaderCheckboxState::Unchecked);

		selection.toggle_row(&page[0], 0, false, &page);
		assert_eq!(
			selection.header_state(&page),
			HeaderCheckboxState::Indeterminate
		);

		selection.toggle_all_visible(&page);
		assert_eq!(selection.header_state(&page), HeaderCheckboxState::Checked);
	}
}
