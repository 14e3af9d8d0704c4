//! Grid state

use reportgrid_core::{Expansion, Pagination, SearchFilter, Selection, SortState};

/// Everything a grid remembers between commands
///
/// Created with defaults when the grid is mounted: page 1, ascending, nothing
/// selected or expanded.
#[derive(Debug, Clone)]
pub struct GridState {
	pub(crate) search: SearchFilter,
	pub(crate) sort: SortState,
	pub(crate) pagination: Pagination,
	pub(crate) selection: Selection,
	pub(crate) expansion: Expansion,
	pub(crate) is_loading: bool,
	pub(crate) is_refreshing: bool,
	pub(crate) has_requested: bool,
}

impl GridState {
	pub(crate) fn new(
		search: SearchFilter,
		pagination: Pagination,
		selection: Selection,
	) -> Self {
		Self {
			search,
			sort: SortState::new(),
			pagination,
			selection,
			expansion: Expansion::new(),
			is_loading: false,
			is_refreshing: false,
			has_requested: false,
		}
	}

	/// Current search text
	pub fn search_text(&self) -> &str {
		self.search.text()
	}

	/// Active sort column and direction
	pub fn sort(&self) -> &SortState {
		&self.sort
	}

	/// Page arithmetic
	pub fn pagination(&self) -> &Pagination {
		&self.pagination
	}

	/// Current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.pagination.current_page()
	}

	/// Active page size
	pub fn page_size(&self) -> usize {
		self.pagination.page_size()
	}

	/// Selected rows
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Expanded rows
	pub fn expansion(&self) -> &Expansion {
		&self.expansion
	}

	/// True while the first data request is outstanding
	pub fn is_loading(&self) -> bool {
		self.is_loading
	}

	/// True while a later data request is outstanding
	pub fn is_refreshing(&self) -> bool {
		self.is_refreshing
	}

	pub(crate) fn begin_request(&mut self) {
		if self.has_requested {
			self.is_refreshing = true;
		} else {
			self.is_loading = true;
			self.has_requested = true;
		}
	}

	pub(crate) fn end_request(&mut self) {
		self.is_loading = false;
		self.is_refreshing = false;
	}
}
