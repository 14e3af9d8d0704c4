//! Render snapshot handed to the UI layer

use reportgrid_core::{
	HeaderCheckboxState, PageNavigation, RangeSummary, Row, RowKey, SortDirection, SortIndicator,
};

/// Header cell of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
	/// Column key
	pub key: String,
	/// Header label
	pub label: String,
	/// Sort marker to draw; `None` also means header clicks are ignored
	pub sort: SortIndicator,
}

/// One visible row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
	/// Row identity, when the row has one
	pub key: Option<RowKey>,
	/// Position within the current page
	pub index: usize,
	/// Display value of each column, in column order
	pub cells: Vec<String>,
	/// Whether the row is selected
	pub selected: bool,
	/// Whether the row is expanded
	pub expanded: bool,
	/// The raw row, for custom expanded content
	pub row: Row,
}

/// Everything needed to render a grid once
///
/// A committed snapshot: later commands never change an existing view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
	/// Header cells
	pub columns: Vec<ColumnView>,
	/// Rows of the current page
	pub rows: Vec<RowView>,
	/// Current search text
	pub search_text: String,
	/// Key of the active sort column
	pub sort_column: Option<String>,
	/// Active sort direction
	pub sort_direction: SortDirection,
	/// Current page (1-indexed)
	pub current_page: usize,
	/// Active page size
	pub page_size: usize,
	/// Page-size choices, including the active one
	pub page_size_options: Vec<usize>,
	/// Number of pages
	pub total_pages: usize,
	/// Number of rows across all pages
	pub total_rows: usize,
	/// Page buttons to show
	pub visible_pages: Vec<usize>,
	/// Usable navigation buttons
	pub navigation: PageNavigation,
	/// "Showing X to Y of Z entries"
	pub summary: RangeSummary,
	/// Every selected key, including rows not on this page
	pub selected_row_keys: Vec<RowKey>,
	/// Every expanded key, including rows not on this page
	pub expanded_row_keys: Vec<RowKey>,
	/// State of the select-all checkbox, when selection is enabled
	pub header_checkbox: Option<HeaderCheckboxState>,
	/// First request outstanding
	pub is_loading: bool,
	/// Later request outstanding
	pub is_refreshing: bool,
	/// Skeleton rows to draw while loading
	pub placeholder_rows: usize,
	/// Whether export actions are enabled
	pub can_export: bool,
}

impl GridView {
	/// Number of selected rows
	pub fn selected_count(&self) -> usize {
		self.selected_row_keys.len()
	}

	/// True when the "no rows" state should be shown
	pub fn is_empty(&self) -> bool {
		!self.is_loading && self.rows.is_empty()
	}
}
