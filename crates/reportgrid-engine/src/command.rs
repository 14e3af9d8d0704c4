//! Commands accepted by a grid and the data requests it emits

use reportgrid_core::{Row, RowKey, SortDirection};
use reportgrid_query::RequestSeq;

/// A discrete user or caller action applied to a grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridCommand {
	/// Replace the search text (local mode)
	SetSearchText(String),
	/// Clear the search text (local mode)
	ClearSearch,
	/// Header click on the column with this key
	ToggleSort(String),
	/// Move to a page; out-of-range values are clamped
	GoToPage(i64),
	/// Change the page size
	SetPageSize(usize),
	/// Checkbox click on a visible row
	ToggleRowSelection {
		/// Identity of the clicked row
		key: RowKey,
		/// Position of the row within the current page
		visible_index: usize,
		/// Whether shift was held
		shift: bool,
	},
	/// Header checkbox click
	ToggleSelectAllVisible,
	/// Expand or collapse a row
	ToggleRowExpansion(RowKey),
	/// Ask the data source for fresh data
	RequestRefresh,
}

/// Signal that the grid needs data from its source
///
/// Carries everything a controlled data source needs to produce the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
	/// Sequence number to echo back in the matching [`DataResponse`]
	pub seq: RequestSeq,
	/// Page requested (1-indexed)
	pub page: usize,
	/// Rows per page
	pub page_size: usize,
	/// Source field of the active sort column
	pub sort_field: Option<String>,
	/// Active sort direction, present when `sort_field` is
	pub sort_direction: Option<SortDirection>,
}

/// Data handed back to the grid by its source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataResponse {
	/// Rows: the full dataset in local mode, one page in controlled mode
	pub rows: Vec<Row>,
	/// Total rows of the full result (controlled mode)
	pub total_rows: usize,
	/// Total pages of the full result (controlled mode)
	pub total_pages: usize,
}
