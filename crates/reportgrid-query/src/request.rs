//! Wire types of the report query contract
//!
//! A request names the dimensions and metrics to aggregate, the page to return
//! and an optional sort; the response carries one page of rows plus totals.
//! Both serialize with camelCase field names.

use reportgrid_core::{Row, SortDirection};
use serde::{Deserialize, Serialize};

/// Page requested from the data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
	/// Page number (1-indexed)
	pub page: usize,
	/// Rows per page
	pub size: usize,
}

/// Sort requested from the data source; both fields are `null` when unsorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
	/// Source field name to sort by
	pub field: Option<String>,
	/// Sort direction
	pub direction: Option<SortDirection>,
}

impl Sorting {
	/// Sort by `field` in `direction`
	pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			field: Some(field.into()),
			direction: Some(direction),
		}
	}
}

/// Report query request
///
/// ```
/// use reportgrid_query::{Paging, ReportRequest, Sorting};
/// use reportgrid_core::SortDirection;
///
/// let request = ReportRequest {
///     dimensions: vec!["campaign_id".into()],
///     metrics: vec!["clicks".into()],
///     paging: Paging { page: 2, size: 20 },
///     sorting: Sorting::by("clicks", SortDirection::Descending),
/// };
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["sorting"]["direction"], "desc");
/// assert_eq!(json["paging"]["size"], 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
	/// Dimension fields to group by
	pub dimensions: Vec<String>,
	/// Metric fields to aggregate
	pub metrics: Vec<String>,
	/// Page to return
	pub paging: Paging,
	/// Sort to apply
	pub sorting: Sorting,
}

/// Totals reported alongside a page of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsePaging {
	/// Number of pages in the full result
	pub total_pages: usize,
	/// Number of rows in the full result
	pub total_records: usize,
}

/// Report query response
///
/// Missing fields decode as an empty page with zero totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportResponse {
	/// Rows of the requested page
	pub data: Vec<Row>,
	/// Totals of the full result
	pub paging: ResponsePaging,
}
