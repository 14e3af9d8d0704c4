//! Metric/dimension selection for ad-hoc reports

use crate::catalog::ReportCatalog;
use crate::request::{Paging, ReportRequest, Sorting};
use reportgrid_core::Column;

/// Dimensions selected when a report is first opened
pub const DEFAULT_DIMENSIONS: [&str; 3] = ["account_id", "campaign_id", "sys_creation_date"];

/// Page sizes offered by report grids
pub const REPORT_PAGE_SIZE_OPTIONS: [usize; 8] = [5, 10, 20, 50, 100, 250, 500, 1000];

/// Page size of a report grid when no preference is stored
pub const REPORT_DEFAULT_PAGE_SIZE: usize = 5;

/// Tracks which catalog fields are part of the report
///
/// Selections are held by selector (the field's source name). Toggling a
/// field only changes the field lists; the grid decides when to refetch.
///
/// ```
/// use reportgrid_query::{ReportBuilder, ReportCatalog, Sorting};
///
/// let catalog = ReportCatalog::from_json_str(r#"{
///     "metrics": [{"key": "clicks", "label": "Clicks"}],
///     "dimensions": [{"key": "campaign_id", "label": "Campaign"}]
/// }"#).unwrap();
///
/// let mut builder = ReportBuilder::new(catalog);
/// builder.set_metric("clicks", true);
///
/// let keys: Vec<_> = builder.visible_columns().iter().map(|c| c.key().to_string()).collect();
/// assert_eq!(keys, vec!["clicks", "campaign_id"]);
///
/// let request = builder.request(1, 5, Sorting::default()).unwrap();
/// assert_eq!(request.metrics, vec!["clicks"]);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
	catalog: ReportCatalog,
	metrics: Vec<String>,
	dimensions: Vec<String>,
}

impl ReportBuilder {
	/// Starts with no metrics and the default dimensions
	pub fn new(catalog: ReportCatalog) -> Self {
		Self {
			catalog,
			metrics: Vec::new(),
			dimensions: DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect(),
		}
	}

	/// Replaces both selections
	pub fn with_selection(mut self, metrics: Vec<String>, dimensions: Vec<String>) -> Self {
		self.metrics = metrics;
		self.dimensions = dimensions;
		self
	}

	/// The field catalog
	pub fn catalog(&self) -> &ReportCatalog {
		&self.catalog
	}

	/// Selected metric selectors, in selection order
	pub fn metrics(&self) -> &[String] {
		&self.metrics
	}

	/// Selected dimension selectors, in selection order
	pub fn dimensions(&self) -> &[String] {
		&self.dimensions
	}

	/// Checks or unchecks a metric; returns whether the selection changed
	pub fn set_metric(&mut self, selector: &str, checked: bool) -> bool {
		set_field(&mut self.metrics, selector, checked)
	}

	/// Checks or unchecks a dimension; returns whether the selection changed
	pub fn set_dimension(&mut self, selector: &str, checked: bool) -> bool {
		set_field(&mut self.dimensions, selector, checked)
	}

	/// Returns true when nothing is selected and no request should be made
	pub fn is_empty(&self) -> bool {
		self.metrics.is_empty() && self.dimensions.is_empty()
	}

	/// Selected catalog fields as grid columns: metrics, then dimensions, in catalog order
	pub fn visible_columns(&self) -> Vec<Column> {
		self.catalog
			.fields()
			.filter(|field| {
				let selector = field.selector().to_string();
				self.metrics.contains(&selector) || self.dimensions.contains(&selector)
			})
			.map(|field| field.to_column())
			.collect()
	}

	/// Builds the query for one page, or `None` when nothing is selected
	pub fn request(&self, page: usize, size: usize, sorting: Sorting) -> Option<ReportRequest> {
		if self.is_empty() {
			tracing::debug!("No metrics or dimensions selected; skipping report request");
			return None;
		}
		Some(ReportRequest {
			dimensions: self.dimensions.clone(),
			metrics: self.metrics.clone(),
			paging: Paging { page, size },
			sorting,
		})
	}
}

fn set_field(fields: &mut Vec<String>, selector: &str, checked: bool) -> bool {
	let present = fields.iter().any(|f| f == selector);
	match (checked, present) {
		(true, false) => {
			fields.push(selector.to_string());
			true
		}
		(false, true) => {
			fields.retain(|f| f != selector);
			true
		}
		_ => false,
	}
}
