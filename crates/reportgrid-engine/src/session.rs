//! Async driver tying a controlled grid to a report data source

use crate::command::{DataRequest, DataResponse, GridCommand};
use crate::config::GridConfig;
use crate::error::EngineResult;
use crate::grid::Grid;
use crate::view::GridView;
use reportgrid_conf::Preferences;
use reportgrid_export::{ExportFormat, ExportResult};
use reportgrid_query::{
	REPORT_DEFAULT_PAGE_SIZE, REPORT_PAGE_SIZE_OPTIONS, ReportBuilder, ReportSource, Sorting,
};

/// Row identity field of report rows
pub const REPORT_ROW_KEY: &str = "id";

/// Most placeholder rows a report grid shows while a page loads
pub const REPORT_PLACEHOLDER_ROW_LIMIT: usize = 10;

/// A report grid bound to its data source
///
/// Every command that needs data is turned into a report query, sent to the
/// source and the answer fed back through the grid's sequence check. Only one
/// fetch is in flight per call; a caller that issues commands concurrently
/// should hold the session behind its own lock.
pub struct ReportSession<S> {
	grid: Grid,
	builder: ReportBuilder,
	source: S,
}

impl<S: ReportSource> ReportSession<S> {
	/// Creates a session without persisted preferences
	///
	/// Nothing is fetched until [`ReportSession::load`] is awaited.
	pub fn new(builder: ReportBuilder, source: S) -> EngineResult<Self> {
		let grid = Grid::new(Self::grid_config(&builder))?;
		Ok(Self {
			grid,
			builder,
			source,
		})
	}

	/// Creates a session whose page size is seeded from `preferences`
	pub fn with_preferences(
		builder: ReportBuilder,
		source: S,
		preferences: Preferences,
	) -> EngineResult<Self> {
		let grid = Grid::with_preferences(Self::grid_config(&builder), preferences)?;
		Ok(Self {
			grid,
			builder,
			source,
		})
	}

	fn grid_config(builder: &ReportBuilder) -> GridConfig {
		GridConfig::controlled(builder.visible_columns())
			.row_key(REPORT_ROW_KEY)
			.default_page_size(REPORT_DEFAULT_PAGE_SIZE)
			.page_size_options(REPORT_PAGE_SIZE_OPTIONS.to_vec())
			.placeholder_row_limit(REPORT_PLACEHOLDER_ROW_LIMIT)
	}

	/// The underlying grid
	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	/// Metric and dimension selection
	pub fn builder(&self) -> &ReportBuilder {
		&self.builder
	}

	/// The data source
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Returns true when no metric or dimension is selected
	pub fn is_nothing_selected(&self) -> bool {
		self.builder.is_empty()
	}

	/// Render snapshot of the grid
	pub fn view(&self) -> GridView {
		self.grid.view()
	}

	/// Fetches the current page
	///
	/// Returns `Ok(true)` when a response was applied.
	pub async fn load(&mut self) -> EngineResult<bool> {
		if self.builder.is_empty() {
			tracing::debug!("Nothing selected; skipping report load");
			return Ok(false);
		}
		let request = self.grid.request_data();
		self.fetch(request).await
	}

	/// Applies a command and performs the fetch it asks for, if any
	pub async fn apply(&mut self, command: GridCommand) -> EngineResult<bool> {
		match self.grid.apply(command)? {
			Some(request) => self.fetch(request).await,
			None => Ok(false),
		}
	}

	/// Checks or unchecks a metric and reloads
	pub async fn set_metric(&mut self, selector: &str, checked: bool) -> EngineResult<bool> {
		if !self.builder.set_metric(selector, checked) {
			return Ok(false);
		}
		self.selection_changed().await
	}

	/// Checks or unchecks a dimension and reloads
	pub async fn set_dimension(&mut self, selector: &str, checked: bool) -> EngineResult<bool> {
		if !self.builder.set_dimension(selector, checked) {
			return Ok(false);
		}
		self.selection_changed().await
	}

	/// Serializes the held page for download
	pub fn export(&self, format: ExportFormat, filename: Option<&str>) -> EngineResult<ExportResult> {
		self.grid.export(format, filename)
	}

	async fn selection_changed(&mut self) -> EngineResult<bool> {
		self.grid.set_columns(self.builder.visible_columns())?;
		if self.builder.is_empty() {
			self.grid.set_data(Vec::new())?;
			self.grid.set_totals(0, 0);
			return Ok(false);
		}
		self.load().await
	}

	async fn fetch(&mut self, request: DataRequest) -> EngineResult<bool> {
		let sorting = match (request.sort_field, request.sort_direction) {
			(Some(field), Some(direction)) => Sorting::by(field, direction),
			_ => Sorting::default(),
		};
		let Some(query) = self
			.builder
			.request(request.page, request.page_size, sorting)
		else {
			self.grid.abandon_request(request.seq);
			return Ok(false);
		};

		match self.source.fetch(&query).await {
			Ok(response) => {
				let data = DataResponse {
					rows: response.data,
					total_rows: response.paging.total_records,
					total_pages: response.paging.total_pages,
				};
				self.grid.receive(request.seq, data)
			}
			Err(e) if e.is_cancelled() => {
				tracing::debug!(seq = %request.seq, "Report fetch cancelled");
				self.grid.abandon_request(request.seq);
				Ok(false)
			}
			Err(e) => {
				tracing::warn!(
					seq = %request.seq,
					error = %e,
					code = ?e.error_code(),
					"Report fetch failed"
				);
				self.grid.fail_request(request.seq);
				Err(e.into())
			}
		}
	}
}
