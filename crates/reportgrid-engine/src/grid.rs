//! The grid orchestrator
//!
//! A [`Grid`] owns one [`GridState`] and applies [`GridCommand`]s to it one at
//! a time. In local mode it filters, sorts and pages its own dataset. In
//! controlled mode sort, page and refresh commands produce a [`DataRequest`]
//! for the caller's data source, and only the response to the latest request
//! is applied.

use crate::command::{DataRequest, DataResponse, GridCommand};
use crate::config::{DataSourceMode, GridConfig};
use crate::error::{EngineError, EngineResult};
use crate::state::GridState;
use crate::view::{ColumnView, GridView, RowView};
use chrono::{DateTime, Local};
use reportgrid_conf::Preferences;
use reportgrid_core::{
	Column, Pagination, Row, RowKey, SearchFilter, Selection, SortState, page_size_options,
	sort_rows, validate_columns, validate_rows,
};
use reportgrid_export::{ExportBuilder, ExportFormat, ExportResult};
use reportgrid_query::{RequestSeq, RequestSequencer};

/// A data grid instance
///
/// # Example
///
/// ```
/// use reportgrid_core::{Column, Row};
/// use reportgrid_engine::{Grid, GridCommand, GridConfig};
///
/// let config = GridConfig::local(vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable(true),
/// ])
/// .row_key("id")
/// .searchable(["name"])
/// .page_size(2);
///
/// let mut grid = Grid::new(config).unwrap();
/// grid.set_data(vec![
///     Row::new().with("id", 1).with("name", "Carol"),
///     Row::new().with("id", 2).with("name", "alice"),
///     Row::new().with("id", 3).with("name", "Bob"),
/// ])
/// .unwrap();
///
/// grid.apply(GridCommand::SetSearchText("o".into())).unwrap();
/// let view = grid.view();
/// assert_eq!(view.total_rows, 2);
/// assert_eq!(view.rows[0].cells, vec!["1", "Carol"]);
/// ```
pub struct Grid {
	config: GridConfig,
	state: GridState,
	rows: Vec<Row>,
	derived: Vec<Row>,
	preferences: Option<Preferences>,
	sequencer: RequestSequencer,
}

impl Grid {
	/// Creates a grid without persisted preferences
	///
	/// # Errors
	///
	/// Fails on duplicate column keys or a zero page size.
	pub fn new(config: GridConfig) -> EngineResult<Self> {
		Self::build(config, None)
	}

	/// Creates a grid whose page size is seeded from and stored to `preferences`
	///
	/// The initial page size is the configured one if set, otherwise the stored
	/// preference, otherwise the configured default.
	pub fn with_preferences(config: GridConfig, preferences: Preferences) -> EngineResult<Self> {
		Self::build(config, Some(preferences))
	}

	fn build(config: GridConfig, preferences: Option<Preferences>) -> EngineResult<Self> {
		validate_columns(&config.columns)?;

		let page_size = match &preferences {
			Some(prefs) => prefs.resolve_page_size(config.page_size, config.default_page_size),
			None => config
				.page_size
				.filter(|size| *size > 0)
				.unwrap_or(config.default_page_size),
		};
		let pagination = Pagination::new(page_size)?;
		let search = SearchFilter::new(config.searchable.iter().cloned());
		let selection = Selection::with_anchor(config.shift_anchor);

		tracing::debug!(
			mode = ?config.mode,
			page_size,
			columns = config.columns.len(),
			"Created grid"
		);

		Ok(Self {
			state: GridState::new(search, pagination, selection),
			config,
			rows: Vec::new(),
			derived: Vec::new(),
			preferences,
			sequencer: RequestSequencer::new(),
		})
	}

	/// Grid configuration
	pub fn config(&self) -> &GridConfig {
		&self.config
	}

	/// Data source mode
	pub fn mode(&self) -> DataSourceMode {
		self.config.mode
	}

	/// Current state
	pub fn state(&self) -> &GridState {
		&self.state
	}

	/// Column definitions
	pub fn columns(&self) -> &[Column] {
		&self.config.columns
	}

	/// Rows eligible for export: the full filtered and sorted set in local
	/// mode, the held page in controlled mode
	pub fn result_rows(&self) -> &[Row] {
		match self.config.mode {
			DataSourceMode::Local => &self.derived,
			DataSourceMode::Controlled => &self.rows,
		}
	}

	/// Rows of the current page
	pub fn visible_rows(&self) -> &[Row] {
		match self.config.mode {
			DataSourceMode::Local => self.state.pagination.slice(&self.derived),
			DataSourceMode::Controlled => &self.rows,
		}
	}

	/// Keys of the rows on the current page, in display order
	pub fn visible_keys(&self) -> Vec<RowKey> {
		self.visible_rows()
			.iter()
			.filter_map(|row| row.key(&self.config.row_key))
			.collect()
	}

	/// Replaces the dataset
	///
	/// In local mode the search and sort are re-applied and the grid returns to
	/// page 1. In controlled mode the rows are taken as the current page.
	///
	/// # Errors
	///
	/// When selection or expansion is enabled, every row needs a unique identity.
	pub fn set_data(&mut self, rows: Vec<Row>) -> EngineResult<()> {
		if self.config.needs_row_keys() {
			validate_rows(&rows, &self.config.row_key)?;
		}
		tracing::debug!(rows = rows.len(), mode = ?self.config.mode, "Replacing grid data");
		self.rows = rows;
		if self.config.mode == DataSourceMode::Local {
			self.rederive();
			self.state.pagination.reset();
		}
		Ok(())
	}

	/// Records totals reported by the data source (controlled mode)
	pub fn set_totals(&mut self, total_rows: usize, total_pages: usize) {
		self.state.pagination.set_totals(total_rows, total_pages);
	}

	/// Replaces the column model, keeping rows, page and selection
	pub fn set_columns(&mut self, columns: Vec<Column>) -> EngineResult<()> {
		validate_columns(&columns)?;
		self.config.columns = columns;
		if self.config.mode == DataSourceMode::Local {
			self.rederive();
		}
		Ok(())
	}

	/// Applies one command
	///
	/// Returns a [`DataRequest`] when the data source must be asked for new data.
	///
	/// # Errors
	///
	/// Only [`GridCommand::SetPageSize`] with a zero size fails.
	pub fn apply(&mut self, command: GridCommand) -> EngineResult<Option<DataRequest>> {
		tracing::debug!(?command, "Applying grid command");
		match command {
			GridCommand::SetSearchText(text) => {
				self.set_search(text);
				Ok(None)
			}
			GridCommand::ClearSearch => {
				self.set_search(String::new());
				Ok(None)
			}
			GridCommand::ToggleSort(key) => Ok(self.toggle_sort(&key)),
			GridCommand::GoToPage(page) => Ok(self.go_to_page(page)),
			GridCommand::SetPageSize(size) => self.set_page_size(size),
			GridCommand::ToggleRowSelection {
				key,
				visible_index,
				shift,
			} => {
				if self.state.is_loading {
					tracing::debug!(%key, "Ignoring row selection while loading");
				} else if self.config.selectable {
					let visible = self.visible_keys();
					self.state
						.selection
						.toggle_row(&key, visible_index, shift, &visible);
				}
				Ok(None)
			}
			GridCommand::ToggleSelectAllVisible => {
				if self.state.is_loading {
					tracing::debug!("Ignoring select-all while loading");
				} else if self.config.selectable {
					let visible = self.visible_keys();
					self.state.selection.toggle_all_visible(&visible);
				}
				Ok(None)
			}
			GridCommand::ToggleRowExpansion(key) => {
				if self.config.expandable {
					self.state.expansion.toggle(&key);
				}
				Ok(None)
			}
			GridCommand::RequestRefresh => Ok(Some(self.request_data())),
		}
	}

	fn set_search(&mut self, text: String) {
		if self.config.mode == DataSourceMode::Controlled {
			tracing::debug!("Search text is only applied to locally held data; ignoring");
			return;
		}
		self.state.search.set_text(text);
		self.rederive();
		self.state.pagination.reset();
	}

	fn toggle_sort(&mut self, key: &str) -> Option<DataRequest> {
		if self.state.is_loading {
			tracing::debug!(column = key, "Ignoring sort while loading");
			return None;
		}
		let Some(column) = self.config.columns.iter().find(|c| c.key() == key) else {
			tracing::debug!(column = key, "Ignoring sort on unknown column");
			return None;
		};
		if !self.state.sort.toggle(column) {
			return None;
		}
		self.state.pagination.reset();
		match self.config.mode {
			DataSourceMode::Local => {
				self.rederive();
				None
			}
			DataSourceMode::Controlled => Some(self.request_data()),
		}
	}

	fn go_to_page(&mut self, page: i64) -> Option<DataRequest> {
		let before = self.state.pagination.current_page();
		let after = self.state.pagination.go_to(page);
		if self.config.mode == DataSourceMode::Controlled && after != before {
			Some(self.request_data())
		} else {
			None
		}
	}

	fn set_page_size(&mut self, size: usize) -> EngineResult<Option<DataRequest>> {
		if self.state.is_loading {
			tracing::debug!(size, "Ignoring page size change while loading");
			return Ok(None);
		}
		self.state.pagination.set_page_size(size)?;
		if let Some(prefs) = &self.preferences
			&& let Err(e) = prefs.set_page_size(size)
		{
			tracing::warn!(error = %e, size, "Failed to store page size preference");
		}
		match self.config.mode {
			DataSourceMode::Local => Ok(None),
			DataSourceMode::Controlled => Ok(Some(self.request_data())),
		}
	}

	/// Issues a new data request and marks the grid loading or refreshing
	///
	/// The first request of a grid sets `is_loading`; later ones set
	/// `is_refreshing`.
	pub fn request_data(&mut self) -> DataRequest {
		let seq = self.sequencer.next();
		self.state.begin_request();

		let sort_field = self
			.state
			.sort
			.column()
			.and_then(|key| self.config.columns.iter().find(|c| c.key() == key))
			.map(|column| column.source_field_name().to_string());
		let sort_direction = sort_field.as_ref().map(|_| self.state.sort.direction());

		let request = DataRequest {
			seq,
			page: self.state.pagination.current_page(),
			page_size: self.state.pagination.page_size(),
			sort_field,
			sort_direction,
		};
		tracing::debug!(
			seq = %request.seq,
			page = request.page,
			page_size = request.page_size,
			sort = ?request.sort_field,
			"Requesting data"
		);
		request
	}

	/// Applies the response to request `seq`
	///
	/// Returns `Ok(false)` and leaves the grid untouched when `seq` is not the
	/// latest issued request.
	pub fn receive(&mut self, seq: RequestSeq, response: DataResponse) -> EngineResult<bool> {
		if !self.sequencer.is_current(seq) {
			tracing::warn!(
				seq = %seq,
				latest = ?self.sequencer.latest(),
				"Dropping stale data response"
			);
			return Ok(false);
		}
		self.state.end_request();

		match self.config.mode {
			DataSourceMode::Local => self.set_data(response.rows)?,
			DataSourceMode::Controlled => {
				self.set_data(response.rows)?;
				self.set_totals(response.total_rows, response.total_pages);
			}
		}
		Ok(true)
	}

	/// Marks request `seq` as failed, clearing the loading flags if it is current
	pub fn fail_request(&mut self, seq: RequestSeq) -> bool {
		if !self.sequencer.is_current(seq) {
			tracing::debug!(seq = %seq, "Ignoring failure of a superseded request");
			return false;
		}
		tracing::warn!(seq = %seq, "Data request failed");
		self.state.end_request();
		true
	}

	/// Withdraws request `seq` without data, e.g. when there is nothing to query
	pub fn abandon_request(&mut self, seq: RequestSeq) -> bool {
		if !self.sequencer.is_current(seq) {
			return false;
		}
		tracing::debug!(seq = %seq, "Data request abandoned");
		self.state.end_request();
		true
	}

	/// Returns true when export actions should be enabled
	pub fn can_export(&self) -> bool {
		!self.state.is_loading && !self.state.is_refreshing && !self.result_rows().is_empty()
	}

	/// Serializes the current result set for download
	///
	/// `filename` is the base name without extension (default `report`).
	///
	/// # Errors
	///
	/// Refused while loading or refreshing, and when the result set is empty.
	pub fn export(&self, format: ExportFormat, filename: Option<&str>) -> EngineResult<ExportResult> {
		if self.state.is_loading || self.state.is_refreshing {
			tracing::warn!(%format, "Refusing export while data is loading");
			return Err(EngineError::ExportUnavailable);
		}
		let rows = self.result_rows();
		if rows.is_empty() {
			tracing::warn!(%format, "Refusing to export an empty row set");
		}

		let mut builder = ExportBuilder::new(format).rows(rows.to_vec());
		if let Some(name) = filename {
			builder = builder.filename(name);
		}
		Ok(builder.build()?)
	}

	/// Clears search, sort, selection and expansion and returns to page 1
	pub fn reset(&mut self) {
		self.state.search.set_text(String::new());
		self.state.sort = SortState::new();
		self.state.selection.clear();
		self.state.expansion.clear();
		if self.config.mode == DataSourceMode::Local {
			self.rederive();
		}
		self.state.pagination.reset();
	}

	/// Render snapshot relative to the current time
	pub fn view(&self) -> GridView {
		self.view_at(&Local::now())
	}

	/// Render snapshot with dates formatted relative to `now`
	pub fn view_at(&self, now: &DateTime<Local>) -> GridView {
		let state = &self.state;
		let pagination = &state.pagination;
		let visible = self.visible_rows();
		let visible_keys = self.visible_keys();

		let columns = self
			.config
			.columns
			.iter()
			.map(|column| ColumnView {
				key: column.key().to_string(),
				label: column.label().to_string(),
				sort: state.sort.indicator(column, !state.is_loading),
			})
			.collect();

		let rows = visible
			.iter()
			.enumerate()
			.map(|(index, row)| {
				let key = row.key(&self.config.row_key);
				let selected = key.as_ref().is_some_and(|k| state.selection.is_selected(k));
				let expanded = key.as_ref().is_some_and(|k| state.expansion.is_expanded(k));
				RowView {
					cells: self
						.config
						.columns
						.iter()
						.map(|column| column.display_at(row, index, now))
						.collect(),
					key,
					index,
					selected,
					expanded,
					row: row.clone(),
				}
			})
			.collect();

		GridView {
			columns,
			rows,
			search_text: state.search.text().to_string(),
			sort_column: state.sort.column().map(str::to_string),
			sort_direction: state.sort.direction(),
			current_page: pagination.current_page(),
			page_size: pagination.page_size(),
			page_size_options: page_size_options(
				&self.config.page_size_options,
				pagination.page_size(),
			),
			total_pages: pagination.total_pages(),
			total_rows: pagination.total_rows(),
			visible_pages: pagination.visible_pages(),
			navigation: pagination.navigation(state.is_loading),
			summary: pagination.summary(),
			selected_row_keys: state.selection.iter().cloned().collect(),
			expanded_row_keys: state.expansion.iter().cloned().collect(),
			header_checkbox: self
				.config
				.selectable
				.then(|| state.selection.header_state(&visible_keys)),
			is_loading: state.is_loading,
			is_refreshing: state.is_refreshing,
			placeholder_rows: if state.is_loading {
				pagination.page_size().min(self.config.placeholder_row_limit)
			} else {
				0
			},
			can_export: self.can_export(),
		}
	}

	/// Re-applies search and sort to the full dataset (local mode)
	fn rederive(&mut self) {
		let mut rows = self.state.search.apply(&self.rows);
		if let Some(key) = self.state.sort.column()
			&& self.config.columns.iter().any(|c| c.key() == key)
		{
			sort_rows(&mut rows, key, self.state.sort.direction());
		}
		self.derived = rows;
		self.state.pagination.set_total_rows(self.derived.len());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reportgrid_core::{HeaderCheckboxState, SortDirection, SortIndicator};
	use rstest::{fixture, rstest};

	#[fixture]
	fn local_grid() -> Grid {
		let config = GridConfig::local(vec![
			Column::new("id", "ID"),
			Column::new("name", "Name").sortable(true),
		])
		.row_key("id")
		.searchable(["name"])
		.selectable(true)
		.expandable(true)
		.page_size(2);
		let mut grid = Grid::new(config).unwrap();
		grid.set_data(
			["e", "d", "c", "b", "a"]
				.iter()
				.enumerate()
				.map(|(i, name)| Row::new().with("id", i as i64 + 1).with("name", *name))
				.collect(),
		)
		.unwrap();
		grid
	}

	#[rstest]
	fn test_sort_resets_page(mut local_grid: Grid) {
		local_grid.apply(GridCommand::GoToPage(3)).unwrap();
		local_grid
			.apply(GridCommand::ToggleSort("name".into()))
			.unwrap();
		assert_eq!(local_grid.state().current_page(), 1);
		assert_eq!(
			local_grid.visible_keys(),
			vec![RowKey::from(5), RowKey::from(4)]
		);
	}

	#[rstest]
	fn test_unsortable_and_unknown_columns_ignored(mut local_grid: Grid) {
		local_grid.apply(GridCommand::GoToPage(2)).unwrap();
		local_grid.apply(GridCommand::ToggleSort("id".into())).unwrap();
		local_grid
			.apply(GridCommand::ToggleSort("missing".into()))
			.unwrap();
		assert_eq!(local_grid.state().current_page(), 2);
		assert_eq!(local_grid.state().sort().column(), None);
	}

	#[rstest]
	fn test_select_all_is_page_scoped(mut local_grid: Grid) {
		local_grid.apply(GridCommand::ToggleSelectAllVisible).unwrap();
		local_grid.apply(GridCommand::GoToPage(2)).unwrap();
		let view = local_grid.view();
		assert_eq!(view.selected_count(), 2);
		assert_eq!(view.header_checkbox, Some(HeaderCheckboxState::Unchecked));
	}

	#[rstest]
	fn test_expansion_toggle(mut local_grid: Grid) {
		local_grid
			.apply(GridCommand::ToggleRowExpansion(RowKey::from(1)))
			.unwrap();
		assert!(local_grid.view().rows[0].expanded);
	}

	#[rstest]
	fn test_zero_page_size_is_an_error(mut local_grid: Grid) {
		assert!(matches!(
			local_grid.apply(GridCommand::SetPageSize(0)),
			Err(EngineError::Grid(_))
		));
	}

	#[rstest]
	fn test_local_refresh_emits_request(mut local_grid: Grid) {
		let request = local_grid
			.apply(GridCommand::RequestRefresh)
			.unwrap()
			.unwrap();
		assert!(local_grid.state().is_loading());
		assert_eq!(request.page, 1);
	}

	#[rstest]
	fn test_sort_indicator_hidden_while_loading(mut local_grid: Grid) {
		local_grid
			.apply(GridCommand::ToggleSort("name".into()))
			.unwrap();
		assert_eq!(local_grid.view().columns[1].sort, SortIndicator::Ascending);

		local_grid.request_data();
		assert_eq!(local_grid.view().columns[1].sort, SortIndicator::None);
		local_grid
			.apply(GridCommand::ToggleSort("name".into()))
			.unwrap();
		assert_eq!(local_grid.state().sort().direction(), SortDirection::Ascending);
	}

	#[rstest]
	fn test_reset(mut local_grid: Grid) {
		local_grid
			.apply(GridCommand::SetSearchText("zzz".into()))
			.unwrap();
		local_grid.apply(GridCommand::ToggleSelectAllVisible).unwrap();
		local_grid.reset();
		assert_eq!(local_grid.view().total_rows, 5);
		assert!(local_grid.state().selection().is_empty());
	}
}
