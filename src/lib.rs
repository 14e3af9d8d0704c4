//! # reportgrid
//!
//! A tabular data-grid engine for admin report dashboards.
//!
//! A grid shows one page of a dataset at a time. It can search, sort and page
//! rows it holds itself, or delegate paging and sorting to an external report
//! source. Rows can be selected (page-scoped, with shift-click ranges) and
//! expanded, and the current result set can be exported as CSV or JSON.
//!
//! ## Feature Flags
//!
//! - `minimal` - Column model and grid algorithms only
//! - `export` - CSV / JSON export
//! - `conf` - Layered settings and the persisted page-size preference
//! - `query` - Report query contract, field catalog and `ReportSource`
//! - `engine` - Grid orchestrator and async report session (enables the above)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "engine")]
//! # {
//! use reportgrid::prelude::*;
//!
//! let config = GridConfig::local(vec![
//!     Column::new("campaign", "Campaign").sortable(true),
//!     Column::new("clicks", "Clicks").value_kind(ValueKind::Number).sortable(true),
//! ])
//! .row_key("campaign")
//! .selectable(true);
//!
//! let mut grid = Grid::new(config).unwrap();
//! grid.set_data(vec![
//!     Row::new().with("campaign", "spring").with("clicks", 120),
//!     Row::new().with("campaign", "summer").with("clicks", 45),
//! ])
//! .unwrap();
//!
//! grid.apply(GridCommand::ToggleSort("clicks".into())).unwrap();
//! grid.apply(GridCommand::ToggleSelectAllVisible).unwrap();
//!
//! let view = grid.view();
//! assert_eq!(view.rows[0].cells, vec!["summer", "45"]);
//! assert_eq!(view.selected_count(), 2);
//!
//! let csv = grid.export(ExportFormat::Csv, None).unwrap();
//! assert_eq!(csv.filename, "report.csv");
//! # }
//! ```

pub mod grid;

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "engine")]
pub mod engine;
#[cfg(feature = "export")]
pub mod export;
#[cfg(feature = "query")]
pub mod query;

/// Commonly used types
pub mod prelude {
	pub use reportgrid_core::{
		Column, Expansion, GridError, HeaderCheckboxState, Pagination, Row, RowKey, SearchFilter,
		Selection, ShiftAnchor, SortDirection, SortIndicator, SortState, ValueKind,
	};

	#[cfg(feature = "conf")]
	pub use reportgrid_conf::{GridSettings, MemoryStore, Preferences, SettingsLoader};

	#[cfg(feature = "engine")]
	pub use reportgrid_engine::{
		DataRequest, DataResponse, DataSourceMode, EngineError, EngineResult, Grid, GridCommand,
		GridConfig, GridView, ReportSession,
	};

	#[cfg(feature = "export")]
	pub use reportgrid_export::{ExportFormat, ExportResult};

	#[cfg(feature = "query")]
	pub use reportgrid_query::{
		InMemoryReportSource, QueryError, ReportBuilder, ReportCatalog, ReportSource,
	};
}
