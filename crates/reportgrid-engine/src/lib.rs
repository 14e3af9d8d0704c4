//! # reportgrid-engine
//!
//! The grid orchestrator: one [`Grid`] per table, driven by discrete
//! [`GridCommand`]s and rendered from immutable [`GridView`] snapshots.
//!
//! ## Data source modes
//!
//! - **Local**: the grid holds the whole dataset and filters, sorts and pages it
//! - **Controlled**: sort, page and refresh commands return a [`DataRequest`];
//!   the caller answers with [`Grid::receive`] and stale answers are dropped
//!
//! [`ReportSession`] wires a controlled grid to a [`reportgrid_query::ReportSource`]
//! and a metric/dimension [`reportgrid_query::ReportBuilder`].
//!
//! ## Example
//!
//! ```
//! use reportgrid_core::{Column, Row};
//! use reportgrid_engine::{DataResponse, Grid, GridCommand, GridConfig};
//!
//! let mut grid = Grid::new(GridConfig::controlled(vec![
//!     Column::new("clicks", "Clicks").sortable(true),
//! ]))
//! .unwrap();
//!
//! let request = grid.apply(GridCommand::RequestRefresh).unwrap().unwrap();
//! assert!(grid.state().is_loading());
//!
//! let response = DataResponse {
//!     rows: vec![Row::new().with("clicks", 3)],
//!     total_rows: 41,
//!     total_pages: 2,
//! };
//! assert!(grid.receive(request.seq, response).unwrap());
//! assert_eq!(grid.view().total_pages, 2);
//! ```

#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod session;
pub mod state;
pub mod view;

pub use command::{DataRequest, DataResponse, GridCommand};
pub use config::{DEFAULT_ROW_KEY, DataSourceMode, GridConfig};
pub use error::{EngineError, EngineResult};
pub use grid::Grid;
pub use session::{REPORT_PLACEHOLDER_ROW_LIMIT, REPORT_ROW_KEY, ReportSession};
pub use state::GridState;
pub use view::{ColumnView, GridView, RowView};
