//! Tabular data-grid engine for reportgrid
//!
//! This crate holds the state machines and algorithms that decide which rows of a
//! report are visible, in what order, and which of them are selected or expanded.
//! It performs no I/O and knows nothing about rendering; the orchestrator in
//! `reportgrid-engine` composes these pieces into a single grid state.
//!
//! # Features
//!
//! - **Column Model**: Typed column definitions with display formatting (`text`, `number`, smart `date`)
//! - **Sorting**: Two-state ascending/descending toggle with a stable comparator
//! - **Search**: Case-insensitive substring filter over a configured set of columns
//! - **Pagination**: Page arithmetic for locally held and externally paged datasets
//! - **Selection**: Page-scoped row selection with shift-click ranges
//! - **Expansion**: Independent per-row expand/collapse state
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Rows] --> B[SearchFilter]
//!     B --> C[sort_rows]
//!     C --> D[Pagination]
//!     D --> E[Visible slice]
//!     E --> F[Selection]
//!     E --> G[Expansion]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reportgrid_core::{Pagination, Row};
//!
//! let rows: Vec<Row> = (1..=7).map(|id| Row::new().with("id", id)).collect();
//!
//! let mut pagination = Pagination::new(3).unwrap();
//! pagination.set_total_rows(rows.len());
//! pagination.go_to(3);
//!
//! assert_eq!(pagination.total_pages(), 3);
//! assert_eq!(pagination.slice(&rows).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod expansion;
pub mod filtering;
pub mod format;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod sorting;

// Re-exports for convenience
pub use error::{GridError, Result};
pub use expansion::Expansion;
pub use filtering::SearchFilter;
pub use format::{format_cell, format_smart_date, parse_timestamp};
pub use model::{Column, RenderFn, Row, RowKey, ValueKind, validate_columns, validate_rows};
pub use pagination::{PageNavigation, Pagination, RangeSummary, page_size_options};
pub use selection::{HeaderCheckboxState, Selection, ShiftAnchor};
pub use sorting::{SortDirection, SortIndicator, SortState, sort_rows};
