//! # reportgrid-query
//!
//! The report query contract between a grid and its data source.
//!
//! - [`ReportRequest`] / [`ReportResponse`]: the wire shapes of one page of a report
//! - [`ReportCatalog`] / [`ReportBuilder`]: which metrics and dimensions exist and which are selected
//! - [`ReportSource`]: the async collaborator that answers requests
//! - [`RequestSequencer`]: numbers requests so stale responses can be dropped

#![warn(missing_docs)]

pub mod builder;
pub mod catalog;
pub mod error;
pub mod request;
pub mod sequence;
pub mod source;

pub use builder::{
	DEFAULT_DIMENSIONS, REPORT_DEFAULT_PAGE_SIZE, REPORT_PAGE_SIZE_OPTIONS, ReportBuilder,
};
pub use catalog::{FieldDefinition, ReportCatalog};
pub use error::{QueryError, QueryResult, UNKNOWN_FETCH_ERROR};
pub use request::{Paging, ReportRequest, ReportResponse, ResponsePaging, Sorting};
pub use sequence::{RequestSeq, RequestSequencer};
pub use source::{InMemoryReportSource, ReportSource};
