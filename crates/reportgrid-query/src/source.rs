//! Data sources that answer report queries

use crate::error::QueryResult;
use crate::request::{ReportRequest, ReportResponse, ResponsePaging};
use async_trait::async_trait;
use reportgrid_core::{Pagination, Row, sort_rows};

/// Something that can answer a [`ReportRequest`]
///
/// Transport, authentication, timeouts and retries belong to implementations.
#[async_trait]
pub trait ReportSource: Send + Sync {
	/// Fetches one page of the report
	async fn fetch(&self, request: &ReportRequest) -> QueryResult<ReportResponse>;
}

/// Serves reports from a fixed set of rows
///
/// Sorting and paging are applied per request; the metric and dimension lists
/// are not used to reshape rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportSource {
	rows: Vec<Row>,
}

impl InMemoryReportSource {
	/// Wraps a dataset
	pub fn new(rows: Vec<Row>) -> Self {
		Self { rows }
	}

	/// Answers a request synchronously
	pub fn answer(&self, request: &ReportRequest) -> ReportResponse {
		let mut rows = self.rows.clone();
		if let Some(field) = &request.sorting.field {
			sort_rows(&mut rows, field, request.sorting.direction.unwrap_or_default());
		}

		let size = request.paging.size.max(1);
		let mut pagination = match Pagination::new(size) {
			Ok(pagination) => pagination,
			Err(_) => return ReportResponse::default(),
		};
		pagination.set_total_rows(rows.len());
		pagination.go_to(request.paging.page as i64);

		ReportResponse {
			data: pagination.slice(&rows).to_vec(),
			paging: ResponsePaging {
				total_pages: pagination.total_pages(),
				total_records: pagination.total_rows(),
			},
		}
	}
}

#[async_trait]
impl ReportSource for InMemoryReportSource {
	async fn fetch(&self, request: &ReportRequest) -> QueryResult<ReportResponse> {
		Ok(self.answer(request))
	}
}
