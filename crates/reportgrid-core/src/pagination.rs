//! Pagination functionality for grids
//!
//! A [`Pagination`] works in one of two ways:
//!
//! - **derived**: the grid holds the whole dataset and page counts follow from
//!   [`Pagination::set_total_rows`]
//! - **supplied**: an external data source reports `total_rows`/`total_pages`
//!   through [`Pagination::set_totals`] and the controller trusts those bounds

use crate::error::{GridError, Result};
use std::ops::Range;

/// Maximum number of page buttons shown at once
const PAGE_WINDOW: usize = 5;

/// Where the page counts come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Totals {
	#[default]
	Derived,
	Supplied,
}

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	page_size: usize,
	current_page: usize,
	total_rows: usize,
	total_pages: usize,
	totals: Totals,
}

/// Which navigation buttons are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageNavigation {
	/// Jump to page 1
	pub first: bool,
	/// Step back one page
	pub previous: bool,
	/// Step forward one page
	pub next: bool,
	/// Jump to the last page
	pub last: bool,
}

/// "Showing `start` to `end` of `total` entries"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSummary {
	/// 1-based position of the first row on the page (0 when empty)
	pub start: usize,
	/// 1-based position of the last row on the page (0 when empty)
	pub end: usize,
	/// Total number of rows across all pages
	pub total: usize,
}

impl Pagination {
	/// Creates a new pagination configuration on page 1
	///
	/// # Errors
	///
	/// Returns [`GridError::InvalidPageSize`] when `page_size` is zero.
	pub fn new(page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(GridError::InvalidPageSize);
		}
		Ok(Self {
			page_size,
			current_page: 1,
			total_rows: 0,
			total_pages: 0,
			totals: Totals::Derived,
		})
	}

	/// Returns the page size
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns the current page (1-indexed, never 0)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the total number of rows
	pub fn total_rows(&self) -> usize {
		self.total_rows
	}

	/// Returns the total number of pages (0 when there are no rows)
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Returns true when counts were reported by an external data source
	pub fn is_supplied(&self) -> bool {
		self.totals == Totals::Supplied
	}

	/// Sets the row count of a locally held dataset and re-clamps the current page
	pub fn set_total_rows(&mut self, total_rows: usize) {
		self.totals = Totals::Derived;
		self.total_rows = total_rows;
		self.total_pages = total_rows.div_ceil(self.page_size);
		self.current_page = self.clamp(self.current_page as i64);
	}

	/// Records counts reported by an external data source
	///
	/// The current page is left as requested; the source decides which page
	/// it actually returned.
	pub fn set_totals(&mut self, total_rows: usize, total_pages: usize) {
		self.totals = Totals::Supplied;
		self.total_rows = total_rows;
		self.total_pages = total_pages;
	}

	/// Moves to `page`, clamped into `[1, max(total_pages, 1)]`
	///
	/// Returns the page actually selected.
	pub fn go_to(&mut self, page: i64) -> usize {
		self.current_page = self.clamp(page);
		if self.current_page as i64 != page {
			tracing::debug!(requested = page, page = self.current_page, "Page request clamped");
		}
		self.current_page
	}

	/// Returns to page 1
	pub fn reset(&mut self) {
		self.current_page = 1;
	}

	/// Moves to the next page if available
	pub fn next_page(&mut self) -> bool {
		if self.current_page < self.total_pages {
			self.current_page += 1;
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if available
	pub fn prev_page(&mut self) -> bool {
		if self.current_page > 1 {
			self.current_page -= 1;
			true
		} else {
			false
		}
	}

	/// Changes the page size and returns to page 1
	///
	/// # Errors
	///
	/// Returns [`GridError::InvalidPageSize`] when `page_size` is zero.
	pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
		if page_size == 0 {
			return Err(GridError::InvalidPageSize);
		}
		self.page_size = page_size;
		if self.totals == Totals::Derived {
			self.total_pages = self.total_rows.div_ceil(page_size);
		}
		self.current_page = 1;
		Ok(())
	}

	/// Zero-based offsets of the current page within a dataset of `len` rows
	pub fn range(&self, len: usize) -> Range<usize> {
		let start = (self.current_page - 1)
			.saturating_mul(self.page_size)
			.min(len);
		let end = start.saturating_add(self.page_size).min(len);
		start..end
	}

	/// Returns the rows of the current page
	pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
		&rows[self.range(rows.len())]
	}

	/// Page numbers to show as buttons, at most five around the current page
	pub fn visible_pages(&self) -> Vec<usize> {
		if self.total_pages == 0 {
			return Vec::new();
		}
		let mut start = self.current_page.saturating_sub(2).max(1);
		let mut end = start + PAGE_WINDOW - 1;
		if end > self.total_pages {
			end = self.total_pages;
			start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
		}
		(start..=end).collect()
	}

	/// Navigation buttons that are currently usable
	pub fn navigation(&self, loading: bool) -> PageNavigation {
		if loading {
			return PageNavigation::default();
		}
		let back = self.current_page > 1;
		let forward = self.current_page < self.total_pages;
		PageNavigation {
			first: back,
			previous: back,
			next: forward,
			last: forward,
		}
	}

	/// Row range summary for the current page
	pub fn summary(&self) -> RangeSummary {
		if self.total_rows == 0 {
			return RangeSummary::default();
		}
		RangeSummary {
			start: (self.current_page - 1)
				.saturating_mul(self.page_size)
				.saturating_add(1),
			end: self
				.current_page
				.saturating_mul(self.page_size)
				.min(self.total_rows),
			total: self.total_rows,
		}
	}

	fn clamp(&self, page: i64) -> usize {
		let upper = i64::try_from(self.total_pages.max(1)).unwrap_or(i64::MAX);
		page.clamp(1, upper) as usize
	}
}

/// Page-size choices offered to the user
///
/// The configured options plus the active size, sorted ascending without
/// duplicates, so that an externally chosen size is always selectable.
pub fn page_size_options(configured: &[usize], active: usize) -> Vec<usize> {
	let mut options: Vec<usize> = configured
		.iter()
		.copied()
		.chain(std::iter::once(active))
		.filter(|size| *size > 0)
		.collect();
	options.sort_unstable();
	options.dedup();
	options
}
