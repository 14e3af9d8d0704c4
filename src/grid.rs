//! Column model and grid algorithms.
//!
//! # Examples
//!
//! ```rust
//! use reportgrid::grid::{Pagination, SearchFilter};
//!
//! let filter = SearchFilter::new(["name"]);
//! assert!(filter.is_inactive());
//!
//! let pagination = Pagination::new(30).unwrap();
//! assert_eq!(pagination.current_page(), 1);
//! ```

pub use reportgrid_core::*;
