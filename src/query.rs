//! Report query contract and data sources module.

pub use reportgrid_query::*;
