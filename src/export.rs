//! CSV / JSON export module.

pub use reportgrid_export::*;
