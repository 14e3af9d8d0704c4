//! Row and column model
//!
//! Rows are opaque field maps; columns describe how to read and display a field.

pub mod column;
pub mod row;
pub mod value;

pub use column::{Column, RenderFn, ValueKind, validate_columns};
pub use row::{Row, RowKey, validate_rows};
pub use value::{compare_values, value_to_text};
