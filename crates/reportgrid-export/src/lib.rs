//! # reportgrid-export
//!
//! Serializes report rows to CSV or JSON download blobs.
//!
//! Explicit `null` fields are dropped before serialization. CSV output takes
//! its header from the first row and quotes only values that contain a comma;
//! JSON output is a pretty-printed array.
//!
//! ```
//! use reportgrid_core::Row;
//! use reportgrid_export::{ExportBuilder, ExportFormat};
//!
//! let rows = vec![Row::new().with("campaign", "Spring, 2024").with("clicks", 12)];
//! let export = ExportBuilder::new(ExportFormat::Csv).rows(rows).build().unwrap();
//!
//! assert_eq!(export.filename, "report.csv");
//! assert_eq!(export.data, b"campaign,clicks\n\"Spring, 2024\",12");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod export;

pub use error::{ExportError, Result};
pub use export::{
	CsvExporter, DEFAULT_FILENAME, ExportBuilder, ExportFormat, ExportResult, JsonExporter,
	clean_rows,
};
