//! Settings and persisted preferences module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reportgrid::conf::{SettingsLoader, open_preferences};
//!
//! # fn main() -> Result<(), reportgrid::conf::ConfError> {
//! let settings = SettingsLoader::standard(Some("reportgrid.toml".into())).load()?;
//! let preferences = open_preferences(&settings);
//! println!("stored page size: {:?}", preferences.page_size());
//! # Ok(())
//! # }
//! ```

pub use reportgrid_conf::*;
