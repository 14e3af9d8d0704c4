//! Grid orchestrator and report session module.

pub use reportgrid_engine::*;
