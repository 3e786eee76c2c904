//! Common types and utilities shared across pagesim.
//!
//! This module contains the primitives used throughout the crate:
//! - Configuration constants and config structs
//! - Error types
//! - Identifiers (PageId, SlotId) and the [`PageKey`] bound

pub mod config;
pub mod error;
mod page_id;
mod slot_id;

pub use config::{HeuristicConfig, HeuristicWeights, RandomTraceConfig, SimulatorConfig};
pub use error::{Error, Result};
pub use page_id::{PageId, PageKey};
pub use slot_id::SlotId;
