//! Replacement-policy simulation engine.
//!
//! The engine replays a reference sequence against a fixed-capacity frame
//! set and records every decision the chosen policy makes.
//!
//! # Components
//! - [`Simulator`] - The replay driver
//! - [`FrameSet`] / [`FrameSnapshot`] - Resident pages and their copies
//! - [`PageHistory`] - Per-page bookkeeping shared by the replacers
//! - [`SimulationResult`] / [`StepRecord`] - The output trace
//! - [`RunSummary`] - Totals for comparison tables
//! - [`Comparison`] - Several policies over one input
//! - [`replacer`] - Eviction policy implementations

mod compare;
mod frame_set;
pub mod history;
pub mod replacer;
mod result;
mod simulator;
mod stats;

pub use compare::Comparison;
pub use frame_set::{FrameSet, FrameSnapshot};
pub use history::PageHistory;
pub use result::{Eviction, SimulationResult, StepRecord};
pub use simulator::{run, Simulator};
pub use stats::RunSummary;
