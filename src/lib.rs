//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Trace Input (trace)                         │   │
//! │  │        parse_sequence | presets | random_sequence        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Simulation Engine (engine/)                        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | LRU | Optimal | Heuristic     │   │   │
//! │  │   │          (chosen per run by Policy)              │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │     Simulator + FrameSet + PageHistory + Comparison      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       SimulationResult: steps, frame history, totals     │   │
//! │  │        (plain data for renderers and charts)             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, SlotId, Error, config)
//! - [`engine`] - The replay driver and eviction policies
//! - [`trace`] - Building reference traces from text, presets or an RNG
//!
//! # Quick Start
//! ```
//! use pagesim::{trace, Policy, Simulator};
//!
//! let sequence = trace::parse_sequence("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
//! let result = Simulator::new().run(Policy::Lru, &sequence, 3).unwrap();
//!
//! assert_eq!(result.total_faults, 9);
//! for step in &result.steps {
//!     let mark = if step.is_hit { "hit" } else { "fault" };
//!     println!("{:>3} {:5} {:?}", step.page, mark, step.frames.slots());
//! }
//! ```

pub mod common;
pub mod engine;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, PageKey, Result, SlotId};
pub use common::{HeuristicConfig, HeuristicWeights, RandomTraceConfig, SimulatorConfig};

pub use engine::replacer::Policy;
pub use engine::{
    run, Comparison, Eviction, FrameSnapshot, RunSummary, SimulationResult, Simulator, StepRecord,
};
