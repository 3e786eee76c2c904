//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's optimal, using full-sequence lookahead
//! - [`HeuristicReplacer`] - weighted scorer over frequency, recency and lookahead
//!
//! The set of policies is closed. [`Policy`] names one, and
//! [`Replacer::for_policy`] is the single place that turns a name into a
//! running replacer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageKey, SimulatorConfig, SlotId};
use crate::engine::{FrameSet, PageHistory};

mod fifo;
mod heuristic;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use heuristic::HeuristicReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// A page-replacement policy.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "LRU".parse().unwrap();
/// assert_eq!(policy, Policy::Lru);
/// assert_eq!(policy.name(), "lru");
/// assert!("mru".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
    Heuristic,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Heuristic];

    /// The lowercase identifier accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Lru => "lru",
            Policy::Optimal => "optimal",
            Policy::Heuristic => "heuristic",
        }
    }

    /// Human-readable name for tables and legends.
    pub fn full_name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO (First-In-First-Out)",
            Policy::Lru => "LRU (Least Recently Used)",
            Policy::Optimal => "Optimal Algorithm",
            Policy::Heuristic => "Heuristic (Frequency + Lookahead)",
        }
    }

    /// Whether the policy reads references that have not happened yet.
    pub fn uses_lookahead(self) -> bool {
        matches!(self, Policy::Optimal | Policy::Heuristic)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}

/// What a replacer may look at when choosing a victim.
///
/// Built by the driver on every fault with a full frame set.
#[derive(Debug)]
pub struct VictimContext<'a, P> {
    /// The resident pages. Always full when a victim is requested.
    pub frames: &'a FrameSet<P>,

    /// Per-page bookkeeping, already updated for the current reference.
    pub history: &'a PageHistory<P>,

    /// The whole reference sequence.
    pub sequence: &'a [P],

    /// Index of the reference that faulted.
    pub step: usize,
}

/// The capability every policy provides: pick a slot to evict.
pub trait ReplacementPolicy {
    /// Record that a page was placed into `slot`, by free-slot fill or by
    /// replacement.
    fn record_insert(&mut self, _slot: SlotId) {}

    /// Select a victim slot.
    ///
    /// Returns an occupied slot, or `None` if the frame set holds no pages.
    fn select_victim<P: PageKey>(&mut self, ctx: &VictimContext<'_, P>) -> Option<SlotId>;
}

/// A running replacer: one variant per [`Policy`].
#[derive(Debug, Clone)]
pub enum Replacer {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
    Heuristic(HeuristicReplacer),
}

impl Replacer {
    /// Build a fresh replacer for `policy`.
    pub fn for_policy(policy: Policy, config: &SimulatorConfig) -> Self {
        match policy {
            Policy::Fifo => Replacer::Fifo(FifoReplacer::new()),
            Policy::Lru => Replacer::Lru(LruReplacer::new()),
            Policy::Optimal => Replacer::Optimal(OptimalReplacer::new()),
            Policy::Heuristic => Replacer::Heuristic(HeuristicReplacer::new(config.heuristic)),
        }
    }

    /// Which policy this replacer implements.
    pub fn policy(&self) -> Policy {
        match self {
            Replacer::Fifo(_) => Policy::Fifo,
            Replacer::Lru(_) => Policy::Lru,
            Replacer::Optimal(_) => Policy::Optimal,
            Replacer::Heuristic(_) => Policy::Heuristic,
        }
    }
}

impl ReplacementPolicy for Replacer {
    fn record_insert(&mut self, slot: SlotId) {
        match self {
            Replacer::Fifo(r) => r.record_insert(slot),
            Replacer::Lru(r) => r.record_insert(slot),
            Replacer::Optimal(r) => r.record_insert(slot),
            Replacer::Heuristic(r) => r.record_insert(slot),
        }
    }

    fn select_victim<P: PageKey>(&mut self, ctx: &VictimContext<'_, P>) -> Option<SlotId> {
        match self {
            Replacer::Fifo(r) => r.select_victim(ctx),
            Replacer::Lru(r) => r.select_victim(ctx),
            Replacer::Optimal(r) => r.select_victim(ctx),
            Replacer::Heuristic(r) => r.select_victim(ctx),
        }
    }
}

/// Shared scaffolding for replacer unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Replay `sequence[..=step]` into a frame set of `capacity` slots without
    /// any eviction, returning the state a replacer would see at `step`.
    ///
    /// The prefix must fit: callers pick sequences whose distinct pages before
    /// `step` fill the frame set exactly.
    pub fn state_at(sequence: &[u32], capacity: usize, step: usize) -> (FrameSet<u32>, PageHistory<u32>) {
        let mut frames = FrameSet::new(capacity);
        let mut history = PageHistory::new(sequence);
        for (i, page) in sequence.iter().enumerate().take(step + 1) {
            history.record(page, i);
            if i < step && !frames.contains(page) {
                frames.insert(*page).expect("prefix must fit in the frame set");
            }
        }
        (frames, history)
    }
}
