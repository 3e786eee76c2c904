//! The output of a simulation run.
//!
//! Everything here is plain owned data. Nothing borrows from the driver, so
//! a result can be kept, sent to another thread, or serialised as-is.

use serde::{Deserialize, Serialize};

use crate::common::{PageKey, SlotId};
use crate::engine::replacer::Policy;
use crate::engine::{FrameSnapshot, RunSummary};

/// A page pushed out of the frame set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Eviction<P> {
    pub page: P,
    pub slot: SlotId,
}

/// What happened at one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord<P> {
    /// The referenced page.
    pub page: P,

    /// The slot holding `page` after this step.
    pub slot: SlotId,

    /// The frame set after this step.
    pub frames: FrameSnapshot<P>,

    pub is_hit: bool,

    /// Present only on a fault that found the frame set already full.
    pub evicted: Option<Eviction<P>>,
}

impl<P: PageKey> StepRecord<P> {
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit
    }

    #[inline]
    pub fn evicted_page(&self) -> Option<&P> {
        self.evicted.as_ref().map(|e| &e.page)
    }

    #[inline]
    pub fn evicted_slot(&self) -> Option<SlotId> {
        self.evicted.as_ref().map(|e| e.slot)
    }
}

/// The complete trace and totals of one run.
///
/// # Invariants
/// - `steps.len() == frame_history.len()` == length of the input sequence
/// - `total_faults` equals the number of steps with `is_hit == false`
/// - `hit_ratio` is `None` only for an empty sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult<P> {
    pub policy: Policy,
    pub capacity: usize,
    pub total_faults: usize,
    pub frame_history: Vec<FrameSnapshot<P>>,
    pub steps: Vec<StepRecord<P>>,

    /// `(N - total_faults) / N`, or `None` when N is 0.
    pub hit_ratio: Option<f64>,

    /// Wall-clock duration of the run. The only field that differs between
    /// repeated runs on the same input.
    pub elapsed_ms: f64,
}

impl<P: PageKey> SimulationResult<P> {
    /// Number of references replayed.
    #[inline]
    pub fn references(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn total_hits(&self) -> usize {
        self.steps.len() - self.total_faults
    }

    /// Faults that displaced a resident page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.evicted.is_some()).count()
    }

    /// Condense the run into one table row.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            policy: self.policy,
            references: self.references(),
            hits: self.total_hits(),
            faults: self.total_faults,
            evictions: self.evictions(),
            hit_ratio: self.hit_ratio,
            elapsed_ms: self.elapsed_ms,
        }
    }

    /// Whether two runs made exactly the same decisions.
    ///
    /// Compares everything except timing.
    pub fn same_trace(&self, other: &Self) -> bool {
        self.policy == other.policy
            && self.capacity == other.capacity
            && self.total_faults == other.total_faults
            && self.steps == other.steps
            && self.frame_history == other.frame_history
    }
}

/// Hit ratio of `faults` out of `references`, `None` when there were none.
pub(crate) fn hit_ratio(references: usize, faults: usize) -> Option<f64> {
    if references == 0 {
        None
    } else {
        Some((references - faults) as f64 / references as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ratio() {
        assert_eq!(hit_ratio(0, 0), None);
        assert_eq!(hit_ratio(10, 7), Some(0.3));
        assert_eq!(hit_ratio(4, 0), Some(1.0));
        assert_eq!(hit_ratio(4, 4), Some(0.0));
    }

    #[test]
    fn test_step_record_eviction_accessors() {
        let mut frames = crate::engine::FrameSet::new(1);
        frames.insert(9u32);
        let step = StepRecord {
            page: 9u32,
            slot: SlotId::new(0),
            frames: frames.snapshot(),
            is_hit: false,
            evicted: Some(Eviction {
                page: 4,
                slot: SlotId::new(0),
            }),
        };

        assert!(step.is_fault());
        assert_eq!(step.evicted_page(), Some(&4));
        assert_eq!(step.evicted_slot(), Some(SlotId::new(0)));
    }
}
