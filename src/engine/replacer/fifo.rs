//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{PageKey, SlotId};
use crate::engine::replacer::{ReplacementPolicy, VictimContext};

/// Evicts pages in the order they entered the frame set.
///
/// Re-referencing a resident page does not change its position. The page
/// brought in by an eviction takes over the victim's slot and joins the back
/// of the queue as the youngest resident.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Slots in insertion order (front = oldest).
    queue: VecDeque<SlotId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of slots being tracked.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn record_insert(&mut self, slot: SlotId) {
        self.queue.push_back(slot);
    }

    /// Returns the oldest slot. The slot leaves the queue and comes back at
    /// the tail when the driver reports the replacement.
    fn select_victim<P: PageKey>(&mut self, _ctx: &VictimContext<'_, P>) -> Option<SlotId> {
        self.queue.pop_front()
    }
}
