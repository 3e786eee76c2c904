//! LRU (Least Recently Used) replacement policy.

use crate::common::{PageKey, SlotId};
use crate::engine::replacer::{ReplacementPolicy, VictimContext};

/// Evicts the resident page whose last reference is oldest.
///
/// Recency comes from [`crate::engine::PageHistory`], which the driver
/// updates on every reference, hit or fault. The replacer itself is
/// stateless. Ties go to the lowest slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruReplacer;

impl LruReplacer {
    pub fn new() -> Self {
        LruReplacer
    }
}

impl ReplacementPolicy for LruReplacer {
    fn select_victim<P: PageKey>(&mut self, ctx: &VictimContext<'_, P>) -> Option<SlotId> {
        let mut victim: Option<(SlotId, usize)> = None;

        for (slot, page) in ctx.frames.iter() {
            // A resident page has always been recorded; 0 only guards the
            // impossible case.
            let last_used = ctx.history.last_used(page).unwrap_or(0);
            match victim {
                Some((_, oldest)) if last_used >= oldest => {}
                _ => victim = Some((slot, last_used)),
            }
        }

        victim.map(|(slot, _)| slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::replacer::test_support::state_at;

    fn select(sequence: &[u32], capacity: usize, step: usize) -> Option<SlotId> {
        let (frames, history) = state_at(sequence, capacity, step);
        let ctx = VictimContext {
            frames: &frames,
            history: &history,
            sequence,
            step,
        };
        LruReplacer::new().select_victim(&ctx)
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        // Slots: [1, 2, 3]; page 1 touched again at step 3, so 2 is oldest.
        assert_eq!(select(&[1, 2, 3, 1, 4], 3, 4), Some(SlotId::new(1)));
    }

    #[test]
    fn test_lru_without_hits_matches_insertion_order() {
        assert_eq!(select(&[5, 6, 7, 8], 3, 3), Some(SlotId::new(0)));
    }

    #[test]
    fn test_lru_recency_updated_on_every_hit() {
        // 1 and 2 alternate; 3 was used once long ago.
        let sequence = [3, 1, 2, 1, 2, 1, 2, 4];
        assert_eq!(select(&sequence, 3, 7), Some(SlotId::new(0)));
    }

    #[test]
    fn test_lru_empty_frames() {
        assert_eq!(select(&[1], 2, 0), None);
    }
}
