//! Optimal (Belady) replacement policy.
//!
//! Needs the whole reference sequence, so it is only usable in simulation.
//! It gives the lowest possible fault count for a fixed capacity and serves
//! as the baseline the other policies are measured against.

use crate::common::{PageKey, SlotId};
use crate::engine::replacer::{ReplacementPolicy, VictimContext};

/// Evicts the page whose next reference is furthest away.
///
/// A page that is never referenced again is evicted at once; the first such
/// page in slot order wins. Otherwise the page with the latest next
/// occurrence goes, ties to the lowest slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl ReplacementPolicy for OptimalReplacer {
    fn select_victim<P: PageKey>(&mut self, ctx: &VictimContext<'_, P>) -> Option<SlotId> {
        let mut furthest: Option<(SlotId, usize)> = None;

        for (slot, page) in ctx.frames.iter() {
            let Some(next) = ctx.history.next_use(page) else {
                return Some(slot);
            };
            match furthest {
                Some((_, best)) if next <= best => {}
                _ => furthest = Some((slot, next)),
            }
        }

        furthest.map(|(slot, _)| slot)
    }
}
