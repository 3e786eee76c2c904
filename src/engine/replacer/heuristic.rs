//! Heuristic replacement policy.
//!
//! Scores every resident page by how much it is likely to be worth keeping
//! and evicts the page worth least. The score blends five features, each
//! normalised to `[0, 1]` at the current step:
//!
//! | feature          | raw value                          | normalised by                 |
//! |------------------|------------------------------------|-------------------------------|
//! | frequency        | references so far                  | highest frequency so far      |
//! | recency          | steps since last reference         | current step                  |
//! | future frequency | references still to come           | highest remaining count       |
//! | next use         | distance to next reference         | sequence length (= "never")   |
//! | short horizon    | recurs within the lookahead window | (already 0 or 1)              |
//!
//! Recency and next-use distance count against a page, the other three count
//! for it. The result is fully deterministic: equal inputs give equal
//! victims, and the reported fault count is whatever the replay produced.

use crate::common::{HeuristicConfig, HeuristicWeights, PageKey, SlotId};
use crate::engine::replacer::{ReplacementPolicy, VictimContext};

/// Normalised features of one resident page at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFeatures {
    pub frequency: f64,
    pub recency_gap: f64,
    pub future_frequency: f64,
    pub next_use_distance: f64,
    pub needed_soon: bool,
}

impl PageFeatures {
    /// Weighted value of keeping the page. Higher means more worth keeping.
    pub fn value(&self, weights: &HeuristicWeights) -> f64 {
        weights.frequency * self.frequency
            + weights.recency * (1.0 - self.recency_gap)
            + weights.future_frequency * self.future_frequency
            + weights.next_use * (1.0 - self.next_use_distance)
            + weights.short_horizon * if self.needed_soon { 1.0 } else { 0.0 }
    }
}

/// Per-step maxima used to normalise raw features.
#[derive(Debug, Clone, Copy)]
struct Scale {
    step: usize,
    max_frequency: usize,
    max_remaining: usize,
    horizon: usize,
}

impl Scale {
    fn of<P: PageKey>(ctx: &VictimContext<'_, P>) -> Self {
        Self {
            step: ctx.step,
            max_frequency: ctx.history.max_frequency(),
            max_remaining: ctx.history.max_remaining(),
            horizon: ctx.history.horizon(),
        }
    }
}

/// Evicts the resident page with the lowest blended value.
#[derive(Debug, Clone, Default)]
pub struct HeuristicReplacer {
    config: HeuristicConfig,
}

impl HeuristicReplacer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Compute the normalised features of `page` at the context's step.
    pub fn features<P: PageKey>(&self, ctx: &VictimContext<'_, P>, page: &P) -> PageFeatures {
        self.features_scaled(ctx, page, Scale::of(ctx))
    }

    fn features_scaled<P: PageKey>(&self, ctx: &VictimContext<'_, P>, page: &P, scale: Scale) -> PageFeatures {
        let history = ctx.history;

        let gap = scale.step.saturating_sub(history.last_used(page).unwrap_or(0));

        // "Never again" is the sequence length: further than any real distance.
        let distance = history
            .next_use(page)
            .map_or(scale.horizon, |next| next.saturating_sub(scale.step));

        let needed_soon = history
            .next_use(page)
            .is_some_and(|next| next.saturating_sub(scale.step) <= self.config.lookahead_window);

        PageFeatures {
            frequency: ratio(history.frequency(page), scale.max_frequency),
            recency_gap: ratio(gap, scale.step),
            future_frequency: ratio(history.remaining(page), scale.max_remaining),
            next_use_distance: ratio(distance, scale.horizon),
            needed_soon,
        }
    }
}

impl ReplacementPolicy for HeuristicReplacer {
    fn select_victim<P: PageKey>(&mut self, ctx: &VictimContext<'_, P>) -> Option<SlotId> {
        let scale = Scale::of(ctx);
        let mut victim: Option<(SlotId, f64)> = None;

        for (slot, page) in ctx.frames.iter() {
            let value = self.features_scaled(ctx, page, scale).value(&self.config.weights);
            match victim {
                Some((_, lowest)) if value >= lowest => {}
                _ => victim = Some((slot, value)),
            }
        }

        victim.map(|(slot, _)| slot)
    }
}

/// `value / max(1, max)`, clamped to `[0, 1]`.
fn ratio(value: usize, max: usize) -> f64 {
    (value as f64 / max.max(1) as f64).min(1.0)
}
