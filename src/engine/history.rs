//! Per-page bookkeeping shared by every replacer.
//!
//! The driver feeds each reference into [`PageHistory::record`] before it
//! looks at the frame set. Replacers only read from it.

use std::collections::HashMap;

use crate::common::PageKey;

/// Everything the replacers may know about a page at the current step.
///
/// Past-only facts (frequency, last use) grow as the run advances. The
/// lookahead facts (next occurrence, remaining count) come from a single
/// pass over the full sequence at construction.
#[derive(Debug, Clone)]
pub struct PageHistory<P> {
    /// How many times each page has been referenced so far.
    frequency: HashMap<P, usize>,

    /// Step of the most recent reference to each page.
    last_used: HashMap<P, usize>,

    /// Occurrences of each page after the current position.
    remaining: HashMap<P, usize>,

    /// `next_use[i]` is the next position after `i` referencing the same page.
    next_use: Vec<Option<usize>>,

    /// Largest value in `frequency`. Frequencies only grow, so this is cheap
    /// to keep current.
    max_frequency: usize,

    /// Length of the reference sequence.
    horizon: usize,
}

impl<P: PageKey> PageHistory<P> {
    /// Build the lookahead tables for `sequence`.
    pub fn new(sequence: &[P]) -> Self {
        let mut next_use = vec![None; sequence.len()];
        let mut seen_at: HashMap<&P, usize> = HashMap::new();
        let mut remaining: HashMap<P, usize> = HashMap::new();

        for (pos, page) in sequence.iter().enumerate().rev() {
            next_use[pos] = seen_at.insert(page, pos);
            *remaining.entry(page.clone()).or_insert(0) += 1;
        }

        Self {
            frequency: HashMap::new(),
            last_used: HashMap::new(),
            remaining,
            next_use,
            max_frequency: 0,
            horizon: sequence.len(),
        }
    }

    /// Record that `page` was referenced at `step`.
    ///
    /// Called once per reference, hit or fault, in sequence order.
    pub fn record(&mut self, page: &P, step: usize) {
        let count = self.frequency.entry(page.clone()).or_insert(0);
        *count += 1;
        self.max_frequency = self.max_frequency.max(*count);

        self.last_used.insert(page.clone(), step);

        if let Some(left) = self.remaining.get_mut(page) {
            *left = left.saturating_sub(1);
        }
    }

    // ========================================================================
    // Past-only knowledge
    // ========================================================================

    /// References to `page` so far.
    pub fn frequency(&self, page: &P) -> usize {
        self.frequency.get(page).copied().unwrap_or(0)
    }

    /// Highest frequency of any page so far.
    pub fn max_frequency(&self) -> usize {
        self.max_frequency
    }

    /// Step of the most recent reference to `page`.
    pub fn last_used(&self, page: &P) -> Option<usize> {
        self.last_used.get(page).copied()
    }

    // ========================================================================
    // Lookahead knowledge
    // ========================================================================

    /// Position of the next reference to `page` after its last recorded use.
    ///
    /// For a resident page this is its next occurrence strictly after the
    /// current step: the page was not referenced between its last use and
    /// now, otherwise that reference would be its last use. Returns `None`
    /// when the page is never referenced again.
    pub fn next_use(&self, page: &P) -> Option<usize> {
        let pos = self.last_used(page)?;
        self.next_use.get(pos).copied().flatten()
    }

    /// Occurrences of `page` after the current position.
    pub fn remaining(&self, page: &P) -> usize {
        self.remaining.get(page).copied().unwrap_or(0)
    }

    /// Highest remaining count over every page in the sequence.
    pub fn max_remaining(&self) -> usize {
        self.remaining.values().copied().max().unwrap_or(0)
    }

    /// Length of the whole reference sequence.
    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

/// Find the next occurrence of `page` strictly after `step` by scanning.
///
/// This is the reference form of the lookahead. [`PageHistory::next_use`]
/// answers the same question from a precomputed table.
pub fn scan_next_use<P: PartialEq>(sequence: &[P], page: &P, step: usize) -> Option<usize> {
    sequence
        .iter()
        .enumerate()
        .skip(step + 1)
        .find(|(_, candidate)| *candidate == page)
        .map(|(pos, _)| pos)
}
