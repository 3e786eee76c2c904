//! FrameSet - the resident pages of one simulation run.
//!
//! A [`FrameSet`] is a fixed row of slots. Each slot holds one page or is
//! empty. Slots keep their index for the whole run, so a display layer can
//! say "slot 2 was replaced" and mean the same slot at every step.

use serde::{Deserialize, Serialize};

use crate::common::{PageKey, SlotId};

/// The resident-frame set owned by the driver.
///
/// # Layout
/// ```text
///   slot:   0     1     2     3
///         [ 7 ] [ 0 ] [ 1 ] [ - ]      capacity 4, len 3
/// ```
/// New pages fill the lowest free slot. An eviction swaps a page in place,
/// so occupancy only ever grows.
#[derive(Debug, Clone)]
pub struct FrameSet<P> {
    /// One entry per slot, `None` when the slot is empty.
    slots: Vec<Option<P>>,

    /// Number of occupied slots.
    len: usize,
}

impl<P: PageKey> FrameSet<P> {
    /// Create an empty frame set with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find the slot holding `page`, scanning in slot order.
    pub fn position(&self, page: &P) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(page))
            .map(SlotId::new)
    }

    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.position(page).is_some()
    }

    /// Get the page in `slot`, if any.
    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<&P> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    /// Iterate occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &P)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|page| (SlotId::new(i), page)))
    }

    // ========================================================================
    // Mutation (driver only)
    // ========================================================================

    /// Place `page` in the lowest free slot.
    ///
    /// Returns `None` if the frame set is full.
    pub(crate) fn insert(&mut self, page: P) -> Option<SlotId> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(page);
        self.len += 1;
        Some(SlotId::new(index))
    }

    /// Swap `page` into `slot`, returning the page it displaced.
    ///
    /// Returns `None` (and changes nothing) if the slot is out of range or
    /// empty: replacement only ever targets a resident page.
    pub(crate) fn replace(&mut self, slot: SlotId, page: P) -> Option<P> {
        let entry = self.slots.get_mut(slot.0)?;
        if entry.is_none() {
            return None;
        }
        entry.replace(page)
    }

    /// Take an owned copy of every slot.
    pub fn snapshot(&self) -> FrameSnapshot<P> {
        FrameSnapshot {
            slots: self.slots.clone(),
        }
    }
}

/// A point-in-time copy of a [`FrameSet`].
///
/// Unlike `FrameSet`, a snapshot never changes after it is taken and shares
/// nothing with the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSnapshot<P> {
    slots: Vec<Option<P>>,
}

impl<P: PageKey> FrameSnapshot<P> {
    /// All slots, empty ones as `None`.
    #[inline]
    pub fn slots(&self) -> &[Option<P>] {
        &self.slots
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn contains(&self, page: &P) -> bool {
        self.slots.iter().any(|slot| slot.as_ref() == Some(page))
    }

    /// Get the page in `slot`, if any.
    pub fn get(&self, slot: SlotId) -> Option<&P> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    /// Resident pages in slot order, skipping empty slots.
    pub fn pages(&self) -> impl Iterator<Item = &P> + '_ {
        self.slots.iter().flatten()
    }
}
