//! Slot identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a slot in the frame set.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<P>>`
/// 2. Direct indexing without casting: `slots[slot.0]`
/// 3. Slot numbers are what a display layer shows as "frame 0, 1, 2..."
///
/// # Example
/// ```
/// use pagesim::SlotId;
///
/// let slot = SlotId::new(2);
/// assert_eq!(slot.index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }

    /// The slot's position in the frame set.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_ordering() {
        assert!(SlotId::new(0) < SlotId::new(1));
        assert_eq!(SlotId::new(3).index(), 3);
    }

    #[test]
    fn test_slot_id_display() {
        assert_eq!(format!("{}", SlotId::new(2)), "Slot(2)");
    }
}
