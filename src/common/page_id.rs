//! Page identifier type.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bound for anything the engine can treat as a page reference.
///
/// The engine never inspects a page beyond equality and hashing, so any
/// comparable value works: integers, strings, or [`PageId`].
pub trait PageKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> PageKey for T {}

/// Identifies a virtual page in a reference trace.
///
/// This is the concrete identifier produced by [`crate::trace`] parsing and
/// generation. Traces in the wild use small non-negative numbers, so `u32`
/// is plenty.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page: PageId = " 7 ".parse().unwrap();
/// assert_eq!(page, PageId::new(7));
/// assert_eq!(page.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!("  13".parse::<PageId>().unwrap(), PageId::new(13));
        assert!("-1".parse::<PageId>().is_err());
        assert!("x".parse::<PageId>().is_err());
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{:>3}", PageId::new(7)), "  7");
    }
}
