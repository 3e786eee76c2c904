//! Run statistics for comparison tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::replacer::Policy;

/// The totals of one simulation run.
///
/// Unlike [`crate::SimulationResult`], this carries no per-step data and is
/// `Copy`, so it can be printed, sorted and compared freely.
///
/// # Example
/// ```
/// use pagesim::{run, PageId, Policy};
///
/// let trace: Vec<PageId> = [1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// let summary = run(Policy::Lru, &trace, 2).unwrap().summary();
/// assert_eq!(summary.faults, 3);
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub policy: Policy,
    pub references: usize,
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
    pub hit_ratio: Option<f64>,
    pub elapsed_ms: f64,
}

impl RunSummary {
    /// Fault ratio (0.0 to 1.0), `None` for an empty run.
    pub fn fault_ratio(&self) -> Option<f64> {
        self.hit_ratio.map(|ratio| 1.0 - ratio)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ faults: {}, hits: {}, evictions: {}, hit_ratio: ",
            self.policy.full_name(),
            self.faults,
            self.hits,
            self.evictions
        )?;
        match self.hit_ratio {
            Some(ratio) => write!(f, "{:.2}%", ratio * 100.0)?,
            None => write!(f, "n/a")?,
        }
        write!(f, ", time: {:.2} ms }}", self.elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(hits: usize, faults: usize) -> RunSummary {
        let references = hits + faults;
        RunSummary {
            policy: Policy::Fifo,
            references,
            hits,
            faults,
            evictions: faults.saturating_sub(3),
            hit_ratio: crate::engine::result::hit_ratio(references, faults),
            elapsed_ms: 0.25,
        }
    }

    #[test]
    fn test_fault_ratio() {
        assert_eq!(summary(8, 2).fault_ratio().map(|r| (r * 10.0).round()), Some(2.0));
        assert_eq!(summary(0, 0).fault_ratio(), None);
    }

    #[test]
    fn test_summary_display() {
        let display = format!("{}", summary(80, 20));

        assert!(display.starts_with("FIFO (First-In-First-Out)"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("hits: 80"));
        assert!(display.contains("evictions: 17"));
        assert!(display.contains("80.00%"));
        assert!(display.contains("0.25 ms"));
    }

    #[test]
    fn test_summary_display_empty_run() {
        assert!(format!("{}", summary(0, 0)).contains("hit_ratio: n/a"));
    }
}
