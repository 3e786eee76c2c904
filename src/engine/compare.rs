//! Side-by-side runs of several policies over one trace.
//!
//! Each policy gets its own run on its own scoped thread. Runs share only
//! the read-only input, so no locking is involved.

use std::thread;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageKey, Result};
use crate::engine::replacer::Policy;
use crate::engine::{RunSummary, SimulationResult, Simulator};

/// Results of running several policies on the same input.
///
/// Results keep the order in which policies were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison<P> {
    results: Vec<SimulationResult<P>>,
}

impl<P: PageKey> Comparison<P> {
    pub fn results(&self) -> &[SimulationResult<P>] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SimulationResult<P>> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The result for `policy`, if it was part of the comparison.
    pub fn get(&self, policy: Policy) -> Option<&SimulationResult<P>> {
        self.results.iter().find(|r| r.policy == policy)
    }

    /// The run with the fewest faults; the earliest requested wins ties.
    pub fn best(&self) -> Option<&SimulationResult<P>> {
        self.results.iter().reduce(|best, r| {
            if r.total_faults < best.total_faults {
                r
            } else {
                best
            }
        })
    }

    /// One summary row per run, in request order.
    pub fn summaries(&self) -> Vec<RunSummary> {
        self.results.iter().map(SimulationResult::summary).collect()
    }
}

impl Simulator {
    /// Run every policy in `policies` over the same input.
    ///
    /// Duplicate policies are run once. Capacity is checked before any run
    /// starts, so an error means no run happened.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    ///
    /// # Example
    /// ```
    /// use pagesim::{Policy, Simulator};
    ///
    /// let trace = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    /// let comparison = Simulator::new().compare(&Policy::ALL, &trace, 3).unwrap();
    /// assert_eq!(comparison.best().unwrap().policy, Policy::Optimal);
    /// ```
    pub fn compare<P>(&self, policies: &[Policy], sequence: &[P], capacity: usize) -> Result<Comparison<P>>
    where
        P: PageKey + Send + Sync,
    {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let mut selected: Vec<Policy> = Vec::with_capacity(policies.len());
        for &policy in policies {
            if !selected.contains(&policy) {
                selected.push(policy);
            }
        }

        let results = thread::scope(|scope| {
            let handles: Vec<_> = selected
                .iter()
                .map(|&policy| scope.spawn(move || self.run(policy, sequence, capacity)))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(Comparison { results })
    }
}
