//! Property tests for the replay invariants every policy must uphold.

use std::collections::HashSet;

use pagesim::{run, Policy, SimulationResult};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

fn trace() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, 0..60)
}

/// Walk the steps, checking each against the snapshot before it.
fn check_step_invariants(result: &SimulationResult<u8>, sequence: &[u8]) {
    assert_eq!(result.steps.len(), sequence.len());
    assert_eq!(result.frame_history.len(), sequence.len());

    let mut previous: Vec<Option<u8>> = vec![None; result.capacity];
    for (i, step) in result.steps.iter().enumerate() {
        let was_resident = previous.contains(&Some(step.page));
        let was_full = previous.iter().all(Option::is_some);
        let occupied_before = previous.iter().filter(|s| s.is_some()).count();
        let now = result.frame_history[i].slots();

        assert_eq!(step.page, sequence[i]);
        assert_eq!(step.is_hit, was_resident, "step {}", i);
        assert_eq!(step.evicted.is_some(), !step.is_hit && was_full, "step {}", i);
        assert_eq!(&step.frames, &result.frame_history[i]);
        assert_eq!(now[step.slot.0], Some(step.page));

        let occupied = result.frame_history[i].occupied();
        assert!(occupied <= result.capacity);
        if step.is_hit || step.evicted.is_some() {
            assert_eq!(occupied, occupied_before);
        } else {
            assert_eq!(occupied, occupied_before + 1);
        }

        if let Some(eviction) = &step.evicted {
            assert_eq!(previous[eviction.slot.0], Some(eviction.page));
            assert_eq!(eviction.slot, step.slot);
        }
        previous = now.to_vec();
    }
}

proptest! {
    /// Hits, faults and evictions agree with the frame snapshots.
    #[test]
    fn prop_steps_consistent_with_snapshots(
        policy in policy(),
        sequence in trace(),
        capacity in 1usize..6,
    ) {
        let result = run(policy, &sequence, capacity).unwrap();
        check_step_invariants(&result, &sequence);

        let faults = result.steps.iter().filter(|s| !s.is_hit).count();
        prop_assert_eq!(result.total_faults, faults);
    }

    /// hit_ratio == (N - faults) / N.
    #[test]
    fn prop_hit_ratio_identity(
        policy in policy(),
        sequence in trace(),
        capacity in 1usize..6,
    ) {
        let result = run(policy, &sequence, capacity).unwrap();
        let n = sequence.len();
        match result.hit_ratio {
            None => prop_assert_eq!(n, 0),
            Some(ratio) => {
                prop_assert!((0.0..=1.0).contains(&ratio));
                let expected = (n - result.total_faults) as f64 / n as f64;
                prop_assert!((ratio - expected).abs() < 1e-12);
            }
        }
    }

    /// Two runs on the same input make the same decisions.
    #[test]
    fn prop_deterministic(
        policy in policy(),
        sequence in trace(),
        capacity in 1usize..6,
    ) {
        let first = run(policy, &sequence, capacity).unwrap();
        let second = run(policy, &sequence, capacity).unwrap();
        prop_assert!(first.same_trace(&second));
    }

    /// No policy beats Optimal.
    #[test]
    fn prop_optimal_is_lower_bound(sequence in trace(), capacity in 1usize..6) {
        let optimal = run(Policy::Optimal, &sequence, capacity).unwrap().total_faults;
        for policy in [Policy::Fifo, Policy::Lru, Policy::Heuristic] {
            let faults = run(policy, &sequence, capacity).unwrap().total_faults;
            prop_assert!(optimal <= faults, "{} had {} faults, optimal {}", policy, faults, optimal);
        }
    }

    /// FIFO always evicts the page that has been resident longest.
    #[test]
    fn prop_fifo_evicts_oldest_arrival(sequence in trace(), capacity in 1usize..6) {
        let result = run(Policy::Fifo, &sequence, capacity).unwrap();

        // Arrival step of each resident page.
        let mut arrived: Vec<(u8, usize)> = Vec::new();
        for (i, step) in result.steps.iter().enumerate() {
            if step.is_hit {
                continue;
            }
            if let Some(victim) = step.evicted_page() {
                let oldest = arrived.iter().min_by_key(|(_, at)| *at).map(|(page, _)| *page);
                prop_assert_eq!(Some(*victim), oldest);
                arrived.retain(|(page, _)| page != victim);
            }
            arrived.push((step.page, i));
        }
    }

    /// With a frame per distinct page, each page faults exactly once.
    #[test]
    fn prop_enough_frames_only_cold_faults(policy in policy(), sequence in trace()) {
        let distinct = sequence.iter().collect::<HashSet<_>>().len();
        let result = run(policy, &sequence, distinct.max(1)).unwrap();
        prop_assert_eq!(result.total_faults, distinct);
    }
}
