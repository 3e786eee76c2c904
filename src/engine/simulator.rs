//! Simulator - the replay driver.
//!
//! The [`Simulator`] provides:
//! - One ordered pass over a reference sequence per run
//! - Hit/fault classification against a fixed-capacity frame set
//! - Victim selection delegated to the chosen replacer
//! - A complete, owned trace of every step

use std::time::Instant;

use log::{debug, trace};

use crate::common::{Error, PageKey, Result, SimulatorConfig, SlotId};
use crate::engine::replacer::{Policy, ReplacementPolicy, Replacer, VictimContext};
use crate::engine::result::{hit_ratio, Eviction, SimulationResult, StepRecord};
use crate::engine::{FrameSet, FrameSnapshot, PageHistory};

/// Replays reference sequences under a replacement policy.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                    Simulator::run                           │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │ PageHistory  │  │        frames: FrameSet<P>        │   │
/// │  │ freq / last  │  │  [slot0] [slot1] [slot2] ...      │   │
/// │  │ next / left  │  └───────────────────────────────────┘   │
/// │  └──────────────┘  ┌──────────────┐  ┌──────────────┐      │
/// │                    │   replacer   │  │ steps + hist │      │
/// │                    │   Replacer   │  │   (output)   │      │
/// │                    └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// A `Simulator` holds only configuration. Every run builds its own frame
/// set, bookkeeping and replacer, so one simulator can serve any number of
/// runs, including concurrent ones.
///
/// # Usage
/// ```
/// use pagesim::{Policy, Simulator};
///
/// let sim = Simulator::new();
/// let result = sim.run(Policy::Fifo, &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3).unwrap();
/// assert_eq!(result.total_faults, 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with a custom configuration.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if the configuration fails validation
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    // ========================================================================
    // Public API: Run
    // ========================================================================

    /// Replay `sequence` under `policy` with `capacity` frames.
    ///
    /// An empty sequence is valid and yields no steps, no faults and no hit
    /// ratio.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn run<P: PageKey>(&self, policy: Policy, sequence: &[P], capacity: usize) -> Result<SimulationResult<P>> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        let started = Instant::now();
        debug!(
            "{}: replaying {} references over {} frames",
            policy,
            sequence.len(),
            capacity
        );

        let replay = Replay::new(Replacer::for_policy(policy, &self.config), sequence, capacity).play()?;
        let total_faults = replay.total_faults;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "{}: {} faults in {} references ({:.3} ms)",
            policy,
            total_faults,
            sequence.len(),
            elapsed_ms
        );

        Ok(SimulationResult {
            policy,
            capacity,
            total_faults,
            frame_history: replay.frame_history,
            steps: replay.steps,
            hit_ratio: hit_ratio(sequence.len(), total_faults),
            elapsed_ms,
        })
    }

    /// Like [`Simulator::run`], with the policy given by name.
    ///
    /// # Errors
    /// - `Error::UnknownPolicy` if `name` is not a known policy
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn run_named<P: PageKey>(&self, name: &str, sequence: &[P], capacity: usize) -> Result<SimulationResult<P>> {
        let policy: Policy = name.parse()?;
        self.run(policy, sequence, capacity)
    }
}

/// Replay `sequence` under `policy` with the default configuration.
///
/// # Errors
/// - `Error::InvalidCapacity` if `capacity` is 0
pub fn run<P: PageKey>(policy: Policy, sequence: &[P], capacity: usize) -> Result<SimulationResult<P>> {
    Simulator::new().run(policy, sequence, capacity)
}

/// The mutable state of one run.
struct Replay<'a, P> {
    sequence: &'a [P],
    frames: FrameSet<P>,
    history: PageHistory<P>,
    replacer: Replacer,
    frame_history: Vec<FrameSnapshot<P>>,
    steps: Vec<StepRecord<P>>,
    total_faults: usize,
}

impl<'a, P: PageKey> Replay<'a, P> {
    fn new(replacer: Replacer, sequence: &'a [P], capacity: usize) -> Self {
        Self {
            sequence,
            frames: FrameSet::new(capacity),
            history: PageHistory::new(sequence),
            replacer,
            frame_history: Vec::with_capacity(sequence.len()),
            steps: Vec::with_capacity(sequence.len()),
            total_faults: 0,
        }
    }

    /// Walk the whole sequence once.
    fn play(mut self) -> Result<Self> {
        let sequence = self.sequence;
        for (step, page) in sequence.iter().enumerate() {
            self.reference(page, step)?;
        }
        Ok(self)
    }

    // ========================================================================
    // Internal: Core reference logic
    // ========================================================================

    fn reference(&mut self, page: &P, step: usize) -> Result<()> {
        self.history.record(page, step);

        let (slot, is_hit, evicted) = match self.frames.position(page) {
            Some(slot) => (slot, true, None),
            None => {
                let (slot, evicted) = self.handle_fault(page, step)?;
                (slot, false, evicted)
            }
        };

        let frames = self.frames.snapshot();
        self.frame_history.push(frames.clone());
        self.steps.push(StepRecord {
            page: page.clone(),
            slot,
            frames,
            is_hit,
            evicted,
        });
        Ok(())
    }

    /// Handle a fault: fill a free slot, or evict if the set is full.
    fn handle_fault(&mut self, page: &P, step: usize) -> Result<(SlotId, Option<Eviction<P>>)> {
        self.total_faults += 1;

        if let Some(slot) = self.frames.insert(page.clone()) {
            self.replacer.record_insert(slot);
            return Ok((slot, None));
        }

        self.evict_and_replace(page, step)
    }

    /// Ask the replacer for a victim and swap `page` into its slot.
    fn evict_and_replace(&mut self, page: &P, step: usize) -> Result<(SlotId, Option<Eviction<P>>)> {
        let ctx = VictimContext {
            frames: &self.frames,
            history: &self.history,
            sequence: self.sequence,
            step,
        };
        let slot = self
            .replacer
            .select_victim(&ctx)
            .ok_or(Error::NoVictim { step })?;

        let victim = self
            .frames
            .replace(slot, page.clone())
            .ok_or(Error::NoVictim { step })?;
        self.replacer.record_insert(slot);

        trace!(
            "{}: step {} evicted {:?} from {} for {:?}",
            self.replacer.policy(),
            step,
            victim,
            slot,
            page
        );

        Ok((slot, Some(Eviction { page: victim, slot })))
    }
}
