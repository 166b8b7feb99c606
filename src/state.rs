//! Run state machine for the progress button
//!
//! Keeps the click/tick/outcome logic free of egui so it can be driven with a
//! synthetic clock and a deterministic outcome sampler in tests.

use std::time::{Duration, Instant};
use tracing::debug;

/// Interval between progress ticks while a run is active
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Percentage points added per tick
pub const PROGRESS_STEP: u8 = 2;

/// Probability that a finished run settles as an error
pub const FAILURE_RATE: f64 = 0.3;

/// An in-flight run: live progress plus the tick cursor pacing it.
///
/// Owned by [`Phase::Running`], so the cursor is released on every exit from
/// the running state (outcome, reset, teardown) without a separate cleanup
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    progress: u8,
    last_tick: Instant,
}

impl Run {
    fn start(now: Instant) -> Self {
        Self {
            progress: 0,
            last_tick: now,
        }
    }

    /// Progress percentage, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

/// Lifecycle phase of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running(Run),
    Completed,
    Failed,
}

/// State for one progress button.
///
/// Clicks and tick advancement both land here so the widget stays a render
/// pass over derived values. The outcome sampler is injectable; the default
/// draws a uniform sample per run and fails with [`FAILURE_RATE`].
pub struct ProgressState {
    phase: Phase,
    sample_failure: Box<dyn FnMut() -> bool + Send>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    pub fn new() -> Self {
        Self::with_sampler(|| rand::random::<f64>() < FAILURE_RATE)
    }

    /// State with a custom outcome sampler; returning `true` fails the run.
    pub fn with_sampler(sample_failure: impl FnMut() -> bool + Send + 'static) -> Self {
        Self {
            phase: Phase::Idle,
            sample_failure: Box::new(sample_failure),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn has_failed(&self) -> bool {
        self.phase == Phase::Failed
    }

    /// Progress percentage: 0 when idle, live while running, exactly 100 once
    /// the run has settled either way.
    pub fn progress(&self) -> u8 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Running(run) => run.progress(),
            Phase::Completed | Phase::Failed => 100,
        }
    }

    /// Handle a click at `now`.
    ///
    /// Idle starts a run, a settled outcome resets straight to idle, and
    /// clicks while a run is active are ignored.
    pub fn click(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => {
                debug!("starting run");
                self.phase = Phase::Running(Run::start(now));
            }
            Phase::Running(_) => {}
            Phase::Completed | Phase::Failed => {
                debug!("resetting to idle");
                self.phase = Phase::Idle;
            }
        }
    }

    /// Advance the active run by every whole tick elapsed up to `now`.
    ///
    /// Progress lands on exactly 100 before the outcome is drawn, and the
    /// sampler runs once per run no matter how many ticks a single poll
    /// covers. Returns whether anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Phase::Running(run) = &mut self.phase else {
            return false;
        };

        let mut changed = false;
        let mut finished = false;
        while now.duration_since(run.last_tick) >= TICK_INTERVAL {
            run.last_tick += TICK_INTERVAL;
            run.progress = (run.progress + PROGRESS_STEP).min(100);
            changed = true;
            if run.progress == 100 {
                finished = true;
                break;
            }
        }

        if finished {
            let failed = (self.sample_failure)();
            debug!(failed, "run finished");
            self.phase = if failed { Phase::Failed } else { Phase::Completed };
        }
        changed
    }
}
