//! Poll scheduling.
//!
//! A [`PollScheduler`] runs probe cycles back to back with a fixed pause in
//! between. The pause starts when a cycle finishes, not when it starts, so
//! a slow cycle pushes every later cycle back and cycles never overlap.
//!
//! ```text
//!   Idle { next_cycle_at }  --deadline reached-->  Running
//!   Running  --cycle finished at t-->  Idle { next_cycle_at: t + interval }
//! ```
//!
//! The first cycle runs as soon as the scheduler is ticked.

pub mod clock;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{CycleOutcome, ProbeSession};

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::probe::Evaluator;
use crate::render::Presenter;

/// Pause between the end of one cycle and the start of the next.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Where the scheduler is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the timer.
    Idle {
        /// Clock time at which the next cycle becomes due.
        next_cycle_at: Duration,
    },
    /// A cycle is in progress.
    Running,
}

/// Summary of one completed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    /// Rows produced by the cycle.
    pub rows: usize,
    /// Whether the output was re-rendered.
    pub changed: bool,
    /// Clock time at which the cycle started.
    pub started_at: Duration,
    /// How long the cycle took.
    pub elapsed: Duration,
}

/// Drives a [`ProbeSession`] on a trailing timer.
pub struct PollScheduler<C: Clock> {
    session: ProbeSession,
    clock: C,
    interval: Duration,
    state: SchedulerState,
    cycles: u64,
}

impl<C: Clock> PollScheduler<C> {
    /// Create a scheduler whose first cycle is due immediately.
    pub fn new(session: ProbeSession, clock: C) -> Self {
        let next_cycle_at = clock.now();
        Self {
            session,
            clock,
            interval: DEFAULT_INTERVAL,
            state: SchedulerState::Idle { next_cycle_at },
            cycles: 0,
        }
    }

    /// Set the pause between cycles.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn session(&self) -> &ProbeSession {
        &self.session
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Check whether the timer has fired.
    pub fn is_due(&self) -> bool {
        match self.state {
            SchedulerState::Idle { next_cycle_at } => self.clock.now() >= next_cycle_at,
            SchedulerState::Running => false,
        }
    }

    /// Run a cycle if one is due.
    ///
    /// Returns `None` without touching the evaluator or presenter when the
    /// timer has not fired yet.
    pub fn tick(
        &mut self,
        evaluator: &mut dyn Evaluator,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<CycleReport>> {
        if !self.is_due() {
            return Ok(None);
        }
        self.run_cycle(evaluator, presenter).map(Some)
    }

    /// Sleep until each cycle is due and run it.
    ///
    /// Stops after `max_cycles` cycles, or never when `None`. The first
    /// error ends the loop. Returns the number of cycles completed.
    pub fn run(
        &mut self,
        evaluator: &mut dyn Evaluator,
        presenter: &mut dyn Presenter,
        max_cycles: Option<u64>,
    ) -> Result<u64> {
        let mut completed = 0;
        while max_cycles.map_or(true, |max| completed < max) {
            if let SchedulerState::Idle { next_cycle_at } = self.state {
                self.clock.sleep_until(next_cycle_at);
            }
            if self.tick(evaluator, presenter)?.is_some() {
                completed += 1;
            }
        }
        Ok(completed)
    }

    fn run_cycle(
        &mut self,
        evaluator: &mut dyn Evaluator,
        presenter: &mut dyn Presenter,
    ) -> Result<CycleReport> {
        self.state = SchedulerState::Running;
        let started_at = self.clock.now();

        let outcome = self.session.run_cycle(evaluator, presenter);

        // The timer is re-armed even when the cycle failed, so the state
        // never stays Running.
        let finished_at = self.clock.now();
        self.state = SchedulerState::Idle {
            next_cycle_at: finished_at + self.interval,
        };
        let outcome = outcome?;

        self.cycles += 1;
        let report = CycleReport {
            cycle: self.cycles,
            rows: outcome.rows,
            changed: outcome.decision.changed,
            started_at,
            elapsed: finished_at.saturating_sub(started_at),
        };
        debug!(
            "Cycle {} finished in {:?}: {} rows, changed={}",
            report.cycle, report.elapsed, report.rows, report.changed
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Catalogue, FeatureDescriptor, ReductionMode};
    use crate::error::ProbeError;
    use crate::render::{MockPresenter, RowRecord};

    fn session() -> ProbeSession {
        ProbeSession::new(Catalogue::new(vec![FeatureDescriptor::new(
            "(prefers-color-scheme: {value})",
            ReductionMode::Enumeration,
            vec!["light".into(), "dark".into()],
        )
        .unwrap()]))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Evaluator whose answer flips every `period` cycles.
    struct Toggling {
        cycle: u64,
        period: u64,
    }

    impl Evaluator for Toggling {
        fn evaluate(&self, query: &str) -> bool {
            let expected = if (self.cycle / self.period) % 2 == 1 {
                "(prefers-color-scheme: dark)"
            } else {
                "(prefers-color-scheme: light)"
            };
            query == expected
        }

        fn begin_cycle(&mut self) {
            self.cycle += 1;
        }
    }

    #[test]
    fn first_cycle_runs_immediately() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut presenter = MockPresenter::new();

        assert!(scheduler.is_due());
        let report = scheduler
            .tick(&mut |_: &str| false, &mut presenter)
            .unwrap()
            .unwrap();

        assert_eq!(report.cycle, 1);
        assert_eq!(report.started_at, Duration::ZERO);
        assert!(report.changed);
        assert_eq!(
            scheduler.state(),
            SchedulerState::Idle {
                next_cycle_at: ms(1000)
            }
        );
    }

    #[test]
    fn tick_waits_for_interval() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut presenter = MockPresenter::new();
        let mut evaluator = |_: &str| false;

        scheduler.tick(&mut evaluator, &mut presenter).unwrap();
        assert!(scheduler.tick(&mut evaluator, &mut presenter).unwrap().is_none());

        clock.advance(ms(999));
        assert!(scheduler.tick(&mut evaluator, &mut presenter).unwrap().is_none());

        clock.advance(ms(1));
        let report = scheduler.tick(&mut evaluator, &mut presenter).unwrap();
        assert_eq!(report.map(|r| r.cycle), Some(2));
    }

    #[test]
    fn slow_cycle_delays_next_deadline() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut presenter = MockPresenter::new();
        let mut evaluator = |query: &str| {
            if query.ends_with("light)") {
                clock.advance(ms(250));
            }
            false
        };

        let report = scheduler
            .tick(&mut evaluator, &mut presenter)
            .unwrap()
            .unwrap();

        assert_eq!(report.elapsed, ms(250));
        assert_eq!(
            scheduler.state(),
            SchedulerState::Idle {
                next_cycle_at: ms(1250)
            }
        );
    }

    #[test]
    fn run_spaces_cycles_by_interval() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock).with_interval(ms(500));
        let mut presenter = MockPresenter::new();
        let mut evaluator = Toggling {
            cycle: 0,
            period: 100,
        };

        let completed = scheduler
            .run(&mut evaluator, &mut presenter, Some(3))
            .unwrap();

        assert_eq!(completed, 3);
        assert_eq!(scheduler.cycles(), 3);
        // Cycles at 0, 500 and 1000; no sleep after the last one.
        assert_eq!(clock.now(), ms(1000));
    }

    #[test]
    fn unchanged_cycles_do_not_render() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut presenter = MockPresenter::new();
        let mut evaluator = |q: &str| q == "(prefers-color-scheme: dark)";

        scheduler
            .run(&mut evaluator, &mut presenter, Some(5))
            .unwrap();

        assert_eq!(presenter.renders().len(), 1);
        assert_eq!(presenter.displayed_labels(), vec!["(prefers-color-scheme: {value})"]);
    }

    #[test]
    fn changed_environment_renders_again() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut presenter = MockPresenter::new();
        let mut evaluator = Toggling {
            cycle: 0,
            period: 2,
        };

        // cycle numbers 1..=4 answer light, dark, dark, light
        scheduler
            .run(&mut evaluator, &mut presenter, Some(4))
            .unwrap();

        let summaries: Vec<_> = presenter
            .renders()
            .iter()
            .map(|rows| rows[0].matched_summary.clone())
            .collect();
        assert_eq!(summaries, vec!["light", "dark", "light"]);
    }

    struct FailingPresenter;

    impl Presenter for FailingPresenter {
        fn replace(&mut self, _rows: &[RowRecord]) -> crate::error::Result<()> {
            Err(ProbeError::Other(anyhow::anyhow!("display detached")))
        }
    }

    #[test]
    fn presenter_failure_ends_run() {
        let clock = ManualClock::new();
        let mut scheduler = PollScheduler::new(session(), &clock);
        let mut evaluator = |_: &str| false;

        let result = scheduler.run(&mut evaluator, &mut FailingPresenter, None);

        assert!(result.is_err());
        assert_eq!(scheduler.cycles(), 0);
        assert_eq!(
            scheduler.state(),
            SchedulerState::Idle {
                next_cycle_at: ms(1000)
            }
        );
    }

    #[test]
    fn default_interval_is_one_second() {
        let scheduler = PollScheduler::new(session(), ManualClock::new());
        assert_eq!(scheduler.interval(), DEFAULT_INTERVAL);
        assert_eq!(DEFAULT_INTERVAL, ms(1000));
    }
}
