//! Fixed-rate cycle scheduling.
//!
//! # States
//! ```text
//! Idle → Running → (tick)* → Stopped
//! ```
//! - Idle → Running: `run` called
//! - Running → Stopped: `max_cycles` completed, or shutdown received
//! - A stopped scheduler cannot be restarted
//!
//! # Design Decisions
//! - Tick *n* fires at `start + n * period`; the first fires immediately
//! - Ticks missed while a cycle overruns are skipped, never queued
//! - Exactly one cycle runs at a time; the report follows each cycle
//! - Shutdown is observed only between cycles

use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::SchedulerConfig;
use crate::cycle::runner::CycleRunner;
use crate::observability::metrics;
use crate::report::AvailabilityReporter;

/// Scheduler lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// Why a scheduler stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured number of cycles completed.
    MaxCyclesReached,
    /// An external stop was requested.
    Shutdown,
}

/// Errors raised before any cycle runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("cannot schedule cycles with a zero interval")]
    ZeroInterval,

    #[error("scheduler can only be started from Idle (currently {0:?})")]
    NotIdle(SchedulerState),
}

/// Drives the cycle runner and reporter on a fixed period.
pub struct Scheduler<W = io::Stdout> {
    runner: CycleRunner,
    reporter: AvailabilityReporter<W>,
    period: Duration,
    max_cycles: u64,
    completed: u64,
    state: SchedulerState,
}

impl<W: Write> Scheduler<W> {
    /// `max_cycles == 0` runs until shutdown.
    pub fn new(
        runner: CycleRunner,
        reporter: AvailabilityReporter<W>,
        period: Duration,
        max_cycles: u64,
    ) -> Self {
        Self {
            runner,
            reporter,
            period,
            max_cycles,
            completed: 0,
            state: SchedulerState::Idle,
        }
    }

    pub fn from_config(
        runner: CycleRunner,
        reporter: AvailabilityReporter<W>,
        config: &SchedulerConfig,
    ) -> Self {
        Self::new(
            runner,
            reporter,
            Duration::from_secs(config.interval_secs),
            config.max_cycles,
        )
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed
    }

    pub fn runner(&self) -> &CycleRunner {
        &self.runner
    }

    pub fn reporter(&self) -> &AvailabilityReporter<W> {
        &self.reporter
    }

    /// Run cycles until `max_cycles` completes or `shutdown` fires.
    ///
    /// A closed shutdown channel is treated as "no external stop possible".
    pub async fn run(
        &mut self,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<StopReason, SchedulerError> {
        if self.state != SchedulerState::Idle {
            return Err(SchedulerError::NotIdle(self.state));
        }
        if self.period.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }

        let mut ticker = time::interval_at(Instant::now(), self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.state = SchedulerState::Running;

        tracing::info!(
            interval_ms = self.period.as_millis() as u64,
            max_cycles = self.max_cycles,
            endpoints = self.runner.endpoints().len(),
            "Scheduler started"
        );

        let mut listening = true;
        loop {
            tokio::select! {
                biased;
                received = shutdown.recv(), if listening => match received {
                    Err(RecvError::Closed) => {
                        listening = false;
                        continue;
                    }
                    _ => return Ok(self.stop(StopReason::Shutdown)),
                },
                _ = ticker.tick() => {}
            }

            self.run_once().await;

            if self.max_cycles > 0 && self.completed >= self.max_cycles {
                return Ok(self.stop(StopReason::MaxCyclesReached));
            }
        }
    }

    async fn run_once(&mut self) {
        let cycle = self.completed + 1;
        let summary = self.runner.run_cycle().await;
        metrics::record_cycle(summary.elapsed);

        tracing::info!(
            cycle,
            probed = summary.probed,
            up = summary.up,
            down = summary.down,
            skipped = summary.skipped,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Cycle completed"
        );
        if summary.elapsed > self.period {
            tracing::warn!(
                cycle,
                elapsed_ms = summary.elapsed.as_millis() as u64,
                interval_ms = self.period.as_millis() as u64,
                "Cycle overran the interval, skipping missed ticks"
            );
        }

        if let Err(e) = self.reporter.report(self.runner.store()) {
            tracing::error!(cycle, error = %e, "Failed to write availability report");
        }
        self.completed = cycle;
    }

    fn stop(&mut self, reason: StopReason) -> StopReason {
        self.state = SchedulerState::Stopped;
        tracing::info!(reason = ?reason, completed = self.completed, "Scheduler stopped");
        reason
    }
}
