//! Check cycles.
//!
//! # Data Flow
//! ```text
//! Scheduler tick (scheduler.rs)
//!     → CycleRunner::run_cycle (runner.rs): probe every endpoint, update store
//!     → AvailabilityReporter::report: print per-domain percentages
//!     → next tick, or stop when max_cycles is reached / shutdown fires
//! ```

pub mod runner;
pub mod scheduler;

pub use runner::{CycleRunner, CycleSummary};
pub use scheduler::{Scheduler, SchedulerError, SchedulerState, StopReason};
