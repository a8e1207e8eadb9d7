//! HTTP availability monitor library.
//!
//! Probes a fixed list of HTTP endpoints on a fixed interval, classifies each
//! probe as up or down, and reports the cumulative availability of every domain.

pub mod admin;
pub mod config;
pub mod cycle;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod report;
pub mod store;

pub use config::{EndpointDefinition, MonitorConfig};
pub use cycle::{CycleRunner, Scheduler, StopReason};
pub use lifecycle::Shutdown;
pub use probe::{ProbeOutcome, Prober};
pub use report::AvailabilityReporter;
pub use store::{DomainStatus, DomainStatusStore};
