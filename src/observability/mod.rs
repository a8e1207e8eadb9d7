//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Prober, cycle runner, reporter produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stderr, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (domain, endpoint, status, latency) on every probe event
//! - Metrics are optional and cost nothing when no recorder is installed

pub mod logging;
pub mod metrics;
