//! HTTP probing subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointDefinition
//!     → prober.rs (build request, send, time, drain body)
//!     → classify.rs (2xx and latency < threshold → Up, else Down)
//!     → ProbeResult
//! ```

pub mod classify;
pub mod prober;

pub use classify::{classify, ProbeOutcome};
pub use prober::{ProbeResult, Prober};
