//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load settings → Load endpoints → Init logging/metrics
//!     → Start status API → Start scheduler
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Scheduler stops at the next cycle boundary → Status API drains → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and exits non-zero
//! - A running cycle is never aborted; counters stay consistent

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::spawn_signal_listener;
