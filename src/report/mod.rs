//! Availability reporting.
//!
//! Turns the cumulative counters in the domain status store into rounded
//! percentages and prints one line per domain:
//!
//! ```text
//! fetch.com has 67% availability percentage
//! www.fetchrewards.com has 100% availability percentage
//! ================================================================
//! ```

pub mod availability;

pub use availability::{availability, AvailabilityReporter, DomainAvailability, CYCLE_SEPARATOR};
