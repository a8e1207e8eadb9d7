//! Availability report.

use serde::Serialize;
use std::io::{self, Write};

use crate::observability::metrics;
use crate::store::DomainStatusStore;

/// Line printed after every reporting pass.
pub const CYCLE_SEPARATOR: &str =
    "================================================================";

/// Cumulative availability of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub requests: u64,
    pub up_count: u64,
    /// `100 * up_count / requests`, rounded half away from zero.
    pub availability_percent: u32,
}

/// Compute the availability of every domain in the store, sorted by domain.
pub fn availability(store: &DomainStatusStore) -> Vec<DomainAvailability> {
    store
        .snapshot()
        .into_iter()
        .map(|(domain, status)| DomainAvailability {
            availability_percent: status.availability_percent(),
            requests: status.requests,
            up_count: status.up_count,
            domain,
        })
        .collect()
}

/// Writes availability lines for every domain, then the cycle separator.
#[derive(Debug)]
pub struct AvailabilityReporter<W> {
    out: W,
}

impl AvailabilityReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AvailabilityReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit one report pass. Reads the store without modifying it.
    pub fn report(&mut self, store: &DomainStatusStore) -> io::Result<Vec<DomainAvailability>> {
        let lines = availability(store);
        for line in &lines {
            writeln!(
                self.out,
                "{} has {}% availability percentage",
                line.domain, line.availability_percent
            )?;
            metrics::record_availability(&line.domain, line.availability_percent);
        }
        writeln!(self.out, "{}", CYCLE_SEPARATOR)?;
        self.out.flush()?;
        Ok(lines)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
