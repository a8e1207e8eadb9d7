//! Domain status store.
//!
//! # Responsibilities
//! - Hold cumulative request/up counters keyed by hostname
//! - Create entries lazily on the first probe of a new hostname
//! - Count endpoints skipped for lack of a hostname
//!
//! # Design Decisions
//! - Sharded map with per-key locks; recording one outcome is atomic per key
//! - Entries are never removed and counters never reset between cycles
//! - The cycle runner is the only writer; reporters and the status API read

pub mod domain;

pub use domain::{domain_of, DomainStatus, EndpointError};

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide aggregation of probe outcomes per domain.
#[derive(Debug, Default)]
pub struct DomainStatusStore {
    domains: DashMap<String, DomainStatus>,
    skipped: AtomicU64,
}

impl DomainStatusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the entry for `domain` and account for one probe.
    pub fn record(&self, domain: &str, up: bool) {
        self.domains.entry(domain.to_string()).or_default().record(up);
    }

    /// Count one endpoint skipped because its URL had no usable hostname.
    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Counters for a single domain, if it has been probed.
    pub fn get(&self, domain: &str) -> Option<DomainStatus> {
        self.domains.get(domain).map(|entry| *entry)
    }

    /// Copy of every entry, sorted by domain name.
    pub fn snapshot(&self) -> Vec<(String, DomainStatus)> {
        let mut entries: Vec<_> = self
            .domains
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Total endpoints skipped since startup.
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
