//! One pass over every configured endpoint.
//!
//! # Responsibilities
//! - Resolve each endpoint's domain, skipping endpoints without a hostname
//! - Probe each remaining endpoint once
//! - Record every outcome in the domain status store, in configuration order
//!
//! # Design Decisions
//! - Endpoints are independent; one failure never affects another's outcome
//! - Probes may overlap up to `max_concurrency`, store writes never do
//! - With `max_concurrency = 1` probing is strictly sequential

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::EndpointDefinition;
use crate::observability::metrics;
use crate::probe::{ProbeResult, Prober};
use crate::store::{domain_of, DomainStatusStore, EndpointError};

/// Counts for one completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    /// Endpoints that were probed.
    pub probed: usize,
    pub up: usize,
    pub down: usize,
    /// Endpoints skipped for lack of a hostname.
    pub skipped: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

enum Attempt<'a> {
    Skipped(&'a EndpointDefinition, EndpointError),
    Probed(&'a EndpointDefinition, String, ProbeResult),
}

/// Runs check cycles over a fixed endpoint list.
pub struct CycleRunner {
    endpoints: Vec<EndpointDefinition>,
    prober: Prober,
    store: Arc<DomainStatusStore>,
    max_concurrency: usize,
}

impl CycleRunner {
    /// Create a sequential runner.
    pub fn new(endpoints: Vec<EndpointDefinition>, prober: Prober, store: Arc<DomainStatusStore>) -> Self {
        Self {
            endpoints,
            prober,
            store,
            max_concurrency: 1,
        }
    }

    /// Allow up to `limit` probes in flight within a cycle (minimum 1).
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    pub fn endpoints(&self) -> &[EndpointDefinition] {
        &self.endpoints
    }

    pub fn store(&self) -> &Arc<DomainStatusStore> {
        &self.store
    }

    /// Probe every endpoint once and fold the outcomes into the store.
    pub async fn run_cycle(&self) -> CycleSummary {
        let start = Instant::now();
        let mut summary = CycleSummary::default();
        let prober = &self.prober;

        let mut attempts = stream::iter(&self.endpoints)
            .map(move |endpoint| async move {
                match domain_of(&endpoint.url) {
                    Ok(domain) => {
                        let result = prober.probe(endpoint).await;
                        Attempt::Probed(endpoint, domain, result)
                    }
                    Err(e) => Attempt::Skipped(endpoint, e),
                }
            })
            .buffered(self.max_concurrency);

        while let Some(attempt) = attempts.next().await {
            match attempt {
                Attempt::Skipped(endpoint, error) => {
                    tracing::warn!(
                        endpoint = %endpoint.name,
                        url = %endpoint.url,
                        error = %error,
                        "Skipping endpoint without a usable hostname"
                    );
                    self.store.record_skipped();
                    metrics::record_skipped();
                    summary.skipped += 1;
                }
                Attempt::Probed(endpoint, domain, result) => {
                    let up = result.outcome.is_up();
                    self.store.record(&domain, up);
                    metrics::record_probe(&domain, result.outcome, result.elapsed_ms);
                    log_result(endpoint, &domain, &result);

                    summary.probed += 1;
                    if up {
                        summary.up += 1;
                    } else {
                        summary.down += 1;
                    }
                }
            }
        }

        summary.elapsed = start.elapsed();
        summary
    }
}

fn log_result(endpoint: &EndpointDefinition, domain: &str, result: &ProbeResult) {
    match (&result.error, result.outcome.is_up()) {
        (Some(error), _) => tracing::warn!(
            domain = %domain,
            endpoint = %endpoint.name,
            latency_ms = result.elapsed_ms,
            error = %error,
            "DOWN: request failed"
        ),
        (None, false) => tracing::info!(
            domain = %domain,
            endpoint = %endpoint.name,
            status = ?result.status,
            latency_ms = result.elapsed_ms,
            "DOWN"
        ),
        (None, true) => tracing::debug!(
            domain = %domain,
            endpoint = %endpoint.name,
            status = ?result.status,
            latency_ms = result.elapsed_ms,
            "UP"
        ),
    }
}
