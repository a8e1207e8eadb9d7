//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define monitor metrics (probe outcomes, latency, skips, cycles, availability)
//! - Expose a Prometheus-compatible scrape endpoint
//!
//! # Metrics
//! - `monitor_probes_total` (counter): probes by domain and outcome
//! - `monitor_probe_duration_seconds` (histogram): probe latency by domain
//! - `monitor_endpoints_skipped_total` (counter): endpoints without a hostname
//! - `monitor_cycles_total` (counter): completed cycles
//! - `monitor_cycle_duration_seconds` (histogram): wall time per cycle
//! - `monitor_domain_availability_percent` (gauge): last reported percentage
//!
//! Without an installed recorder every call here is a no-op.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Duration;

use crate::probe::ProbeOutcome;

/// Install the Prometheus recorder and its HTTP listener. Requires a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!("monitor_probes_total", "Probes by domain and outcome");
    describe_histogram!("monitor_probe_duration_seconds", "Probe latency by domain");
    describe_counter!(
        "monitor_endpoints_skipped_total",
        "Endpoints skipped because their URL had no hostname"
    );
    describe_counter!("monitor_cycles_total", "Completed check cycles");
    describe_histogram!("monitor_cycle_duration_seconds", "Wall time of one check cycle");
    describe_gauge!(
        "monitor_domain_availability_percent",
        "Cumulative availability per domain, rounded"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_probe(domain: &str, outcome: ProbeOutcome, elapsed_ms: u64) {
    counter!(
        "monitor_probes_total",
        "domain" => domain.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    histogram!("monitor_probe_duration_seconds", "domain" => domain.to_string())
        .record(elapsed_ms as f64 / 1000.0);
}

pub fn record_skipped() {
    counter!("monitor_endpoints_skipped_total").increment(1);
}

pub fn record_cycle(elapsed: Duration) {
    counter!("monitor_cycles_total").increment(1);
    histogram!("monitor_cycle_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_availability(domain: &str, percent: u32) {
    gauge!("monitor_domain_availability_percent", "domain" => domain.to_string())
        .set(percent as f64);
}
