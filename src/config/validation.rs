//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, timeout covers the latency threshold)
//! - Validate bind addresses of enabled surfaces
//!
//! Endpoint URLs are not checked here. An endpoint without a usable hostname
//! is skipped at probe time, not rejected at startup.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scheduler.interval_secs must be greater than zero")]
    ZeroInterval,

    #[error("probe.latency_threshold_ms must be greater than zero")]
    ZeroLatencyThreshold,

    #[error("probe.timeout_ms ({timeout_ms}) must be at least probe.latency_threshold_ms ({threshold_ms})")]
    TimeoutBelowThreshold { timeout_ms: u64, threshold_ms: u64 },

    #[error("probe.max_concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("{field} is not a valid socket address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check every semantic rule and return all violations at once.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.scheduler.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    let probe = &config.probe;
    if probe.latency_threshold_ms == 0 {
        errors.push(ValidationError::ZeroLatencyThreshold);
    }
    if probe.timeout_ms < probe.latency_threshold_ms {
        errors.push(ValidationError::TimeoutBelowThreshold {
            timeout_ms: probe.timeout_ms,
            threshold_ms: probe.latency_threshold_ms,
        });
    }
    if probe.max_concurrency == 0 {
        errors.push(ValidationError::ZeroConcurrency);
    }

    let observability = &config.observability;
    if !matches!(
        observability.log_level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    ) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: observability.metrics_address.clone(),
        });
    }

    if config.status.enabled && config.status.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "status.bind_address",
            value: config.status.bind_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
