//! Configuration schema definitions.
//!
//! This module defines the settings structure for the monitor.
//! All types derive Serde traits for deserialization from the TOML settings file.

use serde::{Deserialize, Serialize};

/// Root settings for the availability monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Cycle period and bound.
    pub scheduler: SchedulerConfig,

    /// HTTP probe behaviour.
    pub probe: ProbeConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Read-only status API.
    pub status: StatusConfig,
}

/// Scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Seconds between cycle starts.
    pub interval_secs: u64,

    /// Stop after this many completed cycles (0 = run until signalled).
    pub max_cycles: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 15,
            max_cycles: 0,
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Hard deadline for one request, in milliseconds.
    pub timeout_ms: u64,

    /// Responses at or above this latency are classified down.
    pub latency_threshold_ms: u64,

    /// Maximum in-flight probes within one cycle (1 = sequential).
    pub max_concurrency: usize,

    /// Honour HTTP(S)_PROXY environment variables.
    pub use_env_proxy: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            latency_threshold_ms: 500,
            max_concurrency: 1,
            use_env_proxy: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Prometheus exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Status API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Serve the read-only status API.
    pub enabled: bool,

    /// Status API bind address.
    pub bind_address: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bind_address: "127.0.0.1:8081".to_string(),
        }
    }
}
