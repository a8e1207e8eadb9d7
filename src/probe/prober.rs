//! Single-endpoint HTTP probe.
//!
//! # Responsibilities
//! - Build the request exactly as configured (method, headers, body)
//! - Time the request up to receipt of the response head
//! - Drain and release the response body
//! - Classify the outcome
//!
//! # Design Decisions
//! - Exactly one attempt per call; no retries
//! - Every failure to obtain a response is a Down outcome, not an error
//! - The client-wide timeout bounds every probe, including the body drain

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::config::{EndpointDefinition, ProbeConfig};
use crate::probe::classify::{classify, ProbeOutcome};

/// Result of probing one endpoint once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub outcome: ProbeOutcome,
    /// Wall-clock time until the response head arrived or the request failed.
    pub elapsed_ms: u64,
    /// Response status, absent when no response was received.
    pub status: Option<u16>,
    /// Why no response was received.
    pub error: Option<String>,
}

impl ProbeResult {
    fn failed(elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            outcome: ProbeOutcome::Down,
            elapsed_ms: elapsed.as_millis() as u64,
            status: None,
            error: Some(error.into()),
        }
    }
}

/// Executes HTTP probes with a shared client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    latency_threshold: Duration,
}

impl Prober {
    /// Build a prober from probe settings.
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().timeout(Duration::from_millis(config.timeout_ms));
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            latency_threshold: Duration::from_millis(config.latency_threshold_ms),
        })
    }

    pub fn latency_threshold(&self) -> Duration {
        self.latency_threshold
    }

    /// Probe `endpoint` once and classify the outcome.
    pub async fn probe(&self, endpoint: &EndpointDefinition) -> ProbeResult {
        let start = Instant::now();

        let method = match Method::from_bytes(endpoint.effective_method().as_bytes()) {
            Ok(m) => m,
            Err(e) => return ProbeResult::failed(start.elapsed(), format!("invalid method: {}", e)),
        };

        let headers = match build_headers(endpoint) {
            Ok(h) => h,
            Err(e) => return ProbeResult::failed(start.elapsed(), e),
        };

        let request = self
            .client
            .request(method, &endpoint.url)
            .headers(headers)
            .body(endpoint.body().to_string());

        let mut response = match request.send().await {
            Ok(response) => response,
            Err(e) => return ProbeResult::failed(start.elapsed(), describe(&e)),
        };
        let elapsed = start.elapsed();
        let status = response.status();

        // Drained chunk by chunk whatever the outcome; content is unused.
        loop {
            match response.chunk().await {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!(url = %endpoint.url, error = %e, "Failed to drain response body");
                    break;
                }
            }
        }

        ProbeResult {
            outcome: classify(status, elapsed, self.latency_threshold),
            elapsed_ms: elapsed.as_millis() as u64,
            status: Some(status.as_u16()),
            error: None,
        }
    }
}

fn build_headers(endpoint: &EndpointDefinition) -> Result<HeaderMap, String> {
    let mut headers = HeaderMap::with_capacity(endpoint.headers.len());
    for (key, value) in &endpoint.headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| format!("invalid header name {:?}: {}", key, e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| format!("invalid value for header {:?}: {}", key, e))?;
        // insert replaces, so a repeated key keeps the last value
        headers.insert(name, value);
    }
    Ok(headers)
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timeout: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else if err.is_builder() {
        format!("invalid request: {}", err)
    } else {
        err.to_string()
    }
}
