//! Per-domain counters and hostname extraction.

use serde::Serialize;
use thiserror::Error;
use url::{Host, Url};

/// Why an endpoint URL could not be attributed to a domain.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The URL string is not an absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no hostname (e.g. `mailto:` or `file:///`).
    #[error("url {0:?} has no hostname")]
    MissingHost(String),
}

/// Extract the aggregation key for an endpoint URL.
///
/// The key is the bare hostname: scheme, port, path and query are dropped, and
/// IPv6 literals lose their brackets.
pub fn domain_of(raw: &str) -> Result<String, EndpointError> {
    let url = Url::parse(raw).map_err(|source| EndpointError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.host() {
        Some(Host::Domain(d)) if !d.is_empty() => Ok(d.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(EndpointError::MissingHost(raw.to_string())),
    }
}

/// Cumulative probe counters for one domain.
///
/// `up_count <= requests` holds for every value produced by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DomainStatus {
    /// Probe attempts attributed to this domain, successful or not.
    pub requests: u64,
    /// Attempts classified as up.
    pub up_count: u64,
}

impl DomainStatus {
    /// Account for one probe attempt.
    pub fn record(&mut self, up: bool) {
        self.requests += 1;
        if up {
            self.up_count += 1;
        }
    }

    /// Availability as a percentage in `[0.0, 100.0]`; 0.0 before any request.
    pub fn availability(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        100.0 * (self.up_count as f64 / self.requests as f64)
    }

    /// Availability rounded half away from zero to a whole percent.
    pub fn availability_percent(&self) -> u32 {
        self.availability().round() as u32
    }
}
