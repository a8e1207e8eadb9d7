//! Endpoint definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One HTTP target to probe, as listed in the endpoint file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EndpointDefinition {
    /// Free-form label used in logs.
    #[serde(default)]
    pub name: String,

    /// Absolute URL; its hostname is the aggregation key.
    pub url: String,

    /// Headers sent verbatim with every probe.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    /// HTTP method; empty means GET.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Request payload sent verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl EndpointDefinition {
    /// Minimal GET endpoint.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            headers: HashMap::new(),
            method: None,
            body: None,
        }
    }

    /// The method to send: the configured one, or `GET` when absent or empty.
    pub fn effective_method(&self) -> &str {
        match self.method.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m,
            _ => "GET",
        }
    }

    /// The payload to send; empty when unset.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Parse an endpoint list from YAML text.
pub fn parse_endpoints(yaml: &str) -> Result<Vec<EndpointDefinition>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
