//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint file (YAML)
//!     → loader.rs (read & deserialize)
//!     → Vec<EndpointDefinition> (ordered, immutable)
//!     → owned by the cycle runner
//!
//! settings file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig
//!     → CLI overrides applied in main.rs
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All settings have defaults, so the settings file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod endpoints;
pub mod loader;
pub mod schema;
pub mod validation;

pub use endpoints::EndpointDefinition;
pub use loader::{load_config, load_endpoints, ConfigError};
pub use schema::{
    LogFormat, MonitorConfig, ObservabilityConfig, ProbeConfig, SchedulerConfig, StatusConfig,
};
pub use validation::{validate_config, ValidationError};
