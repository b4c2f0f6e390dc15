//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default log level when neither `RUST_LOG` nor a service setting is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Create a configuration for the named service with the default log level
    pub fn named(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Self::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
