//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Root configuration for a router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Logging behaviour.
    pub logging: LoggingConfig,

    /// Metrics recording.
    pub metrics: MetricsConfig,

    /// Static aliases, each mapping an identifier to a fixed path.
    pub aliases: Vec<AliasConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log unresolved paths and aliases at warn level (debug otherwise).
    pub log_unmatched: bool,

    /// Filter directive used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_unmatched: true,
            default_filter: "typed_router=info".to_string(),
        }
    }
}

/// Metrics configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MetricsConfig {
    /// Record resolution counters and latencies through the `metrics` facade.
    pub enabled: bool,
}

/// A static alias: unit context, fixed target path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AliasConfig {
    /// Alias identifier.
    pub identifier: String,

    /// Path the alias resolves to.
    pub target: Path,
}
