//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every section has defaults so an empty file is a valid configuration.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Root configuration for route listing and resolution.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouteListConfig {
    /// Route metadata artifact (JSON), relative to `root` when set.
    pub file: PathBuf,

    /// Base directory used to expand a relative `file`.
    pub root: Option<PathBuf>,

    /// Prefix resolved paths with the request's script name.
    pub add_script_name: bool,

    /// Reject artifacts that declare the same route name twice.
    pub strict_names: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouteListConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("routes.json"),
            root: None,
            add_script_name: false,
            strict_names: false,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl RouteListConfig {
    /// Location of the artifact after applying `root`.
    pub fn artifact_path(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.join(&self.file),
            None => self.file.clone(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record counters through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
