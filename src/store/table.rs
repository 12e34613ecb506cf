//! Process-scoped route table.
//!
//! # Responsibilities
//! - Own the currently published [`RouteIndex`]
//! - Reload it from the artifact on request
//! - Answer list/resolve queries from the host application
//!
//! # Design Decisions
//! - Readers take a snapshot (`Arc<RouteIndex>`); no lock on the read path
//! - Reload swaps the whole index; a failed reload keeps the old one
//! - Passed around explicitly instead of living in a global

use std::path::{Path, PathBuf};
use std::sync::Arc;
use arc_swap::ArcSwap;

use crate::config::RouteListConfig;
use crate::observability::metrics;
use crate::routes::{ResolveError, RouteArgs, RouteIndex, RouteRecord};
use crate::store::artifact::{load_index, ArtifactError};

/// Shared, atomically replaceable route index.
#[derive(Debug)]
pub struct RouteTable {
    inner: ArcSwap<RouteIndex>,
    artifact: Option<PathBuf>,
    strict_names: bool,
    add_script_name: bool,
    metrics_enabled: bool,
}

impl RouteTable {
    /// Load the artifact named by `config` and publish it.
    pub fn open(config: &RouteListConfig) -> Result<Self, ArtifactError> {
        let artifact = config.artifact_path();
        let index = load_index(&artifact, config.strict_names)?;
        let table = Self {
            inner: ArcSwap::from_pointee(index),
            artifact: Some(artifact),
            strict_names: config.strict_names,
            add_script_name: config.add_script_name,
            metrics_enabled: config.observability.metrics_enabled,
        };
        table.record_loaded();
        Ok(table)
    }

    /// Wrap an already built index. [`RouteTable::reload`] is a no-op for such tables.
    pub fn from_index(index: RouteIndex) -> Self {
        Self {
            inner: ArcSwap::from_pointee(index),
            artifact: None,
            strict_names: false,
            add_script_name: false,
            metrics_enabled: false,
        }
    }

    /// Enable or disable script-name prefixing for [`RouteTable::resolve_mounted`].
    pub fn with_script_name(mut self, enabled: bool) -> Self {
        self.add_script_name = enabled;
        self
    }

    /// Artifact backing this table, if any.
    pub fn artifact_path(&self) -> Option<&Path> {
        self.artifact.as_deref()
    }

    pub fn strict_names(&self) -> bool {
        self.strict_names
    }

    /// Snapshot of the currently published index.
    pub fn current(&self) -> Arc<RouteIndex> {
        self.inner.load_full()
    }

    /// All records of the current index, in loaded order.
    pub fn all_routes(&self) -> Vec<RouteRecord> {
        self.inner.load().all().to_vec()
    }

    /// Resolve `name` against the current index.
    pub fn resolve(&self, name: &str, args: Option<&RouteArgs>) -> Result<String, ResolveError> {
        let result = self.inner.load().resolve(name, args);
        if let Err(e) = &result {
            tracing::debug!(name = %name, error = %e, "Route resolution failed");
            if self.metrics_enabled {
                metrics::record_resolve_failure(e.kind());
            }
        }
        result
    }

    /// Resolve and, when script-name prefixing is enabled, prepend `script_name`.
    pub fn resolve_mounted(
        &self,
        script_name: &str,
        name: &str,
        args: Option<&RouteArgs>,
    ) -> Result<String, ResolveError> {
        let path = self.resolve(name, args)?;
        if self.add_script_name {
            Ok(format!("{}{}", script_name, path))
        } else {
            Ok(path)
        }
    }

    /// Publish `index`, replacing the current one.
    pub fn replace(&self, index: RouteIndex) {
        let routes = index.len();
        self.inner.store(Arc::new(index));
        tracing::info!(routes, "Route index published");
        self.record_loaded();
    }

    /// Re-read the artifact and publish the result.
    ///
    /// On failure the previous index stays in place and the error is returned.
    pub fn reload(&self) -> Result<(), ArtifactError> {
        let Some(path) = &self.artifact else {
            return Ok(());
        };
        match load_index(path, self.strict_names) {
            Ok(index) => {
                self.replace(index);
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to reload routes. Keeping current index.");
                Err(e)
            }
        }
    }

    fn record_loaded(&self) {
        if self.metrics_enabled {
            metrics::record_index_loaded(self.inner.load().len());
        }
    }
}
