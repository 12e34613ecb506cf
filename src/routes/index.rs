//! Route index: ordered records plus a name -> path lookup.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Duplicate names: last write wins in the lookup, every record stays listed
//! - Strict mode rejects duplicate names instead

use std::collections::HashMap;
use thiserror::Error;

use crate::routes::record::RouteRecord;
use crate::routes::resolver::{self, ResolveError, RouteArgs};

/// Raised by [`RouteIndex::build_strict`] when names collide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate route names: {}", .names.join(", "))]
pub struct DuplicateNames {
    /// Each repeated name, once, in first-repeat order.
    pub names: Vec<String>,
}

/// Index over a loaded set of route records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteIndex {
    all: Vec<RouteRecord>,
    by_name: HashMap<String, String>,
}

impl RouteIndex {
    /// Build an index from records in their loaded order.
    pub fn build(records: Vec<RouteRecord>) -> Self {
        let mut by_name = HashMap::new();
        for record in &records {
            if let Some(name) = &record.name {
                if let Some(previous) = by_name.insert(name.clone(), record.path.clone()) {
                    tracing::debug!(name = %name, previous = %previous, path = %record.path, "Route name redefined; later path wins");
                }
            }
        }

        Self {
            all: records,
            by_name,
        }
    }

    /// Like [`RouteIndex::build`], but fails if any name is declared twice.
    pub fn build_strict(records: Vec<RouteRecord>) -> Result<Self, DuplicateNames> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut names = Vec::new();
        for name in records.iter().filter_map(|r| r.name.as_deref()) {
            let count = seen.entry(name).or_default();
            *count += 1;
            if *count == 2 {
                names.push(name.to_string());
            }
        }

        if !names.is_empty() {
            return Err(DuplicateNames { names });
        }
        Ok(Self::build(records))
    }

    /// Every record, in loaded order.
    pub fn all(&self) -> &[RouteRecord] {
        &self.all
    }

    /// Path template registered under `name`.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Resolve a named route against this index.
    pub fn resolve(&self, name: &str, args: Option<&RouteArgs>) -> Result<String, ResolveError> {
        resolver::resolve(self, name, args)
    }
}
