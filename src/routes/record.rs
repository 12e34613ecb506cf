//! Route record definition.
//!
//! This is the unit exchanged between the comment parser, the JSON artifact
//! and the route index. Field names and optionality match existing artifacts.

use serde::{Deserialize, Serialize};

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteRecord {
    /// Path template, e.g. `/foo/baz/quux/:quux_id`.
    pub path: String,

    /// Request methods (e.g. `GET`, `POST`). `None` means unspecified.
    /// Order is preserved and duplicates are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,

    /// Name used for reverse lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteRecord {
    /// Create a record with only a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: None,
            name: None,
        }
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
