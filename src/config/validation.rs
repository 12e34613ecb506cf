//! Configuration and artifact validation.
//!
//! # Responsibilities
//! - Semantic validation of the configuration (serde handles syntactic)
//! - Structural checks on loaded route records (non-empty path and methods)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: input → Result<(), Vec<ValidationError>>

use std::fmt;
use crate::config::schema::RouteListConfig;
use crate::routes::RouteRecord;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyArtifactFile,
    UnknownLogLevel(String),
    /// Record at `index` has an empty path.
    EmptyPath { index: usize },
    /// Record at `index` lists `methods` but none of them.
    EmptyMethods { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyArtifactFile => write!(f, "file must not be empty"),
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "unknown log level '{}' (expected one of {})", level, LOG_LEVELS.join(", "))
            }
            ValidationError::EmptyPath { index } => write!(f, "route #{} has an empty path", index),
            ValidationError::EmptyMethods { index } => {
                write!(f, "route #{} has an empty methods list", index)
            }
        }
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &RouteListConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.file.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyArtifactFile);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate records read from an artifact.
pub fn validate_records(records: &[RouteRecord]) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| {
            let path = record.path.is_empty().then_some(ValidationError::EmptyPath { index });
            let methods = record
                .methods
                .as_ref()
                .filter(|m| m.is_empty())
                .map(|_| ValidationError::EmptyMethods { index });
            path.into_iter().chain(methods)
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
