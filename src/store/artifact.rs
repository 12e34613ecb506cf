//! JSON route artifact: reading and writing the persisted record list.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::validation::{validate_records, ValidationError};
use crate::routes::{DuplicateNames, RouteIndex, RouteRecord};

/// Error type for artifact loading and saving.
#[derive(Debug)]
pub enum ArtifactError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(Vec<ValidationError>),
    DuplicateNames(DuplicateNames),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactError::Io(e) => write!(f, "IO error: {}", e),
            ArtifactError::Json(e) => write!(f, "JSON error: {}", e),
            ArtifactError::Validation(errors) => {
                write!(f, "Invalid routes: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ArtifactError::DuplicateNames(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArtifactError::Io(e) => Some(e),
            ArtifactError::Json(e) => Some(e),
            ArtifactError::Validation(_) => None,
            ArtifactError::DuplicateNames(e) => Some(e),
        }
    }
}

/// Parse records from JSON text.
pub fn records_from_str(json: &str) -> Result<Vec<RouteRecord>, ArtifactError> {
    let records: Vec<RouteRecord> = serde_json::from_str(json).map_err(ArtifactError::Json)?;
    validate_records(&records).map_err(ArtifactError::Validation)?;
    Ok(records)
}

/// Read and validate the records stored at `path`.
pub fn load_records(path: &Path) -> Result<Vec<RouteRecord>, ArtifactError> {
    let json = fs::read_to_string(path).map_err(ArtifactError::Io)?;
    records_from_str(&json)
}

/// Load the artifact at `path` and build an index from it.
pub fn load_index(path: &Path, strict_names: bool) -> Result<RouteIndex, ArtifactError> {
    let records = load_records(path)?;
    let index = if strict_names {
        RouteIndex::build_strict(records).map_err(ArtifactError::DuplicateNames)?
    } else {
        RouteIndex::build(records)
    };
    tracing::info!(path = %path.display(), routes = index.len(), "Loaded route artifact");
    Ok(index)
}

/// Serialize records to JSON text.
pub fn records_to_string(records: &[RouteRecord], pretty: bool) -> Result<String, ArtifactError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    json.map_err(ArtifactError::Json)
}

/// Write records to `path`, replacing any existing file.
pub fn save_records(path: &Path, records: &[RouteRecord], pretty: bool) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ArtifactError::Io)?;
    }

    let file = File::create(path).map_err(ArtifactError::Io)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(records_to_string(records, pretty)?.as_bytes())
        .map_err(ArtifactError::Io)?;
    writer.flush().map_err(ArtifactError::Io)?;

    tracing::info!(path = %path.display(), routes = records.len(), pretty, "Wrote route artifact");
    Ok(())
}
