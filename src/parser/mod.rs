//! Comment parser subsystem.
//!
//! # Data Flow
//! ```text
//! source text (files, stdin, strings)
//!     → split into physical lines
//!     → comment.rs (scan each line against the annotation grammar)
//!     → Vec<RouteRecord> in input order
//! ```
//!
//! # Design Decisions
//! - Best effort: unrelated lines are skipped without error
//! - No merging or deduplication; consumers decide what to do with names
//! - Invalid UTF-8 is decoded lossily so binary noise cannot abort a scan

pub mod comment;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::routes::RouteRecord;

pub use comment::scan_line;

/// Parse route annotations from an in-memory string.
pub fn parse_str(input: &str) -> Vec<RouteRecord> {
    input.lines().filter_map(scan_line).collect()
}

/// Parse route annotations from a buffered reader.
pub fn parse_reader<R: BufRead>(mut reader: R) -> io::Result<Vec<RouteRecord>> {
    let mut routes = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if let Some(record) = scan_line(&String::from_utf8_lossy(&buf)) {
            routes.push(record);
        }
    }
    Ok(routes)
}

/// Parse several files in sequence, concatenating their records in order.
pub fn parse_files<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<RouteRecord>> {
    let mut routes = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file = File::open(path)?;
        let found = parse_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), routes = found.len(), "Parsed source file");
        routes.extend(found);
    }
    Ok(routes)
}
