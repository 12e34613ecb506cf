//! Line scanner for route annotations.
//!
//! Recognized forms (one per physical line):
//!
//! ```text
//! # route: /path/to/foo
//! # route: GET /path/to/foo
//! # route: GET|POST /path/to/foo/:foo_id
//! # route[route_name]: /path/to/foo
//! # route[foo]: GET|POST /path/to/foo/:foo_id
//! ```
//!
//! # Design Decisions
//! - Hand-written scanner, no regex
//! - A line that does not fully match yields `None`, never an error
//! - Empty `|` segments (`GET||POST`, `|GET`) are dropped, so a stored
//!   method list never contains an empty token

use crate::routes::RouteRecord;

/// Scan one line. Returns the record if the whole line is an annotation.
pub fn scan_line(line: &str) -> Option<RouteRecord> {
    let rest = line.trim_start_matches(is_space);
    let rest = rest.strip_prefix('#')?;
    let rest = rest.trim_start_matches(is_space);
    let rest = rest.strip_prefix("route")?;

    let (name, rest) = match rest.strip_prefix('[') {
        Some(bracketed) => {
            let close = bracketed.find(']')?;
            let name = &bracketed[..close];
            if name.is_empty() || !name.bytes().all(is_word) {
                return None;
            }
            (Some(name), &bracketed[close + 1..])
        }
        None => (None, rest),
    };

    let rest = rest.strip_prefix(':')?;
    if !rest.starts_with(is_space) {
        return None;
    }

    let mut tokens = rest.split(is_space).filter(|t| !t.is_empty());
    let first = tokens.next()?;
    let (methods, path) = match (tokens.next(), tokens.next()) {
        (None, _) => (None, first),
        (Some(path), None) if is_method_spec(first) => (Some(first), path),
        _ => return None,
    };

    let mut record = RouteRecord::new(path);
    if let Some(spec) = methods {
        let methods: Vec<&str> = spec.split('|').filter(|m| !m.is_empty()).collect();
        if !methods.is_empty() {
            record = record.with_methods(methods);
        }
    }
    if let Some(name) = name {
        record = record.with_name(name);
    }
    Some(record)
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_method_spec(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_uppercase() || b == b'|')
}
