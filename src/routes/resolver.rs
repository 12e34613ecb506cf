//! Named route resolution.
//!
//! # Responsibilities
//! - Look up a route template by name
//! - Substitute `:placeholder` segments from keyed or positional values
//! - Reject every mismatch with a typed error
//!
//! # Design Decisions
//! - A placeholder is `:` followed by one or more characters other than `/`
//! - Keyed values only fail on missing keys; extra keys are ignored
//! - Positional values must match the placeholder count exactly

use std::collections::HashMap;
use thiserror::Error;

use crate::routes::index::RouteIndex;

/// Errors raised while resolving a named route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No route is registered under the requested name.
    #[error("no route exists with the name: {0}")]
    UnknownRoute(String),

    /// A keyed substitution had no value for a placeholder.
    #[error("no matching value exists in the hash for named route {route}: {placeholder}")]
    MissingPlaceholderValue { route: String, placeholder: String },

    /// Positional values ran out before the last placeholder.
    #[error("not enough placeholder values provided for named route {route}: {placeholder}")]
    TooFewPlaceholderValues { route: String, placeholder: String },

    /// Positional values were left over after the last placeholder.
    #[error("too many placeholder values provided for named route {route}")]
    TooManyPlaceholderValues { route: String },
}

impl ResolveError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::UnknownRoute(_) => "unknown_route",
            ResolveError::MissingPlaceholderValue { .. } => "missing_value",
            ResolveError::TooFewPlaceholderValues { .. } => "too_few_values",
            ResolveError::TooManyPlaceholderValues { .. } => "too_many_values",
        }
    }
}

/// Substitution values for a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteArgs {
    /// Values looked up by placeholder identifier (without the leading `:`).
    Keyed(HashMap<String, String>),
    /// Values consumed in left-to-right placeholder order.
    Positional(Vec<String>),
}

impl RouteArgs {
    pub fn keyed<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        RouteArgs::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        RouteArgs::Positional(values.into_iter().map(|v| v.to_string()).collect())
    }
}

/// A placeholder found in a template, with its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub start: usize,
    pub end: usize,
    /// The full token, including the leading `:`.
    pub token: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Identifier used for keyed lookup.
    pub fn key(&self) -> &'a str {
        &self.token[1..]
    }
}

/// Iterator over the placeholders of a template, left to right.
pub struct Placeholders<'a> {
    template: &'a str,
    pos: usize,
}

/// Scan `template` for placeholder tokens.
pub fn placeholders(template: &str) -> Placeholders<'_> {
    Placeholders { template, pos: 0 }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.template.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;
            if bytes[start] != b':' {
                self.pos += 1;
                continue;
            }
            // `:` and `/` are ASCII, so these offsets are char boundaries.
            let end = self.template[start + 1..]
                .find('/')
                .map(|i| start + 1 + i)
                .unwrap_or(bytes.len());
            if end == start + 1 {
                // A lone `:` is literal text.
                self.pos += 1;
                continue;
            }
            self.pos = end;
            return Some(Placeholder {
                start,
                end,
                token: &self.template[start..end],
            });
        }
        None
    }
}

/// Resolve the route named `name` into a concrete path.
///
/// Without `args` the stored template is returned unchanged, placeholders
/// included.
pub fn resolve(
    index: &RouteIndex,
    name: &str,
    args: Option<&RouteArgs>,
) -> Result<String, ResolveError> {
    let template = index
        .path_for(name)
        .ok_or_else(|| ResolveError::UnknownRoute(name.to_string()))?;

    match args {
        None => Ok(template.to_string()),
        Some(RouteArgs::Keyed(values)) => substitute(template, |placeholder| {
            values
                .get(placeholder.key())
                .map(String::as_str)
                .ok_or_else(|| ResolveError::MissingPlaceholderValue {
                    route: name.to_string(),
                    placeholder: placeholder.token.to_string(),
                })
        }),
        Some(RouteArgs::Positional(values)) => {
            let mut remaining = values.iter();
            let path = substitute(template, |placeholder| {
                remaining.next().map(String::as_str).ok_or_else(|| {
                    ResolveError::TooFewPlaceholderValues {
                        route: name.to_string(),
                        placeholder: placeholder.token.to_string(),
                    }
                })
            })?;

            if remaining.next().is_some() {
                return Err(ResolveError::TooManyPlaceholderValues {
                    route: name.to_string(),
                });
            }
            Ok(path)
        }
    }
}

/// Rebuild `template`, replacing each placeholder with the value chosen by `value_for`.
fn substitute<'v, F>(template: &str, mut value_for: F) -> Result<String, ResolveError>
where
    F: FnMut(&Placeholder<'_>) -> Result<&'v str, ResolveError>,
{
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for placeholder in placeholders(template) {
        out.push_str(&template[last..placeholder.start]);
        out.push_str(value_for(&placeholder)?);
        last = placeholder.end;
    }
    out.push_str(&template[last..]);
    Ok(out)
}
