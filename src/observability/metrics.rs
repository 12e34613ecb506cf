//! Metrics collection.
//!
//! # Metrics
//! - `route_list_index_loads_total` (counter): successful index publications
//! - `route_list_index_routes` (gauge): records in the published index
//! - `route_list_resolve_failures_total` (counter): failed resolutions by `kind`
//!
//! # Design Decisions
//! - Uses the `metrics` facade only; the host installs a recorder/exporter
//! - Without a recorder every call is a no-op

use metrics::{counter, gauge};

pub fn record_index_loaded(routes: usize) {
    counter!("route_list_index_loads_total").increment(1);
    gauge!("route_list_index_routes").set(routes as f64);
}

pub fn record_resolve_failure(kind: &'static str) {
    counter!("route_list_resolve_failures_total", "kind" => kind).increment(1);
}
