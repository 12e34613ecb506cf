//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! parser, artifact store, route table produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, routes, name) instead of formatted strings
//! - Metrics are cheap and optional

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
