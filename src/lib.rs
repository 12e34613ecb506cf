//! Route metadata extraction and named route resolution.
//!
//! Two stages:
//! - authoring time: [`parser`] scrapes `# route:` comments into [`RouteRecord`]s,
//!   which [`store::artifact`] persists as JSON
//! - request time: [`store::RouteTable`] loads the artifact into a [`RouteIndex`]
//!   and resolves route names into concrete paths

pub mod config;
pub mod observability;
pub mod parser;
pub mod routes;
pub mod store;

pub use config::RouteListConfig;
pub use routes::{resolve, ResolveError, RouteArgs, RouteIndex, RouteRecord};
pub use store::RouteTable;
