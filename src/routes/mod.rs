//! Route model, index and resolver.
//!
//! # Data Flow
//! ```text
//! Vec<RouteRecord> (parser output or loaded artifact)
//!     → index.rs (ordered list + name → path map)
//!     → resolver.rs (name + args → concrete path)
//! ```
//!
//! # Design Decisions
//! - The index only maps names to paths; records are kept for listing
//! - Resolution is a pure function of (index, name, args)

pub mod index;
pub mod record;
pub mod resolver;

pub use index::{DuplicateNames, RouteIndex};
pub use record::RouteRecord;
pub use resolver::{placeholders, resolve, Placeholder, ResolveError, RouteArgs};
