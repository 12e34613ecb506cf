//! Route artifact storage and the live route table.
//!
//! # Data Flow
//! ```text
//! routes.json
//!     → artifact.rs (read, deserialize, validate records)
//!     → RouteIndex::build / build_strict
//!     → table.rs (atomic publish via ArcSwap)
//!
//! On change:
//!     watcher.rs detects modification
//!     → artifact.rs loads new index
//!     → RouteTable::replace swaps it in
//! ```
//!
//! # Design Decisions
//! - The index is immutable once published; changes require a full reload
//! - Boundary errors (I/O, JSON, invalid records) are returned, never masked

pub mod artifact;
pub mod table;
pub mod watcher;

pub use artifact::{load_index, load_records, save_records, ArtifactError};
pub use table::RouteTable;
pub use watcher::ArtifactWatcher;
