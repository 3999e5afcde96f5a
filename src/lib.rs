//! Gladius - deduplicating directory stager
//!
//! Gladius watches a directory for new or modified files, hashes their
//! content, and copies content it has not seen before into a staging
//! directory (`gladiushandler_out/`) for downstream consumers. A parallel
//! `junk/` directory is kept alongside it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod watcher;

// Re-exports for convenience
pub use application::{FsEvent, HandlerOptions, Outcome, PathInitializer, SourceEvent, WatchHandler};
pub use config::Config;
pub use domain::entities::{DedupCache, MaterializedFile};
pub use domain::value_objects::{ContentHash, Role};
pub use error::{GladiusError, GladiusResult};
pub use watcher::{watch, WatchEvent, WatchOptions};
