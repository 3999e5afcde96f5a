//! Application Layer
//!
//! Use cases that orchestrate the domain types over the filesystem port.
//!
//! - `PathInitializer` - Ensures role directories exist
//! - `WatchHandler` - Hashes, deduplicates and stages observed files

pub mod handler;
pub mod paths;

pub use handler::{FsEvent, FsEventKind, HandlerOptions, Outcome, SourceEvent, WatchHandler};
pub use paths::PathInitializer;
