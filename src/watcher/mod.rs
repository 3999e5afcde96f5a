//! File watcher driving the handler
//!
//! Implements the `watch` command with:
//! - `notify` backend, recursive by default
//! - Create/modify dispatch into `WatchHandler`
//! - Per-event failure reporting without stopping the loop
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for CI

mod event;
mod run;

pub use event::{WatchEvent, WatchOptions};
pub use run::{handle_notify_event, watch, StagingFilter};
