//! Watch Handler
//!
//! The event-handling core. A `WatchHandler` owns two role directories and an
//! in-memory dedup cache:
//!
//! - `on_created` / `on_modified` - read, hash, and stage unseen content
//! - `get_outfile` / `get_junkfile` - allocate unique persistent files
//! - `get_lines` - read a source and split it on newlines
//!
//! ## Usage
//!
//! ```ignore
//! let handler = WatchHandler::new(HandlerOptions::new("/srv/gladius"))?;
//! match handler.on_created(Path::new("/watched/a.txt"))? {
//!     Outcome::Materialized(file) => println!("{}", file.path().display()),
//!     _ => {}
//! }
//! ```

mod event;
mod options;
mod use_case;


pub use event::{FsEvent, FsEventKind, SourceEvent};
pub use options::{HandlerOptions, DEFAULT_PREFIX};
pub use use_case::{Outcome, WatchHandler};
