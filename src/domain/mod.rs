//! Domain Layer
//!
//! Pure types behind the watch handler: digests, roles, the dedup cache
//! and the filesystem port. Nothing here touches the disk directly.
//!
//! ## Structure
//!
//! - `entities/` - Stateful domain types (DedupCache, MaterializedFile)
//! - `value_objects/` - Immutable value types (ContentHash, Role)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
