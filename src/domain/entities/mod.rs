//! Domain Entities
//!
//! - `DedupCache` - Digests of content already materialized
//! - `MaterializedFile` - A staged copy of a source file

mod dedup_cache;
mod materialized_file;

pub use dedup_cache::DedupCache;
pub use materialized_file::MaterializedFile;
