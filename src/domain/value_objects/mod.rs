//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod role;

pub use hash::ContentHash;
pub use role::Role;
