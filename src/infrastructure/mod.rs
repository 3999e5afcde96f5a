//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.

pub mod fs;

pub use fs::LocalFs;
