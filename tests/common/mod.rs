//! Common test utilities for Gladius CLI tests.
//!
//! - `TestEnv`: isolated project root + home directory, CLI runner
//! - `TestResult`: captured exit status and output

pub mod env;

pub use env::*;
