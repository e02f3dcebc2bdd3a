//! Common utilities for the strata breakpoint compiler.
//!
//! This crate provides shared infrastructure used by the compiler core and the CLI:
//! - **Warning System** - colored, deduplicated terminal output for authoring mistakes
//!   that do not abort a compilation (blank fragments, cascade inversions)

pub mod warning;
