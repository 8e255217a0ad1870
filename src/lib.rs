//! Line-based diff and merge engine
//!
//! The crate is split into three layers:
//!
//! - `artifacts`: the diff/diff3 algorithms, merge renderers and report
//!   formatters, all operating on hashed line sequences
//! - `areas`: the comparer and workspace coordination layer
//! - `commands`: one file per user-facing operation

pub mod areas;
pub mod artifacts;
pub mod commands;
