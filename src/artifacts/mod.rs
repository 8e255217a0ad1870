//! Diff and merge data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `core`: shared utilities (line cursor, pager wrapper)
//! - `diff`: two-way line diffing (Myers' diff, line sources)
//! - `diff3`: three-way chunk model and the two-diff combinator
//! - `merge`: conflict resolution policy and merge renderers
//! - `node`: file node contract (location mask, processing status)
//! - `output`: normal diff report formatters

pub mod core;
pub mod diff;
pub mod diff3;
pub mod merge;
pub mod node;
pub mod output;
