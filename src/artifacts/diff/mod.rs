//! Two-way line diffing
//!
//! This module implements the two-way diff pipeline:
//!
//! - `line_source`: hashed line sequences and per-file metadata
//! - `diff_item`: the edit-script operation type
//! - `diff_algorithm`: Myers' shortest edit script over hashed lines
//!
//! The `Diff` container ties a computed edit script to the statistics of the
//! two files it was computed from. It is created once per file pair and
//! consumed exactly once by a renderer or formatter.

pub mod diff_algorithm;
pub mod diff_item;
pub mod line_source;

use crate::artifacts::diff::diff_item::DiffItem;
use crate::artifacts::diff::line_source::LineSource;

/// Line count and trailing-newline flag of one diffed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub line_count: usize,
    pub ends_with_newline: bool,
}

impl From<&LineSource> for FileStats {
    fn from(source: &LineSource) -> Self {
        FileStats {
            line_count: source.line_count(),
            ends_with_newline: source.ends_with_newline(),
        }
    }
}

/// Container for a computed two-way diff: the ordered edit script plus the
/// per-side line counts and trailing-newline flags.
#[derive(Debug)]
pub struct Diff {
    items: Vec<DiffItem>,
    base: FileStats,
    other: FileStats,
}

impl Diff {
    pub fn new(items: Vec<DiffItem>, base: &LineSource, other: &LineSource) -> Self {
        Diff {
            items,
            base: base.into(),
            other: other.into(),
        }
    }

    pub fn items(&self) -> &[DiffItem] {
        &self.items
    }

    /// Mutable access for the post-hoc resolution step; only
    /// `preferred_action` is meant to change after computation.
    pub fn items_mut(&mut self) -> &mut [DiffItem] {
        &mut self.items
    }

    pub fn base(&self) -> FileStats {
        self.base
    }

    pub fn other(&self) -> FileStats {
        self.other
    }
}
