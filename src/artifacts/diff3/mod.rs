//! Three-way chunk model
//!
//! This module defines the aligned three-way chunk type produced by the
//! diff3 combinator:
//!
//! - `Diff3Item`: one chunk spanning base, local and remote
//! - `DifferencesStatus`: which sides agree within the chunk
//! - `algorithm`: the combinator that merges two two-way diffs into chunks
//!
//! Chunks are sorted by `base_line_start` and never overlap; together with
//! the identical gaps between them they account for every line of all three
//! files.

pub mod algorithm;

use crate::artifacts::diff::FileStats;
use crate::artifacts::diff::line_source::LineSource;
use derive_new::new;

/// Classification of a three-way chunk: which pair of sides holds the same
/// content, or none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferencesStatus {
    /// Only remote changed relative to base.
    BaseLocalSame,
    /// Only local changed relative to base.
    BaseRemoteSame,
    /// Local and remote changed base identically.
    LocalRemoteSame,
    /// A true conflict: local and remote changed the same region differently.
    AllDifferent,
}

/// Resolution override for a single three-way chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredActionThreeWay {
    #[default]
    Default,
    RevertToBase,
    ApplyLocal,
    ApplyRemote,
}

/// One aligned three-way chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Diff3Item {
    pub base_line_start: usize,
    pub local_line_start: usize,
    pub remote_line_start: usize,
    pub base_affected_lines: usize,
    pub local_affected_lines: usize,
    pub remote_affected_lines: usize,
    pub differences_status: DifferencesStatus,
    #[new(default)]
    pub preferred_action: PreferredActionThreeWay,
}

impl Diff3Item {
    /// First base line past the affected range.
    pub fn base_line_end(&self) -> usize {
        self.base_line_start + self.base_affected_lines
    }
}

/// Container for a computed three-way diff: the ordered chunks plus the
/// per-side line counts and trailing-newline flags.
#[derive(Debug)]
pub struct Diff3 {
    items: Vec<Diff3Item>,
    base: FileStats,
    local: FileStats,
    remote: FileStats,
}

impl Diff3 {
    pub fn new(
        items: Vec<Diff3Item>,
        base: &LineSource,
        local: &LineSource,
        remote: &LineSource,
    ) -> Self {
        Diff3 {
            items,
            base: base.into(),
            local: local.into(),
            remote: remote.into(),
        }
    }

    pub fn items(&self) -> &[Diff3Item] {
        &self.items
    }

    /// Mutable access for the post-hoc resolution step; only
    /// `preferred_action` is meant to change after computation.
    pub fn items_mut(&mut self) -> &mut [Diff3Item] {
        &mut self.items
    }

    pub fn base(&self) -> FileStats {
        self.base
    }

    pub fn local(&self) -> FileStats {
        self.local
    }

    pub fn remote(&self) -> FileStats {
        self.remote
    }
}
