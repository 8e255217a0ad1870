//! File node contract shared with the surrounding pipeline
//!
//! The core does not own tree construction; it only consumes a node's
//! per-location paths and produces a processing status as its result:
//!
//! - `Location`: which of the three comparison slots a file exists in
//! - `NodeStatus`: lifecycle of a file going through diff/merge
//! - `FileNode`: the minimal per-file input the merge stage reads

use bitflags::bitflags;
use std::path::{Path, PathBuf};

bitflags! {
    /// Presence mask over the three comparison slots.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Location: u8 {
        const BASE = 1;
        const LOCAL = 1 << 1;
        const REMOTE = 1 << 2;
    }
}

impl Location {
    pub fn on_all_three(&self) -> bool {
        self.contains(Location::BASE | Location::LOCAL | Location::REMOTE)
    }

    pub fn on_local_remote(&self) -> bool {
        self.contains(Location::LOCAL | Location::REMOTE)
    }
}

/// Lifecycle of a file node as it moves through the pipeline. The core only
/// ever produces `WasMerged` and `HasConflicts`; the other states belong to
/// the surrounding orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    #[default]
    Initial,
    WasMerged,
    HasConflicts,
    HasError,
    IsIgnored,
}

/// A file's presence across the three comparison slots. Paths are expected
/// to be absolute; they end up verbatim inside conflict markers.
#[derive(Debug, Clone, Default)]
pub struct FileNode {
    pub base: Option<PathBuf>,
    pub local: Option<PathBuf>,
    pub remote: Option<PathBuf>,
}

impl FileNode {
    pub fn location(&self) -> Location {
        let mut location = Location::empty();
        if self.base.is_some() {
            location |= Location::BASE;
        }
        if self.local.is_some() {
            location |= Location::LOCAL;
        }
        if self.remote.is_some() {
            location |= Location::REMOTE;
        }

        location
    }

    /// The only path present, if any. Used by the two-way fallback copy.
    pub fn any_present(&self) -> Option<&Path> {
        self.local
            .as_deref()
            .or(self.remote.as_deref())
            .or(self.base.as_deref())
    }
}
