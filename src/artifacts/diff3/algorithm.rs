//! Three-way chunk combinator
//!
//! Combines two two-way diffs that share a common base file (base vs. local
//! and base vs. remote) into one ordered sequence of three-way chunks, and
//! classifies each chunk's conflict status.
//!
//! ## Algorithm overview
//!
//! Both diff sequences are walked with independent cursors, always advancing
//! whichever item starts lower in the base file:
//!
//! - items touching only one side become a chunk with the opposite side
//!   marked unchanged
//! - items starting on the same base line are compared by affected-line
//!   counts and then by actual inserted line hashes to distinguish an
//!   identical double-edit from a conflict
//! - partially overlapping items are unioned into one conflict chunk
//! - an item that abuts or overlaps the previously emitted chunk extends
//!   that chunk instead of starting a new one, so finished chunks never
//!   touch or overlap
//!
//! Running deltas track how far local and remote have drifted from the base
//! line numbering, so every chunk's side offsets are known without
//! re-scanning earlier chunks.
//!
//! ## Debug logging
//!
//! Chunk emission can be traced by running the tests or building with the
//! `debug_merge` feature flag (`cargo build --features debug_merge`).

use crate::artifacts::diff::diff_item::DiffItem;
use crate::artifacts::diff3::{Diff3Item, DifferencesStatus};

/// Macro for debug logging that is enabled in test mode or with the debug_merge feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(test, feature = "debug_merge"))]
        {
            eprintln!("[diff3] {}", format!($($arg)*));
        }
    };
}

pub struct Diff3Algorithm<'d> {
    /// Two-way diff between base and local.
    diff_base_local: &'d [DiffItem],
    /// Two-way diff between base and remote.
    diff_base_remote: &'d [DiffItem],
    /// Hashed local file, used to tell identical double-edits from conflicts.
    local_lines: &'d [u64],
    /// Hashed remote file.
    remote_lines: &'d [u64],
    base_line_count: usize,

    local_cursor: usize,
    remote_cursor: usize,
    /// Cumulative local-vs-base line count drift, up to the current chunk.
    delta_local: isize,
    /// Cumulative remote-vs-base line count drift.
    delta_remote: isize,
    chunks: Vec<Diff3Item>,
}

impl<'d> Diff3Algorithm<'d> {
    pub fn new(
        diff_base_local: &'d [DiffItem],
        diff_base_remote: &'d [DiffItem],
        local_lines: &'d [u64],
        remote_lines: &'d [u64],
        base_line_count: usize,
    ) -> Self {
        Diff3Algorithm {
            diff_base_local,
            diff_base_remote,
            local_lines,
            remote_lines,
            base_line_count,
            local_cursor: 0,
            remote_cursor: 0,
            delta_local: 0,
            delta_remote: 0,
            chunks: Vec::new(),
        }
    }

    /// Walk both diff sequences and merge them into ordered three-way chunks.
    pub fn merge_into_chunks(mut self) -> Vec<Diff3Item> {
        while self.current_local().is_some() || self.current_remote().is_some() {
            // An item abutting or overlapping the previously emitted chunk
            // extends that chunk instead of being emitted on its own.
            if let Some(last) = self.chunks.last().copied() {
                let (lower, from_remote) = self.lower_item();

                if last.base_line_end() >= lower.base_line_start {
                    self.pop_last_chunk();

                    if from_remote {
                        self.remote_cursor += 1;
                    } else {
                        self.local_cursor += 1;
                    }

                    debug_log!(
                        "extending chunk at base {} with item at base {}",
                        last.base_line_start,
                        lower.base_line_start
                    );

                    self.push_chunk(Diff3Item::new(
                        last.base_line_start,
                        last.local_line_start,
                        last.remote_line_start,
                        last.base_affected_lines + lower.base_affected_lines,
                        last.local_affected_lines
                            + if from_remote {
                                lower.base_affected_lines
                            } else {
                                lower.other_affected_lines
                            },
                        last.remote_affected_lines
                            + if from_remote {
                                lower.other_affected_lines
                            } else {
                                lower.base_affected_lines
                            },
                        DifferencesStatus::AllDifferent,
                    ));

                    continue;
                }
            }

            self.join_next();
        }

        self.clamp_final_chunk();
        self.chunks
    }

    fn current_local(&self) -> Option<DiffItem> {
        self.diff_base_local.get(self.local_cursor).copied()
    }

    fn current_remote(&self) -> Option<DiffItem> {
        self.diff_base_remote.get(self.remote_cursor).copied()
    }

    /// Emit the next chunk from whichever side starts lower, resolving
    /// same-start and overlapping items along the way.
    fn join_next(&mut self) {
        match (self.current_local(), self.current_remote()) {
            (None, Some(_)) => {
                // only remote changes remain
                let chunk = self.chunk_from_remote();
                self.push_chunk(chunk);
                self.remote_cursor += 1;
            }
            (Some(_), None) => {
                // only local changes remain
                let chunk = self.chunk_from_local();
                self.push_chunk(chunk);
                self.local_cursor += 1;
            }
            (Some(local), Some(remote)) => {
                if local.base_line_start == remote.base_line_start {
                    if local.base_affected_lines == remote.base_affected_lines
                        && local.other_affected_lines == remote.other_affected_lines
                    {
                        // both sides change the same base lines; compare the
                        // inserted lines to tell a double-edit from a conflict
                        let status = if self.inserted_lines_match(&local, &remote) {
                            DifferencesStatus::LocalRemoteSame
                        } else {
                            DifferencesStatus::AllDifferent
                        };

                        let chunk = self.full_chunk(&local, &remote, status);
                        self.push_chunk(chunk);
                    } else {
                        // same start, different affected counts: a true conflict
                        let chunk = self.all_different_chunk(&local, &remote);
                        self.push_chunk(chunk);
                    }

                    self.local_cursor += 1;
                    self.remote_cursor += 1;
                } else if are_overlapping(&local, &remote) || are_overlapping(&remote, &local) {
                    let chunk = self.all_different_chunk(&local, &remote);
                    self.push_chunk(chunk);
                    self.local_cursor += 1;
                    self.remote_cursor += 1;
                } else if local.base_line_start < remote.base_line_start {
                    let chunk = self.chunk_from_local();
                    self.push_chunk(chunk);
                    self.local_cursor += 1;
                } else {
                    let chunk = self.chunk_from_remote();
                    self.push_chunk(chunk);
                    self.remote_cursor += 1;
                }
            }
            (None, None) => unreachable!("join_next called with both diff sequences exhausted"),
        }
    }

    fn inserted_lines_match(&self, local: &DiffItem, remote: &DiffItem) -> bool {
        (0..local.other_affected_lines).all(|i| {
            self.local_lines[local.other_line_start + i]
                == self.remote_lines[remote.other_line_start + i]
        })
    }

    /// The item with the lower base start, and whether it came from the
    /// remote diff. Only called while at least one side has items left.
    fn lower_item(&self) -> (DiffItem, bool) {
        match (self.current_local(), self.current_remote()) {
            (Some(local), None) => (local, false),
            (None, Some(remote)) => (remote, true),
            (Some(local), Some(remote)) => {
                if local.base_line_start < remote.base_line_start {
                    (local, false)
                } else {
                    (remote, true)
                }
            }
            (None, None) => unreachable!("lower_item called with both diff sequences exhausted"),
        }
    }

    /// Adding a chunk advances the per-side line-count drifts.
    fn push_chunk(&mut self, chunk: Diff3Item) {
        self.delta_local += chunk.local_affected_lines as isize - chunk.base_affected_lines as isize;
        self.delta_remote +=
            chunk.remote_affected_lines as isize - chunk.base_affected_lines as isize;

        debug_log!(
            "chunk base {}+{} local {}+{} remote {}+{} {:?}",
            chunk.base_line_start,
            chunk.base_affected_lines,
            chunk.local_line_start,
            chunk.local_affected_lines,
            chunk.remote_line_start,
            chunk.remote_affected_lines,
            chunk.differences_status
        );

        self.chunks.push(chunk);
    }

    fn pop_last_chunk(&mut self) {
        let chunk = self
            .chunks
            .pop()
            .expect("pop_last_chunk called with no chunks emitted");

        self.delta_local -= chunk.local_affected_lines as isize - chunk.base_affected_lines as isize;
        self.delta_remote -=
            chunk.remote_affected_lines as isize - chunk.base_affected_lines as isize;
    }

    /// Chunk for a change only local made; base and remote stay the same.
    fn chunk_from_local(&self) -> Diff3Item {
        let local = self.current_local().expect("no current local item");

        Diff3Item::new(
            local.base_line_start,
            local.other_line_start,
            shifted(local.base_line_start, self.delta_remote),
            local.base_affected_lines,
            local.other_affected_lines,
            local.base_affected_lines,
            DifferencesStatus::BaseRemoteSame,
        )
    }

    /// Chunk for a change only remote made; base and local stay the same.
    fn chunk_from_remote(&self) -> Diff3Item {
        let remote = self.current_remote().expect("no current remote item");

        Diff3Item::new(
            remote.base_line_start,
            shifted(remote.base_line_start, self.delta_local),
            remote.other_line_start,
            remote.base_affected_lines,
            remote.base_affected_lines,
            remote.other_affected_lines,
            DifferencesStatus::BaseLocalSame,
        )
    }

    /// Chunk for items that change the same base span on both sides.
    fn full_chunk(
        &self,
        local: &DiffItem,
        remote: &DiffItem,
        status: DifferencesStatus,
    ) -> Diff3Item {
        Diff3Item::new(
            remote.base_line_start,
            local.other_line_start,
            remote.other_line_start,
            remote.base_affected_lines,
            local.other_affected_lines,
            remote.other_affected_lines,
            status,
        )
    }

    /// Conflict chunk for partially overlapping items: the base span is the
    /// union of both items' spans, and each side's start/length is stretched
    /// to cover that union. This deliberately loses precision; overlapping
    /// edits cannot be split further without risking bad alignment.
    fn all_different_chunk(&self, local: &DiffItem, remote: &DiffItem) -> Diff3Item {
        let min_base_start = local.base_line_start.min(remote.base_line_start);
        let max_base_end = local.base_line_end().max(remote.base_line_end());
        let base_span = max_base_end - min_base_start;

        Diff3Item::new(
            min_base_start,
            local.other_line_start - (local.base_line_start - min_base_start),
            remote.other_line_start - (remote.base_line_start - min_base_start),
            base_span,
            local.other_affected_lines + (base_span - local.base_affected_lines),
            remote.other_affected_lines + (base_span - remote.base_affected_lines),
            DifferencesStatus::AllDifferent,
        )
    }

    /// Repeated chunk extension can overcount when an item lies inside the
    /// span a previous union already covered. The overcount always sits in
    /// the last chunk. When that happens the chunk is widened to cover all
    /// three files to their ends, which keeps the renderers' lockstep reads
    /// in range and the tail gaps equal on every side.
    fn clamp_final_chunk(&mut self) {
        if let Some(last) = self.chunks.last_mut() {
            let overruns = last.base_line_end() > self.base_line_count
                || last.local_line_start + last.local_affected_lines > self.local_lines.len()
                || last.remote_line_start + last.remote_affected_lines > self.remote_lines.len();

            if overruns {
                last.base_affected_lines = self.base_line_count - last.base_line_start;
                last.local_affected_lines = self.local_lines.len() - last.local_line_start;
                last.remote_affected_lines = self.remote_lines.len() - last.remote_line_start;
            }
        }
    }
}

/// Checks whether the bottom item's base range runs into the top item's start.
fn are_overlapping(bottom: &DiffItem, top: &DiffItem) -> bool {
    bottom.base_line_start < top.base_line_start
        && bottom.base_line_end() >= top.base_line_start
}

fn shifted(line: usize, delta: isize) -> usize {
    let shifted = line as isize + delta;
    debug_assert!(shifted >= 0, "line offset shifted below zero");
    shifted as usize
}
