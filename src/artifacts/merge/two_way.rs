use crate::artifacts::core::line_cursor::LineCursor;
use crate::artifacts::diff::Diff;
use crate::artifacts::merge::resolution::{
    DefaultActionTwoWay, ResolvedActionTwoWay, resolve_all_two_way,
};
use crate::artifacts::merge::{destination_path, write_destination};
use crate::artifacts::node::{FileNode, NodeStatus};
use anyhow::Context;
use derive_new::new;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Streams local and remote against a two-way diff and writes the merged
/// result: identical regions come from the local file, changed regions from
/// whichever side the resolved action picked, or both sides wrapped in
/// conflict markers.
#[derive(new)]
pub struct MergeTwoWay<'a> {
    node: &'a FileNode,
    output_dir: Option<&'a Path>,
    default_action: DefaultActionTwoWay,
}

impl MergeTwoWay<'_> {
    /// Render the merge. Returns the node's resulting status, or `None`
    /// when there was nothing to do (already merged, no diff payload, or no
    /// file at all).
    pub fn run(&self, diff: Option<&Diff>, already_merged: bool) -> anyhow::Result<Option<NodeStatus>> {
        if already_merged {
            return Ok(None);
        }

        if !self.node.location().on_local_remote() {
            return self.copy_single_side();
        }
        let Some(diff) = diff else {
            return Ok(None);
        };

        let local_path = self
            .node
            .local
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("two-way merge node lost its local path"))?;
        let remote_path = self
            .node
            .remote
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("two-way merge node lost its remote path"))?;

        let resolutions = resolve_all_two_way(diff, self.default_action);
        let dest = destination_path(self.output_dir, local_path)?;

        let status = write_destination(&dest, |writer| {
            let mut local = LineCursor::open(local_path)?;
            let mut remote = LineCursor::open(remote_path)?;
            let mut status = NodeStatus::WasMerged;

            for (item, action) in diff.items().iter().zip(&resolutions) {
                // identical lines between chunks come from the local file
                for line in local.advance_to(item.base_line_start)? {
                    writeln!(writer, "{line}")?;
                }
                remote.advance_to(item.other_line_start)?;

                match action {
                    ResolvedActionTwoWay::MarkConflicts => {
                        status = NodeStatus::HasConflicts;

                        writeln!(writer, "<<<<<<< {}", local_path.display())?;
                        for line in local.take(item.base_affected_lines)? {
                            writeln!(writer, "{line}")?;
                        }
                        writeln!(writer, "=======")?;
                        for line in remote.take(item.other_affected_lines)? {
                            writeln!(writer, "{line}")?;
                        }
                        writeln!(writer, ">>>>>>> {}", remote_path.display())?;
                    }
                    ResolvedActionTwoWay::ApplyLocal => {
                        for line in local.take(item.base_affected_lines)? {
                            writeln!(writer, "{line}")?;
                        }
                        remote.take(item.other_affected_lines)?;
                    }
                    ResolvedActionTwoWay::ApplyRemote => {
                        local.take(item.base_affected_lines)?;
                        for line in remote.take(item.other_affected_lines)? {
                            writeln!(writer, "{line}")?;
                        }
                    }
                }
            }

            // trailing identical lines
            for line in local.advance_to(diff.base().line_count)? {
                writeln!(writer, "{line}")?;
            }

            Ok(status)
        })?;

        Ok(Some(status))
    }

    /// Fallback when the pair is incomplete: plain copy of whichever single
    /// side exists.
    fn copy_single_side(&self) -> anyhow::Result<Option<NodeStatus>> {
        let Some(source) = self.node.any_present() else {
            return Ok(None);
        };

        let dest = destination_path(self.output_dir, source)?;
        if dest == source {
            // in-place merge of a single-sided node is a no-op
            return Ok(Some(NodeStatus::WasMerged));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &dest)
            .with_context(|| format!("failed to copy {} to {}", source.display(), dest.display()))?;

        Ok(Some(NodeStatus::WasMerged))
    }
}
