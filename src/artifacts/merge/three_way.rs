use crate::artifacts::core::line_cursor::LineCursor;
use crate::artifacts::diff3::{Diff3, DifferencesStatus};
use crate::artifacts::merge::resolution::{
    DefaultActionThreeWay, ResolvedActionThreeWay, resolve_all_three_way,
};
use crate::artifacts::merge::{destination_path, write_destination};
use crate::artifacts::node::{FileNode, NodeStatus};
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// Streams base, local and remote against the three-way chunks and writes
/// the merged result. Identical regions between chunks come from the base
/// file; inside a chunk the resolved action or the chunk's differences
/// status decides which side's lines survive. Unresolved conflicts are
/// written with `<<<<<<<`/`|||||||`/`=======`/`>>>>>>>` markers.
#[derive(new)]
pub struct MergeThreeWay<'a> {
    node: &'a FileNode,
    output_dir: Option<&'a Path>,
    default_action: DefaultActionThreeWay,
}

impl MergeThreeWay<'_> {
    /// Render the merge. Returns the node's resulting status, or `None`
    /// when there was nothing to do (already merged, no diff payload, or
    /// the file is missing on one of the three sides).
    pub fn run(&self, diff3: Option<&Diff3>, already_merged: bool) -> anyhow::Result<Option<NodeStatus>> {
        if already_merged || !self.node.location().on_all_three() {
            return Ok(None);
        }
        let Some(diff3) = diff3 else {
            return Ok(None);
        };

        let base_path = self
            .node
            .base
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("three-way merge node lost its base path"))?;
        let local_path = self
            .node
            .local
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("three-way merge node lost its local path"))?;
        let remote_path = self
            .node
            .remote
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("three-way merge node lost its remote path"))?;

        let resolutions = resolve_all_three_way(diff3.items(), self.default_action);
        let dest = destination_path(self.output_dir, base_path)?;

        let status = write_destination(&dest, |writer| {
            let mut base = LineCursor::open(base_path)?;
            let mut local = LineCursor::open(local_path)?;
            let mut remote = LineCursor::open(remote_path)?;
            let mut status = NodeStatus::WasMerged;

            for (chunk, action) in diff3.items().iter().zip(&resolutions) {
                // identical lines between chunks come from the base file
                for line in base.advance_to(chunk.base_line_start)? {
                    writeln!(writer, "{line}")?;
                }
                local.advance_to(chunk.local_line_start)?;
                remote.advance_to(chunk.remote_line_start)?;

                let local_lines = local.take(chunk.local_affected_lines)?;
                let base_lines = base.take(chunk.base_affected_lines)?;
                let remote_lines = remote.take(chunk.remote_affected_lines)?;

                match action {
                    ResolvedActionThreeWay::RevertToBase => {
                        for line in base_lines {
                            writeln!(writer, "{line}")?;
                        }
                    }
                    ResolvedActionThreeWay::ApplyLocal => {
                        for line in local_lines {
                            writeln!(writer, "{line}")?;
                        }
                    }
                    ResolvedActionThreeWay::ApplyRemote => {
                        for line in remote_lines {
                            writeln!(writer, "{line}")?;
                        }
                    }
                    ResolvedActionThreeWay::MarkConflicts => match chunk.differences_status {
                        DifferencesStatus::BaseLocalSame => {
                            // only remote changed
                            for line in remote_lines {
                                writeln!(writer, "{line}")?;
                            }
                        }
                        DifferencesStatus::BaseRemoteSame | DifferencesStatus::LocalRemoteSame => {
                            for line in local_lines {
                                writeln!(writer, "{line}")?;
                            }
                        }
                        DifferencesStatus::AllDifferent => {
                            status = NodeStatus::HasConflicts;

                            writeln!(writer, "<<<<<<< {}", local_path.display())?;
                            for line in local_lines {
                                writeln!(writer, "{line}")?;
                            }
                            writeln!(writer, "||||||| {}", base_path.display())?;
                            for line in base_lines {
                                writeln!(writer, "{line}")?;
                            }
                            writeln!(writer, "=======")?;
                            for line in remote_lines {
                                writeln!(writer, "{line}")?;
                            }
                            writeln!(writer, ">>>>>>> {}", remote_path.display())?;
                        }
                    },
                }
            }

            // trailing identical lines
            for line in base.advance_to(diff3.base().line_count)? {
                writeln!(writer, "{line}")?;
            }

            Ok(status)
        })?;

        Ok(Some(status))
    }
}
