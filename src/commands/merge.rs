use crate::areas::comparer::Comparer;
use crate::artifacts::diff::Diff;
use crate::artifacts::diff::diff_algorithm::MyersDiff;
use crate::artifacts::diff::line_source::LineInterner;
use crate::artifacts::merge::resolution::DefaultActionTwoWay;
use crate::artifacts::merge::two_way::MergeTwoWay;
use crate::artifacts::node::{FileNode, NodeStatus};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

impl Comparer {
    /// Merge a local and a remote file and write the result, either next to
    /// the local file or into `output_dir`.
    pub fn merge(
        &self,
        local: &Path,
        remote: &Path,
        output_dir: Option<&Path>,
        default_action: DefaultActionTwoWay,
    ) -> anyhow::Result<()> {
        let node = FileNode {
            base: None,
            local: self.workspace().absolutize_if_present(local),
            remote: self.workspace().absolutize_if_present(remote),
        };

        let diff = if node.location().on_local_remote() {
            let mut interner = LineInterner::new();
            let local_source = self.workspace().load_source(local, &mut interner)?;
            let remote_source = self.workspace().load_source(remote, &mut interner)?;

            let items =
                MyersDiff::new(local_source.line_ids(), remote_source.line_ids()).diff_items();
            Some(Diff::new(items, &local_source, &remote_source))
        } else {
            None
        };

        let output_dir = self.resolve_output_dir(output_dir);
        let status = MergeTwoWay::new(&node, output_dir.as_deref(), default_action)
            .run(diff.as_ref(), false)?;

        self.report_merge_status(status)
    }

    /// Output directories stay relative to the working directory; they are
    /// not canonicalized because they may not exist yet.
    pub(crate) fn resolve_output_dir(&self, output_dir: Option<&Path>) -> Option<PathBuf> {
        output_dir.map(|dir| {
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                self.workspace().path().join(dir)
            }
        })
    }

    pub(crate) fn report_merge_status(&self, status: Option<NodeStatus>) -> anyhow::Result<()> {
        match status {
            Some(NodeStatus::HasConflicts) => {
                writeln!(self.writer(), "{}", "merged with conflicts".red())?;
            }
            Some(_) => {
                writeln!(self.writer(), "{}", "merged successfully".green())?;
            }
            None => {
                writeln!(self.writer(), "nothing to merge")?;
            }
        }

        Ok(())
    }
}
