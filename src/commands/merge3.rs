use crate::areas::comparer::Comparer;
use crate::artifacts::diff::diff_algorithm::MyersDiff;
use crate::artifacts::diff::line_source::LineInterner;
use crate::artifacts::diff3::Diff3;
use crate::artifacts::diff3::algorithm::Diff3Algorithm;
use crate::artifacts::merge::resolution::DefaultActionThreeWay;
use crate::artifacts::merge::three_way::MergeThreeWay;
use crate::artifacts::node::FileNode;
use std::path::Path;

impl Comparer {
    /// Merge local and remote changes against their common base and write
    /// the result, either over the base file or into `output_dir`.
    pub fn merge3(
        &self,
        local: &Path,
        base: &Path,
        remote: &Path,
        output_dir: Option<&Path>,
        default_action: DefaultActionThreeWay,
    ) -> anyhow::Result<()> {
        let node = FileNode {
            base: self.workspace().absolutize_if_present(base),
            local: self.workspace().absolutize_if_present(local),
            remote: self.workspace().absolutize_if_present(remote),
        };

        let diff3 = if node.location().on_all_three() {
            let mut interner = LineInterner::new();
            let base_source = self.workspace().load_source(base, &mut interner)?;
            let local_source = self.workspace().load_source(local, &mut interner)?;
            let remote_source = self.workspace().load_source(remote, &mut interner)?;

            let diff_base_local =
                MyersDiff::new(base_source.line_ids(), local_source.line_ids()).diff_items();
            let diff_base_remote =
                MyersDiff::new(base_source.line_ids(), remote_source.line_ids()).diff_items();

            let items = Diff3Algorithm::new(
                &diff_base_local,
                &diff_base_remote,
                local_source.line_ids(),
                remote_source.line_ids(),
                base_source.line_count(),
            )
            .merge_into_chunks();

            Some(Diff3::new(items, &base_source, &local_source, &remote_source))
        } else {
            None
        };

        let output_dir = self.resolve_output_dir(output_dir);
        let status = MergeThreeWay::new(&node, output_dir.as_deref(), default_action)
            .run(diff3.as_ref(), false)?;

        self.report_merge_status(status)
    }
}
