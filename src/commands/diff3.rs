use crate::areas::comparer::Comparer;
use crate::artifacts::diff::diff_algorithm::MyersDiff;
use crate::artifacts::diff::line_source::LineInterner;
use crate::artifacts::diff3::Diff3;
use crate::artifacts::diff3::algorithm::Diff3Algorithm;
use crate::artifacts::output::normal_three_way::Diff3NormalOutput;
use std::path::Path;

impl Comparer {
    /// Print a diff3 normal report between a local, a base and a remote file.
    pub fn diff3(&self, local: &Path, base: &Path, remote: &Path) -> anyhow::Result<()> {
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
        let diff3 = Diff3::new(items, &base_source, &local_source, &remote_source);

        let output = Diff3NormalOutput::new(
            local_source.path(),
            base_source.path(),
            remote_source.path(),
            &diff3,
        );
        let mut writer = self.writer();
        output.print(writer.as_mut())?;

        Ok(())
    }
}
