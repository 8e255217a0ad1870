use crate::areas::comparer::Comparer;
use crate::artifacts::diff::Diff;
use crate::artifacts::diff::diff_algorithm::MyersDiff;
use crate::artifacts::diff::line_source::LineInterner;
use crate::artifacts::output::normal_two_way::DiffNormalOutput;
use std::path::Path;

impl Comparer {
    /// Print a normal diff report between a local and a remote file.
    pub fn diff(&self, local: &Path, remote: &Path) -> anyhow::Result<()> {
        let mut interner = LineInterner::new();
        let local_source = self.workspace().load_source(local, &mut interner)?;
        let remote_source = self.workspace().load_source(remote, &mut interner)?;

        let items = MyersDiff::new(local_source.line_ids(), remote_source.line_ids()).diff_items();
        let diff = Diff::new(items, &local_source, &remote_source);

        let output = DiffNormalOutput::new(local_source.path(), remote_source.path(), &diff);
        let mut writer = self.writer();
        output.print(writer.as_mut())?;

        Ok(())
    }
}
