use crate::artifacts::core::line_cursor::LineCursor;
use crate::artifacts::diff::Diff;
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// Prints differences between two files as a classic normal diff report:
/// one `NaM`/`NcM`/`NdM` header per edit, `< ` lines from the local file,
/// `---` between changed sections, `> ` lines from the remote file.
#[derive(new)]
pub struct DiffNormalOutput<'a> {
    local: &'a Path,
    remote: &'a Path,
    diff: &'a Diff,
}

impl DiffNormalOutput<'_> {
    pub fn print(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let mut local = LineCursor::open(self.local)?;
        let mut remote = LineCursor::open(self.remote)?;

        for item in self.diff.items() {
            local.advance_to(item.base_line_start)?;
            remote.advance_to(item.other_line_start)?;

            let operation = if item.base_affected_lines == 0 {
                'a'
            } else if item.other_affected_lines == 0 {
                'd'
            } else {
                'c'
            };

            writeln!(
                writer,
                "{}",
                format!(
                    "{}{}{}",
                    side_range(item.base_line_start, item.base_affected_lines),
                    operation,
                    side_range(item.other_line_start, item.other_affected_lines)
                )
                .cyan()
            )?;

            for line in local.take(item.base_affected_lines)? {
                writeln!(writer, "< {line}")?;
            }
            if local.position() == self.diff.base().line_count
                && !self.diff.base().ends_with_newline
            {
                writeln!(writer, "\\ No newline at end of file")?;
            }

            if item.base_affected_lines > 0 && item.other_affected_lines > 0 {
                writeln!(writer, "---")?;
            }

            for line in remote.take(item.other_affected_lines)? {
                writeln!(writer, "> {line}")?;
            }
            if remote.position() == self.diff.other().line_count
                && !self.diff.other().ends_with_newline
            {
                writeln!(writer, "\\ No newline at end of file")?;
            }
        }

        Ok(())
    }
}

/// One side of the header: the 0-based anchor line for an untouched side,
/// otherwise the 1-based changed range.
fn side_range(start: usize, affected: usize) -> String {
    if affected == 0 {
        return start.to_string();
    }

    if affected > 1 {
        format!("{},{}", start + 1, start + affected)
    } else {
        (start + 1).to_string()
    }
}
