use crate::artifacts::core::line_cursor::LineCursor;
use crate::artifacts::diff::FileStats;
use crate::artifacts::diff3::{Diff3, DifferencesStatus};
use colored::Colorize;
use derive_new::new;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Prints differences between three files as a diff3 normal report.
///
/// Every chunk opens with a hunk header naming the odd file out (`===1`
/// local, `===2` base, `===3` remote, bare `===` for a conflict), followed
/// by one section per file. The odd one out is reported last, except when
/// local and remote agree, in which case base goes last. A section whose
/// side is the "same" one still consumes its lines but prints only its
/// range header.
#[derive(new)]
pub struct Diff3NormalOutput<'a> {
    local: &'a Path,
    base: &'a Path,
    remote: &'a Path,
    diff: &'a Diff3,
}

impl Diff3NormalOutput<'_> {
    pub fn print(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        let mut local = LineCursor::open(self.local)?;
        let mut base = LineCursor::open(self.base)?;
        let mut remote = LineCursor::open(self.remote)?;

        for chunk in self.diff.items() {
            writeln!(writer, "{}", hunk_header(chunk.differences_status).cyan())?;

            // skip the identical lines before the chunk
            base.advance_to(chunk.base_line_start)?;
            local.advance_to(chunk.local_line_start)?;
            remote.advance_to(chunk.remote_line_start)?;

            let status = chunk.differences_status;
            if status == DifferencesStatus::LocalRemoteSame {
                // local and remote agree, so base is reported last
                print_section(
                    writer,
                    "1",
                    chunk.local_affected_lines,
                    &mut local,
                    self.diff.local(),
                    false,
                )?;
                print_section(
                    writer,
                    "3",
                    chunk.remote_affected_lines,
                    &mut remote,
                    self.diff.remote(),
                    true,
                )?;
                print_section(
                    writer,
                    "2",
                    chunk.base_affected_lines,
                    &mut base,
                    self.diff.base(),
                    true,
                )?;
            } else {
                print_section(
                    writer,
                    "1",
                    chunk.local_affected_lines,
                    &mut local,
                    self.diff.local(),
                    status != DifferencesStatus::BaseLocalSame,
                )?;
                print_section(
                    writer,
                    "2",
                    chunk.base_affected_lines,
                    &mut base,
                    self.diff.base(),
                    status != DifferencesStatus::BaseRemoteSame,
                )?;
                print_section(
                    writer,
                    "3",
                    chunk.remote_affected_lines,
                    &mut remote,
                    self.diff.remote(),
                    true,
                )?;
            }
        }

        Ok(())
    }
}

/// One file section of a chunk: range header, optionally the content lines,
/// and the no-newline marker when the section consumed the file's last line.
fn print_section(
    writer: &mut dyn Write,
    file_mark: &str,
    affected_lines: usize,
    cursor: &mut LineCursor<BufReader<File>>,
    stats: FileStats,
    print_lines: bool,
) -> anyhow::Result<()> {
    let range = create_range(cursor.position(), affected_lines);
    writeln!(writer, "{}", format!("{file_mark}:{range}").cyan())?;

    for line in cursor.take(affected_lines)? {
        if print_lines {
            writeln!(writer, "  {line}")?;
        }
    }

    if cursor.position() == stats.line_count && !stats.ends_with_newline {
        writeln!(writer, "\\ No newline at end of file")?;
    }

    Ok(())
}

/// Hunk header naming the file that differs from the other two.
fn hunk_header(status: DifferencesStatus) -> &'static str {
    match status {
        DifferencesStatus::BaseLocalSame => "===3",
        DifferencesStatus::BaseRemoteSame => "===1",
        DifferencesStatus::LocalRemoteSame => "===2",
        DifferencesStatus::AllDifferent => "===",
    }
}

/// `Na` for a pure insertion point, `Nc` for one changed line,
/// `N,Mc` for a changed range. Line numbers are 1-based except the
/// insertion point, which names the 0-based line the insertion follows.
fn create_range(starting_line: usize, number_of_lines: usize) -> String {
    if number_of_lines == 0 {
        return format!("{starting_line}a");
    }

    if number_of_lines > 1 {
        format!("{},{}c", starting_line + 1, starting_line + number_of_lines)
    } else {
        format!("{}c", starting_line + 1)
    }
}
