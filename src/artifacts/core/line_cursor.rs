use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Forward-only cursor over the lines of a reader.
///
/// The merge renderers and the normal-output printers advance two or three
/// of these in lockstep, driven by the line bookkeeping of the diff chunks.
/// The cursor tracks how many lines it has consumed so far; it can never
/// regress, and asking it to do so is an internal logic error, not an I/O
/// error.
pub struct LineCursor<R> {
    reader: R,
    position: usize,
}

impl LineCursor<BufReader<File>> {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open file for reading: {}", path.display()))?;

        Ok(LineCursor::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        LineCursor {
            reader,
            position: 0,
        }
    }

    /// Number of lines consumed so far, which is also the 0-based index of
    /// the next unread line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consume lines until the cursor sits at `target`, returning the lines
    /// read. Returns an empty vector when the cursor is already there.
    pub fn advance_to(&mut self, target: usize) -> anyhow::Result<Vec<String>> {
        if target < self.position {
            anyhow::bail!(
                "line cursor cannot regress from line {} to line {}",
                self.position,
                target
            );
        }

        self.take(target - self.position)
    }

    /// Consume exactly `n` lines.
    pub fn take(&mut self, n: usize) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(n);
        for _ in 0..n {
            lines.push(self.next_line()?);
        }

        Ok(lines)
    }

    fn next_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("failed to read line {}", self.position))?;

        if read == 0 {
            anyhow::bail!("line cursor read past the end of input at line {}", self.position);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.position += 1;
        Ok(line)
    }
}
