use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps distinct line contents to distinct integer ids.
///
/// One interner is shared by all files taking part in a single comparison,
/// so two lines are equal exactly when their ids are equal. This is what
/// makes the line equality checks inside the diff engines O(1).
#[derive(Debug, Default)]
pub struct LineInterner {
    table: HashMap<String, u64>,
}

impl LineInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, line: &str) -> u64 {
        let next_id = self.table.len() as u64;
        *self.table.entry(line.to_string()).or_insert(next_id)
    }
}

/// A file's text adapted into an indexable sequence of hashed lines,
/// plus the metadata the diff and output stages need: the line count and
/// whether the file ends with a trailing newline.
#[derive(Debug)]
pub struct LineSource {
    path: PathBuf,
    line_ids: Vec<u64>,
    ends_with_newline: bool,
}

impl LineSource {
    /// Parse raw file content. A final line without a terminating newline
    /// still counts as a line, but clears the trailing-newline flag.
    pub fn parse(path: PathBuf, content: &[u8], interner: &mut LineInterner) -> Self {
        let text = String::from_utf8_lossy(content);
        let ends_with_newline = text.is_empty() || text.ends_with('\n');

        let mut line_ids = Vec::new();
        let mut rest = text.as_ref();
        while !rest.is_empty() {
            let (line, remainder) = match rest.find('\n') {
                Some(at) => (&rest[..at], &rest[at + 1..]),
                None => (rest, ""),
            };
            let line = line.strip_suffix('\r').unwrap_or(line);
            line_ids.push(interner.intern(line));
            rest = remainder;
        }

        LineSource {
            path,
            line_ids,
            ends_with_newline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_ids(&self) -> &[u64] {
        &self.line_ids
    }

    pub fn line_count(&self) -> usize {
        self.line_ids.len()
    }

    pub fn ends_with_newline(&self) -> bool {
        self.ends_with_newline
    }
}
