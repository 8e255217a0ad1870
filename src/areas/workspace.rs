use crate::artifacts::diff::line_source::{LineInterner, LineSource};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Filesystem boundary of the comparer: resolves user-supplied paths
/// against a root directory and loads files into hashed line sources.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a path to its absolute form. Conflict markers and report
    /// headers always carry absolute paths.
    pub fn absolutize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        joined
            .canonicalize()
            .with_context(|| format!("file does not exist: {}", joined.display()))
    }

    /// Like `absolutize`, but a missing file becomes `None` instead of an
    /// error. Used by the merge commands, where a side may be absent.
    pub fn absolutize_if_present(&self, path: &Path) -> Option<PathBuf> {
        self.absolutize(path).ok()
    }

    /// Read a file and adapt it into a hashed line sequence. Sources taking
    /// part in the same comparison must share the interner.
    pub fn load_source(
        &self,
        path: &Path,
        interner: &mut LineInterner,
    ) -> anyhow::Result<LineSource> {
        let path = self.absolutize(path)?;
        let content = std::fs::read(&path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;

        Ok(LineSource::parse(path, &content, interner))
    }
}
