use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// High-level coordinator for the diff and merge commands.
///
/// Owns the output writer and the workspace; every user-facing operation is
/// implemented as a method on this type (see the `commands` module).
pub struct Comparer {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparer {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Comparer {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
