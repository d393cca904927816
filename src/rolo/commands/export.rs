use super::CmdResult;
use crate::error::Result;
use crate::model::Model;
use crate::store::Storage;
use std::path::{Path, PathBuf};

pub const COMMAND_WORD: &str = "export";

pub const USAGE: &str = "export: Exports the whole address book to the given file.\n\
Parameters: PATH\n\
Example: export contacts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    path: PathBuf,
}

impl ExportCommand {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hands the full address book (not just the displayed view) to the store.
    pub fn run<S: Storage>(&self, model: &Model, store: &mut S) -> Result<CmdResult> {
        store.export(model.address_book(), &self.path)?;
        let count = model.address_book().persons().len();
        Ok(CmdResult::success(format!(
            "Exported {} person{} to {}",
            count,
            if count == 1 { "" } else { "s" },
            self.path.display()
        )))
    }
}
