use super::{recorded, CmdResult, Execution};
use crate::error::CommandError;
use crate::model::{AddressBook, Model};

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Clears all persons and groups from the address book.\n\
Example: clear";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearCommand {
    previous: Option<AddressBook>,
}

impl ClearCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let previous = model.address_book().clone();
        model.reset_data(AddressBook::new());
        self.previous = Some(previous);
        Ok(Execution::Applied(CmdResult::success(
            "Address book has been cleared!",
        )))
    }

    /// Only restores into an empty book; anything added since would be lost otherwise.
    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let previous = recorded(&self.previous)?;
        if !model.address_book().is_empty() {
            return Err(CommandError::failed(
                "Cannot restore cleared data: the address book is no longer empty",
            ));
        }
        model.reset_data(previous.clone());
        Ok(())
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let previous = recorded(&self.previous)?;
        if model.address_book() != previous {
            return Err(CommandError::failed(
                "Cannot clear again: the address book has changed since",
            ));
        }
        model.reset_data(AddressBook::new());
        Ok(())
    }
}
