use super::{recorded, CmdResult, Execution};
use crate::error::CommandError;
use crate::model::{Model, Person, SortKey};

pub const COMMAND_WORD: &str = "sort";

pub const USAGE: &str = "sort: Sorts the address book by the given field.\n\
Parameters: name|phone|email\n\
Example: sort name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    key: SortKey,
    previous: Option<Vec<Person>>,
}

impl SortCommand {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            previous: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let previous = model.address_book().persons().to_vec();
        model.sort_persons(self.key);
        self.previous = Some(previous);
        Ok(Execution::Applied(CmdResult::success(format!(
            "Sorted address book by {}",
            self.key.as_str()
        ))))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let previous = recorded(&self.previous)?;
        model
            .restore_person_order(previous)
            .map_err(|_| CommandError::failed("Cannot restore the order from before sorting"))
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        recorded(&self.previous)?;
        model.sort_persons(self.key);
        Ok(())
    }
}
