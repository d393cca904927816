use super::{CmdResult, Execution};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::{Model, Person};

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the persons identified by the index numbers used in the last person listing.\n\
Parameters: INDEX[, INDEX]... (must be positive integers)\n\
Example: delete 1, 3";

const MESSAGE_DELETE_FAILED: &str = "The person to delete is no longer in the address book";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indexes: Vec<Index>,
    /// (authoritative position, person) in removal order.
    removed: Option<Vec<(usize, Person)>>,
}

impl DeleteCommand {
    pub fn new(indexes: Vec<Index>) -> Self {
        Self {
            indexes,
            removed: None,
        }
    }

    /// Validates every index before removing anything.
    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let displayed = model.filtered_person_list();
        let mut targets: Vec<Person> = Vec::with_capacity(self.indexes.len());
        for index in &self.indexes {
            let person = index
                .resolve(displayed)
                .ok_or(CommandError::InvalidPersonIndex)?;
            if !targets.contains(person) {
                targets.push(person.clone());
            }
        }

        let removed = model
            .remove_persons(&targets)
            .map_err(|_| CommandError::failed(MESSAGE_DELETE_FAILED))?;
        let mut result = CmdResult::success(format!(
            "Deleted {} person{}",
            removed.len(),
            if removed.len() == 1 { "" } else { "s" }
        ));
        for (_, person) in &removed {
            result.add_message(super::CmdMessage::info(format!("Deleted Person: {}", person)));
        }
        self.removed = Some(removed);
        Ok(Execution::Applied(result))
    }

    /// Puts every removed person back at its recorded position, or none of them.
    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let removed = super::recorded(&self.removed)?;
        model.insert_persons(removed).map_err(|err| {
            CommandError::failed(format!("Cannot restore deleted person: {}", err))
        })
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let removed = super::recorded(&self.removed)?;
        let targets: Vec<Person> = removed.iter().map(|(_, p)| p.clone()).collect();
        model
            .remove_persons(&targets)
            .map(|_| ())
            .map_err(|_| CommandError::failed(MESSAGE_DELETE_FAILED))
    }
}
