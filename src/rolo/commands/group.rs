//! Group creation and deletion.
//!
//! A group stores the ids of its members, resolved from displayed indexes when the
//! group is created. Later edits to those persons (rename, pin, ...) keep the id, so the
//! membership follows them.

use super::{recorded, CmdResult, Execution};
use crate::error::{CommandError, ModelError};
use crate::index::Index;
use crate::model::{Group, GroupName, Model};

pub const CREATE_WORD: &str = "create";
pub const DELETE_WORD: &str = "delgroup";

pub const CREATE_USAGE: &str = "create: Creates a group from the persons identified by the index numbers used in the last person listing.\n\
Parameters: n/GROUP_NAME i/INDEX [INDEX]... (must be positive integers)\n\
Example: create n/Project i/1 3 5";
pub const DELETE_USAGE: &str = "delgroup: Deletes the group identified by its index in the group list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delgroup 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupCommand {
    name: GroupName,
    indexes: Vec<Index>,
    created: Option<Group>,
}

impl CreateGroupCommand {
    pub fn new(name: GroupName, indexes: Vec<Index>) -> Self {
        Self {
            name,
            indexes,
            created: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let displayed = model.filtered_person_list();
        let members = self
            .indexes
            .iter()
            .map(|index| {
                index
                    .resolve(displayed)
                    .map(|p| p.id())
                    .ok_or(CommandError::InvalidPersonIndex)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let group = Group::new(self.name.clone(), members);
        model.add_group(group.clone()).map_err(translate)?;

        let result = CmdResult::success(format!(
            "New group created: {} ({} members)",
            group,
            model.group_members(&group).len()
        ));
        self.created = Some(group);
        Ok(Execution::Applied(result))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let group = recorded(&self.created)?;
        model.remove_group(group).map(|_| ()).map_err(translate)
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let group = recorded(&self.created)?;
        model.add_group(group.clone()).map_err(translate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGroupCommand {
    index: Index,
    removed: Option<(usize, Group)>,
}

impl DeleteGroupCommand {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            removed: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let group = self
            .index
            .resolve(model.group_list())
            .cloned()
            .ok_or(CommandError::InvalidGroupIndex)?;
        let position = model.remove_group(&group).map_err(translate)?;

        let result = CmdResult::success(format!("Deleted Group: {}", group.name()));
        self.removed = Some((position, group));
        Ok(Execution::Applied(result))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (position, group) = recorded(&self.removed)?;
        model
            .insert_group(*position, group.clone())
            .map_err(translate)
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (_, group) = recorded(&self.removed)?;
        model.remove_group(group).map(|_| ()).map_err(translate)
    }
}

fn translate(err: ModelError) -> CommandError {
    match err {
        ModelError::DuplicateGroup => CommandError::DuplicateGroup,
        _ => CommandError::failed("The group is no longer in the address book"),
    }
}
