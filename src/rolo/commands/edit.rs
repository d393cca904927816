//! Edit a person's fields.
//!
//! Fields left out of the command keep their current value. Giving `t/` replaces the
//! user tags (a bare `t/` clears them); pin status is never touched by an edit.

use super::{person_at, recorded, CmdResult, Execution};
use crate::error::{CommandError, ModelError};
use crate::index::Index;
use crate::model::{Address, Birthday, Email, Model, Name, Person, Phone, Tag, UniqueTagList};

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the person identified by the index number used in the last person listing. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [b/BIRTHDAY] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

/// Fields to change. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub birthday: Option<Birthday>,
    pub tags: Option<Vec<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.birthday.is_some()
            || self.tags.is_some()
    }

    fn apply(&self, person: &Person) -> Person {
        let tags = match &self.tags {
            Some(tags) => {
                let mut list = UniqueTagList::from_tags(tags.iter().cloned());
                if person.is_pinned() {
                    // Cannot fail: user tags never include the marker.
                    let _ = list.add_pin_tag();
                }
                list
            }
            None => person.tags().clone(),
        };
        person.replaced(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| person.address().clone()),
            self.birthday.or_else(|| person.birthday().copied()),
            tags,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
    applied: Option<(Person, Person)>,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self {
            index,
            descriptor,
            applied: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let target = person_at(model, self.index)?;
        let edited = self.descriptor.apply(&target);
        model
            .update_person(&target, edited.clone())
            .map_err(translate)?;
        let result = CmdResult::success(format!("Edited Person: {}", edited));
        self.applied = Some((target, edited));
        Ok(Execution::Applied(result))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        model
            .update_person(after, before.clone())
            .map_err(translate)
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        model
            .update_person(before, after.clone())
            .map_err(translate)
    }
}

fn translate(err: ModelError) -> CommandError {
    match err {
        ModelError::DuplicatePerson => CommandError::DuplicatePerson,
        _ => CommandError::failed("The target person cannot be missing"),
    }
}
