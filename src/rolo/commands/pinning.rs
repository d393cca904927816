//! Pin and unpin.
//!
//! Pin status lives in the person's tag set as the reserved marker tag. Both commands
//! build a replacement person with the marker added or removed and swap it in through
//! `Model::update_person`; the inverse swap is the undo.

use super::{person_at, recorded, CmdResult, Execution};
use crate::error::{CommandError, TagListError};
use crate::index::Index;
use crate::model::{Model, Person};

pub const PIN_WORD: &str = "pin";
pub const UNPIN_WORD: &str = "unpin";

pub const PIN_USAGE: &str = "pin: Pins the person identified by the index number used in the last person listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: pin 1";
pub const UNPIN_USAGE: &str = "unpin: Unpins the person identified by the index number used in the last person listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: unpin 1";

const MESSAGE_PIN_SUCCESS: &str = "Pinned Person";
const MESSAGE_UNPIN_SUCCESS: &str = "Unpinned Person";
const MESSAGE_ALREADY_PINNED: &str = "Person is already pinned!";
const MESSAGE_ALREADY_UNPINNED: &str = "Person is not pinned!";
const MESSAGE_PIN_FAILED: &str = "Pin was unsuccessful";
const MESSAGE_UNPIN_FAILED: &str = "Unpin was unsuccessful";

/// The (before, after) pair swapped in by a successful execution.
type Swap = (Person, Person);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCommand {
    index: Index,
    applied: Option<Swap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpinCommand {
    index: Index,
    applied: Option<Swap>,
}

impl PinCommand {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            applied: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let (execution, applied) = pin_state(model, self.index, true)?;
        self.applied = applied;
        Ok(execution)
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        swap(model, after, before, MESSAGE_PIN_FAILED)
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        swap(model, before, after, MESSAGE_PIN_FAILED)
    }
}

impl UnpinCommand {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            applied: None,
        }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let (execution, applied) = pin_state(model, self.index, false)?;
        self.applied = applied;
        Ok(execution)
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        swap(model, after, before, MESSAGE_UNPIN_FAILED)
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let (before, after) = recorded(&self.applied)?;
        swap(model, before, after, MESSAGE_UNPIN_FAILED)
    }
}

fn pin_state(
    model: &mut Model,
    index: Index,
    pin: bool,
) -> Result<(Execution, Option<Swap>), CommandError> {
    let target = person_at(model, index)?;

    if target.is_pinned() == pin {
        let message = if pin {
            MESSAGE_ALREADY_PINNED
        } else {
            MESSAGE_ALREADY_UNPINNED
        };
        return Ok((Execution::Unchanged(CmdResult::info(message)), None));
    }

    let failed = if pin {
        MESSAGE_PIN_FAILED
    } else {
        MESSAGE_UNPIN_FAILED
    };
    let replacement = toggled(&target, pin).map_err(|_| CommandError::failed(failed))?;
    swap(model, &target, &replacement, failed)?;

    let verb = if pin {
        MESSAGE_PIN_SUCCESS
    } else {
        MESSAGE_UNPIN_SUCCESS
    };
    let result = CmdResult::success(format!("{}: {}", verb, target));
    Ok((Execution::Applied(result), Some((target, replacement))))
}

fn toggled(person: &Person, pin: bool) -> Result<Person, TagListError> {
    let mut tags = person.tags().clone();
    if pin {
        tags.add_pin_tag()?;
    } else {
        tags.remove_pin_tag()?;
    }
    Ok(person.with_tags(tags))
}

fn swap(model: &mut Model, from: &Person, to: &Person, failed: &str) -> Result<(), CommandError> {
    model
        .update_person(from, to.clone())
        .map_err(|_| CommandError::failed(failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{model_with, person, pinned};

    fn idx(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    #[test]
    fn pinning_moves_person_to_top() {
        let mut model = model_with(&["Alice", "Bob"]);
        let mut cmd = PinCommand::new(idx(2));
        let execution = cmd.execute(&mut model).unwrap();

        assert!(execution.is_applied());
        assert!(execution.result().feedback().starts_with("Pinned Person: Bob"));
        let first = &model.filtered_person_list()[0];
        assert_eq!(first.name().as_str(), "Bob");
        assert!(first.is_pinned());
    }

    #[test]
    fn pinning_twice_is_a_noop() {
        let mut model = model_with(&["Alice"]);
        PinCommand::new(idx(1)).execute(&mut model).unwrap();
        let before = model.address_book().clone();

        let mut again = PinCommand::new(idx(1));
        let execution = again.execute(&mut model).unwrap();
        assert_eq!(
            execution,
            Execution::Unchanged(CmdResult::info(MESSAGE_ALREADY_PINNED))
        );
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn unpinning_unpinned_person_changes_nothing() {
        let mut model = model_with(&["Alice", "Bob"]);
        let before = model.address_book().clone();
        let mut events = model.events().subscribe();

        let mut cmd = UnpinCommand::new(idx(1));
        let execution = cmd.execute(&mut model).unwrap();

        assert!(!execution.is_applied());
        assert_eq!(execution.result().feedback(), "Person is not pinned!");
        assert_eq!(model.address_book(), &before);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn unpin_removes_marker_and_keeps_other_tags() {
        let mut model = model_with(&[]);
        let mut tags = crate::test_utils::person_with_tags("Alice", &["friend"])
            .tags()
            .clone();
        tags.add_pin_tag().unwrap();
        let alice = crate::test_utils::person_with_tags("Alice", &["friend"]).with_tags(tags);
        model.add_person(alice).unwrap();

        UnpinCommand::new(idx(1)).execute(&mut model).unwrap();

        let after = &model.filtered_person_list()[0];
        assert!(!after.is_pinned());
        assert_eq!(after.tags().len(), 1);
        assert_eq!(after.tags().iter().next().unwrap().name(), "friend");
    }

    #[test]
    fn invalid_index_fails_without_mutation() {
        let mut model = model_with(&["Alice"]);
        let before = model.address_book().clone();
        let err = UnpinCommand::new(idx(2)).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::InvalidPersonIndex);
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn unpin_undo_redo_round_trip() {
        let mut model = model_with(&[]);
        model.add_person(pinned("Alice")).unwrap();
        let original = model.filtered_person_list()[0].clone();

        let mut cmd = UnpinCommand::new(idx(1));
        cmd.execute(&mut model).unwrap();
        assert_eq!(model.filtered_person_list()[0], person("Alice"));

        cmd.undo(&mut model).unwrap();
        assert_eq!(model.filtered_person_list()[0], original);
        assert_eq!(model.filtered_person_list()[0].id(), original.id());

        cmd.redo(&mut model).unwrap();
        assert_eq!(model.filtered_person_list()[0], person("Alice"));
    }

    #[test]
    fn undo_fails_when_person_changed_since() {
        let mut model = model_with(&[]);
        model.add_person(pinned("Alice")).unwrap();
        let mut cmd = UnpinCommand::new(idx(1));
        cmd.execute(&mut model).unwrap();

        // Someone else replaced the unpinned Alice.
        let current = model.filtered_person_list()[0].clone();
        model
            .update_person(&current, crate::test_utils::person_with_tags("Alice", &["x"]))
            .unwrap();

        let err = cmd.undo(&mut model).unwrap_err();
        assert_eq!(err, CommandError::failed("Unpin was unsuccessful"));
    }
}
