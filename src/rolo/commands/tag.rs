//! Remove a tag from everyone.
//!
//! Works on the whole address book, not the displayed list. Every person holding the tag
//! is swapped for a copy without it in a single model change; undo swaps the originals
//! back.

use super::{recorded, CmdMessage, CmdResult, Execution};
use crate::error::CommandError;
use crate::model::{Model, Person, Tag};

pub const COMMAND_WORD: &str = "deltag";

pub const USAGE: &str = "deltag: Removes the tag from every person who has it.\n\
Parameters: TAG\n\
Example: deltag friends";

const MESSAGE_TAG_FAILED: &str = "The tagged persons have changed since the tag was removed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagCommand {
    tag: Tag,
    /// (before, after) for each person the tag was taken from.
    applied: Option<Vec<(Person, Person)>>,
}

impl DeleteTagCommand {
    pub fn new(tag: Tag) -> Self {
        Self { tag, applied: None }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        let swaps: Vec<(Person, Person)> = model
            .address_book()
            .persons()
            .iter()
            .filter_map(|person| {
                let mut tags = person.tags().clone();
                tags.remove(&self.tag).ok()?;
                Some((person.clone(), person.with_tags(tags)))
            })
            .collect();
        if swaps.is_empty() {
            return Err(CommandError::failed(format!(
                "No person is tagged {}",
                self.tag
            )));
        }

        model
            .update_persons(&swaps)
            .map_err(|_| CommandError::failed(MESSAGE_TAG_FAILED))?;

        let mut result = CmdResult::success(format!(
            "Removed tag {} from {} person{}",
            self.tag,
            swaps.len(),
            if swaps.len() == 1 { "" } else { "s" }
        ));
        for (_, after) in &swaps {
            result.add_message(CmdMessage::info(after.name().to_string()));
        }
        self.applied = Some(swaps);
        Ok(Execution::Applied(result))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        let swaps = recorded(&self.applied)?;
        let inverse: Vec<(Person, Person)> = swaps
            .iter()
            .map(|(before, after)| (after.clone(), before.clone()))
            .collect();
        model
            .update_persons(&inverse)
            .map_err(|_| CommandError::failed(MESSAGE_TAG_FAILED))
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        let swaps = recorded(&self.applied)?;
        model
            .update_persons(swaps)
            .map_err(|_| CommandError::failed(MESSAGE_TAG_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonFilter;
    use crate::test_utils::{model_with, person, person_with_tags};

    fn tag(name: &str) -> Tag {
        Tag::new(name).unwrap()
    }

    fn tagged_model() -> Model {
        let mut model = model_with(&["Bob"]);
        model
            .insert_person(0, person_with_tags("Alice", &["friends", "work"]))
            .unwrap();
        model
            .add_person(person_with_tags("Carol", &["Friends"]))
            .unwrap();
        model
    }

    fn holders(model: &Model, name: &str) -> Vec<String> {
        model
            .address_book()
            .persons()
            .iter()
            .filter(|p| p.tags().contains(&tag(name)))
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn removes_tag_from_every_holder() {
        let mut model = tagged_model();
        let mut cmd = DeleteTagCommand::new(tag("friends"));
        let execution = cmd.execute(&mut model).unwrap();

        assert_eq!(
            execution.result().feedback(),
            "Removed tag [friends] from 2 persons"
        );
        assert!(holders(&model, "friends").is_empty());
        assert_eq!(holders(&model, "work"), ["Alice"]);
    }

    #[test]
    fn reaches_persons_outside_the_filter() {
        let mut model = tagged_model();
        model.update_filter(PersonFilter::Keywords(vec!["bob".into()]));
        DeleteTagCommand::new(tag("friends"))
            .execute(&mut model)
            .unwrap();
        assert!(holders(&model, "friends").is_empty());
    }

    #[test]
    fn unknown_tag_fails_without_change() {
        let mut model = tagged_model();
        let before = model.address_book().clone();
        let err = DeleteTagCommand::new(tag("gym"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), "No person is tagged [gym]");
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn undo_and_redo_round_trip() {
        let mut model = tagged_model();
        let before = model.address_book().clone();
        let mut cmd = DeleteTagCommand::new(tag("friends"));
        cmd.execute(&mut model).unwrap();
        let after = model.address_book().clone();

        let mut rx = model.events().subscribe();
        cmd.undo(&mut model).unwrap();
        assert_eq!(model.address_book(), &before);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());

        cmd.redo(&mut model).unwrap();
        assert_eq!(model.address_book(), &after);
    }

    #[test]
    fn undo_fails_cleanly_when_a_holder_changed() {
        let mut model = tagged_model();
        let mut cmd = DeleteTagCommand::new(tag("friends"));
        cmd.execute(&mut model).unwrap();

        let carol = model.address_book().persons()[2].clone();
        model.remove_person(&carol).unwrap();
        let before_undo = model.address_book().clone();

        assert!(cmd.undo(&mut model).is_err());
        assert_eq!(model.address_book(), &before_undo);
        assert_eq!(person("Bob"), model.address_book().persons()[1]);
    }
}
