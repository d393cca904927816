use super::{CmdResult, Execution};
use crate::error::{CommandError, ModelError};
use crate::model::{Model, Person};

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [b/BIRTHDAY] [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 b/01/01/1990 t/friends";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        model
            .add_person(self.person.clone())
            .map_err(translate)?;
        Ok(Execution::Applied(CmdResult::success(format!(
            "New person added: {}",
            self.person
        ))))
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        model.remove_person(&self.person).map_err(translate)?;
        Ok(())
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        model.add_person(self.person.clone()).map_err(translate)
    }
}

fn translate(err: ModelError) -> CommandError {
    match err {
        ModelError::DuplicatePerson => CommandError::DuplicatePerson,
        _ => CommandError::failed("The added person is no longer in the address book"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{model_with, person};

    #[test]
    fn adds_person_to_end() {
        let mut model = model_with(&["Alice"]);
        let mut cmd = AddCommand::new(person("Bob"));
        let execution = cmd.execute(&mut model).unwrap();

        assert!(execution.is_applied());
        assert!(execution
            .result()
            .feedback()
            .starts_with("New person added: Bob"));
        assert_eq!(model.address_book().persons()[1], person("Bob"));
    }

    #[test]
    fn duplicate_is_rejected_and_list_unchanged() {
        let mut model = model_with(&["Alice"]);
        let err = AddCommand::new(person("ALICE")).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
        assert_eq!(
            err.to_string(),
            "This person already exists in the address book"
        );
        assert_eq!(model.address_book().persons().len(), 1);
    }

    #[test]
    fn undo_removes_and_redo_re_adds() {
        let mut model = model_with(&["Alice"]);
        let mut cmd = AddCommand::new(person("Bob"));
        cmd.execute(&mut model).unwrap();

        cmd.undo(&mut model).unwrap();
        assert_eq!(model.address_book().persons().len(), 1);

        cmd.redo(&mut model).unwrap();
        assert_eq!(model.address_book().persons().len(), 2);
    }
}
