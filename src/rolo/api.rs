//! # API Facade
//!
//! [`RoloApi`] is the single entry point for front ends. It takes a raw command line and
//! returns a [`CmdResult`]; everything between (parsing, execution against the model,
//! history bookkeeping, persisting) happens here.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that lives in `commands/*.rs`
//! - **Presentation**: no printing; results and model events are data
//!
//! ## Generic Over Storage
//!
//! `RoloApi<S: Storage>` works with any backend:
//! - Production: `RoloApi<JsonFileStore>`
//! - Testing: `RoloApi<InMemoryStore>`
//!
//! ## Persisting
//!
//! With autosave on, the address book is saved after every change that reaches the
//! model: a successful undoable command, undo, and redo. Filter changes are view state
//! and are never saved. A failing save is returned as an error, but the change it
//! followed stays applied and on the history.

use crate::commands::{self, Command, Execution};
use crate::error::Result;
use crate::events::EventBus;
use crate::history::CommandHistory;
use crate::model::Model;
use crate::parser::parse_command;
use crate::store::Storage;
use tracing::{info, warn};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
const MESSAGE_REDO_SUCCESS: &str = "Redo success!";
const MESSAGE_NO_HISTORY: &str = "You have not yet entered any commands.";
const MESSAGE_HISTORY_HEADER: &str = "Entered commands (from most recent to earliest):";
const MESSAGE_EXIT: &str = "Exiting as requested ...";

pub struct RoloApi<S: Storage> {
    model: Model,
    history: CommandHistory,
    store: S,
    /// Every non-blank line entered so far, oldest first.
    inputs: Vec<String>,
    autosave: bool,
}

impl<S: Storage> RoloApi<S> {
    /// Loads the address book from `store` and starts with empty histories.
    pub fn new(store: S, events: EventBus) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            model: Model::new(book, events),
            history: CommandHistory::new(),
            store,
            inputs: Vec::new(),
            autosave: true,
        })
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Parses and runs one command line.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let result = self.dispatch(line);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.inputs.push(trimmed.to_string());
        }
        if let Err(err) = &result {
            warn!(input = trimmed, error = %err, "command failed");
        }
        result
    }

    /// Saves the address book now, regardless of the autosave setting.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(self.model.address_book())
    }

    fn dispatch(&mut self, line: &str) -> Result<CmdResult> {
        let command = parse_command(line)?;

        match command {
            Command::Undoable(mut command) => {
                let execution = command.execute(&mut self.model)?;
                info!(
                    command = command.word(),
                    applied = execution.is_applied(),
                    "executed command"
                );
                match execution {
                    Execution::Applied(result) => {
                        self.history.push(command);
                        self.persist()?;
                        Ok(result)
                    }
                    Execution::Unchanged(result) => Ok(result),
                }
            }
            Command::List => Ok(commands::list::run(&mut self.model)),
            Command::Find(find) => Ok(find.run(&mut self.model)),
            Command::Export(export) => {
                let result = export.run(&self.model, &mut self.store)?;
                info!(path = %export.path().display(), "exported address book");
                Ok(result)
            }
            Command::History => Ok(self.history_listing()),
            Command::Undo => {
                let word = self.history.undo(&mut self.model)?;
                info!(command = word, "undid command");
                self.persist()?;
                Ok(CmdResult::success(MESSAGE_UNDO_SUCCESS))
            }
            Command::Redo => {
                let word = self.history.redo(&mut self.model)?;
                info!(command = word, "redid command");
                self.persist()?;
                Ok(CmdResult::success(MESSAGE_REDO_SUCCESS))
            }
            Command::Help => Ok(CmdResult::info(commands::all_usages().join("\n\n"))),
            Command::Exit => {
                let mut result = CmdResult::info(MESSAGE_EXIT);
                result.exit = true;
                Ok(result)
            }
        }
    }

    fn history_listing(&self) -> CmdResult {
        if self.inputs.is_empty() {
            return CmdResult::info(MESSAGE_NO_HISTORY);
        }
        let mut result = CmdResult::info(MESSAGE_HISTORY_HEADER);
        for input in self.inputs.iter().rev() {
            result.add_message(CmdMessage::info(input.clone()));
        }
        result
    }

    fn persist(&mut self) -> Result<()> {
        if self.autosave {
            self.store.save(self.model.address_book())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, ParseError, RoloError};
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::book_with;

    fn api_with(names: &[&str]) -> RoloApi<InMemoryStore> {
        RoloApi::new(InMemoryStore::with_book(book_with(names)), EventBus::default()).unwrap()
    }

    #[test]
    fn loads_book_from_store() {
        let api = api_with(&["Alice", "Bob"]);
        assert_eq!(api.model().filtered_person_list().len(), 2);
    }

    #[test]
    fn applied_commands_are_saved_and_recorded() {
        let mut api = api_with(&["Alice"]);
        api.execute("pin 1").unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert!(api.store().book().persons()[0].is_pinned());
        assert!(api.history().can_undo());
    }

    #[test]
    fn unchanged_commands_are_not_saved_or_recorded() {
        let mut api = api_with(&["Alice"]);
        let result = api.execute("unpin 1").unwrap();
        assert_eq!(result.feedback(), "Person is not pinned!");
        assert_eq!(api.store().save_count(), 0);
        assert!(!api.history().can_undo());
    }

    #[test]
    fn autosave_off_skips_saving() {
        let mut api = api_with(&["Alice"]).with_autosave(false);
        api.execute("delete 1").unwrap();
        assert_eq!(api.store().save_count(), 0);
        api.save().unwrap();
        assert!(api.store().book().persons().is_empty());
    }

    #[test]
    fn errors_come_back_typed() {
        let mut api = api_with(&["Alice"]);
        assert!(matches!(
            api.execute("pin 4"),
            Err(RoloError::Command(CommandError::InvalidPersonIndex))
        ));
        assert!(matches!(
            api.execute("bogus"),
            Err(RoloError::Parse(ParseError::UnknownCommand))
        ));
        assert!(matches!(
            api.execute("undo"),
            Err(RoloError::Command(CommandError::NothingToUndo))
        ));
    }

    #[test]
    fn history_lists_inputs_most_recent_first() {
        let mut api = api_with(&["Alice"]);
        assert_eq!(api.execute("history").unwrap().feedback(), MESSAGE_NO_HISTORY);

        api.execute("list").unwrap();
        let _ = api.execute("bogus");
        let result = api.execute("history").unwrap();
        let lines: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(lines, [MESSAGE_HISTORY_HEADER, "bogus", "list", "history"]);
    }

    #[test]
    fn exit_sets_flag() {
        let mut api = api_with(&[]);
        assert!(api.execute("exit").unwrap().exit);
        assert!(!api.execute("list").unwrap().exit);
    }

    #[test]
    fn help_lists_every_command() {
        let mut api = api_with(&[]);
        let help = api.execute("help").unwrap();
        for usage in commands::all_usages() {
            assert!(help.feedback().contains(usage));
        }
    }
}
