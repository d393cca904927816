//! # Command Layer
//!
//! Each command verb lives in its own submodule as a plain struct carrying its typed,
//! already-validated arguments. Parsing happens before a command exists; by the time
//! one is built it can be executed straight away.
//!
//! ## The Closed Command Set
//!
//! [`Command`] is a closed enum. Commands that change the address book are grouped
//! under [`UndoableCommand`], which adds the `undo` / `redo` pair; the rest (listing,
//! exporting, history navigation, ...) are handled by the API facade directly.
//!
//! ## Undoable Lifecycle
//!
//! ```text
//! Created ──execute──► Executed ──undo──► Undone ──redo──► Executed ...
//!    └──────fails─────► Failed (no model change)
//! ```
//!
//! `execute` resolves indexes against the displayed list and records exactly what it
//! changed. `undo` applies the inverse of that record and `redo` applies it again,
//! both through the model's checked operations, so either can fail if the data has
//! since been changed by something else. Neither re-resolves indexes.
//!
//! An `execute` that finds nothing to do (unpinning an unpinned person) returns
//! [`Execution::Unchanged`]. Such a command is not pushed onto the history.
//!
//! ## Errors
//!
//! Model errors never leave this layer as they are. Each command translates them into a
//! [`CommandError`] worded for the user.
//!
//! ## Command Modules
//!
//! - [`add`], [`edit`], [`delete`], [`clear`]: person lifecycle
//! - [`pinning`]: pin/unpin via the reserved tag
//! - [`tag`]: remove a user tag from every person
//! - [`group`]: create/delete groups
//! - [`sort`]: reorder the address book
//! - [`list`], [`find`]: change the displayed view
//! - [`export`]: hand the address book to the storage collaborator

use crate::error::CommandError;
use crate::index::Index;
use crate::model::{Model, Person};
use serde::Serialize;
use std::fmt;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod group;
pub mod list;
pub mod pinning;
pub mod sort;
pub mod tag;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use export::ExportCommand;
pub use find::FindCommand;
pub use group::{CreateGroupCommand, DeleteGroupCommand};
pub use pinning::{PinCommand, UnpinCommand};
pub use sort::SortCommand;
pub use tag::DeleteTagCommand;

pub const HISTORY_WORD: &str = "history";
pub const UNDO_WORD: &str = "undo";
pub const REDO_WORD: &str = "redo";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const HISTORY_USAGE: &str =
    "history: Lists all the commands entered, from the most recent to the earliest.";
pub const UNDO_USAGE: &str = "undo: Undoes the previous undoable command.";
pub const REDO_USAGE: &str = "redo: Redoes the previously undone command.";
pub const HELP_USAGE: &str = "help: Shows the usage of every command.";
pub const EXIT_USAGE: &str = "exit: Exits the program.";

/// Usage of every command, in the order `help` shows them.
pub fn all_usages() -> Vec<&'static str> {
    vec![
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        clear::USAGE,
        pinning::PIN_USAGE,
        pinning::UNPIN_USAGE,
        tag::USAGE,
        group::CREATE_USAGE,
        group::DELETE_USAGE,
        sort::USAGE,
        list::USAGE,
        find::USAGE,
        export::USAGE,
        HISTORY_USAGE,
        UNDO_USAGE,
        REDO_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Set by `exit`; front ends stop reading input.
    pub exit: bool,
}

impl CmdResult {
    pub fn new(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            exit: false,
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(CmdMessage::success(content))
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(CmdMessage::info(content))
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// First message, which is the one-line summary of the outcome.
    pub fn feedback(&self) -> &str {
        self.messages.first().map_or("", |m| m.content.as_str())
    }
}

/// What an undoable `execute` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    /// The model changed; the command belongs on the undo stack.
    Applied(CmdResult),
    /// Nothing to do; the model is untouched and there is nothing to undo.
    Unchanged(CmdResult),
}

impl Execution {
    pub fn result(&self) -> &CmdResult {
        match self {
            Execution::Applied(r) | Execution::Unchanged(r) => r,
        }
    }

    pub fn into_result(self) -> CmdResult {
        match self {
            Execution::Applied(r) | Execution::Unchanged(r) => r,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Execution::Applied(_))
    }
}

/// Every command the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Undoable(UndoableCommand),
    List,
    Find(FindCommand),
    Export(ExportCommand),
    History,
    Undo,
    Redo,
    Help,
    Exit,
}

/// Commands that mutate the model and can be reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoableCommand {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Clear(ClearCommand),
    Pin(PinCommand),
    Unpin(UnpinCommand),
    CreateGroup(CreateGroupCommand),
    DeleteGroup(DeleteGroupCommand),
    Sort(SortCommand),
    DeleteTag(DeleteTagCommand),
}

impl UndoableCommand {
    pub fn execute(&mut self, model: &mut Model) -> Result<Execution, CommandError> {
        match self {
            UndoableCommand::Add(c) => c.execute(model),
            UndoableCommand::Edit(c) => c.execute(model),
            UndoableCommand::Delete(c) => c.execute(model),
            UndoableCommand::Clear(c) => c.execute(model),
            UndoableCommand::Pin(c) => c.execute(model),
            UndoableCommand::Unpin(c) => c.execute(model),
            UndoableCommand::CreateGroup(c) => c.execute(model),
            UndoableCommand::DeleteGroup(c) => c.execute(model),
            UndoableCommand::Sort(c) => c.execute(model),
            UndoableCommand::DeleteTag(c) => c.execute(model),
        }
    }

    pub fn undo(&self, model: &mut Model) -> Result<(), CommandError> {
        match self {
            UndoableCommand::Add(c) => c.undo(model),
            UndoableCommand::Edit(c) => c.undo(model),
            UndoableCommand::Delete(c) => c.undo(model),
            UndoableCommand::Clear(c) => c.undo(model),
            UndoableCommand::Pin(c) => c.undo(model),
            UndoableCommand::Unpin(c) => c.undo(model),
            UndoableCommand::CreateGroup(c) => c.undo(model),
            UndoableCommand::DeleteGroup(c) => c.undo(model),
            UndoableCommand::Sort(c) => c.undo(model),
            UndoableCommand::DeleteTag(c) => c.undo(model),
        }
    }

    pub fn redo(&self, model: &mut Model) -> Result<(), CommandError> {
        match self {
            UndoableCommand::Add(c) => c.redo(model),
            UndoableCommand::Edit(c) => c.redo(model),
            UndoableCommand::Delete(c) => c.redo(model),
            UndoableCommand::Clear(c) => c.redo(model),
            UndoableCommand::Pin(c) => c.redo(model),
            UndoableCommand::Unpin(c) => c.redo(model),
            UndoableCommand::CreateGroup(c) => c.redo(model),
            UndoableCommand::DeleteGroup(c) => c.redo(model),
            UndoableCommand::Sort(c) => c.redo(model),
            UndoableCommand::DeleteTag(c) => c.redo(model),
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            UndoableCommand::Add(_) => add::COMMAND_WORD,
            UndoableCommand::Edit(_) => edit::COMMAND_WORD,
            UndoableCommand::Delete(_) => delete::COMMAND_WORD,
            UndoableCommand::Clear(_) => clear::COMMAND_WORD,
            UndoableCommand::Pin(_) => pinning::PIN_WORD,
            UndoableCommand::Unpin(_) => pinning::UNPIN_WORD,
            UndoableCommand::CreateGroup(_) => group::CREATE_WORD,
            UndoableCommand::DeleteGroup(_) => group::DELETE_WORD,
            UndoableCommand::Sort(_) => sort::COMMAND_WORD,
            UndoableCommand::DeleteTag(_) => tag::COMMAND_WORD,
        }
    }
}

impl fmt::Display for UndoableCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

impl From<UndoableCommand> for Command {
    fn from(command: UndoableCommand) -> Self {
        Command::Undoable(command)
    }
}

/// Looks up the person at a displayed index.
pub(crate) fn person_at(model: &Model, index: Index) -> Result<Person, CommandError> {
    index
        .resolve(model.filtered_person_list())
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)
}

/// Returns the state an undo/redo expects to find, or fails if `execute` never ran.
pub(crate) fn recorded<T>(state: &Option<T>) -> Result<&T, CommandError> {
    state
        .as_ref()
        .ok_or_else(|| CommandError::failed("Command has not been executed"))
}
