//! Undo/redo stacks.
//!
//! Only commands whose `execute` returned [`Execution::Applied`](crate::commands::Execution)
//! are pushed. A command moves between the two stacks only when its undo or redo
//! succeeds; one that fails is dropped from both, and the error goes back to the caller
//! as it is.

use crate::commands::UndoableCommand;
use crate::error::CommandError;
use crate::model::Model;
use tracing::warn;

#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<UndoableCommand>,
    redo_stack: Vec<UndoableCommand>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly executed command. Anything that was undone is forgotten.
    pub fn push(&mut self, command: UndoableCommand) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
    }

    /// Returns the word of the command that was undone.
    pub fn undo(&mut self, model: &mut Model) -> Result<&'static str, CommandError> {
        let command = self.undo_stack.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(err) = command.undo(model) {
            warn!(command = command.word(), error = %err, "undo failed, dropping command");
            return Err(err);
        }
        let word = command.word();
        self.redo_stack.push(command);
        Ok(word)
    }

    /// Returns the word of the command that was redone.
    pub fn redo(&mut self, model: &mut Model) -> Result<&'static str, CommandError> {
        let command = self.redo_stack.pop().ok_or(CommandError::NothingToRedo)?;
        if let Err(err) = command.redo(model) {
            warn!(command = command.word(), error = %err, "redo failed, dropping command");
            return Err(err);
        }
        let word = command.word();
        self.undo_stack.push(command);
        Ok(word)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
