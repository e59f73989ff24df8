//! Linear undo/redo history.

use snapmark_core::constants::DEFAULT_HISTORY_LIMIT;
use tracing::debug;

use crate::commands::Command;
use crate::document::Document;

/// Commands plus a cursor. Everything before the cursor is applied; the rest
/// can be redone until the next push truncates it.
#[derive(Debug, Clone)]
pub struct UndoStack {
    commands: Vec<Command>,
    cursor: usize,
    limit: Option<usize>,
}

impl UndoStack {
    /// Create a stack with the default depth (100)
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create with a custom maximum number of undoable commands. Zero means
    /// unbounded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            limit: (limit > 0).then_some(limit),
        }
    }

    /// Applies `command`, drops any redo entries and records it.
    pub fn push(&mut self, command: Command, document: &mut Document) {
        command.apply(document);
        debug!("push {}", command.name());
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor = self.commands.len();

        if let Some(limit) = self.limit {
            if self.commands.len() > limit {
                let excess = self.commands.len() - limit;
                self.commands.drain(..excess);
                self.cursor -= excess;
            }
        }
    }

    /// Reverts the command before the cursor. Returns false at the start.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let command = &self.commands[self.cursor];
        debug!("undo {}", command.name());
        command.revert(document);
        true
    }

    /// Re-applies the command at the cursor. Returns false at the end.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.commands.get(self.cursor) else {
            return false;
        };
        debug!("redo {}", command.name());
        command.apply(document);
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Name of the command `undo` would revert.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(Command::name)
    }

    /// Name of the command `redo` would apply.
    pub fn redo_name(&self) -> Option<&'static str> {
        self.commands.get(self.cursor).map(Command::name)
    }

    /// Total number of recorded commands, redoable ones included.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
