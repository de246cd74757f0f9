//! Linear undo/redo history.

use crate::canvas::Canvas;
use crate::commands::DrawingCommand;
use roofkit_core::constants::DEFAULT_HISTORY_DEPTH;

/// Bounded undo and redo stacks.
///
/// Recording a new command clears the redo stack. When the undo stack
/// outgrows `max_depth` the oldest command is dropped.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    undo_stack: Vec<DrawingCommand>,
    redo_stack: Vec<DrawingCommand>,
    max_depth: usize,
}

impl CommandHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records a command that has already been applied.
    pub fn record(&mut self, cmd: DrawingCommand) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_depth {
            let dropped = self.undo_stack.remove(0);
            tracing::debug!("History full, dropped '{}'", dropped.name());
        }
    }

    /// Undoes the most recent command. Returns false when there is none.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self.undo_stack.pop() {
            Some(mut cmd) => {
                cmd.undo(canvas);
                self.redo_stack.push(cmd);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone command.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        match self.redo_stack.pop() {
            Some(mut cmd) => {
                cmd.apply(canvas);
                self.undo_stack.push(cmd);
                true
            }
            None => false,
        }
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

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Name of the command `undo` would revert.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.last().map(|cmd| cmd.name())
    }

    /// Name of the command `redo` would re-apply.
    pub fn redo_name(&self) -> Option<&str> {
        self.redo_stack.last().map(|cmd| cmd.name())
    }

    /// Forgets the add-point commands of the in-progress session.
    ///
    /// Those are the add-point commands recorded after the last command that
    /// ended a session. Other commands recorded meanwhile are kept.
    pub fn discard_session_points(&mut self) -> usize {
        let start = self
            .undo_stack
            .iter()
            .rposition(DrawingCommand::ends_session)
            .map(|i| i + 1)
            .unwrap_or(0);
        let before = self.undo_stack.len();
        let mut position = 0;
        self.undo_stack.retain(|cmd| {
            let keep = position < start || !matches!(cmd, DrawingCommand::AddPoint(_));
            position += 1;
            keep
        });
        self.redo_stack.clear();
        before - self.undo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}
