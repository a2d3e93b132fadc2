//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules by concern:
//! * `edit`    - line and character mutations, replace
//! * `motion`  - cursor movement
//! * `undo`    - undo / redo
//! * `command` - save, load, help, quit
//!
//! Failures never escape: an `EditError` becomes an error status message
//! on the state and the result reports nothing to redraw beyond the
//! message, so the interactive loop always continues.

use crate::Action;
use core_state::{EditError, EditorState, StatusKind};

mod command;
pub mod command_parser;
mod edit;
mod motion;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
    /// The whole buffer was swapped (load, undo, redo) rather than edited in place.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to editor state.
pub fn dispatch(action: Action, state: &mut EditorState) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    match action {
        Action::InsertLine { .. }
        | Action::DeleteLine(_)
        | Action::InsertChar(_)
        | Action::DeleteChar
        | Action::Replace { .. } => edit::handle_edit(action, state),
        Action::Move(direction) => motion::handle_motion(direction, state),
        Action::Undo => undo::handle_undo(state),
        Action::Redo => undo::handle_redo(state),
        Action::Save(_) | Action::Load(_) | Action::Help | Action::Quit => {
            command::handle_command(action, state)
        }
    }
}

/// Surface an edit failure as an error status; nothing was mutated.
pub(crate) fn report(state: &mut EditorState, op: &'static str, err: EditError) -> DispatchResult {
    tracing::debug!(target: "actions.dispatch", op, error = %err, "edit_rejected");
    state.set_status(err.to_string(), StatusKind::Error);
    DispatchResult::clean()
}
