//! Undo / Redo handling.
//!
//! Both operations swap the whole buffer with a snapshot, so a successful
//! call is reported as `buffer_replaced` to force a full redraw.

use super::{DispatchResult, report};
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> DispatchResult {
    let before = state.buffer().line_count();
    match state.undo() {
        Ok(()) => {
            let after = state.buffer().line_count();
            tracing::trace!(target: "actions.dispatch", op = "undo", line_count_changed = (before != after), "undo");
            DispatchResult::buffer_replaced()
        }
        Err(e) => report(state, "undo", e),
    }
}

pub(crate) fn handle_redo(state: &mut EditorState) -> DispatchResult {
    let before = state.buffer().line_count();
    match state.redo() {
        Ok(()) => {
            let after = state.buffer().line_count();
            tracing::trace!(target: "actions.dispatch", op = "redo", line_count_changed = (before != after), "redo");
            DispatchResult::buffer_replaced()
        }
        Err(e) => report(state, "redo", e),
    }
}
