//! Text edit action handling (line insert/delete, char insert/backspace, replace).
//!
//! Each handler calls exactly one `EditorState` operation; snapshotting and
//! redo invalidation happen inside that call, never here.

use super::{DispatchResult, report};
use crate::Action;
use core_state::{EditorState, ReplaceOutcome, StatusKind};
use core_text::Line;

pub(crate) fn handle_edit(action: Action, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor();
    let (op, result) = match action {
        Action::InsertLine {
            position,
            text,
            style,
        } => (
            "insert_line",
            state.insert_line(position, Line::new(text, style)),
        ),
        Action::DeleteLine(position) => ("delete_line", state.delete_line(position)),
        Action::InsertChar(c) => ("insert_char", state.insert_char(c)),
        Action::DeleteChar => ("delete_char", state.delete_char()),
        Action::Replace {
            search,
            replacement,
        } => return handle_replace(&search, &replacement, state),
        _ => unreachable!("non-edit action routed to edit handler"),
    };
    match result {
        Ok(()) => {
            let after = state.cursor();
            tracing::trace!(target: "actions.dispatch", op, line = before.line, col = before.col, to_line = after.line, to_col = after.col, "edit");
            DispatchResult::dirty()
        }
        Err(e) => report(state, op, e),
    }
}

fn handle_replace(search: &str, replacement: &str, state: &mut EditorState) -> DispatchResult {
    match state.replace(search, replacement) {
        Ok(ReplaceOutcome::Replaced { count }) => {
            tracing::trace!(target: "actions.dispatch", op = "replace", count, "edit");
            state.set_status(
                format!(
                    "Replaced {count} instance(s) of '{search}' with '{replacement}'."
                ),
                StatusKind::Info,
            );
            DispatchResult::dirty()
        }
        Ok(ReplaceOutcome::NoMatches) => {
            state.set_status(
                format!("No instances of '{search}' were found in the document."),
                StatusKind::Info,
            );
            DispatchResult::dirty()
        }
        Err(e) => report(state, "replace", e),
    }
}
