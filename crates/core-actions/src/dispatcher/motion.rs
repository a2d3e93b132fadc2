//! Motion sub-dispatch (cursor movement). Never records history.

use super::{DispatchResult, report};
use crate::Direction;
use core_state::EditorState;

pub(crate) fn handle_motion(direction: Direction, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor();
    match state.move_cursor(direction) {
        Ok(()) if state.cursor() != before => DispatchResult::dirty(),
        Ok(()) => DispatchResult::clean(),
        Err(e) => report(state, "motion", e),
    }
}
