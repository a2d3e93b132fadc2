//! Command execution: save, load, help, quit.
//!
//! File IO goes through `io_ops`; this module only turns results into
//! status messages and state transitions.

use super::DispatchResult;
use crate::io_ops::{OpenFileResult, WriteFileResult, open_file, write_file};
use crate::{Action, HELP_TEXT};
use core_state::{EditorState, StatusKind};
use std::path::PathBuf;

pub(crate) fn handle_command(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::Quit => DispatchResult::quit(),
        Action::Help => {
            state.set_status(HELP_TEXT, StatusKind::Info);
            DispatchResult::dirty()
        }
        Action::Save(target) => handle_write(state, target),
        Action::Load(path) => handle_open(state, path),
        _ => unreachable!("non-command action routed to command handler"),
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string())
}

fn handle_write(state: &mut EditorState, target: Option<PathBuf>) -> DispatchResult {
    match write_file(state, target.as_deref()) {
        WriteFileResult::Success { lines } => {
            let name = state
                .file_name
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_status(format!("Saved {lines} line(s) to {name}"), StatusKind::Info);
            DispatchResult::dirty()
        }
        WriteFileResult::NoFilename => {
            state.set_status("No file name (use: save <path>)", StatusKind::Error);
            DispatchResult::clean()
        }
        WriteFileResult::Error => {
            state.set_status("Failed to save file!", StatusKind::Error);
            DispatchResult::clean()
        }
    }
}

fn handle_open(state: &mut EditorState, path: PathBuf) -> DispatchResult {
    match open_file(&path) {
        OpenFileResult::Success(s) => {
            let count = s.lines.len();
            state.load(s.lines);
            state.set_buffer_name(display_name(&s.file_name));
            state.file_name = Some(s.file_name);
            state.original_line_ending = s.original_line_ending;
            let mut note = String::new();
            if s.mixed_line_endings {
                note.push_str(" (mixed line endings normalized)");
            }
            if s.lossy_utf8 {
                note.push_str(" (invalid UTF-8 replaced)");
            }
            state.set_status(
                format!("Opened {} ({count} lines){note}", path.display()),
                StatusKind::Info,
            );
            DispatchResult::buffer_replaced()
        }
        OpenFileResult::NotFound => {
            state.load(Vec::<String>::new());
            state.set_buffer_name(display_name(&path));
            state.file_name = Some(path.clone());
            state.original_line_ending = Default::default();
            state.set_status(
                format!("New file: {} (created on save)", path.display()),
                StatusKind::Info,
            );
            DispatchResult::buffer_replaced()
        }
        OpenFileResult::Error => {
            state.set_status(
                format!("Failed to open {}", path.display()),
                StatusKind::Error,
            );
            DispatchResult::clean()
        }
    }
}
