//! File IO helpers for the load and save commands.
//!
//! Synchronous and minimal. Loading splits content on any line ending and
//! remembers the dominant style; saving terminates every line with that
//! style, so an unmodified CRLF file round-trips byte for byte.

use core_state::{EditorState, LineEnding, normalize_line_endings};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    /// Nothing at that path; the caller starts an empty buffer bound to it.
    NotFound,
    Error, // already logged
}

#[derive(Debug)]
pub struct OpenSuccess {
    pub lines: Vec<String>,
    pub file_name: PathBuf,
    pub original_line_ending: LineEnding,
    pub mixed_line_endings: bool,
    /// Content was not valid UTF-8 and was decoded lossily.
    pub lossy_utf8: bool,
}

/// Read `path` and split it into rows. Invalid UTF-8 sequences are replaced
/// with U+FFFD and flagged on the result.
pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read(path) {
        Ok(bytes) => {
            let size_bytes = bytes.len();
            let (content, lossy_utf8) = match String::from_utf8(bytes) {
                Ok(content) => (content, false),
                Err(e) => {
                    tracing::warn!(target: "io", file = %path.display(), valid_up_to = e.utf8_error().valid_up_to(), "file_invalid_utf8_lossy");
                    (String::from_utf8_lossy(e.as_bytes()).into_owned(), true)
                }
            };
            let norm = normalize_line_endings(&content);
            tracing::debug!(target: "io", file = %path.display(), size_bytes, line_count = norm.lines.len(), lossy_utf8, "file_read_ok");
            OpenFileResult::Success(OpenSuccess {
                lines: norm.lines,
                file_name: path.to_path_buf(),
                original_line_ending: norm.original,
                mixed_line_endings: norm.mixed,
                lossy_utf8,
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(target: "io", file = %path.display(), "file_not_found_new_buffer");
            OpenFileResult::NotFound
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, "file_open_error");
            OpenFileResult::Error
        }
    }
}

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteFileResult {
    Success { lines: usize },
    NoFilename,
    Error,
}

/// Serialize the buffer to `target` (binding it as the file name) or to the
/// current file name. Styles are discarded; each line ends with the
/// original line ending.
pub fn write_file(state: &mut EditorState, target: Option<&Path>) -> WriteFileResult {
    let path = if let Some(p) = target {
        p.to_path_buf()
    } else if let Some(existing) = state.file_name.clone() {
        existing
    } else {
        return WriteFileResult::NoFilename;
    };
    let ending = state.original_line_ending.as_str();
    let lines = state.lines_for_save();
    let mut content = String::new();
    for line in &lines {
        content.push_str(line);
        content.push_str(ending);
    }
    match std::fs::write(&path, content.as_bytes()) {
        Ok(()) => {
            tracing::debug!(target: "io", file = %path.display(), lines = lines.len(), "file_write_ok");
            state.file_name = Some(path);
            state.dirty = false;
            WriteFileResult::Success { lines: lines.len() }
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, "file_write_error");
            WriteFileResult::Error
        }
    }
}
