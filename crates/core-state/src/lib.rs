//! Editor state: the document buffer, cursor, and undo/redo history.
//!
//! Every mutating operation follows the same order: validate, record a
//! pre-mutation snapshot, mutate, then clear redo history. Validation always
//! precedes the snapshot, so a failed call leaves no trace in the buffer, the
//! cursor, or either history stack.
//!
//! Line numbers taken by `insert_line`/`delete_line` are 1-based (as users
//! type them); everything else, including `cursor()`, is 0-based.
//!
//! Cursor after undo/redo:
//! - Restoring a snapshot swaps the buffer wholesale and does not restore a
//!   cursor. With `clamp_cursor` on (the default) the cursor is clamped into
//!   the restored document. With it off the cursor is left as it was, which
//!   may point past the end of a shorter document; cursor-dependent
//!   operations then fail with `EditError::CursorOutOfRange`.
//!
//! Empty documents:
//! - Deleting the last line leaves zero lines. Character edits and motions
//!   report `EditError::EmptyDocument` until a line is inserted again.
//!
//! Telemetry: edits log under `state.edit`, history lifecycle under `state.undo`.

use core_text::{Buffer, Line, Position, motion, search};
use tracing::debug;

pub mod error;
pub mod undo;

pub use error::{EditError, EditResult};
use undo::UndoEngine;
pub use undo::{Snapshot, UNDO_HISTORY_MAX};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Outcome of a whole-buffer replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    NoMatches,
    Replaced { count: usize },
}

impl ReplaceOutcome {
    /// True when at least one occurrence was replaced.
    pub fn replaced(&self) -> bool {
        matches!(self, ReplaceOutcome::Replaced { .. })
    }
}

/// History behavior knobs (populated from configuration by the binary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryOptions {
    pub depth: usize,
    pub clamp_cursor: bool,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            depth: UNDO_HISTORY_MAX,
            clamp_cursor: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-shot message for the boundary layer to display after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Line ending style detected from a loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Raw file content split into rows, plus what is needed to write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub lines: Vec<String>,
    /// Most frequent ending style (ties: CRLF, then LF, then CR).
    pub original: LineEnding,
    pub mixed: bool,
}

/// Split `input` into rows on CRLF, LF or lone CR, recording which style dominated.
/// A trailing terminator does not produce an extra empty row; saves always
/// terminate the last line again.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut lines = Vec::new();
    let mut start = 0usize;
    let bytes = input.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let step = match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                2
            }
            b'\r' => {
                cr += 1;
                1
            }
            b'\n' => {
                lf += 1;
                1
            }
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(input[start..i].to_string());
        i += step;
        start = i;
    }
    if start < input.len() {
        lines.push(input[start..].to_string());
    }
    let counts = [(LineEnding::Crlf, crlf), (LineEnding::Lf, lf), (LineEnding::Cr, cr)];
    let (original, max) = counts
        .iter()
        .fold((LineEnding::Lf, 0usize), |best, &(style, n)| {
            if n > best.1 { (style, n) } else { best }
        });
    let styles_seen = counts.iter().filter(|(_, n)| *n > 0).count();
    NormalizedText {
        lines,
        original,
        mixed: styles_seen > 1 && counts.iter().any(|(_, n)| *n > 0 && *n != max),
    }
}

/// Top-level editor state container (single document).
pub struct EditorState {
    buffer: Buffer,
    cursor: Position,
    undo: UndoEngine,
    clamp_cursor: bool,
    pub file_name: Option<std::path::PathBuf>,
    pub dirty: bool,
    pub original_line_ending: LineEnding,
    status: Option<StatusMessage>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Buffer::empty("untitled"))
    }
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self::with_options(buffer, HistoryOptions::default())
    }

    pub fn with_options(buffer: Buffer, options: HistoryOptions) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            undo: UndoEngine::with_capacity(options.depth),
            clamp_cursor: options.clamp_cursor,
            file_name: None,
            dirty: false,
            original_line_ending: LineEnding::default(),
            status: None,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
    pub fn cursor(&self) -> Position {
        self.cursor
    }
    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }
    pub fn history_capacity(&self) -> usize {
        self.undo.capacity()
    }
    /// Oldest snapshot still retained in undo history.
    pub fn oldest_snapshot(&self) -> Option<&Snapshot> {
        self.undo.oldest()
    }

    pub fn set_buffer_name(&mut self, name: impl Into<String>) {
        self.buffer.name = name.into();
    }

    /// Line texts with styles discarded, for persistence.
    pub fn lines_for_save(&self) -> Vec<String> {
        self.buffer.texts()
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }

    /// Replace the document with one unstyled line per row. Resets the cursor and
    /// erases both history stacks; a load is not undoable.
    pub fn load<I, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = std::mem::take(&mut self.buffer.name);
        self.buffer = Buffer::from_lines(name, rows);
        self.cursor = Position::origin();
        self.undo.clear_all();
        self.dirty = false;
        debug!(target: "state.edit", op = "load", lines = self.buffer.line_count(), "load");
    }

    /// Insert `line` so that it becomes line number `position` (1-based).
    /// `position == line_count + 1` appends.
    pub fn insert_line(&mut self, position: usize, line: Line) -> EditResult<()> {
        let line_count = self.buffer.line_count();
        if position < 1 || position > line_count + 1 {
            return Err(EditError::InvalidPosition {
                position,
                line_count,
            });
        }
        self.begin_edit();
        let col = line.char_len();
        self.buffer.insert_line(position - 1, line);
        self.cursor = Position::new(position - 1, col);
        self.finish_edit("insert_line");
        Ok(())
    }

    /// Remove line number `position` (1-based). Deleting the only line leaves an empty document.
    pub fn delete_line(&mut self, position: usize) -> EditResult<()> {
        let line_count = self.buffer.line_count();
        if position < 1 || position > line_count {
            return Err(EditError::InvalidPosition {
                position,
                line_count,
            });
        }
        self.begin_edit();
        self.buffer.remove_line(position - 1);
        self.cursor = Position::new(position.saturating_sub(2), 0);
        self.finish_edit("delete_line");
        Ok(())
    }

    /// Insert `c` at the cursor and advance the column by one.
    pub fn insert_char(&mut self, c: char) -> EditResult<()> {
        self.require_cursor()?;
        self.begin_edit();
        let mut pos = self.cursor;
        self.buffer.insert_char(&mut pos, c);
        self.cursor = pos;
        self.finish_edit("insert_char");
        Ok(())
    }

    /// Delete the char before the cursor; at column 0 join the line onto the previous one.
    pub fn delete_char(&mut self) -> EditResult<()> {
        if self.buffer.is_empty() {
            return Err(EditError::EmptyDocument);
        }
        if self.cursor.is_origin() {
            return Err(EditError::NothingToDelete);
        }
        self.require_cursor()?;
        self.begin_edit();
        let mut pos = self.cursor;
        self.buffer.delete_char_before(&mut pos);
        self.cursor = pos;
        self.finish_edit("delete_char");
        Ok(())
    }

    /// Replace every literal occurrence of `search` on every line, as one undo step.
    /// The snapshot and redo clear happen even when nothing matches.
    pub fn replace(&mut self, search: &str, replacement: &str) -> EditResult<ReplaceOutcome> {
        if search.is_empty() {
            return Err(EditError::EmptySearchTerm);
        }
        self.begin_edit();
        let mut count = 0usize;
        for line in self.buffer.lines_mut() {
            let (text, n) = search::replace_all(&line.text, search, replacement);
            if n > 0 {
                line.text = text;
                count += n;
            }
        }
        self.clamp_cursor_into_buffer();
        self.finish_edit("replace");
        if count == 0 {
            debug!(target: "state.edit", op = "replace", matches = 0, "replace_no_matches");
            return Ok(ReplaceOutcome::NoMatches);
        }
        Ok(ReplaceOutcome::Replaced { count })
    }

    /// Restore the newest undo snapshot; the current document becomes redoable.
    pub fn undo(&mut self) -> EditResult<()> {
        if !self.undo.undo(&mut self.buffer) {
            return Err(EditError::NothingToUndo);
        }
        self.after_history_swap("undo");
        Ok(())
    }

    /// Re-apply the newest redo snapshot.
    pub fn redo(&mut self) -> EditResult<()> {
        if !self.undo.redo(&mut self.buffer) {
            return Err(EditError::NothingToRedo);
        }
        self.after_history_swap("redo");
        Ok(())
    }

    /// Move the cursor one step. Never touches history.
    pub fn move_cursor(&mut self, direction: Direction) -> EditResult<()> {
        self.require_cursor()?;
        let before = self.cursor;
        let mut pos = self.cursor;
        match direction {
            Direction::Up => motion::up(&self.buffer, &mut pos),
            Direction::Down => motion::down(&self.buffer, &mut pos),
            Direction::Left => motion::left(&self.buffer, &mut pos),
            Direction::Right => motion::right(&self.buffer, &mut pos),
        }
        self.cursor = pos;
        tracing::trace!(target: "state.edit", op = "motion", ?direction, line = before.line, col = before.col, to_line = pos.line, to_col = pos.col, "motion");
        Ok(())
    }

    fn require_cursor(&self) -> EditResult<()> {
        if self.buffer.is_empty() {
            return Err(EditError::EmptyDocument);
        }
        if !self.buffer.contains(self.cursor) {
            return Err(EditError::CursorOutOfRange {
                line: self.cursor.line,
                col: self.cursor.col,
            });
        }
        Ok(())
    }

    fn begin_edit(&mut self) {
        self.undo.record(&self.buffer);
    }

    fn finish_edit(&mut self, op: &'static str) {
        self.undo.clear_redo();
        self.dirty = true;
        debug!(target: "state.edit", op, lines = self.buffer.line_count(), line = self.cursor.line, col = self.cursor.col, undo_depth = self.undo.undo_depth(), "edit");
    }

    fn after_history_swap(&mut self, op: &'static str) {
        if self.clamp_cursor {
            self.clamp_cursor_into_buffer();
        }
        self.dirty = true;
        debug!(target: "state.undo", op, lines = self.buffer.line_count(), undo_depth = self.undo.undo_depth(), redo_depth = self.undo.redo_depth(), "history_swap");
    }

    fn clamp_cursor_into_buffer(&mut self) {
        let buffer = &self.buffer;
        self.cursor
            .clamp_to(buffer.line_count(), |i| buffer.line_char_len(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Style;
    use pretty_assertions::assert_eq;

    fn state(rows: &[&str]) -> EditorState {
        let mut st = EditorState::default();
        st.load(rows.iter().copied());
        st
    }

    fn texts(st: &EditorState) -> Vec<String> {
        st.lines_for_save()
    }

    #[test]
    fn load_resets_cursor_and_history() {
        let mut st = state(&["a", "b"]);
        st.insert_line(1, Line::plain("x")).unwrap();
        st.undo().unwrap();
        st.load(["fresh"]);
        assert_eq!(st.cursor(), Position::origin());
        assert_eq!(st.undo_depth(), 0);
        assert_eq!(st.redo_depth(), 0);
        assert!(!st.dirty);
    }

    #[test]
    fn insert_line_on_empty_document_then_undo() {
        let mut st = state(&[]);
        st.insert_line(1, Line::new("new", Style::BOLD)).unwrap();
        assert_eq!(texts(&st), vec!["new"]);
        assert_eq!(st.buffer().line(0).unwrap().style, Style::BOLD);
        assert_eq!(st.cursor(), Position::new(0, 3));
        st.undo().unwrap();
        assert!(st.buffer().is_empty());
    }

    #[test]
    fn insert_line_bounds() {
        let mut st = state(&["a"]);
        assert_eq!(
            st.insert_line(0, Line::plain("x")),
            Err(EditError::InvalidPosition {
                position: 0,
                line_count: 1
            })
        );
        assert!(st.insert_line(3, Line::plain("x")).is_err());
        assert_eq!(st.undo_depth(), 0);
        st.insert_line(2, Line::plain("tail")).unwrap();
        assert_eq!(texts(&st), vec!["a", "tail"]);
    }

    #[test]
    fn delete_line_sets_cursor_to_previous_line() {
        let mut st = state(&["a", "bb", "c"]);
        st.delete_line(3).unwrap();
        assert_eq!(st.cursor(), Position::new(1, 0));
        st.delete_line(1).unwrap();
        assert_eq!(st.cursor(), Position::new(0, 0));
        assert_eq!(texts(&st), vec!["bb"]);
        assert!(matches!(
            st.delete_line(2),
            Err(EditError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn deleting_last_line_empties_document_and_guards_char_ops() {
        let mut st = state(&["only"]);
        st.delete_line(1).unwrap();
        assert!(st.buffer().is_empty());
        assert_eq!(st.insert_char('x'), Err(EditError::EmptyDocument));
        assert_eq!(st.delete_char(), Err(EditError::EmptyDocument));
        assert_eq!(st.move_cursor(Direction::Down), Err(EditError::EmptyDocument));
        assert_eq!(st.undo_depth(), 1);
    }

    #[test]
    fn delete_char_sequence_from_end_of_hello() {
        let mut st = state(&["hello"]);
        for _ in 0..5 {
            st.move_cursor(Direction::Right).unwrap();
        }
        assert_eq!(st.cursor(), Position::new(0, 5));
        for _ in 0..4 {
            st.delete_char().unwrap();
        }
        assert_eq!(texts(&st), vec!["h"]);
        assert_eq!(st.cursor(), Position::new(0, 1));
        st.delete_char().unwrap();
        assert_eq!(texts(&st), vec![""]);
        assert_eq!(st.cursor(), Position::origin());
        assert_eq!(st.delete_char(), Err(EditError::NothingToDelete));
    }

    #[test]
    fn delete_char_at_column_zero_joins_lines() {
        let mut st = state(&["ab", "cd"]);
        st.move_cursor(Direction::Down).unwrap();
        st.delete_char().unwrap();
        assert_eq!(texts(&st), vec!["abcd"]);
        assert_eq!(st.cursor(), Position::new(0, 2));
    }

    #[test]
    fn insert_char_advances_cursor_and_clears_redo() {
        let mut st = state(&["ac"]);
        st.move_cursor(Direction::Right).unwrap();
        st.insert_char('x').unwrap();
        st.undo().unwrap();
        assert_eq!(st.redo_depth(), 1);
        st.move_cursor(Direction::Left).unwrap();
        st.insert_char('b').unwrap();
        assert_eq!(texts(&st), vec!["abc"]);
        assert_eq!(st.cursor(), Position::new(0, 2));
        assert_eq!(st.redo(), Err(EditError::NothingToRedo));
    }

    #[test]
    fn replace_scenario_single_undo_entry() {
        let mut st = state(&["abc", "abcabc"]);
        let outcome = st.replace("abc", "X").unwrap();
        assert_eq!(outcome, ReplaceOutcome::Replaced { count: 3 });
        assert!(outcome.replaced());
        assert_eq!(texts(&st), vec!["X", "XX"]);
        assert_eq!(st.undo_depth(), 1);
        st.undo().unwrap();
        assert_eq!(texts(&st), vec!["abc", "abcabc"]);
    }

    #[test]
    fn replace_empty_search_is_rejected() {
        let mut st = state(&["abc"]);
        assert_eq!(st.replace("", "x"), Err(EditError::EmptySearchTerm));
        assert_eq!(texts(&st), vec!["abc"]);
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn replace_without_matches_still_invalidates_redo() {
        let mut st = state(&["abc"]);
        st.insert_line(2, Line::plain("def")).unwrap();
        st.undo().unwrap();
        assert_eq!(st.redo_depth(), 1);
        assert_eq!(st.replace("zzz", "y"), Ok(ReplaceOutcome::NoMatches));
        assert_eq!(texts(&st), vec!["abc"]);
        assert_eq!(st.undo_depth(), 1);
        assert_eq!(st.redo(), Err(EditError::NothingToRedo));
        st.undo().unwrap();
        assert_eq!(texts(&st), vec!["abc"]);
    }

    #[test]
    fn replace_preserves_styles_and_clamps_cursor() {
        let mut st = state(&[]);
        st.insert_line(1, Line::new("abcdef", Style::ITALIC | Style::UNDERLINE))
            .unwrap();
        assert_eq!(st.cursor(), Position::new(0, 6));
        st.replace("cdef", "").unwrap();
        assert_eq!(texts(&st), vec!["ab"]);
        assert_eq!(
            st.buffer().line(0).unwrap().style,
            Style::ITALIC | Style::UNDERLINE
        );
        assert_eq!(st.cursor(), Position::new(0, 2));
    }

    #[test]
    fn undo_redo_errors_when_empty() {
        let mut st = state(&["a"]);
        assert_eq!(st.undo(), Err(EditError::NothingToUndo));
        assert_eq!(st.redo(), Err(EditError::NothingToRedo));
    }

    #[test]
    fn undo_depth_is_bounded_and_oldest_evicted() {
        let mut st = state(&[]);
        for i in 0..15 {
            st.insert_line(i + 1, Line::plain(i.to_string())).unwrap();
        }
        assert_eq!(st.undo_depth(), UNDO_HISTORY_MAX);
        // Snapshots taken before edits 0..=4 were evicted; the oldest kept precedes edit 5.
        assert_eq!(st.oldest_snapshot().unwrap().buffer.line_count(), 5);
        for _ in 0..UNDO_HISTORY_MAX {
            st.undo().unwrap();
        }
        assert_eq!(st.buffer().line_count(), 5);
        assert_eq!(st.undo(), Err(EditError::NothingToUndo));
    }

    #[test]
    fn undo_clamps_cursor_by_default() {
        let mut st = state(&["a"]);
        st.insert_line(2, Line::plain("a much longer line")).unwrap();
        assert_eq!(st.cursor(), Position::new(1, 18));
        st.undo().unwrap();
        assert_eq!(st.cursor(), Position::new(0, 1));
        st.insert_char('b').unwrap();
        assert_eq!(texts(&st), vec!["ab"]);
    }

    #[test]
    fn stale_cursor_is_reported_when_clamping_disabled() {
        let options = HistoryOptions {
            depth: UNDO_HISTORY_MAX,
            clamp_cursor: false,
        };
        let mut st = EditorState::with_options(Buffer::from_lines("t", ["a"]), options);
        st.insert_line(2, Line::plain("longer")).unwrap();
        st.undo().unwrap();
        assert_eq!(st.cursor(), Position::new(1, 6), "cursor left stale");
        assert_eq!(
            st.insert_char('x'),
            Err(EditError::CursorOutOfRange { line: 1, col: 6 })
        );
        assert_eq!(texts(&st), vec!["a"]);
        assert_eq!(st.redo_depth(), 1);
    }

    #[test]
    fn configured_depth_is_respected() {
        let options = HistoryOptions {
            depth: 2,
            clamp_cursor: true,
        };
        let mut st = EditorState::with_options(Buffer::empty("t"), options);
        for i in 0..4 {
            st.insert_line(1, Line::plain(i.to_string())).unwrap();
        }
        assert_eq!(st.undo_depth(), 2);
        assert_eq!(st.history_capacity(), 2);
    }

    #[test]
    fn normalize_crlf_input() {
        let n = normalize_line_endings("a\r\nb\r\n");
        assert_eq!(n.lines, vec!["a", "b"]);
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(!n.mixed);
    }

    #[test]
    fn normalize_mixed_without_trailing_newline() {
        let n = normalize_line_endings("a\nb\r\nc\nd");
        assert_eq!(n.lines, vec!["a", "b", "c", "d"]);
        assert_eq!(n.original, LineEnding::Lf);
        assert!(n.mixed);
    }

    #[test]
    fn normalize_keeps_blank_rows() {
        let n = normalize_line_endings("a\n\nb\n");
        assert_eq!(n.lines, vec!["a", "", "b"]);
        assert!(normalize_line_endings("").lines.is_empty());
    }
}
