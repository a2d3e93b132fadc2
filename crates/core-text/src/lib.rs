//! Line-oriented text buffer abstraction.
//!
//! A `Buffer` is an ordered sequence of styled `Line`s. Indices are 0-based
//! here; translation from the 1-based line numbers users type happens in
//! `core-state`. Columns count Unicode scalar values (`char`s), so a column
//! equal to the line's char length is the append position.
//!
//! This crate only knows the shape of a document. Snapshotting, history and
//! error reporting live one layer up; the mutators here return `bool`/`Option`
//! and leave validation to their callers.

pub mod motion;
pub mod search;

bitflags::bitflags! {
    /// Per-line display style. Set when a line is inserted and never touched by
    /// character edits or replacement.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Style: u8 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
    }
}

/// A single line of text plus its style flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Unstyled line, as produced by loading plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::empty())
    }

    /// Length in chars (the maximum valid cursor column on this line).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A cursor position expressed as (line index, char column within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
    pub fn is_origin(&self) -> bool {
        self.line == 0 && self.col == 0
    }

    /// Clamp into `[0, line_count-1] x [0, line_len]`. An empty buffer clamps to the origin.
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.col = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

/// Byte offset of char column `col` inside `text` (end of string when `col` is past the end).
pub fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

/// The document: an ordered, owned sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
    pub name: String,
}

impl Buffer {
    /// An empty (zero-line) buffer.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            name: name.into(),
        }
    }

    /// Construct a buffer holding one unstyled line per input row.
    pub fn from_lines<I, S>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: rows.into_iter().map(Line::plain).collect(),
            name: name.into(),
        }
    }

    /// Construct from already styled lines.
    pub fn from_styled(name: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            lines,
            name: name.into(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Char length of a line; 0 for an index past the end.
    pub fn line_char_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map(Line::char_len).unwrap_or(0)
    }

    /// True when `pos` addresses an existing line and a column within `[0, len]`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.line < self.lines.len() && pos.col <= self.line_char_len(pos.line)
    }

    /// Insert `line` before index `idx` (`idx == line_count` appends). Returns false when out of range.
    pub fn insert_line(&mut self, idx: usize, line: Line) -> bool {
        if idx > self.lines.len() {
            return false;
        }
        self.lines.insert(idx, line);
        true
    }

    /// Remove and return the line at `idx`.
    pub fn remove_line(&mut self, idx: usize) -> Option<Line> {
        if idx < self.lines.len() {
            Some(self.lines.remove(idx))
        } else {
            None
        }
    }

    /// Insert `c` at the position and advance the column by one.
    pub fn insert_char(&mut self, pos: &mut Position, c: char) -> bool {
        let Some(line) = self.lines.get_mut(pos.line) else {
            return false;
        };
        let at = byte_offset(&line.text, pos.col);
        line.text.insert(at, c);
        pos.col += 1;
        true
    }

    /// Delete the char before the position (backspace). At column 0 the current line is
    /// joined onto the previous one and the cursor lands on the join point. Returns false
    /// at the origin or when the position does not address an existing line.
    pub fn delete_char_before(&mut self, pos: &mut Position) -> bool {
        if pos.is_origin() || pos.line >= self.lines.len() {
            return false;
        }
        if pos.col == 0 {
            let current = self.lines.remove(pos.line);
            let prev = &mut self.lines[pos.line - 1];
            let join_col = prev.char_len();
            prev.text.push_str(&current.text);
            pos.line -= 1;
            pos.col = join_col;
            return true;
        }
        let line = &mut self.lines[pos.line];
        let start = byte_offset(&line.text, pos.col - 1);
        if start >= line.text.len() {
            return false;
        }
        line.text.remove(start);
        pos.col -= 1;
        true
    }

    /// Mutable access to every line, used by whole-buffer rewrites such as replace.
    pub fn lines_mut(&mut self) -> impl Iterator<Item = &mut Line> {
        self.lines.iter_mut()
    }

    /// Line texts with styles discarded, as handed to persistence.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }
}
