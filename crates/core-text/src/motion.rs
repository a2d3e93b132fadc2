//! Cursor motion helpers.
//!
//! These operate purely on a `Buffer` + `Position` pair and never touch
//! history. All of them assume a non-empty buffer and a position that
//! addresses an existing line; callers guard both.

use crate::{Buffer, Position};

/// Move up one line (floor 0), clamping the column to the new line's length.
pub fn up(buf: &Buffer, pos: &mut Position) {
    pos.line = pos.line.saturating_sub(1);
    pos.col = pos.col.min(buf.line_char_len(pos.line));
}

/// Move down one line (ceiling = last line), clamping the column.
pub fn down(buf: &Buffer, pos: &mut Position) {
    if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        pos.col = pos.col.min(buf.line_char_len(pos.line));
    }
}

/// Move left one char; at column 0 wrap to the end of the previous line.
pub fn left(buf: &Buffer, pos: &mut Position) {
    if pos.col > 0 {
        pos.col -= 1;
    } else if pos.line > 0 {
        pos.line -= 1;
        pos.col = buf.line_char_len(pos.line);
    }
}

/// Move right one char; at end of line wrap to column 0 of the next line.
pub fn right(buf: &Buffer, pos: &mut Position) {
    if pos.col < buf.line_char_len(pos.line) {
        pos.col += 1;
    } else if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        pos.col = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf() -> Buffer {
        Buffer::from_lines("t", ["hello", "hi", "", "world!"])
    }

    #[test]
    fn up_clamps_column() {
        let b = Buffer::from_lines("t", ["ab", "abcdef"]);
        let mut p = Position::new(1, 5);
        up(&b, &mut p);
        assert_eq!(p, Position::new(0, 2));
        up(&b, &mut p);
        assert_eq!(p, Position::new(0, 2), "floor at first line");
    }

    #[test]
    fn down_clamps_and_stops_at_last_line() {
        let b = buf();
        let mut p = Position::new(0, 4);
        down(&b, &mut p);
        assert_eq!(p, Position::new(1, 2));
        down(&b, &mut p);
        assert_eq!(p, Position::new(2, 0));
        down(&b, &mut p);
        down(&b, &mut p);
        assert_eq!(p, Position::new(3, 0));
    }

    #[test]
    fn left_wraps_to_previous_line_end() {
        let b = buf();
        let mut p = Position::new(1, 0);
        left(&b, &mut p);
        assert_eq!(p, Position::new(0, 5));
        let mut origin = Position::origin();
        left(&b, &mut origin);
        assert_eq!(origin, Position::origin());
    }

    #[test]
    fn right_wraps_to_next_line_start() {
        let b = buf();
        let mut p = Position::new(0, 5);
        right(&b, &mut p);
        assert_eq!(p, Position::new(1, 0));
        let mut end = Position::new(3, 6);
        right(&b, &mut end);
        assert_eq!(end, Position::new(3, 6), "no wrap past last line");
    }

    #[test]
    fn right_counts_chars_not_bytes() {
        let b = Buffer::from_lines("t", ["é"]);
        let mut p = Position::origin();
        right(&b, &mut p);
        assert_eq!(p.col, 1);
        right(&b, &mut p);
        assert_eq!(p.col, 1);
    }
}
