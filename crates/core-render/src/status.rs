//! Status line composition.
//!
//! Format: `Cursor at line X, column Y` (1-based) followed, when known, by
//! `  [<name>][*]`. `*` appears only when the buffer is dirty.
//!
//! Composition is two-stage: `compose_status` yields ordered
//! `StatusSegment`s and `format_status` joins them. Tests pin the exact
//! string so the cursor report stays stable for scripted callers.

use core_text::Position;

/// Everything needed to render a status line.
pub struct StatusContext<'a> {
    pub cursor: Position,
    pub file_name: Option<&'a std::path::Path>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// 1-based cursor line & column for display.
    Position { line_1: usize, col_1: usize },
    /// Base file name (no directories).
    FileName(std::borrow::Cow<'a, str>),
    Dirty,
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut segments = vec![StatusSegment::Position {
        line_1: ctx.cursor.line + 1,
        col_1: ctx.cursor.col + 1,
    }];
    if let Some(name) = ctx.file_name.and_then(|p| p.file_name()) {
        segments.push(StatusSegment::FileName(name.to_string_lossy()));
    }
    if ctx.dirty {
        segments.push(StatusSegment::Dirty);
    }
    segments
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            StatusSegment::Position { line_1, col_1 } => {
                out.push_str(&format!("Cursor at line {line_1}, column {col_1}"));
            }
            StatusSegment::FileName(name) => {
                out.push_str("  [");
                out.push_str(name);
                out.push(']');
            }
            StatusSegment::Dirty => out.push('*'),
        }
    }
    out
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    format_status(&compose_status(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn position_is_one_based() {
        let ctx = StatusContext {
            cursor: Position::new(0, 0),
            file_name: None,
            dirty: false,
        };
        assert_eq!(build_status(&ctx), "Cursor at line 1, column 1");
    }

    #[test]
    fn file_name_and_dirty_marker() {
        let ctx = StatusContext {
            cursor: Position::new(2, 4),
            file_name: Some(Path::new("/tmp/dir/notes.txt")),
            dirty: true,
        };
        assert_eq!(
            build_status(&ctx),
            "Cursor at line 3, column 5  [notes.txt]*"
        );
    }

    #[test]
    fn dirty_without_name() {
        let ctx = StatusContext {
            cursor: Position::new(0, 3),
            file_name: None,
            dirty: true,
        };
        let segs = compose_status(&ctx);
        assert_eq!(segs.len(), 2);
        assert_eq!(format_status(&segs), "Cursor at line 1, column 4*");
    }
}
