//! Display layer: turns editor state into a text frame.
//!
//! The frame is one row per document line (`"{n}: {text}"` with 1-based
//! numbers when enabled), a blank separator row, then the status line from
//! `status`. Style flags and keyword markup are emitted as ANSI escape codes
//! only when `RenderConfig::ansi` is set; plain frames contain the raw text
//! and are what tests and non-terminal outputs use.
//!
//! Rendering is read-only over `EditorState`; nothing here mutates the
//! buffer or the cursor.

pub mod status;
pub mod style;

use core_config::RenderConfig;
use core_state::EditorState;
use core_text::Line;
use status::{StatusContext, build_status};
use style::{Span, keyword_spans, paint};

/// Row shown in place of the listing when the document has no lines.
pub const EMPTY_DOCUMENT_ROW: &str = "(empty document)";

/// Render a single line's text (without the number prefix).
pub fn render_line(line: &Line, cfg: &RenderConfig) -> String {
    if !cfg.ansi {
        return line.text.clone();
    }
    let spans = if cfg.highlight_keywords {
        keyword_spans(&line.text, &cfg.keywords)
    } else {
        vec![Span {
            text: &line.text,
            keyword: false,
        }]
    };
    spans.into_iter().map(|s| paint(s, line.style)).collect()
}

/// Render the document listing (no status line).
pub fn render_lines(state: &EditorState, cfg: &RenderConfig) -> Vec<String> {
    let buffer = state.buffer();
    if buffer.is_empty() {
        return vec![EMPTY_DOCUMENT_ROW.to_string()];
    }
    buffer
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let body = render_line(line, cfg);
            if cfg.line_numbers {
                format!("{}: {}", i + 1, body)
            } else {
                body
            }
        })
        .collect()
}

/// Render the full frame: listing, blank row, status line. Rows end with `\n`.
pub fn render(state: &EditorState, cfg: &RenderConfig) -> String {
    let rows = render_lines(state, cfg);
    let status = build_status(&StatusContext {
        cursor: state.cursor(),
        file_name: state.file_name.as_deref(),
        dirty: state.dirty,
    });
    tracing::trace!(target: "render", rows = rows.len(), ansi = cfg.ansi, "frame");
    let mut out = String::new();
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&status);
    out.push('\n');
    out
}
