//! Line styling and cosmetic keyword markup.
//!
//! A rendered line is a sequence of `Span`s. Every span inherits the line's
//! style flags; keyword spans additionally get a green foreground. Keywords
//! match whole words only (word chars are alphanumerics and `_`), so `int`
//! is highlighted in `int x` but not in `print`.

use core_text::Style;
use crossterm::style::{Attribute, Color, ContentStyle, Stylize};

/// A run of text within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub keyword: bool,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into alternating plain and keyword spans.
pub fn keyword_spans<'a>(text: &'a str, keywords: &[String]) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut plain_start = 0usize;
    let mut chars = text.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if !is_word_char(c) {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }
        let word = &text[start..end];
        if !keywords.iter().any(|k| k == word) {
            continue;
        }
        if plain_start < start {
            spans.push(Span {
                text: &text[plain_start..start],
                keyword: false,
            });
        }
        spans.push(Span {
            text: word,
            keyword: true,
        });
        plain_start = end;
    }
    if plain_start < text.len() {
        spans.push(Span {
            text: &text[plain_start..],
            keyword: false,
        });
    }
    spans
}

/// Map line style flags onto a crossterm content style.
pub fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    for (flag, attr) in [
        (Style::BOLD, Attribute::Bold),
        (Style::ITALIC, Attribute::Italic),
        (Style::UNDERLINE, Attribute::Underlined),
    ] {
        if style.contains(flag) {
            content.attributes.set(attr);
        }
    }
    content
}

/// Render one span with escape codes.
pub fn paint(span: Span<'_>, style: Style) -> String {
    let base = content_style(style);
    let content = if span.keyword {
        base.apply(span.text).with(Color::Green).bold()
    } else {
        base.apply(span.text)
    };
    content.to_string()
}
