//! Command line parsing for the interactive loop.
//!
//! Converts one raw input line into an `Action`. Parsing is pure: no
//! editor state is consulted, and semantic validation (line ranges, empty
//! search terms) is left to `EditorState` so error reporting lives in one
//! place.
//!
//! Grammar (first word selects the command, short aliases in brackets):
//! * `insert [i] <n>[/<flags>] <text>` - flags from `b`, `i`, `u`
//! * `delete [d] <n>`
//! * `replace [r] <d>search<d>replacement[<d>]` - `<d>` is any char
//! * `undo [u, 4]`, `redo [y, 5]`, `backspace [x, 8]`, `quit [q, 10]`
//! * `move [m] <up|down|left|right|w|s|a|d>`
//! * `char [c] <c>` - exactly one char; `char  ` inserts a space
//! * `save [w, 9] [path]`, `open [o] <path>`, `help [h, ?]`
//!
//! The numeric aliases follow the menu numbering of the classic
//! menu-driven front end for commands that take no arguments.

use crate::{Action, Direction};
use core_text::Style;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing {argument} for {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid line number: {0}")]
    InvalidNumber(String),

    #[error("Invalid direction: {0} (use up/down/left/right or w/s/a/d)")]
    InvalidDirection(String),

    #[error("Invalid style flag: {0} (use b, i, u)")]
    InvalidStyle(char),

    #[error("Replace expects <d>search<d>replacement<d>")]
    MalformedReplace,

    #[error("Expected exactly one character, got {0:?}")]
    NotSingleChar(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> Result<Action, ParseError> {
        let line = raw.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Err(ParseError::Empty);
        }
        // `rest` keeps its inner whitespace; only the single separator after the command word is consumed.
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r),
            None => (trimmed, ""),
        };
        match word {
            "insert" | "i" => parse_insert(rest),
            "delete" | "d" => Ok(Action::DeleteLine(parse_number(
                rest.trim(),
                "delete",
            )?)),
            "replace" | "r" => parse_replace(rest),
            "undo" | "u" | "4" => Ok(Action::Undo),
            "redo" | "y" | "5" => Ok(Action::Redo),
            "backspace" | "x" | "8" => Ok(Action::DeleteChar),
            "quit" | "q" | "10" => Ok(Action::Quit),
            "help" | "h" | "?" => Ok(Action::Help),
            "move" | "m" => parse_direction(rest.trim()).map(Action::Move),
            "char" | "c" => parse_char(rest),
            "save" | "w" | "9" => {
                let path = rest.trim();
                Ok(Action::Save(
                    (!path.is_empty()).then(|| PathBuf::from(path)),
                ))
            }
            "open" | "o" => {
                let path = rest.trim();
                if path.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "open",
                        argument: "path",
                    });
                }
                Ok(Action::Load(PathBuf::from(path)))
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_number(token: &str, command: &'static str) -> Result<usize, ParseError> {
    if token.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            argument: "line number",
        });
    }
    token
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

fn parse_style(flags: &str) -> Result<Style, ParseError> {
    flags.chars().try_fold(Style::empty(), |acc, c| {
        let flag = match c.to_ascii_lowercase() {
            'b' => Style::BOLD,
            'i' => Style::ITALIC,
            'u' => Style::UNDERLINE,
            _ => return Err(ParseError::InvalidStyle(c)),
        };
        Ok(acc | flag)
    })
}

fn parse_insert(rest: &str) -> Result<Action, ParseError> {
    let rest = rest.trim_start();
    let (head, text) = match rest.split_once(char::is_whitespace) {
        Some((s, t)) => (s, t),
        None => (rest, ""),
    };
    let (number, flags) = head.split_once('/').unwrap_or((head, ""));
    Ok(Action::InsertLine {
        position: parse_number(number, "insert")?,
        text: text.to_string(),
        style: parse_style(flags)?,
    })
}

fn parse_replace(rest: &str) -> Result<Action, ParseError> {
    let body = rest.trim_start();
    let Some(delim) = body.chars().next() else {
        return Err(ParseError::MissingArgument {
            command: "replace",
            argument: "search text",
        });
    };
    let inner = &body[delim.len_utf8()..];
    let (search, tail) = inner
        .split_once(delim)
        .ok_or(ParseError::MalformedReplace)?;
    let replacement = tail.strip_suffix(delim).unwrap_or(tail);
    Ok(Action::Replace {
        search: search.to_string(),
        replacement: replacement.to_string(),
    })
}

fn parse_direction(token: &str) -> Result<Direction, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "up" | "w" => Ok(Direction::Up),
        "down" | "s" => Ok(Direction::Down),
        "left" | "a" => Ok(Direction::Left),
        "right" | "d" => Ok(Direction::Right),
        "" => Err(ParseError::MissingArgument {
            command: "move",
            argument: "direction",
        }),
        _ => Err(ParseError::InvalidDirection(token.to_string())),
    }
}

fn parse_char(rest: &str) -> Result<Action, ParseError> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Action::InsertChar(c)),
        (None, _) => Err(ParseError::MissingArgument {
            command: "char",
            argument: "character",
        }),
        _ => Err(ParseError::NotSingleChar(rest.to_string())),
    }
}
