//! Command vocabulary and dispatch for the line editor.
//!
//! `Action` is the boundary between raw user input and `EditorState`:
//! the interactive loop parses a line of input into an `Action` with
//! `CommandParser`, then hands it to `dispatcher::dispatch`. The editing
//! core itself never parses text.

use core_text::Style;
use std::path::PathBuf;

pub mod dispatcher;
pub mod io_ops;

pub use core_state::Direction;
pub use dispatcher::command_parser::{CommandParser, ParseError};
pub use dispatcher::{DispatchResult, dispatch};

/// A discrete editor command with validated primitive arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert a new line so it becomes line `position` (1-based).
    InsertLine {
        position: usize,
        text: String,
        style: Style,
    },
    /// Delete line `position` (1-based).
    DeleteLine(usize),
    Replace {
        search: String,
        replacement: String,
    },
    Undo,
    Redo,
    Move(Direction),
    InsertChar(char),
    /// Backspace at the cursor.
    DeleteChar,
    /// Write the buffer; `None` reuses the current file name.
    Save(Option<PathBuf>),
    /// Replace the buffer with a file's contents (history is erased).
    Load(PathBuf),
    Help,
    Quit,
}

/// Command summary shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  insert <n>[/biu] <text>   insert a line at n (styles: b=bold i=italic u=underline)
  delete <n>                delete line n
  replace /search/repl/     replace every occurrence (any delimiter)
  undo | redo
  move <up|down|left|right> (or w/a/s/d)
  char <c>                  insert a character at the cursor
  backspace                 delete the character before the cursor
  save [path] | open <path>
  help | quit";
