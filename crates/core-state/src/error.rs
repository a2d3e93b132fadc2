use thiserror::Error;

/// Recoverable editing failures. Every variant is raised before any snapshot
/// is taken, so a failed operation leaves buffer, cursor and history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Invalid line number {position} (document has {line_count} lines)")]
    InvalidPosition { position: usize, line_count: usize },

    #[error("Nothing to delete")]
    NothingToDelete,

    #[error("Search text cannot be empty")]
    EmptySearchTerm,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Document is empty")]
    EmptyDocument,

    #[error("Cursor at line {line}, column {col} is outside the document")]
    CursorOutOfRange { line: usize, col: usize },
}

/// Result alias for editing operations.
pub type EditResult<T> = Result<T, EditError>;
