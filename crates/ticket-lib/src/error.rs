//! Error types for `ticket-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for ticket operations.
#[derive(Error, Debug)]
pub enum TicketError {
    /// No ticket matches the given identifier.
    #[error("ticket '{id}' not found")]
    NotFound { id: String },

    /// The identifier matches more than one ticket.
    #[error("ambiguous ID '{id}' matches multiple tickets")]
    Ambiguous { id: String },

    /// The store directory cannot be opened.
    #[error("cannot open tickets directory: {}", path.display())]
    UnreadableStore { path: PathBuf },

    /// A ticket file cannot be opened or read.
    #[error("cannot read ticket file: {}", path.display())]
    UnreadableFile { path: PathBuf },

    /// The temp file could not be written or the atomic rename failed.
    #[error("cannot update ticket file: {}", path.display())]
    WriteFailed { path: PathBuf },

    /// The named dependency edge does not exist.
    #[error("dependency not found: {id}")]
    DependencyNotFound { id: String },

    /// The named link edge does not exist.
    #[error("link not found: {id}")]
    LinkNotFound { id: String },

    /// A CLI argument is missing or malformed.
    #[error("invalid argument: {reason}")]
    BadArgument { reason: String },

    /// An external collaborator process failed to run or exited nonzero.
    #[error("{name} exited with failure")]
    Subprocess { name: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TicketError>;
