//! Error types for the quiz engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Failures while obtaining the list of titles. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("word list {} not found", .path.display())]
    Missing { path: PathBuf },

    #[error("cannot read word list {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} contains no titles", .path.display())]
    Empty { path: PathBuf },

    /// An in-memory title list was empty.
    #[error("no titles to build a quiz from")]
    NoTitles,
}

/// Errors surfaced by a quiz session
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The player aborted (Ctrl+C or end of input).
    #[error("quiz interrupted")]
    Interrupted,

    #[error("no entry {index} in a quiz of {total}")]
    NoSuchEntry { index: usize, total: usize },

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode session report: {0}")]
    Report(#[from] serde_json::Error),
}
