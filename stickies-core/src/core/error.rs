//! Error types for the Stickies core library.

use thiserror::Error;

/// All errors that can occur within the Stickies core library.
#[derive(Debug, Error)]
pub enum StickiesError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The opened file or directory is not a usable notes store.
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The note collection could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`StickiesError`].
pub type Result<T> = std::result::Result<T, StickiesError>;

impl StickiesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::InvalidStore(_) => "Could not open the notes store".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
