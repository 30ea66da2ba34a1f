//! Error types for style database access.
//!
//! Distinguishes failures to open a file, failures of the fixed item query,
//! and rows whose contents cannot be decoded.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a style database.
#[derive(Debug, Error)]
pub enum StylxError {
    /// The file is missing, unreadable, or not a SQLite database.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// The `Items` table or one of its expected columns is absent.
    #[error("query error: {0}")]
    Query(#[source] rusqlite::Error),

    /// A row could not be turned into an item (malformed content JSON,
    /// NULL id, class or name, non-UTF-8 text).
    #[error("failed to decode item '{id}': {reason}")]
    Decode { id: String, reason: String },

    /// Any other SQLite failure while stepping rows or closing.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`StylxError`].
pub type Result<T> = std::result::Result<T, StylxError>;
