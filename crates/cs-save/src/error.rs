//! Error types for persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that can occur reading or writing save files.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Filesystem failure.
    #[error("{path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the schema.
    #[error("malformed save: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent.
    #[error("save is missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A save name that is empty or contains a path separator.
    #[error("invalid save name: \"{0}\"")]
    InvalidName(String),

    /// The destination of a rename already exists.
    #[error("save already exists: {0}")]
    AlreadyExists(String),

    /// The source of a rename does not exist.
    #[error("save not found: {0}")]
    NotFound(String),

    /// The saved data holds an invalid value, such as an unknown sect.
    #[error("{0}")]
    Progress(#[from] cs_progress::ProgressError),
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
