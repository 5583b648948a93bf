//! Error types for progression operations.

/// Alias for `Result<T, ProgressError>`.
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Errors raised by progression operations.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Experience amounts must not be negative.
    #[error("experience amount must not be negative, got {0}")]
    NegativeExperience(i64),

    /// A sect label did not match any sect.
    #[error("unknown sect: \"{0}\"")]
    UnknownSect(String),

    /// A tier label did not match any cultivation tier.
    #[error("unknown cultivation tier: \"{0}\"")]
    UnknownTier(String),

    /// An achievement kind label was not recognised.
    #[error("unknown achievement kind: \"{0}\"")]
    UnknownAchievementKind(String),
}
