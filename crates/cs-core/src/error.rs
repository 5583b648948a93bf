/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when querying content tables.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A difficulty filter outside 1..=5 was requested.
    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),

    /// A category label did not match any known category.
    #[error("unknown command category: \"{0}\"")]
    UnknownCategory(String),

    /// A chapter identifier did not match any known chapter.
    #[error("unknown chapter: \"{0}\"")]
    UnknownChapter(String),

    /// No monster template with the given name exists.
    #[error("unknown monster: \"{0}\"")]
    UnknownMonster(String),
}
