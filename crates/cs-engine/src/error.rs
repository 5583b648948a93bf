//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a session.
///
/// Wrong or out-of-range answers are not errors; they come back as
/// unsuccessful results.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The operation needs something the session does not have yet.
    #[error("not ready: {0}")]
    NotReady(&'static str),

    /// An argument outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A challenge was requested from an empty command pool.
    #[error("no commands available for a challenge")]
    NoCommandsAvailable,

    /// A command name is not in the catalog.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A combat action was attempted with no fight underway.
    #[error("no combat in progress")]
    NoActiveCombat,

    /// A new fight was started while another is underway.
    #[error("already fighting {0}")]
    CombatInProgress(String),

    /// Content lookup error.
    #[error("{0}")]
    Core(#[from] cs_core::CoreError),

    /// Progression error.
    #[error("{0}")]
    Progress(#[from] cs_progress::ProgressError),

    /// Persistence error.
    #[error("{0}")]
    Save(#[from] cs_save::SaveError),
}
