//! The Cloudsect progression and encounter engine.
//!
//! A [`GameSession`] owns one player profile and drives it through
//! multiple-choice challenges, story events and monster fights. All
//! randomness flows through a single [`RandomSource`], so a seeded session
//! replays identically and tests can script every draw.

/// Multiple-choice challenge generation.
pub mod challenge;
/// Turn-based combat against a monster.
pub mod combat;
/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Answer evaluation, streaks and session score.
pub mod evaluator;
/// The random source seam.
pub mod random;
/// Session orchestration.
pub mod session;

pub use challenge::{Challenge, generate};
pub use combat::{Combat, CombatEvent, CombatReport, CombatState};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use evaluator::{EvaluationResult, Scoreboard, evaluate, streak_bonus};
pub use random::{RandomSource, ScriptedRandom};
pub use session::{EventOutcome, GameSession, ProgressReport};
