//! Player progression for Cloudsect.
//!
//! A [`Profile`] holds everything a player accumulates: level, experience,
//! cultivation tier, mastered commands, streaks, achievements and combat
//! stats. Leveling and achievement evaluation are pure functions over the
//! profile; nothing in this crate performs I/O or draws random numbers.

/// Achievement definitions and the unlock engine.
pub mod achievements;
/// Error types for progression operations.
pub mod error;
/// Experience thresholds and level-up resolution.
pub mod leveling;
/// The player profile.
pub mod profile;
/// Sects and their experience multipliers.
pub mod sect;
/// Cultivation tiers derived from level.
pub mod tier;

pub use achievements::{Achievement, AchievementKind, AchievementProgress, KindProgress};
pub use error::{ProgressError, ProgressResult};
pub use leveling::required_exp;
pub use profile::Profile;
pub use sect::Sect;
pub use tier::CultivationTier;
