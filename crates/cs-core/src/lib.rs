//! Core content for Cloudsect: the kubectl command catalog and the story.
//!
//! Both are read-only tables built once per process. The progression and
//! encounter engine only ever queries them: the catalog by command name,
//! category or difficulty, and the story by chapter.

/// The kubectl command catalog.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Rewards granted by achievements and story events.
pub mod reward;
/// Story chapters, monsters and random story events.
pub mod story;

/// Re-export catalog types.
pub use catalog::{Catalog, CommandCategory, CommandInfo, MasteryReport};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export reward type.
pub use reward::Reward;
/// Re-export story types.
pub use story::{
    Chapter, EventChoice, EventKind, Monster, StoryChapter, StoryEvent, StoryProgress,
};
