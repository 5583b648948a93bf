//! Story chapters and encounter content.
//!
//! The story is a fixed, ordered list of chapters. Each chapter scopes the
//! pool of commands its challenges are drawn from. Chapter identity is an
//! enum with an explicit ordinal, so progress checks never parse names.

mod bestiary;
mod chapters;

pub use bestiary::{EventChoice, EventKind, Monster, StoryEvent};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::percentage;
use crate::error::{CoreError, CoreResult};

/// A chapter of the story, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Chapter {
    /// Entering the sect.
    #[default]
    #[serde(rename = "prologue")]
    Prologue,
    /// Container basics.
    #[serde(rename = "chapter_1")]
    Chapter1,
    /// Deployments.
    #[serde(rename = "chapter_2")]
    Chapter2,
    /// Services.
    #[serde(rename = "chapter_3")]
    Chapter3,
    /// Configuration.
    #[serde(rename = "chapter_4")]
    Chapter4,
    /// Storage.
    #[serde(rename = "chapter_5")]
    Chapter5,
    /// Nodes and resources.
    #[serde(rename = "chapter_6")]
    Chapter6,
    /// Troubleshooting.
    #[serde(rename = "chapter_7")]
    Chapter7,
    /// Networking and security.
    #[serde(rename = "chapter_8")]
    Chapter8,
    /// Cluster management.
    #[serde(rename = "chapter_9")]
    Chapter9,
    /// Advanced operations.
    #[serde(rename = "chapter_10")]
    Chapter10,
    /// Identity and access.
    #[serde(rename = "chapter_11")]
    Chapter11,
    /// Ascension.
    #[serde(rename = "epilogue")]
    Epilogue,
}

impl Chapter {
    /// All chapters in reading order.
    pub const ALL: [Chapter; 13] = [
        Self::Prologue,
        Self::Chapter1,
        Self::Chapter2,
        Self::Chapter3,
        Self::Chapter4,
        Self::Chapter5,
        Self::Chapter6,
        Self::Chapter7,
        Self::Chapter8,
        Self::Chapter9,
        Self::Chapter10,
        Self::Chapter11,
        Self::Epilogue,
    ];

    /// Position in the story: the prologue is 0, chapter N is N, the
    /// epilogue follows the last numbered chapter.
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Stable identifier used in save files (e.g. `"chapter_3"`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Prologue => "prologue",
            Self::Chapter1 => "chapter_1",
            Self::Chapter2 => "chapter_2",
            Self::Chapter3 => "chapter_3",
            Self::Chapter4 => "chapter_4",
            Self::Chapter5 => "chapter_5",
            Self::Chapter6 => "chapter_6",
            Self::Chapter7 => "chapter_7",
            Self::Chapter8 => "chapter_8",
            Self::Chapter9 => "chapter_9",
            Self::Chapter10 => "chapter_10",
            Self::Chapter11 => "chapter_11",
            Self::Epilogue => "epilogue",
        }
    }

    /// Look up a chapter by identifier.
    pub fn from_id(id: &str) -> Option<Chapter> {
        Self::ALL.into_iter().find(|c| c.id() == id.trim())
    }

    /// The chapter with the given ordinal.
    pub fn from_ordinal(ordinal: u32) -> Option<Chapter> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// The following chapter, or `None` at the epilogue.
    pub fn next(self) -> Option<Chapter> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Challenge difficulty for this chapter: one more than the ordinal,
    /// capped at 10.
    pub fn challenge_difficulty(self) -> u32 {
        (self.ordinal() + 1).min(10)
    }

    /// The static content of this chapter.
    pub fn content(self) -> &'static StoryChapter {
        &chapters::CHAPTERS[self as usize]
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content().title)
    }
}

impl FromStr for Chapter {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_id(s).ok_or_else(|| CoreError::UnknownChapter(s.to_string()))
    }
}

/// Static content of one chapter.
#[derive(Debug)]
pub struct StoryChapter {
    /// Which chapter this is.
    pub chapter: Chapter,
    /// Chapter title.
    pub title: &'static str,
    /// Opening paragraph.
    pub introduction: &'static str,
    /// Kubernetes concepts taught in the chapter.
    pub concepts: &'static [&'static str],
    /// The command pool challenges in this chapter draw from.
    pub commands: &'static [&'static str],
    /// Experience awarded per correctly answered challenge.
    pub reward_exp: u32,
}

impl StoryChapter {
    /// The command pool as owned strings.
    pub fn command_pool(&self) -> Vec<String> {
        self.commands.iter().map(|c| (*c).to_string()).collect()
    }
}

/// How far through the story a player is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoryProgress {
    /// The current chapter.
    pub chapter: Chapter,
    /// Its ordinal.
    pub ordinal: u32,
    /// Number of chapters in the story.
    pub total: u32,
    /// Share of the story completed, as a percentage.
    pub percentage: f64,
}

impl StoryProgress {
    /// Progress for a player currently reading `chapter`.
    pub fn at(chapter: Chapter) -> Self {
        let total = Chapter::ALL.len() as u32;
        Self {
            chapter,
            ordinal: chapter.ordinal(),
            total,
            percentage: percentage(chapter.ordinal() as usize, (total - 1) as usize),
        }
    }
}
