//! Rewards granted by achievements and story events.

use serde::{Deserialize, Serialize};

/// Experience and/or a title granted to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Experience points, before the sect multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    /// A custom title appended to the player's title list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Reward {
    /// A reward of experience only.
    pub fn experience(amount: u32) -> Self {
        Self {
            experience: Some(amount),
            title: None,
        }
    }

    /// Add a title to the reward.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the reward grants nothing.
    pub fn is_empty(&self) -> bool {
        self.experience.is_none() && self.title.is_none()
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.experience, &self.title) {
            (Some(exp), Some(title)) => write!(f, "{exp} exp, title \"{title}\""),
            (Some(exp), None) => write!(f, "{exp} exp"),
            (None, Some(title)) => write!(f, "title \"{title}\""),
            (None, None) => write!(f, "nothing"),
        }
    }
}
