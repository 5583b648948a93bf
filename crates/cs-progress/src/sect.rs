//! The four sects a player can join.
//!
//! The sect is chosen once at profile creation and fixes a permanent
//! multiplier on every experience gain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};

/// A sect, fixing the player's experience multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sect {
    /// Orthodox sect with solid fundamentals.
    #[serde(rename = "Azure Cloud", alias = "青云宗")]
    AzureCloud,
    /// Neutral sect, versatile.
    #[serde(rename = "Mystic Heaven", alias = "玄天宗")]
    MysticHeaven,
    /// Unorthodox sect with explosive strength.
    #[serde(rename = "Purgatory Gate", alias = "炼狱门")]
    PurgatoryGate,
    /// Wandering cultivators, quick to adapt.
    #[serde(rename = "Carefree Valley", alias = "逍遥派")]
    CarefreeValley,
}

impl Sect {
    /// All sects in menu order.
    pub const ALL: [Sect; 4] = [
        Self::AzureCloud,
        Self::MysticHeaven,
        Self::PurgatoryGate,
        Self::CarefreeValley,
    ];

    /// Display label, also used in save files.
    pub fn label(self) -> &'static str {
        match self {
            Self::AzureCloud => "Azure Cloud",
            Self::MysticHeaven => "Mystic Heaven",
            Self::PurgatoryGate => "Purgatory Gate",
            Self::CarefreeValley => "Carefree Valley",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Self::AzureCloud => "青云宗",
            Self::MysticHeaven => "玄天宗",
            Self::PurgatoryGate => "炼狱门",
            Self::CarefreeValley => "逍遥派",
        }
    }

    /// Short key for command lines (`azure`, `mystic`, `purgatory`, `carefree`).
    pub fn key(self) -> &'static str {
        match self {
            Self::AzureCloud => "azure",
            Self::MysticHeaven => "mystic",
            Self::PurgatoryGate => "purgatory",
            Self::CarefreeValley => "carefree",
        }
    }

    /// Experience multiplier applied to every gain.
    pub fn bonus(self) -> f64 {
        match self {
            Self::AzureCloud => 1.10,
            Self::MysticHeaven => 1.00,
            Self::PurgatoryGate => 1.20,
            Self::CarefreeValley => 1.15,
        }
    }
}

impl std::fmt::Display for Sect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sect {
    type Err = ProgressError;

    /// Accepts the label, the short key or the historical label.
    fn from_str(s: &str) -> ProgressResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|sect| {
                sect.label().eq_ignore_ascii_case(s)
                    || sect.key().eq_ignore_ascii_case(s)
                    || sect.alias() == s
            })
            .ok_or_else(|| ProgressError::UnknownSect(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonuses() {
        assert_eq!(Sect::AzureCloud.bonus(), 1.10);
        assert_eq!(Sect::MysticHeaven.bonus(), 1.00);
        assert_eq!(Sect::PurgatoryGate.bonus(), 1.20);
        assert_eq!(Sect::CarefreeValley.bonus(), 1.15);
    }

    #[test]
    fn parse_accepts_labels_keys_and_aliases() {
        assert_eq!("Azure Cloud".parse::<Sect>().unwrap(), Sect::AzureCloud);
        assert_eq!("purgatory".parse::<Sect>().unwrap(), Sect::PurgatoryGate);
        assert_eq!("逍遥派".parse::<Sect>().unwrap(), Sect::CarefreeValley);
        assert!(matches!(
            "Shadow Lotus".parse::<Sect>(),
            Err(ProgressError::UnknownSect(_))
        ));
    }

    #[test]
    fn serde_uses_label_and_accepts_alias() {
        assert_eq!(
            serde_json::to_string(&Sect::MysticHeaven).unwrap(),
            "\"Mystic Heaven\""
        );
        let sect: Sect = serde_json::from_str("\"玄天宗\"").unwrap();
        assert_eq!(sect, Sect::MysticHeaven);
    }
}
