//! Cultivation tiers.
//!
//! Ten tiers, each covering ten levels. A tier of rank `r` starts at level
//! `r * 10 - 9`; levels beyond the last floor stay in the highest tier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};

/// A cultivation tier, derived from the player's level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum CultivationTier {
    /// Levels 1-10.
    #[default]
    #[serde(alias = "凡人")]
    Mortal,
    /// Levels 11-20.
    #[serde(alias = "练气期")]
    QiRefining,
    /// Levels 21-30.
    #[serde(alias = "筑基期")]
    FoundationBuilding,
    /// Levels 31-40.
    #[serde(alias = "金丹期")]
    GoldenCore,
    /// Levels 41-50.
    #[serde(alias = "元婴期")]
    NascentSoul,
    /// Levels 51-60.
    #[serde(alias = "化神期")]
    DeityTransformation,
    /// Levels 61-70.
    #[serde(alias = "大乘期")]
    GreatVehicle,
    /// Levels 71-80.
    #[serde(alias = "渡劫期")]
    Tribulation,
    /// Levels 81-90.
    #[serde(alias = "散仙")]
    LooseImmortal,
    /// Levels 91 and above.
    #[serde(alias = "金仙")]
    GoldenImmortal,
}

impl CultivationTier {
    /// All tiers, lowest first.
    pub const ALL: [CultivationTier; 10] = [
        Self::Mortal,
        Self::QiRefining,
        Self::FoundationBuilding,
        Self::GoldenCore,
        Self::NascentSoul,
        Self::DeityTransformation,
        Self::GreatVehicle,
        Self::Tribulation,
        Self::LooseImmortal,
        Self::GoldenImmortal,
    ];

    /// Rank from 1 (Mortal) to 10 (Golden Immortal).
    pub fn rank(self) -> u32 {
        self as u32 + 1
    }

    /// Lowest level belonging to this tier.
    pub fn level_floor(self) -> u32 {
        self.rank() * 10 - 9
    }

    /// The tier for `level`: the highest tier whose floor does not exceed it.
    pub fn for_level(level: u32) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|tier| tier.level_floor() <= level)
            .unwrap_or_default()
    }

    /// Tier name, as stored in save files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mortal => "Mortal",
            Self::QiRefining => "QiRefining",
            Self::FoundationBuilding => "FoundationBuilding",
            Self::GoldenCore => "GoldenCore",
            Self::NascentSoul => "NascentSoul",
            Self::DeityTransformation => "DeityTransformation",
            Self::GreatVehicle => "GreatVehicle",
            Self::Tribulation => "Tribulation",
            Self::LooseImmortal => "LooseImmortal",
            Self::GoldenImmortal => "GoldenImmortal",
        }
    }

    /// Epithet used in the player's title.
    pub fn epithet(self) -> &'static str {
        match self {
            Self::Mortal => "Mortal Frame",
            Self::QiRefining => "First Breath",
            Self::FoundationBuilding => "Firm Foundation",
            Self::GoldenCore => "Golden Path",
            Self::NascentSoul => "Newborn Soul",
            Self::DeityTransformation => "Ascendant Spirit",
            Self::GreatVehicle => "Perfect Vehicle",
            Self::Tribulation => "Storm Crosser",
            Self::LooseImmortal => "Free Wanderer",
            Self::GoldenImmortal => "Undying Gold",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            Self::Mortal => "凡人",
            Self::QiRefining => "练气期",
            Self::FoundationBuilding => "筑基期",
            Self::GoldenCore => "金丹期",
            Self::NascentSoul => "元婴期",
            Self::DeityTransformation => "化神期",
            Self::GreatVehicle => "大乘期",
            Self::Tribulation => "渡劫期",
            Self::LooseImmortal => "散仙",
            Self::GoldenImmortal => "金仙",
        }
    }
}

impl std::fmt::Display for CultivationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CultivationTier {
    type Err = ProgressError;

    fn from_str(s: &str) -> ProgressResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s) || tier.alias() == s)
            .ok_or_else(|| ProgressError::UnknownTier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors() {
        assert_eq!(CultivationTier::Mortal.level_floor(), 1);
        assert_eq!(CultivationTier::QiRefining.level_floor(), 11);
        assert_eq!(CultivationTier::GoldenImmortal.level_floor(), 91);
    }

    #[test]
    fn for_level_boundaries() {
        assert_eq!(CultivationTier::for_level(1), CultivationTier::Mortal);
        assert_eq!(CultivationTier::for_level(10), CultivationTier::Mortal);
        assert_eq!(CultivationTier::for_level(11), CultivationTier::QiRefining);
        assert_eq!(CultivationTier::for_level(35), CultivationTier::GoldenCore);
        assert_eq!(CultivationTier::for_level(500), CultivationTier::GoldenImmortal);
        assert_eq!(CultivationTier::for_level(0), CultivationTier::Mortal);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!(
            "GoldenCore".parse::<CultivationTier>().unwrap(),
            CultivationTier::GoldenCore
        );
        assert_eq!("凡人".parse::<CultivationTier>().unwrap(), CultivationTier::Mortal);
        assert!("Demigod".parse::<CultivationTier>().is_err());
    }
}
