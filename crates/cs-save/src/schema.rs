//! The on-disk save schema.
//!
//! `name`, `sect`, `level` and `experience` are required. Everything else
//! falls back to a default when absent, and corrupt values (an unknown
//! chapter, tier or achievement kind) are replaced with safe defaults and
//! logged rather than failing the load.

use std::collections::BTreeSet;

use cs_core::{Chapter, Reward};
use cs_progress::{Achievement, AchievementKind, CultivationTier, Profile, Sect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SaveError, SaveResult};

/// Fields a document must carry to count as a save.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "sect", "level", "experience"];

/// One saved achievement. The kind is kept as text so unknown kinds can
/// be dropped instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAchievement {
    /// Achievement id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Kind identifier, e.g. `"streak_success"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Threshold.
    #[serde(default)]
    pub condition: u32,
    /// Reward granted on unlock.
    #[serde(default)]
    pub reward: Reward,
    /// Whether it has been unlocked.
    #[serde(default)]
    pub unlocked: bool,
}

/// A profile as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Player name.
    pub name: String,
    /// Sect label.
    pub sect: String,
    /// Level.
    pub level: u32,
    /// Experience towards the next level.
    pub experience: u64,
    /// Cultivation tier name. Recomputed from the level on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultivation: Option<String>,
    /// Learned skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Ids of unlocked achievements.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Full achievement records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_objects: Option<Vec<SavedAchievement>>,
    /// Current chapter id.
    #[serde(default)]
    pub current_chapter: Option<String>,
    /// Mastered commands.
    #[serde(default)]
    pub kubectl_commands_mastered: Vec<String>,
    /// Completed challenge ids.
    #[serde(default)]
    pub challenges_completed: Vec<String>,
    /// Current streak.
    #[serde(default)]
    pub streak: u32,
    /// Correct answers.
    #[serde(default)]
    pub total_correct: u32,
    /// All answers.
    #[serde(default)]
    pub total_attempts: u32,
    /// Earned titles.
    #[serde(default)]
    pub custom_titles: Vec<String>,
    /// Sect multiplier at save time. Recomputed from the sect on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sect_bonus: Option<f64>,
    /// Wrongly chosen commands.
    #[serde(default)]
    pub wrong_commands: Vec<String>,
    /// Current health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<u32>,
    /// Maximum health.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_health: Option<u32>,
    /// Attack strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    /// Defense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
}

impl SaveFile {
    /// Parse a save document, checking the required fields first.
    pub fn from_json(text: &str) -> SaveResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        check_required(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> SaveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture a profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            sect: profile.sect().label().to_string(),
            level: profile.level(),
            experience: profile.experience(),
            cultivation: Some(profile.tier().name().to_string()),
            skills: profile.skills.clone(),
            achievements: profile
                .unlocked_achievement_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            achievement_objects: Some(
                profile
                    .achievements
                    .iter()
                    .map(|a| SavedAchievement {
                        id: a.id.clone(),
                        name: a.name.clone(),
                        description: a.description.clone(),
                        kind: a.kind.key().to_string(),
                        condition: a.condition,
                        reward: a.reward.clone(),
                        unlocked: a.unlocked,
                    })
                    .collect(),
            ),
            current_chapter: Some(profile.current_chapter.id().to_string()),
            kubectl_commands_mastered: profile.mastered_commands.iter().cloned().collect(),
            challenges_completed: profile.challenges_completed.iter().cloned().collect(),
            streak: profile.streak,
            total_correct: profile.total_correct,
            total_attempts: profile.total_attempts,
            custom_titles: profile.custom_titles.clone(),
            sect_bonus: Some(profile.sect_bonus()),
            wrong_commands: profile.wrong_commands.clone(),
            health: Some(profile.health),
            max_health: Some(profile.max_health),
            attack: Some(profile.attack),
            defense: Some(profile.defense),
        }
    }

    /// Rebuild the profile. Fails only on an unknown sect.
    pub fn into_profile(self) -> SaveResult<Profile> {
        let sect: Sect = self.sect.parse()?;
        let mut profile = Profile::new(self.name, sect);
        profile.restore_level(self.level, self.experience);

        if let Some(label) = &self.cultivation {
            match label.parse::<CultivationTier>() {
                Ok(tier) if tier != profile.tier() => log::debug!(
                    "saved tier {tier} disagrees with level {}, using {}",
                    profile.level(),
                    profile.tier()
                ),
                Ok(_) => {}
                Err(e) => log::warn!("{e}, deriving tier from level"),
            }
        }

        profile.current_chapter = match self.current_chapter.as_deref() {
            None => Chapter::Prologue,
            Some(id) => Chapter::from_id(id).unwrap_or_else(|| {
                log::warn!("unknown chapter \"{id}\" in save, starting from the prologue");
                Chapter::Prologue
            }),
        };

        let unlocked: BTreeSet<String> = self.achievements.into_iter().collect();
        profile.achievements = match self.achievement_objects {
            Some(saved) => restore_achievements(saved, &unlocked),
            None => {
                let mut achievements = std::mem::take(&mut profile.achievements);
                for a in &mut achievements {
                    a.unlocked = unlocked.contains(&a.id);
                }
                achievements
            }
        };

        profile.skills = self.skills;
        profile.mastered_commands = self.kubectl_commands_mastered.into_iter().collect();
        profile.challenges_completed = self.challenges_completed.into_iter().collect();
        profile.wrong_commands = self.wrong_commands;
        profile.streak = self.streak;
        profile.total_correct = self.total_correct;
        profile.total_attempts = self.total_attempts.max(self.total_correct);
        profile.custom_titles = self.custom_titles;

        if let Some(max_health) = self.max_health {
            profile.max_health = max_health.max(1);
        }
        profile.health = self.health.unwrap_or(profile.max_health).min(profile.max_health);
        if let Some(attack) = self.attack {
            profile.attack = attack;
        }
        if let Some(defense) = self.defense {
            profile.defense = defense;
        }
        Ok(profile)
    }
}

/// Check that a JSON document carries every required field.
pub fn check_required(value: &Value) -> SaveResult<()> {
    for field in REQUIRED_FIELDS {
        if value.get(field).is_none_or(Value::is_null) {
            return Err(SaveError::MissingField(field));
        }
    }
    Ok(())
}

fn restore_achievements(
    saved: Vec<SavedAchievement>,
    unlocked_ids: &BTreeSet<String>,
) -> Vec<Achievement> {
    let mut restored: Vec<Achievement> = saved
        .into_iter()
        .filter_map(|s| match s.kind.parse::<AchievementKind>() {
            Ok(kind) => Some(Achievement {
                unlocked: s.unlocked || unlocked_ids.contains(&s.id),
                id: s.id,
                name: s.name,
                description: s.description,
                kind,
                condition: s.condition,
                reward: s.reward,
            }),
            Err(e) => {
                log::warn!("dropping achievement \"{}\": {e}", s.id);
                None
            }
        })
        .collect();

    for mut missing in Achievement::predefined(cs_core::Catalog::builtin().len()) {
        if !restored.iter().any(|a| a.id == missing.id) {
            missing.unlocked = unlocked_ids.contains(&missing.id);
            restored.push(missing);
        }
    }
    restored
}
