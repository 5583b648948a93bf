//! Achievements and the unlock engine.
//!
//! Every profile starts with the same fixed set of achievements. Each one
//! unlocks at most once: [`check_and_unlock`] skips anything already
//! unlocked, so rewards are never granted twice.

use std::str::FromStr;

use cs_core::catalog::percentage;
use cs_core::Reward;
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};
use crate::profile::Profile;

/// What an achievement measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Number of mastered commands.
    CommandMastery,
    /// Ordinal of the current story chapter.
    StoryProgress,
    /// Number of completed challenges.
    ChallengeCompletion,
    /// Current streak of correct answers.
    StreakSuccess,
    /// Reserved for sect-specific goals; never met.
    SectSpecialization,
}

impl AchievementKind {
    /// All kinds.
    pub const ALL: [AchievementKind; 5] = [
        Self::CommandMastery,
        Self::StoryProgress,
        Self::ChallengeCompletion,
        Self::StreakSuccess,
        Self::SectSpecialization,
    ];

    /// Identifier used in save files.
    pub fn key(self) -> &'static str {
        match self {
            Self::CommandMastery => "command_mastery",
            Self::StoryProgress => "story_progress",
            Self::ChallengeCompletion => "challenge_completion",
            Self::StreakSuccess => "streak_success",
            Self::SectSpecialization => "sect_specialization",
        }
    }

    /// Whether `profile` reaches `condition` for this kind.
    pub fn is_met(self, condition: u32, profile: &Profile) -> bool {
        let condition = condition as usize;
        match self {
            Self::CommandMastery => profile.mastered_commands.len() >= condition,
            Self::StoryProgress => profile.current_chapter.ordinal() as usize >= condition,
            Self::ChallengeCompletion => profile.challenges_completed.len() >= condition,
            Self::StreakSuccess => profile.streak as usize >= condition,
            Self::SectSpecialization => false,
        }
    }
}

impl std::fmt::Display for AchievementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AchievementKind {
    type Err = ProgressError;

    fn from_str(s: &str) -> ProgressResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s.trim())
            .ok_or_else(|| ProgressError::UnknownAchievementKind(s.to_string()))
    }
}

/// A goal with a one-time reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What it takes.
    pub description: String,
    /// What is measured.
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    /// Threshold to reach.
    pub condition: u32,
    /// Granted on unlock.
    pub reward: Reward,
    /// Set once, never cleared.
    pub unlocked: bool,
}

impl Achievement {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        kind: AchievementKind,
        condition: u32,
        reward: Reward,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind,
            condition,
            reward,
            unlocked: false,
        }
    }

    /// The fixed achievement set every profile starts with, all locked.
    ///
    /// `catalog_size` is the threshold of the "master every command"
    /// achievement.
    #[rustfmt::skip]
    pub fn predefined(catalog_size: usize) -> Vec<Achievement> {
        use AchievementKind::*;
        let all = u32::try_from(catalog_size).unwrap_or(u32::MAX);
        vec![
            Self::new("cmd_master_10", "Initiate Disciple", "Master 10 kubectl commands",
                CommandMastery, 10, Reward::experience(500).with_title("Command Novice")),
            Self::new("cmd_master_30", "Skilled Disciple", "Master 30 kubectl commands",
                CommandMastery, 30, Reward::experience(1500).with_title("Command Adept")),
            Self::new("cmd_master_50", "Command Expert", "Master 50 kubectl commands",
                CommandMastery, 50, Reward::experience(3000).with_title("Command Expert")),
            Self::new("cmd_master_all", "Command Grandmaster", "Master every kubectl command",
                CommandMastery, all,
                Reward::experience(10000).with_title("Kubernetes Grandmaster")),
            Self::new("story_chapter_3", "Into the Jianghu", "Reach chapter 3 of the story",
                StoryProgress, 3, Reward::experience(1000).with_title("Rising Star")),
            Self::new("story_chapter_6", "Young Hero", "Reach chapter 6 of the story",
                StoryProgress, 6, Reward::experience(2500).with_title("Young Hero")),
            Self::new("story_chapter_9", "Martial Master", "Reach chapter 9 of the story",
                StoryProgress, 9, Reward::experience(5000).with_title("Martial Master")),
            Self::new("challenge_10", "Challenge Novice", "Complete 10 challenges",
                ChallengeCompletion, 10, Reward::experience(800).with_title("Challenge Novice")),
            Self::new("challenge_50", "Challenge Expert", "Complete 50 challenges",
                ChallengeCompletion, 50, Reward::experience(4000).with_title("Challenge Expert")),
            Self::new("streak_5", "Small Triumph", "Answer 5 in a row correctly",
                StreakSuccess, 5, Reward::experience(300).with_title("Combo Adept")),
            Self::new("streak_10", "Unstoppable Blade", "Answer 10 in a row correctly",
                StreakSuccess, 10, Reward::experience(800).with_title("Combo Master")),
            Self::new("streak_20", "None Can Stand", "Answer 20 in a row correctly",
                StreakSuccess, 20, Reward::experience(2000).with_title("Combo King")),
        ]
    }
}

/// Unlock every achievement whose condition `profile` now meets.
///
/// Rewards are applied as each achievement unlocks: the title is appended
/// to the custom titles and the experience goes through the leveling
/// engine. Returns the names of the newly unlocked achievements.
pub fn check_and_unlock(profile: &mut Profile) -> Vec<String> {
    let ready: Vec<usize> = profile
        .achievements
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.unlocked && a.kind.is_met(a.condition, profile))
        .map(|(i, _)| i)
        .collect();

    let mut names = Vec::with_capacity(ready.len());
    for index in ready {
        let achievement = &mut profile.achievements[index];
        achievement.unlocked = true;
        let reward = achievement.reward.clone();
        let name = achievement.name.clone();
        log::debug!("achievement unlocked: {} ({})", name, achievement.id);

        if let Some(title) = reward.title {
            profile.custom_titles.push(title);
        }
        if let Some(experience) = reward.experience {
            profile.award(experience);
        }
        names.push(name);
    }
    names
}

/// Unlock counts for one achievement kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindProgress {
    /// The kind.
    pub kind: AchievementKind,
    /// Achievements of this kind.
    pub total: usize,
    /// How many are unlocked.
    pub unlocked: usize,
    /// Unlocked share, as a percentage.
    pub percentage: f64,
}

/// Overall achievement progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementProgress {
    /// Number of achievements.
    pub total: usize,
    /// How many are unlocked.
    pub unlocked: usize,
    /// Unlocked share, as a percentage.
    pub percentage: f64,
    /// Breakdown per kind.
    pub by_kind: Vec<KindProgress>,
}

impl AchievementProgress {
    /// Summarise a set of achievements.
    pub fn of(achievements: &[Achievement]) -> Self {
        let unlocked = achievements.iter().filter(|a| a.unlocked).count();
        let by_kind = AchievementKind::ALL
            .into_iter()
            .map(|kind| {
                let total = achievements.iter().filter(|a| a.kind == kind).count();
                let unlocked = achievements
                    .iter()
                    .filter(|a| a.kind == kind && a.unlocked)
                    .count();
                KindProgress {
                    kind,
                    total,
                    unlocked,
                    percentage: percentage(unlocked, total),
                }
            })
            .collect();
        Self {
            total: achievements.len(),
            unlocked,
            percentage: percentage(unlocked, achievements.len()),
            by_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sect;
    use cs_core::Chapter;

    fn mystic(name: &str) -> Profile {
        Profile::new(name, Sect::MysticHeaven)
    }

    fn unlocked_ids(profile: &Profile) -> Vec<&str> {
        profile
            .achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id.as_str())
            .collect()
    }

    #[test]
    fn predefined_ids_are_unique() {
        let list = Achievement::predefined(79);
        let mut ids: Vec<_> = list.iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(list.iter().all(|a| !a.unlocked));
        let all = list.iter().find(|a| a.id == "cmd_master_all").unwrap();
        assert_eq!(all.condition, 79);
    }

    #[test]
    fn streak_unlock_applies_rewards() {
        let mut p = mystic("Lin");
        p.streak = 5;
        let names = check_and_unlock(&mut p);
        assert_eq!(names, vec!["Small Triumph".to_string()]);
        assert_eq!(p.custom_titles, vec!["Combo Adept".to_string()]);
        // 300 exp: level 1 needs 100, level 2 needs 150, 50 left over.
        assert_eq!(p.level(), 3);
        assert_eq!(p.experience(), 50);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut p = mystic("Lin");
        p.streak = 10;
        let first = check_and_unlock(&mut p);
        assert_eq!(first.len(), 2);
        let (level, exp, titles) = (p.level(), p.experience(), p.custom_titles.len());

        let second = check_and_unlock(&mut p);
        assert!(second.is_empty());
        assert_eq!(p.level(), level);
        assert_eq!(p.experience(), exp);
        assert_eq!(p.custom_titles.len(), titles);
    }

    #[test]
    fn unlocked_achievement_stays_unlocked_when_streak_drops() {
        let mut p = mystic("Lin");
        p.streak = 5;
        check_and_unlock(&mut p);
        p.streak = 0;
        check_and_unlock(&mut p);
        assert_eq!(unlocked_ids(&p), vec!["streak_5"]);
    }

    #[test]
    fn story_progress_uses_chapter_ordinal() {
        let mut p = mystic("Lin");
        p.current_chapter = Chapter::Chapter2;
        assert!(check_and_unlock(&mut p).is_empty());
        p.current_chapter = Chapter::Chapter6;
        check_and_unlock(&mut p);
        assert_eq!(unlocked_ids(&p), vec!["story_chapter_3", "story_chapter_6"]);
    }

    #[test]
    fn mastery_and_challenges() {
        let mut p = mystic("Lin");
        for i in 0..10 {
            p.mastered_commands.insert(format!("kubectl cmd-{i}"));
            p.challenges_completed.insert(format!("challenge-{i}"));
        }
        check_and_unlock(&mut p);
        assert_eq!(unlocked_ids(&p), vec!["cmd_master_10", "challenge_10"]);
    }

    #[test]
    fn sect_specialization_never_met() {
        let p = mystic("Lin");
        assert!(!AchievementKind::SectSpecialization.is_met(0, &p));
    }

    #[test]
    fn kind_keys_round_trip() {
        for kind in AchievementKind::ALL {
            assert_eq!(kind.key().parse::<AchievementKind>().unwrap(), kind);
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.key())
            );
        }
        assert!("hidden_quest".parse::<AchievementKind>().is_err());
    }

    #[test]
    fn progress_summary() {
        let mut p = mystic("Lin");
        p.streak = 5;
        check_and_unlock(&mut p);
        let progress = AchievementProgress::of(&p.achievements);
        assert_eq!(progress.total, 12);
        assert_eq!(progress.unlocked, 1);
        assert_eq!(progress.percentage, 8.3);
        let streaks = progress
            .by_kind
            .iter()
            .find(|k| k.kind == AchievementKind::StreakSuccess)
            .unwrap();
        assert_eq!((streaks.total, streaks.unlocked), (3, 1));
        assert_eq!(streaks.percentage, 33.3);
    }
}
