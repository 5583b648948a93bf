//! The player profile.

use std::collections::BTreeSet;

use cs_core::catalog::percentage;
use cs_core::{Catalog, Chapter};

use crate::achievements::{Achievement, AchievementProgress};
use crate::sect::Sect;
use crate::tier::CultivationTier;

/// Name given to players who do not pick one.
pub const DEFAULT_NAME: &str = "Nameless Wanderer";

/// Starting and maximum health of a new profile.
pub const STARTING_HEALTH: u32 = 100;
/// Starting attack of a new profile.
pub const STARTING_ATTACK: u32 = 10;
/// Starting defense of a new profile.
pub const STARTING_DEFENSE: u32 = 5;

/// Everything a player accumulates.
///
/// Level, experience and tier only change through the leveling engine,
/// and the sect is fixed at creation; those are read through accessors.
/// Collections and counters are public and mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Display name.
    pub name: String,
    sect: Sect,
    sect_bonus: f64,
    pub(crate) level: u32,
    pub(crate) experience: u64,
    pub(crate) tier: CultivationTier,
    /// Free-form skills learned along the way.
    pub skills: Vec<String>,
    /// The chapter the player is reading.
    pub current_chapter: Chapter,
    /// Commands answered correctly at least once.
    pub mastered_commands: BTreeSet<String>,
    /// Ids of completed challenges.
    pub challenges_completed: BTreeSet<String>,
    /// Wrongly chosen commands, one entry per mistake.
    pub wrong_commands: Vec<String>,
    /// Consecutive correct answers.
    pub streak: u32,
    /// Correct answers overall.
    pub total_correct: u32,
    /// Answers overall.
    pub total_attempts: u32,
    /// Titles earned from achievements and events, in order.
    pub custom_titles: Vec<String>,
    /// Current health, never above `max_health`.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Attack strength.
    pub attack: u32,
    /// Defense.
    pub defense: u32,
    /// The fixed achievement set.
    pub achievements: Vec<Achievement>,
}

impl Profile {
    /// Create a level 1 profile in `sect`. An empty name becomes
    /// [`DEFAULT_NAME`].
    pub fn new(name: impl Into<String>, sect: Sect) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.trim().to_string()
        };
        Self {
            name,
            sect,
            sect_bonus: sect.bonus(),
            level: 1,
            experience: 0,
            tier: CultivationTier::Mortal,
            skills: Vec::new(),
            current_chapter: Chapter::Prologue,
            mastered_commands: BTreeSet::new(),
            challenges_completed: BTreeSet::new(),
            wrong_commands: Vec::new(),
            streak: 0,
            total_correct: 0,
            total_attempts: 0,
            custom_titles: Vec::new(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            achievements: Achievement::predefined(Catalog::builtin().len()),
        }
    }

    /// The player's sect.
    pub fn sect(&self) -> Sect {
        self.sect
    }

    /// Experience multiplier, fixed by the sect.
    pub fn sect_bonus(&self) -> f64 {
        self.sect_bonus
    }

    /// Current level, at least 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience towards the next level.
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Cultivation tier for the current level.
    pub fn tier(&self) -> CultivationTier {
        self.tier
    }

    /// Full title, e.g. `"Azure Cloud Mortal Frame · Lin"`.
    pub fn title(&self) -> String {
        format!("{} {} · {}", self.sect, self.tier.epithet(), self.name)
    }

    /// Record a mastered command. Returns whether it was new.
    pub fn learn_command(&mut self, command: &str) -> bool {
        self.mastered_commands.insert(command.to_string())
    }

    /// Record a completed challenge. Returns whether it was new.
    pub fn complete_challenge(&mut self, challenge_id: &str) -> bool {
        self.challenges_completed.insert(challenge_id.to_string())
    }

    /// Whether `command` has been mastered.
    pub fn has_mastered(&self, command: &str) -> bool {
        self.mastered_commands.contains(command)
    }

    /// Extend or break the streak.
    pub fn update_streak(&mut self, correct: bool) {
        if correct {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }

    /// Count a correct answer: streak and totals.
    pub fn record_correct(&mut self) {
        self.update_streak(true);
        self.total_correct += 1;
        self.total_attempts += 1;
    }

    /// Count a wrong answer and remember the command chosen.
    pub fn record_incorrect(&mut self, chosen: &str) {
        self.update_streak(false);
        self.total_attempts += 1;
        self.wrong_commands.push(chosen.to_string());
    }

    /// Correct answers as a share of all answers, in percent.
    pub fn accuracy(&self) -> f64 {
        percentage(self.total_correct as usize, self.total_attempts as usize)
    }

    /// Lose `amount` health, stopping at 0. Returns the health left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Whether health has reached 0.
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Restore health to the maximum.
    pub fn rest(&mut self) {
        self.health = self.max_health;
    }

    /// Ids of unlocked achievements, in table order.
    pub fn unlocked_achievement_ids(&self) -> Vec<&str> {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id.as_str())
            .collect()
    }

    /// Summary of unlocked achievements.
    pub fn achievement_progress(&self) -> AchievementProgress {
        AchievementProgress::of(&self.achievements)
    }

    /// Start over at level 1 in the prologue, keeping name and sect.
    pub fn reset_progress(&mut self) {
        *self = Self::new(std::mem::take(&mut self.name), self.sect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_defaults() {
        let p = Profile::new("Lin", Sect::AzureCloud);
        assert_eq!(p.level(), 1);
        assert_eq!(p.experience(), 0);
        assert_eq!(p.tier(), CultivationTier::Mortal);
        assert_eq!(p.sect_bonus(), 1.10);
        assert_eq!((p.health, p.max_health, p.attack, p.defense), (100, 100, 10, 5));
        assert_eq!(p.current_chapter, Chapter::Prologue);
        assert_eq!(p.achievements.len(), 12);
    }

    #[test]
    fn empty_name_becomes_default() {
        assert_eq!(Profile::new("  ", Sect::MysticHeaven).name, DEFAULT_NAME);
    }

    #[test]
    fn title_format() {
        let p = Profile::new("Lin", Sect::AzureCloud);
        assert_eq!(p.title(), "Azure Cloud Mortal Frame · Lin");
    }

    #[test]
    fn learn_and_complete_report_newness() {
        let mut p = Profile::new("Lin", Sect::MysticHeaven);
        assert!(p.learn_command("kubectl get pods"));
        assert!(!p.learn_command("kubectl get pods"));
        assert!(p.has_mastered("kubectl get pods"));
        assert!(p.complete_challenge("prologue-1"));
        assert!(!p.complete_challenge("prologue-1"));
    }

    #[test]
    fn answers_update_streak_and_totals() {
        let mut p = Profile::new("Lin", Sect::MysticHeaven);
        p.record_correct();
        p.record_correct();
        assert_eq!((p.streak, p.total_correct, p.total_attempts), (2, 2, 2));
        p.record_incorrect("kubectl logs");
        assert_eq!((p.streak, p.total_correct, p.total_attempts), (0, 2, 3));
        assert_eq!(p.wrong_commands, vec!["kubectl logs".to_string()]);
        assert_eq!(p.accuracy(), 66.7);
    }

    #[test]
    fn accuracy_without_attempts_is_zero() {
        assert_eq!(Profile::new("Lin", Sect::MysticHeaven).accuracy(), 0.0);
    }

    #[test]
    fn damage_floors_at_zero_and_rest_restores() {
        let mut p = Profile::new("Lin", Sect::MysticHeaven);
        assert_eq!(p.take_damage(30), 70);
        assert_eq!(p.take_damage(500), 0);
        assert!(p.is_defeated());
        p.rest();
        assert_eq!(p.health, p.max_health);
    }

    #[test]
    fn reset_keeps_name_and_sect() {
        let mut p = Profile::new("Lin", Sect::PurgatoryGate);
        p.learn_command("kubectl run");
        p.streak = 4;
        p.current_chapter = Chapter::Chapter3;
        p.reset_progress();
        assert_eq!(p.name, "Lin");
        assert_eq!(p.sect(), Sect::PurgatoryGate);
        assert!(p.mastered_commands.is_empty());
        assert_eq!(p.streak, 0);
        assert_eq!(p.current_chapter, Chapter::Prologue);
    }
}
