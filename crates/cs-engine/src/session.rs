//! Game session orchestration.
//!
//! `GameSession` owns at most one profile and ties the pieces together:
//! story chapters feed command pools to the challenge generator, answers go
//! through the evaluator, events hand out rewards or start fights, and the
//! save store persists the profile. Persistence failures are logged and
//! reported as `false`, never as errors.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use cs_core::{
    Catalog, CommandInfo, EventKind, MasteryReport, Monster, Reward, StoryChapter, StoryEvent,
    StoryProgress,
};
use cs_progress::achievements::check_and_unlock;
use cs_progress::{AchievementProgress, CultivationTier, Profile, Sect};
use cs_save::SaveStore;

use crate::challenge::{Challenge, generate};
use crate::combat::{Combat, CombatReport, CombatState};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::evaluator::{EvaluationResult, Scoreboard, evaluate};
use crate::random::RandomSource;

/// Experience awarded for finishing a chapter.
pub const CHAPTER_BONUS: u32 = 500;

const NO_PROFILE: &str = "no profile loaded";

/// Everything the progress screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Full title.
    pub title: String,
    /// Player name.
    pub name: String,
    /// Sect.
    pub sect: Sect,
    /// Level.
    pub level: u32,
    /// Experience towards the next level.
    pub experience: u64,
    /// Experience needed for the next level.
    pub required_exp: u64,
    /// Cultivation tier.
    pub tier: CultivationTier,
    /// Earned titles.
    pub custom_titles: Vec<String>,
    /// Sect experience multiplier.
    pub sect_bonus: f64,
    /// Correct answers.
    pub total_correct: u32,
    /// All answers.
    pub total_attempts: u32,
    /// Correct share, in percent.
    pub accuracy: f64,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Story position.
    pub story: StoryProgress,
    /// Command mastery.
    pub commands: MasteryReport,
    /// Achievement progress.
    pub achievements: AchievementProgress,
    /// Session score.
    pub score: u64,
    /// Current streak.
    pub streak: u32,
}

/// What came of a story event choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventOutcome {
    /// What happened.
    pub consequence: String,
    /// Reward applied, if any.
    pub reward: Option<Reward>,
    /// Whether the reward levelled the player up.
    pub leveled_up: bool,
    /// Achievements unlocked by the reward.
    pub unlocked_achievements: Vec<String>,
    /// Monster the choice started a fight with.
    pub combat: Option<String>,
}

/// One player's game.
pub struct GameSession {
    config: EngineConfig,
    catalog: Catalog,
    store: SaveStore,
    save_name: String,
    profile: Option<Profile>,
    challenge: Option<Challenge>,
    combat: Option<Combat>,
    combat_challenge: Option<Challenge>,
    scoreboard: Scoreboard,
    rng: Box<dyn RandomSource>,
}

impl GameSession {
    /// A session over the built-in catalog.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin().clone())
    }

    /// A session over a custom catalog.
    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_os_rng()),
        };
        Self::build(config, catalog, rng)
    }

    /// A session drawing from a caller-supplied random source.
    pub fn with_random(
        config: EngineConfig,
        catalog: Catalog,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self::build(config, catalog, Box::new(rng))
    }

    fn build(config: EngineConfig, catalog: Catalog, rng: Box<dyn RandomSource>) -> Self {
        Self {
            store: SaveStore::new(&config.save_dir),
            save_name: config.save_name.clone(),
            config,
            catalog,
            profile: None,
            challenge: None,
            combat: None,
            combat_challenge: None,
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The command catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The save store.
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Save file the session writes to.
    pub fn save_name(&self) -> &str {
        &self.save_name
    }

    /// The loaded profile.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// The challenge awaiting an answer.
    pub fn active_challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// The fight underway.
    pub fn combat(&self) -> Option<&Combat> {
        self.combat.as_ref()
    }

    /// The session score, truncated.
    pub fn score(&self) -> u64 {
        self.scoreboard.score()
    }

    fn reset_encounters(&mut self) {
        self.challenge = None;
        self.combat = None;
        self.combat_challenge = None;
        self.scoreboard = Scoreboard::new();
    }

    // -- Profile --

    /// Start a new profile, replacing any loaded one. Saves it when
    /// autosave is on.
    pub fn create_profile(&mut self, name: &str, sect: Sect) -> &Profile {
        self.reset_encounters();
        let profile = Profile::new(name, sect);
        log::info!("created {} of the {} sect", profile.name, sect);
        if self.config.autosave {
            persist(&self.store, &self.save_name, &profile);
        }
        self.profile.insert(profile)
    }

    /// Load the save called `name` and make it the session's save file.
    /// Returns `false` when the file is missing or unreadable.
    pub fn load_profile(&mut self, name: &str) -> bool {
        match self.store.load(name) {
            Ok(Some(profile)) => {
                log::info!("loaded {} (level {})", profile.name, profile.level());
                self.reset_encounters();
                self.profile = Some(profile);
                self.save_name = name.to_string();
                true
            }
            Ok(None) => {
                log::warn!("no save named {name}");
                false
            }
            Err(e) => {
                log::error!("could not load {name}: {e}");
                false
            }
        }
    }

    /// Save the profile. Returns `false` if there is none or writing fails.
    pub fn save_game(&self) -> bool {
        match &self.profile {
            Some(profile) => persist(&self.store, &self.save_name, profile),
            None => {
                log::warn!("nothing to save: {NO_PROFILE}");
                false
            }
        }
    }

    // -- Story --

    /// Content of the current chapter.
    pub fn story(&self) -> EngineResult<&'static StoryChapter> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        Ok(profile.current_chapter.content())
    }

    /// Move to the next chapter, awarding the chapter bonus. Returns
    /// `false` at the epilogue.
    pub fn advance_chapter(&mut self) -> EngineResult<bool> {
        let profile = self.profile.as_mut().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let Some(next) = profile.current_chapter.next() else {
            return Ok(false);
        };
        profile.current_chapter = next;
        profile.award(CHAPTER_BONUS);
        for name in check_and_unlock(profile) {
            log::info!("achievement unlocked: {name}");
        }
        log::info!("{} entered {}", profile.name, next.id());
        self.challenge = None;
        if self.config.autosave {
            self.save_game();
        }
        Ok(true)
    }

    // -- Challenges --

    /// A challenge drawn from the current chapter's command pool.
    pub fn start_challenge(&mut self) -> EngineResult<&Challenge> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let chapter = profile.current_chapter;
        let pool = chapter.content().command_pool();
        let challenge = generate(&pool, &self.catalog, chapter, self.rng.as_mut())?;
        self.combat_challenge = None;
        Ok(&*self.challenge.insert(challenge))
    }

    /// A review challenge over mastered commands, or `None` when nothing
    /// has been mastered yet.
    pub fn start_quiz(&mut self) -> EngineResult<Option<&Challenge>> {
        let pool = self.practice_commands()?;
        self.start_from_pool(pool)
    }

    /// A challenge over commands not yet mastered, optionally limited to
    /// one difficulty. `None` when every candidate is mastered.
    pub fn start_trial(&mut self, difficulty: Option<u8>) -> EngineResult<Option<&Challenge>> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let candidates: Vec<&CommandInfo> = match difficulty {
            Some(d) => self
                .catalog
                .by_difficulty(d)
                .map_err(|e| EngineError::InvalidArgument(e.to_string()))?,
            None => self.catalog.iter().collect(),
        };
        let pool = candidates
            .into_iter()
            .filter(|c| !profile.has_mastered(&c.name))
            .map(|c| c.name.clone())
            .collect();
        self.start_from_pool(pool)
    }

    fn start_from_pool(&mut self, pool: Vec<String>) -> EngineResult<Option<&Challenge>> {
        if pool.is_empty() {
            return Ok(None);
        }
        let chapter = self
            .profile
            .as_ref()
            .map(|p| p.current_chapter)
            .unwrap_or_default();
        let challenge = generate(&pool, &self.catalog, chapter, self.rng.as_mut())?;
        self.combat_challenge = None;
        Ok(Some(&*self.challenge.insert(challenge)))
    }

    /// Answer the active challenge with a 1-based choice.
    ///
    /// A valid choice consumes the challenge. Without an active challenge,
    /// or with a choice out of range, the result is unsuccessful and
    /// nothing changes.
    pub fn submit_answer(&mut self, choice: usize) -> EngineResult<EvaluationResult> {
        let profile = self.profile.as_mut().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let Some(challenge) = self.challenge.as_ref() else {
            return Ok(EvaluationResult::rejected(
                "no active challenge",
                profile,
                &self.scoreboard,
            ));
        };
        let result = evaluate(profile, challenge, choice, &mut self.scoreboard);
        if !result.is_rejected() {
            self.challenge = None;
        }
        Ok(result)
    }

    /// Mastered commands that are in the catalog, sorted.
    pub fn practice_commands(&self) -> EngineResult<Vec<String>> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        Ok(profile
            .mastered_commands
            .iter()
            .filter(|c| self.catalog.contains(c))
            .cloned()
            .collect())
    }

    /// Wrongly answered commands with their mistake counts, most frequent
    /// first.
    pub fn review_commands(&self) -> EngineResult<Vec<(String, usize)>> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for command in &profile.wrong_commands {
            *counts.entry(command.as_str()).or_default() += 1;
        }
        let mut review: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(command, count)| (command.to_string(), count))
            .collect();
        review.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(review)
    }

    /// The full progress report.
    pub fn progress(&self) -> EngineResult<ProgressReport> {
        let p = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        Ok(ProgressReport {
            title: p.title(),
            name: p.name.clone(),
            sect: p.sect(),
            level: p.level(),
            experience: p.experience(),
            required_exp: p.required_exp(),
            tier: p.tier(),
            custom_titles: p.custom_titles.clone(),
            sect_bonus: p.sect_bonus(),
            total_correct: p.total_correct,
            total_attempts: p.total_attempts,
            accuracy: p.accuracy(),
            health: p.health,
            max_health: p.max_health,
            story: StoryProgress::at(p.current_chapter),
            commands: self
                .catalog
                .mastery_report(p.mastered_commands.iter().map(String::as_str)),
            achievements: p.achievement_progress(),
            score: self.scoreboard.score(),
            streak: p.streak,
        })
    }

    // -- Events --

    /// A random event the player's level allows, if any.
    pub fn roll_event(&mut self) -> EngineResult<Option<&'static StoryEvent>> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let eligible = StoryEvent::eligible(profile.level());
        if eligible.is_empty() {
            return Ok(None);
        }
        let event = eligible[self.rng.below(eligible.len())];
        log::debug!("rolled event {}", event.id);
        Ok(Some(event))
    }

    /// Pick a 1-based `choice` of `event`.
    ///
    /// Normal events apply the choice's reward. Picking the first option
    /// of a combat event starts the fight.
    pub fn resolve_event(
        &mut self,
        event: &StoryEvent,
        choice: usize,
    ) -> EngineResult<EventOutcome> {
        let profile = self.profile.as_mut().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let option = choice
            .checked_sub(1)
            .and_then(|i| event.choices.get(i))
            .ok_or_else(|| {
                EngineError::InvalidArgument(format!(
                    "choice must be between 1 and {}",
                    event.choices.len()
                ))
            })?;

        let mut outcome = EventOutcome {
            consequence: option.consequence.clone(),
            reward: None,
            leveled_up: false,
            unlocked_achievements: Vec::new(),
            combat: None,
        };

        match &event.kind {
            EventKind::Normal => {
                if let Some(reward) = &option.reward {
                    if let Some(title) = &reward.title {
                        profile.custom_titles.push(title.clone());
                    }
                    if let Some(exp) = reward.experience {
                        outcome.leveled_up = profile.award(exp);
                    }
                    outcome.reward = Some(reward.clone());
                }
                outcome.unlocked_achievements = check_and_unlock(profile);
            }
            EventKind::Combat { monster } => {
                if choice == 1 {
                    let name = self.start_combat(monster)?.monster().name.clone();
                    outcome.combat = Some(name);
                }
            }
        }
        Ok(outcome)
    }

    // -- Combat --

    /// Start a fight with a built-in monster.
    pub fn start_combat(&mut self, monster: &str) -> EngineResult<&Combat> {
        if self.profile.is_none() {
            return Err(EngineError::NotReady(NO_PROFILE));
        }
        if let Some(current) = &self.combat {
            if !current.state().is_over() {
                return Err(EngineError::CombatInProgress(current.monster().name.clone()));
            }
        }
        let template: &Monster = Monster::find(monster)?;
        let mut combat = Combat::new(template);
        combat.start();
        self.challenge = None;
        self.combat_challenge = None;
        Ok(&*self.combat.insert(combat))
    }

    /// A challenge gating the next attack, from the current chapter's pool.
    pub fn combat_challenge(&mut self) -> EngineResult<&Challenge> {
        let profile = self.profile.as_ref().ok_or(EngineError::NotReady(NO_PROFILE))?;
        if self.combat.is_none() {
            return Err(EngineError::NoActiveCombat);
        }
        let chapter = profile.current_chapter;
        let pool = chapter.content().command_pool();
        let challenge = generate(&pool, &self.catalog, chapter, self.rng.as_mut())?;
        self.challenge = None;
        Ok(&*self.combat_challenge.insert(challenge))
    }

    /// Attack by answering the combat challenge with a 1-based choice.
    ///
    /// Without a combat challenge, or with a choice out of range, nothing
    /// happens. A lost fight restores the player's health.
    pub fn combat_attack(&mut self, choice: usize) -> EngineResult<CombatReport> {
        let profile = self.profile.as_mut().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let combat = self.combat.as_mut().ok_or(EngineError::NoActiveCombat)?;
        let Some(challenge) = self.combat_challenge.as_ref() else {
            return Ok(combat.unchanged(profile, "no active challenge"));
        };
        if challenge.option(choice).is_none() {
            return Ok(combat.unchanged(profile, "invalid selection"));
        }
        let correct = choice - 1 == challenge.correct_index;
        let expected = challenge.expected_command.clone();
        self.combat_challenge = None;

        let mut report = combat.player_attack(profile, correct)?;
        if !correct {
            report.expected_command = Some(expected);
        }
        report.unlocked_achievements = check_and_unlock(profile);
        self.conclude_combat();
        Ok(report)
    }

    /// Try to escape the fight. A failed attempt that drops the player to
    /// 0 health loses the fight.
    pub fn flee(&mut self) -> EngineResult<CombatReport> {
        let profile = self.profile.as_mut().ok_or(EngineError::NotReady(NO_PROFILE))?;
        let combat = self.combat.as_mut().ok_or(EngineError::NoActiveCombat)?;
        let mut report = combat.flee(profile, self.rng.as_mut())?;
        if combat.settle(profile) == CombatState::Lost {
            report.state = CombatState::Lost;
            report.message = format!("{}, and you fall", report.message);
        }
        self.conclude_combat();
        Ok(report)
    }

    fn conclude_combat(&mut self) {
        let state = match &self.combat {
            Some(combat) => combat.state(),
            None => return,
        };
        if !state.is_over() {
            return;
        }
        if state == CombatState::Lost {
            if let Some(profile) = self.profile.as_mut() {
                profile.rest();
                log::info!("{} recovers after the defeat", profile.name);
            }
        }
        self.combat = None;
        self.combat_challenge = None;
    }
}

fn persist(store: &SaveStore, name: &str, profile: &Profile) -> bool {
    match store.save(name, profile) {
        Ok(path) => {
            log::info!("saved to {}", path.display());
            true
        }
        Err(e) => {
            log::error!("save failed: {e}");
            false
        }
    }
}
