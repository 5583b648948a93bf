//! Turn-based combat against a monster.
//!
//! Each player turn is gated by a challenge answer: a right answer hits
//! hard, a wrong one barely scratches. The monster counters after every
//! turn it survives. Fleeing is a coin flip; a failed attempt costs
//! double damage.

use cs_core::Monster;
use cs_progress::Profile;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::random::RandomSource;

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatState {
    /// Created but not started.
    NotStarted,
    /// Waiting for the player's next action.
    InProgress,
    /// The monster was defeated.
    Won,
    /// The player was defeated.
    Lost,
    /// The player escaped.
    Fled,
    /// An escape attempt failed; the fight goes on unless the player fell.
    FledFailed,
}

impl CombatState {
    /// Whether the encounter has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Fled)
    }
}

impl std::fmt::Display for CombatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Fled => "fled",
            Self::FledFailed => "failed to flee",
        };
        f.write_str(label)
    }
}

/// Something that happened during a fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CombatEvent {
    /// The player hit the monster.
    PlayerHit {
        /// Damage dealt.
        damage: u32,
        /// Whether the answer behind the attack was right.
        correct: bool,
    },
    /// The monster hit back.
    MonsterHit {
        /// Damage taken.
        damage: u32,
    },
    /// A failed escape cost the player.
    FleeFailed {
        /// Damage taken.
        damage: u32,
    },
    /// The player escaped.
    Fled,
    /// The monster fell.
    Victory {
        /// Experience granted before the sect multiplier.
        experience: u32,
    },
    /// The player fell.
    Defeat,
}

/// The result of one combat action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatReport {
    /// State after the action.
    pub state: CombatState,
    /// Whether the answer was right, for attacks.
    pub correct: Option<bool>,
    /// The right command, after a wrong answer.
    pub expected_command: Option<String>,
    /// Damage the player dealt.
    pub damage_dealt: u32,
    /// Damage the player took.
    pub damage_taken: u32,
    /// Monster health left.
    pub monster_health: u32,
    /// Player health left.
    pub player_health: u32,
    /// Experience from a victory, before the sect multiplier.
    pub experience: u32,
    /// Whether the victory levelled the player up.
    pub leveled_up: bool,
    /// Achievements unlocked by the action.
    pub unlocked_achievements: Vec<String>,
    /// Short message for the player.
    pub message: String,
}

/// Damage the player deals: `2 * attack` on a right answer, `attack / 2`
/// on a wrong one, less the monster's defense, at least 1.
pub fn player_damage(profile: &Profile, monster: &Monster, correct: bool) -> u32 {
    let raw = if correct {
        profile.attack.saturating_mul(2)
    } else {
        profile.attack / 2
    };
    raw.saturating_sub(monster.defense).max(1)
}

/// Damage of a monster counterattack, at least 1.
pub fn counter_damage(profile: &Profile, monster: &Monster) -> u32 {
    monster.attack.saturating_sub(profile.defense).max(1)
}

/// Damage taken when an escape fails: double the monster's attack, at least 1.
pub fn flee_damage(profile: &Profile, monster: &Monster) -> u32 {
    monster
        .attack
        .saturating_mul(2)
        .saturating_sub(profile.defense)
        .max(1)
}

/// One encounter with a monster.
///
/// The template is copied in; the monster's current health is tracked
/// separately so the template stays untouched.
#[derive(Debug, Clone)]
pub struct Combat {
    monster: Monster,
    monster_health: u32,
    state: CombatState,
    round: u32,
    log: Vec<CombatEvent>,
}

impl Combat {
    /// Prepare an encounter with `monster`.
    pub fn new(monster: &Monster) -> Self {
        Self {
            monster: monster.clone(),
            monster_health: monster.health,
            state: CombatState::NotStarted,
            round: 0,
            log: Vec::new(),
        }
    }

    /// Begin the fight at full monster health.
    pub fn start(&mut self) {
        self.monster_health = self.monster.health;
        self.state = CombatState::InProgress;
        self.round = 1;
        log::debug!("combat with {} started", self.monster.name);
    }

    /// The monster template.
    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    /// The monster's current health.
    pub fn monster_health(&self) -> u32 {
        self.monster_health
    }

    /// Current state.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Everything that has happened so far.
    pub fn log(&self) -> &[CombatEvent] {
        &self.log
    }

    fn ensure_active(&self) -> EngineResult<()> {
        match self.state {
            CombatState::InProgress | CombatState::FledFailed => Ok(()),
            _ => Err(EngineError::NoActiveCombat),
        }
    }

    fn report(&self, profile: &Profile, message: String) -> CombatReport {
        CombatReport {
            state: self.state,
            correct: None,
            expected_command: None,
            damage_dealt: 0,
            damage_taken: 0,
            monster_health: self.monster_health,
            player_health: profile.health,
            experience: 0,
            leveled_up: false,
            unlocked_achievements: Vec::new(),
            message,
        }
    }

    /// Settle a pending failed escape. Returns the defeat report when the
    /// player already fell.
    fn fallen(&mut self, profile: &Profile) -> Option<CombatReport> {
        if self.settle(profile) == CombatState::Lost {
            let message = format!("{} has bested you", self.monster.name);
            return Some(self.report(profile, message));
        }
        None
    }

    /// A report that changes nothing, for rejected actions.
    pub fn unchanged(&self, profile: &Profile, message: &str) -> CombatReport {
        self.report(profile, message.to_string())
    }

    /// Attack, with the strength set by `correct`.
    ///
    /// The answer extends or breaks the streak. A killing blow wins the
    /// fight and awards the monster's experience; otherwise the monster
    /// counters, and the player loses at 0 health. After a failed escape
    /// that left the player at 0 health, the fight is lost before any blow.
    pub fn player_attack(
        &mut self,
        profile: &mut Profile,
        correct: bool,
    ) -> EngineResult<CombatReport> {
        self.ensure_active()?;
        if let Some(report) = self.fallen(profile) {
            return Ok(report);
        }
        profile.update_streak(correct);

        let damage = player_damage(profile, &self.monster, correct);
        self.monster_health = self.monster_health.saturating_sub(damage);
        self.log.push(CombatEvent::PlayerHit { damage, correct });

        let mut report = self.report(profile, String::new());
        report.correct = Some(correct);
        report.damage_dealt = damage;

        if self.monster_health == 0 {
            let experience = self.monster.experience_reward;
            report.leveled_up = profile.award(experience);
            report.experience = experience;
            self.state = CombatState::Won;
            self.log.push(CombatEvent::Victory { experience });
            log::debug!("{} defeated {}", profile.name, self.monster.name);
            report.state = self.state;
            report.message = format!("{} is defeated! +{experience} exp", self.monster.name);
            return Ok(report);
        }

        let counter = counter_damage(profile, &self.monster);
        profile.take_damage(counter);
        self.log.push(CombatEvent::MonsterHit { damage: counter });
        report.damage_taken = counter;
        report.player_health = profile.health;

        if profile.is_defeated() {
            self.lose(profile);
            report.message = format!("{} has bested you", self.monster.name);
        } else {
            self.round += 1;
            report.message = format!(
                "You deal {damage}, {} strikes back for {counter}",
                self.monster.name
            );
        }
        report.state = self.state;
        Ok(report)
    }

    /// Try to escape. Success ends the fight; failure costs double damage
    /// and leaves the state at [`CombatState::FledFailed`] until
    /// [`Combat::settle`] checks the player's health.
    pub fn flee(
        &mut self,
        profile: &mut Profile,
        rng: &mut dyn RandomSource,
    ) -> EngineResult<CombatReport> {
        self.ensure_active()?;
        if let Some(report) = self.fallen(profile) {
            return Ok(report);
        }
        if rng.coin_flip() {
            self.state = CombatState::Fled;
            self.log.push(CombatEvent::Fled);
            log::debug!("{} fled from {}", profile.name, self.monster.name);
            return Ok(self.report(profile, format!("You escape from {}", self.monster.name)));
        }

        let damage = flee_damage(profile, &self.monster);
        profile.take_damage(damage);
        self.state = CombatState::FledFailed;
        self.log.push(CombatEvent::FleeFailed { damage });
        let mut report = self.report(
            profile,
            format!("{} cuts off your escape for {damage}", self.monster.name),
        );
        report.damage_taken = damage;
        Ok(report)
    }

    /// Resolve a failed escape: lost if the player fell, otherwise back
    /// in progress. Other states are returned unchanged.
    pub fn settle(&mut self, profile: &Profile) -> CombatState {
        if self.state == CombatState::FledFailed {
            if profile.is_defeated() {
                self.lose(profile);
            } else {
                self.state = CombatState::InProgress;
                self.round += 1;
            }
        }
        self.state
    }

    fn lose(&mut self, profile: &Profile) {
        self.state = CombatState::Lost;
        self.log.push(CombatEvent::Defeat);
        log::debug!("{} was defeated by {}", profile.name, self.monster.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use cs_progress::Sect;

    fn player() -> Profile {
        Profile::new("Lin", Sect::MysticHeaven)
    }

    fn imp() -> Monster {
        Monster::new("Crash Imp", 20, 8, 2, 50)
    }

    fn started(monster: &Monster) -> Combat {
        let mut combat = Combat::new(monster);
        combat.start();
        combat
    }

    #[test]
    fn damage_formulas() {
        let p = player();
        let wraith = Monster::new("Wraith", 80, 12, 3, 200);
        assert_eq!(player_damage(&p, &wraith, true), 17);
        assert_eq!(player_damage(&p, &wraith, false), 2);

        let fortress = Monster::new("Fortress", 80, 1, 50, 0);
        assert_eq!(player_damage(&p, &fortress, true), 1);
        assert_eq!(counter_damage(&p, &fortress), 1);
    }

    #[test]
    fn new_combat_waits_for_start() {
        let mut p = player();
        let mut combat = Combat::new(&imp());
        assert_eq!(combat.state(), CombatState::NotStarted);
        assert!(matches!(
            combat.player_attack(&mut p, true),
            Err(EngineError::NoActiveCombat)
        ));
    }

    #[test]
    fn correct_attack_then_counter() {
        let mut p = player();
        let monster = imp();
        let mut combat = started(&monster);

        let report = combat.player_attack(&mut p, true).unwrap();
        assert_eq!(report.damage_dealt, 18);
        assert_eq!(combat.monster_health(), 2);
        assert_eq!(report.damage_taken, 3);
        assert_eq!(p.health, 97);
        assert_eq!(combat.state(), CombatState::InProgress);
        assert_eq!(p.streak, 1);
        // The template is untouched.
        assert_eq!(monster.health, 20);
        assert_eq!(combat.monster().health, 20);
    }

    #[test]
    fn killing_blow_wins_without_counter() {
        let mut p = player();
        let mut combat = started(&imp());
        combat.player_attack(&mut p, true).unwrap();
        let report = combat.player_attack(&mut p, false).unwrap();

        assert_eq!(report.state, CombatState::Won);
        assert_eq!(report.damage_taken, 0);
        assert_eq!(report.experience, 50);
        assert_eq!(p.experience(), 50);
        assert_eq!(p.health, 97);
        assert_eq!(p.streak, 0);
        assert!(matches!(
            combat.player_attack(&mut p, true),
            Err(EngineError::NoActiveCombat)
        ));
    }

    #[test]
    fn losing_at_zero_health() {
        let mut p = player();
        p.health = 3;
        let mut combat = started(&imp());
        let report = combat.player_attack(&mut p, false).unwrap();
        assert_eq!(report.state, CombatState::Lost);
        assert_eq!(p.health, 0);
        assert_eq!(combat.log().last(), Some(&CombatEvent::Defeat));
    }

    #[test]
    fn failed_flee_costs_double_damage() {
        let mut p = player();
        let mut combat = started(&imp());
        let mut rng = ScriptedRandom::new().with_flips([false]);

        let report = combat.flee(&mut p, &mut rng).unwrap();
        assert_eq!(report.state, CombatState::FledFailed);
        assert_eq!(report.damage_taken, 11);
        assert_eq!(p.health, 89);
        assert_eq!(combat.settle(&p), CombatState::InProgress);
    }

    #[test]
    fn failed_flee_at_low_health_settles_as_lost() {
        let mut p = player();
        p.health = 5;
        let mut combat = started(&imp());
        let mut rng = ScriptedRandom::new().with_flips([false]);

        combat.flee(&mut p, &mut rng).unwrap();
        assert_eq!(p.health, 0);
        assert_eq!(combat.state(), CombatState::FledFailed);
        assert_eq!(combat.settle(&p), CombatState::Lost);
        assert!(combat.state().is_over());
    }

    #[test]
    fn fallen_player_cannot_attack_after_failed_flee() {
        let mut p = player();
        p.health = 5;
        let monster = Monster::new("Crash Imp", 10, 8, 2, 50);
        let mut combat = started(&monster);
        let mut rng = ScriptedRandom::new().with_flips([false]);
        combat.flee(&mut p, &mut rng).unwrap();
        assert_eq!(p.health, 0);

        let report = combat.player_attack(&mut p, true).unwrap();
        assert_eq!(report.state, CombatState::Lost);
        assert_eq!(report.experience, 0);
        assert_eq!(report.damage_dealt, 0);
        assert_eq!(combat.monster_health(), 10);
        assert_eq!((p.level(), p.experience()), (1, 0));
        assert!(combat.player_attack(&mut p, true).is_err());
    }

    #[test]
    fn fallen_player_cannot_flee_again() {
        let mut p = player();
        p.health = 5;
        let mut combat = started(&imp());
        let mut rng = ScriptedRandom::new().with_flips([false, true]);
        combat.flee(&mut p, &mut rng).unwrap();

        let report = combat.flee(&mut p, &mut rng).unwrap();
        assert_eq!(report.state, CombatState::Lost);
        assert_eq!(combat.state(), CombatState::Lost);
    }

    #[test]
    fn attack_allowed_after_failed_flee() {
        let mut p = player();
        let mut combat = started(&imp());
        let mut rng = ScriptedRandom::new().with_flips([false]);
        combat.flee(&mut p, &mut rng).unwrap();
        let report = combat.player_attack(&mut p, true).unwrap();
        assert_eq!(report.state, CombatState::InProgress);
    }

    #[test]
    fn successful_flee_ends_the_fight() {
        let mut p = player();
        let mut combat = started(&imp());
        let mut rng = ScriptedRandom::new().with_flips([true]);
        let report = combat.flee(&mut p, &mut rng).unwrap();
        assert_eq!(report.state, CombatState::Fled);
        assert_eq!(p.health, 100);
        assert!(combat.state().is_over());
    }
}
