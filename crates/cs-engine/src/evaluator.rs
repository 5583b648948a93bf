//! Answer evaluation and streaks.
//!
//! A correct answer extends the streak, masters the command, completes the
//! challenge, awards its experience and re-checks achievements. The streak
//! also multiplies the session score, capped at 5x; the multiplier never
//! touches persisted experience.

use cs_progress::Profile;
use cs_progress::achievements::check_and_unlock;
use serde::Serialize;

use crate::challenge::Challenge;

/// Highest streak multiplier.
pub const MAX_STREAK_BONUS: f64 = 5.0;

/// Score multiplier for a streak: `min(5.0, 1 + 0.1 * streak)`.
pub fn streak_bonus(streak: u32) -> f64 {
    ((f64::from(streak) + 10.0) / 10.0).min(MAX_STREAK_BONUS)
}

/// The running score of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scoreboard {
    score: f64,
}

impl Scoreboard {
    /// A zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `reward * multiplier`.
    pub fn add(&mut self, reward: u32, multiplier: f64) {
        self.score += f64::from(reward) * multiplier;
    }

    /// The exact score.
    pub fn exact(&self) -> f64 {
        self.score
    }

    /// The score truncated for display.
    pub fn score(&self) -> u64 {
        self.score as u64
    }
}

/// The outcome of answering a challenge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Whether the answer was right.
    pub correct: bool,
    /// Streak after the answer.
    pub streak: u32,
    /// Session score after the answer, truncated.
    pub score: u64,
    /// Multiplier applied to the score, on a correct answer.
    pub streak_bonus: Option<f64>,
    /// Experience awarded before the sect multiplier.
    pub experience: u32,
    /// Whether the player levelled up.
    pub leveled_up: bool,
    /// Names of achievements unlocked by the answer.
    pub unlocked_achievements: Vec<String>,
    /// Short message for the player.
    pub message: String,
    /// Hint, on a wrong answer.
    pub hint: Option<String>,
    /// The right command, on a wrong answer.
    pub expected_command: Option<String>,
    /// The chosen command, on a wrong answer.
    pub chosen_command: Option<String>,
}

impl EvaluationResult {
    /// An unsuccessful result that changed nothing.
    pub fn rejected(message: &str, profile: &Profile, scoreboard: &Scoreboard) -> Self {
        Self {
            correct: false,
            streak: profile.streak,
            score: scoreboard.score(),
            streak_bonus: None,
            experience: 0,
            leveled_up: false,
            unlocked_achievements: Vec::new(),
            message: message.to_string(),
            hint: None,
            expected_command: None,
            chosen_command: None,
        }
    }

    /// Whether the answer was accepted for evaluation at all.
    pub fn is_rejected(&self) -> bool {
        !self.correct && self.chosen_command.is_none()
    }
}

/// Evaluate a 1-based `choice` against `challenge`.
///
/// A choice outside the options is rejected with `"invalid selection"`
/// and leaves `profile` and `scoreboard` untouched.
pub fn evaluate(
    profile: &mut Profile,
    challenge: &Challenge,
    choice: usize,
    scoreboard: &mut Scoreboard,
) -> EvaluationResult {
    let Some(chosen) = challenge.option(choice) else {
        return EvaluationResult::rejected("invalid selection", profile, scoreboard);
    };

    if choice - 1 != challenge.correct_index {
        profile.record_incorrect(chosen);
        log::debug!("wrong answer {chosen}, expected {}", challenge.expected_command);
        return EvaluationResult {
            correct: false,
            streak: profile.streak,
            score: scoreboard.score(),
            streak_bonus: None,
            experience: 0,
            leveled_up: false,
            unlocked_achievements: Vec::new(),
            message: format!("Wrong. The answer is {}", challenge.expected_command),
            hint: Some(challenge.hint.clone()),
            expected_command: Some(challenge.expected_command.clone()),
            chosen_command: Some(chosen.to_string()),
        };
    }

    profile.record_correct();
    let bonus = streak_bonus(profile.streak);
    scoreboard.add(challenge.reward_exp, bonus);
    profile.complete_challenge(&challenge.id);
    profile.learn_command(&challenge.expected_command);
    let leveled_up = profile.award(challenge.reward_exp);
    let unlocked = check_and_unlock(profile);

    EvaluationResult {
        correct: true,
        streak: profile.streak,
        score: scoreboard.score(),
        streak_bonus: Some(bonus),
        experience: challenge.reward_exp,
        leveled_up,
        unlocked_achievements: unlocked,
        message: format!("Correct! +{} exp", challenge.reward_exp),
        hint: None,
        expected_command: None,
        chosen_command: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::Chapter;
    use cs_progress::Sect;
    use proptest::prelude::*;

    fn challenge() -> Challenge {
        Challenge {
            id: "prologue-test".to_string(),
            title: "Trial of Pod".to_string(),
            description: String::new(),
            question: "Which command will list the pods in a namespace?".to_string(),
            expected_command: "kubectl get pods".to_string(),
            options: vec![
                "kubectl run".to_string(),
                "kubectl get pods".to_string(),
                "kubectl logs".to_string(),
                "kubectl scale".to_string(),
            ],
            correct_index: 1,
            hint: "It takes the form: kubectl get pods [OPTIONS]".to_string(),
            reward_exp: Chapter::Prologue.content().reward_exp,
            difficulty: 1,
        }
    }

    fn mystic() -> Profile {
        Profile::new("Lin", Sect::MysticHeaven)
    }

    #[test]
    fn streak_bonus_values() {
        assert_eq!(streak_bonus(0), 1.0);
        assert_eq!(streak_bonus(1), 1.1);
        assert_eq!(streak_bonus(10), 2.0);
        assert_eq!(streak_bonus(39), 4.9);
        assert_eq!(streak_bonus(40), 5.0);
        assert_eq!(streak_bonus(100), 5.0);
    }

    #[test]
    fn correct_answer_updates_everything() {
        let mut p = mystic();
        let mut board = Scoreboard::new();
        let c = challenge();
        let result = evaluate(&mut p, &c, 2, &mut board);

        assert!(result.correct);
        assert_eq!(result.streak, 1);
        assert_eq!(result.streak_bonus, Some(1.1));
        assert_eq!(result.score, 220);
        assert_eq!(p.total_correct, 1);
        assert_eq!(p.total_attempts, 1);
        assert!(p.has_mastered("kubectl get pods"));
        assert!(p.challenges_completed.contains("prologue-test"));
        // 200 exp raw: level 1 costs 100, leaving 100 of the 150 for level 2.
        assert_eq!((p.level(), p.experience()), (2, 100));
        assert!(result.leveled_up);
    }

    #[test]
    fn wrong_answer_resets_streak_and_records_choice() {
        let mut p = mystic();
        p.streak = 4;
        let mut board = Scoreboard::new();
        let result = evaluate(&mut p, &challenge(), 3, &mut board);

        assert!(!result.correct);
        assert_eq!(result.streak, 0);
        assert_eq!(result.expected_command.as_deref(), Some("kubectl get pods"));
        assert_eq!(result.chosen_command.as_deref(), Some("kubectl logs"));
        assert!(result.hint.is_some());
        assert_eq!(p.wrong_commands, vec!["kubectl logs".to_string()]);
        assert_eq!((p.total_correct, p.total_attempts), (0, 1));
        assert_eq!(board.exact(), 0.0);
        assert!(!result.is_rejected());
    }

    #[test]
    fn streak_achievement_unlocks_on_fifth() {
        let mut p = mystic();
        p.streak = 4;
        let mut board = Scoreboard::new();
        let result = evaluate(&mut p, &challenge(), 2, &mut board);
        assert_eq!(result.unlocked_achievements, vec!["Small Triumph".to_string()]);
        assert_eq!(result.streak_bonus, Some(1.5));
    }

    #[test]
    fn score_multiplier_does_not_touch_experience() {
        let mut a = mystic();
        let mut b = mystic();
        b.streak = 30;
        let mut board_a = Scoreboard::new();
        let mut board_b = Scoreboard::new();
        let c = Challenge {
            reward_exp: 20,
            ..challenge()
        };
        // Keep achievement rewards out of the comparison.
        for p in [&mut a, &mut b] {
            p.achievements.iter_mut().for_each(|x| x.unlocked = true);
        }
        evaluate(&mut a, &c, 2, &mut board_a);
        evaluate(&mut b, &c, 2, &mut board_b);
        assert_eq!(a.experience(), 20);
        assert_eq!(a.experience(), b.experience());
        assert!(board_b.exact() > board_a.exact());
    }

    proptest! {
        #[test]
        fn out_of_range_choice_never_mutates(
            choice in prop_oneof![Just(0usize), 5usize..1000],
            streak in 0u32..50,
        ) {
            let mut p = mystic();
            p.streak = streak;
            p.learn_command("kubectl run");
            let before = p.clone();
            let mut board = Scoreboard::new();
            board.add(100, 1.5);

            let result = evaluate(&mut p, &challenge(), choice, &mut board);
            prop_assert!(!result.correct);
            prop_assert!(result.is_rejected());
            prop_assert_eq!(result.message.as_str(), "invalid selection");
            prop_assert_eq!(&p, &before);
            prop_assert_eq!(board.exact(), 150.0);
        }
    }
}
