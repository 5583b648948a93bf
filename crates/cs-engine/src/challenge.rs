//! Multiple-choice challenges.
//!
//! A challenge asks which command does something, offering the right
//! command and up to three distractors drawn from the whole catalog.

use cs_core::{Catalog, Chapter};
use serde::Serialize;
use uuid::Builder;

use crate::error::{EngineError, EngineResult};
use crate::random::{RandomSource, shuffle};

/// Number of distractors in a full challenge.
pub const DISTRACTORS: usize = 3;

/// A multiple-choice question about one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Challenge {
    /// Unique id, prefixed with the chapter id.
    pub id: String,
    /// Short title.
    pub title: String,
    /// What the challenge is about.
    pub description: String,
    /// The question shown to the player.
    pub question: String,
    /// The right answer.
    pub expected_command: String,
    /// Distinct command names, one of which is `expected_command`.
    pub options: Vec<String>,
    /// Index of `expected_command` in `options`.
    pub correct_index: usize,
    /// Shown after a wrong answer.
    pub hint: String,
    /// Experience for a correct answer.
    pub reward_exp: u32,
    /// Difficulty from 1 to 10, set by the chapter.
    pub difficulty: u32,
}

impl Challenge {
    /// The option at a 1-based `choice`, if in range.
    pub fn option(&self, choice: usize) -> Option<&str> {
        choice
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// Build a challenge for a command picked uniformly from `available`.
///
/// Distractors are drawn without replacement from every other catalog
/// command; a catalog with fewer than four commands yields fewer options.
/// Reward and difficulty come from `chapter`.
pub fn generate(
    available: &[String],
    catalog: &Catalog,
    chapter: Chapter,
    rng: &mut dyn RandomSource,
) -> EngineResult<Challenge> {
    if available.is_empty() {
        return Err(EngineError::NoCommandsAvailable);
    }
    let target = &available[rng.below(available.len())];
    let info = catalog
        .lookup(target)
        .ok_or_else(|| EngineError::UnknownCommand(target.clone()))?;

    let mut pool: Vec<&str> = catalog
        .all_names()
        .into_iter()
        .filter(|name| *name != target.as_str())
        .collect();
    let count = DISTRACTORS.min(pool.len());
    for i in 0..count {
        let j = i + rng.below(pool.len() - i);
        pool.swap(i, j);
    }

    let mut options: Vec<String> = std::iter::once(target.clone())
        .chain(pool[..count].iter().map(|name| (*name).to_string()))
        .collect();
    shuffle(rng, &mut options);
    let correct_index = options.iter().position(|o| o == target).unwrap_or_default();

    let mut bytes = [0u8; 16];
    rng.random_bytes(&mut bytes);
    let id = format!("{}-{}", chapter.id(), Builder::from_random_bytes(bytes).into_uuid());

    let content = chapter.content();
    log::debug!("challenge {id} targets {target}");
    Ok(Challenge {
        id,
        title: format!("Trial of {}", info.concept),
        description: format!("Master the technique to {}", info.description),
        question: format!("Which command will {}?", info.description),
        expected_command: target.clone(),
        options,
        correct_index,
        hint: format!("It takes the form: {}", info.syntax),
        reward_exp: content.reward_exp,
        difficulty: chapter.challenge_difficulty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use cs_core::{CommandCategory, CommandInfo};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn small_catalog(names: &[&str]) -> Catalog {
        Catalog::from_commands(
            names
                .iter()
                .map(|n| CommandInfo::new(*n, CommandCategory::Basic, 1).with_syntax(*n)),
        )
    }

    #[test]
    fn empty_pool_fails() {
        let mut rng = ScriptedRandom::new();
        let err = generate(&[], Catalog::builtin(), Chapter::Prologue, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::NoCommandsAvailable));
    }

    #[test]
    fn unknown_target_fails() {
        let mut rng = ScriptedRandom::new();
        let err = generate(
            &names(&["kubectl fly"]),
            Catalog::builtin(),
            Chapter::Prologue,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::UnknownCommand(_)));
    }

    #[test]
    fn four_distinct_options_with_one_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = Chapter::Chapter2.content().command_pool();
        let c = generate(&pool, Catalog::builtin(), Chapter::Chapter2, &mut rng).unwrap();
        assert_eq!(c.options.len(), 4);
        let mut unique = c.options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
        assert_eq!(c.options[c.correct_index], c.expected_command);
        assert!(pool.contains(&c.expected_command));
        assert!(c.id.starts_with("chapter_2-"));
        assert_eq!(c.difficulty, 3);
        assert_eq!(c.reward_exp, Chapter::Chapter2.content().reward_exp);
    }

    #[test]
    fn scripted_draws_fix_the_layout() {
        let catalog = small_catalog(&["a", "b", "c", "d", "e"]);
        // target index 1 ("b"); distractors: pool [a, c, d, e], picks
        // i=0 -> j=0+2 (d), i=1 -> j=1+0 (c), i=2 -> j=2+1 (e);
        // shuffle draws of 0 rotate [b, d, c, e] to [d, c, e, b].
        let mut rng = ScriptedRandom::new().with_draws([1, 2, 0, 1, 0, 0, 0]);
        let c = generate(&names(&["a", "b"]), &catalog, Chapter::Prologue, &mut rng).unwrap();
        assert_eq!(c.expected_command, "b");
        assert_eq!(c.options, names(&["d", "c", "e", "b"]));
        assert_eq!(c.correct_index, 3);
    }

    #[test]
    fn tiny_catalog_degrades_gracefully() {
        let catalog = small_catalog(&["only", "other"]);
        let mut rng = StdRng::seed_from_u64(0);
        let c = generate(&names(&["only"]), &catalog, Chapter::Prologue, &mut rng).unwrap();
        assert_eq!(c.options.len(), 2);
        assert_eq!(c.options[c.correct_index], "only");

        let single = small_catalog(&["only"]);
        let c = generate(&names(&["only"]), &single, Chapter::Prologue, &mut rng).unwrap();
        assert_eq!(c.options, names(&["only"]));
        assert_eq!(c.correct_index, 0);
    }

    #[test]
    fn option_is_one_based() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = Chapter::Prologue.content().command_pool();
        let c = generate(&pool, Catalog::builtin(), Chapter::Prologue, &mut rng).unwrap();
        assert_eq!(c.option(1), Some(c.options[0].as_str()));
        assert_eq!(c.option(0), None);
        assert_eq!(c.option(5), None);
    }

    proptest! {
        #[test]
        fn exactly_one_option_matches(seed in any::<u64>(), chapter in 0u32..13) {
            let chapter = Chapter::from_ordinal(chapter).unwrap();
            let pool = chapter.content().command_pool();
            let mut rng = StdRng::seed_from_u64(seed);
            let c = generate(&pool, Catalog::builtin(), chapter, &mut rng).unwrap();
            let matches = c.options.iter().filter(|o| **o == c.expected_command).count();
            prop_assert_eq!(matches, 1);
            prop_assert_eq!(&c.options[c.correct_index], &c.expected_command);
            prop_assert_eq!(c.options.len(), 4);
        }
    }
}
