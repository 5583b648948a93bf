//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use cs_core::{EventKind, StoryEvent};
use cs_engine::{
    Challenge, CombatReport, CombatState, EngineError, EngineResult, EvaluationResult,
    GameSession,
};

use super::load_session;

const HELP: &str = "\
Commands:
  story              show the current chapter
  next               advance to the next chapter
  challenge          a challenge from this chapter
  quiz               review a command you have mastered
  trial [1-5]        a command you have not mastered, by difficulty
  answer <n>, <n>    answer the active challenge (attacks during a fight)
  practice           list mastered commands
  review             list commands you answered wrongly
  progress           show your progress
  event              something happens on the road
  choose <n>         pick an option of the current event
  fight <monster>    challenge a monster
  attack <n>         answer the combat challenge
  flee               try to escape a fight
  save               save the game
  help               this list
  quit               save and leave";

pub fn run(dir: &Path, save: &str, seed: Option<u64>, autosave: bool) -> Result<(), String> {
    let session = load_session(dir, save, seed, autosave)?;
    let mut game = Game::new(session);

    if let Some(profile) = game.session.profile() {
        println!("  {} {}", "Welcome back,".bold(), profile.title().green());
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match game.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if is_quit(input) {
                    return Ok(());
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if autosave {
        game.session.save_game();
    }
    Ok(())
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}

/// A session plus the event waiting for the player's choice.
struct Game {
    session: GameSession,
    pending_event: Option<&'static StoryEvent>,
}

impl Game {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            pending_event: None,
        }
    }

    fn process(&mut self, input: &str) -> EngineResult<String> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        if let Ok(choice) = cmd.parse::<usize>() {
            return self.do_number(choice);
        }

        match cmd.to_lowercase().as_str() {
            "story" => self.do_story(),
            "next" => self.do_next(),
            "challenge" => self.do_challenge(),
            "quiz" => self.do_quiz(),
            "trial" => self.do_trial(rest),
            "answer" => self.do_answer(parse_choice(rest)?),
            "practice" => self.do_practice(),
            "review" => self.do_review(),
            "progress" => Ok(super::progress::render(&self.session.progress()?)),
            "event" => self.do_event(),
            "choose" => self.do_choose(parse_choice(rest)?),
            "fight" => self.do_fight(rest),
            "attack" => self.do_attack(parse_choice(rest)?),
            "flee" => self.do_flee(),
            "save" => Ok(self.do_save()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => {
                if self.session.config().autosave {
                    self.session.save_game();
                }
                Ok("Until next time.".to_string())
            }
            other => Err(EngineError::InvalidArgument(format!(
                "unknown command \"{other}\" (try 'help')"
            ))),
        }
    }

    fn do_number(&mut self, choice: usize) -> EngineResult<String> {
        if self.pending_event.is_some() {
            self.do_choose(choice)
        } else if self.session.combat().is_some() {
            self.do_attack(choice)
        } else {
            self.do_answer(choice)
        }
    }

    fn do_story(&self) -> EngineResult<String> {
        let chapter = self.session.story()?;
        let mut out = format!("{}\n\n{}", chapter.title.bold(), chapter.introduction);
        if !chapter.concepts.is_empty() {
            out.push_str(&format!("\n\nConcepts: {}", chapter.concepts.join(", ")));
        }
        out.push_str(&format!("\nTechniques: {}", chapter.commands.join(", ")));
        Ok(out)
    }

    fn do_next(&mut self) -> EngineResult<String> {
        if !self.session.advance_chapter()? {
            return Ok("The story is complete. There is no further chapter.".to_string());
        }
        let chapter = self.session.story()?;
        Ok(format!(
            "{} {}\n\n{}",
            "Chapter complete!".green(),
            chapter.title.bold(),
            chapter.introduction
        ))
    }

    fn do_challenge(&mut self) -> EngineResult<String> {
        let challenge = self.session.start_challenge()?;
        Ok(render_challenge(challenge))
    }

    fn do_quiz(&mut self) -> EngineResult<String> {
        Ok(match self.session.start_quiz()? {
            Some(challenge) => render_challenge(challenge),
            None => "You have not mastered any commands yet.".to_string(),
        })
    }

    fn do_trial(&mut self, rest: &str) -> EngineResult<String> {
        let difficulty = if rest.is_empty() {
            None
        } else {
            let d = rest.parse::<u8>().map_err(|_| {
                EngineError::InvalidArgument(format!("not a difficulty: \"{rest}\""))
            })?;
            Some(d)
        };
        Ok(match self.session.start_trial(difficulty)? {
            Some(challenge) => render_challenge(challenge),
            None => "Every command of this kind is already mastered.".to_string(),
        })
    }

    fn do_answer(&mut self, choice: usize) -> EngineResult<String> {
        let result = self.session.submit_answer(choice)?;
        Ok(render_evaluation(&result))
    }

    fn do_practice(&self) -> EngineResult<String> {
        let commands = self.session.practice_commands()?;
        if commands.is_empty() {
            return Ok("No mastered commands yet.".to_string());
        }
        Ok(format!(
            "Mastered ({}):\n  {}",
            commands.len(),
            commands.join("\n  ")
        ))
    }

    fn do_review(&self) -> EngineResult<String> {
        let review = self.session.review_commands()?;
        if review.is_empty() {
            return Ok("No mistakes to review.".to_string());
        }
        let mut out = "Commands to review:".to_string();
        for (command, count) in review {
            out.push_str(&format!("\n  {command} (x{count})"));
        }
        Ok(out)
    }

    fn do_event(&mut self) -> EngineResult<String> {
        if self.session.combat().is_some() {
            return Err(EngineError::InvalidArgument(
                "finish the fight first".to_string(),
            ));
        }
        let Some(event) = self.session.roll_event()? else {
            return Ok("The road is quiet.".to_string());
        };
        self.pending_event = Some(event);
        let mut out = format!("{}\n{}", event.title.bold(), event.description);
        for (i, choice) in event.choices.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", i + 1, choice.label));
        }
        Ok(out)
    }

    fn do_choose(&mut self, choice: usize) -> EngineResult<String> {
        let event = self
            .pending_event
            .ok_or_else(|| EngineError::InvalidArgument("no event to choose from".to_string()))?;
        let outcome = self.session.resolve_event(event, choice)?;
        self.pending_event = None;

        let mut out = outcome.consequence.clone();
        if let Some(reward) = &outcome.reward {
            out.push_str(&format!("\n{} {reward}", "Reward:".green()));
        }
        if outcome.leveled_up {
            out.push_str(&format!("\n{}", level_line(&self.session)));
        }
        push_unlocked(&mut out, &outcome.unlocked_achievements);
        if outcome.combat.is_some() {
            out.push('\n');
            out.push_str(&self.next_combat_round()?);
        } else if matches!(event.kind, EventKind::Combat { .. }) {
            out.push_str("\nYou slip away unseen.");
        }
        Ok(out)
    }

    fn do_fight(&mut self, monster: &str) -> EngineResult<String> {
        if monster.is_empty() {
            return Err(EngineError::InvalidArgument(
                "usage: fight <monster>".to_string(),
            ));
        }
        let combat = self.session.start_combat(monster)?;
        let m = combat.monster();
        let mut out = format!(
            "{} appears! (health {}, attack {}, defense {})",
            m.name.red().bold(),
            m.health,
            m.attack,
            m.defense
        );
        if !m.description.is_empty() {
            out.push_str(&format!("\n{}", m.description));
        }
        out.push('\n');
        out.push_str(&self.next_combat_round()?);
        Ok(out)
    }

    fn do_attack(&mut self, choice: usize) -> EngineResult<String> {
        let report = self.session.combat_attack(choice)?;
        self.after_combat_action(&report)
    }

    fn do_flee(&mut self) -> EngineResult<String> {
        let report = self.session.flee()?;
        self.after_combat_action(&report)
    }

    fn do_save(&self) -> String {
        if self.session.save_game() {
            format!("Saved to {}.", self.session.save_name())
        } else {
            "Saving failed.".red().to_string()
        }
    }

    fn after_combat_action(&mut self, report: &CombatReport) -> EngineResult<String> {
        let mut out = render_combat(report);
        match report.state {
            CombatState::InProgress | CombatState::FledFailed => {
                if report.correct.is_some() || report.state == CombatState::FledFailed {
                    out.push('\n');
                    out.push_str(&self.next_combat_round()?);
                }
            }
            CombatState::Won => {
                if report.leveled_up {
                    out.push_str(&format!("\n{}", level_line(&self.session)));
                }
            }
            CombatState::Lost => out.push_str("\nYou wake at the sect, fully healed."),
            CombatState::Fled | CombatState::NotStarted => {}
        }
        Ok(out)
    }

    fn next_combat_round(&mut self) -> EngineResult<String> {
        let (name, health) = match self.session.combat() {
            Some(combat) => (combat.monster().name.clone(), combat.monster_health()),
            None => return Ok(String::new()),
        };
        let player = self.session.profile().map(|p| p.health).unwrap_or_default();
        let challenge = self.session.combat_challenge()?;
        Ok(format!(
            "{name}: {health} hp | you: {player} hp\n{}\n(attack <n> or flee)",
            render_challenge(challenge)
        ))
    }
}

fn parse_choice(rest: &str) -> EngineResult<usize> {
    rest.parse::<usize>().map_err(|_| {
        EngineError::InvalidArgument(format!("expected an option number, got \"{rest}\""))
    })
}

fn level_line(session: &GameSession) -> String {
    match session.profile() {
        Some(p) => format!(
            "{} Level {} ({})",
            "Breakthrough!".green().bold(),
            p.level(),
            p.tier()
        ),
        None => String::new(),
    }
}

fn push_unlocked(out: &mut String, names: &[String]) {
    for name in names {
        out.push_str(&format!("\n{} {name}", "Achievement unlocked:".magenta().bold()));
    }
}

fn render_challenge(challenge: &Challenge) -> String {
    let mut out = format!(
        "{} [{}]\n{}",
        challenge.title.bold(),
        challenge.difficulty,
        challenge.question
    );
    for (i, option) in challenge.options.iter().enumerate() {
        out.push_str(&format!("\n  {}. {option}", i + 1));
    }
    out
}

fn render_evaluation(result: &EvaluationResult) -> String {
    let mut out = if result.correct {
        result.message.green().to_string()
    } else {
        result.message.red().to_string()
    };
    if let Some(hint) = &result.hint {
        out.push_str(&format!("\nHint: {hint}"));
    }
    if let Some(bonus) = result.streak_bonus {
        out.push_str(&format!(
            "\nStreak {} (x{bonus:.1}), score {}",
            result.streak, result.score
        ));
    }
    if result.leveled_up {
        out.push_str(&format!("\n{}", "Breakthrough! You reached a new level.".green().bold()));
    }
    push_unlocked(&mut out, &result.unlocked_achievements);
    out
}

fn render_combat(report: &CombatReport) -> String {
    let mut out = report.message.clone();
    if let Some(expected) = &report.expected_command {
        out.push_str(&format!("\nThe right technique was {}", expected.bold()));
    }
    push_unlocked(&mut out, &report.unlocked_achievements);
    out
}
