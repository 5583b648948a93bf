use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cs_engine::ProgressReport;

use super::{bar, load_session};

pub fn run(dir: &Path, save: &str, json: bool) -> Result<(), String> {
    let session = load_session(dir, save, None, false)?;
    let report = session.progress().map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print!("{}", render(&report));
    Ok(())
}

/// The progress screen, shared with the play loop.
pub fn render(report: &ProgressReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", report.title.bold()));
    out.push_str(&format!(
        "  Level {} ({}) {} {}/{} exp\n",
        report.level,
        report.tier,
        bar(
            report.experience as f64 / report.required_exp.max(1) as f64 * 100.0,
            20
        ),
        report.experience,
        report.required_exp,
    ));
    out.push_str(&format!(
        "  Health {}/{}  Sect bonus x{:.2}  Streak {}  Score {}\n",
        report.health, report.max_health, report.sect_bonus, report.streak, report.score,
    ));
    out.push_str(&format!(
        "  Answers {}/{} ({:.1}%)\n",
        report.total_correct, report.total_attempts, report.accuracy,
    ));
    out.push_str(&format!(
        "  Story: {} ({}/{}) {} {:.1}%\n",
        report.story.chapter,
        report.story.ordinal,
        report.story.total - 1,
        bar(report.story.percentage, 20),
        report.story.percentage,
    ));
    if !report.custom_titles.is_empty() {
        out.push_str(&format!("  Titles: {}\n", report.custom_titles.join(", ")));
    }

    let commands = &report.commands;
    out.push_str(&format!(
        "\n  Commands mastered: {}/{} ({:.1}%)\n",
        commands.overall.mastered,
        commands.overall.total,
        commands.overall.percentage(),
    ));
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Mastered", "Progress"]);
    for (category, tally) in &commands.by_category {
        table.add_row(vec![
            category.label().to_string(),
            format!("{}/{}", tally.mastered, tally.total),
            bar(tally.percentage(), 10),
        ]);
    }
    out.push_str(&format!("{table}\n"));

    let achievements = &report.achievements;
    out.push_str(&format!(
        "\n  Achievements: {}/{} ({:.1}%)\n",
        achievements.unlocked, achievements.total, achievements.percentage,
    ));
    out
}
