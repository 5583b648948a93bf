use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use cs_core::{Catalog, CommandCategory, CommandInfo};

pub fn run(category: Option<&str>, difficulty: Option<u8>) -> Result<(), String> {
    let catalog = Catalog::builtin();

    let mut commands: Vec<&CommandInfo> = match difficulty {
        Some(d) => catalog.by_difficulty(d).map_err(|e| e.to_string())?,
        None => catalog.iter().collect(),
    };
    if let Some(label) = category {
        let category = label.parse::<CommandCategory>().map_err(|e| e.to_string())?;
        commands.retain(|c| c.category == category);
    }

    if commands.is_empty() {
        println!("  No commands found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Category", "Difficulty", "Description"]);
    for info in &commands {
        table.add_row(vec![
            info.name.clone(),
            info.category.label().to_string(),
            "*".repeat(usize::from(info.difficulty)),
            info.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} commands", commands.len().to_string().bold());
    Ok(())
}
