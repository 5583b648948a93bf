use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use cs_save::SaveStore;

pub fn run(dir: &Path) -> Result<(), String> {
    let saves = SaveStore::new(dir).list().map_err(|e| e.to_string())?;

    if saves.is_empty() {
        println!("  No saves found in {}.", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Player", "Level", "Modified"]);

    for save in &saves {
        let modified = save
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            save.file_name.clone(),
            save.name.clone(),
            save.level.to_string(),
            modified,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} saves", saves.len());
    Ok(())
}
