use std::path::Path;

use colored::Colorize;

use cs_engine::{EngineConfig, GameSession};
use cs_progress::Sect;

pub fn run(dir: &Path, name: &str, sect: &str, save: &str, force: bool) -> Result<(), String> {
    let sect = sect.parse::<Sect>().map_err(|e| e.to_string())?;
    let config = EngineConfig::default()
        .with_save_dir(dir)
        .with_save_name(save)
        .with_autosave(false);
    let mut session = GameSession::new(config);

    let path = session.store().path_for(save).map_err(|e| e.to_string())?;
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let profile = session.create_profile(name, sect);
    println!("  {} {}", "Welcome,".bold(), profile.title().green());
    println!(
        "  {} sect, experience x{:.2}",
        profile.sect(),
        profile.sect_bonus()
    );

    if !session.save_game() {
        return Err(format!("could not write {}", path.display()));
    }
    println!("  Saved to {}", path.display());
    println!("  Start playing with: cloudsect play --save {save}");
    Ok(())
}
