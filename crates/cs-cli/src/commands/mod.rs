pub mod catalog;
pub mod delete;
pub mod new;
pub mod play;
pub mod progress;
pub mod rename;
pub mod saves;

use std::path::Path;

use cs_engine::{EngineConfig, GameSession};

/// Open a session over `dir` with the profile saved as `save` loaded.
fn load_session(
    dir: &Path,
    save: &str,
    seed: Option<u64>,
    autosave: bool,
) -> Result<GameSession, String> {
    let mut config = EngineConfig::default()
        .with_save_dir(dir)
        .with_save_name(save)
        .with_autosave(autosave);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(config);
    if !session.load_profile(save) {
        return Err(format!(
            "no usable save \"{save}\" in {} (create one with `cloudsect new`)",
            dir.display()
        ));
    }
    Ok(session)
}

/// Render a progress bar like `[#####-----]`.
fn bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.0, 4), "[----]");
        assert_eq!(bar(50.0, 4), "[##--]");
        assert_eq!(bar(100.0, 4), "[####]");
        assert_eq!(bar(250.0, 4), "[####]");
    }
}
