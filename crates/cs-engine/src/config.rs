//! Configuration for a game session.

use std::path::PathBuf;

use cs_save::DEFAULT_SAVE_NAME;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible sessions. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Directory holding save files.
    pub save_dir: PathBuf,
    /// Save file used by the session.
    pub save_name: String,
    /// Save automatically after creating a profile and finishing a chapter.
    pub autosave: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_dir: PathBuf::from("."),
            save_name: DEFAULT_SAVE_NAME.to_string(),
            autosave: true,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    /// Set the save file name.
    pub fn with_save_name(mut self, name: impl Into<String>) -> Self {
        self.save_name = name.into();
        self
    }

    /// Enable or disable autosave.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
}
