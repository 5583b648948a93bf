//! Directory-backed save storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use cs_progress::Profile;
use serde_json::Value;

use crate::error::{SaveError, SaveResult};
use crate::schema::{SaveFile, check_required};

/// File name used when none is given.
pub const DEFAULT_SAVE_NAME: &str = "player_save.json";

/// A save found in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSummary {
    /// File name including `.json`.
    pub file_name: String,
    /// Player name stored in the file.
    pub name: String,
    /// Player level stored in the file.
    pub level: u64,
    /// Last modification time, when the filesystem reports one.
    pub modified: Option<DateTime<Local>>,
}

/// A directory of JSON save files.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Use `dir` for saves. It is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The save directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the save called `name`. `.json` is appended when
    /// missing; empty names and names containing path separators are
    /// rejected.
    pub fn path_for(&self, name: &str) -> SaveResult<PathBuf> {
        Ok(self.dir.join(file_name(name)?))
    }

    /// Write `profile` to `name`, replacing any previous save.
    ///
    /// The document is written to a temporary file first and renamed over
    /// the destination.
    pub fn save(&self, name: &str, profile: &Profile) -> SaveResult<PathBuf> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir).map_err(|e| SaveError::io(&self.dir, e))?;

        let json = SaveFile::from_profile(profile).to_json()?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| SaveError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| SaveError::io(&path, e))?;

        log::debug!("saved {} to {}", profile.name, path.display());
        Ok(path)
    }

    /// Load the save called `name`. A missing file is `Ok(None)`.
    pub fn load(&self, name: &str) -> SaveResult<Option<Profile>> {
        let path = self.path_for(name)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SaveError::io(&path, e)),
        };
        let profile = SaveFile::from_json(&text)?.into_profile()?;
        log::debug!("loaded {} from {}", profile.name, path.display());
        Ok(Some(profile))
    }

    /// Every valid save in the directory, sorted by file name.
    ///
    /// Files that are not JSON or lack a required field are skipped. A
    /// missing directory has no saves.
    pub fn list(&self) -> SaveResult<Vec<SaveSummary>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SaveError::io(&self.dir, e)),
        };

        let mut saves = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SaveError::io(&self.dir, e))?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") || !path.is_file() {
                continue;
            }
            match summarize(&path) {
                Ok(summary) => saves.push(summary),
                Err(e) => log::debug!("skipping {}: {e}", path.display()),
            }
        }
        saves.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(saves)
    }

    /// Rename a save. Fails if `from` is missing or `to` already exists.
    pub fn rename(&self, from: &str, to: &str) -> SaveResult<()> {
        let source = self.path_for(from)?;
        let target = self.path_for(to)?;
        if !source.exists() {
            return Err(SaveError::NotFound(file_name(from)?));
        }
        if target.exists() {
            return Err(SaveError::AlreadyExists(file_name(to)?));
        }
        fs::rename(&source, &target).map_err(|e| SaveError::io(&source, e))
    }

    /// Delete a save. Returns whether a file was removed.
    pub fn delete(&self, name: &str) -> SaveResult<bool> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SaveError::io(&path, e)),
        }
    }
}

fn file_name(name: &str) -> SaveResult<String> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(SaveError::InvalidName(name.to_string()));
    }
    if name.ends_with(".json") {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}.json"))
    }
}

fn summarize(path: &Path) -> SaveResult<SaveSummary> {
    let text = fs::read_to_string(path).map_err(|e| SaveError::io(path, e))?;
    let value: Value = serde_json::from_str(&text)?;
    check_required(&value)?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from);
    Ok(SaveSummary {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        name: value["name"].as_str().unwrap_or_default().to_string(),
        level: value["level"].as_u64().unwrap_or(1),
        modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_progress::Sect;
    use tempfile::TempDir;

    fn store() -> (TempDir, SaveStore) {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn save_and_load_round_trip() {
        let (_dir, store) = store();
        let mut profile = Profile::new("Lin", Sect::AzureCloud);
        profile.gain_experience(300).unwrap();
        profile.learn_command("kubectl get pods");
        profile.learn_command("kubectl run");
        profile.complete_challenge("prologue-1");
        profile.streak = 2;

        let path = store.save("lin", &profile).unwrap();
        assert!(path.ends_with("lin.json"));
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = store.load("lin.json").unwrap().unwrap();
        assert_eq!(loaded.level(), profile.level());
        assert_eq!(loaded.experience(), profile.experience());
        assert_eq!(loaded.mastered_commands, profile.mastered_commands);
        assert_eq!(loaded.challenges_completed, profile.challenges_completed);
        assert_eq!(loaded.streak, profile.streak);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (_dir, store) = store();
        assert!(store.load("ghost").unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (dir, store) = store();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        assert!(matches!(store.load("broken"), Err(SaveError::Json(_))));
    }

    #[test]
    fn list_skips_invalid_files() {
        let (dir, store) = store();
        store.save("b", &Profile::new("Bo", Sect::MysticHeaven)).unwrap();
        store.save("a", &Profile::new("Ai", Sect::PurgatoryGate)).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("partial.json"), r#"{"name": "x"}"#).unwrap();
        fs::write(dir.path().join("broken.json"), "[").unwrap();

        let saves = store.list().unwrap();
        let names: Vec<_> = saves.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
        assert_eq!(saves[0].name, "Ai");
        assert_eq!(saves[0].level, 1);
        assert!(saves[0].modified.is_some());
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path().join("nowhere"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn rename_refuses_existing_target() {
        let (_dir, store) = store();
        store.save("one", &Profile::new("One", Sect::AzureCloud)).unwrap();
        store.save("two", &Profile::new("Two", Sect::AzureCloud)).unwrap();

        assert!(matches!(
            store.rename("one", "two"),
            Err(SaveError::AlreadyExists(_))
        ));
        assert!(matches!(
            store.rename("three", "four"),
            Err(SaveError::NotFound(_))
        ));

        store.rename("one", "uno").unwrap();
        assert!(store.load("one").unwrap().is_none());
        assert_eq!(store.load("uno").unwrap().unwrap().name, "One");
    }

    #[test]
    fn delete_reports_whether_removed() {
        let (_dir, store) = store();
        store.save("gone", &Profile::new("Gone", Sect::AzureCloud)).unwrap();
        assert!(store.delete("gone").unwrap());
        assert!(!store.delete("gone").unwrap());
    }

    #[test]
    fn path_separators_rejected() {
        let (_dir, store) = store();
        for bad in ["", "../escape", "nested/save", "..", "back\\slash"] {
            assert!(
                matches!(store.path_for(bad), Err(SaveError::InvalidName(_))),
                "{bad:?} accepted"
            );
        }
    }
}
