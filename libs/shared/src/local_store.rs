//! File-backed client preferences.
//!
//! The backend's web client keeps `useAI` and `tour_completed` in browser
//! local storage; here they live in a small JSON file under the user's
//! home directory and survive restarts the same way.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub use_ai: bool,
    #[serde(default)]
    pub tour_completed: bool,
}

pub struct LocalStore {}

impl LocalStore {
    pub fn local_store_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paperrag")
    }

    pub fn write_store_data(path: &str, data: &str) -> Result<String, String> {
        Self::write_store_data_in(&Self::local_store_path(), path, data)
    }

    pub fn read_store_data(path: &str) -> Result<String, String> {
        Self::read_store_data_in(&Self::local_store_path(), path)
    }

    pub fn write_store_data_in(dir: &Path, path: &str, data: &str) -> Result<String, String> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create store directory: {}", e))?;
        }
        let path = dir.join(path);
        fs::write(&path, data)
            .map_err(|e| format!("Failed to write store data to {}: {}", path.display(), e))?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn read_store_data_in(dir: &Path, path: &str) -> Result<String, String> {
        let path = dir.join(path);
        fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read store data from {}: {}", path.display(), e))
    }

    /// Missing or corrupt preference files fall back to defaults; a corrupt
    /// file is worth a log line, a missing one is not.
    pub fn load_preferences() -> Preferences {
        Self::load_preferences_in(&Self::local_store_path())
    }

    pub fn save_preferences(prefs: &Preferences) -> Result<(), String> {
        Self::save_preferences_in(&Self::local_store_path(), prefs)
    }

    pub fn load_preferences_in(dir: &Path) -> Preferences {
        match Self::read_store_data_in(dir, PREFERENCES_FILE) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt preferences file: {}", e);
                    Preferences::default()
                }
            },
            Err(_) => Preferences::default(),
        }
    }

    pub fn save_preferences_in(dir: &Path, prefs: &Preferences) -> Result<(), String> {
        let body = serde_json::to_string_pretty(prefs)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;
        Self::write_store_data_in(dir, PREFERENCES_FILE, &body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn use_ai_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_path_buf();

        let mut prefs = LocalStore::load_preferences_in(&dir);
        assert!(!prefs.use_ai);

        prefs.use_ai = true;
        LocalStore::save_preferences_in(&dir, &prefs).unwrap();

        // Simulated reload: nothing shared with the first read but the disk.
        let reloaded = LocalStore::load_preferences_in(&dir);
        assert!(reloaded.use_ai);

        prefs.use_ai = false;
        LocalStore::save_preferences_in(&dir, &prefs).unwrap();
        assert!(!LocalStore::load_preferences_in(&dir).use_ai);
    }

    #[test]
    fn tour_completed_persists() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_path_buf();

        let mut prefs = LocalStore::load_preferences_in(&dir);
        assert!(!prefs.tour_completed);
        prefs.tour_completed = true;
        LocalStore::save_preferences_in(&dir, &prefs).unwrap();
        assert!(LocalStore::load_preferences_in(&dir).tour_completed);
    }

    #[test]
    fn corrupt_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_path_buf();
        LocalStore::write_store_data_in(&dir, PREFERENCES_FILE, "{not json").unwrap();
        assert_eq!(LocalStore::load_preferences_in(&dir), Preferences::default());
    }

    #[test]
    fn missing_fields_default_false() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_path_buf();
        LocalStore::write_store_data_in(&dir, PREFERENCES_FILE, r#"{"use_ai": true}"#).unwrap();
        let prefs = LocalStore::load_preferences_in(&dir);
        assert!(prefs.use_ai);
        assert!(!prefs.tour_completed);
    }
}
