//! File-backed settings store.
//!
//! Settings live in `{config_dir}/player-settings/settings.json`. Loading
//! never fails: a missing or corrupt file falls back to defaults so a bad
//! profile cannot block startup.

use crate::models::settings::PlayerSettings;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "player-settings";
const FILE_NAME: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owns the settings of one local profile and the file they persist to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: PlayerSettings,
}

impl SettingsStore {
    /// Default location of the settings file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    /// Opens the store at `path`, falling back to defaults when the file
    /// is missing or cannot be loaded.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let settings = if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            PlayerSettings::default()
        } else {
            match Self::load_from(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::error!("{}", e);
                    log::warn!("Using default settings");
                    PlayerSettings::default()
                }
            }
        };

        Self { path, settings }
    }

    /// Store at `path` holding defaults, without touching the file.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: PlayerSettings::default(),
        }
    }

    /// Reads and parses a settings file.
    pub fn load_from(path: &Path) -> Result<PlayerSettings, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        PlayerSettings::from_json(&content)
    }

    /// Rewrites the file at `path` in canonical form.
    ///
    /// Corrupt fields are reset by the field codecs. A document that
    /// cannot be read or parsed at all is left untouched and returned
    /// as an error.
    pub fn normalize(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = Self::load_from(&path)?;
        let store = Self { path, settings };
        store.save()?;
        Ok(store)
    }

    /// Writes the current settings, creating parent directories.
    pub fn save(&self) -> Result<(), SettingsError> {
        let write_error = |source| SettingsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        let json = self.settings.to_json_pretty()?;
        log::info!("Saving settings: {}", self.path.display());
        fs::write(&self.path, json).map_err(write_error)
    }

    /// Replaces the settings with defaults. Does not save.
    pub fn reset(&mut self) {
        self.settings = PlayerSettings::default();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PlayerSettings {
        &mut self.settings
    }

    pub fn into_settings(self) -> PlayerSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mods::Mod;
    use crate::models::note_type::NoteType;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.json"));
        assert_eq!(store.settings(), &PlayerSettings::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile").join("settings.json");

        let mut store = SettingsStore::open(&path);
        store.settings_mut().music_volume = 0.4;
        store.settings_mut().enabled_mods.push(Mod::Fast);
        store.settings_mut().hitbox_sizes.set(NoteType::Flick, 3);
        store.save().unwrap();

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.settings(), store.settings());
        assert_eq!(reopened.settings().hitbox_sizes[NoteType::Flick], 3);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.into_settings(), PlayerSettings::default());
        assert!(matches!(
            SettingsStore::load_from(&path),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_corrupt_mapping_keeps_rest_of_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"language": 2, "hitbox_sizes": {"0": "2"}, "note_ring_colors": "garbage"}"#,
        )
        .unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.settings().language, 2);
        assert!(store.settings().hitbox_sizes.is_empty());
        assert!(store.settings().note_ring_colors.is_empty());
        assert_eq!(store.settings().note_fill_colors.len(), NoteType::COUNT);
    }

    #[test]
    fn test_unknown_enum_value_keeps_rest_of_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"language": 2, "music_volume": 0.3, "local_level_sort": 7}"#).unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.settings().language, 2);
        assert_eq!(store.settings().music_volume, 0.3);
    }

    #[test]
    fn test_normalize_keeps_readable_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"language": 2, "music_volume": 0.3, "local_level_sort": 7, "stale": 1}"#,
        )
        .unwrap();

        let store = SettingsStore::normalize(&path).unwrap();
        assert_eq!(store.settings().language, 2);

        let rewritten = SettingsStore::load_from(&path).unwrap();
        assert_eq!(rewritten.language, 2);
        assert_eq!(rewritten.music_volume, 0.3);
        assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_normalize_leaves_unparsable_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ this is not json").unwrap();

        assert!(matches!(
            SettingsStore::normalize(&path),
            Err(SettingsError::Json(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");

        let missing = dir.path().join("absent.json");
        assert!(SettingsStore::normalize(&missing).is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = SettingsStore::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SettingsError::Read { .. })));
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::with_defaults(dir.path().join("settings.json"));
        store.settings_mut().play_ranked = false;
        store.reset();
        assert!(store.settings().play_ranked);
    }
}
