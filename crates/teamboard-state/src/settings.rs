//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. A missing
//! or unreadable file yields the defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use teamboard_persistence::AutoSaveConfig;

use crate::error::SettingsError;
use crate::notifications::DEFAULT_NOTIFICATION_CAPACITY;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,

    /// Where the document is stored.
    pub storage: StorageSettings,

    /// Designer editor auto-save.
    pub autosave: AutoSaveConfig,

    pub notifications: NotificationSettings,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Teamboard", "Teamboard")
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable settings file");
            Self::default()
        })
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Directory holding the persisted document.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("teamboard-data"))
        })
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Product name, used in export file names.
    pub product_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            product_name: "Teamboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the data directory (None = platform default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Maximum number of notifications kept.
    pub capacity: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.general.product_name, "Teamboard");
        assert_eq!(settings.autosave.debounce_ms, 2000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.general.product_name = "Studio Board".into();
        settings.storage.data_dir = Some(dir.path().join("data"));
        settings.notifications.capacity = 10;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.data_dir(), dir.path().join("data"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[autosave]\nenabled = false\n").unwrap();

        let settings = Settings::load_from(&path);
        assert!(!settings.autosave.enabled);
        assert_eq!(settings.autosave.debounce_ms, 2000);
        assert_eq!(settings.notifications.capacity, DEFAULT_NOTIFICATION_CAPACITY);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "general = 42").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
