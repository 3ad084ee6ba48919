//! Settings Persistence
//!
//! Loads and saves the mirror settings from/to a configuration file,
//! defaulting to a platform-specific configuration directory.

use crate::config::MirrorSettings;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config directory
const APP_DIR: &str = "mirrorstroke";

/// File name of the mirror settings
const SETTINGS_FILE: &str = "mirror.toml";

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    settings: MirrorSettings,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Default settings file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::Directory("no configuration directory on this platform".into())
        })?;
        Ok(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let settings = if path.exists() {
            MirrorSettings::load_from_file(&path)?
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            MirrorSettings::default()
        };
        Ok(Self { settings, path })
    }

    /// Save settings to the file they were loaded from
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Directory(format!("{}: {}", parent.display(), e))
            })?;
        }
        self.settings.save_to_file(&self.path)
    }

    /// Get reference to settings
    pub fn settings(&self) -> &MirrorSettings {
        &self.settings
    }

    /// Get mutable reference to settings
    pub fn settings_mut(&mut self) -> &mut MirrorSettings {
        &mut self.settings
    }

    /// Replace the stored settings
    pub fn replace(&mut self, settings: MirrorSettings) {
        self.settings = settings;
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
