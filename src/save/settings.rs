//! User settings
//!
//! Read from `settings.ron` in the platform config directory. A missing file
//! means defaults; a broken one is reported and replaced by defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::loadout::save_directory;
use super::project_dirs;

/// Settings file name inside the config directory
const SETTINGS_FILE: &str = "settings.ron";

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// env_logger filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Catalog file to use instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Where loadout snapshots go
    pub save_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            catalog_path: None,
            save_dir: None,
        }
    }
}

impl Settings {
    /// Configured save directory, or the platform default
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(save_directory)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Default settings file location
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Read settings from a file. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

/// Read settings from `path` or the default location, falling back to
/// defaults on any error
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_path) else {
        return Settings::default();
    };
    load_settings_from(&path).unwrap_or_else(|e| {
        // Logging is not up yet when settings load, so this goes to stderr
        eprintln!("Warning: {} ({}). Using default settings.", e, path.display());
        Settings::default()
    })
}

/// Write settings to a file, creating its directory
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let ron = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trip_and_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings {
            log_filter: "debug".to_string(),
            catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
            save_dir: None,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);

        fs::write(&path, r#"(log_filter: "warn")"#).unwrap();
        let partial = load_settings_from(&path).unwrap();
        assert_eq!(partial.log_filter, "warn");
        assert!(partial.catalog_path.is_none());
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "(log_filter: ").unwrap();
        assert!(load_settings_from(&path).is_err());
        assert_eq!(load_settings(Some(path.as_path())), Settings::default());
    }

    #[test]
    fn test_save_dir_override() {
        let settings = Settings {
            save_dir: Some(PathBuf::from("/srv/saves")),
            ..Settings::default()
        };
        assert_eq!(settings.save_dir(), PathBuf::from("/srv/saves"));
    }
}
