//! Save/load system
//!
//! Handles local loadout snapshots and user settings.

pub mod loadout;
pub mod settings;

use directories::ProjectDirs;

/// Platform data and config directories for this application
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "warborne", "WarborneGear")
}

pub use loadout::{
    LoadoutSave, LoadoutSummary, SaveError, SAVE_SLOTS,
    save_loadout_to, load_loadout_from, delete_loadout_from,
    list_loadouts_in, save_directory, save_path_in,
};

pub use settings::{
    Settings, SettingsError,
    load_settings, load_settings_from, save_settings_to, settings_path,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        assert!(save_directory().ends_with("saves"));
        if let Some(path) = settings_path() {
            assert!(path.ends_with("settings.ron"));
            let dirs = project_dirs().unwrap();
            assert!(path.starts_with(dirs.config_dir()));
        }
    }
}
