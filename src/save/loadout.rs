//! Loadout snapshots
//!
//! Saves a session's roster to numbered local slots so an edit in progress
//! survives restarts. The backend stays the source of truth.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::Roster;
use crate::game::{PlayerId, Session};
use crate::items::Catalog;
use super::project_dirs;

/// Save file version for compatibility checking
const SAVE_VERSION: u32 = 1;
/// Number of local save slots
pub const SAVE_SLOTS: u8 = 3;

/// A saved loadout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutSave {
    pub version: u32,
    pub player_id: PlayerId,
    pub active_slot: u8,
    pub roster: Roster,
}

impl LoadoutSave {
    pub fn from_session(session: &Session) -> Self {
        Self {
            version: SAVE_VERSION,
            player_id: session.player_id().clone(),
            active_slot: session.active_slot(),
            roster: session.roster().clone(),
        }
    }

    /// Rebuild a session around this roster
    pub fn into_session(self, catalog: Catalog) -> Session {
        let mut session = Session::new(self.player_id, self.roster, catalog);
        if !session.select_drifter(self.active_slot) {
            log::warn!("Saved active slot {} is invalid, using slot 1", self.active_slot);
        }
        session
    }

    pub fn summary(&self) -> LoadoutSummary {
        LoadoutSummary {
            player_id: self.player_id.clone(),
            assigned_drifters: self.roster.assigned().count(),
            total_gear_power: self.roster.total_gear_power(),
        }
    }
}

/// Brief summary of a save for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutSummary {
    pub player_id: PlayerId,
    pub assigned_drifters: usize,
    pub total_gear_power: i64,
}

/// Save error types
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Invalid save slot {0}")]
    InvalidSlot(u8),
}

/// Default snapshot directory, `saves` under the working directory when the
/// platform has no data dir
pub fn save_directory() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("saves"),
        |dirs| dirs.data_local_dir().join("saves"),
    )
}

/// Get the path for a specific save slot
pub fn save_path_in(dir: &Path, slot: u8) -> PathBuf {
    dir.join(format!("loadout_{}.json", slot))
}

fn check_slot(slot: u8) -> Result<(), SaveError> {
    if slot < SAVE_SLOTS {
        Ok(())
    } else {
        Err(SaveError::InvalidSlot(slot))
    }
}

/// Save a session's roster into a slot
pub fn save_loadout_to(dir: &Path, slot: u8, session: &Session) -> Result<(), SaveError> {
    check_slot(slot)?;
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(&LoadoutSave::from_session(session))?;
    fs::write(save_path_in(dir, slot), json)?;

    log::info!("Loadout saved to slot {}", slot);
    Ok(())
}

/// Load a saved loadout from a slot
pub fn load_loadout_from(dir: &Path, slot: u8) -> Result<LoadoutSave, SaveError> {
    check_slot(slot)?;
    let data = fs::read_to_string(save_path_in(dir, slot))?;
    let save: LoadoutSave = serde_json::from_str(&data)?;

    // Version check
    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save.version,
        });
    }

    log::info!("Loadout loaded from slot {}", slot);
    Ok(save)
}

/// Delete a save slot
pub fn delete_loadout_from(dir: &Path, slot: u8) -> Result<(), SaveError> {
    check_slot(slot)?;
    let path = save_path_in(dir, slot);
    if path.exists() {
        fs::remove_file(&path)?;
        log::info!("Deleted loadout slot {}", slot);
    }
    Ok(())
}

/// List every slot with the summary of its save, if any
pub fn list_loadouts_in(dir: &Path) -> Vec<(u8, Option<LoadoutSummary>)> {
    (0..SAVE_SLOTS)
        .map(|slot| {
            let summary = if save_path_in(dir, slot).exists() {
                load_loadout_from(dir, slot).ok().map(|save| save.summary())
            } else {
                None
            };
            (slot, summary)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Drifter;
    use crate::items::{Category, GearId, GearItem, Rarity};

    fn session() -> Session {
        let catalog = Catalog::new(vec![
            GearItem::new(1, "Ashen Blade", Category::Weapon).with_rarity(Rarity::Epic),
        ]);
        let mut session = Session::new(PlayerId::Num(9), Roster::new(), catalog);
        session.assign_drifter(&Drifter::new("Kestrel"), 2);
        session.select_drifter(2);
        session.equip(&GearId::Num(1), "IV", 30);
        session
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let session = session();
        save_loadout_to(dir.path(), 1, &session).unwrap();

        let save = load_loadout_from(dir.path(), 1).unwrap();
        assert_eq!(save.active_slot, 2);
        assert_eq!(save.roster, *session.roster());

        let restored = save.into_session(session.catalog().clone());
        assert_eq!(restored.active_slot(), 2);
        assert_eq!(restored.total_gear_power(), 34);
        assert!(restored.pending().is_empty());
    }

    #[test]
    fn test_version_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut save = LoadoutSave::from_session(&session());
        save.version = 99;
        fs::write(save_path_in(dir.path(), 0), serde_json::to_string(&save).unwrap()).unwrap();

        assert!(matches!(
            load_loadout_from(dir.path(), 0),
            Err(SaveError::VersionMismatch { expected: 1, found: 99 })
        ));
    }

    #[test]
    fn test_list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        save_loadout_to(dir.path(), 2, &session()).unwrap();

        let listed = list_loadouts_in(dir.path());
        assert_eq!(listed.len(), 3);
        assert!(listed[0].1.is_none());
        let summary = listed[2].1.clone().unwrap();
        assert_eq!(summary.assigned_drifters, 1);
        assert_eq!(summary.total_gear_power, 34);

        delete_loadout_from(dir.path(), 2).unwrap();
        assert!(list_loadouts_in(dir.path()).iter().all(|(_, s)| s.is_none()));
    }

    #[test]
    fn test_invalid_slot() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            save_loadout_to(dir.path(), 7, &session()),
            Err(SaveError::InvalidSlot(7))
        ));
    }
}
