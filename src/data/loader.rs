//! Catalog and roster loading
//!
//! Reads backend JSON dumps (or hand-edited RON) of the gear catalog and a
//! player's drifters, and exports the built-in catalog for editing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Drifter, Roster};
use crate::game::PlayerId;
use crate::items::Catalog;
use super::defaults::default_catalog;

/// Errors raised while reading or writing data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid RON in {}: {source}", path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("unsupported data file {} (expected .json or .ron)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to serialize RON: {0}")]
    RonSerialize(#[from] ron::Error),

    #[error("failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Data file formats we understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Ron,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "ron" => Some(DataFormat::Ron),
            _ => None,
        }
    }
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), DataError> {
    fs::write(path, contents).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path, content: &str) -> Result<T, DataError> {
    match DataFormat::from_path(path) {
        Some(DataFormat::Json) => serde_json::from_str(content).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some(DataFormat::Ron) => ron::from_str(content).map_err(|source| DataError::Ron {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(DataError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a catalog (a list of gear item records) from a .json or .ron file
pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let content = read(path)?;
    let catalog: Catalog = parse(path, &content)?;
    log::info!("Loaded {} gear items from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load the catalog at `path`, or the built-in one when there is no path or
/// the file cannot be used
pub fn load_catalog_or_default(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        return default_catalog();
    };
    load_catalog(path).unwrap_or_else(|e| {
        log::warn!("{}. Using the built-in catalog.", e);
        default_catalog()
    })
}

/// Player dump: either a bare list of drifters or a player object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerRecord {
    Drifters(Vec<Drifter>),
    Player {
        #[serde(default)]
        id: Option<PlayerId>,
        drifters: Vec<Drifter>,
    },
}

impl PlayerRecord {
    pub fn player_id(&self) -> Option<&PlayerId> {
        match self {
            PlayerRecord::Drifters(_) => None,
            PlayerRecord::Player { id, .. } => id.as_ref(),
        }
    }

    pub fn into_drifters(self) -> Vec<Drifter> {
        match self {
            PlayerRecord::Drifters(drifters) | PlayerRecord::Player { drifters, .. } => drifters,
        }
    }

    pub fn into_roster(self) -> Roster {
        Roster::from_drifters(self.into_drifters())
    }
}

/// Load a player's drifters from a .json or .ron file
pub fn load_player(path: &Path) -> Result<PlayerRecord, DataError> {
    let content = read(path)?;
    let record: PlayerRecord = parse(path, &content)?;
    log::info!("Loaded player data from {}", path.display());
    Ok(record)
}

/// Write the built-in catalog as `catalog.ron` and `catalog.json` in `dir`
pub fn export_default_catalog(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let catalog = default_catalog();
    let ron_path = dir.join("catalog.ron");
    write(&ron_path, &ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default())?)?;
    let json_path = dir.join("catalog.json");
    write(&json_path, &serde_json::to_string_pretty(&catalog)?)?;

    log::info!("Exported {} gear items to {}", catalog.len(), dir.display());
    Ok(vec![ron_path, json_path])
}
