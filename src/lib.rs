//! Warborne Gear - gear power and loadout calculator
//!
//! The calculation core behind the Warborne Above Ashes guild dashboard:
//! item power from tier, rarity and level, drifter loadouts and their
//! total gear power, and catalog filtering.

pub mod items;
pub mod entities;
pub mod game;
pub mod data;
pub mod save;

// Re-export commonly used types
pub use items::{GearItem, GearId, Category, Rarity, Tier, Catalog, CatalogQuery, compute_power, filter_catalog};
pub use entities::{Drifter, Roster, total_gear_power};
pub use game::{Session, PendingAction};
