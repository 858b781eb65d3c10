//! Gear system

pub mod item;
pub mod power;
pub mod equipment;
pub mod catalog;

pub use item::{GearItem, GearId, GearType, Category, Rarity, Tier, StatAffinity, DEFAULT_ITEM_LEVEL};
pub use power::{compute_power, tier_power, base_power, level_bonus};
pub use equipment::{GearSlot, GearSlots, slot_name, SLOT_COUNT, POWER_SLOT_COUNT, MOD_SLOT_START};
pub use catalog::{Catalog, CatalogQuery, RarityFilter, StatFilter, WeaponTypeFilter, filter_catalog, filter_catalog_by};
