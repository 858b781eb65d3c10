//! Drifters
//!
//! A drifter is one character slot on a player's roster: a name, flat base
//! stats and nine gear slots.

use serde::{Deserialize, Serialize};

use crate::items::{GearId, GearItem, GearSlot, GearSlots};

/// Backend ids for drifters share the gear id shape
pub type DrifterId = GearId;

/// Flat display stats. Not used by the power calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    #[serde(rename = "base_health")]
    pub health: i32,
    #[serde(rename = "base_energy")]
    pub energy: i32,
    #[serde(rename = "base_damage")]
    pub damage: i32,
    #[serde(rename = "base_defense")]
    pub defense: i32,
    #[serde(rename = "base_speed")]
    pub speed: i32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            health: 100,
            energy: 100,
            damage: 50,
            defense: 25,
            speed: 10,
        }
    }
}

/// Health and energy granted by equipped gear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearBonuses {
    pub health: i32,
    pub energy: i32,
}

/// A drifter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drifter {
    #[serde(default)]
    pub id: Option<DrifterId>,
    /// Roster position, 1-9
    #[serde(default)]
    pub number: Option<u8>,
    /// `None` means the roster slot is unassigned
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub stats: BaseStats,
    #[serde(default)]
    pub equipped_count: usize,
    /// Missing on malformed records; such drifters contribute no power
    #[serde(default)]
    pub gear_slots: Option<GearSlots>,
}

impl Default for Drifter {
    fn default() -> Self {
        Self {
            id: None,
            number: None,
            name: None,
            stats: BaseStats::default(),
            equipped_count: 0,
            gear_slots: Some(GearSlots::new()),
        }
    }
}

impl Drifter {
    /// A named drifter with default stats and empty gear
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// An unassigned roster position
    pub fn unassigned(number: u8) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.name.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Empty")
    }

    pub fn gear_slots(&self) -> Option<&GearSlots> {
        self.gear_slots.as_ref()
    }

    /// Slots for mutation, created empty if the record had none
    pub fn gear_slots_mut(&mut self) -> &mut GearSlots {
        self.gear_slots.get_or_insert_with(GearSlots::new)
    }

    /// Recompute `equipped_count` from the slots
    pub fn sync_equipped_count(&mut self) {
        self.equipped_count = self.gear_slots.as_ref().map_or(0, GearSlots::equipped_count);
    }

    /// Equip an item, returning the slot it went into
    pub fn equip(&mut self, item: GearItem) -> Option<usize> {
        let index = self.gear_slots_mut().equip(item);
        self.sync_equipped_count();
        index
    }

    /// Unequip the first slot holding this item
    pub fn unequip(&mut self, id: &GearId) -> Option<GearSlot> {
        let removed = self.gear_slots.as_mut()?.unequip(id);
        self.sync_equipped_count();
        removed
    }

    /// Reset to an unassigned drifter: no id or name, default stats, empty gear
    pub fn clear(&mut self) {
        self.id = None;
        self.name = None;
        self.stats = BaseStats::default();
        self.gear_slots_mut().clear();
        self.equipped_count = 0;
    }

    /// Sum of health/energy bonuses across every occupied slot
    pub fn gear_bonuses(&self) -> GearBonuses {
        self.gear_slots
            .iter()
            .flat_map(|slots| slots.occupied())
            .fold(GearBonuses::default(), |acc, slot| GearBonuses {
                health: acc.health + slot.gear_item.health_bonus,
                energy: acc.energy + slot.gear_item.energy_bonus,
            })
    }

    /// Base stats with gear health/energy added
    pub fn effective_stats(&self) -> BaseStats {
        let bonuses = self.gear_bonuses();
        BaseStats {
            health: self.stats.health + bonuses.health,
            energy: self.stats.energy + bonuses.energy,
            ..self.stats
        }
    }
}
