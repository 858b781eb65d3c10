//! Equipment system
//!
//! A drifter's nine gear slots and the equip/unequip transitions over them.
//! Slots 0-4 are fixed (weapon, helmet, chest, boots, consumable), slots 5-8
//! take mods on a first-empty basis.

use serde::{Deserialize, Serialize};

use super::item::{Category, GearId, GearItem, GearType};

/// Number of gear slots on a drifter
pub const SLOT_COUNT: usize = 9;
/// Leading slots the power aggregator looks at
pub const POWER_SLOT_COUNT: usize = 5;
/// First mod slot
pub const MOD_SLOT_START: usize = 5;

/// An occupied slot as the backend reports it per drifter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearSlot {
    /// Backend id of the slot assignment, absent for local equips
    #[serde(default)]
    pub id: Option<GearId>,
    pub gear_item: GearItem,
    #[serde(default)]
    pub gear_type: Option<GearType>,
}

impl GearSlot {
    pub fn new(gear_item: GearItem, category: Category) -> Self {
        Self {
            id: None,
            gear_item,
            gear_type: Some(GearType::new(category)),
        }
    }

    /// Raw category token: slot metadata first, then the item's own
    fn category_token(&self) -> Option<&str> {
        self.gear_type
            .as_ref()
            .and_then(non_empty_category)
            .or_else(|| self.gear_item.gear_type.as_ref().and_then(non_empty_category))
    }

    /// Effective category of whatever sits in this slot
    pub fn category(&self) -> Option<Category> {
        self.category_token().and_then(Category::parse)
    }

    /// Whether this slot's occupant adds to gear power.
    /// Missing or unrecognised categories still count.
    pub fn counts_toward_power(&self) -> bool {
        self.category().map_or(true, |c| c.counts_toward_power())
    }
}

fn non_empty_category(gear_type: &GearType) -> Option<&str> {
    gear_type.category.as_deref().filter(|c| !c.is_empty())
}

/// The nine slots of one drifter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<GearSlot>>", into = "Vec<Option<GearSlot>>")]
pub struct GearSlots {
    slots: [Option<GearSlot>; SLOT_COUNT],
}

impl From<Vec<Option<GearSlot>>> for GearSlots {
    fn from(raw: Vec<Option<GearSlot>>) -> Self {
        let mut slots = GearSlots::new();
        for (target, slot) in slots.slots.iter_mut().zip(raw) {
            *target = slot;
        }
        slots
    }
}

impl From<GearSlots> for Vec<Option<GearSlot>> {
    fn from(slots: GearSlots) -> Self {
        slots.slots.into_iter().collect()
    }
}

impl GearSlots {
    /// Create nine empty slots
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&GearSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&GearSlot>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Occupied slots only
    pub fn occupied(&self) -> impl Iterator<Item = &GearSlot> {
        self.slots.iter().flatten()
    }

    /// The weapon/armor/consumable slots, the only ones power is read from
    pub fn power_slots(&self) -> impl Iterator<Item = &GearSlot> {
        self.slots[..POWER_SLOT_COUNT].iter().flatten()
    }

    pub fn equipped_count(&self) -> usize {
        self.occupied().count()
    }

    /// Slot this item would go into right now, if any.
    /// Mods take the first empty mod slot.
    pub fn slot_for(&self, item: &GearItem) -> Option<usize> {
        match item.category()? {
            Category::Mod => (MOD_SLOT_START..SLOT_COUNT).find(|&i| self.slots[i].is_none()),
            fixed => fixed.slot_index(),
        }
    }

    /// Equip an item, returning the slot index it landed in.
    ///
    /// A fixed slot is overwritten and its previous occupant dropped.
    /// Returns `None` without touching anything for items with no usable
    /// category or when all four mod slots are taken.
    pub fn equip(&mut self, item: GearItem) -> Option<usize> {
        let Some(category) = item.category() else {
            log::debug!("Cannot equip {} ({}): no known category", item.base_name, item.id);
            return None;
        };
        let Some(index) = self.slot_for(&item) else {
            log::warn!("All mod slots are full, {} not equipped", item.base_name);
            return None;
        };

        if let Some(previous) = &self.slots[index] {
            log::debug!(
                "Replacing {} with {} in slot {}",
                previous.gear_item.base_name,
                item.base_name,
                index
            );
        }
        self.slots[index] = Some(GearSlot::new(item, category));
        Some(index)
    }

    /// Remove the first slot holding an item with this id
    pub fn unequip(&mut self, id: &GearId) -> Option<GearSlot> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| &s.gear_item.id == id))?;
        log::debug!("Unequipped {} from slot {}", id, index);
        self.slots[index].take()
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}

/// Display name for a slot index
pub fn slot_name(index: usize) -> Option<&'static str> {
    match index {
        0 => Some("Weapon"),
        1 => Some("Helmet"),
        2 => Some("Chest"),
        3 => Some("Boots"),
        4 => Some("Consumable"),
        5..=8 => Some("Mod"),
        _ => None,
    }
}
