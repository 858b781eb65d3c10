//! Loadout editing session
//!
//! One player's roster and the gear catalog, with the drifter currently being
//! edited. Every transition is applied locally right away and queued as a
//! pending backend action; whether the backend accepts it does not change
//! local state.

use serde::{Deserialize, Serialize};

use crate::entities::{Drifter, DrifterId, Roster};
use crate::items::{Catalog, GearId, GearItem, GearSlot};

/// Backend ids for players share the gear id shape
pub type PlayerId = GearId;

/// A backend call the embedding application should send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PendingAction {
    EquipGear {
        player_id: PlayerId,
        gear_id: GearId,
        drifter_number: u8,
        slot_type: String,
        tier: Option<String>,
        item_level: i32,
    },
    UnequipGear {
        player_id: PlayerId,
        gear_id: GearId,
    },
    UpdatePlayerDrifter {
        player_id: PlayerId,
        drifter_id: Option<DrifterId>,
        slot_number: u8,
    },
}

/// Editing context for one player
#[derive(Debug, Clone)]
pub struct Session {
    player_id: PlayerId,
    roster: Roster,
    catalog: Catalog,
    /// Roster position being edited, 1-9
    active_slot: u8,
    outbox: Vec<PendingAction>,
}

impl Session {
    pub fn new(player_id: PlayerId, roster: Roster, catalog: Catalog) -> Self {
        Self {
            player_id,
            roster,
            catalog,
            active_slot: 1,
            outbox: Vec::new(),
        }
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_slot(&self) -> u8 {
        self.active_slot
    }

    pub fn active_drifter(&self) -> Option<&Drifter> {
        self.roster.drifter(self.active_slot)
    }

    /// Switch the drifter being edited. Ignores positions outside 1-9.
    pub fn select_drifter(&mut self, slot_number: u8) -> bool {
        if self.roster.drifter(slot_number).is_none() {
            return false;
        }
        log::debug!("Active drifter: {} -> {}", self.active_slot, slot_number);
        self.active_slot = slot_number;
        true
    }

    /// Equip a catalog item on the active drifter at the given tier and level
    pub fn equip(&mut self, gear_id: &GearId, tier: &str, item_level: i32) -> Option<usize> {
        let Some(item) = self.catalog.find(gear_id) else {
            log::debug!("Gear {} is not in the catalog", gear_id);
            return None;
        };
        let item = item.clone().with_tier(tier, item_level);
        self.equip_item(item)
    }

    /// Equip an already prepared item on the active drifter
    pub fn equip_item(&mut self, item: GearItem) -> Option<usize> {
        let category = item.category()?;
        let gear_id = item.id.clone();
        let tier = item.tier.clone();
        let item_level = item.item_level_or_default();

        let drifter = self.roster.drifter_mut(self.active_slot)?;
        let index = drifter.equip(item)?;

        self.outbox.push(PendingAction::EquipGear {
            player_id: self.player_id.clone(),
            gear_id,
            drifter_number: self.active_slot,
            slot_type: category.name().to_string(),
            tier,
            item_level,
        });
        Some(index)
    }

    /// Unequip an item from the active drifter
    pub fn unequip(&mut self, gear_id: &GearId) -> Option<GearSlot> {
        let removed = self.roster.drifter_mut(self.active_slot)?.unequip(gear_id)?;
        self.outbox.push(PendingAction::UnequipGear {
            player_id: self.player_id.clone(),
            gear_id: gear_id.clone(),
        });
        Some(removed)
    }

    /// Put a drifter into a roster position, keeping that position's gear
    pub fn assign_drifter(&mut self, template: &Drifter, slot_number: u8) -> bool {
        if !self.roster.assign_drifter(template, slot_number) {
            return false;
        }
        self.outbox.push(PendingAction::UpdatePlayerDrifter {
            player_id: self.player_id.clone(),
            drifter_id: template.id.clone(),
            slot_number,
        });
        true
    }

    /// Reset a roster position to an unassigned drifter
    pub fn clear_drifter(&mut self, slot_number: u8) -> bool {
        if !self.roster.clear_drifter(slot_number) {
            return false;
        }
        self.outbox.push(PendingAction::UpdatePlayerDrifter {
            player_id: self.player_id.clone(),
            drifter_id: None,
            slot_number,
        });
        true
    }

    pub fn total_gear_power(&self) -> i64 {
        self.roster.total_gear_power()
    }

    /// Actions not yet handed to the backend
    pub fn pending(&self) -> &[PendingAction] {
        &self.outbox
    }

    /// Take all pending actions
    pub fn drain_outbox(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Category, Rarity};

    fn catalog() -> Catalog {
        let mut items = vec![
            GearItem::new(1, "Ashen Blade", Category::Weapon).with_rarity(Rarity::Epic),
            GearItem::new(2, "Warden Helm", Category::Helmet).with_rarity(Rarity::Rare),
            GearItem::new(3, "Ration", Category::Consumable),
        ];
        items.extend((10..15).map(|id| GearItem::new(id, "Booster", Category::Mod)));
        Catalog::new(items)
    }

    fn session() -> Session {
        let mut session = Session::new(PlayerId::Num(42), Roster::new(), catalog());
        session.assign_drifter(&Drifter::new("Kestrel"), 1);
        session.drain_outbox();
        session
    }

    #[test]
    fn test_equip_and_power() {
        let mut session = session();
        assert_eq!(session.equip(&GearId::Num(1), "IV", 30), Some(0));
        assert_eq!(session.equip(&GearId::Num(2), "II", 30), Some(1));
        assert_eq!(session.total_gear_power(), 53);
        assert_eq!(session.active_drifter().map(|d| d.equipped_count), Some(2));
    }

    #[test]
    fn test_equip_queues_action() {
        let mut session = session();
        session.equip(&GearId::Num(2), "V", 12);

        assert_eq!(
            session.drain_outbox(),
            vec![PendingAction::EquipGear {
                player_id: PlayerId::Num(42),
                gear_id: GearId::Num(2),
                drifter_number: 1,
                slot_type: "helmet".to_string(),
                tier: Some("V".to_string()),
                item_level: 12,
            }]
        );
        assert!(session.pending().is_empty());
    }

    #[test]
    fn test_noops_queue_nothing() {
        let mut session = session();
        assert_eq!(session.equip(&GearId::Num(999), "IV", 30), None);
        assert!(session.unequip(&GearId::Num(1)).is_none());
        assert!(!session.clear_drifter(0));
        assert!(!session.select_drifter(10));

        for id in 10..14 {
            assert!(session.equip(&GearId::Num(id), "I", 1).is_some());
        }
        session.drain_outbox();
        assert_eq!(session.equip(&GearId::Num(14), "I", 1), None);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn test_unequip_round_trip() {
        let mut session = session();
        session.equip(&GearId::Num(3), "I", 30);
        let before = session.active_drifter().map(|d| d.equipped_count);

        session.equip(&GearId::Num(1), "VIII", 30);
        assert!(session.unequip(&GearId::Num(1)).is_some());
        assert_eq!(session.active_drifter().map(|d| d.equipped_count), before);
        assert!(session.active_drifter().unwrap().gear_slots().unwrap().is_empty(0));
        assert!(matches!(
            session.pending().last(),
            Some(PendingAction::UnequipGear { .. })
        ));
    }

    #[test]
    fn test_select_drifter_scopes_edits() {
        let mut session = session();
        assert!(session.select_drifter(4));
        session.equip(&GearId::Num(1), "IV", 30);

        assert_eq!(session.roster().drifter(1).map(|d| d.equipped_count), Some(0));
        assert_eq!(session.roster().drifter(4).map(|d| d.equipped_count), Some(1));
    }

    #[test]
    fn test_clear_queues_null_drifter() {
        let mut session = session();
        assert!(session.clear_drifter(1));
        assert_eq!(
            session.drain_outbox(),
            vec![PendingAction::UpdatePlayerDrifter {
                player_id: PlayerId::Num(42),
                drifter_id: None,
                slot_number: 1,
            }]
        );
    }

    #[test]
    fn test_action_json_shape() {
        let action = PendingAction::UnequipGear {
            player_id: PlayerId::from("p-1"),
            gear_id: GearId::Num(5),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "unequip_gear");
        assert_eq!(json["player_id"], "p-1");
        assert_eq!(json["gear_id"], 5);
    }
}
