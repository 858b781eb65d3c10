//! Player roster and gear power aggregation
//!
//! A player fields up to nine drifters. Total gear power is derived from
//! them on demand and never stored.

use serde::{Deserialize, Serialize};

use super::drifter::Drifter;

/// Number of roster positions
pub const ROSTER_SIZE: usize = 9;
/// Gear power is normalised over the five equipment slots
pub const POWER_DIVISOR: i64 = 5;

/// Raw power sum of one drifter's first five slots.
///
/// Only weapon and armor occupants with a tier count. Mod slots are never
/// looked at, and consumables in slot 4 are skipped by category.
pub fn drifter_power_sum(drifter: &Drifter) -> i64 {
    let Some(slots) = drifter.gear_slots() else {
        return 0;
    };
    slots
        .power_slots()
        .filter(|slot| slot.counts_toward_power())
        .filter_map(|slot| slot.gear_item.power())
        .sum()
}

/// Total gear power across a list of drifters: `floor(sum / 5)`
pub fn total_gear_power(drifters: &[Drifter]) -> i64 {
    let sum: i64 = drifters.iter().map(drifter_power_sum).sum();
    sum.div_euclid(POWER_DIVISOR)
}

/// The nine drifter positions of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Drifter>", into = "Vec<Drifter>")]
pub struct Roster {
    drifters: Vec<Drifter>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Drifter>> for Roster {
    fn from(drifters: Vec<Drifter>) -> Self {
        Self::from_drifters(drifters)
    }
}

impl From<Roster> for Vec<Drifter> {
    fn from(roster: Roster) -> Self {
        roster.drifters
    }
}

impl Roster {
    /// Nine unassigned positions
    pub fn new() -> Self {
        Self {
            drifters: (1..=ROSTER_SIZE as u8).map(Drifter::unassigned).collect(),
        }
    }

    /// Build a roster from backend records.
    ///
    /// A record whose `number` is 1-9 goes to that position. Records without
    /// a usable number, or whose position is already taken, fill the free
    /// positions in list order. Whatever does not fit is dropped.
    pub fn from_drifters(records: Vec<Drifter>) -> Self {
        let mut roster = Self::new();
        let mut filled = [false; ROSTER_SIZE];
        let mut unplaced = Vec::new();

        for record in records {
            match record.number.and_then(Self::index) {
                Some(index) if !filled[index] => {
                    filled[index] = true;
                    roster.place(index, record);
                }
                _ => unplaced.push(record),
            }
        }

        let mut free = (0..ROSTER_SIZE).filter(|&index| !filled[index]);
        let mut dropped = 0;
        for record in unplaced {
            match free.next() {
                Some(index) => roster.place(index, record),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!("Roster is full, dropped {} drifter records", dropped);
        }
        roster
    }

    fn place(&mut self, index: usize, record: Drifter) {
        if let Some(position) = self.drifters.get_mut(index) {
            let number = position.number;
            *position = Drifter { number, ..record };
        }
    }

    fn index(slot_number: u8) -> Option<usize> {
        let index = usize::from(slot_number).checked_sub(1)?;
        (index < ROSTER_SIZE).then_some(index)
    }

    /// Drifter at a 1-based roster position
    pub fn drifter(&self, slot_number: u8) -> Option<&Drifter> {
        self.drifters.get(Self::index(slot_number)?)
    }

    pub fn drifter_mut(&mut self, slot_number: u8) -> Option<&mut Drifter> {
        let index = Self::index(slot_number)?;
        self.drifters.get_mut(index)
    }

    pub fn drifters(&self) -> &[Drifter] {
        &self.drifters
    }

    /// Assigned drifters only
    pub fn assigned(&self) -> impl Iterator<Item = &Drifter> {
        self.drifters.iter().filter(|d| d.is_assigned())
    }

    /// Put a drifter into a roster position.
    ///
    /// Gear already in that position stays where it is; a position without
    /// gear slots gets nine empty ones. Returns false for a bad slot number.
    pub fn assign_drifter(&mut self, template: &Drifter, slot_number: u8) -> bool {
        let Some(target) = self.drifter_mut(slot_number) else {
            log::debug!("Ignoring assignment to roster slot {}", slot_number);
            return false;
        };
        let gear_slots = target.gear_slots.take().unwrap_or_default();
        *target = Drifter {
            number: Some(slot_number),
            gear_slots: Some(gear_slots),
            ..template.clone()
        };
        target.sync_equipped_count();
        log::debug!("Assigned {} to roster slot {}", target.display_name(), slot_number);
        true
    }

    /// Reset a roster position to an unassigned drifter with empty gear
    pub fn clear_drifter(&mut self, slot_number: u8) -> bool {
        match self.drifter_mut(slot_number) {
            Some(drifter) => {
                drifter.clear();
                log::debug!("Cleared roster slot {}", slot_number);
                true
            }
            None => false,
        }
    }

    /// Player's total gear power
    pub fn total_gear_power(&self) -> i64 {
        total_gear_power(&self.drifters)
    }
}
