//! Drifters and the player roster

pub mod drifter;
pub mod roster;

pub use drifter::{Drifter, DrifterId, BaseStats, GearBonuses};
pub use roster::{Roster, total_gear_power, drifter_power_sum, ROSTER_SIZE};
