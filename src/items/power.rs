//! Gear power formula
//!
//! Converts an item's tier, rarity and level into a power score. Everything
//! is computed in `i64` so any `i32` item level from the backend fits.

use super::item::{Rarity, Tier};

/// Base power for tiers II and lower
const LOW_TIER_BASE: i64 = 40;
/// Base power for tier III
const TIER_III_BASE: i64 = 70;
/// Base power at tier IV, each tier above adds `TIER_STEP`
const TIER_IV_BASE: i64 = 90;
const TIER_STEP: i64 = 20;
/// Power gained per item level above 1
const LEVEL_STEP: i64 = 2;

/// Base power for a tier rank. Rarity only matters from rank 4 up.
pub fn base_power(rank: u8, rarity: &Rarity) -> i64 {
    match rank {
        2 => LOW_TIER_BASE,
        3 => TIER_III_BASE,
        r if r >= 4 => TIER_IV_BASE + TIER_STEP * (i64::from(r) - 4) + rarity.power_bonus(),
        _ => LOW_TIER_BASE,
    }
}

/// Power from item level. Not clamped: levels below 1 go negative.
pub fn level_bonus(item_level: i32) -> i64 {
    LEVEL_STEP * (i64::from(item_level) - 1)
}

/// Compute the power of an item from its raw tier token.
/// Unknown tokens are treated as tier IV.
pub fn compute_power(tier: &str, rarity: &Rarity, item_level: i32) -> i64 {
    base_power(Tier::rank_of(tier), rarity) + level_bonus(item_level)
}

/// Same as [`compute_power`] for an already parsed tier
pub fn tier_power(tier: Tier, rarity: &Rarity, item_level: i32) -> i64 {
    base_power(tier.rank(), rarity) + level_bonus(item_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rarities() -> Vec<Rarity> {
        vec![
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Unknown,
            Rarity::parse("mythic"),
        ]
    }

    #[test]
    fn test_fixed_low_tiers_ignore_rarity() {
        for rarity in &all_rarities() {
            assert_eq!(compute_power("II", rarity, 30), 40 + 58);
            assert_eq!(compute_power("III", rarity, 30), 70 + 58);
            assert_eq!(compute_power("I", rarity, 1), 40);
        }
    }

    #[test]
    fn test_tier_iv_and_up() {
        assert_eq!(compute_power("IV", &Rarity::Common, 1), 90);
        assert_eq!(compute_power("IV", &Rarity::Rare, 1), 102);
        assert_eq!(compute_power("IV", &Rarity::Uncommon, 1), 90);
        assert_eq!(compute_power("V", &Rarity::Epic, 30), 190);
        assert_eq!(compute_power("VII", &Rarity::Legendary, 30), 230);
        assert_eq!(compute_power("XI", &Rarity::Common, 1), 230);
    }

    #[test]
    fn test_unknown_tier_defaults_to_iv() {
        for token in ["", "iv", "XII", "tier4", "0"] {
            for rarity in &all_rarities() {
                assert_eq!(
                    compute_power(token, rarity, 17),
                    compute_power("IV", rarity, 17)
                );
            }
        }
    }

    #[test]
    fn test_level_bonus_unclamped() {
        assert_eq!(level_bonus(1), 0);
        assert_eq!(level_bonus(30), 58);
        assert_eq!(level_bonus(0), -2);
        assert_eq!(compute_power("II", &Rarity::Common, -4), 30);
    }

    #[test]
    fn test_extreme_levels_do_not_overflow() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);
        assert_eq!(level_bonus(i32::MAX), 2 * (max - 1));
        assert_eq!(level_bonus(i32::MIN), 2 * (min - 1));
        assert_eq!(compute_power("IV", &Rarity::Epic, i32::MAX), 112 + 2 * (max - 1));
        assert_eq!(compute_power("II", &Rarity::Common, i32::MIN), 40 + 2 * (min - 1));
    }

    #[test]
    fn test_tier_power_matches_tokens() {
        for tier in Tier::all() {
            assert_eq!(
                tier_power(*tier, &Rarity::Epic, 12),
                compute_power(tier.token(), &Rarity::Epic, 12)
            );
        }
    }
}
