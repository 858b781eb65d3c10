//! Built-in sample catalog
//!
//! A small slice of the gear catalog, used when no catalog file is configured
//! and as the seed for `export-defaults`.

use crate::items::{Catalog, Category, GearItem, Rarity};

fn gear(
    id: i64,
    base_name: &str,
    skill_name: &str,
    category: Category,
    rarity: Rarity,
    game_id: &str,
) -> GearItem {
    GearItem::new(id, base_name, category)
        .with_rarity(rarity)
        .with_skill_name(skill_name)
        .with_game_id(game_id)
}

/// The built-in catalog
pub fn default_catalog() -> Catalog {
    let mut items = vec![
        // Weapons
        gear(101, "Ashen Longsword", "Cinder Cleave", Category::Weapon, Rarity::Epic, "sword_ashen_longsword"),
        gear(102, "Iron Broadsword", "Shield Breaker", Category::Weapon, Rarity::Common, "sword_iron_broadsword"),
        gear(103, "Warden Longbow", "Piercing Volley", Category::Weapon, Rarity::Rare, "bow_warden_longbow"),
        gear(104, "Ember Staff", "Flame Burst", Category::Weapon, Rarity::Legendary, "staff_ember"),
        gear(105, "Rusted Spear", "Lunge", Category::Weapon, Rarity::Uncommon, "spear_rusted"),
        // Helmets
        gear(201, "Bulwark Helm", "Iron Will", Category::Helmet, Rarity::Rare, "helmet_str_bulwark"),
        gear(202, "Scout Hood", "Keen Eye", Category::Helmet, Rarity::Common, "helmet_dex_scout"),
        gear(203, "Oracle Circlet", "Clarity", Category::Helmet, Rarity::Epic, "helmet_int_oracle"),
        // Chests
        gear(301, "Bulwark Plate", "Bastion", Category::Chest, Rarity::Epic, "chest_str_bulwark"),
        gear(302, "Scout Jerkin", "Evasion", Category::Chest, Rarity::Uncommon, "chest_dex_scout"),
        gear(303, "Oracle Robe", "Mana Flow", Category::Chest, Rarity::Legendary, "chest_int_oracle"),
        // Boots
        gear(401, "Bulwark Greaves", "Stand Firm", Category::Boots, Rarity::Common, "boots_str_bulwark"),
        gear(402, "Scout Treads", "Sprint", Category::Boots, Rarity::Rare, "boots_dex_scout"),
        // Consumables
        gear(501, "Field Ration", "Recover", Category::Consumable, Rarity::Common, "consumable_ration"),
        gear(502, "Ash Tonic", "Second Wind", Category::Consumable, Rarity::Rare, "consumable_ash_tonic"),
        // Mods
        gear(601, "Vital Core", "Fortify", Category::Mod, Rarity::Uncommon, "mod_vital_core"),
        gear(602, "Flux Capacitor", "Overcharge", Category::Mod, Rarity::Epic, "mod_flux_capacitor"),
    ];

    for item in &mut items {
        match item.category() {
            Some(Category::Weapon) => item.damage = 40,
            Some(Category::Helmet | Category::Boots) => item.defense = 12,
            Some(Category::Chest) => {
                item.defense = 25;
                item.health_bonus = 50;
            }
            Some(Category::Mod) => item.energy_bonus = 10,
            _ => {}
        }
    }

    Catalog::new(items)
}
