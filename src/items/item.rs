//! Gear item definitions
//!
//! Catalog records as the guild backend serves them, plus the enums the
//! calculator keys on: category, rarity, tier and stat affinity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::power::compute_power;

/// Item level assumed when a record does not carry one
pub const DEFAULT_ITEM_LEVEL: i32 = 30;

/// Catalog identifier. The backend hands out both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GearId {
    Num(i64),
    Text(String),
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GearId::Num(n) => write!(f, "{}", n),
            GearId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for GearId {
    fn from(id: i64) -> Self {
        GearId::Num(id)
    }
}

impl From<i32> for GearId {
    fn from(id: i32) -> Self {
        GearId::Num(i64::from(id))
    }
}

impl From<&str> for GearId {
    fn from(id: &str) -> Self {
        GearId::Text(id.to_string())
    }
}

/// Gear categories. The category decides which slot an item may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weapon,
    Helmet,
    Chest,
    Boots,
    Consumable,
    Mod,
}

impl Category {
    /// Parse a backend category token. Tokens are compared exactly, so
    /// `"Weapon"` is not a category.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "weapon" => Some(Category::Weapon),
            "helmet" => Some(Category::Helmet),
            "chest" => Some(Category::Chest),
            "boots" => Some(Category::Boots),
            "consumable" => Some(Category::Consumable),
            "mod" => Some(Category::Mod),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Weapon => "weapon",
            Category::Helmet => "helmet",
            Category::Chest => "chest",
            Category::Boots => "boots",
            Category::Consumable => "consumable",
            Category::Mod => "mod",
        }
    }

    /// Fixed slot index for this category. Mods have four interchangeable
    /// slots and no fixed index.
    pub fn slot_index(&self) -> Option<usize> {
        match self {
            Category::Weapon => Some(0),
            Category::Helmet => Some(1),
            Category::Chest => Some(2),
            Category::Boots => Some(3),
            Category::Consumable => Some(4),
            Category::Mod => None,
        }
    }

    /// Weapon and armor pieces count toward gear power, mods and
    /// consumables never do
    pub fn counts_toward_power(&self) -> bool {
        !matches!(self, Category::Mod | Category::Consumable)
    }

    /// Stat-affinity filtering only makes sense for armor pieces
    pub fn has_stat_affinity(&self) -> bool {
        !matches!(self, Category::Weapon | Category::Mod | Category::Consumable)
    }

    /// Get all categories in slot order
    pub fn all() -> &'static [Category] {
        &[
            Category::Weapon,
            Category::Helmet,
            Category::Chest,
            Category::Boots,
            Category::Consumable,
            Category::Mod,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `gear_type` object attached to items and slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearType {
    #[serde(default)]
    pub category: Option<String>,
}

impl GearType {
    pub fn new(category: Category) -> Self {
        Self {
            category: Some(category.name().to_string()),
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::parse)
    }
}

/// Item rarity grades.
///
/// Tokens outside the known grades are kept verbatim so the catalog filter
/// can still match them exactly. They sort first and grant no bonus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    /// Missing or empty on the record
    #[default]
    Unknown,
    /// Anything else the backend sends, e.g. `"Rare"` or `"mythic"`
    Other(String),
}

impl From<Option<String>> for Rarity {
    fn from(token: Option<String>) -> Self {
        match token {
            Some(token) => Rarity::parse(&token),
            None => Rarity::Unknown,
        }
    }
}

impl From<Rarity> for Option<String> {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Unknown => None,
            Rarity::Other(token) => Some(token),
            known => Some(known.name().to_string()),
        }
    }
}

impl Rarity {
    /// Parse a rarity token exactly as the backend spells it
    pub fn parse(token: &str) -> Self {
        match token {
            "" => Rarity::Unknown,
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "epic" => Rarity::Epic,
            "legendary" => Rarity::Legendary,
            other => Rarity::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Unknown => "",
            Rarity::Other(token) => token,
        }
    }

    /// Get numeric value for sorting (higher = rarer, unrecognised first)
    pub fn sort_rank(&self) -> u8 {
        match self {
            Rarity::Unknown | Rarity::Other(_) => 0,
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::Epic => 4,
            Rarity::Legendary => 5,
        }
    }

    /// Power bonus granted at tier IV and above.
    /// Uncommon is absent from the bonus table and gets nothing.
    pub fn power_bonus(&self) -> i64 {
        match self {
            Rarity::Rare => 12,
            Rarity::Epic | Rarity::Legendary => 22,
            Rarity::Common | Rarity::Uncommon | Rarity::Unknown | Rarity::Other(_) => 0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Item tiers I through XI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
    XI,
}

impl Tier {
    /// Rank used when a tier token is not recognised
    pub const DEFAULT_RANK: u8 = 4;

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "I" => Some(Tier::I),
            "II" => Some(Tier::II),
            "III" => Some(Tier::III),
            "IV" => Some(Tier::IV),
            "V" => Some(Tier::V),
            "VI" => Some(Tier::VI),
            "VII" => Some(Tier::VII),
            "VIII" => Some(Tier::VIII),
            "IX" => Some(Tier::IX),
            "X" => Some(Tier::X),
            "XI" => Some(Tier::XI),
            _ => None,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Tier::all().get(usize::from(rank).checked_sub(1)?).copied()
    }

    pub fn token(&self) -> &'static str {
        match self {
            Tier::I => "I",
            Tier::II => "II",
            Tier::III => "III",
            Tier::IV => "IV",
            Tier::V => "V",
            Tier::VI => "VI",
            Tier::VII => "VII",
            Tier::VIII => "VIII",
            Tier::IX => "IX",
            Tier::X => "X",
            Tier::XI => "XI",
        }
    }

    /// 1-based rank
    pub fn rank(&self) -> u8 {
        *self as u8 + 1
    }

    /// Rank of a raw token, unknown tokens count as IV
    pub fn rank_of(token: &str) -> u8 {
        Tier::from_token(token)
            .map(|t| t.rank())
            .unwrap_or(Tier::DEFAULT_RANK)
    }

    /// Nominal base power shown next to the tier picker.
    /// Display only, the power formula derives its own base from the rank.
    pub fn nominal_base_power(&self) -> i32 {
        match self {
            Tier::I => 20,
            Tier::II => 40,
            Tier::III => 70,
            other => 90 + 20 * (i32::from(other.rank()) - 4),
        }
    }

    /// Nominal power change when moving from this tier to `to`
    pub fn power_delta(&self, to: Tier) -> i32 {
        to.nominal_base_power() - self.nominal_base_power()
    }

    pub fn all() -> &'static [Tier] {
        &[
            Tier::I,
            Tier::II,
            Tier::III,
            Tier::IV,
            Tier::V,
            Tier::VI,
            Tier::VII,
            Tier::VIII,
            Tier::IX,
            Tier::X,
            Tier::XI,
        ]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Armor stat affinity, encoded in the item's game id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatAffinity {
    Strength,
    Agility,
    Intelligence,
}

impl StatAffinity {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "strength" => Some(StatAffinity::Strength),
            "agility" => Some(StatAffinity::Agility),
            "intelligence" => Some(StatAffinity::Intelligence),
            _ => None,
        }
    }

    /// Marker embedded in `game_id`
    pub fn marker(&self) -> &'static str {
        match self {
            StatAffinity::Strength => "_str_",
            StatAffinity::Agility => "_dex_",
            StatAffinity::Intelligence => "_int_",
        }
    }

    pub fn all() -> &'static [StatAffinity] {
        &[
            StatAffinity::Strength,
            StatAffinity::Agility,
            StatAffinity::Intelligence,
        ]
    }
}

/// A catalog gear item. Equipped copies carry the chosen tier and item level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearItem {
    pub id: GearId,
    #[serde(default)]
    pub base_name: String,
    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub rarity: Rarity,
    /// Raw tier token, kept as sent so unknown tokens still reach the formula
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub item_level: Option<i32>,
    #[serde(default)]
    pub gear_type: Option<GearType>,
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub health_bonus: i32,
    #[serde(default)]
    pub energy_bonus: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl GearItem {
    /// Create a bare item with the given category
    pub fn new(id: impl Into<GearId>, base_name: &str, category: Category) -> Self {
        Self {
            id: id.into(),
            base_name: base_name.to_string(),
            skill_name: None,
            rarity: Rarity::Common,
            tier: None,
            item_level: None,
            gear_type: Some(GearType::new(category)),
            game_id: None,
            damage: 0,
            defense: 0,
            health_bonus: 0,
            energy_bonus: 0,
            description: None,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_game_id(mut self, game_id: &str) -> Self {
        self.game_id = Some(game_id.to_string());
        self
    }

    pub fn with_skill_name(mut self, skill_name: &str) -> Self {
        self.skill_name = Some(skill_name.to_string());
        self
    }

    /// Copy with the tier and level picked at equip time
    pub fn with_tier(mut self, tier: &str, item_level: i32) -> Self {
        self.tier = Some(tier.to_string());
        self.item_level = Some(item_level);
        self
    }

    /// Item-level category
    pub fn category(&self) -> Option<Category> {
        self.gear_type.as_ref().and_then(GearType::category)
    }

    /// Tier token, if present and non-empty
    pub fn tier_token(&self) -> Option<&str> {
        self.tier.as_deref().filter(|t| !t.is_empty())
    }

    pub fn item_level_or_default(&self) -> i32 {
        self.item_level.unwrap_or(DEFAULT_ITEM_LEVEL)
    }

    /// Power of this item at its stored tier and level.
    /// Items without a tier have no power.
    pub fn power(&self) -> Option<i64> {
        self.tier_token()
            .map(|tier| compute_power(tier, &self.rarity, self.item_level_or_default()))
    }

    /// Weapon sub-type: the part of `game_id` before the first underscore
    pub fn weapon_type(&self) -> Option<String> {
        self.game_id
            .as_deref()
            .and_then(|id| id.split('_').next())
            .map(str::to_ascii_lowercase)
    }

    /// First stat affinity marker found in `game_id`
    pub fn stat_affinity(&self) -> Option<StatAffinity> {
        let game_id = self.game_id.as_deref()?;
        StatAffinity::all()
            .iter()
            .copied()
            .find(|stat| game_id.contains(stat.marker()))
    }

    pub fn has_stat_affinity(&self, stat: StatAffinity) -> bool {
        self.game_id
            .as_deref()
            .is_some_and(|id| id.contains(stat.marker()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranks() {
        assert_eq!(Tier::I.rank(), 1);
        assert_eq!(Tier::XI.rank(), 11);
        assert_eq!(Tier::rank_of("VII"), 7);
        assert_eq!(Tier::rank_of("XII"), 4);
        assert_eq!(Tier::rank_of("iv"), 4);
        assert_eq!(Tier::from_rank(3), Some(Tier::III));
        assert_eq!(Tier::from_rank(0), None);
        assert_eq!(Tier::from_rank(12), None);
    }

    #[test]
    fn test_nominal_power_delta() {
        assert_eq!(Tier::IV.nominal_base_power(), 90);
        assert_eq!(Tier::XI.nominal_base_power(), 230);
        assert_eq!(Tier::II.power_delta(Tier::III), 30);
        assert_eq!(Tier::V.power_delta(Tier::IV), -20);
    }

    #[test]
    fn test_rarity_parse_and_rank() {
        assert_eq!(Rarity::parse("epic"), Rarity::Epic);
        assert_eq!(Rarity::parse("Epic"), Rarity::Other("Epic".to_string()));
        assert_eq!(Rarity::parse(""), Rarity::Unknown);
        assert!(Rarity::Unknown.sort_rank() < Rarity::Common.sort_rank());
        assert_eq!(Rarity::parse("mythic").sort_rank(), 0);
        assert_eq!(Rarity::parse("Rare").power_bonus(), 0);
        assert!(Rarity::Epic.sort_rank() < Rarity::Legendary.sort_rank());
        assert_eq!(Rarity::Uncommon.power_bonus(), 0);
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "id": 17,
            "base_name": "Ashen Blade",
            "skill_name": "Cinder Slash",
            "rarity": "mythic",
            "gear_type": {"category": "weapon"},
            "game_id": "Sword_ashen_01",
            "damage": 40,
            "defense": 0,
            "health_bonus": 0,
            "energy_bonus": 5
        }"#;
        let item: GearItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, GearId::Num(17));
        assert_eq!(item.rarity, Rarity::Other("mythic".to_string()));
        assert_eq!(item.category(), Some(Category::Weapon));
        assert_eq!(item.weapon_type().as_deref(), Some("sword"));
        assert_eq!(item.power(), None);
    }

    #[test]
    fn test_rarity_tokens_kept_verbatim() {
        let items: Vec<GearItem> = serde_json::from_str(
            r#"[{"id": 1, "rarity": "Rare"}, {"id": 2, "rarity": null}, {"id": 3}, {"id": 4, "rarity": "epic"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].rarity, Rarity::Other("Rare".to_string()));
        assert_eq!(items[1].rarity, Rarity::Unknown);
        assert_eq!(items[2].rarity, Rarity::Unknown);
        assert_eq!(items[3].rarity, Rarity::Epic);

        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["rarity"], "Rare");
        let json = serde_json::to_value(&items[2]).unwrap();
        assert!(json["rarity"].is_null());
    }

    #[test]
    fn test_category_tokens_are_exact() {
        assert_eq!(Category::parse("consumable"), Some(Category::Consumable));
        assert_eq!(Category::parse("Consumable"), None);
        assert_eq!(Category::parse(" weapon"), None);
        let gear_type = GearType {
            category: Some("Weapon".to_string()),
        };
        assert_eq!(gear_type.category(), None);
    }

    #[test]
    fn test_string_ids() {
        let item: GearItem = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(item.id, GearId::from("abc"));
        assert_eq!(item.category(), None);
    }

    #[test]
    fn test_stat_affinity() {
        let item = GearItem::new(1, "Warden Helm", Category::Helmet).with_game_id("helm_dex_warden");
        assert_eq!(item.stat_affinity(), Some(StatAffinity::Agility));
        assert!(item.has_stat_affinity(StatAffinity::Agility));
        assert!(!item.has_stat_affinity(StatAffinity::Strength));

        let bare = GearItem::new(2, "Plain Helm", Category::Helmet);
        assert_eq!(bare.stat_affinity(), None);
    }

    #[test]
    fn test_empty_tier_has_no_power() {
        let item = GearItem::new(1, "Blade", Category::Weapon).with_tier("", 30);
        assert_eq!(item.power(), None);
    }
}
