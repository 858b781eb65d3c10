//! Gear catalog browsing
//!
//! Filters the static gear catalog by category, search text, rarity, stat
//! affinity and weapon type, and orders the result common-to-legendary.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::item::{Category, GearId, GearItem, Rarity, StatAffinity};

/// Token that disables a filter
pub const ALL: &str = "all";

/// Rarity filter. Tokens match the item's rarity exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RarityFilter {
    #[default]
    All,
    Only(Rarity),
}

impl RarityFilter {
    pub fn parse(token: &str) -> Self {
        if token == ALL {
            RarityFilter::All
        } else {
            RarityFilter::Only(Rarity::parse(token))
        }
    }

    pub fn matches(&self, item: &GearItem) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Only(rarity) => &item.rarity == rarity,
        }
    }
}

/// Stat-affinity filter, only applied to armor categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatFilter {
    #[default]
    All,
    Only(StatAffinity),
    /// A stat name we do not know; matches nothing
    Unrecognized,
}

impl StatFilter {
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case(ALL) {
            return StatFilter::All;
        }
        StatAffinity::parse(token).map_or(StatFilter::Unrecognized, StatFilter::Only)
    }

    pub fn matches(&self, item: &GearItem) -> bool {
        match self {
            StatFilter::All => true,
            StatFilter::Only(stat) => item.has_stat_affinity(*stat),
            StatFilter::Unrecognized => false,
        }
    }
}

/// Weapon sub-type filter, only applied to weapons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WeaponTypeFilter {
    #[default]
    All,
    /// Lowercased `game_id` prefix, e.g. `sword`
    Only(String),
}

impl WeaponTypeFilter {
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case(ALL) {
            WeaponTypeFilter::All
        } else {
            WeaponTypeFilter::Only(token.to_ascii_lowercase())
        }
    }

    pub fn matches(&self, item: &GearItem) -> bool {
        match self {
            WeaponTypeFilter::All => true,
            WeaponTypeFilter::Only(kind) => item.weapon_type().is_some_and(|t| &t == kind),
        }
    }
}

/// Everything the catalog browser filters on
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category: Category,
    pub search: String,
    pub rarity: RarityFilter,
    pub stat: StatFilter,
    pub weapon_type: WeaponTypeFilter,
}

impl CatalogQuery {
    /// Query for one category with every other filter open
    pub fn new(category: Category) -> Self {
        Self {
            category,
            search: String::new(),
            rarity: RarityFilter::All,
            stat: StatFilter::All,
            weapon_type: WeaponTypeFilter::All,
        }
    }

    pub fn search(mut self, text: &str) -> Self {
        self.search = text.to_string();
        self
    }

    pub fn rarity(mut self, filter: RarityFilter) -> Self {
        self.rarity = filter;
        self
    }

    pub fn stat(mut self, filter: StatFilter) -> Self {
        self.stat = filter;
        self
    }

    pub fn weapon_type(mut self, filter: WeaponTypeFilter) -> Self {
        self.weapon_type = filter;
        self
    }

    fn matches_text(&self, item: &GearItem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.base_name.to_lowercase().contains(&needle)
            || item
                .skill_name
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
    }

    /// Check one item against every filter of this query
    pub fn matches(&self, item: &GearItem) -> bool {
        if item.category() != Some(self.category) {
            return false;
        }
        if !self.matches_text(item) || !self.rarity.matches(item) {
            return false;
        }
        if self.category.has_stat_affinity() && !self.stat.matches(item) {
            return false;
        }
        if self.category == Category::Weapon && !self.weapon_type.matches(item) {
            return false;
        }
        true
    }
}

/// Catalog ordering: rarity ascending, then base name
pub fn catalog_order(a: &GearItem, b: &GearItem) -> Ordering {
    a.rarity
        .sort_rank()
        .cmp(&b.rarity.sort_rank())
        .then_with(|| a.base_name.to_lowercase().cmp(&b.base_name.to_lowercase()))
        .then_with(|| a.base_name.cmp(&b.base_name))
}

/// Filter and sort a list of catalog items
pub fn filter_catalog<'a>(items: &'a [GearItem], query: &CatalogQuery) -> Vec<&'a GearItem> {
    let mut matched: Vec<&GearItem> = items.iter().filter(|item| query.matches(item)).collect();
    matched.sort_by(|a, b| catalog_order(a, b));
    matched
}

/// [`filter_catalog`] driven by raw filter tokens as the dashboard sends them.
/// Returns nothing for an unknown category.
pub fn filter_catalog_by<'a>(
    items: &'a [GearItem],
    category: &str,
    search: &str,
    rarity: &str,
    stat: &str,
    weapon_type: &str,
) -> Vec<&'a GearItem> {
    let Some(category) = Category::parse(category) else {
        return Vec::new();
    };
    let query = CatalogQuery::new(category)
        .search(search)
        .rarity(RarityFilter::parse(rarity))
        .stat(StatFilter::parse(stat))
        .weapon_type(WeaponTypeFilter::parse(weapon_type));
    filter_catalog(items, &query)
}

/// The static gear catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<GearItem>,
}

impl Catalog {
    pub fn new(items: Vec<GearItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GearItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id
    pub fn find(&self, id: &GearId) -> Option<&GearItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn filter(&self, query: &CatalogQuery) -> Vec<&GearItem> {
        filter_catalog(&self.items, query)
    }

    /// Count of items per category, in slot order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .map(|c| (*c, self.items.iter().filter(|i| i.category() == Some(*c)).count()))
            .collect()
    }
}
