//! Read-only lookup tables, indexed once per run.
//!
//! The raw data lives in the submodules as constant slices; [`Lookups`]
//! turns them into hash maps with the key normalisation each table needs.

pub mod bases;
pub mod names;
pub mod properties;
pub mod skills;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Equipment slot an item is exported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotGroup {
    Helm,
    Armor,
    Gloves,
    Boots,
    Belt,
    Amulet,
    Ring1,
    Weapon,
    Offhand,
}

impl SlotGroup {
    /// All groups in output order
    pub const ALL: [SlotGroup; 9] = [
        SlotGroup::Helm,
        SlotGroup::Armor,
        SlotGroup::Gloves,
        SlotGroup::Boots,
        SlotGroup::Belt,
        SlotGroup::Amulet,
        SlotGroup::Ring1,
        SlotGroup::Weapon,
        SlotGroup::Offhand,
    ];

    /// Table spelling, e.g. `Ring1`
    pub fn name(self) -> &'static str {
        match self {
            SlotGroup::Helm => "Helm",
            SlotGroup::Armor => "Armor",
            SlotGroup::Gloves => "Gloves",
            SlotGroup::Boots => "Boots",
            SlotGroup::Belt => "Belt",
            SlotGroup::Amulet => "Amulet",
            SlotGroup::Ring1 => "Ring1",
            SlotGroup::Weapon => "Weapon",
            SlotGroup::Offhand => "Offhand",
        }
    }

    /// Output bucket key, e.g. `ring1`
    pub fn key(self) -> String {
        self.name().to_lowercase()
    }

    /// Header row title: the name without the slot digit
    pub fn title(self) -> String {
        self.name().replace('1', "")
    }

    pub fn from_name(name: &str) -> Option<SlotGroup> {
        let name = name.trim();
        SlotGroup::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(name))
    }

    /// Rings and amulets are exported without a base
    pub fn is_jewelry(self) -> bool {
        matches!(self, SlotGroup::Amulet | SlotGroup::Ring1)
    }
}

impl fmt::Display for SlotGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalise a base name for two-handed matching: lowercase, typographic
/// quotes and dashes folded, non-alphanumeric runs collapsed to one space.
pub fn normalize_base_key(name: &str) -> String {
    let folded: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect();

    let mut key = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.push(c);
        } else {
            pending_space = true;
        }
    }
    key
}

/// All lookup tables, indexed
#[derive(Debug, Clone)]
pub struct Lookups {
    property_codes: HashMap<&'static str, &'static str>,
    property_codes_lower: HashMap<String, &'static str>,
    canonical_keys: HashSet<&'static str>,
    slot_groups: HashMap<String, SlotGroup>,
    weapon_families: HashMap<String, &'static str>,
    subtypes: HashMap<String, &'static str>,
    two_handed: HashSet<String>,
    class_bases: Vec<(&'static str, HashSet<String>)>,
    name_corrections: HashMap<String, &'static str>,
    boss_items: HashMap<&'static str, &'static str>,
    skills_by_id: HashMap<u32, &'static str>,
    skills_by_name: HashMap<String, &'static str>,
    rune_ids: HashMap<String, &'static str>,
    rune_word_renames: HashMap<String, &'static str>,
    item_type_codes: HashMap<String, &'static str>,
}

impl Default for Lookups {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookups {
    pub fn new() -> Self {
        let name_corrections: HashMap<String, &'static str> = names::NAME_CORRECTIONS
            .iter()
            .map(|(raw, fixed)| (raw.to_lowercase(), *fixed))
            .collect();

        let mut property_codes_lower = HashMap::new();
        for (code, key) in properties::PROPERTY_CODES {
            property_codes_lower.entry(code.to_lowercase()).or_insert(*key);
        }

        // later entries override; corrected spellings resolve too
        let mut slot_groups = HashMap::new();
        for (base, group) in bases::BASE_SLOT_GROUPS {
            let Some(group) = SlotGroup::from_name(group) else {
                continue;
            };
            let lower = base.to_lowercase();
            if let Some(fixed) = name_corrections.get(&lower) {
                slot_groups.insert(fixed.to_lowercase(), group);
            }
            slot_groups.insert(lower, group);
        }

        let mut weapon_families = HashMap::new();
        for (family, members) in bases::WEAPON_FAMILIES {
            for base in *members {
                weapon_families.entry(base.to_lowercase()).or_insert(*family);
            }
        }

        let class_bases: Vec<(&'static str, HashSet<String>)> = bases::CLASS_BASES
            .iter()
            .map(|(class, members)| (*class, members.iter().map(|b| b.to_lowercase()).collect()))
            .collect();

        let mut skills_by_name: HashMap<String, &'static str> = skills::SKILL_IDS
            .iter()
            .map(|(_, name)| (name.to_lowercase(), *name))
            .collect();
        for (alias, name) in skills::SKILL_ALIASES {
            skills_by_name.insert(alias.to_lowercase(), *name);
        }

        Self {
            property_codes: properties::PROPERTY_CODES.iter().copied().collect(),
            property_codes_lower,
            canonical_keys: properties::PROPERTY_CODES.iter().map(|(_, key)| *key).collect(),
            slot_groups,
            weapon_families,
            subtypes: bases::BASE_SUBTYPES
                .iter()
                .map(|(base, sub)| (base.to_lowercase(), *sub))
                .collect(),
            two_handed: bases::TWO_HANDED_BASES
                .iter()
                .map(|b| normalize_base_key(b))
                .collect(),
            class_bases,
            name_corrections,
            boss_items: names::BOSS_ITEMS.iter().copied().collect(),
            skills_by_id: skills::SKILL_IDS.iter().copied().collect(),
            skills_by_name,
            rune_ids: names::RUNE_IDS
                .iter()
                .map(|(id, name)| (id.to_lowercase(), *name))
                .collect(),
            rune_word_renames: names::RUNE_WORD_RENAMES
                .iter()
                .map(|(raw, fixed)| (raw.to_lowercase(), *fixed))
                .collect(),
            item_type_codes: names::ITEM_TYPE_CODES
                .iter()
                .map(|(group, code)| (group.to_lowercase(), *code))
                .collect(),
        }
    }

    /// Canonical output key for a property code: exact match, then
    /// lowercase match, then the code itself if it already is a canonical key.
    pub fn canonical_key(&self, code: &str) -> Option<&'static str> {
        if let Some(key) = self.property_codes.get(code) {
            return Some(*key);
        }
        if let Some(key) = self.property_codes_lower.get(&code.to_lowercase()) {
            return Some(*key);
        }
        self.canonical_keys.get(code).copied()
    }

    pub fn slot_group(&self, base: &str) -> Option<SlotGroup> {
        self.slot_groups.get(&base.trim().to_lowercase()).copied()
    }

    /// Weapon family (`sword`, `axe`, `bow`, ...) of a base
    pub fn weapon_family(&self, base: &str) -> Option<&'static str> {
        self.weapon_families.get(&base.trim().to_lowercase()).copied()
    }

    pub fn subtype(&self, base: &str) -> Option<&'static str> {
        self.subtypes.get(&base.trim().to_lowercase()).copied()
    }

    pub fn is_two_handed(&self, base: &str) -> bool {
        self.two_handed.contains(&normalize_base_key(base))
    }

    /// Class that can exclusively equip `base`; first class in table order wins
    pub fn class_for_base(&self, base: &str) -> Option<&'static str> {
        let lower = base.to_lowercase();
        self.class_bases
            .iter()
            .find(|(_, members)| members.contains(&lower))
            .map(|(class, _)| *class)
    }

    /// Canonical spelling of an item or base name
    pub fn correct_name<'a>(&self, name: &'a str) -> &'a str {
        match self.name_corrections.get(&name.to_lowercase()) {
            Some(fixed) => *fixed,
            None => name,
        }
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        names::SKIPPED_NAMES.iter().any(|s| name.contains(s))
    }

    /// Bases of categories that are dropped without a diagnostic
    pub fn is_excluded_base(&self, base: &str) -> bool {
        let lower = base.to_lowercase();
        bases::EXCLUDED_BASE_PARTS.iter().any(|part| lower.contains(part))
    }

    pub fn boss_tag(&self, name: &str) -> Option<&'static str> {
        self.boss_items.get(name).copied()
    }

    /// Skill display name from a numeric id or a (case-insensitive) name
    pub fn skill_name(&self, param: &str) -> Option<&'static str> {
        let param = param.trim();
        if let Ok(id) = param.parse::<u32>() {
            return self.skills_by_id.get(&id).copied();
        }
        self.skills_by_name.get(&param.to_lowercase()).copied()
    }

    pub fn skill_tab(&self, param: &str) -> Option<&'static str> {
        param
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| skills::SKILL_TABS.get(i))
            .copied()
    }

    /// Rune name for a rune id such as `r08`
    pub fn rune_name(&self, id: &str) -> Option<&'static str> {
        self.rune_ids.get(&id.trim().to_lowercase()).copied()
    }

    /// In-game name of a rune word
    pub fn rune_word_name(&self, name: &str) -> String {
        self.rune_word_renames
            .get(&name.trim().to_lowercase())
            .map(|fixed| fixed.to_string())
            .unwrap_or_else(|| name.trim().to_string())
    }

    /// Rune word item-type code for an equipment group or weapon family
    pub fn item_type_code(&self, group: &str) -> Option<&'static str> {
        self.item_type_codes.get(&group.trim().to_lowercase()).copied()
    }

    /// Pieces needed for set bonus group `group`
    pub fn set_bonus_pieces(&self, group: u32) -> Option<u32> {
        names::SET_BONUS_PIECES
            .iter()
            .find(|(n, _)| *n == group)
            .map(|(_, pieces)| *pieces)
    }
}
