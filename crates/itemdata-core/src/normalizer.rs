//! Row normalizer: one source table row becomes an [`ItemRow`] or is rejected

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lookups::SlotGroup;
use crate::merger::ResolvedProperties;
use crate::resolver::{PropertySlot, Resolver};
use crate::table::{CellValue, Record, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Property column groups per row (`prop1`..`prop12`)
const MAX_PROPS: usize = 12;

/// Which item table a row comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Unique,
    Set,
    Misc,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Unique, TableKind::Set, TableKind::Misc];

    pub fn label(self) -> &'static str {
        match self {
            TableKind::Unique => "unique",
            TableKind::Set => "set",
            TableKind::Misc => "misc",
        }
    }

    /// Columns holding the base type, in preference order
    fn base_columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Set => &["*item", "*type"],
            TableKind::Unique | TableKind::Misc => &["*type"],
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One exported equipment entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub name: String,
    /// Omitted for rings and amulets
    pub base: Option<String>,
    pub req_level: CellValue,
    /// Class restriction
    pub only: Option<String>,
    pub two_handed: bool,
    pub boss_item: Option<String>,
    /// Weapon family, or the slot name for everything else
    pub item_type: String,
    pub subtype: Option<String>,
    pub set: Option<String>,
    pub slot: SlotGroup,
    pub properties: ResolvedProperties,
    pub img: String,
}

impl ItemRow {
    /// Output fields in emission order. Resolved properties may overwrite
    /// the fixed fields; they keep the fixed field's position.
    pub fn fields(&self) -> ResolvedProperties {
        let mut fields = ResolvedProperties::new();
        fields.insert("name", self.name.as_str());
        if let Some(base) = &self.base {
            fields.insert("base", base.as_str());
        }
        fields.insert("req_level", self.req_level.clone());
        if let Some(only) = &self.only {
            fields.insert("only", only.as_str());
        }
        if self.two_handed {
            fields.insert("twoHanded", 1i64);
        }
        if let Some(tag) = &self.boss_item {
            fields.insert("boss_item", tag.as_str());
        }
        fields.insert("type", self.item_type.as_str());
        if let Some(subtype) = &self.subtype {
            fields.insert("subtype", subtype.as_str());
        }
        if let Some(set) = &self.set {
            fields.insert("set", set.as_str());
        }
        for (key, value) in &self.properties {
            fields.insert(key.as_str(), value.clone());
        }
        fields.insert("img", self.img.as_str());
        fields
    }
}

/// Strip digits and capitalise each word
pub fn display_base(raw: &str) -> String {
    let without_digits: String = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
    without_digits
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set bonus groups `N` present as `aprop{N}a` / `aprop{N}b` columns
fn set_bonus_groups(table: &Table) -> BTreeSet<u32> {
    table
        .columns
        .iter()
        .filter_map(|c| {
            let rest = c.name.strip_prefix("aprop")?;
            let digits = rest.strip_suffix('a').or_else(|| rest.strip_suffix('b'))?;
            digits.parse().ok()
        })
        .collect()
}

fn row_slots<'r>(record: &Record<'r>) -> Vec<PropertySlot<'r>> {
    (1..=MAX_PROPS)
        .map(|i| {
            PropertySlot::new(
                record.get(&format!("prop{}", i)),
                record.get(&format!("par{}", i)),
                record.get(&format!("min{}", i)),
                record.get(&format!("max{}", i)),
            )
        })
        .collect()
}

/// Turns rows into [`ItemRow`]s
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    resolver: Resolver<'a>,
}

impl<'a> Normalizer<'a> {
    pub fn new(resolver: Resolver<'a>) -> Self {
        Self { resolver }
    }

    /// Normalize every row of `table`, in table order
    pub fn normalize_table(&self, kind: TableKind, table: &Table, diags: &mut Diagnostics) -> Vec<ItemRow> {
        let bonus_groups = set_bonus_groups(table);
        table
            .records()
            .filter_map(|record| self.normalize_with_bonuses(kind, &record, &bonus_groups, diags))
            .collect()
    }

    /// Normalize one row; `None` when the row is rejected
    pub fn normalize(&self, kind: TableKind, record: &Record<'_>, diags: &mut Diagnostics) -> Option<ItemRow> {
        let bonus_groups = set_bonus_groups(record.table());
        self.normalize_with_bonuses(kind, record, &bonus_groups, diags)
    }

    fn normalize_with_bonuses(
        &self,
        kind: TableKind,
        record: &Record<'_>,
        bonus_groups: &BTreeSet<u32>,
        diags: &mut Diagnostics,
    ) -> Option<ItemRow> {
        let lookups = self.resolver.lookups();

        let raw_name = record.get_any(&["index", "name"]);
        if kind == TableKind::Unique && record.get("enabled") != "1" {
            tracing::debug!("line {}: '{}' is disabled", record.line(), raw_name);
            return None;
        }
        if raw_name.is_empty() {
            return None;
        }

        let name = lookups.correct_name(raw_name);
        if lookups.is_skipped(name) {
            tracing::debug!("skipping '{}'", name);
            return None;
        }

        let raw_base = record.get_any(kind.base_columns());
        if raw_base.is_empty() {
            diags.push(name, DiagnosticKind::RowRejected, format!("no base type on line {}", record.line()));
            return None;
        }
        let base = lookups.correct_name(raw_base);

        let Some(slot) = lookups.slot_group(base) else {
            if lookups.is_excluded_base(base) {
                tracing::debug!("'{}' has excluded base '{}'", name, base);
            } else {
                diags.push(name, DiagnosticKind::RowRejected, format!("unknown base type '{}'", base));
            }
            return None;
        };

        let family = match slot {
            SlotGroup::Weapon | SlotGroup::Offhand => lookups.weapon_family(base),
            _ => None,
        };
        let item_type = match (family, slot) {
            (Some(family), _) => family.to_string(),
            (None, SlotGroup::Offhand) => "shield".to_string(),
            (None, slot) => slot.title().to_lowercase(),
        };

        let mut properties = self
            .resolver
            .resolve_all(name, row_slots(record), Some(item_type.as_str()), diags);

        let mut set = None;
        if kind == TableKind::Set {
            let set_name = record.get("set");
            if !set_name.is_empty() {
                set = Some(set_name.to_string());
            }
            for group in bonus_groups {
                let bonus = self.set_bonus(name, record, *group, &item_type, diags);
                properties.combine(&bonus);
            }
        }

        Some(ItemRow {
            name: name.to_string(),
            base: (!slot.is_jewelry()).then(|| display_base(base)),
            req_level: CellValue::parse_numeric_or_string(record.get("lvl req")),
            only: lookups.class_for_base(raw_base).map(str::to_string),
            two_handed: lookups.is_two_handed(base),
            boss_item: lookups.boss_tag(name).map(str::to_string),
            item_type,
            subtype: lookups.subtype(base).map(str::to_string),
            set,
            slot,
            properties,
            img: name.replace(' ', "_"),
        })
    }

    /// Resolve the `a`/`b` property pair of set bonus group `group`, with
    /// keys suffixed by the number of pieces it takes.
    fn set_bonus(
        &self,
        name: &str,
        record: &Record<'_>,
        group: u32,
        item_type: &str,
        diags: &mut Diagnostics,
    ) -> ResolvedProperties {
        let columns: Vec<[String; 4]> = ["a", "b"]
            .iter()
            .map(|part| {
                [
                    format!("aprop{}{}", group, part),
                    format!("apar{}{}", group, part),
                    format!("amin{}{}", group, part),
                    format!("amax{}{}", group, part),
                ]
            })
            .collect();
        let slots = columns.iter().map(|[code, param, min, max]| {
            PropertySlot::new(record.get(code), record.get(param), record.get(min), record.get(max))
        });
        let resolved = self.resolver.resolve_all(name, slots, Some(item_type), diags);
        if resolved.is_empty() {
            return resolved;
        }

        let Some(pieces) = self.resolver.lookups().set_bonus_pieces(group) else {
            diags.push(
                name,
                DiagnosticKind::UnmappedSetBonus,
                format!("set bonus group {} has no piece count", group),
            );
            return ResolvedProperties::new();
        };
        resolved
            .iter()
            .map(|(key, value)| (format!("{}_set{}", key, pieces), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookups::Lookups;
    use crate::parser::parse_tsv_str;

    fn normalize_all(kind: TableKind, tsv: &str) -> (Vec<ItemRow>, Diagnostics) {
        let lookups = Lookups::new();
        let table = parse_tsv_str(tsv, "items.txt").unwrap();
        let mut diags = Diagnostics::new();
        let rows = Normalizer::new(Resolver::new(&lookups)).normalize_table(kind, &table, &mut diags);
        (rows, diags)
    }

    const UNIQUES: &str = "\
index\t*type\tenabled\tlvl req\tprop1\tpar1\tmin1\tmax1\tprop2\tpar2\tmin2\tmax2
Nagelring\tRing\t1\t7\tres-fire\t\t15\t30\tres-fire\t\t5\t5
Biggin's Bonnet\tCap\t0\t3\tac\t\t14\t14\t\t\t\t
The Reaper's Toll\tThresher\t1\t75\tpierce-cold\t\t25\t25\t\t\t\t
Lycander's Aim\tCeremonial Bow\t1\t42\tdex\t\t20\t20\t\t\t\t
Gheed's Fortune\tGrand Charm\t1\t62\tmag%\t\t20\t40\t\t\t\t
Mystery\tNo Such Base\t1\t1\tdex\t\t1\t1\t\t\t\t
Khalim's Will\tFlail\t1\t0\tdex\t\t1\t1\t\t\t\t
";

    #[test]
    fn test_disabled_rows_rejected() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        assert!(rows.iter().all(|r| r.name != "Biggin's Bonnet"));
    }

    #[test]
    fn test_ring_has_no_base_and_stacks_properties() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        let ring = rows.iter().find(|r| r.name == "Nagelring").unwrap();

        assert_eq!(ring.slot, SlotGroup::Ring1);
        assert_eq!(ring.base, None);
        assert_eq!(ring.item_type, "ring");
        assert_eq!(ring.req_level, CellValue::Integer(7));
        assert_eq!(ring.properties.get("fRes"), Some(&CellValue::Integer(35)));
        assert_eq!(ring.img, "Nagelring");
    }

    #[test]
    fn test_weapon_classification() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        let toll = rows.iter().find(|r| r.name == "The Reaper's Toll").unwrap();

        assert_eq!(toll.slot, SlotGroup::Weapon);
        assert_eq!(toll.base.as_deref(), Some("Thresher"));
        assert!(toll.two_handed);
        assert_eq!(toll.only, None);
        assert_eq!(toll.properties.get("enemy_cRes"), Some(&CellValue::Integer(-25)));
        assert_eq!(toll.img, "The_Reaper's_Toll");
    }

    #[test]
    fn test_class_restriction() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        let bow = rows.iter().find(|r| r.name == "Lycander's Aim").unwrap();
        assert_eq!(bow.only.as_deref(), Some("amazon"));
        assert_eq!(bow.item_type, "bow");
    }

    #[test]
    fn test_unknown_and_excluded_bases() {
        let (rows, diags) = normalize_all(TableKind::Unique, UNIQUES);

        assert!(rows.iter().all(|r| r.name != "Gheed's Fortune" && r.name != "Mystery"));
        assert_eq!(diags.count_of(DiagnosticKind::RowRejected), 1);
        assert_eq!(diags.iter().next().unwrap().item, "Mystery");
    }

    #[test]
    fn test_skip_list() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        assert!(rows.iter().all(|r| !r.name.contains("Khalim")));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_set_bonuses_use_piece_suffix() {
        let tsv = "\
index\tset\t*item\tlvl req\tprop1\tpar1\tmin1\tmax1\taprop1a\tapar1a\tamin1a\tamax1a\taprop2b\tapar2b\tamin2b\tamax2b\taprop7a\tapar7a\tamin7a\tamax7a
Sigon's Visor\tSigon's Complete Steel\tGreat Helm\t6\tac\t\t25\t25\tmana\t\t30\t30\tdex\t\t5\t5\tstr\t\t1\t1
";
        let (rows, diags) = normalize_all(TableKind::Set, tsv);
        let visor = &rows[0];

        assert_eq!(visor.set.as_deref(), Some("Sigon's Complete Steel"));
        assert_eq!(visor.properties.get("defense"), Some(&CellValue::Integer(25)));
        assert_eq!(visor.properties.get("mana_set2"), Some(&CellValue::Integer(30)));
        assert_eq!(visor.properties.get("dexterity_set3"), Some(&CellValue::Integer(5)));
        assert!(!visor.properties.contains_key("strength"));
        assert_eq!(diags.count_of(DiagnosticKind::UnmappedSetBonus), 1);
    }

    #[test]
    fn test_normalize_single_record() {
        let tsv = "\
index\tset\t*item\tlvl req\tprop1\tpar1\tmin1\tmax1\taprop1a\tapar1a\tamin1a\tamax1a
Angelic Halo\tAngelic Raiment\tRing\t12\tregen\t\t6\t6\tres-fire\t\t10\t10
";
        let lookups = Lookups::new();
        let table = parse_tsv_str(tsv, "SetItems.txt").unwrap();
        let record = table.records().next().unwrap();
        let mut diags = Diagnostics::new();

        let halo = Normalizer::new(Resolver::new(&lookups))
            .normalize(TableKind::Set, &record, &mut diags)
            .unwrap();
        assert_eq!(halo.slot, SlotGroup::Ring1);
        assert_eq!(halo.base, None);
        assert_eq!(halo.properties.get("fRes_set2"), Some(&CellValue::Integer(10)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_fields_order() {
        let (rows, _) = normalize_all(TableKind::Unique, UNIQUES);
        let toll = rows.iter().find(|r| r.name == "The Reaper's Toll").unwrap();

        let fields = toll.fields();
        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(
            keys,
            vec!["name", "base", "req_level", "twoHanded", "type", "enemy_cRes", "img"]
        );
    }

    #[test]
    fn test_display_base() {
        assert_eq!(display_base("war hammer"), "War Hammer");
        assert_eq!(display_base("Ring1"), "Ring");
        assert_eq!(display_base("  long   sword "), "Long Sword");
    }
}
