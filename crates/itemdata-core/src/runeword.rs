//! Rune word book: rune sequences, intrinsic rune word stats and per-rune
//! socket bonuses, built once per run from the rune word and gem tables.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::Result;
use crate::lookups::Lookups;
use crate::merger::{combine, ResolvedProperties};
use crate::resolver::{PropertySlot, Resolver};
use crate::table::{Record, Table};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;

/// Rune and item-type columns per rune word row
const MAX_RUNES: usize = 7;
/// `T1*` property columns per rune word row
const MAX_RUNEWORD_PROPS: usize = 7;
/// `{slot}Mod*` columns per gem row
const MAX_GEM_MODS: usize = 3;

/// A rune word variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuneWord {
    pub name: String,
    /// Rune names in socket order
    pub runes: Vec<String>,
    /// Item-type codes this variant applies to
    pub item_types: Vec<String>,
    pub rwstats: ResolvedProperties,
}

impl RuneWord {
    fn applies_to(&self, code: &str) -> bool {
        self.item_types.iter().any(|t| t.eq_ignore_ascii_case(code))
    }
}

/// Bonus a single rune grants in each socket target
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuneStats {
    pub weapon: ResolvedProperties,
    pub armor: ResolvedProperties,
    pub shield: ResolvedProperties,
}

/// Which bundle of [`RuneStats`] a socket target uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketTarget {
    Weapon,
    Armor,
    Shield,
}

impl SocketTarget {
    /// Socket target for an equipment group or weapon family
    pub fn for_group(group: &str, lookups: &Lookups) -> Option<SocketTarget> {
        let group = group.trim().to_lowercase();
        if group == "weapon" || is_weapon_family(&group) || lookups.weapon_family(&group).is_some() {
            return Some(SocketTarget::Weapon);
        }
        match group.as_str() {
            "armor" | "helm" | "tors" => Some(SocketTarget::Armor),
            "shield" | "shld" | "offhand" => Some(SocketTarget::Shield),
            _ => None,
        }
    }
}

fn is_weapon_family(group: &str) -> bool {
    crate::lookups::bases::WEAPON_FAMILIES
        .iter()
        .any(|(family, _)| *family == group)
}

#[derive(Debug, Clone)]
enum Entry {
    Single(RuneWord),
    /// Same name, different item-type applicability, in table order
    Bucket(Vec<RuneWord>),
}

/// All rune words of a run, keyed by lowercase name
#[derive(Debug, Clone, Default)]
pub struct RuneWordBook {
    entries: IndexMap<String, Entry>,
    rune_stats: IndexMap<String, RuneStats>,
}

impl RuneWordBook {
    /// Build from the rune word table and, optionally, the gem table
    pub fn from_tables(
        runewords: &Table,
        gems: Option<&Table>,
        lookups: &Lookups,
        diags: &mut Diagnostics,
    ) -> Result<Self> {
        runewords.require_column("Rune Name")?;
        runewords.require_column("complete")?;

        let resolver = Resolver::new(lookups);
        let mut book = RuneWordBook::default();

        for record in runewords.records() {
            if record.get("complete") != "1" {
                continue;
            }
            let raw_name = record.get("Rune Name");
            if raw_name.is_empty() {
                continue;
            }
            let runeword = read_runeword(&record, &lookups.rune_word_name(raw_name), &resolver, diags);
            book.insert(runeword);
        }

        if let Some(gems) = gems {
            gems.require_column("letter")?;
            for record in gems.records() {
                let letter = record.get("letter");
                if letter.is_empty() {
                    continue;
                }
                let stats = RuneStats {
                    weapon: read_gem_mods(&record, "weapon", letter, &resolver, diags),
                    armor: read_gem_mods(&record, "helm", letter, &resolver, diags),
                    shield: read_gem_mods(&record, "shield", letter, &resolver, diags),
                };
                book.rune_stats.insert(letter.to_string(), stats);
            }
        }

        tracing::info!(
            "loaded {} rune words ({} variants), {} runes",
            book.len(),
            book.variant_count(),
            book.rune_stats.len()
        );
        Ok(book)
    }

    fn insert(&mut self, runeword: RuneWord) {
        let key = runeword.name.to_lowercase();
        match self.entries.swap_remove(&key) {
            None => {
                self.entries.insert(key, Entry::Single(runeword));
            }
            Some(Entry::Single(first)) => {
                tracing::debug!("rune word '{}' has several item-type variants", runeword.name);
                self.entries.insert(key, Entry::Bucket(vec![first, runeword]));
            }
            Some(Entry::Bucket(mut variants)) => {
                variants.push(runeword);
                self.entries.insert(key, Entry::Bucket(variants));
            }
        }
    }

    /// Number of distinct rune word names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rune word rows, counting every variant
    pub fn variant_count(&self) -> usize {
        self.entries
            .values()
            .map(|e| match e {
                Entry::Single(_) => 1,
                Entry::Bucket(v) => v.len(),
            })
            .sum()
    }

    pub fn rune_stats(&self, rune: &str) -> Option<&RuneStats> {
        self.rune_stats.get(rune)
    }

    /// Rune word `name` for an item of `group`. The result is an owned copy;
    /// with a group, each socketed rune's bonus for that group is merged in.
    pub fn get_runeword(
        &self,
        name: &str,
        group: Option<&str>,
        lookups: &Lookups,
        diags: &mut Diagnostics,
        item: &str,
    ) -> Option<RuneWord> {
        let name = lookups.rune_word_name(name);
        let Some(entry) = self.entries.get(&name.to_lowercase()) else {
            diags.push(item, DiagnosticKind::UnknownRuneWord, format!("no rune word '{}'", name));
            return None;
        };

        let mut runeword = match entry {
            Entry::Single(runeword) => runeword.clone(),
            Entry::Bucket(variants) => self.pick_variant(&name, variants, group, lookups, diags, item)?,
        };

        let Some(group) = group.filter(|g| !g.trim().is_empty()) else {
            return Some(runeword);
        };
        let Some(target) = SocketTarget::for_group(group, lookups) else {
            diags.push(
                item,
                DiagnosticKind::UnknownItemType,
                format!("no socket bonus type for group '{}'", group),
            );
            return Some(runeword);
        };

        let mut socketed = ResolvedProperties::new();
        for rune in runeword.runes.iter().filter(|r| !r.is_empty()) {
            match self.rune_stats.get(rune) {
                Some(stats) => socketed.combine(match target {
                    SocketTarget::Weapon => &stats.weapon,
                    SocketTarget::Armor => &stats.armor,
                    SocketTarget::Shield => &stats.shield,
                }),
                None => tracing::debug!("no socket bonus known for rune '{}'", rune),
            }
        }
        runeword.rwstats = combine(&runeword.rwstats, &socketed);
        Some(runeword)
    }

    fn pick_variant(
        &self,
        name: &str,
        variants: &[RuneWord],
        group: Option<&str>,
        lookups: &Lookups,
        diags: &mut Diagnostics,
        item: &str,
    ) -> Option<RuneWord> {
        let group = group.unwrap_or("").trim();
        if group.is_empty() {
            return variants.first().cloned();
        }
        let family = lookups.weapon_family(group).unwrap_or(group);
        let Some(code) = lookups.item_type_code(family) else {
            diags.push(
                item,
                DiagnosticKind::UnknownItemType,
                format!("rune word '{}': no item type for group '{}'", name, group),
            );
            return None;
        };

        let found = variants
            .iter()
            .find(|v| v.applies_to(code))
            .or_else(|| match code {
                "swor" => variants.iter().find(|v| v.applies_to("2hsw")),
                _ => None,
            });
        match found {
            Some(variant) => Some(variant.clone()),
            None => {
                diags.push(
                    item,
                    DiagnosticKind::UnknownRuneWord,
                    format!("rune word '{}' has no variant for item type '{}'", name, code),
                );
                None
            }
        }
    }

    /// Rune word name -> runes, sorted case-insensitively. Names with several
    /// variants use their first variant's runes.
    pub fn rune_sequences(&self) -> Vec<(String, Vec<String>)> {
        let mut singles = Vec::new();
        let mut buckets = Vec::new();
        for entry in self.entries.values() {
            match entry {
                Entry::Single(rw) => singles.push((rw.name.clone(), rw.runes.clone())),
                Entry::Bucket(variants) => {
                    if let Some(first) = variants.first() {
                        buckets.push((first.name.clone(), first.runes.clone()));
                    }
                }
            }
        }
        singles.extend(buckets);
        singles.sort_by_key(|(name, _)| name.to_lowercase());
        singles
    }

    /// `var runewords = {...};` keyed by sanitised name
    pub fn render_runewords_js(&self) -> String {
        let lines: Vec<String> = self
            .rune_sequences()
            .into_iter()
            .map(|(name, runes)| {
                let runes: Vec<String> = runes.iter().map(|r| format!("\"{}\"", r)).collect();
                format!("\t{}:[{}]", sanitize_name(&name), runes.join(","))
            })
            .collect();

        let mut out = String::from("var runewords = {\n");
        if !lines.is_empty() {
            out.push_str(&lines.join(",\n"));
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }

    /// Per-rune listing of weapon, armor/helm and shield bonuses
    pub fn describe_rune_stats(&self) -> String {
        let mut runes: Vec<(&String, &RuneStats)> = self.rune_stats.iter().collect();
        runes.sort_by_key(|(name, _)| name.to_lowercase());

        let mut out = String::new();
        for (name, stats) in runes {
            let _ = writeln!(out, "{}", name);
            for (label, bundle) in [
                ("Weapon", &stats.weapon),
                ("Armor/Helm", &stats.armor),
                ("Shield", &stats.shield),
            ] {
                let _ = writeln!(out, "  {}:", label);
                describe_bundle(&mut out, bundle);
            }
            out.push('\n');
        }
        out
    }
}

fn describe_bundle(out: &mut String, bundle: &ResolvedProperties) {
    if bundle.is_empty() {
        out.push_str("    (none)\n");
        return;
    }
    let mut entries: Vec<_> = bundle.iter().collect();
    entries.sort_by_key(|(key, _)| key.to_lowercase());
    for (key, value) in entries {
        let _ = writeln!(out, "    - {}: {}", key, value);
    }
}

/// JS identifier form of a rune word name
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_").replace('\'', "")
}

fn read_runeword(record: &Record<'_>, name: &str, resolver: &Resolver<'_>, diags: &mut Diagnostics) -> RuneWord {
    let lookups = resolver.lookups();
    let runes = (1..=MAX_RUNES)
        .map(|i| record.get(&format!("Rune{}", i)))
        .filter(|id| !id.is_empty())
        .map(|id| lookups.rune_name(id).unwrap_or(id).to_string())
        .collect();
    let item_types = (1..=MAX_RUNES)
        .map(|i| record.get(&format!("itype{}", i)))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let columns: Vec<[String; 4]> = (1..=MAX_RUNEWORD_PROPS)
        .map(|i| {
            [
                format!("T1Code{}", i),
                format!("T1Param{}", i),
                format!("T1Min{}", i),
                format!("T1Max{}", i),
            ]
        })
        .collect();
    let slots = columns.iter().map(|[code, param, min, max]| {
        PropertySlot::new(record.get(code), record.get(param), record.get(min), record.get(max))
    });
    let rwstats = resolver.resolve_all(name, slots, None, diags);

    RuneWord {
        name: name.to_string(),
        runes,
        item_types,
        rwstats,
    }
}

fn read_gem_mods(
    record: &Record<'_>,
    slot: &str,
    rune: &str,
    resolver: &Resolver<'_>,
    diags: &mut Diagnostics,
) -> ResolvedProperties {
    let columns: Vec<[String; 4]> = (1..=MAX_GEM_MODS)
        .map(|i| {
            [
                format!("{}Mod{}Code", slot, i),
                format!("{}Mod{}Param", slot, i),
                format!("{}Mod{}Min", slot, i),
                format!("{}Mod{}Max", slot, i),
            ]
        })
        .collect();
    let slots = columns.iter().map(|[code, param, min, max]| {
        PropertySlot::new(record.get(code), record.get(param), record.get(min), record.get(max))
    });
    resolver.resolve_all(rune, slots, None, diags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tsv_str;
    use crate::table::CellValue;

    const RUNEWORDS: &str = "\
Name\tRune Name\tcomplete\titype1\titype2\tRune1\tRune2\tT1Code1\tT1Min1\tT1Max1\tT1Code2\tT1Min2\tT1Max2
Runeword1\tStealth\t1\ttors\t\tr07\tr13\tcast1\t25\t25\tdex\t6\t6
Runeword2\tSpirit\t1\tswor\t\tr07\tr10\tcast1\t25\t35\t\t\t
Runeword3\tSpirit\t1\tshld\t\tr07\tr10\tcast1\t25\t35\tres-cold\t30\t30
Runeword4\tUnfinished\t0\ttors\t\tr01\t\tdex\t1\t1\t\t\t
Runeword5\tWidowmaker\t1\tbow\t\tr33\t\tdex\t3\t3\t\t\t
";

    const GEMS: &str = "\
name\tletter\tweaponMod1Code\tweaponMod1Min\tweaponMod1Max\thelmMod1Code\thelmMod1Min\thelmMod1Max\tshieldMod1Code\tshieldMod1Min\tshieldMod1Max
Tal Rune\tTal\tres-pois\t75\t75\tres-pois\t30\t30\tres-pois\t35\t35
Thul Rune\tThul\tres-cold\t3\t14\tres-cold\t30\t30\tres-cold\t35\t35
Shael Rune\tShael\tswing1\t20\t20\tbalance1\t20\t20\tbalance1\t20\t20
Chipped Ruby\t\tdmg-fire\t3\t4\t\t\t\t\t\t
";

    fn book(diags: &mut Diagnostics) -> (RuneWordBook, Lookups) {
        let lookups = Lookups::new();
        let runewords = parse_tsv_str(RUNEWORDS, "Runes.txt").unwrap();
        let gems = parse_tsv_str(GEMS, "Gems.txt").unwrap();
        let book = RuneWordBook::from_tables(&runewords, Some(&gems), &lookups, diags).unwrap();
        (book, lookups)
    }

    #[test]
    fn test_incomplete_rows_skipped_and_names_corrected() {
        let mut diags = Diagnostics::new();
        let (book, _) = book(&mut diags);

        let names: Vec<String> = book.rune_sequences().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Grief", "Spirit", "Stealth"]);
        assert_eq!(book.variant_count(), 4);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_single_runeword_without_group() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let rw = book.get_runeword("Stealth", None, &lookups, &mut diags, "test").unwrap();
        assert_eq!(rw.runes, vec!["Tal", "Shael"]);
        assert_eq!(rw.rwstats.get("fcr"), Some(&CellValue::Integer(25)));
        assert_eq!(rw.rwstats.get("pRes"), None);
    }

    #[test]
    fn test_socket_bonuses_merged_for_group() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let rw = book.get_runeword("Stealth", Some("armor"), &lookups, &mut diags, "test").unwrap();
        assert_eq!(rw.rwstats.get("pRes"), Some(&CellValue::Integer(30)));
        assert_eq!(rw.rwstats.get("fhr"), Some(&CellValue::Integer(20)));
        assert_eq!(rw.rwstats.get("dexterity"), Some(&CellValue::Integer(6)));
    }

    #[test]
    fn test_lookup_does_not_mutate_book() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let _ = book.get_runeword("Stealth", Some("armor"), &lookups, &mut diags, "test");
        let again = book.get_runeword("Stealth", None, &lookups, &mut diags, "test").unwrap();
        assert_eq!(again.rwstats.get("pRes"), None);
    }

    #[test]
    fn test_bucketed_runeword_for_shield() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let rw = book.get_runeword("Spirit", Some("shield"), &lookups, &mut diags, "test").unwrap();
        assert_eq!(rw.item_types, vec!["shld"]);
        // intrinsic 30 plus Thul's shield bonus of 35
        assert_eq!(rw.rwstats.get("cRes"), Some(&CellValue::Integer(65)));
        assert_eq!(rw.rwstats.get("pRes"), Some(&CellValue::Integer(35)));
        assert_eq!(rw.rwstats.get("fcr"), Some(&CellValue::Integer(35)));
    }

    #[test]
    fn test_bucketed_runeword_for_sword() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let rw = book.get_runeword("Spirit", Some("sword"), &lookups, &mut diags, "test").unwrap();
        assert_eq!(rw.item_types, vec!["swor"]);
        assert_eq!(rw.rwstats.get("pRes"), Some(&CellValue::Integer(75)));
        assert_eq!(rw.rwstats.get("cRes"), Some(&CellValue::Integer(14)));
    }

    #[test]
    fn test_bucketed_runeword_without_group_uses_first_variant() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        let rw = book.get_runeword("Spirit", None, &lookups, &mut diags, "test").unwrap();
        assert_eq!(rw.item_types, vec!["swor"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unknown_runeword_is_diagnosed() {
        let mut diags = Diagnostics::new();
        let (book, lookups) = book(&mut diags);

        assert!(book.get_runeword("Enigma", None, &lookups, &mut diags, "test").is_none());
        assert_eq!(diags.count_of(DiagnosticKind::UnknownRuneWord), 1);

        assert!(book.get_runeword("Spirit", Some("gloves"), &lookups, &mut diags, "test").is_none());
        assert_eq!(diags.count_of(DiagnosticKind::UnknownItemType), 1);
    }

    #[test]
    fn test_render_runewords_js() {
        let mut diags = Diagnostics::new();
        let (book, _) = book(&mut diags);

        let js = book.render_runewords_js();
        assert_eq!(
            js,
            "var runewords = {\n\tGrief:[\"Zod\"],\n\tSpirit:[\"Tal\",\"Thul\"],\n\tStealth:[\"Tal\",\"Shael\"]\n};\n"
        );
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Heart of the Oak"), "Heart_of_the_Oak");
        assert_eq!(sanitize_name("King's Grace"), "Kings_Grace");
    }

    #[test]
    fn test_describe_rune_stats() {
        let mut diags = Diagnostics::new();
        let (book, _) = book(&mut diags);

        let text = book.describe_rune_stats();
        assert!(text.starts_with("Shael\n  Weapon:\n    - ias: 20\n"));
        assert!(text.contains("Tal\n  Weapon:\n    - pRes: 75\n"));
    }

    #[test]
    fn test_missing_rune_name_column() {
        let lookups = Lookups::new();
        let mut diags = Diagnostics::new();
        let table = parse_tsv_str("Name\tcomplete\nx\t1\n", "Runes.txt").unwrap();
        assert!(RuneWordBook::from_tables(&table, None, &lookups, &mut diags).is_err());
    }
}
