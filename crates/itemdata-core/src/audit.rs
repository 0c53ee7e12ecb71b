//! Table audit: which property codes and base types a table uses, and which
//! of them the lookups cannot place

use crate::lookups::Lookups;
use crate::resolver::handles_code;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Column name prefixes holding property codes
const CODE_COLUMN_PREFIXES: &[&str] = &["prop", "aprop", "t1code"];

/// Column names holding base types
const BASE_COLUMNS: &[&str] = &["*type", "*item"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeUsage {
    pub code: String,
    /// Number of cells using the code
    pub uses: usize,
    /// Canonical key from the code table, if any
    pub key: Option<String>,
    /// Resolved by a dedicated handler
    pub special: bool,
}

impl CodeUsage {
    pub fn is_known(&self) -> bool {
        self.special || self.key.is_some() || self.code.starts_with("map-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUsage {
    pub base: String,
    pub uses: usize,
    /// Slot group name, if the base is mapped
    pub slot: Option<String>,
    /// Base belongs to a category the exporter skips
    pub excluded: bool,
}

impl BaseUsage {
    pub fn is_known(&self) -> bool {
        self.slot.is_some() || self.excluded
    }
}

/// Distinct codes and bases of one table, sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAudit {
    pub path: PathBuf,
    pub rows: usize,
    pub codes: Vec<CodeUsage>,
    pub bases: Vec<BaseUsage>,
}

impl TableAudit {
    pub fn unknown_codes(&self) -> impl Iterator<Item = &CodeUsage> {
        self.codes.iter().filter(|c| !c.is_known())
    }

    pub fn unknown_bases(&self) -> impl Iterator<Item = &BaseUsage> {
        self.bases.iter().filter(|b| !b.is_known())
    }

    /// Plain-text listing; unknown entries are marked with `!`
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("{} ({} rows)", self.path.display(), self.rows)];

        lines.push(format!("Property codes: {}", self.codes.len()));
        for usage in &self.codes {
            let target = match (&usage.key, usage.special) {
                (_, true) => "special".to_string(),
                (Some(key), false) => key.clone(),
                (None, false) if usage.code.starts_with("map-") => "ignored".to_string(),
                (None, false) => "unknown".to_string(),
            };
            let mark = if usage.is_known() { ' ' } else { '!' };
            lines.push(format!("{} {} -> {} ({})", mark, usage.code, target, usage.uses));
        }

        lines.push(format!("Base types: {}", self.bases.len()));
        for usage in &self.bases {
            let target = match (&usage.slot, usage.excluded) {
                (Some(slot), _) => slot.clone(),
                (None, true) => "excluded".to_string(),
                (None, false) => "unknown".to_string(),
            };
            let mark = if usage.is_known() { ' ' } else { '!' };
            lines.push(format!("{} {} -> {} ({})", mark, usage.base, target, usage.uses));
        }
        lines.join("\n")
    }
}

pub fn audit_table(table: &Table, lookups: &Lookups) -> TableAudit {
    let code_columns: Vec<usize> = table
        .columns
        .iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            CODE_COLUMN_PREFIXES.iter().any(|p| name.starts_with(p))
        })
        .map(|c| c.index)
        .collect();
    let base_columns: Vec<usize> = BASE_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let mut codes: BTreeMap<String, usize> = BTreeMap::new();
    let mut bases: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        for &index in &code_columns {
            if let Some(code) = row.get(index).map(str::trim).filter(|c| !c.is_empty()) {
                *codes.entry(code.to_lowercase()).or_default() += 1;
            }
        }
        for &index in &base_columns {
            if let Some(base) = row.get(index).map(str::trim).filter(|b| !b.is_empty()) {
                *bases.entry(base.to_string()).or_default() += 1;
            }
        }
    }

    let codes = codes
        .into_iter()
        .map(|(code, uses)| CodeUsage {
            key: lookups.canonical_key(&code).map(str::to_string),
            special: handles_code(&code),
            code,
            uses,
        })
        .collect();
    let bases = bases
        .into_iter()
        .map(|(base, uses)| BaseUsage {
            slot: lookups.slot_group(&base).map(|s| s.name().to_string()),
            excluded: lookups.is_excluded_base(&base),
            base,
            uses,
        })
        .collect();

    TableAudit {
        path: table.source_path.clone(),
        rows: table.row_count(),
        codes,
        bases,
    }
}
