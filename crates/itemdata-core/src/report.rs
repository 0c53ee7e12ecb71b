//! Run reports: what one export read, kept and complained about

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::{Error, Result};
use crate::normalizer::TableKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Row counts for one source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub kind: TableKind,
    pub path: PathBuf,
    pub rows_read: usize,
    pub rows_kept: usize,
}

/// Summary of one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// File the equipment object was written to
    pub output: PathBuf,
    pub tables: Vec<TableStats>,
    /// Items per group key
    pub groups: BTreeMap<String, usize>,
    /// Distinct rune word names loaded
    pub rune_words: usize,
    pub diagnostic_counts: BTreeMap<DiagnosticKind, usize>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn new(
        timestamp: DateTime<Utc>,
        output: PathBuf,
        tables: Vec<TableStats>,
        groups: BTreeMap<String, usize>,
        rune_words: usize,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            timestamp,
            output,
            tables,
            groups,
            rune_words,
            diagnostic_counts: diagnostics.counts(),
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Load a report from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the report as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        crate::exporter::write_atomic(path.as_ref(), &content)
    }

    pub fn rows_read(&self) -> usize {
        self.tables.iter().map(|t| t.rows_read).sum()
    }

    pub fn rows_kept(&self) -> usize {
        self.tables.iter().map(|t| t.rows_kept).sum()
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().sum()
    }

    /// Human-readable summary, one fact per line
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Wrote: {}", self.output.display())];
        for table in &self.tables {
            lines.push(format!(
                "  {} ({}): {} rows read, {} kept",
                table.kind,
                table.path.display(),
                table.rows_read,
                table.rows_kept
            ));
        }
        lines.push(format!(
            "Groups: {} ({} items)",
            self.groups.len(),
            self.item_count()
        ));
        for (group, count) in &self.groups {
            lines.push(format!("  {}: {}", group, count));
        }
        lines.push(format!("Rune words: {}", self.rune_words));
        lines.push(format!("Diagnostics: {}", self.diagnostics.len()));
        for (kind, count) in &self.diagnostic_counts {
            lines.push(format!("  {}: {}", kind, count));
        }
        lines.join("\n")
    }
}

/// `<stem>-YYYYMMDD-HHMMSS.<ext>` next to `path`
pub fn timestamped_path(path: &Path, at: DateTime<Utc>) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = at.format("%Y%m%d-%H%M%S");
    let file_name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}-{}", stem, stamp),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> RunReport {
        let mut diags = Diagnostics::new();
        diags.push("Foo", DiagnosticKind::UnknownSkill, "skill 999");
        diags.push("Bar", DiagnosticKind::RowRejected, "unknown base type 'Baz'");

        let tables = vec![
            TableStats {
                kind: TableKind::Unique,
                path: PathBuf::from("UniqueItems.txt"),
                rows_read: 10,
                rows_kept: 7,
            },
            TableStats {
                kind: TableKind::Set,
                path: PathBuf::from("SetItems.txt"),
                rows_read: 5,
                rows_kept: 5,
            },
        ];
        let groups = BTreeMap::from([("helm".to_string(), 4), ("ring1".to_string(), 8)]);
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        RunReport::new(at, PathBuf::from("equipment.js"), tables, groups, 3, diags)
    }

    #[test]
    fn test_totals() {
        let report = sample_report();
        assert_eq!(report.rows_read(), 15);
        assert_eq!(report.rows_kept(), 12);
        assert_eq!(report.item_count(), 12);
        assert_eq!(report.diagnostic_counts[&DiagnosticKind::UnknownSkill], 1);
    }

    #[test]
    fn test_summary_lists_tables_and_groups() {
        let summary = sample_report().summary();
        assert!(summary.starts_with("Wrote: equipment.js\n"));
        assert!(summary.contains("  unique (UniqueItems.txt): 10 rows read, 7 kept"));
        assert!(summary.contains("  ring1: 8"));
        assert!(summary.contains("  unknown skill: 1"));
    }

    #[test]
    fn test_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/run.json");

        let report = sample_report();
        report.save(&path).unwrap();
        let loaded = RunReport::load(&path).unwrap();

        assert_eq!(loaded.timestamp, report.timestamp);
        assert_eq!(loaded.tables, report.tables);
        assert_eq!(loaded.diagnostics, report.diagnostics);
        assert_eq!(loaded.diagnostic_counts, report.diagnostic_counts);
    }

    #[test]
    fn test_timestamped_path() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            timestamped_path(Path::new("out/equipment.js"), at),
            PathBuf::from("out/equipment-20240309-140507.js")
        );
        assert_eq!(
            timestamped_path(Path::new("equipment"), at),
            PathBuf::from("equipment-20240309-140507")
        );
    }
}
