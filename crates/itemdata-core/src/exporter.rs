//! The export pipeline: source tables in, `equipment` JS object out

use crate::config::ExportConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::grouping::EquipmentGroups;
use crate::lookups::Lookups;
use crate::normalizer::{Normalizer, TableKind};
use crate::parser::parse_tsv;
use crate::report::{timestamped_path, RunReport, TableStats};
use crate::resolver::Resolver;
use crate::runeword::RuneWordBook;
use crate::table::Table;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of running the item tables through the pipeline
#[derive(Debug, Clone, Default)]
pub struct Export {
    pub groups: EquipmentGroups,
    pub tables: Vec<TableStats>,
}

/// Owns the lookups, the rune word book and the diagnostics of one run
#[derive(Debug)]
pub struct Exporter {
    lookups: Lookups,
    book: RuneWordBook,
    diagnostics: Diagnostics,
}

impl Exporter {
    /// Build the rune word book from its tables. Gaps found while doing so
    /// are kept with the run's diagnostics.
    pub fn new(lookups: Lookups, rune_words: &Table, gems: Option<&Table>) -> Result<Self> {
        let mut diagnostics = Diagnostics::new();
        let book = RuneWordBook::from_tables(rune_words, gems, &lookups, &mut diagnostics)?;
        Ok(Self {
            lookups,
            book,
            diagnostics,
        })
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn book(&self) -> &RuneWordBook {
        &self.book
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Normalize every table in order and group the accepted rows
    pub fn export(&mut self, tables: &[(TableKind, &Table)]) -> Result<Export> {
        let resolver = Resolver::new(&self.lookups).with_runewords(&self.book);
        let normalizer = Normalizer::new(resolver);

        let mut export = Export::default();
        for (kind, table) in tables {
            check_columns(*kind, table)?;

            let items = normalizer.normalize_table(*kind, table, &mut self.diagnostics);
            tracing::info!(
                "{} items: kept {} of {} rows from {}",
                kind,
                items.len(),
                table.row_count(),
                table.source_path.display()
            );
            export.tables.push(TableStats {
                kind: *kind,
                path: table.source_path.clone(),
                rows_read: table.row_count(),
                rows_kept: items.len(),
            });
            for item in items {
                export.groups.push(item);
            }
        }
        export.groups.sort();
        Ok(export)
    }
}

/// Mandatory columns per table kind
fn check_columns(kind: TableKind, table: &Table) -> Result<()> {
    match kind {
        TableKind::Unique => {
            table.require_column("index")?;
            table.require_column("*type")?;
            table.require_column("enabled")?;
        }
        TableKind::Set => {
            table.require_column("index")?;
            if !table.has_column("*item") {
                table.require_column("*type")?;
            }
        }
        TableKind::Misc => {
            if !table.has_column("index") {
                table.require_column("name")?;
            }
            table.require_column("*type")?;
        }
    }
    Ok(())
}

/// Write `contents` to a sibling temporary file, then rename it over `path`
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::InvalidArgument(format!("not a file path: {}", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}

fn read_footer(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Run the whole export described by `config` and return its report
pub fn run_export(config: &ExportConfig) -> Result<RunReport> {
    tracing::info!("loading source tables");
    let unique = parse_tsv(&config.unique_items)?;
    let set = parse_tsv(&config.set_items)?;
    let misc = config.misc_items.as_ref().map(parse_tsv).transpose()?;
    let rune_words = parse_tsv(&config.rune_words)?;
    let gems = config.gems.as_ref().map(parse_tsv).transpose()?;
    let footer = config.footer.as_deref().map(read_footer).transpose()?;

    let mut exporter = Exporter::new(Lookups::new(), &rune_words, gems.as_ref())?;

    let mut tables = vec![(TableKind::Unique, &unique), (TableKind::Set, &set)];
    if let Some(misc) = &misc {
        tables.push((TableKind::Misc, misc));
    }
    let export = exporter.export(&tables)?;

    let now = Utc::now();
    let output: PathBuf = if config.timestamped_output {
        timestamped_path(&config.output, now)
    } else {
        config.output.clone()
    };
    let js = export.groups.render_js(footer.as_deref());
    write_atomic(&output, &js)?;
    tracing::info!(
        "wrote {} items in {} groups to {}",
        export.groups.item_count(),
        export.groups.len(),
        output.display()
    );

    let rune_word_count = exporter.book().len();
    let report = RunReport::new(
        now,
        output,
        export.tables,
        export.groups.counts(),
        rune_word_count,
        exporter.into_diagnostics(),
    );
    if let Some(path) = &config.report {
        report.save(path)?;
        tracing::info!("wrote run report to {}", path.display());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tsv_str;

    #[test]
    fn test_write_atomic_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/equipment.js");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!dir.path().join("nested/out/.equipment.js.tmp").exists());
    }

    #[test]
    fn test_missing_mandatory_column_is_fatal() {
        let runes = parse_tsv_str("Name\tRune Name\tcomplete\n", "Runes.txt").unwrap();
        let mut exporter = Exporter::new(Lookups::new(), &runes, None).unwrap();

        let unique = parse_tsv_str("index\t*type\nFoo\tRing\n", "UniqueItems.txt").unwrap();
        let result = exporter.export(&[(TableKind::Unique, &unique)]);
        assert!(matches!(result, Err(Error::MissingColumn { ref column, .. }) if column == "enabled"));
    }
}
