//! Export configuration and source table discovery

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const UNIQUE_ITEMS_FILE: &str = "UniqueItems.txt";
pub const SET_ITEMS_FILE: &str = "SetItems.txt";
pub const MISC_ITEMS_FILE: &str = "Misc.txt";
pub const RUNE_WORDS_FILE: &str = "Runes.txt";
pub const GEMS_FILE: &str = "Gems.txt";
pub const FOOTER_FILE: &str = "equipment_footer.js";

/// File names looked for under data roots
const KNOWN_FILES: &[&str] = &[
    UNIQUE_ITEMS_FILE,
    SET_ITEMS_FILE,
    MISC_ITEMS_FILE,
    RUNE_WORDS_FILE,
    GEMS_FILE,
    FOOTER_FILE,
];

/// Paths of everything one export run reads and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub unique_items: PathBuf,
    pub set_items: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misc_items: Option<PathBuf>,
    pub rune_words: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gems: Option<PathBuf>,
    /// Fragment spliced verbatim into the generated object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<PathBuf>,
    pub output: PathBuf,
    /// Where to write the JSON run report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
    /// Name the output `<stem>-YYYYMMDD-HHMMSS.<ext>`
    #[serde(default)]
    pub timestamped_output: bool,
}

impl ExportConfig {
    /// Template pointing at the standard file names under `data/`
    pub fn template() -> Self {
        let data = PathBuf::from("data");
        Self {
            unique_items: data.join(UNIQUE_ITEMS_FILE),
            set_items: data.join(SET_ITEMS_FILE),
            misc_items: Some(data.join(MISC_ITEMS_FILE)),
            rune_words: data.join(RUNE_WORDS_FILE),
            gems: Some(data.join(GEMS_FILE)),
            footer: Some(data.join(FOOTER_FILE)),
            output: PathBuf::from("equipment.js"),
            report: None,
            timestamped_output: false,
        }
    }

    /// Load a config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Build a config from the standard table files found under `roots`
    pub fn from_data_dir<P: AsRef<Path>>(roots: &[P], output: impl Into<PathBuf>) -> Result<Self> {
        let located = locate_tables(roots)?;
        Ok(Self {
            unique_items: located.require(UNIQUE_ITEMS_FILE)?,
            set_items: located.require(SET_ITEMS_FILE)?,
            misc_items: located.get(MISC_ITEMS_FILE),
            rune_words: located.require(RUNE_WORDS_FILE)?,
            gems: located.get(GEMS_FILE),
            footer: located.get(FOOTER_FILE),
            output: output.into(),
            report: None,
            timestamped_output: false,
        })
    }
}

/// Standard table files found under one or more data roots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatedTables {
    /// Root directories that were searched
    pub roots: Vec<PathBuf>,
    /// Lowercase file name -> first path found
    pub files: BTreeMap<String, PathBuf>,
    /// Number of files looked at
    pub files_seen: usize,
}

impl LocatedTables {
    pub fn get(&self, file_name: &str) -> Option<PathBuf> {
        self.files.get(&file_name.to_lowercase()).cloned()
    }

    pub fn require(&self, file_name: &str) -> Result<PathBuf> {
        self.get(file_name).ok_or_else(|| {
            let roots: Vec<String> = self.roots.iter().map(|r| r.display().to_string()).collect();
            Error::TableNotFound(format!("{} under {}", file_name, roots.join(", ")))
        })
    }
}

/// Walk `roots` in order, recording the first match of every known file
/// name (compared case-insensitively).
pub fn locate_tables<P: AsRef<Path>>(roots: &[P]) -> Result<LocatedTables> {
    let mut located = LocatedTables {
        roots: roots.iter().map(|r| r.as_ref().to_path_buf()).collect(),
        ..Default::default()
    };

    for root in roots {
        for entry in WalkDir::new(root.as_ref())
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            located.files_seen += 1;

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let lower = file_name.to_lowercase();
            if KNOWN_FILES.iter().any(|known| known.to_lowercase() == lower) {
                located
                    .files
                    .entry(lower)
                    .or_insert_with(|| entry.path().to_path_buf());
            }
        }
    }

    tracing::debug!(
        "located {} of {} table files ({} files seen)",
        located.files.len(),
        KNOWN_FILES.len(),
        located.files_seen
    );
    Ok(located)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut config = ExportConfig::template();
        config.report = Some(PathBuf::from("report.json"));
        config.save(&path).unwrap();

        assert_eq!(ExportConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "unique_items": "u.txt",
            "set_items": "s.txt",
            "rune_words": "r.txt",
            "output": "out.js"
        }"#;
        let config: ExportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.gems, None);
        assert!(!config.timestamped_output);
    }

    #[test]
    fn test_from_data_dir_is_case_insensitive_and_first_root_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir_all(first.path().join("global/excel")).unwrap();
        fs::write(first.path().join("global/excel/uniqueitems.txt"), "index\n").unwrap();
        fs::write(first.path().join("SETITEMS.TXT"), "index\n").unwrap();
        fs::write(second.path().join("UniqueItems.txt"), "index\n").unwrap();
        fs::write(second.path().join("Runes.txt"), "Name\n").unwrap();

        let config = ExportConfig::from_data_dir(&[first.path(), second.path()], "out.js").unwrap();
        assert_eq!(config.unique_items, first.path().join("global/excel/uniqueitems.txt"));
        assert_eq!(config.set_items, first.path().join("SETITEMS.TXT"));
        assert_eq!(config.rune_words, second.path().join("Runes.txt"));
        assert_eq!(config.gems, None);
    }

    #[test]
    fn test_missing_required_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UniqueItems.txt"), "index\n").unwrap();

        let result = ExportConfig::from_data_dir(&[dir.path()], "out.js");
        assert!(matches!(result, Err(Error::TableNotFound(_))));
    }
}
