//! itemdata-core: item table exporter for generated planner data
//!
//! This library provides functionality to:
//! - Parse tab-separated item, rune word and gem tables
//! - Resolve raw property tuples into canonical stat keys
//! - Expand rune words with their socketed rune bonuses
//! - Normalize, classify and group equipment rows
//! - Render the grouped equipment as a JavaScript object literal

pub mod audit;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exporter;
pub mod grouping;
pub mod lookups;
pub mod merger;
pub mod normalizer;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod runeword;
pub mod table;

pub use audit::{audit_table, TableAudit};
pub use config::{locate_tables, ExportConfig, LocatedTables};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, Result};
pub use exporter::{run_export, write_atomic, Export, Exporter};
pub use grouping::EquipmentGroups;
pub use lookups::{Lookups, SlotGroup};
pub use merger::{combine, ResolvedProperties};
pub use normalizer::{ItemRow, Normalizer, TableKind};
pub use parser::{parse_tsv, parse_tsv_str};
pub use report::{RunReport, TableStats};
pub use resolver::{PropertySlot, Resolver};
pub use runeword::{RuneStats, RuneWord, RuneWordBook};
pub use table::{CellValue, Column, Record, Row, Table};
