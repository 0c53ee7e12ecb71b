//! Non-fatal data gaps collected during a run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category of a data gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A whole row was dropped (unknown base type, missing name, ...)
    RowRejected,
    /// Property code without a canonical key
    UnknownProperty,
    /// Parameter outside the values a property understands
    MalformedParameter,
    /// Skill id or name not in the skill table
    UnknownSkill,
    /// Rune word name or variant not found
    UnknownRuneWord,
    /// Equipment group that maps to no rune-word item type
    UnknownItemType,
    /// Set bonus column group without a piece-count mapping
    UnmappedSetBonus,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiagnosticKind::RowRejected => "row rejected",
            DiagnosticKind::UnknownProperty => "unknown property",
            DiagnosticKind::MalformedParameter => "malformed parameter",
            DiagnosticKind::UnknownSkill => "unknown skill",
            DiagnosticKind::UnknownRuneWord => "unknown rune word",
            DiagnosticKind::UnknownItemType => "unknown item type",
            DiagnosticKind::UnmappedSetBonus => "unmapped set bonus",
        };
        f.write_str(name)
    }
}

/// A single data gap, tied to the item (or rune) being processed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub item: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.item, self.message)
    }
}

/// Collector for diagnostics; every push is also logged
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: &str, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            item: item.to_string(),
            kind,
            message: message.into(),
        };
        tracing::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Counts per kind, in kind order
    pub fn counts(&self) -> BTreeMap<DiagnosticKind, usize> {
        let mut counts = BTreeMap::new();
        for d in &self.entries {
            *counts.entry(d.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
