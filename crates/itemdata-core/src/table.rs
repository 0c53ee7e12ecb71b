//! Core table types for representing tab-separated data tables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A parsed data table from a single tab-separated file
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Column definitions, in header order
    pub columns: Vec<Column>,
    /// Row data
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
    /// Column name -> index (first occurrence wins)
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Table {
    /// Create a table, indexing its header
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, source_path: PathBuf) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for column in &columns {
            index.entry(column.name.clone()).or_insert(column.index);
        }
        Self {
            columns,
            rows,
            source_path,
            index,
        }
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Index of a mandatory column
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::MissingColumn {
            path: self.source_path.clone(),
            column: name.to_string(),
        })
    }

    /// Iterate rows with by-name cell access
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |row| Record { table: self, row })
    }
}

/// A column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name as given by the header (trimmed)
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// A row of raw cell text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: usize,
    /// Cell values for each column
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(line: usize, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    /// Get a cell by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// A row borrowed together with its table's header
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl<'a> Record<'a> {
    /// Trimmed cell text for `column`, or `""` when the column or cell is absent
    pub fn get(&self, column: &str) -> &'a str {
        self.table
            .column_index(column)
            .and_then(|i| self.row.get(i))
            .map(str::trim)
            .unwrap_or("")
    }

    /// First non-empty value among several candidate columns
    pub fn get_any(&self, columns: &[&str]) -> &'a str {
        columns
            .iter()
            .map(|c| self.get(c))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    pub fn line(&self) -> usize {
        self.row.line
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }
}

/// A typed value produced from table text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Empty/null cell
    Empty,
}

impl CellValue {
    /// Parse table text: a `.` means float, otherwise integer, otherwise the
    /// text is kept verbatim.
    pub fn parse_numeric_or_string(s: &str) -> Self {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if trimmed.contains('.') {
            return match trimmed.parse::<f64>() {
                Ok(f) => CellValue::Float(f),
                Err(_) => CellValue::String(trimmed.to_string()),
            };
        }

        match trimmed.parse::<i64>() {
            Ok(i) => CellValue::Integer(i),
            Err(_) => CellValue::String(trimmed.to_string()),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integers and floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Negated copy; non-numeric values are returned unchanged
    pub fn negated(&self) -> Self {
        match self {
            CellValue::Integer(i) => CellValue::Integer(i.saturating_neg()),
            CellValue::Float(f) => CellValue::Float(-f),
            other => other.clone(),
        }
    }

    /// Convert to a display string
    pub fn to_string_value(&self) -> String {
        match self {
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(fl) => write!(f, "{}", fl),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Empty => write!(f, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(CellValue::parse_numeric_or_string("42"), CellValue::Integer(42));
        assert_eq!(CellValue::parse_numeric_or_string("-123"), CellValue::Integer(-123));
        assert_eq!(CellValue::parse_numeric_or_string(" 7 "), CellValue::Integer(7));
    }

    #[test]
    fn test_parse_float_requires_dot() {
        assert_eq!(CellValue::parse_numeric_or_string("3.5"), CellValue::Float(3.5));
        // exponent notation without a dot is not a number here
        assert_eq!(
            CellValue::parse_numeric_or_string("1e5"),
            CellValue::String("1e5".to_string())
        );
    }

    #[test]
    fn test_parse_string_passthrough() {
        assert_eq!(
            CellValue::parse_numeric_or_string("amazon"),
            CellValue::String("amazon".to_string())
        );
        assert_eq!(
            CellValue::parse_numeric_or_string("1.2.3"),
            CellValue::String("1.2.3".to_string())
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(CellValue::parse_numeric_or_string(""), CellValue::Empty);
        assert_eq!(CellValue::parse_numeric_or_string("   "), CellValue::Empty);
    }

    #[test]
    fn test_negated() {
        assert_eq!(CellValue::Integer(25).negated(), CellValue::Integer(-25));
        assert_eq!(CellValue::from("x").negated(), CellValue::from("x"));
        assert_eq!(CellValue::Integer(i64::MIN).negated(), CellValue::Integer(i64::MAX));
    }

    #[test]
    fn test_duplicate_header_keeps_first() {
        let columns = vec![
            Column::new("a".to_string(), 0),
            Column::new("b".to_string(), 1),
            Column::new("a".to_string(), 2),
        ];
        let rows = vec![Row::new(2, vec!["1".into(), "2".into(), "3".into()])];
        let table = Table::new(columns, rows, PathBuf::from("t.txt"));

        assert_eq!(table.column_index("a"), Some(0));
        let record = table.records().next().unwrap();
        assert_eq!(record.get("a"), "1");
        assert_eq!(record.get("missing"), "");
    }

    #[test]
    fn test_require_column() {
        let table = Table::new(Vec::new(), Vec::new(), PathBuf::from("t.txt"));
        assert!(matches!(
            table.require_column("index"),
            Err(Error::MissingColumn { .. })
        ));
    }
}
