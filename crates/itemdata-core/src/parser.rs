//! TSV parser for data table files

use crate::error::{Error, Result};
use crate::table::{Column, Row, Table};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Parse a tab-separated file into a Table
pub fn parse_tsv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_reader(BufReader::new(file), path.to_path_buf())
}

/// Parse TSV from a string (useful for testing)
pub fn parse_tsv_str(content: &str, source_name: &str) -> Result<Table> {
    parse_reader(content.as_bytes(), PathBuf::from(source_name))
}

fn parse_reader<R: Read>(reader: R, path: PathBuf) -> Result<Table> {
    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true) // later rows may drop trailing columns
        .from_reader(reader);

    let mut columns: Vec<Column> = Vec::new();
    let mut rows = Vec::new();

    for result in tsv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.clone(),
            source: e,
        })?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        if columns.is_empty() {
            columns = record
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let name = if i == 0 {
                        name.trim_start_matches('\u{feff}')
                    } else {
                        name
                    };
                    let name = name.trim();
                    if name.is_empty() {
                        Column::new(format!("col_{}", i), i)
                    } else {
                        Column::new(name.to_string(), i)
                    }
                })
                .collect();
            continue;
        }

        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows.len() + 2);

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();

        // Pad with empty cells if row is shorter than header
        while cells.len() < columns.len() {
            cells.push(String::new());
        }

        if cells.len() > columns.len() {
            tracing::warn!(
                "row at line {} in {} has more cells than columns, truncating",
                line,
                path.display()
            );
            cells.truncate(columns.len());
        }

        rows.push(Row::new(line, cells));
    }

    if columns.is_empty() {
        return Err(Error::TableParse {
            path,
            message: "no header row found".to_string(),
        });
    }

    Ok(Table::new(columns, rows, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tsv() {
        let tsv = "index\t*type\tlvl req\nFoo\tRing\t5\nBar\tCap\t12\n";
        let table = parse_tsv_str(tsv, "test.txt").unwrap();

        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[0].name, "index");
        assert_eq!(table.columns[2].name, "lvl req");

        assert_eq!(table.rows.len(), 2);
        let first = table.records().next().unwrap();
        assert_eq!(first.get("index"), "Foo");
        assert_eq!(first.get("lvl req"), "5");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let tsv = "a\tb\tc\n1\n";
        let table = parse_tsv_str(tsv, "test.txt").unwrap();

        assert_eq!(table.rows[0].cells, vec!["1", "", ""]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let tsv = "a\tb\n\n1\t2\n\t\n3\t4\n";
        let table = parse_tsv_str(tsv, "test.txt").unwrap();

        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_bom_and_blank_header() {
        let tsv = "\u{feff}name\t\tvalue\nx\ty\tz\n";
        let table = parse_tsv_str(tsv, "test.txt").unwrap();

        assert_eq!(table.columns[0].name, "name");
        assert_eq!(table.columns[1].name, "col_1");
    }

    #[test]
    fn test_quotes_are_literal() {
        let tsv = "name\tdesc\nx\t\"quoted\" text\n";
        let table = parse_tsv_str(tsv, "test.txt").unwrap();

        let record = table.records().next().unwrap();
        assert_eq!(record.get("desc"), "\"quoted\" text");
    }

    #[test]
    fn test_empty_input_is_error() {
        let result = parse_tsv_str("", "empty.txt");
        assert!(matches!(result, Err(Error::TableParse { .. })));
    }
}
