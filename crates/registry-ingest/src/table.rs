//! Raw table loading with explicit header-offset configuration.
//!
//! Registry exports arrive either as comma-separated UTF-8 or as
//! semicolon-separated Latin-1; the second form is retried automatically
//! when the first fails to parse. The header offset counts leading non-data
//! rows to discard before the real column header row.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// An ordered table of named text columns, row-aligned.
///
/// Header names are trimmed and BOM-stripped. Fully empty rows are dropped.
/// Rows shorter than the header are padded with empty cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Loads a raw table from a file.
    pub fn from_path(path: &Path, header_offset: usize) -> Result<RawTable> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_bytes(&bytes, header_offset)
    }

    /// Loads a raw table from an in-memory byte stream.
    ///
    /// Tries comma-separated UTF-8 first; on decode or parse failure retries
    /// as semicolon-separated Latin-1.
    pub fn from_bytes(bytes: &[u8], header_offset: usize) -> Result<RawTable> {
        let raw_rows = match parse_rows(bytes, b',') {
            Ok(rows) => rows,
            Err(first_error) => {
                tracing::debug!(
                    error = %first_error,
                    "utf-8 comma parse failed, retrying as latin-1 semicolon"
                );
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                parse_rows(decoded.as_bytes(), b';').map_err(|e| IngestError::Parse {
                    message: e.to_string(),
                })?
            }
        };
        Self::from_rows(raw_rows, header_offset)
    }

    fn from_rows(raw_rows: Vec<Vec<String>>, header_offset: usize) -> Result<RawTable> {
        if raw_rows.is_empty() {
            return Err(IngestError::EmptyInput);
        }
        if raw_rows.len() <= header_offset {
            return Err(IngestError::NoHeaderRow {
                offset: header_offset,
                rows: raw_rows.len(),
            });
        }
        let headers: Vec<String> = raw_rows[header_offset]
            .iter()
            .map(|value| normalize_header(value))
            .collect();
        let mut rows = Vec::with_capacity(raw_rows.len() - header_offset - 1);
        for record in raw_rows.into_iter().skip(header_offset + 1) {
            let mut row = Vec::with_capacity(headers.len());
            for idx in 0..headers.len() {
                let value = record.get(idx).map(String::as_str).unwrap_or("");
                row.push(value.to_string());
            }
            rows.push(row);
        }
        tracing::debug!(columns = headers.len(), rows = rows.len(), "raw table loaded");
        Ok(RawTable { headers, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by its trimmed header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at (row, column index); missing cells read as empty.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All values of a named column, or None if the column does not exist.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}

fn parse_rows(bytes: &[u8], delimiter: u8) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(bytes);
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn reads_utf8_comma_table() {
        let table = RawTable::from_bytes(b"A,B,C\n1,2,3\n4,5,6\n", 0).unwrap();
        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.value(1, 2), "6");
    }

    #[test]
    fn applies_header_offset() {
        let table = RawTable::from_bytes(b"junk,junk\nmore,junk\nA,B\n1,2\n", 2).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.n_rows(), 1);
    }

    #[test]
    fn drops_fully_empty_rows_before_offset() {
        let table = RawTable::from_bytes(b"\n,,\nA,B\n1,2\n", 0).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.n_rows(), 1);
    }

    #[test]
    fn trims_header_whitespace() {
        let table = RawTable::from_bytes(b"  A  , B \n1,2\n", 0).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn pads_short_rows() {
        let table = RawTable::from_bytes(b"A,B,C\n1\n", 0).unwrap();
        assert_eq!(table.value(0, 0), "1");
        assert_eq!(table.value(0, 2), "");
    }

    #[test]
    fn retries_latin1_semicolon() {
        // "Gênero;Óbito" in Latin-1: 0xEA = ê, 0xD3 = Ó.
        let bytes = b"G\xEAnero;\xD3bito\nF;S\n";
        let table = RawTable::from_bytes(bytes, 0).unwrap();
        assert_eq!(table.headers, vec!["Gênero", "Óbito"]);
        assert_eq!(table.value(0, 0), "F");
        assert_eq!(table.value(0, 1), "S");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            RawTable::from_bytes(b"", 0),
            Err(IngestError::EmptyInput)
        ));
    }

    #[test]
    fn offset_beyond_rows_is_an_error() {
        let result = RawTable::from_bytes(b"A,B\n1,2\n", 7);
        assert!(matches!(
            result,
            Err(IngestError::NoHeaderRow { offset: 7, rows: 2 })
        ));
    }

    #[test]
    fn reads_from_file() {
        let file = create_temp_csv(b"A,B\n1,2\n");
        let table = RawTable::from_path(file.path(), 0).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = RawTable::from_path(Path::new("/no/such/file.csv"), 0);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn column_access_by_name() {
        let table = RawTable::from_bytes(b"A,B\n1,2\n3,4\n", 0).unwrap();
        assert_eq!(table.column("B"), Some(vec!["2", "4"]));
        assert_eq!(table.column("Z"), None);
    }
}
