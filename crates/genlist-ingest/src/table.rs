//! CSV reading into raw field maps.
//!
//! Rows are not interpreted here: each data line becomes a map from header
//! name to raw string value. Short rows simply lack the trailing keys.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, Result, open_error};

/// One unparsed data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// The row as it appeared, without its line terminator.
    pub text: String,
    pub fields: BTreeMap<String, String>,
}

impl RawRow {
    /// Builds a row from header/value pairs (useful for callers that do not
    /// read from disk).
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = Vec::new();
        let mut fields = BTreeMap::new();
        for (key, value) in pairs {
            values.push(value.as_ref().to_string());
            fields.insert(key.as_ref().to_string(), value.as_ref().to_string());
        }
        Self {
            line,
            text: values.join(","),
            fields,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A department file: header plus raw rows.
#[derive(Debug, Clone)]
pub struct CsvRows {
    pub path: PathBuf,
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Reads `path` as a comma-separated table with a single header line.
///
/// A missing file is reported as [`IngestError::FileNotFound`].
pub fn read_rows(path: &Path) -> Result<CsvRows> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    // Values never contain escaped delimiters, so `"` is plain data.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if header.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, &e))?;
        rows.push(to_raw_row(&header, &record));
    }

    debug!(path = %path.display(), rows = rows.len(), "read department file");
    Ok(CsvRows {
        path: path.to_path_buf(),
        header,
        rows,
    })
}

fn to_raw_row(header: &[String], record: &StringRecord) -> RawRow {
    let fields = header
        .iter()
        .zip(record.iter())
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect();
    RawRow {
        line: record.position().map_or(0, csv::Position::line),
        text: record.iter().collect::<Vec<_>>().join(","),
        fields,
    }
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "snv.csv",
            "hugo_name,hgnc_id,date_added\nKRAS,6407,2024-01-05\nNRAS,7989,2024-02-01\n",
        );

        let table = read_rows(&path).unwrap();
        assert_eq!(table.header, vec!["hugo_name", "hgnc_id", "date_added"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("hugo_name"), Some("KRAS"));
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[1].text, "NRAS,7989,2024-02-01");
    }

    #[test]
    fn short_rows_lack_trailing_keys() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "fusion.csv", "hugo_name,hgnc_id,notes\nALK,427\n");

        let table = read_rows(&path).unwrap();
        assert_eq!(table.rows[0].get("hgnc_id"), Some("427"));
        assert_eq!(table.rows[0].get("notes"), None);
    }

    #[test]
    fn values_are_not_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "snv.csv", "hugo_name,hgnc_id\nBR CA1, 1100\r\n");

        let table = read_rows(&path).unwrap();
        assert_eq!(table.rows[0].get("hugo_name"), Some("BR CA1"));
        assert_eq!(table.rows[0].get("hgnc_id"), Some(" 1100"));
    }

    #[test]
    fn quotes_are_plain_data() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "fusion.csv",
            "hugo_name,hgnc_id,notes\n\
             ALK,427,\"fusion partner\n\
             ROS1,10261,5\" UTR hotspot\n\
             RET,9967,\n",
        );

        let table = read_rows(&path).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].get("notes"), Some("\"fusion partner"));
        assert_eq!(table.rows[0].text, "ALK,427,\"fusion partner");
        assert_eq!(table.rows[1].get("notes"), Some("5\" UTR hotspot"));
        assert_eq!(table.rows[2].get("hugo_name"), Some("RET"));
        assert_eq!(table.rows[2].line, 4);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_rows(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.csv", "");
        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }
}
