//! JSON-lines reader with transparent gzip support.

use crate::error::{PalateError, Result};
use flate2::read::GzDecoder;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// One parsed line of a metadata file.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow {
    /// 1-based line number in the (decompressed) input
    pub line: usize,
    /// The JSON object on that line
    pub fields: Value,
}

impl MetadataRow {
    /// Build a row from an already-parsed object.
    #[must_use]
    pub fn new(line: usize, fields: Map<String, Value>) -> Self {
        Self {
            line,
            fields: Value::Object(fields),
        }
    }

    /// Field value, `None` when the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Keys present on this row, in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}

/// Read a JSON-lines file, gunzipping when the name ends in `.gz`.
///
/// Blank lines are skipped. Every other line must hold a JSON object.
///
/// # Errors
///
/// Returns [`PalateError::Io`] when the file cannot be read (including a
/// corrupt gzip stream) and [`PalateError::Json`] with the line number
/// when a line is not a JSON object.
pub fn read_json_lines(path: &Path) -> Result<Vec<MetadataRow>> {
    let file = File::open(path).map_err(|e| PalateError::io(path, e))?;
    let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    debug!(path = %path.display(), gzipped, "opening metadata");

    let reader: Box<dyn BufRead> = if gzipped {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let rows = parse_lines(reader, path)?;
    info!(rows = rows.len(), path = %path.display(), "loaded metadata");
    Ok(rows)
}

fn parse_lines<R: BufRead>(reader: R, path: &Path) -> Result<Vec<MetadataRow>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| PalateError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Map<String, Value> =
            serde_json::from_str(&line).map_err(|source| PalateError::Json {
                path: path.to_path_buf(),
                line: Some(idx + 1),
                source,
            })?;
        rows.push(MetadataRow::new(idx + 1, fields));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const LINES: &str = concat!(
        r#"{"title": "Blue Train", "brand": "John Coltrane", "asin": "B001"}"#,
        "\n\n",
        r#"{"title": "Kind of Blue", "brand": "Miles Davis", "asin": "B002", "rank": 7}"#,
        "\n",
    );

    #[test]
    fn test_reads_plain_file_and_skips_blank_lines() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(LINES.as_bytes()).expect("write");

        let rows = read_json_lines(file.path()).expect("valid lines");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].get("rank"), Some(&Value::from(7)));
        assert_eq!(
            rows[1].keys().collect::<Vec<_>>(),
            vec!["title", "brand", "asin", "rank"]
        );
    }

    #[test]
    fn test_reads_gzip_file() {
        let file = tempfile::Builder::new()
            .suffix(".json.gz")
            .tempfile()
            .expect("temp file");
        let mut encoder = GzEncoder::new(file.reopen().expect("reopen"), Compression::default());
        encoder.write_all(LINES.as_bytes()).expect("write");
        encoder.finish().expect("finish gzip");

        let rows = read_json_lines(file.path()).expect("valid gzip");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("title"), Some(&Value::from("Blue Train")));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        writeln!(file, r#"{{"title": "ok"}}"#).expect("write");
        writeln!(file, "[1, 2]").expect("write");

        let err = read_json_lines(file.path()).expect_err("array is not an object");
        assert!(matches!(err, PalateError::Json { line: Some(2), .. }));
        let msg = err.to_string();
        assert!(msg.contains("at line 2"));
        assert_eq!(msg.matches("line").count(), 1);
    }

    #[test]
    fn test_corrupt_gzip_is_io_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".gz")
            .tempfile()
            .expect("temp file");
        file.write_all(b"definitely not gzip").expect("write");

        let err = read_json_lines(file.path()).expect_err("corrupt stream");
        assert!(matches!(err, PalateError::Io { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_json_lines(Path::new("/nonexistent/meta.json.gz")).expect_err("missing");
        assert!(matches!(err, PalateError::Io { .. }));
    }
}
