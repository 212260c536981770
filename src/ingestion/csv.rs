//! CSV ingestion implementation.

use crate::error::{IngestError, IngestResult};
use crate::types::{FileKind, Ingested};

/// Options for CSV decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Accept records with differing field counts. When `false`, a ragged record is a parse
    /// failure.
    pub flexible: bool,
    /// Trim surrounding whitespace from every field.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            flexible: true,
            trim: false,
        }
    }
}

/// Decode CSV text into [`Ingested::Csv`].
///
/// Rules:
///
/// - No header handling: every record, the first included, becomes a row.
/// - Blank lines are skipped.
/// - Quoting follows RFC 4180 (`"a,b"` is one field, `""` escapes a quote).
///
/// `name` is used only for error context.
pub fn ingest_csv_from_str(name: &str, input: &str, options: &CsvOptions) -> IngestResult<Ingested> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .flexible(options.flexible)
        .trim(if options.trim { csv::Trim::All } else { csv::Trim::None })
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(name, &mut rdr)
}

/// Decode CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(name: &str, rdr: &mut csv::Reader<R>) -> IngestResult<Ingested> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| IngestError::parse(name, FileKind::Csv, e.to_string()))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    tracing::debug!(name, rows = rows.len(), "parsed csv");
    Ok(Ingested::Csv { rows })
}
