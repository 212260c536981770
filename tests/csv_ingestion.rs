use file_ingest::ingestion::csv::{ingest_csv_from_reader, ingest_csv_from_str, CsvOptions};
use file_ingest::types::{FileKind, Ingested};
use file_ingest::IngestError;

fn rows(items: &[&[&str]]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn ingest_csv_keeps_header_as_first_row() {
    let out = ingest_csv_from_str("t.csv", "a,b\n1,2\n3,4", &CsvOptions::default()).unwrap();
    assert_eq!(
        out,
        Ingested::Csv {
            rows: rows(&[&["a", "b"], &["1", "2"], &["3", "4"]])
        }
    );
}

#[test]
fn ingest_csv_handles_quoted_fields() {
    let input = "name,quote\n\"Lovelace, Ada\",\"said \"\"hi\"\"\"\n";
    let out = ingest_csv_from_str("q.csv", input, &CsvOptions::default()).unwrap();
    assert_eq!(
        out,
        Ingested::Csv {
            rows: rows(&[&["name", "quote"], &["Lovelace, Ada", "said \"hi\""]])
        }
    );
}

#[test]
fn ingest_csv_accepts_ragged_rows_by_default() {
    let out = ingest_csv_from_str("r.csv", "a,b,c\n1\n2,3\n", &CsvOptions::default()).unwrap();
    assert_eq!(
        out,
        Ingested::Csv {
            rows: rows(&[&["a", "b", "c"], &["1"], &["2", "3"]])
        }
    );
}

#[test]
fn ingest_csv_errors_on_ragged_rows_when_strict() {
    let opts = CsvOptions {
        flexible: false,
        ..Default::default()
    };
    let err = ingest_csv_from_str("r.csv", "a,b,c\n1\n", &opts).unwrap_err();
    assert!(matches!(
        err,
        IngestError::ParseFailure {
            kind: FileKind::Csv,
            ..
        }
    ));
    assert_eq!(err.user_message(), "Error parsing CSV");
    assert!(err.to_string().contains("failed to parse csv file 'r.csv'"));
}

#[test]
fn ingest_csv_custom_delimiter_and_trim() {
    let opts = CsvOptions {
        delimiter: b';',
        trim: true,
        ..Default::default()
    };
    let out = ingest_csv_from_str("s.csv", "a ; b\n 1;2 \n", &opts).unwrap();
    assert_eq!(
        out,
        Ingested::Csv {
            rows: rows(&[&["a", "b"], &["1", "2"]])
        }
    );
}

#[test]
fn ingest_csv_empty_input_has_no_rows() {
    let out = ingest_csv_from_str("e.csv", "", &CsvOptions::default()).unwrap();
    assert_eq!(out, Ingested::Csv { rows: vec![] });
}

#[test]
fn ingest_csv_from_reader_uses_reader_settings() {
    let input = "x\ty\n1\t2\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_reader(input.as_bytes());

    let out = ingest_csv_from_reader("t.tsv", &mut rdr).unwrap();
    assert_eq!(
        out,
        Ingested::Csv {
            rows: rows(&[&["x", "y"], &["1", "2"]])
        }
    );
}
