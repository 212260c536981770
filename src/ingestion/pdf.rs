//! PDF text extraction.
//!
//! Document parsing is left to `lopdf`. This module walks each page's decoded content stream
//! and collects the strings shown by the text operators:
//!
//! - `Tj` and `'` show one string
//! - `"` shows its third operand
//! - `TJ` shows an array of strings interleaved with kerning offsets
//!
//! Each operator yields one text run. Runs on a page are joined with a single space and pages
//! are joined with `\n`.

use lopdf::content::Content;
use lopdf::{Document, Object};

use crate::error::{IngestError, IngestResult};
use crate::types::{FileKind, Ingested};

/// Kerning offsets at or below this (in thousandths of an em) read as a word gap inside `TJ`.
const TJ_WORD_GAP: f32 = -200.0;

/// Extract text from PDF bytes into [`Ingested::PdfText`].
///
/// `name` is used only for error context.
pub fn ingest_pdf_from_bytes(name: &str, bytes: &[u8]) -> IngestResult<Ingested> {
    let pages = extract_page_runs(bytes).map_err(|e| IngestError::parse(name, FileKind::Pdf, e.to_string()))?;
    let content = join_pages(&pages);
    tracing::debug!(name, pages = pages.len(), chars = content.chars().count(), "extracted pdf text");
    Ok(Ingested::PdfText { content })
}

/// Text runs per page, in page order.
pub fn extract_page_runs(bytes: &[u8]) -> lopdf::Result<Vec<Vec<String>>> {
    let doc = Document::load_mem(bytes)?;
    let mut pages = Vec::new();
    // get_pages is keyed by 1-based page number, so iteration is in page order.
    for (_page_num, page_id) in doc.get_pages() {
        let data = doc.get_page_content(page_id)?;
        let content = Content::decode(&data)?;
        let runs = content
            .operations
            .iter()
            .filter_map(|op| text_run(&op.operator, &op.operands))
            .collect();
        pages.push(runs);
    }
    Ok(pages)
}

fn text_run(operator: &str, operands: &[Object]) -> Option<String> {
    match operator {
        "Tj" | "'" => operands.first().and_then(string_operand),
        "\"" => operands.get(2).and_then(string_operand),
        "TJ" => match operands.first() {
            Some(Object::Array(items)) => Some(tj_array(items)),
            _ => None,
        },
        _ => None,
    }
}

fn tj_array(items: &[Object]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => out.push_str(&decode_pdf_string(bytes)),
            Object::Integer(n) if (*n as f32) <= TJ_WORD_GAP => push_gap(&mut out),
            Object::Real(n) if (*n as f32) <= TJ_WORD_GAP => push_gap(&mut out),
            _ => {}
        }
    }
    out
}

fn push_gap(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}

fn string_operand(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        _ => None,
    }
}

/// UTF-16BE when the string carries a byte order mark, otherwise one char per byte.
fn decode_pdf_string(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(rest) => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        None => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Join runs within a page with a single space and pages with `\n`.
///
/// A separator is only inserted where neither side of the boundary already has whitespace,
/// so a run that is itself a space does not produce a double space.
pub fn join_pages(pages: &[Vec<String>]) -> String {
    pages.iter().map(|runs| join_runs(runs)).collect::<Vec<_>>().join("\n")
}

fn join_runs(runs: &[String]) -> String {
    let mut out = String::new();
    for run in runs {
        let needs_space = !out.is_empty()
            && !out.ends_with(char::is_whitespace)
            && !run.is_empty()
            && !run.starts_with(char::is_whitespace);
        if needs_space {
            out.push(' ');
        }
        out.push_str(run);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn join_pages_spaces_runs_and_breaks_pages() {
        let pages = vec![runs(&["Hello", " ", "World"]), runs(&["Again"])];
        assert_eq!(join_pages(&pages), "Hello World\nAgain");
    }

    #[test]
    fn join_runs_adds_single_space_between_words() {
        assert_eq!(join_runs(&runs(&["a", "b", "c"])), "a b c");
        assert_eq!(join_runs(&runs(&["a ", "b"])), "a b");
        assert_eq!(join_runs(&runs(&[])), "");
    }

    #[test]
    fn empty_page_still_takes_a_line() {
        let pages = vec![runs(&["one"]), runs(&[]), runs(&["three"])];
        assert_eq!(join_pages(&pages), "one\n\nthree");
    }

    #[test]
    fn tj_array_honors_word_gaps() {
        let items = vec![
            Object::string_literal("Hel"),
            Object::Integer(-20),
            Object::string_literal("lo"),
            Object::Integer(-300),
            Object::string_literal("World"),
        ];
        assert_eq!(tj_array(&items), "Hello World");
    }

    #[test]
    fn decode_pdf_string_handles_utf16_bom() {
        assert_eq!(decode_pdf_string(&[0xFE, 0xFF, 0x00, 0x48, 0x00, 0xE9]), "Hé");
        assert_eq!(decode_pdf_string(b"plain"), "plain");
    }

    #[test]
    fn garbage_bytes_are_a_parse_failure() {
        let err = ingest_pdf_from_bytes("bad.pdf", b"definitely not a pdf").unwrap_err();
        assert!(matches!(
            err,
            IngestError::ParseFailure {
                kind: FileKind::Pdf,
                ..
            }
        ));
    }
}
