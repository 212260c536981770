//! Output boundary: turn an [`Outcome`] into something a display layer can show.

use std::fmt::Write as _;

use crate::types::{Ingested, Outcome};

/// What to show for an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Nothing to show (idle, or a read is in flight).
    Empty,
    /// CSV rows: the first row is the header, the rest are the body.
    Table { header: Vec<String>, body: Vec<Vec<String>> },
    /// Plain or PDF-extracted text in a monospace block.
    Preformatted(String),
    /// One human-readable error message shown in place of results.
    ErrorBanner(String),
}

/// Map an outcome to a view.
pub fn render(outcome: &Outcome) -> View {
    match outcome {
        Outcome::Idle | Outcome::Pending { .. } => View::Empty,
        Outcome::Loaded(ingested) => render_ingested(ingested),
        Outcome::Failed(err) => View::ErrorBanner(err.user_message().to_string()),
    }
}

/// Map a successful result to a view.
pub fn render_ingested(ingested: &Ingested) -> View {
    match ingested {
        Ingested::Csv { rows } => {
            let mut rows = rows.iter();
            let header = rows.next().cloned().unwrap_or_default();
            View::Table {
                header,
                body: rows.cloned().collect(),
            }
        }
        Ingested::Text { content } | Ingested::PdfText { content } => View::Preformatted(content.clone()),
    }
}

impl View {
    /// Render as an HTML fragment. All text is escaped.
    pub fn to_html(&self) -> String {
        match self {
            View::Empty => String::new(),
            View::Table { header, body } => {
                let mut out = String::from("<table><thead><tr>");
                for cell in header {
                    let _ = write!(out, "<th>{}</th>", escape_html(cell));
                }
                out.push_str("</tr></thead><tbody>");
                for row in body {
                    out.push_str("<tr>");
                    for cell in row {
                        let _ = write!(out, "<td>{}</td>", escape_html(cell));
                    }
                    out.push_str("</tr>");
                }
                out.push_str("</tbody></table>");
                out
            }
            View::Preformatted(text) => format!("<pre>{}</pre>", escape_html(text)),
            View::ErrorBanner(message) => format!("<div class=\"error-message\">{}</div>", escape_html(message)),
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
