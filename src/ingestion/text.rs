//! Plain-text ingestion implementation.

use crate::types::Ingested;

/// Wrap decoded text as [`Ingested::Text`] without modification.
pub fn ingest_text(content: String) -> Ingested {
    tracing::debug!(chars = content.chars().count(), "text passthrough");
    Ingested::Text { content }
}
