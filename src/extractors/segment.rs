// src/extractors/segment.rs
use serde::Serialize;

// --- Constants ---
/// Phrase that separates the ruling header from the report-and-vote body.
/// Shared with the vote extraction rules in `fields`, which assume the same
/// document structure.
pub const SEGMENT_MARKER: &str = "RELATÓRIO E VOTO";

/// Placeholder stored in the second segment when the marker is absent.
/// Downstream consumers detect fallback rows by comparing against this value.
pub const UNSEGMENTED_SENTINEL: &str = "Texto não segmentado corretamente";

// --- Data Structures ---
/// The two-way split of one document's normalized text.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPair {
    /// Text before the marker (the acórdão header).
    pub acordao: String,
    /// The marker plus everything after it, or [`UNSEGMENTED_SENTINEL`].
    pub relatorio: String,
}

/// One row of the segmented-texts table: a [`SegmentPair`] tagged with the
/// source file name. Field names double as CSV column headers.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentRow {
    pub nome_pdf: String,
    pub acordao: String,
    pub relatorio: String,
}

impl SegmentRow {
    pub fn new(nome_pdf: String, pair: SegmentPair) -> Self {
        Self {
            nome_pdf,
            acordao: pair.acordao,
            relatorio: pair.relatorio,
        }
    }
}

/// Splits normalized text at the first occurrence of [`SEGMENT_MARKER`]
/// (case-sensitive).
///
/// When the marker is present the marker itself is prepended back onto the
/// suffix, so `acordao + relatorio` reconstructs the input exactly. When it is
/// absent the whole text lands in `acordao` and `relatorio` carries the
/// sentinel; that is a degraded outcome, not an error.
pub fn segment(text: &str) -> SegmentPair {
    match text.split_once(SEGMENT_MARKER) {
        Some((before, after)) => SegmentPair {
            acordao: before.to_string(),
            relatorio: format!("{SEGMENT_MARKER}{after}"),
        },
        None => {
            tracing::debug!("Segment marker not found, emitting fallback row");
            SegmentPair {
                acordao: text.to_string(),
                relatorio: UNSEGMENTED_SENTINEL.to_string(),
            }
        }
    }
}
