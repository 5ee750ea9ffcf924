//! Glue for one comparison run: extract units on both sides, repair and
//! parse the saved oracle payload, build pairings, anchor every evidence
//! string, and render both documents into tagged segments.

use serde::Serialize;
use tracing::{debug, info};

use crate::anchor::EvidenceAnchor;
use crate::config::Config;
use crate::error::AlignError;
use crate::extract::UnitExtractor;
use crate::model::{Document, EvidenceSpan, Pairing, Segment, Unit};
use crate::oracle::{DeclaredUnit, DocumentTypeInfo, OracleResponse};
use crate::pairing::Bookkeeper;
use crate::render::render_segments;
use crate::repair;

/// Complete result of one comparison run. Immutable once built; the UI
/// correlates everything through `pairing_id`.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentRun {
    pub document_type: Option<DocumentTypeInfo>,
    /// Units the oracle claims to have seen, forwarded untouched; the
    /// `left_units`/`right_units` fields below hold what the extractor found.
    pub oracle_units: Vec<DeclaredUnit>,
    pub pairings: Vec<Pairing>,
    pub left_units: Vec<Unit>,
    pub right_units: Vec<Unit>,
    pub left_spans: Vec<EvidenceSpan>,
    pub right_spans: Vec<EvidenceSpan>,
    pub left_segments: Vec<Segment>,
    pub right_segments: Vec<Segment>,
}

/// Run the full alignment pipeline over two documents and a raw oracle
/// payload. A `ParseFailure` or invalid correspondence aborts the run; all
/// other degradations (no units, anchoring abstention) produce partial
/// results instead.
pub fn run_alignment(
    config: &Config,
    left: &Document,
    right: &Document,
    raw_payload: &str,
) -> Result<AlignmentRun, AlignError> {
    let extractor = UnitExtractor::new();
    let left_units = extractor.extract(&left.text);
    let right_units = extractor.extract(&right.text);
    info!(
        left = left_units.len(),
        right = right_units.len(),
        "extracted units"
    );
    if left_units.is_empty() {
        info!(document = %left.id, "no units detected, treating whole document as one unit");
    }
    if right_units.is_empty() {
        info!(document = %right.id, "no units detected, treating whole document as one unit");
    }

    let response: OracleResponse = repair::parse_payload(raw_payload)?;

    let pairings = Bookkeeper::new(config.palette.clone()).build(&response.correspondences)?;
    info!(pairings = pairings.len(), "built pairings");

    let anchor = EvidenceAnchor::new(config);
    let mut left_spans = Vec::new();
    let mut right_spans = Vec::new();

    for (pairing, corr) in pairings.iter().zip(&response.correspondences) {
        for evidence in &corr.left_evidence {
            match anchor.anchor(evidence, &left.text) {
                Some(m) => left_spans.push(EvidenceSpan {
                    pairing_id: pairing.pairing_id,
                    start_offset: m.start_offset,
                    end_offset: m.end_offset,
                    match_kind: m.match_kind,
                }),
                None => debug!(
                    pairing_id = pairing.pairing_id,
                    side = "left",
                    evidence = %evidence,
                    "no qualifying span, skipping highlight"
                ),
            }
        }
        for evidence in &corr.right_evidence {
            match anchor.anchor(evidence, &right.text) {
                Some(m) => right_spans.push(EvidenceSpan {
                    pairing_id: pairing.pairing_id,
                    start_offset: m.start_offset,
                    end_offset: m.end_offset,
                    match_kind: m.match_kind,
                }),
                None => debug!(
                    pairing_id = pairing.pairing_id,
                    side = "right",
                    evidence = %evidence,
                    "no qualifying span, skipping highlight"
                ),
            }
        }
    }
    info!(
        left = left_spans.len(),
        right = right_spans.len(),
        "anchored evidence spans"
    );

    let left_segments = render_segments(&left.text, &left_spans);
    let right_segments = render_segments(&right.text, &right_spans);

    Ok(AlignmentRun {
        document_type: response.document_type,
        oracle_units: response.units,
        pairings,
        left_units,
        right_units,
        left_spans,
        right_spans,
        left_segments,
        right_segments,
    })
}
