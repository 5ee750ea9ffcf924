use serde::{Deserialize, Serialize};

/// An input document: immutable text plus a caller-supplied identifier.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A structurally-identified region of a document (e.g. a numbered section).
/// Offsets are byte offsets into the original text, always on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub id: usize,
    pub label: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// An overlapping word window produced by the chunker. Transient: consumed
/// by the oracle call and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start_word: usize,
    pub end_word: usize,
    pub text: String,
}

/// Confidence tier supplied by the oracle, never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// A declared correspondence between units across the two documents.
/// At most one of `left_units` / `right_units` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub pairing_id: usize,
    pub label: String,
    pub color: String,
    pub confidence: Confidence,
    pub left_units: Vec<String>,
    pub right_units: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// A located evidence region on one document side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvidenceSpan {
    pub pairing_id: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub match_kind: MatchKind,
}

/// One piece of rendered output: plain text or text tagged with the pairing
/// it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub pairing_id: Option<usize>,
}
