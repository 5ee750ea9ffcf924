//! Declared schema of the external semantic oracle's payload.
//!
//! The oracle decides which units correspond and what topics exist; this
//! core only validates and consumes its output. Fields are deliberately
//! lenient at the serde level (lists default to empty, tiers are optional)
//! so a missing required field surfaces as an invalid-correspondence error
//! from the bookkeeper instead of a parse failure, and a syntax error stays
//! a parse failure.

use serde::{Deserialize, Serialize};

use crate::model::Confidence;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OracleResponse {
    /// Document-type classification; unused by this core, passed through.
    #[serde(default)]
    pub document_type: Option<DocumentTypeInfo>,

    /// Units the oracle claims to have seen, per side. Informational only;
    /// pairings key off correspondence labels.
    #[serde(default)]
    pub units: Vec<DeclaredUnit>,

    #[serde(default)]
    pub correspondences: Vec<Correspondence>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentTypeInfo {
    pub label: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeclaredUnit {
    pub side: Side,
    pub label: String,
}

/// One oracle-declared correspondence between the two documents.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Correspondence {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub left_units: Vec<String>,

    #[serde(default)]
    pub right_units: Vec<String>,

    #[serde(default)]
    pub confidence: Option<Confidence>,

    /// Quotes or key phrases believed to describe this correspondence on
    /// each side; anchored back onto the text by the evidence anchor.
    #[serde(default)]
    pub left_evidence: Vec<String>,

    #[serde(default)]
    pub right_evidence: Vec<String>,

    /// Free-text difference summary, passed through to the UI layer.
    #[serde(default)]
    pub differences: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_correspondence_defaults() {
        let raw = r#"{"correspondences": [{"label": "Termination"}]}"#;
        let resp: OracleResponse = serde_json::from_str(raw).unwrap();
        let c = &resp.correspondences[0];

        assert_eq!(c.label.as_deref(), Some("Termination"));
        assert!(c.left_units.is_empty());
        assert!(c.right_units.is_empty());
        assert!(c.confidence.is_none());
        assert!(c.left_evidence.is_empty());
        assert!(c.differences.is_none());
    }

    #[test]
    fn test_full_response() {
        let raw = r#"{
            "document_type": {"label": "Non-Disclosure Agreement", "confidence": "high"},
            "units": [
                {"side": "left", "label": "1. DEFINITIONS"},
                {"side": "right", "label": "1. SCOPE"}
            ],
            "correspondences": [{
                "label": "Definitions",
                "left_units": ["1. DEFINITIONS"],
                "right_units": ["1. SCOPE"],
                "confidence": "medium",
                "left_evidence": ["The Discloser is JEA"],
                "right_evidence": [],
                "differences": "Variant narrows the definition."
            }]
        }"#;
        let resp: OracleResponse = serde_json::from_str(raw).unwrap();

        let dt = resp.document_type.unwrap();
        assert_eq!(dt.label, "Non-Disclosure Agreement");
        assert_eq!(dt.confidence, Confidence::High);
        assert_eq!(resp.units.len(), 2);
        assert_eq!(resp.units[0].side, Side::Left);
        assert_eq!(
            resp.correspondences[0].confidence,
            Some(Confidence::Medium)
        );
    }
}
