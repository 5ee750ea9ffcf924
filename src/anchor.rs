//! Evidence anchoring: locates the span of a document that an oracle-supplied
//! evidence string (quote or key phrase) refers to, even when the evidence
//! was paraphrased or the source text was corrupted by upstream extraction.
//!
//! Two paths with graceful degradation:
//! 1. exact — case-insensitive substring search over a lowercase fold that
//!    preserves byte offsets; succeeds on clean documents in O(n).
//! 2. fuzzy — a word window slid across the document, scored by how many
//!    signature tokens it contains; abstains below the score threshold,
//!    since a wrong highlight misleads more than a missing one.

use std::collections::HashSet;

use crate::config::Config;
use crate::model::MatchKind;
use crate::normalize;

/// Tokens excluded from fuzzy signatures: articles, prepositions, and common
/// auxiliary verbs carry no locating signal.
const STOP_WORDS: [&str; 43] = [
    "a", "an", "the", "and", "or", "but", "if", "of", "at", "by", "for", "with", "about", "into",
    "onto", "to", "from", "in", "on", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "do", "does", "did", "will", "would", "shall", "should", "may", "might", "must",
    "can", "could", "this", "that",
];

/// A located span plus how it was found. Does not carry a pairing id; the
/// caller attaches one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceMatch {
    pub start_offset: usize,
    pub end_offset: usize,
    pub match_kind: MatchKind,
}

pub struct EvidenceAnchor {
    stop_words: HashSet<&'static str>,
    score_threshold: f64,
    max_signature_tokens: usize,
    min_signature_tokens: usize,
    window_min: usize,
    window_max: usize,
}

impl EvidenceAnchor {
    pub fn new(config: &Config) -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            score_threshold: config.score_threshold,
            max_signature_tokens: config.max_signature_tokens,
            min_signature_tokens: config.min_signature_tokens,
            window_min: config.window_min,
            window_max: config.window_max,
        }
    }

    /// Anchor `evidence` onto `text`. Returns `None` when neither path finds
    /// a qualifying span; the caller renders that side without a highlight.
    pub fn anchor(&self, evidence: &str, text: &str) -> Option<EvidenceMatch> {
        let evidence = evidence.trim();
        if evidence.is_empty() || text.is_empty() {
            return None;
        }

        if let Some((start, end)) = exact_match(evidence, text) {
            return Some(EvidenceMatch {
                start_offset: start,
                end_offset: end,
                match_kind: MatchKind::Exact,
            });
        }

        self.fuzzy_match(evidence, text)
            .map(|(start, end)| EvidenceMatch {
                start_offset: start,
                end_offset: end,
                match_kind: MatchKind::Fuzzy,
            })
    }

    /// Filtered significant tokens of the evidence string, capped at
    /// `max_signature_tokens`.
    fn signature(&self, evidence: &str) -> Vec<String> {
        evidence
            .split_whitespace()
            .map(normalize::clean_token)
            .filter(|t| t.chars().count() >= 3 && !self.stop_words.contains(t.as_str()))
            .take(self.max_signature_tokens)
            .collect()
    }

    /// Slide a word window across the document, scoring each position by the
    /// fraction of signature tokens present as substrings of the window.
    /// Strict `>` keeps the earliest best window, so the scan is
    /// deterministic.
    fn fuzzy_match(&self, evidence: &str, text: &str) -> Option<(usize, usize)> {
        let signature = self.signature(evidence);
        if signature.len() < self.min_signature_tokens {
            return None;
        }

        let words = normalize::word_spans(text);
        if words.is_empty() {
            return None;
        }
        let window = (3 * signature.len())
            .clamp(self.window_min, self.window_max)
            .min(words.len());

        let mut best: Option<(usize, f64)> = None;
        for i in 0..=(words.len() - window) {
            let window_text = text[words[i].start..words[i + window - 1].end].to_lowercase();
            let hits = signature
                .iter()
                .filter(|token| window_text.contains(token.as_str()))
                .count();
            let score = hits as f64 / signature.len() as f64;
            if score >= self.score_threshold && best.is_none_or(|(_, b)| score > b) {
                best = Some((i, score));
            }
        }

        best.map(|(i, _)| (words[i].start, words[i + window - 1].end))
    }
}

/// Case-insensitive substring search. Both sides are folded char-by-char so
/// the hit position maps back to byte offsets in the original text.
fn exact_match(evidence: &str, text: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = evidence
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    if needle.is_empty() {
        return None;
    }

    let entries = normalize::lower_entries(text);
    if entries.len() < needle.len() {
        return None;
    }
    let haystack: Vec<char> = entries.iter().map(|&(_, c)| c).collect();
    let pos = haystack.windows(needle.len()).position(|w| w == needle)?;

    let start = entries[pos].0;
    let end = entries
        .get(pos + needle.len())
        .map(|&(offset, _)| offset)
        .unwrap_or(text.len());
    Some((start, end))
}

impl Default for EvidenceAnchor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
