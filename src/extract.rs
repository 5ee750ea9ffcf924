//! Unit extraction: scans raw document text for section-like structures and
//! returns an ordered, non-overlapping list of [`Unit`]s.
//!
//! Four heuristic tiers, each a fallback for the previous one. The first
//! tier that matches at least once is used for the whole document; tiers are
//! never mixed. Zero units is a valid outcome — callers treat it as "whole
//! document is one implicit unit".

use regex::Regex;

use crate::model::Unit;

pub struct UnitExtractor {
    // **1. DEFINITIONS** on its own line
    bold_heading: Regex,
    // 2.3 Titlecased phrase at line start
    numbered_heading: Regex,
    // same shape but merged mid-line by corrupted PDF extraction
    embedded_heading: Regex,
    // any "<int>. <word>" occurrence, last resort
    lenient: Regex,
}

impl UnitExtractor {
    pub fn new() -> Self {
        Self {
            bold_heading: Regex::new(r"(?m)^\*\*\d+\.\s+.+?\*\*\s*$").unwrap(),
            numbered_heading: Regex::new(r"(?m)^\d+(?:\.\d+)*\.?\s+[A-Z][A-Za-z][^\n]*").unwrap(),
            embedded_heading: Regex::new(
                r"\d+(?:\.\d+)*\.\s+[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*",
            )
            .unwrap(),
            lenient: Regex::new(r"\d+\.\s+\w+").unwrap(),
        }
    }

    /// Extract units using the first tier that yields at least one match.
    pub fn extract(&self, text: &str) -> Vec<Unit> {
        let tiers = [
            &self.bold_heading,
            &self.numbered_heading,
            &self.embedded_heading,
            &self.lenient,
        ];

        for tier in tiers {
            let units = Self::apply_tier(tier, text);
            if !units.is_empty() {
                return units;
            }
        }
        Vec::new()
    }

    /// Collect matches of one tier and turn them into units whose span runs
    /// from the match start to the next match start (last one clamped to the
    /// end of the text).
    fn apply_tier(pattern: &Regex, text: &str) -> Vec<Unit> {
        let matches: Vec<(usize, String)> = pattern
            .find_iter(text)
            .map(|m| (m.start(), m.as_str().trim_end().to_string()))
            .collect();

        matches
            .iter()
            .enumerate()
            .map(|(id, (start, label))| Unit {
                id,
                label: label.clone(),
                start_offset: *start,
                end_offset: matches
                    .get(id + 1)
                    .map(|(next_start, _)| *next_start)
                    .unwrap_or(text.len()),
            })
            .collect()
    }
}

impl Default for UnitExtractor {
    fn default() -> Self {
        Self::new()
    }
}
