//! Leaf text utilities shared by the extractor, chunker, and anchor:
//! lowercase folding that preserves byte offsets, whitespace word spans,
//! and token cleanup for signature building.

/// Byte span of a whitespace-delimited word in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

/// Per-char lowercase fold keeping the original byte offset of every char,
/// so a match position in the folded stream maps straight back to a span in
/// the source text. Multi-char lowercase expansions are folded to their
/// first char to keep the mapping 1:1.
pub fn lower_entries(text: &str) -> Vec<(usize, char)> {
    text.char_indices()
        .map(|(i, c)| (i, c.to_lowercase().next().unwrap_or(c)))
        .collect()
}

/// Whitespace-delimited words with their byte spans.
pub fn word_spans(text: &str) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push(WordSpan { start: s, end: i });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push(WordSpan {
            start: s,
            end: text.len(),
        });
    }
    spans
}

/// Lowercase a word and strip every non-alphanumeric char.
pub fn clean_token(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
