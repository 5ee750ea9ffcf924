//! Splits a document into overlapping fixed-size word windows so a
//! bounded-context oracle can process arbitrarily long documents without
//! losing cross-window context. No semantic work happens here.

use crate::error::AlignError;
use crate::model::Chunk;

/// Tile the document's words into chunks of `chunk_words`, each consecutive
/// pair sharing `overlap_words` words. The last chunk is clamped to the word
/// count and may be shorter. A document shorter than `chunk_words` yields
/// exactly one chunk; an empty document yields none.
pub fn chunk_document(
    text: &str,
    chunk_words: usize,
    overlap_words: usize,
) -> Result<Vec<Chunk>, AlignError> {
    if chunk_words == 0 || overlap_words >= chunk_words {
        return Err(AlignError::InvalidChunking {
            chunk_words,
            overlap_words,
        });
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let end = (start + chunk_words).min(words.len());
        chunks.push(Chunk {
            index: chunks.len(),
            start_word: start,
            end_word: end,
            text: words[start..end].join(" "),
        });
        if end == words.len() {
            break;
        }
        start = end - overlap_words;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_single_chunk_for_short_document() {
        let text = words(7);
        let chunks = chunk_document(&text, 10, 3).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_word, 0);
        assert_eq!(chunks[0].end_word, 7);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_overlap_invariant() {
        let text = words(25);
        let chunks = chunk_document(&text, 10, 3).unwrap();

        assert!(chunks.len() >= 3);
        for pair in chunks.windows(2) {
            assert_eq!(
                pair[0].end_word - pair[1].start_word,
                3,
                "consecutive chunks must overlap by overlap_words"
            );
        }
        // last chunk clamped to the word count
        assert_eq!(chunks.last().unwrap().end_word, 25);
    }

    #[test]
    fn test_coverage_no_gaps() {
        let text = words(53);
        let chunks = chunk_document(&text, 12, 4).unwrap();

        let mut covered = vec![false; 53];
        for c in &chunks {
            for w in c.start_word..c.end_word {
                covered[w] = true;
            }
        }
        assert!(covered.iter().all(|&c| c), "chunk ranges must cover every word");

        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, (0..chunks.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_document() {
        let chunks = chunk_document("   \n ", 10, 3).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk() {
        assert!(matches!(
            chunk_document("a b c", 5, 5),
            Err(AlignError::InvalidChunking { .. })
        ));
        assert!(matches!(
            chunk_document("a b c", 0, 0),
            Err(AlignError::InvalidChunking { .. })
        ));
    }

    #[test]
    fn test_exact_multiple_no_empty_tail() {
        // 20 words, chunk 10, overlap 2: windows [0,10) [8,18) [16,20)
        let text = words(20);
        let chunks = chunk_document(&text, 10, 2).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].start_word, 16);
        assert_eq!(chunks[2].end_word, 20);
    }
}
