use thiserror::Error;

/// Hard failures of a comparison run. Zero extracted units and anchoring
/// abstention are ordinary results, not errors.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The oracle payload still fails to parse after escape repair.
    #[error("oracle payload unparseable after repair at line {line}, column {column}: {message}")]
    ParseFailure {
        line: usize,
        column: usize,
        message: String,
    },

    /// The oracle broke its contract for one correspondence.
    #[error("invalid correspondence at index {index}: {reason}")]
    InvalidCorrespondence { index: usize, reason: String },

    /// Chunker called with an overlap that can never advance.
    #[error("invalid chunking: overlap_words ({overlap_words}) must be smaller than chunk_words ({chunk_words})")]
    InvalidChunking {
        chunk_words: usize,
        overlap_words: usize,
    },
}
