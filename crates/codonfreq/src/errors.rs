//! # Error Types

/// Errors from codonfreq operations.
#[derive(Debug, thiserror::Error)]
pub enum CodonError {
    /// A codon was encoded before it was learned.
    #[error("unknown codon {codon:?} at chunk {position}")]
    UnknownToken {
        /// The codon missing from the vocabulary.
        codon: String,

        /// The chunk index of the codon within the sequence.
        position: usize,
    },

    /// The sequence produced zero chunks to normalize over.
    #[error(
        "frequency normalization undefined: sequence length {sequence_len} yields no codons of length {codon_length}"
    )]
    DivisionUndefined {
        /// The length of the sequence, in characters.
        sequence_len: usize,

        /// The codon length of the vocabulary.
        codon_length: usize,
    },

    /// Sampling was requested against a vocabulary with no codons.
    #[error("cannot sample from an empty vocabulary")]
    EmptyVocabulary,

    /// The codon length must be positive.
    #[error("codon length must be > 0, got {codon_length}")]
    InvalidCodonLength {
        /// The rejected codon length.
        codon_length: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (json, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for codonfreq operations.
pub type CFResult<T> = core::result::Result<T, CodonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CodonError::UnknownToken {
            codon: "GT".to_string(),
            position: 3,
        };
        assert_eq!(err.to_string(), "unknown codon \"GT\" at chunk 3");

        let err = CodonError::DivisionUndefined {
            sequence_len: 1,
            codon_length: 2,
        };
        assert_eq!(
            err.to_string(),
            "frequency normalization undefined: sequence length 1 yields no codons of length 2"
        );

        assert_eq!(
            CodonError::EmptyVocabulary.to_string(),
            "cannot sample from an empty vocabulary"
        );
    }
}
