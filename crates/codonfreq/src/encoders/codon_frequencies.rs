//! # Codon Frequency Encoding
//!
//! A sequence is encoded as the empirical frequency of each vocabulary codon
//! over the sequence's own chunk count.
//!
//! Only the checked entry points are public; the raw count normalization
//! assumes its indices were already validated.
//!
//! ```rust,compile_fail
//! use codonfreq::encoders::codon_frequencies::index_frequencies;
//! ```

use crate::errors::{CFResult, CodonError};
use crate::types::{FrequencyType, count_to_frequency};
use crate::vocab::{CodonChunks, CodonVocab};

/// Map each codon of a sequence to its vocabulary index.
///
/// ## Arguments
/// * `vocab` - The vocabulary to look codons up in.
/// * `sequence` - The sequence to encode.
///
/// ## Returns
/// The codon indices, in sequence order.
///
/// ## Errors
/// * [`CodonError::UnknownToken`] for the first codon not in the vocabulary.
pub fn encode_indices(
    vocab: &CodonVocab,
    sequence: &str,
) -> CFResult<Vec<usize>> {
    CodonChunks::new(sequence, vocab.codon_length())
        .enumerate()
        .map(|(position, codon)| {
            vocab
                .lookup_index(codon)
                .ok_or_else(|| CodonError::UnknownToken {
                    codon: codon.to_string(),
                    position,
                })
        })
        .collect()
}

/// Build a normalized frequency vector from vocabulary indices.
///
/// The result has `size` entries; entry `i` is the number of
/// occurrences of `i` in `indices`, divided by ``indices.len()``.
///
/// Every index must be `< size`, and `indices` must be non-empty.
pub(crate) fn index_frequencies<F: FrequencyType>(
    size: usize,
    indices: &[usize],
) -> Vec<F> {
    debug_assert!(!indices.is_empty());

    let mut counts = vec![0usize; size];
    for &idx in indices {
        counts[idx] += 1;
    }

    let total: F = count_to_frequency(indices.len());
    counts
        .into_iter()
        .map(|count| count_to_frequency::<F>(count) / total)
        .collect()
}

/// Encode a sequence as a codon frequency vector.
///
/// ## Arguments
/// * `vocab` - The vocabulary; every codon of `sequence` must be known.
/// * `sequence` - The sequence to encode.
///
/// ## Returns
/// A vector of ``vocab.len()`` frequencies summing to 1.
///
/// ## Errors
/// * [`CodonError::UnknownToken`] if a codon was never learned.
/// * [`CodonError::DivisionUndefined`] if the sequence is shorter than one codon.
pub fn encode_frequencies<F: FrequencyType>(
    vocab: &CodonVocab,
    sequence: &str,
) -> CFResult<Vec<F>> {
    let indices = encode_indices(vocab, sequence)?;
    if indices.is_empty() {
        return Err(CodonError::DivisionUndefined {
            sequence_len: sequence.chars().count(),
            codon_length: vocab.codon_length(),
        });
    }
    Ok(index_frequencies(vocab.len(), &indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vocab() -> CodonVocab {
        let mut vocab = CodonVocab::new("dna", 2).unwrap();
        vocab.learn_all(["AAAA", "AACC", "ACAC"]);
        vocab
    }

    #[test]
    fn test_encode_indices() {
        let vocab = test_vocab();
        assert_eq!(encode_indices(&vocab, "AACCACA").unwrap(), vec![0, 1, 2]);
        assert!(encode_indices(&vocab, "A").unwrap().is_empty());
    }

    #[test]
    fn test_encode_frequencies() {
        let vocab = test_vocab();
        assert_eq!(vocab.codons(), &["AA", "CC", "AC"]);

        let freqs: Vec<f32> = encode_frequencies(&vocab, "AAAA").unwrap();
        assert_eq!(freqs, vec![1.0, 0.0, 0.0]);

        let freqs: Vec<f32> = encode_frequencies(&vocab, "AACC").unwrap();
        assert_eq!(freqs, vec![0.5, 0.5, 0.0]);

        let freqs: Vec<f64> = encode_frequencies(&vocab, "ACACAAC").unwrap();
        assert_eq!(freqs, vec![1.0 / 3.0, 0.0, 2.0 / 3.0]);
    }

    #[test]
    fn test_encode_unknown_codon() {
        let vocab = test_vocab();
        let err = encode_frequencies::<f32>(&vocab, "AAGT").unwrap_err();
        match err {
            CodonError::UnknownToken { codon, position } => {
                assert_eq!(codon, "GT");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_encode_too_short() {
        let vocab = test_vocab();
        assert!(matches!(
            encode_frequencies::<f32>(&vocab, "A"),
            Err(CodonError::DivisionUndefined {
                sequence_len: 1,
                codon_length: 2
            })
        ));
        assert!(matches!(
            encode_frequencies::<f32>(&vocab, ""),
            Err(CodonError::DivisionUndefined { .. })
        ));
    }

    #[test]
    fn test_index_frequencies() {
        let freqs: Vec<f32> = index_frequencies(4, &[3, 3, 0, 3]);
        assert_eq!(freqs, vec![0.25, 0.0, 0.0, 0.75]);
    }
}
