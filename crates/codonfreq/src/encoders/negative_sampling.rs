//! # Negative Sampling
//!
//! A negative is a frequency vector over codons drawn uniformly at random
//! (independently, with replacement) from the vocabulary. Only the number of
//! draws is taken from the real sequence, calibrated to its length.
//!
//! Nothing prevents a draw from reproducing the codon multiset of a real sequence.
//!
//! ```rust,compile_fail
//! use codonfreq::encoders::negative_sampling::draw_indices;
//! ```

use rand::Rng;

use crate::encoders::codon_frequencies::index_frequencies;
use crate::errors::{CFResult, CodonError};
use crate::types::FrequencyType;
use crate::vocab::{CodonVocab, rounded_chunk_count};

/// The number of codons drawn for a negative matched to `sequence`.
///
/// See [`rounded_chunk_count`].
pub fn sampled_chunk_count(
    vocab: &CodonVocab,
    sequence: &str,
) -> usize {
    rounded_chunk_count(sequence.chars().count(), vocab.codon_length())
}

/// Draw `count` uniform vocabulary indices.
///
/// ## Errors
/// * [`CodonError::EmptyVocabulary`] if the vocabulary is empty.
pub(crate) fn draw_indices<R: Rng + ?Sized>(
    vocab: &CodonVocab,
    count: usize,
    rng: &mut R,
) -> CFResult<Vec<usize>> {
    if vocab.is_empty() {
        return Err(CodonError::EmptyVocabulary);
    }
    let size = vocab.len();
    Ok((0..count).map(|_| rng.random_range(0..size)).collect())
}

/// Sample a synthetic frequency vector matched to a sequence's length.
///
/// ## Arguments
/// * `vocab` - The vocabulary to draw codons from.
/// * `sequence` - The real sequence; only its length is used.
/// * `rng` - The randomness source.
///
/// ## Returns
/// A vector of ``vocab.len()`` frequencies summing to 1.
///
/// ## Errors
/// * [`CodonError::EmptyVocabulary`] if the vocabulary is empty.
/// * [`CodonError::DivisionUndefined`] if the sequence rounds to zero codons.
pub fn sample_frequencies<F, R>(
    vocab: &CodonVocab,
    sequence: &str,
    rng: &mut R,
) -> CFResult<Vec<F>>
where
    F: FrequencyType,
    R: Rng + ?Sized,
{
    if vocab.is_empty() {
        return Err(CodonError::EmptyVocabulary);
    }

    let sequence_len = sequence.chars().count();
    let count = rounded_chunk_count(sequence_len, vocab.codon_length());
    if count == 0 {
        return Err(CodonError::DivisionUndefined {
            sequence_len,
            codon_length: vocab.codon_length(),
        });
    }

    log::trace!(
        "sampling {} codons for sequence of length {}",
        count,
        sequence_len
    );

    let draws = draw_indices(vocab, count, rng)?;
    Ok(index_frequencies(vocab.len(), &draws))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn test_vocab() -> CodonVocab {
        let mut vocab = CodonVocab::new("dna", 3).unwrap();
        vocab.learn("ATGGCCATTGTAATGGGC");
        vocab
    }

    #[test]
    fn test_sample_sums_to_one() {
        let vocab = test_vocab();
        let mut rng = StdRng::seed_from_u64(42);

        for sequence in ["ATG", "ATGGCCAT", "ATGGCCATTGTAATGGGCCGCTGA"] {
            let freqs: Vec<f64> = sample_frequencies(&vocab, sequence, &mut rng).unwrap();
            assert_eq!(freqs.len(), vocab.len());
            assert!(freqs.iter().all(|&f| f >= 0.0));
            assert!((freqs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_chunk_count_granularity() {
        let vocab = test_vocab();
        let mut rng = StdRng::seed_from_u64(7);

        // 8 / 3 rounds to 3 draws; every frequency is a multiple of 1/3.
        assert_eq!(sampled_chunk_count(&vocab, "ATGGCCAT"), 3);
        let freqs: Vec<f64> = sample_frequencies(&vocab, "ATGGCCAT", &mut rng).unwrap();
        for f in freqs {
            let scaled = f * 3.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_is_deterministic_for_seed() {
        let vocab = test_vocab();
        let sequence = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";

        let a: Vec<f32> =
            sample_frequencies(&vocab, sequence, &mut StdRng::seed_from_u64(3)).unwrap();
        let b: Vec<f32> =
            sample_frequencies(&vocab, sequence, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_draws_stay_in_range() {
        let vocab = test_vocab();
        let mut rng = StdRng::seed_from_u64(11);
        let draws = draw_indices(&vocab, 1000, &mut rng).unwrap();
        assert!(draws.iter().all(|&idx| idx < vocab.len()));
    }

    #[test]
    fn test_sample_empty_vocab() {
        let vocab = CodonVocab::new("dna", 3).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_frequencies::<f32, _>(&vocab, "ATGGCC", &mut rng),
            Err(CodonError::EmptyVocabulary)
        ));
        // Empty vocab is reported before the chunk count.
        assert!(matches!(
            sample_frequencies::<f32, _>(&vocab, "", &mut rng),
            Err(CodonError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_sample_too_short() {
        let vocab = test_vocab();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_frequencies::<f32, _>(&vocab, "A", &mut rng),
            Err(CodonError::DivisionUndefined {
                sequence_len: 1,
                codon_length: 3
            })
        ));

        // 2 / 3 rounds up to a single draw.
        let freqs: Vec<f32> = sample_frequencies(&vocab, "AT", &mut rng).unwrap();
        assert_eq!(freqs.iter().filter(|&&f| f == 1.0).count(), 1);
    }
}
