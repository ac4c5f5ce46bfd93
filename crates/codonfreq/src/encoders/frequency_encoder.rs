//! # Frequency Encoder Trait

use std::sync::Arc;

use rand::{Rng, seq::SliceRandom};

use crate::encoders::codon_frequencies::{encode_frequencies, encode_indices};
use crate::encoders::negative_sampling::{sample_frequencies, sampled_chunk_count};
use crate::encoders::samples::{Label, LabeledSample, TracedSample};
use crate::errors::CFResult;
use crate::types::FrequencyType;
use crate::vocab::CodonVocab;

/// A trait for codon frequency encoders.
///
/// Implementors only provide the vocabulary; encoding, sampling,
/// and dataset assembly are provided.
///
/// Batch entry points take sequences as slices so that
/// parallel implementations may override them.
pub trait FrequencyEncoder: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &CodonVocab;

    /// Encode a sequence into vocabulary indices.
    ///
    /// ## Errors
    /// * [`crate::CodonError::UnknownToken`] if a codon was never learned.
    fn encode_indices(
        &self,
        sequence: &str,
    ) -> CFResult<Vec<usize>> {
        encode_indices(self.vocab(), sequence)
    }

    /// Encode a sequence into a codon frequency vector.
    ///
    /// ## Arguments
    /// * `sequence` - The sequence to encode.
    ///
    /// ## Returns
    /// A vector with one frequency per vocabulary codon.
    ///
    /// ## Errors
    /// * [`crate::CodonError::UnknownToken`] if a codon was never learned.
    /// * [`crate::CodonError::DivisionUndefined`] if the sequence has no full codon.
    fn encode<F: FrequencyType>(
        &self,
        sequence: &str,
    ) -> CFResult<Vec<F>> {
        encode_frequencies(self.vocab(), sequence)
    }

    /// The number of codons drawn by [`Self::sample`] for a sequence.
    fn sampled_chunk_count(
        &self,
        sequence: &str,
    ) -> usize {
        sampled_chunk_count(self.vocab(), sequence)
    }

    /// Sample a synthetic frequency vector matched to a sequence's length.
    ///
    /// ## Arguments
    /// * `sequence` - The real sequence; only its length is used.
    /// * `rng` - The randomness source.
    ///
    /// ## Errors
    /// * [`crate::CodonError::EmptyVocabulary`] if the vocabulary is empty.
    /// * [`crate::CodonError::DivisionUndefined`] if the sequence rounds to zero codons.
    fn sample_with_rng<F, R>(
        &self,
        sequence: &str,
        rng: &mut R,
    ) -> CFResult<Vec<F>>
    where
        F: FrequencyType,
        R: Rng + ?Sized,
    {
        sample_frequencies(self.vocab(), sequence, rng)
    }

    /// Sample a synthetic frequency vector using the thread-local rng.
    ///
    /// See [`Self::sample_with_rng`].
    fn sample<F: FrequencyType>(
        &self,
        sequence: &str,
    ) -> CFResult<Vec<F>> {
        self.sample_with_rng(sequence, &mut rand::rng())
    }

    /// Encode a batch of sequences.
    ///
    /// ## Returns
    /// One frequency vector per sequence, in input order.
    fn encode_batch<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<Vec<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        sequences
            .iter()
            .map(|sequence| self.encode(sequence.as_ref()))
            .collect()
    }

    /// Sample one negative per sequence.
    ///
    /// ## Returns
    /// One sampled frequency vector per sequence, in input order.
    fn sample_batch_with_rng<F, S, R>(
        &self,
        sequences: &[S],
        rng: &mut R,
    ) -> CFResult<Vec<Vec<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
        R: Rng + ?Sized,
    {
        sequences
            .iter()
            .map(|sequence| self.sample_with_rng(sequence.as_ref(), rng))
            .collect()
    }

    /// Encode each sequence as a positive, keeping the source sequence.
    ///
    /// ## Returns
    /// One [`Label::Positive`] sample per sequence, in input order.
    fn encode_positives<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<TracedSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        let frequencies = self.encode_batch(sequences)?;
        Ok(trace_samples(sequences, frequencies, Label::Positive))
    }

    /// Sample a negative for each sequence, keeping the source sequence.
    ///
    /// ## Returns
    /// One [`Label::Negative`] sample per sequence, in input order.
    fn encode_negatives_with_rng<F, S, R>(
        &self,
        sequences: &[S],
        rng: &mut R,
    ) -> CFResult<Vec<TracedSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
        R: Rng + ?Sized,
    {
        let frequencies = self.sample_batch_with_rng(sequences, rng)?;
        Ok(trace_samples(sequences, frequencies, Label::Negative))
    }

    /// Sample negatives using the thread-local rng.
    ///
    /// See [`Self::encode_negatives_with_rng`].
    fn encode_negatives<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<TracedSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        self.encode_negatives_with_rng(sequences, &mut rand::rng())
    }

    /// Build a shuffled, label-balanced dataset.
    ///
    /// Each sequence contributes one encoded positive and one sampled
    /// negative; the combined samples are uniformly shuffled with `rng`.
    ///
    /// ## Returns
    /// ``2 * sequences.len()`` samples, half of each label.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn encode_dataset_with_rng<F, S, R>(
        &self,
        sequences: &[S],
        rng: &mut R,
    ) -> CFResult<Vec<LabeledSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
        R: Rng + ?Sized,
    {
        let positives = self.encode_batch(sequences)?;
        let negatives = self.sample_batch_with_rng(sequences, rng)?;

        log::info!(
            "{}: encoded {} positives and {} negatives",
            self.vocab().name(),
            positives.len(),
            negatives.len()
        );

        let mut dataset: Vec<LabeledSample<F>> = positives
            .into_iter()
            .map(|frequencies| LabeledSample::new(frequencies, Label::Positive))
            .chain(
                negatives
                    .into_iter()
                    .map(|frequencies| LabeledSample::new(frequencies, Label::Negative)),
            )
            .collect();

        dataset.shuffle(rng);
        Ok(dataset)
    }

    /// Build a shuffled dataset using the thread-local rng.
    ///
    /// See [`Self::encode_dataset_with_rng`].
    fn encode_dataset<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<LabeledSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        self.encode_dataset_with_rng(sequences, &mut rand::rng())
    }
}

impl<E: FrequencyEncoder> FrequencyEncoder for Arc<E> {
    fn vocab(&self) -> &CodonVocab {
        (**self).vocab()
    }

    fn encode_batch<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<Vec<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        (**self).encode_batch(sequences)
    }

    fn sample_batch_with_rng<F, S, R>(
        &self,
        sequences: &[S],
        rng: &mut R,
    ) -> CFResult<Vec<Vec<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
        R: Rng + ?Sized,
    {
        (**self).sample_batch_with_rng(sequences, rng)
    }
}

fn trace_samples<F, S>(
    sequences: &[S],
    frequencies: Vec<Vec<F>>,
    label: Label,
) -> Vec<TracedSample<F>>
where
    F: FrequencyType,
    S: AsRef<str>,
{
    sequences
        .iter()
        .zip(frequencies)
        .map(|(sequence, frequencies)| TracedSample::new(sequence.as_ref(), frequencies, label))
        .collect()
}
