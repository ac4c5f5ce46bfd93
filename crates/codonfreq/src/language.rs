//! # Language
//!
//! A [`Language`] owns a [`CodonVocab`] and exposes the
//! [`FrequencyEncoder`] surface over it.

use rand::Rng;

use crate::encoders::{FrequencyEncoder, LabeledSample};
use crate::errors::CFResult;
use crate::options::LanguageOptions;
use crate::types::FrequencyType;
use crate::vocab::CodonVocab;

/// A codon vocabulary plus frequency encoding.
///
/// The vocabulary is mutated only by [`Self::learn`] / [`Self::learn_all`];
/// every other operation reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    vocab: CodonVocab,
}

impl Language {
    /// Create an empty language.
    ///
    /// ## Errors
    /// * [`crate::CodonError::InvalidCodonLength`] if `codon_length` is 0.
    pub fn new<S: Into<String>>(
        name: S,
        codon_length: usize,
    ) -> CFResult<Self> {
        Ok(Self::from_vocab(CodonVocab::new(name, codon_length)?))
    }

    /// Create a language from [`LanguageOptions`].
    pub fn from_options(options: LanguageOptions) -> CFResult<Self> {
        options.init()
    }

    /// Wrap an existing vocabulary.
    pub fn from_vocab(vocab: CodonVocab) -> Self {
        Self { vocab }
    }

    /// Release the vocabulary.
    pub fn into_vocab(self) -> CodonVocab {
        self.vocab
    }

    /// The informational name.
    pub fn name(&self) -> &str {
        self.vocab.name()
    }

    /// The fixed codon width.
    pub fn codon_length(&self) -> usize {
        self.vocab.codon_length()
    }

    /// The number of known codons; the length of every encoded vector.
    pub fn size(&self) -> usize {
        self.vocab.len()
    }

    /// Split a sequence into codons.
    pub fn tokenize<'a>(
        &self,
        sequence: &'a str,
    ) -> Vec<&'a str> {
        self.vocab.tokenize(sequence)
    }

    /// Add the unseen codons of a sequence to the vocabulary.
    ///
    /// ## Returns
    /// The number of codons added.
    pub fn learn(
        &mut self,
        sequence: &str,
    ) -> usize {
        self.vocab.learn(sequence)
    }

    /// Learn every sequence in the iterator.
    ///
    /// ## Returns
    /// The number of codons added.
    pub fn learn_all<I>(
        &mut self,
        sequences: I,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.vocab.learn_all(sequences)
    }

    /// Learn every sequence, then build a shuffled dataset from them.
    ///
    /// See [`FrequencyEncoder::encode_dataset_with_rng`].
    pub fn learn_and_encode_dataset<F, S, R>(
        &mut self,
        sequences: &[S],
        rng: &mut R,
    ) -> CFResult<Vec<LabeledSample<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
        R: Rng + ?Sized,
    {
        self.learn_all(sequences);
        self.encode_dataset_with_rng(sequences, rng)
    }
}

impl FrequencyEncoder for Language {
    fn vocab(&self) -> &CodonVocab {
        &self.vocab
    }
}
