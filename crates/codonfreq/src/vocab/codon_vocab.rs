//! # Codon Vocabulary ``{ String <-> usize }``

use crate::errors::{CFResult, CodonError};
use crate::types::{CFHashMap, hash_map_with_capacity};
use crate::vocab::codon_chunks::{CodonChunks, chunk_count, split_codons};

/// An append-only bidirectional codon vocabulary.
///
/// Ids are dense and assigned in first-seen order, starting at 0.
/// The vocabulary only grows; nothing is ever removed or renumbered.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonVocab {
    name: String,
    codon_length: usize,

    /// Map of ``{ codon -> index }``.
    word_to_index: CFHashMap<String, usize>,

    /// Codons in index order; ``index_to_word[word_to_index[w]] == w``.
    index_to_word: Vec<String>,
}

impl CodonVocab {
    /// Create an empty vocabulary.
    ///
    /// ## Arguments
    /// * `name` - An informational label.
    /// * `codon_length` - The fixed codon width; must be > 0.
    ///
    /// ## Returns
    /// A new `CodonVocab`, or [`CodonError::InvalidCodonLength`].
    pub fn new<S: Into<String>>(
        name: S,
        codon_length: usize,
    ) -> CFResult<Self> {
        if codon_length == 0 {
            return Err(CodonError::InvalidCodonLength { codon_length });
        }
        Ok(Self {
            name: name.into(),
            codon_length,
            word_to_index: hash_map_with_capacity(64),
            index_to_word: Vec::with_capacity(64),
        })
    }

    /// Rebuild a vocabulary from codons listed in index order.
    ///
    /// ## Errors
    /// * [`CodonError::VocabConflict`] if a codon repeats or has the wrong width.
    pub fn from_codons<S, I>(
        name: S,
        codon_length: usize,
        codons: I,
    ) -> CFResult<Self>
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut vocab = Self::new(name, codon_length)?;
        for codon in codons {
            let codon: String = codon.into();
            let width = codon.chars().count();
            if width != codon_length {
                return Err(CodonError::VocabConflict(format!(
                    "codon {codon:?} has length {width}, expected {codon_length}"
                )));
            }
            if vocab.word_to_index.contains_key(&codon) {
                return Err(CodonError::VocabConflict(format!(
                    "duplicate codon {codon:?}"
                )));
            }
            vocab.push_codon(codon);
        }
        Ok(vocab)
    }

    /// The informational name of the vocabulary.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed codon width, in characters.
    pub fn codon_length(&self) -> usize {
        self.codon_length
    }

    /// The number of known codons.
    pub fn len(&self) -> usize {
        self.index_to_word.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }

    /// The known codons, in index order.
    pub fn codons(&self) -> &[String] {
        &self.index_to_word
    }

    /// Iterate over ``(index, codon)`` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.index_to_word
            .iter()
            .enumerate()
            .map(|(idx, codon)| (idx, codon.as_str()))
    }

    /// Return the index for the codon, if known.
    pub fn lookup_index(
        &self,
        codon: &str,
    ) -> Option<usize> {
        self.word_to_index.get(codon).copied()
    }

    /// Return the codon for the index, if known.
    pub fn lookup_codon(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.index_to_word.get(index).map(String::as_str)
    }

    /// Split a sequence into this vocabulary's codons.
    ///
    /// See [`split_codons`].
    pub fn tokenize<'a>(
        &self,
        sequence: &'a str,
    ) -> Vec<&'a str> {
        split_codons(sequence, self.codon_length)
    }

    /// The number of codons [`Self::tokenize`] would yield.
    pub fn chunk_count(
        &self,
        sequence: &str,
    ) -> usize {
        chunk_count(sequence, self.codon_length)
    }

    /// Add every unseen codon of the sequence to the vocabulary.
    ///
    /// Repeated calls with the same sequence add nothing.
    ///
    /// ## Returns
    /// The number of codons added.
    pub fn learn(
        &mut self,
        sequence: &str,
    ) -> usize {
        let before = self.len();
        for codon in CodonChunks::new(sequence, self.codon_length) {
            if !self.word_to_index.contains_key(codon) {
                self.push_codon(codon.to_string());
            }
        }

        let added = self.len() - before;
        if added > 0 {
            log::debug!(
                "{}: learned {} new codons (size {})",
                self.name,
                added,
                self.len()
            );
        }
        added
    }

    /// Learn every sequence in the iterator.
    ///
    /// ## Returns
    /// The total number of codons added.
    pub fn learn_all<I>(
        &mut self,
        sequences: I,
    ) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        sequences
            .into_iter()
            .map(|sequence| self.learn(sequence.as_ref()))
            .sum()
    }

    fn push_codon(
        &mut self,
        codon: String,
    ) {
        let index = self.index_to_word.len();
        self.word_to_index.insert(codon.clone(), index);
        self.index_to_word.push(codon);
    }
}
