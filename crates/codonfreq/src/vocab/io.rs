//! # Vocabulary IO
//!
//! Vocabularies are stored as a JSON [`VocabSnapshot`]:
//! ```json
//! {"name": "dna", "codon_length": 2, "codons": ["AA", "AC", "CC"]}
//! ```
//!
//! The position of a codon in `codons` is its index.

use std::io::{Read, Write};

use crate::errors::{CFResult, CodonError};
use crate::vocab::CodonVocab;

/// Serializable form of a [`CodonVocab`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VocabSnapshot {
    /// The informational name.
    pub name: String,

    /// The fixed codon width.
    pub codon_length: usize,

    /// The codons, in index order.
    pub codons: Vec<String>,
}

impl From<&CodonVocab> for VocabSnapshot {
    fn from(vocab: &CodonVocab) -> Self {
        Self {
            name: vocab.name().to_string(),
            codon_length: vocab.codon_length(),
            codons: vocab.codons().to_vec(),
        }
    }
}

impl TryFrom<VocabSnapshot> for CodonVocab {
    type Error = CodonError;

    fn try_from(snapshot: VocabSnapshot) -> CFResult<Self> {
        CodonVocab::from_codons(snapshot.name, snapshot.codon_length, snapshot.codons)
    }
}

/// Write a [`CodonVocab`] to a [`Write`] writer as JSON.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab_json<W: Write>(
    vocab: &CodonVocab,
    writer: &mut W,
) -> CFResult<()> {
    serde_json::to_writer(&mut *writer, &VocabSnapshot::from(vocab))
        .map_err(|e| CodonError::Parse(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

/// Read a [`CodonVocab`] from a JSON reader.
///
/// # Arguments
/// * `reader` - the reader to load from.
///
/// # Errors
/// * [`CodonError::Parse`] on malformed JSON.
/// * [`CodonError::VocabConflict`] if the codon list is inconsistent.
pub fn read_vocab_json<R: Read>(reader: R) -> CFResult<CodonVocab> {
    let snapshot: VocabSnapshot =
        serde_json::from_reader(reader).map_err(|e| CodonError::Parse(e.to_string()))?;
    snapshot.try_into()
}
