//! # Vocabulary
//!
//! This module provides codon chunking, the codon vocabulary,
//! and related io mechanisms.
//!
//! ## Codon Vocabulary
//!
//! [`CodonVocab`] is a ``{ String <-> usize }`` bidirectional map,
//! grown by [`CodonVocab::learn`] in first-seen order.
#[cfg(feature = "io")]
pub mod io;

pub mod codon_chunks;
pub mod codon_vocab;

#[doc(inline)]
pub use codon_chunks::{CodonChunks, chunk_count, rounded_chunk_count, split_codons};
#[doc(inline)]
pub use codon_vocab::CodonVocab;
