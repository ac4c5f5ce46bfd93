//! # `codonfreq` Codon Frequency Encoder
//!
//! Turns variable-length symbolic sequences (DNA, RNA, protein strings)
//! into fixed-length codon frequency vectors for downstream classifiers;
//! plus label-balanced negative sampling matched to real sequence lengths.
//!
//! See:
//! * [`vocab`] to split sequences into codons and grow a [`CodonVocab`].
//! * [`encoders`] to encode sequences, sample negatives, and assemble datasets.
//! * [`Language`] which owns a vocabulary and implements [`FrequencyEncoder`].
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Building a Dataset
//!
//! ```rust
//! use codonfreq::{FrequencyEncoder, Label, LabeledSample, Language};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! fn example() -> codonfreq::CFResult<()> {
//!     let sequences = ["ATGGCCATTGTA", "ATGAAACGCATT"];
//!
//!     let mut language = Language::new("dna", 3)?;
//!     language.learn_all(&sequences);
//!
//!     let freqs: Vec<f32> = language.encode("ATGGCC")?;
//!     assert_eq!(freqs.len(), language.size());
//!
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let dataset: Vec<LabeledSample<f32>> =
//!         language.encode_dataset_with_rng(&sequences, &mut rng)?;
//!     assert_eq!(dataset.len(), 4);
//!     assert_eq!(
//!         dataset.iter().filter(|s| s.label == Label::Positive).count(),
//!         2
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod encoders;
pub mod errors;
pub mod language;
pub mod options;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{FrequencyEncoder, Label, LabeledSample, TracedSample};
#[doc(inline)]
pub use errors::{CFResult, CodonError};
#[doc(inline)]
pub use language::Language;
#[doc(inline)]
pub use options::LanguageOptions;
#[doc(inline)]
pub use types::FrequencyType;
#[doc(inline)]
pub use vocab::CodonVocab;
