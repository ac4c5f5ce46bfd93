//! # Frequency Encoders
//!
//! [`FrequencyEncoder`] turns sequences into fixed-length frequency vectors
//! over a [`crate::vocab::CodonVocab`]:
//! * [`FrequencyEncoder::encode`] - empirical codon frequencies of a real sequence,
//! * [`FrequencyEncoder::sample`] - uniformly sampled codon frequencies,
//!   with the draw count calibrated to a real sequence's length,
//! * [`FrequencyEncoder::encode_dataset`] - shuffled positives and negatives.

pub mod codon_frequencies;
pub mod frequency_encoder;
pub mod negative_sampling;
pub mod samples;

#[doc(inline)]
pub use frequency_encoder::FrequencyEncoder;
#[doc(inline)]
pub use samples::{Label, LabeledSample, TracedSample};
