//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch encoding.
//!
//! The wrapped vocabulary is shared read-only across workers;
//! learn every sequence before wrapping.

mod rayon_encoder;

pub use rayon_encoder::ParallelFrequencyEncoder;
