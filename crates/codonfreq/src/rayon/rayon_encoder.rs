//! # Parallel Encoder

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::encoders::FrequencyEncoder;
use crate::errors::CFResult;
use crate::types::FrequencyType;
use crate::vocab::CodonVocab;

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding and sampling of batches.
///
/// Sampling draws one seed per sequence from the caller's rng,
/// in input order, before fanning out; so results depend only on
/// the caller's rng state, not on thread scheduling.
#[derive(Debug, Clone)]
pub struct ParallelFrequencyEncoder<D: FrequencyEncoder> {
    /// Inner encoder.
    pub inner: D,
}

impl<D> ParallelFrequencyEncoder<D>
where
    D: FrequencyEncoder,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The frequency encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelFrequencyEncoder` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D> FrequencyEncoder for ParallelFrequencyEncoder<D>
where
    D: FrequencyEncoder,
{
    fn vocab(&self) -> &CodonVocab {
        self.inner.vocab()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn encode_batch<F, S>(
        &self,
        sequences: &[S],
    ) -> CFResult<Vec<Vec<F>>>
    where
        F: FrequencyType,
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;
        sequences
            .par_iter()
            .map(|sequence| self.inner.encode(sequence.as_ref()))
            .collect()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
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
        use rayon::prelude::*;
        let seeds: Vec<u64> = sequences.iter().map(|_| rng.random()).collect();

        sequences
            .par_iter()
            .zip(seeds)
            .map(|(sequence, seed)| {
                let mut item_rng = StdRng::seed_from_u64(seed);
                self.inner.sample_with_rng(sequence.as_ref(), &mut item_rng)
            })
            .collect()
    }
}
