#![allow(missing_docs)]

use codonfreq::{FrequencyEncoder, LabeledSample, Language};
use divan::{Bencher, black_box, counter::ItemsCount};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() {
    divan::main();
}

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

fn random_sequences(
    count: usize,
    len: usize,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|_| (0..len).map(|_| BASES[rng.random_range(0..4)]).collect())
        .collect()
}

fn learned_language(
    sequences: &[String],
    codon_length: usize,
) -> Language {
    let mut language = Language::new("bench", codon_length).unwrap();
    language.learn_all(sequences);
    language
}

#[divan::bench(args = [3, 6])]
fn learn(
    bencher: Bencher,
    codon_length: usize,
) {
    let sequences = random_sequences(256, 1024);
    bencher
        .counter(ItemsCount::new(sequences.len()))
        .bench(|| learned_language(black_box(&sequences), codon_length));
}

#[divan::bench(args = [3, 6])]
fn encode_batch(
    bencher: Bencher,
    codon_length: usize,
) {
    let sequences = random_sequences(256, 1024);
    let language = learned_language(&sequences, codon_length);
    bencher
        .counter(ItemsCount::new(sequences.len()))
        .bench(|| language.encode_batch::<f32, _>(black_box(&sequences)).unwrap());
}

#[divan::bench(args = [3, 6])]
fn encode_dataset(
    bencher: Bencher,
    codon_length: usize,
) {
    let sequences = random_sequences(256, 1024);
    let language = learned_language(&sequences, codon_length);
    let mut rng = StdRng::seed_from_u64(1);
    bencher
        .counter(ItemsCount::new(2 * sequences.len()))
        .bench_local(|| {
            let dataset: Vec<LabeledSample<f32>> = language
                .encode_dataset_with_rng(black_box(&sequences), &mut rng)
                .unwrap();
            dataset
        });
}

#[cfg(feature = "rayon")]
#[divan::bench(args = [3, 6])]
fn par_encode_dataset(
    bencher: Bencher,
    codon_length: usize,
) {
    use codonfreq::rayon::ParallelFrequencyEncoder;

    let sequences = random_sequences(256, 1024);
    let encoder = ParallelFrequencyEncoder::new(learned_language(&sequences, codon_length));
    let mut rng = StdRng::seed_from_u64(1);
    bencher
        .counter(ItemsCount::new(2 * sequences.len()))
        .bench_local(|| {
            let dataset: Vec<LabeledSample<f32>> = encoder
                .encode_dataset_with_rng(black_box(&sequences), &mut rng)
                .unwrap();
            dataset
        });
}
