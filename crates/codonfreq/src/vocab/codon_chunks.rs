//! # Fixed-Width Codon Chunking
//!
//! Sequences are split into consecutive, non-overlapping chunks of
//! `codon_length` characters, starting at offset 0. A trailing fragment
//! shorter than `codon_length` is dropped.
//!
//! Widths are counted in `char`s, so a multibyte symbol occupies one position.

/// Iterator over the codons of a sequence.
///
/// Yields borrowed sub-slices of the source sequence.
#[derive(Debug, Clone)]
pub struct CodonChunks<'a> {
    rest: &'a str,
    codon_length: usize,
}

impl<'a> CodonChunks<'a> {
    /// Create a new chunk iterator.
    ///
    /// A `codon_length` of 0 yields no codons.
    ///
    /// ## Arguments
    /// * `sequence` - The sequence to split.
    /// * `codon_length` - The chunk width, in characters.
    pub fn new(
        sequence: &'a str,
        codon_length: usize,
    ) -> Self {
        let rest = if codon_length == 0 { "" } else { sequence };
        Self { rest, codon_length }
    }
}

impl<'a> Iterator for CodonChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = match self.rest.char_indices().nth(self.codon_length) {
            Some((idx, _)) => idx,
            None if self.rest.chars().count() == self.codon_length => self.rest.len(),
            None => {
                // Trailing fragment.
                self.rest = "";
                return None;
            }
        };

        let (codon, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(codon)
    }
}

/// Split a sequence into its codons.
///
/// ## Arguments
/// * `sequence` - The sequence to split.
/// * `codon_length` - The chunk width, in characters.
///
/// ## Returns
/// The ordered codons; the trailing remainder is discarded.
pub fn split_codons(
    sequence: &str,
    codon_length: usize,
) -> Vec<&str> {
    CodonChunks::new(sequence, codon_length).collect()
}

/// The number of full codons in a sequence.
pub fn chunk_count(
    sequence: &str,
    codon_length: usize,
) -> usize {
    if codon_length == 0 {
        return 0;
    }
    sequence.chars().count() / codon_length
}

/// The codon count used to calibrate sampled negatives.
///
/// This is ``round(len / codon_length)`` with ties rounded to even,
/// so a partial trailing codon of at least half width counts as one.
///
/// ## Arguments
/// * `sequence_len` - The sequence length, in characters.
/// * `codon_length` - The chunk width, in characters.
pub fn rounded_chunk_count(
    sequence_len: usize,
    codon_length: usize,
) -> usize {
    if codon_length == 0 {
        return 0;
    }
    let whole = sequence_len / codon_length;
    let twice_rem = 2 * (sequence_len % codon_length);

    match twice_rem.cmp(&codon_length) {
        core::cmp::Ordering::Greater => whole + 1,
        core::cmp::Ordering::Equal if whole % 2 == 1 => whole + 1,
        _ => whole,
    }
}
