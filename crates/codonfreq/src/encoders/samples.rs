//! # Labeled Sample Types

use crate::types::FrequencyType;

/// Binary class label for an encoded sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "io", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Label {
    /// Synthetic sample drawn by negative sampling.
    Negative = 0,

    /// Real sample encoded from a sequence.
    Positive = 1,
}

impl Label {
    /// The scalar label value; 0 or 1.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The scalar label value as a float.
    pub fn as_float<F: FrequencyType>(self) -> F {
        match self {
            Label::Negative => F::zero(),
            Label::Positive => F::one(),
        }
    }

    /// The one-hot label, indexed by [`Self::value`].
    pub fn one_hot<F: FrequencyType>(self) -> [F; 2] {
        match self {
            Label::Negative => [F::one(), F::zero()],
            Label::Positive => [F::zero(), F::one()],
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.value()
    }
}

/// A frequency vector paired with its label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "io", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledSample<F: FrequencyType> {
    /// The normalized codon frequencies; one entry per vocabulary index.
    pub frequencies: Vec<F>,

    /// The sample label.
    pub label: Label,
}

impl<F: FrequencyType> LabeledSample<F> {
    /// Construct a new labeled sample.
    pub fn new(
        frequencies: Vec<F>,
        label: Label,
    ) -> Self {
        Self { frequencies, label }
    }
}

/// A labeled sample that retains its source sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "io", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedSample<F: FrequencyType> {
    /// The raw source sequence.
    pub sequence: String,

    /// The normalized codon frequencies; one entry per vocabulary index.
    pub frequencies: Vec<F>,

    /// The sample label.
    pub label: Label,
}

impl<F: FrequencyType> TracedSample<F> {
    /// Construct a new traced sample.
    pub fn new<S: Into<String>>(
        sequence: S,
        frequencies: Vec<F>,
        label: Label,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            frequencies,
            label,
        }
    }

    /// Drop the source sequence.
    pub fn into_labeled(self) -> LabeledSample<F> {
        LabeledSample::new(self.frequencies, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_values() {
        assert_eq!(Label::Negative.value(), 0);
        assert_eq!(Label::Positive.value(), 1);
        assert_eq!(u8::from(Label::Positive), 1);

        assert_eq!(Label::Negative.as_float::<f32>(), 0.0);
        assert_eq!(Label::Positive.as_float::<f64>(), 1.0);

        assert_eq!(Label::Negative.one_hot::<f32>(), [1.0, 0.0]);
        assert_eq!(Label::Positive.one_hot::<f32>(), [0.0, 1.0]);
    }

    #[test]
    fn test_traced_into_labeled() {
        let traced = TracedSample::<f32>::new("AAAA", vec![1.0, 0.0], Label::Positive);
        assert_eq!(
            traced.into_labeled(),
            LabeledSample::new(vec![1.0, 0.0], Label::Positive)
        );
    }
}
