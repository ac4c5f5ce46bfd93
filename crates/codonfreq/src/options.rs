//! Language Options
//!
//! Options for building a [`Language`].

use crate::errors::CFResult;
use crate::language::Language;

/// The default codon width; a biological codon.
pub const DEFAULT_CODON_LENGTH: usize = 3;

/// Options for configuring a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "io", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageOptions {
    /// An informational name for the language.
    pub name: String,

    /// The fixed codon width, in characters.
    pub codon_length: usize,
}

impl Default for LanguageOptions {
    fn default() -> Self {
        Self {
            name: "language".to_string(),
            codon_length: DEFAULT_CODON_LENGTH,
        }
    }
}

impl LanguageOptions {
    /// Create new options.
    pub fn new<S: Into<String>>(
        name: S,
        codon_length: usize,
    ) -> Self {
        Self {
            name: name.into(),
            codon_length,
        }
    }

    /// Set the name and return the options.
    pub fn with_name<S: Into<String>>(
        self,
        name: S,
    ) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Set the codon width and return the options.
    pub fn with_codon_length(
        self,
        codon_length: usize,
    ) -> Self {
        Self {
            codon_length,
            ..self
        }
    }

    /// Initializes an empty [`Language`] from these options.
    ///
    /// ## Errors
    /// * [`crate::CodonError::InvalidCodonLength`] if `codon_length` is 0.
    pub fn init(self) -> CFResult<Language> {
        Language::new(self.name, self.codon_length)
    }
}
