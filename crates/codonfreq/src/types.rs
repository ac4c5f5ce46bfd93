//! # Common Types and Traits
use core::fmt::Debug;

use num_traits::{Float, FromPrimitive};

/// A type that can be used as an element of a frequency vector.
///
/// These are constrained to be primitive floats; in practice `f32` or `f64`.
pub trait FrequencyType:
    'static + Float + FromPrimitive + Default + Debug + Send + Sync
{
}

impl<F> FrequencyType for F where
    F: 'static + Float + FromPrimitive + Default + Debug + Send + Sync
{
}

/// Convert a count to a [`FrequencyType`].
///
/// Every count this crate produces is bounded by a sequence length,
/// which is exactly representable for the float widths in use.
pub(crate) fn count_to_frequency<F: FrequencyType>(count: usize) -> F {
    F::from_usize(count).unwrap_or_else(F::max_value)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CFHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CFHashMap<K, V> {
            CFHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type CFHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CFHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type CFHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> CFHashMap<K, V> {
            CFHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is [`Send`].
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is [`Sync`].
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_frequency_types() {
        struct IsFrequency<F: FrequencyType>(PhantomData<F>);

        let _: IsFrequency<f32>;
        let _: IsFrequency<f64>;
    }

    #[test]
    fn test_count_to_frequency() {
        assert_eq!(count_to_frequency::<f32>(0), 0.0);
        assert_eq!(count_to_frequency::<f64>(17), 17.0);
    }

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: CFHashMap<String, usize> = hash_map_with_capacity(4);
        map.insert("AC".to_string(), 0);
        assert_eq!(map.get("AC"), Some(&0));
        assert!(map.capacity() >= 4);
    }
}
