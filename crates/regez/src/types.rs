//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type RzHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> RzHashMap<K, V> {
            RzHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type RzHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type RzHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> RzHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type RzHashSet<V> = foldhash::HashSet<V>;

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type RzHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> RzHashMap<K, V> {
            RzHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type RzHashSet<V> = std::collections::HashSet<V>;

    } else if #[cfg(feature = "no_std")] {
        /// Type Alias for hash maps in this crate.
        pub type RzHashMap<K, V> = hashbrown::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> RzHashMap<K, V> {
            RzHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type RzHashSet<V> = hashbrown::HashSet<V>;

    } else {
        /// This error exists to give users more direct feedback
        /// on the feature configuration over the other compilation
        /// errors they would encounter from lacking the types.
        compile_error!("not(\"std\") requires \"no_std\" feature");
    }
}

/// Compile-time check that a value is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_new() {
        let mut map: RzHashMap<&str, usize> = hash_map_new();
        map.insert("a", 1);
        assert_eq!(map.get("a"), Some(&1));

        let mut set: RzHashSet<u8> = Default::default();
        assert!(set.insert(3));
        assert!(!set.insert(3));
    }
}
