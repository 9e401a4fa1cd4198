//! Fast hash containers.
//!
//! Used for lookup-only bookkeeping (union-find parents, visited sets) where
//! iteration order never leaks into results.

/// Hash map backed by hashbrown with aHash.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set backed by hashbrown with aHash.
pub type FxHashSet<K> = hashbrown::HashSet<K, ahash::RandomState>;
