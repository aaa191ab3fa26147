//! Hashing helpers.
//!
//! Vertex names are short strings looked up on every insertion, so the maps
//! keyed by them use `ahash` instead of SipHash.

/// A `hashbrown` map using `ahash`.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Creates an empty [`FastHashMap`] without allocating.
#[must_use]
pub fn new_map<K, V>() -> FastHashMap<K, V> {
    FastHashMap::with_hasher(ahash::RandomState::new())
}
