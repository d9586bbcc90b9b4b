use std::hash::Hash;

pub use fnv::{FnvHashMap, FnvHashSet};

/// Grid points are small integer keys, which fnv hashes much faster than the std hasher.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    FnvHashSet::with_capacity_and_hasher(capacity, Default::default())
}

pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    FnvHashMap::with_capacity_and_hasher(capacity, Default::default())
}
