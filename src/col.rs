pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type HashSet<K> = rustc_hash::FxHashSet<K>;

/// Map keyed by an ordered (from, to) pair, e.g. directed stop pairs.
pub type PairMap<K, V> = HashMap<(K, K), V>;

pub fn map_new<K, V>() -> HashMap<K, V> {
    rustc_hash::FxHashMap::default()
}

pub fn map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    rustc_hash::FxHashMap::with_capacity_and_hasher(capacity, Default::default())
}

pub fn set_new<K>() -> HashSet<K> {
    rustc_hash::FxHashSet::default()
}
