use std::borrow::Borrow;
use std::hash::Hash;

use crate::col::{map_new, HashMap};

/// Hands out dense indices `0..len` to keys in first-seen order.
pub struct Indexer<Key, Index>
where
    Key: Eq + Hash,
    Index: Copy,
{
    index_by_key: HashMap<Key, Index>,
    to_index: fn(usize) -> Index,
}

impl<Key: Eq + Hash, Index: Copy> Indexer<Key, Index> {
    pub fn new(to_index: fn(usize) -> Index) -> Self {
        Self {
            index_by_key: map_new(),
            to_index,
        }
    }

    /// Registers `key` and returns its fresh index, or `None` if the key was already
    /// registered (the existing index is left untouched).
    pub fn insert(&mut self, key: Key) -> Option<Index> {
        let next = (self.to_index)(self.index_by_key.len());
        match self.index_by_key.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => None,
            std::collections::hash_map::Entry::Vacant(entry) => Some(*entry.insert(next)),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Index>
    where
        Key: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index_by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.index_by_key.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_dense_indices_in_insertion_order() {
        let mut indexer: Indexer<String, u32> = Indexer::new(|i| i as u32);
        assert_eq!(indexer.insert("b".to_string()), Some(0));
        assert_eq!(indexer.insert("a".to_string()), Some(1));
        assert_eq!(indexer.insert("b".to_string()), None);
        assert_eq!(indexer.get("a"), Some(1));
        assert_eq!(indexer.get("c"), None);
        assert_eq!(indexer.len(), 2);
    }
}
