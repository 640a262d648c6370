//! Ordered map that refuses to overwrite.
//!
//! Both attributes and children share the same contract: a key is accepted once,
//! later inserts under the same key are rejected, and iteration follows insertion order.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Insertion-ordered storage with an index from key to position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for UniqueMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UniqueMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stores `value` under `key` unless the key is already taken.
    ///
    /// Returns `false` and drops `value` on a duplicate; the stored entry is untouched.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: V) -> bool {
        match self.index.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), value));
                slot.insert(self.entries.len() - 1);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.index.get(key).map(|&pos| &mut self.entries[pos].1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueMap;

    #[test]
    fn duplicate_insert_keeps_first_value() {
        let mut map = UniqueMap::new();
        assert!(map.insert_if_absent("k", 1));
        assert!(!map.insert_if_absent("k", 2));
        assert_eq!(map.get("k"), Some(&1));
        assert_eq!(map.iter().count(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut map = UniqueMap::new();
        map.insert_if_absent("z", 'z');
        map.insert_if_absent("a", 'a');
        map.insert_if_absent("m", 'm');
        map.insert_if_absent("a", 'x');

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = UniqueMap::new();
        map.insert_if_absent("k", String::from("a"));
        if let Some(value) = map.get_mut("k") {
            value.push('b');
        }
        assert_eq!(map.get("k").map(String::as_str), Some("ab"));
        assert!(map.get_mut("missing").is_none());
    }
}
