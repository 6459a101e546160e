//! Insertion-ordered string-keyed map.
//!
//! Every section of the config is matched in source order, so lookups must
//! keep the order keys were first written. A later duplicate key replaces the
//! value but keeps the original position.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A map from `String` keys to `V` that iterates in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for `key` if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Exact (case-sensitive) lookup.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// First entry, in insertion order, whose key equals `key` ignoring case.
    pub fn find_ignore_case(&self, key: &str) -> Option<(&str, &V)> {
        let wanted = key.to_lowercase();
        self.iter().find(|(k, _)| k.to_lowercase() == wanted)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every entry of `other` into `self`, later keys overwriting.
    pub fn extend(&mut self, other: OrderedMap<V>) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let map: OrderedMap<i32> = [("zsh", 1), ("bash", 2), ("fish", 3)]
            .into_iter()
            .collect();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zsh", "bash", "fish"]);
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 3), Some(1));
        assert_eq!(map.len(), 2);
        let pairs: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(pairs, vec![("a", &3), ("b", &2)]);
    }

    #[test]
    fn test_find_ignore_case() {
        let mut map = OrderedMap::new();
        map.insert("Docker", "x");
        assert_eq!(map.get("docker"), None);
        assert_eq!(map.find_ignore_case("DOCKER"), Some(("Docker", &"x")));
    }
}
