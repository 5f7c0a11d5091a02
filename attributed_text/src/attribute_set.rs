// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use smallvec::SmallVec;

/// A small map from attribute keys to values.
///
/// Entries keep their insertion order. Keys are unique: inserting an existing key replaces its
/// value in place. Sets are expected to be small (a handful of attributes per span), so lookups
/// are linear.
///
/// Equality ignores entry order.
#[derive(Clone, Debug)]
pub struct AttributeSet<K, V> {
    entries: SmallVec<[(K, V); 4]>,
}

impl<K, V> Default for AttributeSet<K, V> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<K: PartialEq, V> AttributeSet<K, V> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns `true` if the set has a value for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Removes `key` from the set, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let ix = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(ix).1)
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Inserts every attribute of `other` whose key is not already present.
    pub fn extend_missing(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in &other.entries {
            if !self.contains_key(key) {
                self.entries.push((key.clone(), value.clone()));
            }
        }
    }

    /// Inserts every attribute of `other`, replacing existing values.
    pub fn extend_override(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AttributeSet<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AttributeSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AttributeSet<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeSet;

    #[test]
    fn insert_replaces_in_place() {
        let mut set = AttributeSet::new();
        assert_eq!(set.insert("color", 1), None);
        assert_eq!(set.insert("font", 2), None);
        assert_eq!(set.insert("color", 3), Some(1));
        assert_eq!(set.len(), 2);
        let keys: alloc::vec::Vec<_> = set.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["color", "font"]);
        assert_eq!(set.get(&"color"), Some(&3));
    }

    #[test]
    fn extend_missing_keeps_existing_values() {
        let mut set: AttributeSet<_, _> = [("color", "blue")].into_iter().collect();
        let outer: AttributeSet<_, _> = [("color", "red"), ("font", "bold")].into_iter().collect();
        set.extend_missing(&outer);
        assert_eq!(set.get(&"color"), Some(&"blue"));
        assert_eq!(set.get(&"font"), Some(&"bold"));
    }

    #[test]
    fn equality_ignores_order() {
        let a: AttributeSet<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let b: AttributeSet<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        let c: AttributeSet<_, _> = [("a", 1)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn remove_drops_key() {
        let mut set: AttributeSet<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(set.remove(&"a"), Some(1));
        assert_eq!(set.remove(&"a"), None);
        assert!(!set.contains_key(&"a"));
        assert_eq!(set.len(), 1);
    }
}
