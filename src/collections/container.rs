//! `Container`: a keyed store mapping each key to an optional payload.
//!
//! This is the foundation of both [`NodeSet`](super::NodeSet) and
//! [`EdgeSet`](super::EdgeSet). Presence of a key and presence of a payload
//! are independent: a key may be stored with no payload at all.
//!
//! Writes take a [`Payload`], which separates "no payload argument" from
//! "overwrite with this (possibly empty) payload".

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::hash_map::{self, HashMap};

use crate::error::{GraphError, Result};

/// What a write should do with the payload stored under a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<P> {
    /// No payload supplied: insert the key bare if absent, otherwise leave
    /// the stored payload untouched.
    Keep,
    /// Always overwrite the stored payload, possibly with `None`.
    Set(Option<P>),
}

impl<P> Payload<P> {
    /// Overwrite with `value`.
    pub fn value(value: P) -> Self {
        Payload::Set(Some(value))
    }

    /// Overwrite with an empty payload.
    pub fn empty() -> Self {
        Payload::Set(None)
    }
}

impl<P> Default for Payload<P> {
    fn default() -> Self {
        Payload::Keep
    }
}

/// A key to optional-payload store.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `contains` | \(O(1)\) average | hash lookup |
/// | `set` | \(O(1)\) amortized | |
/// | `delete` / `discard` | \(O(1)\) average | |
/// | `update_*` | \(O(k)\) | `k` items supplied |
#[derive(Debug, Clone)]
pub struct Container<K, P> {
    items: HashMap<K, Option<P>>,
}

impl<K, P> Container<K, P> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Creates an empty container with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the stored keys in unspecified order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, Option<P>> {
        self.items.keys()
    }

    /// Iterates over `(key, payload)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<&P>)> {
        self.items.iter().map(|(k, p)| (k, p.as_ref()))
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<K, P> Container<K, P>
where
    K: Eq + Hash + Debug,
{
    /// Returns `true` if `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Returns the payload stored under `key`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `key` is absent.
    pub fn get(&self, key: &K) -> Result<Option<&P>> {
        self.items
            .get(key)
            .map(Option::as_ref)
            .ok_or_else(|| GraphError::not_found(key))
    }

    /// Mutable access to the payload slot under `key`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `key` is absent.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut Option<P>> {
        self.items
            .get_mut(key)
            .ok_or_else(|| GraphError::not_found(key))
    }

    /// Stores `key`, applying `payload` as described on [`Payload`].
    ///
    /// Returns `true` if the key was not present before.
    pub fn set(&mut self, key: K, payload: Payload<P>) -> bool {
        match payload {
            Payload::Keep => match self.items.entry(key) {
                hash_map::Entry::Occupied(_) => false,
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(None);
                    true
                }
            },
            Payload::Set(value) => self.items.insert(key, value).is_none(),
        }
    }

    /// Stores `key` without touching an existing payload.
    pub fn insert(&mut self, key: K) -> bool {
        self.set(key, Payload::Keep)
    }

    /// Removes `key` if present. Returns `true` if something was removed.
    pub fn discard(&mut self, key: &K) -> bool {
        self.items.remove(key).is_some()
    }

    /// Removes `key` and returns its payload.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `key` is absent.
    pub fn delete(&mut self, key: &K) -> Result<Option<P>> {
        self.items
            .remove(key)
            .ok_or_else(|| GraphError::not_found(key))
    }

    /// Bulk insert of bare keys.
    ///
    /// Every element is a key, even when `K` is itself a pair; existing
    /// payloads are left untouched.
    pub fn update_keys<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Bulk insert of `(key, payload)` pairs, overwriting stored payloads.
    ///
    /// Another container can be merged in through its `IntoIterator`.
    pub fn update_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, Option<P>)>,
    {
        for (key, payload) in pairs {
            self.set(key, Payload::Set(payload));
        }
    }
}

impl<K, P> Default for Container<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> IntoIterator for Container<K, P> {
    type Item = (K, Option<P>);
    type IntoIter = hash_map::IntoIter<K, Option<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<K: Eq + Hash, P: PartialEq> PartialEq for Container<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: Eq + Hash, P: Eq> Eq for Container<K, P> {}

impl<K: Eq + Hash + Debug, P> Extend<(K, Option<P>)> for Container<K, P> {
    fn extend<I: IntoIterator<Item = (K, Option<P>)>>(&mut self, iter: I) {
        self.update_pairs(iter);
    }
}

impl<K: Eq + Hash + Debug, P> FromIterator<(K, Option<P>)> for Container<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, Option<P>)>>(iter: I) -> Self {
        let mut container = Self::new();
        container.update_pairs(iter);
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: Container<u8, &str> = [(1, Some("a")), (2, None)].into_iter().collect();
        let backward: Container<u8, &str> = [(2, None), (1, Some("a"))].into_iter().collect();
        assert_eq!(forward, backward);

        let mut bare = backward.clone();
        bare.set(1, Payload::empty());
        assert_ne!(forward, bare);
    }

    #[test]
    fn keep_does_not_clobber_payload() {
        let mut c: Container<&str, u32> = Container::new();
        assert!(c.set("sda", Payload::value(7)));
        assert!(!c.insert("sda"));
        assert_eq!(c.get(&"sda").unwrap(), Some(&7));

        assert!(c.insert("sdb"));
        assert_eq!(c.get(&"sdb").unwrap(), None);
    }

    #[test]
    fn set_always_overwrites() {
        let mut c: Container<&str, u32> = Container::new();
        c.set("sda", Payload::value(7));
        c.set("sda", Payload::empty());
        assert_eq!(c.get(&"sda").unwrap(), None);
        assert!(c.contains(&"sda"));
    }

    #[test]
    fn delete_and_discard() {
        let mut c: Container<u8, &str> = Container::new();
        c.set(1, Payload::value("one"));

        assert!(!c.discard(&2));
        assert!(c.delete(&2).unwrap_err().is_not_found());
        assert_eq!(c.delete(&1).unwrap(), Some("one"));
        assert!(c.is_empty());
    }

    #[test]
    fn get_missing_is_not_found() {
        let c: Container<u8, ()> = Container::new();
        assert_eq!(
            c.get(&3),
            Err(GraphError::NotFound {
                key: "3".to_string()
            })
        );
    }

    #[test]
    fn pair_keys_are_not_mistaken_for_payloads() {
        // Keys that are themselves pairs stay keys under `update_keys`.
        let mut c: Container<(u8, u8), u8> = Container::new();
        c.update_keys([(1, 2), (3, 4)]);
        assert!(c.contains(&(1, 2)));
        assert_eq!(c.get(&(3, 4)).unwrap(), None);

        let mut d: Container<u8, u8> = Container::new();
        d.update_pairs([(1, Some(2)), (3, Some(4))]);
        assert_eq!(d.get(&1).unwrap(), Some(&2));
        assert!(!d.contains(&2));
    }

    #[test]
    fn merge_from_another_container() {
        let mut a: Container<u8, u8> = [(1, Some(10))].into_iter().collect();
        let b: Container<u8, u8> = [(1, None), (2, Some(20))].into_iter().collect();
        a.extend(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get(&1).unwrap(), None);
        assert_eq!(a.get(&2).unwrap(), Some(&20));

        a.clear();
        assert!(a.is_empty());
    }
}
