//! `NodeSet`: the vertex store of a graph.
//!
//! A thin wrapper over [`Container`] keyed by node identity. It adds no
//! behavior of its own; the wrapper exists so vertex and edge stores cannot
//! be mixed up in signatures.

use core::hash::Hash;
use core::ops::{Deref, DerefMut};

use super::container::Container;

/// Vertex keys with optional payloads.
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct NodeSet<K, P> {
    inner: Container<K, P>,
}

impl<K, P> NodeSet<K, P> {
    /// Creates an empty node set.
    pub fn new() -> Self {
        Self {
            inner: Container::new(),
        }
    }

    /// Creates an empty node set with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Container::with_capacity(capacity),
        }
    }

    /// Consumes the set, returning the underlying container.
    pub fn into_inner(self) -> Container<K, P> {
        self.inner
    }
}

impl<K, P> Default for NodeSet<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> From<Container<K, P>> for NodeSet<K, P> {
    fn from(inner: Container<K, P>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, P: PartialEq> PartialEq for NodeSet<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq + Hash, P: Eq> Eq for NodeSet<K, P> {}

impl<K, P> Deref for NodeSet<K, P> {
    type Target = Container<K, P>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, P> DerefMut for NodeSet<K, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
