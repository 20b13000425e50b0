//! `EdgeSet`: directed edges keyed by `(from, to)` with adjacency indices.
//!
//! Besides the backing [`Container`], the set maintains two derived indices:
//! `successors[u] = {v : (u, v) stored}` and `predecessors[v] = {u : (u, v) stored}`.
//! An index holds an entry for a key only while that key has at least one
//! neighbor in that direction; entries are pruned as soon as their last
//! neighbor goes away.
//!
//! Neighbor queries fail only for a key that appears in neither index. The
//! set cannot tell an isolated node from an unknown one; [`Graph`] adds that
//! distinction on top.
//!
//! [`Graph`]: crate::graph::Graph

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use super::container::{Container, Payload};
use crate::error::{GraphError, Result};

/// A directed edge `from -> to`.
pub type Edge<K> = (K, K);

/// Builds an edge from a sequence of endpoints.
///
/// # Errors
/// [`GraphError::Shape`] unless the sequence yields exactly two items.
pub fn edge_from<K, I>(endpoints: I) -> Result<Edge<K>>
where
    I: IntoIterator<Item = K>,
{
    let mut iter = endpoints.into_iter();
    match (iter.next(), iter.next()) {
        (Some(from), Some(to)) => {
            let extra = iter.count();
            if extra == 0 {
                Ok((from, to))
            } else {
                Err(GraphError::Shape { len: 2 + extra })
            }
        }
        (Some(_), None) => Err(GraphError::Shape { len: 1 }),
        _ => Err(GraphError::Shape { len: 0 }),
    }
}

/// Directed edges with optional payloads and successor/predecessor indices.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add` | \(O(1)\) average | container write plus two index inserts |
/// | `delete` | \(O(1)\) average | prunes emptied index entries |
/// | `successors` / `predecessors` | \(O(d)\) | copies the neighbor set |
/// | `del_incident` | \(O(d)\) | `d` = degree of the node |
#[derive(Debug, Clone)]
pub struct EdgeSet<K, P> {
    edges: Container<Edge<K>, P>,
    successors: HashMap<K, HashSet<K>>,
    predecessors: HashMap<K, HashSet<K>>,
}

impl<K, P> EdgeSet<K, P> {
    /// Creates an empty edge set.
    pub fn new() -> Self {
        Self {
            edges: Container::new(),
            successors: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over `(edge, payload)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge<K>, Option<&P>)> {
        self.edges.iter()
    }

    /// Read-only view of the backing container.
    pub fn as_container(&self) -> &Container<Edge<K>, P> {
        &self.edges
    }

    /// The successor index: every key with at least one outgoing edge.
    pub fn successor_index(&self) -> &HashMap<K, HashSet<K>> {
        &self.successors
    }

    /// The predecessor index: every key with at least one incoming edge.
    pub fn predecessor_index(&self) -> &HashMap<K, HashSet<K>> {
        &self.predecessors
    }

    /// Removes every edge and both indices.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.successors.clear();
        self.predecessors.clear();
    }
}

impl<K, P> EdgeSet<K, P>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Returns `true` if the edge is stored.
    pub fn contains(&self, edge: &Edge<K>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the payload of `edge`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn get(&self, edge: &Edge<K>) -> Result<Option<&P>> {
        self.edges.get(edge)
    }

    /// Mutable access to the payload slot of `edge`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn get_mut(&mut self, edge: &Edge<K>) -> Result<&mut Option<P>> {
        self.edges.get_mut(edge)
    }

    /// Adds `edge`, registering it in both indices.
    ///
    /// Re-adding an existing edge only applies `payload`; the indices are
    /// left as they were. Returns `true` if the edge is new.
    pub fn add(&mut self, edge: Edge<K>, payload: Payload<P>) -> bool {
        let (from, to) = edge.clone();
        let added = self.edges.set(edge, payload);
        if added {
            self.predecessors
                .entry(to.clone())
                .or_default()
                .insert(from.clone());
            self.successors.entry(from).or_default().insert(to);
        }
        added
    }

    /// Adds each `(edge, payload)` pair, overwriting stored payloads.
    pub fn update<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Edge<K>, Option<P>)>,
    {
        for (edge, payload) in pairs {
            self.add(edge, Payload::Set(payload));
        }
    }

    /// Removes `edge` and returns its payload.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn delete(&mut self, edge: &Edge<K>) -> Result<Option<P>> {
        let payload = self.edges.delete(edge)?;
        self.unlink(edge);
        Ok(payload)
    }

    /// Removes `edge` if present. Returns `true` if something was removed.
    pub fn discard(&mut self, edge: &Edge<K>) -> bool {
        let removed = self.edges.discard(edge);
        if removed {
            self.unlink(edge);
        }
        removed
    }

    fn unlink(&mut self, (from, to): &Edge<K>) {
        prune(&mut self.successors, from, to);
        prune(&mut self.predecessors, to, from);
    }

    /// Returns `true` if `node` has at least one outgoing edge.
    pub fn has_successors(&self, node: &K) -> bool {
        self.successors.contains_key(node)
    }

    /// Returns `true` if `node` has at least one incoming edge.
    pub fn has_predecessors(&self, node: &K) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Returns `true` if `node` has any edge at all.
    pub fn has_neighbors(&self, node: &K) -> bool {
        self.has_successors(node) || self.has_predecessors(node)
    }

    fn known(&self, node: &K) -> Result<()> {
        if self.has_neighbors(node) {
            Ok(())
        } else {
            Err(GraphError::not_found(node))
        }
    }

    /// Targets of the edges leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn successors(&self, node: &K) -> Result<HashSet<K>> {
        self.known(node)?;
        Ok(self.successors.get(node).cloned().unwrap_or_default())
    }

    /// Sources of the edges entering `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn predecessors(&self, node: &K) -> Result<HashSet<K>> {
        self.known(node)?;
        Ok(self.predecessors.get(node).cloned().unwrap_or_default())
    }

    /// Successors and predecessors of `node` together.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn neighbors(&self, node: &K) -> Result<HashSet<K>> {
        let mut all = self.successors(node)?;
        if let Some(preds) = self.predecessors.get(node) {
            all.extend(preds.iter().cloned());
        }
        Ok(all)
    }

    /// Edges leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn outward(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        Ok(self
            .successors(node)?
            .into_iter()
            .map(|to| (node.clone(), to))
            .collect())
    }

    /// Edges entering `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn inward(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        Ok(self
            .predecessors(node)?
            .into_iter()
            .map(|from| (from, node.clone()))
            .collect())
    }

    /// Edges entering or leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` appears in neither index.
    pub fn incident(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        let mut all = self.outward(node)?;
        all.extend(self.inward(node)?);
        Ok(all)
    }

    /// The endpoint of `edge` opposite to `node`.
    ///
    /// For a self-loop this is `node` itself.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not an endpoint of `edge`.
    pub fn adjacent<'e>(node: &K, edge: &'e Edge<K>) -> Result<&'e K> {
        let (from, to) = edge;
        if from == node {
            Ok(to)
        } else if to == node {
            Ok(from)
        } else {
            Err(GraphError::not_found(node))
        }
    }

    /// Deletes every edge touching `node`, returning how many were removed.
    ///
    /// A node with no edges is left alone.
    pub fn del_incident(&mut self, node: &K) -> usize {
        let Ok(incident) = self.incident(node) else {
            return 0;
        };
        incident.iter().filter(|edge| self.discard(edge)).count()
    }
}

impl<K, P> Default for EdgeSet<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes `neighbor` from `index[key]`, dropping the entry once it is empty.
fn prune<K: Eq + Hash>(index: &mut HashMap<K, HashSet<K>>, key: &K, neighbor: &K) {
    if let Some(set) = index.get_mut(key) {
        set.remove(neighbor);
        if set.is_empty() {
            index.remove(key);
        }
    }
}
