//! A keyed directed graph composed of a [`NodeSet`] and an [`EdgeSet`].
//!
//! Every edge endpoint is a known node. Construction checks this unless told
//! not to, and [`Graph::add_edge`] creates missing endpoints on the fly.
//!
//! Neighbor queries differ from the edge set's in one respect: a node that
//! exists but has no edges yields an empty set, while a node the graph has
//! never heard of is [`GraphError::NotFound`].

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashSet;

use crate::collections::{Edge, EdgeSet, NodeSet, Payload};
use crate::error::{GraphError, Result};
use crate::macros::debug_event;

/// Requirements on node keys.
///
/// `Debug` lets errors name the offending key.
pub trait NodeKey: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeKey for T {}

/// A directed graph with node payloads `N` and edge payloads `E`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` / `has_node` | \(O(1)\) average | |
/// | `add_edge` | \(O(1)\) average | creates missing endpoints |
/// | `del_node` | \(O(d)\) | cascades to the `d` incident edges |
/// | `successors` etc. | \(O(d)\) | returns an owned set |
/// | `roots` / `leafs` / `isolated` | \(O(n)\) | full scan, not cached |
#[derive(Debug, Clone)]
pub struct Graph<K, N = (), E = ()> {
    nodes: NodeSet<K, N>,
    edges: EdgeSet<K, E>,
}

impl<K, N, E> Graph<K, N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: NodeSet::new(),
            edges: EdgeSet::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over node keys in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Iterates over edges in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<K>> {
        self.edges.iter().map(|(edge, _)| edge)
    }

    /// Read-only view of the vertex store.
    pub fn node_set(&self) -> &NodeSet<K, N> {
        &self.nodes
    }

    /// Read-only view of the edge store.
    pub fn edge_set(&self) -> &EdgeSet<K, E> {
        &self.edges
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}

impl<K: NodeKey, N, E> Graph<K, N, E> {
    /// Builds a graph from `(key, payload)` nodes and `(edge, payload)` edges.
    ///
    /// # Errors
    /// [`GraphError::Inconsistent`] naming the first edge endpoint, in the
    /// order `edges` yields them, that is not among `nodes`.
    pub fn from_elements<NI, EI>(nodes: NI, edges: EI) -> Result<Self>
    where
        NI: IntoIterator<Item = (K, Option<N>)>,
        EI: IntoIterator<Item = (Edge<K>, Option<E>)>,
    {
        let mut graph = Self::new();
        graph.nodes.update_pairs(nodes);
        let edges: Vec<_> = edges.into_iter().collect();
        for (edge, _) in &edges {
            graph.check_endpoints(edge)?;
        }
        graph.edges.update(edges);
        Ok(graph)
    }

    /// Like [`Graph::from_elements`] but trusts the caller: endpoints are not
    /// checked against the node collection.
    pub fn from_elements_unchecked<NI, EI>(nodes: NI, edges: EI) -> Self
    where
        NI: IntoIterator<Item = (K, Option<N>)>,
        EI: IntoIterator<Item = (Edge<K>, Option<E>)>,
    {
        let mut graph = Self::new();
        graph.nodes.update_pairs(nodes);
        graph.edges.update(edges);
        graph
    }

    /// Builds a payload-free graph from bare node keys and edges.
    ///
    /// # Errors
    /// [`GraphError::Inconsistent`] if an edge endpoint is not among `nodes`.
    pub fn from_keys<NI, EI>(nodes: NI, edges: EI) -> Result<Self>
    where
        NI: IntoIterator<Item = K>,
        EI: IntoIterator<Item = Edge<K>>,
    {
        Self::from_elements(
            nodes.into_iter().map(|key| (key, None)),
            edges.into_iter().map(|edge| (edge, None)),
        )
    }

    fn check_endpoints(&self, edge: &Edge<K>) -> Result<()> {
        let (from, to) = edge;
        for endpoint in [from, to] {
            if !self.nodes.contains(endpoint) {
                debug_event!(?edge, ?endpoint, "edge references undeclared node");
                return Err(GraphError::Inconsistent {
                    edge: format!("{edge:?}"),
                    endpoint: format!("{endpoint:?}"),
                });
            }
        }
        Ok(())
    }

    // ---- nodes ---------------------------------------------------------

    /// Adds `key`, applying `payload` as described on [`Payload`].
    ///
    /// Returns `true` if the node is new.
    pub fn add_node(&mut self, key: K, payload: Payload<N>) -> bool {
        self.nodes.set(key, payload)
    }

    /// Removes `key` and every edge touching it, returning its payload.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the node is absent.
    pub fn del_node(&mut self, key: &K) -> Result<Option<N>> {
        let payload = self.nodes.delete(key)?;
        self.edges.del_incident(key);
        Ok(payload)
    }

    /// Removes `key` and its edges if present. Returns `true` if it was there.
    pub fn discard_node(&mut self, key: &K) -> bool {
        let removed = self.nodes.discard(key);
        if removed {
            self.edges.del_incident(key);
        }
        removed
    }

    /// Returns `true` if `key` is a node.
    pub fn has_node(&self, key: &K) -> bool {
        self.nodes.contains(key)
    }

    /// Payload of node `key`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the node is absent.
    pub fn node(&self, key: &K) -> Result<Option<&N>> {
        self.nodes.get(key)
    }

    /// Mutable payload slot of node `key`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the node is absent.
    pub fn node_mut(&mut self, key: &K) -> Result<&mut Option<N>> {
        self.nodes.get_mut(key)
    }

    // ---- edges ---------------------------------------------------------

    /// Adds `edge`, creating either endpoint that does not exist yet.
    ///
    /// Returns `true` if the edge is new.
    pub fn add_edge(&mut self, edge: Edge<K>, payload: Payload<E>) -> bool {
        self.add_edge_seeded(edge, payload, |_| None)
    }

    /// Adds `edge`, seeding each newly created endpoint with `seed(endpoint)`.
    ///
    /// `seed` is not called for endpoints that already exist, so their
    /// payloads stay as they are.
    pub fn add_edge_seeded<F>(&mut self, edge: Edge<K>, payload: Payload<E>, mut seed: F) -> bool
    where
        F: FnMut(&K) -> Option<N>,
    {
        for endpoint in [&edge.0, &edge.1] {
            if !self.nodes.contains(endpoint) {
                let initial = seed(endpoint);
                self.nodes.set(endpoint.clone(), Payload::Set(initial));
            }
        }
        self.edges.add(edge, payload)
    }

    /// Removes `edge` and returns its payload. Endpoints stay.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn del_edge(&mut self, edge: &Edge<K>) -> Result<Option<E>> {
        self.edges.delete(edge)
    }

    /// Removes `edge` if present. Returns `true` if it was there.
    pub fn discard_edge(&mut self, edge: &Edge<K>) -> bool {
        self.edges.discard(edge)
    }

    /// Returns `true` if `edge` is stored.
    pub fn has_edge(&self, edge: &Edge<K>) -> bool {
        self.edges.contains(edge)
    }

    /// Payload of `edge`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn edge(&self, edge: &Edge<K>) -> Result<Option<&E>> {
        self.edges.get(edge)
    }

    /// Mutable payload slot of `edge`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the edge is absent.
    pub fn edge_mut(&mut self, edge: &Edge<K>) -> Result<&mut Option<E>> {
        self.edges.get_mut(edge)
    }

    /// The endpoint of `edge` opposite to `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not an endpoint of `edge`.
    pub fn adjacent<'e>(node: &K, edge: &'e Edge<K>) -> Result<&'e K> {
        EdgeSet::<K, E>::adjacent(node, edge)
    }

    // ---- neighborhoods -------------------------------------------------

    /// Runs an edge-set query for a node known to the graph; an edgeless node
    /// yields the default (empty) result.
    fn query<T, F>(&self, node: &K, lookup: F) -> Result<T>
    where
        T: Default,
        F: FnOnce(&EdgeSet<K, E>, &K) -> Result<T>,
    {
        if !self.nodes.contains(node) {
            return Err(GraphError::not_found(node));
        }
        if self.edges.has_neighbors(node) {
            lookup(&self.edges, node)
        } else {
            Ok(T::default())
        }
    }

    /// Targets of the edges leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn successors(&self, node: &K) -> Result<HashSet<K>> {
        self.query(node, EdgeSet::successors)
    }

    /// Sources of the edges entering `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn predecessors(&self, node: &K) -> Result<HashSet<K>> {
        self.query(node, EdgeSet::predecessors)
    }

    /// Successors and predecessors of `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn neighbors(&self, node: &K) -> Result<HashSet<K>> {
        self.query(node, EdgeSet::neighbors)
    }

    /// Edges leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn outward(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        self.query(node, EdgeSet::outward)
    }

    /// Edges entering `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn inward(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        self.query(node, EdgeSet::inward)
    }

    /// Edges entering or leaving `node`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `node` is not in the graph.
    pub fn incident(&self, node: &K) -> Result<HashSet<Edge<K>>> {
        self.query(node, EdgeSet::incident)
    }

    /// Nodes without predecessors.
    pub fn roots(&self) -> HashSet<K> {
        self.scan(|edges, node| !edges.has_predecessors(node))
    }

    /// Nodes without successors.
    pub fn leafs(&self) -> HashSet<K> {
        self.scan(|edges, node| !edges.has_successors(node))
    }

    /// Nodes without any edge.
    pub fn isolated(&self) -> HashSet<K> {
        self.scan(|edges, node| !edges.has_neighbors(node))
    }

    fn scan<F>(&self, keep: F) -> HashSet<K>
    where
        F: Fn(&EdgeSet<K, E>, &K) -> bool,
    {
        self.nodes
            .keys()
            .filter(|node| keep(&self.edges, *node))
            .cloned()
            .collect()
    }
}

impl<K, N, E> Default for Graph<K, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<const N: usize>(items: [&'static str; N]) -> HashSet<&'static str> {
        items.into_iter().collect()
    }

    fn chain() -> Graph<&'static str> {
        Graph::from_keys(["p", "q", "r"], [("p", "q"), ("q", "r")]).unwrap()
    }

    #[test]
    fn roots_leafs_isolated() {
        let graph = chain();
        assert_eq!(graph.roots(), keys(["p"]));
        assert_eq!(graph.leafs(), keys(["r"]));
        assert!(graph.isolated().is_empty());
    }

    #[test]
    fn construction_rejects_undeclared_endpoint() {
        let err = Graph::<&str>::from_keys(["p"], [("p", "q")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::Inconsistent {
                edge: "(\"p\", \"q\")".to_string(),
                endpoint: "\"q\"".to_string(),
            }
        );
    }

    #[test]
    fn unchecked_construction_skips_validation() {
        let graph: Graph<&str> =
            Graph::from_elements_unchecked([("p", None)], [(("p", "q"), None)]);
        assert!(graph.has_edge(&("p", "q")));
        assert!(!graph.has_node(&"q"));
    }

    #[test]
    fn isolated_vs_unknown() {
        let graph: Graph<&str> = Graph::from_keys(["p"], Vec::new()).unwrap();
        assert!(graph.successors(&"p").unwrap().is_empty());
        assert!(graph.incident(&"p").unwrap().is_empty());
        assert!(graph.successors(&"x").unwrap_err().is_not_found());
        assert!(graph.neighbors(&"x").unwrap_err().is_not_found());
        assert_eq!(graph.isolated(), keys(["p"]));
    }

    #[test]
    fn add_edge_creates_and_seeds_endpoints() {
        let mut graph: Graph<&str, u32, &str> = Graph::new();
        graph.add_node("p", Payload::value(1));

        let mut seeded = Vec::new();
        graph.add_edge_seeded(("p", "q"), Payload::value("link"), |node| {
            seeded.push(*node);
            Some(2)
        });

        assert_eq!(seeded, vec!["q"]);
        assert_eq!(graph.node(&"p").unwrap(), Some(&1));
        assert_eq!(graph.node(&"q").unwrap(), Some(&2));
        assert_eq!(graph.edge(&("p", "q")).unwrap(), Some(&"link"));

        graph.add_edge(("q", "r"), Payload::Keep);
        assert_eq!(graph.node(&"r").unwrap(), None);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn del_node_cascades() {
        let mut graph = chain();
        assert_eq!(graph.del_node(&"q").unwrap(), None);

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edge_set().successor_index().is_empty());
        assert!(graph.edge_set().predecessor_index().is_empty());
        assert_eq!(graph.isolated(), keys(["p", "r"]));
        assert!(graph.del_node(&"q").unwrap_err().is_not_found());
        assert!(!graph.discard_node(&"q"));
    }

    #[test]
    fn edge_removal_keeps_endpoints() {
        let mut graph = chain();
        assert!(graph.discard_edge(&("p", "q")));
        assert!(graph.del_edge(&("p", "q")).is_err());
        assert!(graph.has_node(&"p"));
        assert_eq!(graph.roots(), keys(["p", "q"]));
    }

    #[test]
    fn payload_mutation() {
        let mut graph: Graph<u8, String, u8> = Graph::new();
        graph.add_edge((1, 2), Payload::value(5));
        *graph.node_mut(&1).unwrap() = Some("sda".to_string());
        *graph.edge_mut(&(1, 2)).unwrap() = None;

        assert_eq!(graph.node(&1).unwrap().map(String::as_str), Some("sda"));
        assert_eq!(graph.edge(&(1, 2)).unwrap(), None);
        assert!(graph.node_mut(&9).is_err());
    }
}
