//! The record of a single traversal.
//!
//! A `Trail` is created fresh for each traversal call and handed back when
//! the call ends. It is never reused across calls.

use core::hash::Hash;
use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::collections::Edge;

/// Why a traversal stopped early: the node or edge whose callback returned `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Halt<K> {
    /// An ingress or egress callback asked to stop at this node.
    Node(K),
    /// A backedge callback asked to stop at this edge.
    Edge(Edge<K>),
}

impl<K> Halt<K> {
    /// The node that triggered the halt, if any.
    pub fn node(&self) -> Option<&K> {
        match self {
            Halt::Node(node) => Some(node),
            Halt::Edge(_) => None,
        }
    }

    /// The edge that triggered the halt, if any.
    pub fn edge(&self) -> Option<&Edge<K>> {
        match self {
            Halt::Edge(edge) => Some(edge),
            Halt::Node(_) => None,
        }
    }
}

/// Visitation history, pending work and outcome of one traversal.
///
/// The explored sets record what has been handled regardless of the
/// direction it was reached from; the ordered lists record the order in
/// which nodes were visited and edges followed.
///
/// A trail holds data only. The hooks in effect for a call live in the
/// [`Callbacks`](super::Callbacks) the search receives alongside the trail.
#[derive(Debug, Clone, Serialize)]
pub struct Trail<K> {
    explored_nodes: HashSet<K>,
    explored_edges: HashSet<Edge<K>>,
    nodes: Vec<K>,
    edges: Vec<Edge<K>>,
    backedges: Vec<Edge<K>>,
    queue: VecDeque<(K, Option<Edge<K>>)>,
    result: Option<Halt<K>>,
}

impl<K> Trail<K> {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self {
            explored_nodes: HashSet::new(),
            explored_edges: HashSet::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            backedges: Vec::new(),
            queue: VecDeque::new(),
            result: None,
        }
    }

    /// Every node marked explored so far.
    pub fn explored_nodes(&self) -> &HashSet<K> {
        &self.explored_nodes
    }

    /// Every edge marked explored so far.
    pub fn explored_edges(&self) -> &HashSet<Edge<K>> {
        &self.explored_edges
    }

    /// Visited nodes, in visiting order.
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    /// Edges followed to discover new nodes, in order.
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// Edges that led to an already explored node, in order of discovery.
    pub fn backedges(&self) -> &[Edge<K>] {
        &self.backedges
    }

    /// Pending `(node, via)` work. Only breadth-first search uses it.
    pub fn queue(&self) -> &VecDeque<(K, Option<Edge<K>>)> {
        &self.queue
    }

    /// What stopped the traversal, if a callback did.
    pub fn result(&self) -> Option<&Halt<K>> {
        self.result.as_ref()
    }

    /// Records what stopped the traversal.
    pub fn set_result(&mut self, halt: Halt<K>) {
        self.result = Some(halt);
    }

    /// Takes the result out of the trail.
    pub fn take_result(&mut self) -> Option<Halt<K>> {
        self.result.take()
    }

    /// Returns `true` once a callback has stopped the traversal.
    pub fn is_halted(&self) -> bool {
        self.result.is_some()
    }

    /// Appends `node` to the visiting order.
    pub fn push_node(&mut self, node: K) {
        self.nodes.push(node);
    }

    /// Appends `edge` to the followed edges.
    pub fn push_edge(&mut self, edge: Edge<K>) {
        self.edges.push(edge);
    }

    /// Appends `edge` to the backedges.
    pub fn push_backedge(&mut self, edge: Edge<K>) {
        self.backedges.push(edge);
    }

    /// Queues `node`, reached through `via`.
    pub fn enqueue(&mut self, node: K, via: Option<Edge<K>>) {
        self.queue.push_back((node, via));
    }

    /// Pops the oldest queued `(node, via)` pair.
    pub fn dequeue(&mut self) -> Option<(K, Option<Edge<K>>)> {
        self.queue.pop_front()
    }
}

impl<K: Eq + Hash + Clone> Trail<K> {
    /// Returns `true` if `node` has been explored.
    pub fn is_node_explored(&self, node: &K) -> bool {
        self.explored_nodes.contains(node)
    }

    /// Returns `true` if `edge` has been explored.
    pub fn is_edge_explored(&self, edge: &Edge<K>) -> bool {
        self.explored_edges.contains(edge)
    }

    /// Marks `node` explored. Returns `true` if it was not explored before.
    pub fn explore_node(&mut self, node: K) -> bool {
        self.explored_nodes.insert(node)
    }

    /// Marks `edge` explored. Returns `true` if it was not explored before.
    pub fn explore_edge(&mut self, edge: Edge<K>) -> bool {
        self.explored_edges.insert(edge)
    }

    /// Marks `node` explored and appends it to the visiting order.
    pub fn visit_node(&mut self, node: K) {
        self.explore_node(node.clone());
        self.push_node(node);
    }

    /// Marks `edge` explored and appends it to the followed edges.
    pub fn traverse_edge(&mut self, edge: Edge<K>) {
        self.explore_edge(edge.clone());
        self.push_edge(edge);
    }

    /// Marks `edge` explored and appends it to the backedges.
    pub fn record_backedge(&mut self, edge: Edge<K>) {
        self.explore_edge(edge.clone());
        self.push_backedge(edge);
    }

    /// Returns `true` if `node` was visited (appended to the visiting order).
    pub fn reached(&self, node: &K) -> bool {
        self.nodes.contains(node)
    }
}

impl<K> Default for Trail<K> {
    fn default() -> Self {
        Self::new()
    }
}
