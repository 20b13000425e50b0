//! Breadth-first search.
//!
//! All start nodes are queued up front, so nodes come off the queue in
//! non-decreasing distance from the nearest start node. Ingress and egress
//! both fire when a node is dequeued: breadth-first order has no point at
//! which a node's subtree is finished.

use core::ops::{Deref, DerefMut};

use crate::graph::{Graph, NodeKey};
use crate::macros::trace_event;

use super::strategy::{Callbacks, Search, Traversal};
use super::trail::{Halt, Trail};

/// Breadth-first search over a [`Traversal`] configuration.
///
/// Ingress and egress both run when a node is dequeued, and egress runs
/// even if ingress has just asked to stop. A side-effecting egress hook
/// therefore also sees the node that halted the walk.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `call` | \(O(n + m)\) | plus the cost of the hooks and selector |
pub struct BreadthFirst<K, N, E> {
    traversal: Traversal<K, N, E>,
}

impl<K, N, E> BreadthFirst<K, N, E> {
    /// Breadth-first search with the given configuration.
    pub fn new(traversal: Traversal<K, N, E>) -> Self {
        Self { traversal }
    }
}

impl<K, N, E> Default for BreadthFirst<K, N, E> {
    fn default() -> Self {
        Self::new(Traversal::new())
    }
}

impl<K, N, E> Clone for BreadthFirst<K, N, E> {
    fn clone(&self) -> Self {
        Self::new(self.traversal.clone())
    }
}

impl<K, N, E> From<Traversal<K, N, E>> for BreadthFirst<K, N, E> {
    fn from(traversal: Traversal<K, N, E>) -> Self {
        Self::new(traversal)
    }
}

impl<K, N, E> Deref for BreadthFirst<K, N, E> {
    type Target = Traversal<K, N, E>;

    fn deref(&self) -> &Self::Target {
        &self.traversal
    }
}

impl<K, N, E> DerefMut for BreadthFirst<K, N, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.traversal
    }
}

impl<K: NodeKey, N, E> Search<K, N, E> for BreadthFirst<K, N, E> {
    fn traversal(&self) -> &Traversal<K, N, E> {
        &self.traversal
    }

    fn walk(
        &self,
        graph: &Graph<K, N, E>,
        starts: &[K],
        callbacks: &Callbacks<K, N, E>,
        trail: &mut Trail<K>,
    ) -> anyhow::Result<()> {
        for start in starts {
            if trail.explore_node(start.clone()) {
                trail.enqueue(start.clone(), None);
            }
        }

        while let Some((node, via)) = trail.dequeue() {
            trace_event!(node = ?node, via = ?via, "bfs visit");
            trail.push_node(node.clone());
            if let Some(edge) = &via {
                trail.push_edge(edge.clone());
            }

            let entered = callbacks.enter(graph, &node, via.as_ref())?;
            let left = callbacks.leave(graph, &node, via.as_ref())?;
            if entered || left {
                trace_event!(node = ?node, "bfs halted at node");
                trail.set_result(Halt::Node(node));
                return Ok(());
            }

            for edge in callbacks.select(graph, &node)? {
                let next = Graph::<K, N, E>::adjacent(&node, &edge)?.clone();
                if trail.explore_node(next.clone()) {
                    trail.explore_edge(edge.clone());
                    trail.enqueue(next, Some(edge));
                } else if !trail.is_edge_explored(&edge) {
                    trace_event!(edge = ?edge, "bfs backedge");
                    trail.record_backedge(edge.clone());
                    if callbacks.backedge(graph, &edge)? {
                        trace_event!(edge = ?edge, "bfs halted at backedge");
                        trail.set_result(Halt::Edge(edge));
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }
}
