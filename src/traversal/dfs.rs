//! Depth-first search.
//!
//! Walks one start node at a time with an explicit stack of frames, so deep
//! graphs do not exhaust the call stack. The order of events matches the
//! natural recursive formulation:
//!
//! 1. entering a node marks it explored, appends it and runs ingress;
//! 2. unless ingress stopped the walk, the node's selected edges are
//!    examined in order, descending into unexplored neighbors and reporting
//!    edges to explored ones as backedges;
//! 3. leaving a node runs egress.
//!
//! Once any hook stops the walk, no further edges are examined, but every
//! node still on the stack is left (and gets its egress call) as the stack
//! unwinds. The first hook to return `true` decides [`Trail::result`].

use core::ops::{Deref, DerefMut};

use crate::collections::Edge;
use crate::graph::{Graph, NodeKey};
use crate::macros::trace_event;

use super::strategy::{Callbacks, Search, Traversal};
use super::trail::{Halt, Trail};

/// Depth-first search over a [`Traversal`] configuration.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `call` | \(O(n + m)\) | stack depth bounded by the longest simple path |
pub struct DepthFirst<K, N, E> {
    traversal: Traversal<K, N, E>,
}

/// A node on the depth-first stack together with its pending edges.
struct Frame<K> {
    node: K,
    via: Option<Edge<K>>,
    edges: std::vec::IntoIter<Edge<K>>,
}

impl<K, N, E> DepthFirst<K, N, E> {
    /// Depth-first search with the given configuration.
    pub fn new(traversal: Traversal<K, N, E>) -> Self {
        Self { traversal }
    }
}

impl<K: NodeKey, N, E> DepthFirst<K, N, E> {
    /// Enters `node` and pushes its frame.
    ///
    /// Returns `true` if ingress asked to stop; the frame is then pushed with
    /// no pending edges so it is left straight away.
    fn enter(
        graph: &Graph<K, N, E>,
        node: K,
        via: Option<Edge<K>>,
        callbacks: &Callbacks<K, N, E>,
        trail: &mut Trail<K>,
        stack: &mut Vec<Frame<K>>,
    ) -> anyhow::Result<bool> {
        trace_event!(node = ?node, via = ?via, "dfs enter");
        trail.visit_node(node.clone());

        let stop = callbacks.enter(graph, &node, via.as_ref())?;
        let edges = if stop {
            trace_event!(node = ?node, "dfs halted on ingress");
            trail.set_result(Halt::Node(node.clone()));
            Vec::new()
        } else {
            callbacks.select(graph, &node)?
        };

        stack.push(Frame {
            node,
            via,
            edges: edges.into_iter(),
        });
        Ok(stop)
    }

    /// Runs the depth-first walk rooted at `start`.
    ///
    /// Returns `true` if a hook stopped the walk.
    fn descend(
        graph: &Graph<K, N, E>,
        start: K,
        callbacks: &Callbacks<K, N, E>,
        trail: &mut Trail<K>,
    ) -> anyhow::Result<bool> {
        let mut stack = Vec::new();
        let mut stopped = Self::enter(graph, start, None, callbacks, trail, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            let pending = if stopped { None } else { frame.edges.next() };

            let Some(edge) = pending else {
                if let Some(Frame { node, via, .. }) = stack.pop() {
                    trace_event!(node = ?node, "dfs leave");
                    if callbacks.leave(graph, &node, via.as_ref())? && !stopped {
                        trace_event!(node = ?node, "dfs halted on egress");
                        trail.set_result(Halt::Node(node));
                        stopped = true;
                    }
                }
                continue;
            };

            if trail.is_edge_explored(&edge) {
                continue;
            }
            let next = Graph::<K, N, E>::adjacent(&frame.node, &edge)?.clone();
            if trail.is_node_explored(&next) {
                trace_event!(edge = ?edge, "dfs backedge");
                trail.record_backedge(edge.clone());
                if callbacks.backedge(graph, &edge)? {
                    trace_event!(edge = ?edge, "dfs halted on backedge");
                    trail.set_result(Halt::Edge(edge));
                    stopped = true;
                }
            } else {
                trail.traverse_edge(edge.clone());
                stopped = Self::enter(graph, next, Some(edge), callbacks, trail, &mut stack)?;
            }
        }
        Ok(stopped)
    }
}

impl<K, N, E> Default for DepthFirst<K, N, E> {
    fn default() -> Self {
        Self::new(Traversal::new())
    }
}

impl<K, N, E> Clone for DepthFirst<K, N, E> {
    fn clone(&self) -> Self {
        Self::new(self.traversal.clone())
    }
}

impl<K, N, E> From<Traversal<K, N, E>> for DepthFirst<K, N, E> {
    fn from(traversal: Traversal<K, N, E>) -> Self {
        Self::new(traversal)
    }
}

impl<K, N, E> Deref for DepthFirst<K, N, E> {
    type Target = Traversal<K, N, E>;

    fn deref(&self) -> &Self::Target {
        &self.traversal
    }
}

impl<K, N, E> DerefMut for DepthFirst<K, N, E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.traversal
    }
}

impl<K: NodeKey, N, E> Search<K, N, E> for DepthFirst<K, N, E> {
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
            if trail.is_node_explored(start) {
                continue;
            }
            if Self::descend(graph, start.clone(), callbacks, trail)? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{EdgeSelector, Overrides};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hooks() -> Overrides<u8, (), ()> {
        Overrides::new()
    }

    fn chain() -> Graph<u8> {
        // 0 -> 1 -> 2 -> 3
        Graph::from_keys(0..4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    fn outward() -> DepthFirst<u8, (), ()> {
        DepthFirst::new(Traversal::new().with_edge_selector(EdgeSelector::Outward))
    }

    #[test]
    fn dfs_follows_a_chain() {
        let trail = outward().call(&chain(), [0], hooks()).unwrap();
        assert_eq!(trail.nodes(), [0, 1, 2, 3]);
        assert_eq!(trail.edges(), [(0, 1), (1, 2), (2, 3)]);
        assert!(trail.backedges().is_empty());
    }

    #[test]
    fn dfs_egress_runs_in_reverse_entry_order() {
        let left = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&left);
        let overrides = hooks().egress(move |_, node, _| {
            log.borrow_mut().push(*node);
            Ok(false)
        });

        outward().call(&chain(), [0], overrides).unwrap();
        assert_eq!(*left.borrow(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn dfs_egress_fires_while_unwinding_a_stop() {
        let left = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&left);
        let overrides = hooks()
            .ingress(|_, node, _| Ok(*node == 2))
            .egress(move |_, node, _| {
                log.borrow_mut().push(*node);
                Ok(true)
            });

        let trail = outward().call(&chain(), [0], overrides).unwrap();
        // Ingress stopped at 2; the later egress `true`s do not overwrite it.
        assert_eq!(trail.result(), Some(&Halt::Node(2)));
        assert_eq!(trail.nodes(), [0, 1, 2]);
        assert_eq!(*left.borrow(), vec![2, 1, 0]);
    }

    #[test]
    fn dfs_egress_can_stop() {
        let trail = outward()
            .call(
                &chain(),
                [0],
                hooks().egress(|_, node, _| Ok(*node == 3)),
            )
            .unwrap();
        assert_eq!(trail.result(), Some(&Halt::Node(3)));
        assert_eq!(trail.nodes(), [0, 1, 2, 3]);
    }

    #[test]
    fn dfs_cycle_reports_backedge() {
        let graph: Graph<u8> = Graph::from_keys(0..3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let trail = outward()
            .call(&graph, [0], hooks().backedge(|_, edge| Ok(*edge == (2, 0))))
            .unwrap();

        assert_eq!(trail.backedges(), [(2, 0)]);
        assert_eq!(trail.result(), Some(&Halt::Edge((2, 0))));
    }

    #[test]
    fn dfs_self_loop_is_a_backedge() {
        let graph: Graph<u8> = Graph::from_keys([0], [(0, 0)]).unwrap();
        let trail = DepthFirst::default().call(&graph, [0], hooks()).unwrap();
        assert_eq!(trail.nodes(), [0]);
        assert_eq!(trail.backedges(), [(0, 0)]);
    }

    #[test]
    fn dfs_unknown_start_interrupts() {
        let err = outward().call(&chain(), [0, 9], hooks()).unwrap_err();
        // 9 is entered before its edges are looked up.
        assert_eq!(err.trail.nodes(), [0, 1, 2, 3, 9]);
        assert!(err.source.to_string().contains("9"));
    }
}
