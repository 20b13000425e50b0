//! Traversal configuration shared across calls.
//!
//! A [`Traversal`] holds an [`EdgeSelector`] and three default hooks:
//! ingress (a node is first visited), egress (a node is finished) and
//! backedge (an edge leads to an already explored node). Each call layers
//! its [`Overrides`] over those defaults to get the [`Callbacks`] it runs
//! with. Any hook returning `Ok(true)` stops the whole traversal; an `Err`
//! aborts it.
//!
//! Hooks are `Rc`-shared closures, so a configured traversal can be cloned
//! and reused cheaply. Hooks that must record state across calls can
//! capture `Rc<RefCell<_>>` or `Cell`s.

use core::fmt;
use core::str::FromStr;
use std::rc::Rc;

use crate::collections::Edge;
use crate::error::{GraphError, Interrupted, Result};
use crate::graph::{Graph, NodeKey};
use crate::macros::debug_event;

use super::trail::Trail;

/// Hook called with `(graph, node, via)`; `via` is `None` for a start node.
pub type NodeHook<K, N, E> = Rc<dyn Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool>>;

/// Hook called with `(graph, edge)` for every backedge.
pub type EdgeHook<K, N, E> = Rc<dyn Fn(&Graph<K, N, E>, &Edge<K>) -> anyhow::Result<bool>>;

/// Custom edge selection: the edges to follow out of `node`.
pub type SelectorFn<K, N, E> = Rc<dyn Fn(&Graph<K, N, E>, &K) -> anyhow::Result<Vec<Edge<K>>>>;

/// Which edges a traversal follows out of a node.
pub enum EdgeSelector<K, N, E> {
    /// Edges entering the node; the walk runs against edge direction.
    Inward,
    /// Edges leaving the node; the walk runs along edge direction.
    Outward,
    /// Edges in both directions. Parsed from `incident` or `both`.
    Incident,
    /// A caller-supplied selection.
    Custom(SelectorFn<K, N, E>),
}

impl<K, N, E> EdgeSelector<K, N, E> {
    /// Wraps a closure as a custom selector.
    pub fn custom<F>(select: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &K) -> anyhow::Result<Vec<Edge<K>>> + 'static,
    {
        EdgeSelector::Custom(Rc::new(select))
    }

    /// The selector's name; `custom` for closures.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeSelector::Inward => "inward",
            EdgeSelector::Outward => "outward",
            EdgeSelector::Incident => "incident",
            EdgeSelector::Custom(_) => "custom",
        }
    }
}

impl<K: NodeKey, N, E> EdgeSelector<K, N, E> {
    /// The edges to follow out of `node`, in iteration order.
    ///
    /// # Errors
    /// Whatever the underlying graph query or custom closure reports, e.g.
    /// [`GraphError::NotFound`] for a node unknown to `graph`.
    pub fn select(&self, graph: &Graph<K, N, E>, node: &K) -> anyhow::Result<Vec<Edge<K>>> {
        let edges = match self {
            EdgeSelector::Inward => graph.inward(node)?,
            EdgeSelector::Outward => graph.outward(node)?,
            EdgeSelector::Incident => graph.incident(node)?,
            EdgeSelector::Custom(select) => return select(graph, node),
        };
        Ok(edges.into_iter().collect())
    }
}

impl<K, N, E> Default for EdgeSelector<K, N, E> {
    fn default() -> Self {
        EdgeSelector::Incident
    }
}

impl<K, N, E> Clone for EdgeSelector<K, N, E> {
    fn clone(&self) -> Self {
        match self {
            EdgeSelector::Inward => EdgeSelector::Inward,
            EdgeSelector::Outward => EdgeSelector::Outward,
            EdgeSelector::Incident => EdgeSelector::Incident,
            EdgeSelector::Custom(select) => EdgeSelector::Custom(Rc::clone(select)),
        }
    }
}

impl<K, N, E> fmt::Debug for EdgeSelector<K, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeSelector::{}", self.name())
    }
}

impl<K, N, E> fmt::Display for EdgeSelector<K, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<K, N, E> FromStr for EdgeSelector<K, N, E> {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "inward" => Ok(EdgeSelector::Inward),
            "outward" => Ok(EdgeSelector::Outward),
            "incident" | "both" => Ok(EdgeSelector::Incident),
            _ => Err(GraphError::UnknownSelector {
                name: name.to_string(),
            }),
        }
    }
}

/// Per-call replacements for a [`Traversal`]'s defaults.
pub struct Overrides<K, N, E> {
    edge_selector: Option<EdgeSelector<K, N, E>>,
    ingress: Option<NodeHook<K, N, E>>,
    egress: Option<NodeHook<K, N, E>>,
    backedge: Option<EdgeHook<K, N, E>>,
}

impl<K, N, E> Overrides<K, N, E> {
    /// No overrides: the call runs with the stored defaults.
    pub fn new() -> Self {
        Self {
            edge_selector: None,
            ingress: None,
            egress: None,
            backedge: None,
        }
    }

    /// Replaces the edge selector for this call.
    #[must_use]
    pub fn edge_selector(mut self, selector: EdgeSelector<K, N, E>) -> Self {
        self.edge_selector = Some(selector);
        self
    }

    /// Replaces the ingress hook for this call.
    #[must_use]
    pub fn ingress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.ingress = Some(Rc::new(hook));
        self
    }

    /// Replaces the egress hook for this call.
    #[must_use]
    pub fn egress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.egress = Some(Rc::new(hook));
        self
    }

    /// Replaces the backedge hook for this call.
    #[must_use]
    pub fn backedge<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &Edge<K>) -> anyhow::Result<bool> + 'static,
    {
        self.backedge = Some(Rc::new(hook));
        self
    }
}

impl<K, N, E> Default for Overrides<K, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The effective selector and hooks of one traversal call.
///
/// An absent hook behaves as one that always returns `Ok(false)`.
pub struct Callbacks<K, N, E> {
    /// Edge selection for this call.
    pub edge_selector: EdgeSelector<K, N, E>,
    /// Called when a node is first visited.
    pub ingress: Option<NodeHook<K, N, E>>,
    /// Called when a node is finished.
    pub egress: Option<NodeHook<K, N, E>>,
    /// Called for each backedge.
    pub backedge: Option<EdgeHook<K, N, E>>,
}

impl<K: NodeKey, N, E> Callbacks<K, N, E> {
    /// Edges to follow out of `node`.
    ///
    /// # Errors
    /// See [`EdgeSelector::select`].
    pub fn select(&self, graph: &Graph<K, N, E>, node: &K) -> anyhow::Result<Vec<Edge<K>>> {
        self.edge_selector.select(graph, node)
    }

    /// Runs the ingress hook.
    ///
    /// # Errors
    /// Whatever the hook returns.
    pub fn enter(&self, graph: &Graph<K, N, E>, node: &K, via: Option<&Edge<K>>) -> anyhow::Result<bool> {
        self.ingress.as_ref().map_or(Ok(false), |hook| hook(graph, node, via))
    }

    /// Runs the egress hook.
    ///
    /// # Errors
    /// Whatever the hook returns.
    pub fn leave(&self, graph: &Graph<K, N, E>, node: &K, via: Option<&Edge<K>>) -> anyhow::Result<bool> {
        self.egress.as_ref().map_or(Ok(false), |hook| hook(graph, node, via))
    }

    /// Runs the backedge hook.
    ///
    /// # Errors
    /// Whatever the hook returns.
    pub fn backedge(&self, graph: &Graph<K, N, E>, edge: &Edge<K>) -> anyhow::Result<bool> {
        self.backedge.as_ref().map_or(Ok(false), |hook| hook(graph, edge))
    }
}

/// Stored traversal configuration: an edge selector and three default hooks.
///
/// Unset hooks never stop the walk; the selector defaults to
/// [`EdgeSelector::Incident`].
pub struct Traversal<K, N, E> {
    edge_selector: EdgeSelector<K, N, E>,
    ingress: Option<NodeHook<K, N, E>>,
    egress: Option<NodeHook<K, N, E>>,
    backedge: Option<EdgeHook<K, N, E>>,
}

impl<K, N, E> Traversal<K, N, E> {
    /// Default configuration.
    pub fn new() -> Self {
        Self {
            edge_selector: EdgeSelector::default(),
            ingress: None,
            egress: None,
            backedge: None,
        }
    }

    /// The stored edge selector.
    pub fn edge_selector(&self) -> &EdgeSelector<K, N, E> {
        &self.edge_selector
    }

    /// Replaces the stored edge selector.
    pub fn set_edge_selector(&mut self, selector: EdgeSelector<K, N, E>) {
        self.edge_selector = selector;
    }

    /// Replaces the stored edge selector by name.
    ///
    /// # Errors
    /// [`GraphError::UnknownSelector`] for anything but `inward`, `outward`,
    /// `incident` or `both`; the stored selector is left unchanged.
    pub fn set_edge_selector_named(&mut self, name: &str) -> Result<()> {
        self.edge_selector = name.parse()?;
        Ok(())
    }

    /// Replaces the stored ingress hook.
    pub fn set_ingress<F>(&mut self, hook: F)
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.ingress = Some(Rc::new(hook));
    }

    /// Replaces the stored egress hook.
    pub fn set_egress<F>(&mut self, hook: F)
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.egress = Some(Rc::new(hook));
    }

    /// Replaces the stored backedge hook.
    pub fn set_backedge<F>(&mut self, hook: F)
    where
        F: Fn(&Graph<K, N, E>, &Edge<K>) -> anyhow::Result<bool> + 'static,
    {
        self.backedge = Some(Rc::new(hook));
    }

    /// Builder form of [`Traversal::set_edge_selector`].
    #[must_use]
    pub fn with_edge_selector(mut self, selector: EdgeSelector<K, N, E>) -> Self {
        self.set_edge_selector(selector);
        self
    }

    /// Builder form of [`Traversal::set_ingress`].
    #[must_use]
    pub fn with_ingress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.set_ingress(hook);
        self
    }

    /// Builder form of [`Traversal::set_egress`].
    #[must_use]
    pub fn with_egress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &K, Option<&Edge<K>>) -> anyhow::Result<bool> + 'static,
    {
        self.set_egress(hook);
        self
    }

    /// Builder form of [`Traversal::set_backedge`].
    #[must_use]
    pub fn with_backedge<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Graph<K, N, E>, &Edge<K>) -> anyhow::Result<bool> + 'static,
    {
        self.set_backedge(hook);
        self
    }

    /// Layers `overrides` over the stored defaults.
    pub fn callbacks(&self, overrides: Overrides<K, N, E>) -> Callbacks<K, N, E> {
        Callbacks {
            edge_selector: overrides
                .edge_selector
                .unwrap_or_else(|| self.edge_selector.clone()),
            ingress: overrides.ingress.or_else(|| self.ingress.clone()),
            egress: overrides.egress.or_else(|| self.egress.clone()),
            backedge: overrides.backedge.or_else(|| self.backedge.clone()),
        }
    }
}

impl<K, N, E> Default for Traversal<K, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, E> Clone for Traversal<K, N, E> {
    fn clone(&self) -> Self {
        Self {
            edge_selector: self.edge_selector.clone(),
            ingress: self.ingress.clone(),
            egress: self.egress.clone(),
            backedge: self.backedge.clone(),
        }
    }
}

impl<K, N, E> fmt::Debug for Traversal<K, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("edge_selector", &self.edge_selector)
            .finish_non_exhaustive()
    }
}

/// A search algorithm driven by a [`Traversal`].
///
/// Implementors supply [`Search::walk`]; [`Search::call`] builds the
/// per-call callbacks and a fresh [`Trail`] around it.
pub trait Search<K: NodeKey, N, E> {
    /// The stored configuration.
    fn traversal(&self) -> &Traversal<K, N, E>;

    /// Walks `graph` from `starts`, recording into `trail`.
    ///
    /// Returns `Ok(())` both on exhaustion and on a hook-requested stop
    /// (the latter leaves [`Trail::result`] set).
    ///
    /// # Errors
    /// The first error raised by a hook or by edge selection.
    fn walk(
        &self,
        graph: &Graph<K, N, E>,
        starts: &[K],
        callbacks: &Callbacks<K, N, E>,
        trail: &mut Trail<K>,
    ) -> anyhow::Result<()>;

    /// Runs one traversal and returns its trail.
    ///
    /// # Errors
    /// [`Interrupted`] carrying the partial trail if a hook or the edge
    /// selector failed.
    fn call<I>(
        &self,
        graph: &Graph<K, N, E>,
        starts: I,
        overrides: Overrides<K, N, E>,
    ) -> core::result::Result<Trail<K>, Interrupted<K>>
    where
        I: IntoIterator<Item = K>,
        Self: Sized,
    {
        let callbacks = self.traversal().callbacks(overrides);
        let starts: Vec<K> = starts.into_iter().collect();
        let mut trail = Trail::new();
        debug_event!(
            starts = starts.len(),
            selector = callbacks.edge_selector.name(),
            "traversal started"
        );
        match self.walk(graph, &starts, &callbacks, &mut trail) {
            Ok(()) => {
                debug_event!(
                    visited = trail.nodes().len(),
                    halted = trail.is_halted(),
                    "traversal finished"
                );
                Ok(trail)
            }
            Err(source) => {
                debug_event!(visited = trail.nodes().len(), error = %source, "traversal interrupted");
                Err(Interrupted { trail, source })
            }
        }
    }
}
