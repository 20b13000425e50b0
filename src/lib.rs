//! # `trailgraph` - Keyed Directed Graphs with Callback-Driven Traversal
//!
//! A small toolkit for building a directed graph over arbitrary hashable keys
//! (device paths, identifiers, ...) and walking it breadth-first or
//! depth-first while user callbacks observe, and optionally stop, the walk.
//!
//! ## Architecture
//!
//! Layers, leaves first:
//!
//! 1. **Keyed stores** ([`collections`]):
//!    - [`Container`]: key to optional-payload map
//!    - [`NodeSet`]: vertex keys
//!    - [`EdgeSet`]: `(from, to)` keys with successor/predecessor indices
//!      that never keep empty entries
//!
//! 2. **Graph** ([`graph`]):
//!    - [`Graph`] composes a node set and an edge set and keeps every edge
//!      endpoint a known node
//!    - neighbor queries tell "known but isolated" (empty result) apart from
//!      "unknown" ([`GraphError::NotFound`])
//!
//! 3. **Traversal** ([`traversal`]):
//!    - [`Traversal`]: edge selector (inward, outward, incident, custom)
//!      plus ingress, egress and backedge hooks shared across calls
//!    - [`BreadthFirst`] and [`DepthFirst`]: the search strategies
//!    - [`Trail`]: visited nodes, followed edges, backedges and the halt
//!      result of one call
//!
//! ### Invariants
//!
//! **Index pruning**: an adjacency index has an entry for a key iff that key
//! has at least one neighbor in that direction.
//!
//! **Single visit**: a traversal visits each reachable node at most once and
//! only follows edges its selector yields.
//!
//! **Cooperative stop**: a hook returning `true` is the only way to stop a
//! walk early. Depth-first search still runs egress for every node on the
//! stack while it unwinds.
//!
//! ## Example
//!
//! ```rust
//! use trailgraph::{BreadthFirst, EdgeSelector, Graph, Overrides, Search, Traversal};
//!
//! let graph: Graph<&str> = Graph::from_keys(
//!     ["p", "q", "r", "s"],
//!     [("p", "q"), ("p", "r"), ("r", "s"), ("s", "p")],
//! )
//! .unwrap();
//!
//! let bfs = BreadthFirst::new(Traversal::new().with_edge_selector(EdgeSelector::Outward));
//! let trail = bfs.call(&graph, ["p"], Overrides::new()).unwrap();
//!
//! assert_eq!(trail.nodes()[0], "p");
//! assert_eq!(trail.backedges(), [("s", "p")]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for traversal progress and graph
//!   validation failures.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod graph;
pub mod traversal;

pub use collections::{edge_from, Container, Edge, EdgeSet, NodeSet, Payload};
pub use error::{GraphError, Interrupted, Result};
pub use graph::{Graph, NodeKey};
pub use traversal::{
    BreadthFirst, Callbacks, DepthFirst, EdgeSelector, Halt, Overrides, Search, Trail, Traversal,
};
