//! Callback-driven graph traversals.
//!
//! - [`Traversal`]: shared configuration (edge selector and default hooks)
//! - [`BreadthFirst`] / [`DepthFirst`]: the two search strategies
//! - [`Trail`]: the per-call record a search returns
//!
//! ```rust
//! use trailgraph::graph::Graph;
//! use trailgraph::traversal::{DepthFirst, EdgeSelector, Halt, Overrides, Search, Traversal};
//!
//! let graph: Graph<&str> =
//!     Graph::from_keys(["p", "q", "r"], [("p", "q"), ("q", "r")]).unwrap();
//! let dfs = DepthFirst::new(Traversal::new().with_edge_selector(EdgeSelector::Outward));
//!
//! let trail = dfs
//!     .call(&graph, ["p"], Overrides::<&str, (), ()>::new().ingress(|_, node, _| Ok(*node == "q")))
//!     .unwrap();
//! assert_eq!(trail.result(), Some(&Halt::Node("q")));
//! assert_eq!(trail.nodes(), ["p", "q"]);
//! ```

pub mod bfs;
pub mod dfs;
pub mod strategy;
pub mod trail;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use strategy::{Callbacks, EdgeHook, EdgeSelector, NodeHook, Overrides, Search, SelectorFn, Traversal};
pub use trail::{Halt, Trail};
