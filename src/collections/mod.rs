//! Keyed stores backing the graph.
//!
//! - [`Container`]: key to optional-payload map, the common foundation
//! - [`NodeSet`]: vertex keys
//! - [`EdgeSet`]: `(from, to)` keys plus successor/predecessor indices

pub mod container;
pub mod edge_set;
pub mod node_set;

pub use container::{Container, Payload};
pub use edge_set::{edge_from, Edge, EdgeSet};
pub use node_set::NodeSet;
