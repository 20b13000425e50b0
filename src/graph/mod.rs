//! The keyed directed graph that traversals walk.

pub mod digraph;

pub use digraph::{Graph, NodeKey};
