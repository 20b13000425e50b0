//! Error types shared by the collections, the graph and the traversals.
//!
//! Lookups and configuration report [`GraphError`]. A traversal that is cut
//! short by a failing callback reports [`Interrupted`], which hands the
//! partially-built [`Trail`] back to the caller together with the cause.

use core::fmt;

use thiserror::Error;

use crate::traversal::Trail;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Errors raised by containers, graphs and traversal configuration.
///
/// Keys are rendered with their `Debug` representation so the error stays
/// independent of the key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node, edge or container key is not present.
    #[error("key not found: {key}")]
    NotFound {
        /// `Debug` rendering of the missing key.
        key: String,
    },

    /// A sequence that should describe an edge does not hold exactly two items.
    #[error("an edge needs exactly 2 endpoints, got {len}")]
    Shape {
        /// Number of items found.
        len: usize,
    },

    /// An edge refers to an endpoint that was never declared as a node.
    #[error("edge {edge} references undeclared node {endpoint}")]
    Inconsistent {
        /// `Debug` rendering of the offending edge.
        edge: String,
        /// `Debug` rendering of the first missing endpoint.
        endpoint: String,
    },

    /// A named edge selector is not one of `inward`, `outward`, `incident` or `both`.
    #[error("unknown edge selector {name:?}, expected one of inward, outward, incident, both")]
    UnknownSelector {
        /// The rejected name.
        name: String,
    },
}

impl GraphError {
    pub(crate) fn not_found<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        GraphError::NotFound {
            key: format!("{key:?}"),
        }
    }

    /// Returns `true` for lookups of absent keys.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }
}

/// A traversal aborted by an error from a callback or the edge selector.
///
/// The trail holds everything recorded up to the failure.
pub struct Interrupted<K> {
    /// The partially-populated trail.
    pub trail: Trail<K>,
    /// The error that stopped the walk.
    pub source: anyhow::Error,
}

impl<K> Interrupted<K> {
    /// Splits the interruption into its trail and cause.
    pub fn into_parts(self) -> (Trail<K>, anyhow::Error) {
        (self.trail, self.source)
    }
}

impl<K: fmt::Debug> fmt::Debug for Interrupted<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interrupted")
            .field("visited", &self.trail.nodes())
            .field("source", &self.source)
            .finish()
    }
}

impl<K> fmt::Display for Interrupted<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "traversal interrupted after visiting {} node(s): {}",
            self.trail.nodes().len(),
            self.source
        )
    }
}

impl<K: fmt::Debug> std::error::Error for Interrupted<K> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + Send + Sync + 'static) = self.source.as_ref();
        Some(source)
    }
}
