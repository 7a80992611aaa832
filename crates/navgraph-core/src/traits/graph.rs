//! Graph abstractions.

use super::connection::Connection;

/// A directed graph exposing the outgoing connections of each node.
pub trait Graph {
    /// Node identity. Cloned into search records and node paths.
    type Node: Clone + PartialEq;

    /// Edge type returned by [`Graph::connections`].
    type Connection: Connection<Self::Node>;

    /// Outgoing connections of `node`.
    ///
    /// Order only affects tie-breaking between equal-cost routes, never
    /// correctness.
    fn connections(&self, node: &Self::Node) -> &[Self::Connection];
}

/// A graph whose nodes map to dense indices in `[0, node_count)`.
///
/// Indices must be unique and stable for the lifetime of the graph. The
/// search engine sizes its record store from [`IndexedGraph::node_count`]
/// once and addresses it directly by index.
pub trait IndexedGraph: Graph {
    /// Dense index of `node`.
    fn index(&self, node: &Self::Node) -> usize;

    /// Total number of nodes.
    fn node_count(&self) -> usize;
}
