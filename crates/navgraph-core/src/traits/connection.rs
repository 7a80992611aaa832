//! Directed weighted edge.

/// A directed connection between two nodes.
///
/// Connections are owned by the graph and are never mutated by a search.
pub trait Connection<N> {
    /// Non-negative cost of traversing this connection.
    fn cost(&self) -> f32;

    /// Node this connection leaves from.
    fn from_node(&self) -> &N;

    /// Node this connection leads to.
    fn to_node(&self) -> &N;
}
