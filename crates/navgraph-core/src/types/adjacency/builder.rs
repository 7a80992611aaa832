//! Builder for [`AdjacencyGraph`].

use crate::error::{GraphError, GraphResult};
use crate::types::DefaultConnection;

use super::AdjacencyGraph;

/// Collects connections and validates them into an [`AdjacencyGraph`].
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraphBuilder {
    node_count: usize,
    connections: Vec<DefaultConnection>,
}

impl AdjacencyGraphBuilder {
    /// Create a builder for a graph with `node_count` nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            connections: Vec::new(),
        }
    }

    /// Add a directed connection `from -> to`.
    pub fn connect(&mut self, from: usize, to: usize, cost: f32) -> &mut Self {
        self.connections.push(DefaultConnection::new(from, to, cost));
        self
    }

    /// Add connections in both directions with the same cost.
    pub fn connect_both(&mut self, a: usize, b: usize, cost: f32) -> &mut Self {
        self.connect(a, b, cost);
        self.connect(b, a, cost)
    }

    /// Number of connections added so far.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Validate and freeze the graph.
    ///
    /// # Errors
    /// * `GraphError::NodeIndexOutOfRange` - an endpoint is `>= node_count`
    /// * `GraphError::InvalidCost` - a cost is negative, NaN or infinite
    pub fn build(&self) -> GraphResult<AdjacencyGraph> {
        for conn in &self.connections {
            for index in [conn.from, conn.to] {
                if index >= self.node_count {
                    return Err(GraphError::NodeIndexOutOfRange {
                        index,
                        node_count: self.node_count,
                    });
                }
            }
            if !conn.cost.is_finite() || conn.cost < 0.0 {
                return Err(GraphError::InvalidCost {
                    from: conn.from,
                    to: conn.to,
                    cost: conn.cost,
                });
            }
        }

        // Counting sort by source keeps insertion order within each node.
        let mut offsets = vec![0usize; self.node_count + 1];
        for conn in &self.connections {
            offsets[conn.from + 1] += 1;
        }
        for i in 1..offsets.len() {
            offsets[i] += offsets[i - 1];
        }

        let mut cursor = offsets.clone();
        let mut slots: Vec<Option<DefaultConnection>> = vec![None; self.connections.len()];
        for conn in &self.connections {
            slots[cursor[conn.from]] = Some(*conn);
            cursor[conn.from] += 1;
        }

        Ok(AdjacencyGraph {
            offsets,
            connections: slots.into_iter().flatten().collect(),
        })
    }
}
