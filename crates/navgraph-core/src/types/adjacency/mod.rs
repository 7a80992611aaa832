//! Immutable adjacency-list graph over `usize` nodes.
//!
//! Connections are stored in compressed form: one contiguous buffer sorted
//! by source node, plus an offset table with `node_count + 1` entries. The
//! outgoing connections of node `n` are `connections[offsets[n]..offsets[n + 1]]`,
//! in the order they were added to the builder.

mod builder;


pub use builder::AdjacencyGraphBuilder;

use crate::error::GraphResult;
use crate::traits::{Graph, IndexedGraph};
use crate::types::DefaultConnection;

/// Adjacency-list graph whose nodes are their own indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph {
    offsets: Vec<usize>,
    connections: Vec<DefaultConnection>,
}

impl AdjacencyGraph {
    /// Start building a graph with `node_count` nodes.
    #[must_use]
    pub fn builder(node_count: usize) -> AdjacencyGraphBuilder {
        AdjacencyGraphBuilder::new(node_count)
    }

    /// Build a `width` x `height` 4-neighbour grid with uniform `cost`.
    ///
    /// Node `(x, y)` has index `y * width + x`. Every pair of horizontally
    /// or vertically adjacent cells is connected in both directions.
    ///
    /// # Errors
    /// * `GraphError::InvalidCost` - `cost` is negative or not finite
    pub fn grid(width: usize, height: usize, cost: f32) -> GraphResult<Self> {
        let mut builder = AdjacencyGraphBuilder::new(width * height);
        for y in 0..height {
            for x in 0..width {
                let node = y * width + x;
                if x + 1 < width {
                    builder.connect_both(node, node + 1, cost);
                }
                if y + 1 < height {
                    builder.connect_both(node, node + width, cost);
                }
            }
        }
        builder.build()
    }

    /// Total number of directed connections.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Iterate over every connection, grouped by source node.
    pub fn iter_connections(&self) -> impl Iterator<Item = &DefaultConnection> {
        self.connections.iter()
    }
}

impl Graph for AdjacencyGraph {
    type Node = usize;
    type Connection = DefaultConnection;

    #[inline]
    fn connections(&self, node: &usize) -> &[DefaultConnection] {
        let end = node.checked_add(1).and_then(|next| self.offsets.get(next));
        match (self.offsets.get(*node), end) {
            (Some(&start), Some(&end)) => &self.connections[start..end],
            _ => &[],
        }
    }
}

impl IndexedGraph for AdjacencyGraph {
    #[inline]
    fn index(&self, node: &usize) -> usize {
        *node
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }
}
