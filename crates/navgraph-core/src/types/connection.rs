//! Default connection type.

use serde::{Deserialize, Serialize};

use crate::traits::Connection;

/// Weighted directed edge between two `usize` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultConnection {
    /// Source node.
    pub from: usize,
    /// Target node.
    pub to: usize,
    /// Traversal cost.
    pub cost: f32,
}

impl DefaultConnection {
    /// Create a new connection.
    #[must_use]
    pub fn new(from: usize, to: usize, cost: f32) -> Self {
        Self { from, to, cost }
    }
}

impl Connection<usize> for DefaultConnection {
    #[inline]
    fn cost(&self) -> f32 {
        self.cost
    }

    #[inline]
    fn from_node(&self) -> &usize {
        &self.from
    }

    #[inline]
    fn to_node(&self) -> &usize {
        &self.to
    }
}
