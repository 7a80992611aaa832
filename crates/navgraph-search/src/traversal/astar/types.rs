//! A* result types.

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The goal was popped from the open list.
    Found,
    /// The open list emptied before the goal was reached.
    Exhausted,
    /// `max_expansions` was reached before the goal.
    ExpansionLimit,
}

impl SearchStatus {
    /// Whether the goal was reached.
    #[inline]
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, SearchStatus::Found)
    }
}

/// Node path plus its cost, as returned by
/// [`IndexedAStarPathFinder::find_path`](super::IndexedAStarPathFinder::find_path).
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<N> {
    /// Nodes from start to goal, inclusive (empty if no path found).
    pub path: Vec<N>,

    /// Cost of the path (infinite if no path found).
    pub total_cost: f32,

    /// Whether a path was found.
    pub path_found: bool,
}

impl<N> PathResult<N> {
    /// Create empty result for no path found.
    #[must_use]
    pub fn no_path() -> Self {
        Self {
            path: Vec::new(),
            total_cost: f32::INFINITY,
            path_found: false,
        }
    }

    /// Create result with found path.
    #[must_use]
    pub fn found(path: Vec<N>, total_cost: f32) -> Self {
        Self {
            path,
            total_cost,
            path_found: true,
        }
    }

    /// Get path length (number of nodes).
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Get number of connections in path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
