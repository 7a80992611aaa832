//! Indexed A* search with generation-tagged node records.
//!
//! Optimal pathfinding over any [`IndexedGraph`] guided by a caller-supplied
//! [`Heuristic`].
//!
//! # Algorithm
//!
//! A* combines uniform-cost search with a heuristic:
//! - f(n) = g(n) + h(n)
//! - g(n) = cost from start to n (`cost_so_far`)
//! - h(n) = heuristic estimate from n to goal
//!
//! # State Reuse
//!
//! Per-node state lives in a dense array indexed by node index instead of
//! hash-based open/closed sets. The array is kept between searches; a search
//! generation counter marks which records belong to the current run, and
//! stale ones are reset on first touch.
//!
//! # Open List
//!
//! Binary min-heap with a position table, giving O(log n) insert,
//! extract-min and arbitrary removal. A cheaper route to an open node is
//! handled as remove-then-reinsert.
//!
//! # Tie-Breaking
//!
//! A route replaces the known one only if strictly cheaper, so among
//! equal-cost routes the first one discovered wins.
//!
//! # Heuristic Purity
//!
//! When a discovered node is relaxed again, its heuristic value is recovered
//! from the stored key rather than recomputed. Heuristics must therefore be
//! pure functions of `(node, goal)`.

mod algorithm;
mod metrics;
mod open_list;
mod path;
mod record_store;
mod shared;
mod types;


// Re-export public API
pub use algorithm::{IndexedAStarPathFinder, PathFinder};
pub use metrics::Metrics;
pub use open_list::OpenList;
pub use record_store::{NodeCategory, NodeRecord, NodeRecordStore};
pub use shared::SharedPathFinder;
pub use types::{PathResult, SearchStatus};

use navgraph_core::{GraphResult, Heuristic, IndexedGraph};

/// Convenience function: find an optimal node path with a fresh finder.
///
/// # Errors
/// * `GraphError::NodeIndexOutOfRange` - start or goal unknown to the graph
pub fn astar_path<G, H>(graph: &G, start: &G::Node, goal: &G::Node, heuristic: &H) -> GraphResult<Option<Vec<G::Node>>>
where
    G: IndexedGraph,
    H: Heuristic<G::Node> + ?Sized,
{
    let mut finder = IndexedAStarPathFinder::new(graph);
    let mut path = Vec::new();
    if finder.try_search_node_path(start, goal, heuristic, &mut path)? {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// Convenience function: optimal path cost with a fresh finder.
///
/// # Errors
/// * `GraphError::NodeIndexOutOfRange` - start or goal unknown to the graph
pub fn astar_cost<G, H>(graph: &G, start: &G::Node, goal: &G::Node, heuristic: &H) -> GraphResult<Option<f32>>
where
    G: IndexedGraph,
    H: Heuristic<G::Node> + ?Sized,
{
    let mut finder = IndexedAStarPathFinder::new(graph);
    let status = finder.try_search(start, goal, heuristic)?;
    if !status.is_found() {
        return Ok(None);
    }
    Ok(finder
        .records()
        .get(graph.index(goal))
        .map(NodeRecord::cost_so_far))
}
