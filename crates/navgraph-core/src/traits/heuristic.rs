//! Cost-to-goal estimates.

/// Estimates the remaining cost from a node to the goal.
///
/// For optimal results the estimate must be admissible: never larger than
/// the true remaining cost, and never negative.
///
/// The estimate must also be a pure function of `(node, goal)`. When a
/// cheaper route to an already discovered node is found, the engine reuses
/// the residual stored in that node's key (`estimated_total_cost -
/// cost_so_far`) instead of calling the heuristic again. A heuristic with
/// side effects or per-call state will therefore be observed with stale
/// values.
pub trait Heuristic<N> {
    /// Estimated cost from `node` to `goal`.
    fn estimate(&self, node: &N, goal: &N) -> f32;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> f32,
{
    #[inline]
    fn estimate(&self, node: &N, goal: &N) -> f32 {
        self(node, goal)
    }
}

/// Always estimates zero, which degrades A* to Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _node: &N, _goal: &N) -> f32 {
        0.0
    }
}
