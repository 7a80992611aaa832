//! Mutex-guarded path finder.
//!
//! A single [`IndexedAStarPathFinder`] keeps one record store per graph. When
//! several threads must share that store instead of each owning a finder,
//! every search has to hold exclusive access for its whole duration.
//! [`SharedPathFinder`] does exactly that with a `parking_lot::Mutex`.

use parking_lot::Mutex;

use navgraph_core::{GraphPath, Heuristic, IndexedGraph};

use super::algorithm::{IndexedAStarPathFinder, PathFinder};
use super::metrics::Metrics;
use super::types::PathResult;

/// Path finder that can be searched through a shared reference.
pub struct SharedPathFinder<'g, G: IndexedGraph> {
    inner: Mutex<IndexedAStarPathFinder<'g, G>>,
}

impl<'g, G: IndexedGraph> SharedPathFinder<'g, G> {
    /// Wrap an existing finder.
    pub fn new(finder: IndexedAStarPathFinder<'g, G>) -> Self {
        Self {
            inner: Mutex::new(finder),
        }
    }

    /// Locked [`IndexedAStarPathFinder::search_node_path`].
    pub fn search_node_path<H, P>(&self, start: &G::Node, goal: &G::Node, heuristic: &H, out_path: &mut P) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<G::Node>,
    {
        self.inner.lock().search_node_path(start, goal, heuristic, out_path)
    }

    /// Locked [`IndexedAStarPathFinder::search_connection_path`].
    pub fn search_connection_path<H, P>(
        &self,
        start: &G::Node,
        goal: &G::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<&'g G::Connection>,
    {
        self.inner
            .lock()
            .search_connection_path(start, goal, heuristic, out_path)
    }

    /// Locked [`IndexedAStarPathFinder::find_path`].
    pub fn find_path<H>(&self, start: &G::Node, goal: &G::Node, heuristic: &H) -> PathResult<G::Node>
    where
        H: Heuristic<G::Node> + ?Sized,
    {
        self.inner.lock().find_path(start, goal, heuristic)
    }

    /// Metrics of the most recent search by any thread.
    pub fn metrics(&self) -> Option<Metrics> {
        self.inner.lock().metrics().copied()
    }

    /// Run `f` with exclusive access to the finder.
    pub fn with_finder<R>(&self, f: impl FnOnce(&mut IndexedAStarPathFinder<'g, G>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwrap the finder.
    pub fn into_inner(self) -> IndexedAStarPathFinder<'g, G> {
        self.inner.into_inner()
    }
}

impl<'g, G: IndexedGraph> From<IndexedAStarPathFinder<'g, G>> for SharedPathFinder<'g, G> {
    fn from(finder: IndexedAStarPathFinder<'g, G>) -> Self {
        Self::new(finder)
    }
}

impl<'g, G: IndexedGraph> PathFinder for SharedPathFinder<'g, G> {
    type Node = G::Node;
    type ConnectionRef = &'g G::Connection;

    fn search_node_path<H, P>(&mut self, start: &G::Node, goal: &G::Node, heuristic: &H, out_path: &mut P) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<G::Node>,
    {
        self.inner
            .get_mut()
            .search_node_path(start, goal, heuristic, out_path)
    }

    fn search_connection_path<H, P>(
        &mut self,
        start: &G::Node,
        goal: &G::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<&'g G::Connection>,
    {
        self.inner
            .get_mut()
            .search_connection_path(start, goal, heuristic, out_path)
    }
}
