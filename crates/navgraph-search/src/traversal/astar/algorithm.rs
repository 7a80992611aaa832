//! Core indexed A* search.
//!
//! Contains [`IndexedAStarPathFinder`], which owns the node record store and
//! the open list and reuses both across searches on the same graph.

use std::cmp::Ordering;

use tracing::{debug, warn};

use navgraph_core::{Connection, GraphError, GraphPath, GraphResult, Heuristic, IndexedGraph};

use crate::config::SearchConfig;

use super::metrics::Metrics;
use super::open_list::OpenList;
use super::record_store::{NodeCategory, NodeRecordStore};
use super::types::{PathResult, SearchStatus};

/// A* path finder over an [`IndexedGraph`].
///
/// Search state lives in a record array sized to the graph's node count and
/// addressed by node index. The array is never cleared: each search bumps a
/// generation counter and records from older generations are reset when
/// first touched. After warm-up, repeated searches on the same graph
/// allocate nothing.
///
/// The finder borrows the graph immutably, so any number of finders may
/// search one graph from different threads. A single finder is used through
/// `&mut self`; share it with [`SharedPathFinder`](super::SharedPathFinder).
///
/// # Example
///
/// ```
/// use navgraph_core::{AdjacencyGraph, ZeroHeuristic};
/// use navgraph_search::traversal::IndexedAStarPathFinder;
///
/// let mut builder = AdjacencyGraph::builder(3);
/// builder.connect(0, 1, 1.0).connect(1, 2, 1.0).connect(0, 2, 5.0);
/// let graph = builder.build().unwrap();
///
/// let mut finder = IndexedAStarPathFinder::new(&graph);
/// let mut path = Vec::new();
/// assert!(finder.search_node_path(&0, &2, &ZeroHeuristic, &mut path));
/// assert_eq!(path, vec![0, 1, 2]);
/// ```
pub struct IndexedAStarPathFinder<'g, G: IndexedGraph> {
    pub(super) graph: &'g G,
    pub(super) records: NodeRecordStore<'g, G::Node, G::Connection>,
    open_list: OpenList,
    metrics: Option<Metrics>,
    config: SearchConfig,
}

impl<'g, G: IndexedGraph> IndexedAStarPathFinder<'g, G> {
    /// Create a finder with the default configuration.
    pub fn new(graph: &'g G) -> Self {
        Self::build(graph, SearchConfig::default())
    }

    /// Create a finder with a validated configuration.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - `config` fails validation
    pub fn with_config(graph: &'g G, config: SearchConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self::build(graph, config))
    }

    fn build(graph: &'g G, config: SearchConfig) -> Self {
        Self {
            graph,
            records: NodeRecordStore::new(graph.node_count()),
            open_list: OpenList::with_capacity(config.open_list_capacity),
            metrics: config.collect_metrics.then(Metrics::default),
            config,
        }
    }

    /// Search for a node path from `start` to `goal`.
    ///
    /// On success `out_path` holds every node from `start` to `goal`,
    /// inclusive. On failure it is left unmodified. An unknown start or goal
    /// is logged and reported as `false`.
    pub fn search_node_path<H, P>(
        &mut self,
        start: &G::Node,
        goal: &G::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<G::Node>,
    {
        self.try_search_node_path(start, goal, heuristic, out_path)
            .unwrap_or_else(|err| {
                warn!(error = %err, "A* node path search rejected");
                false
            })
    }

    /// Search for a connection path from `start` to `goal`.
    ///
    /// On success `out_path` holds the traversed connections in order (empty
    /// when `start == goal`). On failure it is left unmodified.
    pub fn search_connection_path<H, P>(
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
        self.try_search_connection_path(start, goal, heuristic, out_path)
            .unwrap_or_else(|err| {
                warn!(error = %err, "A* connection path search rejected");
                false
            })
    }

    /// [`search_node_path`](Self::search_node_path) that reports invalid
    /// endpoints as an error instead of `false`.
    ///
    /// # Errors
    /// * `GraphError::NodeIndexOutOfRange` - start or goal unknown to the graph
    pub fn try_search_node_path<H, P>(
        &mut self,
        start: &G::Node,
        goal: &G::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> GraphResult<bool>
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<G::Node>,
    {
        let status = self.try_search(start, goal, heuristic)?;
        if status.is_found() {
            let goal_index = self.graph.index(goal);
            self.generate_node_path(start, goal_index, out_path);
        }
        Ok(status.is_found())
    }

    /// [`search_connection_path`](Self::search_connection_path) that reports
    /// invalid endpoints as an error instead of `false`.
    ///
    /// # Errors
    /// * `GraphError::NodeIndexOutOfRange` - start or goal unknown to the graph
    pub fn try_search_connection_path<H, P>(
        &mut self,
        start: &G::Node,
        goal: &G::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> GraphResult<bool>
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<&'g G::Connection>,
    {
        let status = self.try_search(start, goal, heuristic)?;
        if status.is_found() {
            let start_index = self.graph.index(start);
            let goal_index = self.graph.index(goal);
            self.generate_connection_path(start_index, goal_index, out_path);
        }
        Ok(status.is_found())
    }

    /// Search for the optimal node path and its cost.
    ///
    /// Returns [`PathResult::no_path`] for unreachable goals and for
    /// endpoints unknown to the graph (the latter is logged).
    pub fn find_path<H>(&mut self, start: &G::Node, goal: &G::Node, heuristic: &H) -> PathResult<G::Node>
    where
        H: Heuristic<G::Node> + ?Sized,
    {
        let mut path = Vec::new();
        if !self.search_node_path(start, goal, heuristic, &mut path) {
            return PathResult::no_path();
        }
        let total_cost = self
            .records
            .get(self.graph.index(goal))
            .map_or(0.0, |record| record.cost_so_far());
        PathResult::found(path, total_cost)
    }

    /// Run the search loop without building a path.
    ///
    /// After a `Found` result the goal's record holds the optimal cost and
    /// the incoming-connection chain back to `start`.
    ///
    /// # Errors
    /// * `GraphError::NodeIndexOutOfRange` - start or goal unknown to the graph
    pub fn try_search<H>(&mut self, start: &G::Node, goal: &G::Node, heuristic: &H) -> GraphResult<SearchStatus>
    where
        H: Heuristic<G::Node> + ?Sized,
    {
        let start_index = self.checked_index(start)?;
        let goal_index = self.checked_index(goal)?;

        let generation = self.records.begin_search();
        self.open_list.clear();
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.reset();
        }

        let start_estimate = heuristic.estimate(start, goal);
        let start_record = self.records.get_or_create(start_index, start);
        start_record.cost_so_far = 0.0;
        start_record.incoming = None;
        start_record.estimated_total_cost = start_estimate;
        start_record.category = NodeCategory::Open;
        self.push_open(start_index, start_estimate);

        let status = self.run(goal_index, goal, heuristic);

        debug!(
            generation,
            start = start_index,
            goal = goal_index,
            ?status,
            open_list = self.open_list.len(),
            "A* search complete"
        );
        Ok(status)
    }

    fn run<H>(&mut self, goal_index: usize, goal: &G::Node, heuristic: &H) -> SearchStatus
    where
        H: Heuristic<G::Node> + ?Sized,
    {
        let graph = self.graph;
        let mut expansions = 0usize;

        while let Some(current_index) = self.open_list.extract_min() {
            // Every open entry has a record tagged with this generation.
            let Some(current) = self.records.get_mut(current_index) else {
                continue;
            };
            current.category = NodeCategory::Closed;

            if current_index == goal_index {
                return SearchStatus::Found;
            }

            if let Some(max) = self.config.max_expansions {
                if expansions >= max {
                    debug!(expansions, "A* expansion limit reached");
                    return SearchStatus::ExpansionLimit;
                }
            }
            expansions += 1;

            let current_cost = current.cost_so_far;
            let connections = graph.connections(&current.node);

            for connection in connections {
                if let Some(metrics) = self.metrics.as_mut() {
                    metrics.record_visit();
                }

                let to_node = connection.to_node();
                let to_index = graph.index(to_node);
                let candidate = current_cost + connection.cost();
                let record = self.records.get_or_create(to_index, to_node);

                // Reuse the residual of an existing key instead of re-running the heuristic.
                let residual = match record.category {
                    NodeCategory::Unvisited => heuristic.estimate(to_node, goal),
                    NodeCategory::Open | NodeCategory::Closed => {
                        if candidate.partial_cmp(&record.cost_so_far) != Some(Ordering::Less) {
                            continue;
                        }
                        record.estimated_total_cost - record.cost_so_far
                    }
                };

                let was_open = record.category == NodeCategory::Open;
                record.cost_so_far = candidate;
                record.incoming = Some(connection);
                record.estimated_total_cost = candidate + residual;
                record.category = NodeCategory::Open;
                let key = record.estimated_total_cost;

                if was_open {
                    self.open_list.remove(to_index);
                }
                self.push_open(to_index, key);
            }
        }

        SearchStatus::Exhausted
    }

    fn push_open(&mut self, index: usize, key: f32) {
        self.open_list.insert(index, key);
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.record_addition(self.open_list.len());
        }
    }

    fn checked_index(&self, node: &G::Node) -> GraphResult<usize> {
        let index = self.graph.index(node);
        let node_count = self.records.len();
        if index < node_count {
            Ok(index)
        } else {
            Err(GraphError::NodeIndexOutOfRange { index, node_count })
        }
    }

    /// Counters from the most recent search, if metrics are enabled.
    #[inline]
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Generation of the most recent search (0 before the first search).
    #[inline]
    pub fn search_generation(&self) -> u32 {
        self.records.generation()
    }

    /// Number of nodes the record store was sized for.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Graph being searched.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Record store of the most recent search, for diagnostics.
    pub fn records(&self) -> &NodeRecordStore<'g, G::Node, G::Connection> {
        &self.records
    }
}

/// Common interface of path finders.
pub trait PathFinder {
    /// Node type searched over.
    type Node;

    /// Element type of connection paths.
    type ConnectionRef;

    /// See [`IndexedAStarPathFinder::search_node_path`].
    fn search_node_path<H, P>(
        &mut self,
        start: &Self::Node,
        goal: &Self::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> bool
    where
        H: Heuristic<Self::Node> + ?Sized,
        P: GraphPath<Self::Node>;

    /// See [`IndexedAStarPathFinder::search_connection_path`].
    fn search_connection_path<H, P>(
        &mut self,
        start: &Self::Node,
        goal: &Self::Node,
        heuristic: &H,
        out_path: &mut P,
    ) -> bool
    where
        H: Heuristic<Self::Node> + ?Sized,
        P: GraphPath<Self::ConnectionRef>;
}

impl<'g, G: IndexedGraph> PathFinder for IndexedAStarPathFinder<'g, G> {
    type Node = G::Node;
    type ConnectionRef = &'g G::Connection;

    fn search_node_path<H, P>(&mut self, start: &G::Node, goal: &G::Node, heuristic: &H, out_path: &mut P) -> bool
    where
        H: Heuristic<G::Node> + ?Sized,
        P: GraphPath<G::Node>,
    {
        IndexedAStarPathFinder::search_node_path(self, start, goal, heuristic, out_path)
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
        IndexedAStarPathFinder::search_connection_path(self, start, goal, heuristic, out_path)
    }
}
