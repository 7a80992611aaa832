//! Indexed A* Search Engine
//!
//! This crate finds minimum-cost routes on directed weighted graphs whose
//! nodes carry dense integer indices. It is built for graphs that are
//! searched over and over (many agents on one navigation graph, every
//! frame): per-node search state is kept in an index-addressed array that
//! survives between searches and is invalidated lazily by a generation tag.
//!
//! # Architecture
//!
//! - **config**: `SearchConfig` (metrics, expansion cap, open-list capacity)
//! - **traversal**: indexed A* engine, open list, record store, metrics
//!
//! Graph, connection and heuristic traits come from `navgraph-core` and are
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use navgraph_search::{AdjacencyGraph, IndexedAStarPathFinder, SearchConfig, ZeroHeuristic};
//!
//! let mut builder = AdjacencyGraph::builder(4);
//! builder
//!     .connect(0, 1, 1.0)
//!     .connect(0, 2, 4.0)
//!     .connect(1, 2, 1.0)
//!     .connect(1, 3, 5.0)
//!     .connect(2, 3, 1.0);
//! let graph = builder.build().unwrap();
//!
//! let mut finder = IndexedAStarPathFinder::with_config(&graph, SearchConfig::with_metrics()).unwrap();
//! let result = finder.find_path(&0, &3, &ZeroHeuristic);
//! assert_eq!(result.path, vec![0, 1, 2, 3]);
//! assert_eq!(result.total_cost, 3.0);
//! assert!(finder.metrics().unwrap().visited_nodes() > 0);
//! ```

pub mod config;
pub mod traversal;

// Re-exports for convenience
pub use config::SearchConfig;
pub use traversal::{
    astar_cost, astar_path, IndexedAStarPathFinder, Metrics, PathFinder, PathResult, SearchStatus,
    SharedPathFinder,
};

pub use navgraph_core::{
    AdjacencyGraph, AdjacencyGraphBuilder, Connection, DefaultConnection, DefaultGraphPath, Graph,
    GraphError, GraphPath, GraphResult, Heuristic, IndexedGraph, ZeroHeuristic,
};
