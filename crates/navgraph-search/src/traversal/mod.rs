//! Graph traversal algorithms.
//!
//! # Algorithms
//!
//! - **A***: indexed A* with reusable, generation-tagged node records
//!
//! # Examples
//!
//! ## Reusing One Finder
//!
//! ```rust
//! use navgraph_core::{AdjacencyGraph, ZeroHeuristic};
//! use navgraph_search::traversal::IndexedAStarPathFinder;
//!
//! let graph = AdjacencyGraph::grid(8, 8, 1.0).unwrap();
//! let mut finder = IndexedAStarPathFinder::new(&graph);
//!
//! for goal in [7, 56, 63] {
//!     let result = finder.find_path(&0, &goal, &ZeroHeuristic);
//!     assert!(result.path_found);
//! }
//! assert_eq!(finder.search_generation(), 3);
//! ```
//!
//! ## Connection Paths
//!
//! ```rust
//! use navgraph_core::{AdjacencyGraph, Connection, ZeroHeuristic};
//! use navgraph_search::traversal::IndexedAStarPathFinder;
//!
//! let mut builder = AdjacencyGraph::builder(3);
//! builder.connect(0, 1, 2.0).connect(1, 2, 3.0);
//! let graph = builder.build().unwrap();
//!
//! let mut finder = IndexedAStarPathFinder::new(&graph);
//! let mut connections = Vec::new();
//! assert!(finder.search_connection_path(&0, &2, &ZeroHeuristic, &mut connections));
//! let cost: f32 = connections.iter().map(|c| c.cost()).sum();
//! assert_eq!(cost, 5.0);
//! ```

pub mod astar;

// Re-export A* public API
pub use astar::{
    astar_cost, astar_path, IndexedAStarPathFinder, Metrics, NodeCategory, NodeRecord, NodeRecordStore,
    OpenList, PathFinder, PathResult, SearchStatus, SharedPathFinder,
};
