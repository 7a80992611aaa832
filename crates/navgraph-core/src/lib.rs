//! Graph Abstractions for Indexed Pathfinding
//!
//! This crate defines the collaborator side of the `navgraph` search engine:
//! the traits a caller implements to make a graph searchable, plus a few
//! ready-made types for graphs that do not need a custom representation.
//!
//! # Architecture
//!
//! - **traits**: `Connection`, `Graph`, `IndexedGraph`, `Heuristic`, `GraphPath`
//! - **types**: `DefaultConnection`, `DefaultGraphPath`, `AdjacencyGraph`
//! - **error**: `GraphError` and the `GraphResult` alias
//!
//! # Example
//!
//! ```
//! use navgraph_core::{AdjacencyGraph, Graph, IndexedGraph};
//!
//! let mut builder = AdjacencyGraph::builder(3);
//! builder.connect(0, 1, 1.0).connect(1, 2, 2.5);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.connections(&1).len(), 1);
//! ```

pub mod error;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use error::{GraphError, GraphResult};
pub use traits::{Connection, Graph, GraphPath, Heuristic, IndexedGraph, ZeroHeuristic};
pub use types::{AdjacencyGraph, AdjacencyGraphBuilder, DefaultConnection, DefaultGraphPath};
