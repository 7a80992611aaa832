//! Capability traits consumed by the search engine.
//!
//! The engine never inspects what a node represents. It only needs:
//! - [`Connection`]: a directed edge with a non-negative cost
//! - [`Graph`]: outgoing connections for a node
//! - [`IndexedGraph`]: a dense, stable index per node plus the node count
//! - [`Heuristic`]: a cost-to-goal estimate
//! - [`GraphPath`]: an output container the engine fills on success

mod connection;
mod graph;
mod graph_path;
mod heuristic;

pub use connection::Connection;
pub use graph::{Graph, IndexedGraph};
pub use graph_path::GraphPath;
pub use heuristic::{Heuristic, ZeroHeuristic};
