//! Ready-made graph types.
//!
//! - [`DefaultConnection`]: plain `usize`-to-`usize` weighted edge
//! - [`DefaultGraphPath`]: `Vec`-backed [`GraphPath`](crate::traits::GraphPath)
//! - [`AdjacencyGraph`]: immutable adjacency-list [`IndexedGraph`](crate::traits::IndexedGraph)

mod adjacency;
mod connection;
mod graph_path;

pub use adjacency::{AdjacencyGraph, AdjacencyGraphBuilder};
pub use connection::DefaultConnection;
pub use graph_path::DefaultGraphPath;
