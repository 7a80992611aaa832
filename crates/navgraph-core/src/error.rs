//! Error types for graph construction and search configuration.
//!
//! Search calls themselves report "could not reach goal" as a plain `false`;
//! this module covers the fallible edges around them: building graphs,
//! validating and loading configuration, and the `try_*` search variants
//! that need to tell bad input apart from an unreachable goal.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph and search operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Graph Structure Errors ==========
    /// Node index outside `[0, node_count)`.
    #[error("Node index {index} out of range (node count: {node_count})")]
    NodeIndexOutOfRange { index: usize, node_count: usize },

    /// Connection cost is negative, NaN or infinite.
    #[error("Invalid connection cost {cost} on {from} -> {to} (must be finite and >= 0)")]
    InvalidCost { from: usize, to: usize, cost: f32 },

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Serialization Errors ==========
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            GraphError::Io(err.into())
        } else if err.is_data() || err.is_syntax() || err.is_eof() {
            GraphError::Deserialization(err.to_string())
        } else {
            GraphError::Serialization(err.to_string())
        }
    }
}

impl GraphError {
    /// Whether this error reports a start/goal node the graph does not know.
    #[must_use]
    pub fn is_invalid_node(&self) -> bool {
        matches!(self, GraphError::NodeIndexOutOfRange { .. })
    }
}
