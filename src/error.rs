use std::io;

use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge-list source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The edge list has no node count.
    #[error("missing node count")]
    MissingNodeCount,

    /// The first token of the edge list is not a node count.
    #[error("invalid node count: {token:?}")]
    InvalidNodeCount {
        /// The offending token.
        token: String,
    },

    /// A node count whose adjacency matrix cannot be allocated.
    #[error("too many nodes: {0}")]
    TooManyNodes(usize),

    /// An edge density outside `[0, 1]`.
    #[error("edge density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    /// A weight range that is empty, non-positive or not finite.
    #[error("invalid edge weight range [{lo}, {hi}]")]
    InvalidWeightRange {
        /// Smallest weight to generate.
        lo: f64,
        /// Largest weight to generate.
        hi: f64,
    },
}

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, Error>;
