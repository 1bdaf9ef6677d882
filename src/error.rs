use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the graph algorithms in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A minimum cut was requested for a graph with fewer than two vertices.
    #[error("graph must have at least 2 vertices, got {0}")]
    InvalidGraphSize(usize),

    /// Contraction was requested but no edge remains among the active
    /// vertices, even though more than two of them are left. The remaining
    /// graph is disconnected.
    #[error("no edge left among {remaining} active vertices (disconnected remainder)")]
    EmptyEdgeSet { remaining: usize },

    /// Every contraction trial ran into a disconnected remainder, so no
    /// finite cut weight was observed within the trial budget.
    #[error("no cut found in {trials} trials; input is not sufficiently connected")]
    NoCutFound { trials: usize },

    /// Malformed input handed to a driver or constructor.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
