//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `InflError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `infl-core`.
#[derive(Debug, Error)]
pub enum InflError {
    /// An out-of-range configuration value, rejected before any work starts.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("node {node} out of range for graph with {count} nodes")]
    NodeOutOfRange { node: NodeId, count: usize },
}

/// Shorthand result type for `infl-core`.
pub type InflResult<T> = Result<T, InflError>;
