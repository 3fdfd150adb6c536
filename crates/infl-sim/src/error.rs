use std::path::PathBuf;

use infl_core::{InflError, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] InflError),

    #[error("unknown model type {tag:?}; known types: {known}")]
    UnknownModel { tag: String, known: String },

    #[error("invalid model config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("cannot read model config {path}: {source}")]
    ModelConfigIo {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// The campaign config and the simulator disagree on a model parameter.
    #[error("campaign {field} {campaign} does not match the simulator's {simulator}")]
    ConfigMismatch {
        field:     &'static str,
        campaign:  String,
        simulator: String,
    },

    #[error("simulation of node {node} failed: {reason}")]
    NodeFailed { node: NodeId, reason: String },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
