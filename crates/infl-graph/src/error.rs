//! Graph I/O error type.

use thiserror::Error;

use crate::GraphFormat;

/// Errors produced by `infl-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No reader/writer exists for this file extension.
    #[error("graph format {0:?} not supported (expected one of: adjlist, edgelist, gml, graphml, net, pajek)")]
    UnsupportedFormat(String),

    #[error("{format} parse error on line {line}: {message}")]
    Parse {
        format:  GraphFormat,
        line:    usize,
        message: String,
    },

    #[error("graph has more nodes than fit in a 32-bit node id")]
    TooManyNodes,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(format: GraphFormat, line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse { format, line, message: message.into() }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
