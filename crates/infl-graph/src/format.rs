//! Supported graph file formats.

use std::fmt;
use std::path::Path;

use crate::{GraphError, GraphResult};

/// A graph interchange format, selected by file extension.
///
/// | Extension         | Format                                           |
/// |-------------------|--------------------------------------------------|
/// | `adjlist`         | One line per node: `node nbr nbr …`              |
/// | `edgelist`        | One line per edge: `u v [data…]`                 |
/// | `gml`             | Graph Modelling Language                         |
/// | `graphml`         | GraphML XML                                      |
/// | `net`, `pajek`    | Pajek `*Vertices` / `*Edges` sections            |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GraphFormat {
    AdjList,
    EdgeList,
    Gml,
    GraphMl,
    Pajek,
}

impl GraphFormat {
    pub const ALL: [GraphFormat; 5] = [
        GraphFormat::AdjList,
        GraphFormat::EdgeList,
        GraphFormat::Gml,
        GraphFormat::GraphMl,
        GraphFormat::Pajek,
    ];

    /// Look up a format by extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> GraphResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "adjlist"        => Ok(GraphFormat::AdjList),
            "edgelist"       => Ok(GraphFormat::EdgeList),
            "gml"            => Ok(GraphFormat::Gml),
            "graphml"        => Ok(GraphFormat::GraphMl),
            "net" | "pajek"  => Ok(GraphFormat::Pajek),
            _                => Err(GraphError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Infer the format from the last extension of `path`.
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::AdjList  => "adjlist",
            GraphFormat::EdgeList => "edgelist",
            GraphFormat::Gml      => "gml",
            GraphFormat::GraphMl  => "graphml",
            GraphFormat::Pajek    => "net",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphFormat::AdjList  => "adjacency list",
            GraphFormat::EdgeList => "edge list",
            GraphFormat::Gml      => "GML",
            GraphFormat::GraphMl  => "GraphML",
            GraphFormat::Pajek    => "Pajek",
        };
        f.write_str(name)
    }
}
