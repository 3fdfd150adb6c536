//! `infl-graph`: loading and saving graphs in common interchange formats.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`format`]    | `GraphFormat`, extension lookup                         |
//! | [`labels`]    | `LabelMap`, label interning and dense relabeling       |
//! | [`adjlist`]   | `*.adjlist` reader/writer                               |
//! | [`edgelist`]  | `*.edgelist` reader/writer                              |
//! | [`gml`]       | `*.gml` reader/writer                                   |
//! | [`graphml`]   | `*.graphml` reader/writer                               |
//! | [`pajek`]     | `*.net` / `*.pajek` reader/writer                       |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                          |
//!
//! Every reader produces an undirected simple [`Graph`] with nodes relabeled
//! to `0..N-1`: in numeric label order when every label is an integer,
//! otherwise in order of first appearance.  Duplicate edges collapse.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//!
//! let graph = infl_graph::load(Path::new("karate.gml"))?;
//! infl_graph::save(&graph, Path::new("karate.edgelist"))?;
//! ```

pub mod adjlist;
pub mod edgelist;
pub mod error;
pub mod format;
pub mod gml;
pub mod graphml;
pub mod labels;
pub mod pajek;


use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use infl_core::Graph;

pub use error::{GraphError, GraphResult};
pub use format::GraphFormat;
pub use labels::LabelMap;

/// Load a graph, inferring the format from the file extension.
///
/// # Errors
///
/// [`GraphError::UnsupportedFormat`] for an unknown extension (checked
/// before the file is opened), [`GraphError::Io`] on file errors,
/// [`GraphError::Parse`] on malformed content.
pub fn load(path: &Path) -> GraphResult<Graph> {
    let format = GraphFormat::from_path(path)?;
    let file = File::open(path)?;
    let graph = read(BufReader::new(file), format)?;
    info!(
        path = %path.display(),
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Read a graph in `format` from any `Read` source.
pub fn read<R: Read>(reader: R, format: GraphFormat) -> GraphResult<Graph> {
    let labels = match format {
        GraphFormat::AdjList  => adjlist::read(reader)?,
        GraphFormat::EdgeList => edgelist::read(reader)?,
        GraphFormat::Gml      => gml::read(reader)?,
        GraphFormat::GraphMl  => graphml::read(reader)?,
        GraphFormat::Pajek    => pajek::read(reader)?,
    };
    Ok(labels.into_graph())
}

/// Save a graph, inferring the format from the file extension.
///
/// Node `n` is written with label `n`, so reloading yields the same ids.
pub fn save(graph: &Graph, path: &Path) -> GraphResult<()> {
    let format = GraphFormat::from_path(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write(graph, &mut out, format)?;
    out.flush()?;
    Ok(())
}

/// Write a graph in `format` to any `Write` sink.
pub fn write<W: Write>(graph: &Graph, writer: W, format: GraphFormat) -> GraphResult<()> {
    match format {
        GraphFormat::AdjList  => adjlist::write(graph, writer),
        GraphFormat::EdgeList => edgelist::write(graph, writer),
        GraphFormat::Gml      => gml::write(graph, writer),
        GraphFormat::GraphMl  => graphml::write(graph, writer),
        GraphFormat::Pajek    => pajek::write(graph, writer),
    }
}
