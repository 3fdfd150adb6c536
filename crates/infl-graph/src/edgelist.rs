//! Edge-list format.
//!
//! ```text
//! # comment
//! 0 1 {}
//! 0 2 {'weight': 3}
//! ```
//!
//! One edge per line: the first two whitespace-separated tokens are the
//! endpoints, anything after them (attribute dicts, weights) is ignored.
//! Isolated nodes cannot be expressed in this format.

use std::io::{BufRead, BufReader, Read, Write};

use infl_core::Graph;

use crate::adjlist::strip_comment;
use crate::{GraphError, GraphFormat, GraphResult, LabelMap};

pub fn read<R: Read>(reader: R) -> GraphResult<LabelMap> {
    let mut labels = LabelMap::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let mut tokens = strip_comment(&line).split_whitespace();
        match (tokens.next(), tokens.next()) {
            (None, _) => continue,
            (Some(u), Some(v)) => labels.add_edge(u, v)?,
            (Some(u), None) => {
                return Err(GraphError::parse(
                    GraphFormat::EdgeList,
                    i + 1,
                    format!("edge needs two endpoints, found only {u:?}"),
                ));
            }
        }
    }
    Ok(labels)
}

pub fn write<W: Write>(graph: &Graph, mut w: W) -> GraphResult<()> {
    for (a, b) in graph.edges() {
        writeln!(w, "{a} {b} {{}}")?;
    }
    Ok(())
}
