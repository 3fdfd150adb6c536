//! Adjacency-list format.
//!
//! ```text
//! # comment
//! 0 1 2 3
//! 1 2
//! 4
//! ```
//!
//! The first token of each line is a node, the rest are its neighbors.
//! A node with no neighbors is still a node.  Text after `#` is ignored.
//! The writer lists each undirected edge once, on the line of its lower
//! endpoint.

use std::io::{BufRead, BufReader, Read, Write};

use infl_core::Graph;

use crate::{GraphResult, LabelMap};

pub fn read<R: Read>(reader: R) -> GraphResult<LabelMap> {
    let mut labels = LabelMap::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let content = strip_comment(&line);
        let mut tokens = content.split_whitespace();
        let Some(node) = tokens.next() else { continue };
        labels.intern(node)?;
        for nbr in tokens {
            labels.add_edge(node, nbr)?;
        }
    }
    Ok(labels)
}

pub fn write<W: Write>(graph: &Graph, mut w: W) -> GraphResult<()> {
    writeln!(w, "# influence-sim adjacency list")?;
    writeln!(w, "# nodes: {} edges: {}", graph.node_count(), graph.edge_count())?;
    for node in graph.nodes() {
        write!(w, "{node}")?;
        for &nbr in graph.neighbors(node).iter().filter(|&&n| n >= node) {
            write!(w, " {nbr}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Drop everything from the first `#`.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None    => line,
    }
}
