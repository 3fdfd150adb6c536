//! Pajek `.net` format.
//!
//! ```text
//! *Vertices 3
//! 1 "alice"
//! 2 "bob"
//! 3 "carol"
//! *Edges
//! 1 2
//! 2 3
//! ```
//!
//! Vertices are numbered from 1.  A vertex without a line in the
//! `*Vertices` block is named by its number.  A file declares its vertex
//! count once, and the count must fit a 32-bit node id.  `*Edges` and
//! `*Arcs` take one pair per line (extra columns such as weights are ignored);
//! `*Edgeslist` and `*Arcslist` take a source followed by its targets.
//! Arcs are read as undirected edges.

use std::io::{BufRead, BufReader, Read, Write};

use rustc_hash::FxHashMap;

use infl_core::Graph;

use crate::{GraphError, GraphFormat, GraphResult, LabelMap};

fn err(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::parse(GraphFormat::Pajek, line, message)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Pairs,
    Lists,
}

pub fn read<R: Read>(reader: R) -> GraphResult<LabelMap> {
    let mut section = Section::Preamble;
    let mut count: Option<usize> = None;
    // (label, line) by 1-based index, for the vertices the file names.
    let mut names: FxHashMap<usize, (String, usize)> = FxHashMap::default();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('*') {
            let mut parts = header.split_whitespace();
            let keyword = parts.next().unwrap_or("").to_ascii_lowercase();
            section = match keyword.as_str() {
                "vertices" => {
                    if count.is_some() {
                        return Err(err(line_no, "second `*Vertices` section"));
                    }
                    let n: usize = parts
                        .next()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| err(line_no, "`*Vertices` needs a vertex count"))?;
                    if u32::try_from(n).is_err() {
                        return Err(GraphError::TooManyNodes);
                    }
                    count = Some(n);
                    Section::Vertices
                }
                "edges" | "arcs" => Section::Pairs,
                "edgeslist" | "arcslist" => Section::Lists,
                "network" => Section::Preamble,
                other => return Err(err(line_no, format!("unsupported section `*{other}`"))),
            };
            continue;
        }

        let n = count.unwrap_or(0);
        match section {
            Section::Preamble => {
                return Err(err(line_no, "data before `*Vertices`"));
            }
            Section::Vertices => {
                let (index, rest) = split_index(trimmed, n, line_no)?;
                let label = parse_label(rest).ok_or_else(|| err(line_no, "unterminated quoted label"))?;
                let label = label.unwrap_or_else(|| index.to_string());
                names.insert(index, (label, line_no));
            }
            Section::Pairs => {
                let mut cols = trimmed.split_whitespace();
                let a = vertex(cols.next(), n, line_no)?;
                let b = vertex(cols.next(), n, line_no)?;
                edges.push((a, b));
            }
            Section::Lists => {
                let mut cols = trimmed.split_whitespace();
                let a = vertex(cols.next(), n, line_no)?;
                for col in cols {
                    let b = vertex(Some(col), n, line_no)?;
                    edges.push((a, b));
                }
            }
        }
    }

    let mut labels = LabelMap::new();
    for i in 0..count.unwrap_or(0) {
        let (name, line_no) = names
            .remove(&(i + 1))
            .unwrap_or_else(|| ((i + 1).to_string(), 0));
        if labels.intern(&name)? as usize != i {
            return Err(err(line_no, format!("duplicate vertex label {name:?}")));
        }
    }
    for (a, b) in edges {
        labels.add_edge_ids((a - 1) as u32, (b - 1) as u32);
    }
    Ok(labels)
}

pub fn write<W: Write>(graph: &Graph, mut w: W) -> GraphResult<()> {
    writeln!(w, "*Vertices {}", graph.node_count())?;
    for node in graph.nodes() {
        writeln!(w, "{} \"{node}\"", node.index() + 1)?;
    }
    writeln!(w, "*Edges")?;
    for (a, b) in graph.edges() {
        writeln!(w, "{} {}", a.index() + 1, b.index() + 1)?;
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse a 1-based vertex reference.
fn vertex(col: Option<&str>, count: usize, line: usize) -> GraphResult<usize> {
    let col = col.ok_or_else(|| err(line, "expected two vertex numbers"))?;
    let v: usize = col
        .parse()
        .map_err(|_| err(line, format!("invalid vertex number {col:?}")))?;
    if v == 0 || v > count {
        return Err(err(line, format!("vertex {v} outside 1..={count}")));
    }
    Ok(v)
}

/// Split a vertex line into its index and the remainder.
fn split_index(line: &str, count: usize, line_no: usize) -> GraphResult<(usize, &str)> {
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let index = vertex(Some(&line[..end]), count, line_no)?;
    Ok((index, line[end..].trim_start()))
}

/// Read the label at the start of `rest`: quoted, bare, or absent.
/// Returns `None` for an unterminated quote.
fn parse_label(rest: &str) -> Option<Option<String>> {
    if let Some(quoted) = rest.strip_prefix('"') {
        let close = quoted.find('"')?;
        return Some(Some(quoted[..close].to_owned()));
    }
    Some(rest.split_whitespace().next().map(str::to_owned))
}
