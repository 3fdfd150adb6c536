//! GraphML format.
//!
//! Only the structure is read: `<node id="…">` declares a node,
//! `<edge source="…" target="…">` an edge.  `<key>`/`<data>` attributes,
//! comments, processing instructions, and `edgedefault` are ignored; every
//! graph is read as undirected.  Nodes are ordered by declaration, with any
//! node first seen as an edge endpoint appended where it appears.

use std::io::{Read, Write};

use infl_core::Graph;

use crate::{GraphError, GraphFormat, GraphResult, LabelMap};

const HEADER: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#;

fn err(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::parse(GraphFormat::GraphMl, line, message)
}

pub fn read<R: Read>(mut reader: R) -> GraphResult<LabelMap> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut labels = LabelMap::new();
    let mut saw_graph = false;

    for tag in Tags::new(&text) {
        let tag = tag?;
        match tag.name {
            "graph" => saw_graph = true,
            "node" => {
                let id = tag.attr("id").ok_or_else(|| err(tag.line, "<node> without `id`"))?;
                labels.intern(&id)?;
            }
            "edge" => {
                let source = tag.attr("source").ok_or_else(|| err(tag.line, "<edge> without `source`"))?;
                let target = tag.attr("target").ok_or_else(|| err(tag.line, "<edge> without `target`"))?;
                labels.add_edge(&source, &target)?;
            }
            _ => {}
        }
    }

    if !saw_graph {
        return Err(err(1, "no <graph> element"));
    }
    Ok(labels)
}

pub fn write<W: Write>(graph: &Graph, mut w: W) -> GraphResult<()> {
    writeln!(w, "{HEADER}")?;
    writeln!(w, "  <graph edgedefault=\"undirected\">")?;
    for node in graph.nodes() {
        writeln!(w, "    <node id=\"{node}\" />")?;
    }
    for (a, b) in graph.edges() {
        writeln!(w, "    <edge source=\"{a}\" target=\"{b}\" />")?;
    }
    writeln!(w, "  </graph>")?;
    writeln!(w, "</graphml>")?;
    Ok(())
}

// ── Tag scanner ───────────────────────────────────────────────────────────────

/// An opening (or self-closing) element tag.
struct Tag<'a> {
    name:  &'a str,
    attrs: Vec<(&'a str, &'a str)>,
    line:  usize,
}

impl Tag<'_> {
    /// Attribute value with XML entities decoded.
    fn attr(&self, key: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| unescape(v))
    }
}

/// Iterator over the opening tags of an XML document, skipping closing
/// tags, comments, declarations, and text content.
struct Tags<'a> {
    text: &'a str,
    pos:  usize,
    line: usize,
}

impl<'a> Tags<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0, line: 1 }
    }

    /// Move `pos` to just past `needle`, counting newlines.
    fn skip_past(&mut self, needle: &str) -> GraphResult<()> {
        let rest = &self.text[self.pos..];
        let Some(i) = rest.find(needle) else {
            return Err(err(self.line, format!("missing `{needle}`")));
        };
        self.line += rest[..i + needle.len()].matches('\n').count();
        self.pos += i + needle.len();
        Ok(())
    }

    fn parse_tag(&mut self) -> GraphResult<Option<Tag<'a>>> {
        let text: &'a str = self.text;
        let start_line = self.line;
        let body_start = self.pos + 1;

        // Find the closing '>' outside quoted attribute values.
        let mut quote: Option<u8> = None;
        let mut end = None;
        for (i, &b) in text.as_bytes()[body_start..].iter().enumerate() {
            match (quote, b) {
                (Some(q), b) if b == q => quote = None,
                (None, b'"' | b'\'') => quote = Some(b),
                (None, b'>') => {
                    end = Some(body_start + i);
                    break;
                }
                _ => {}
            }
        }
        let end = end.ok_or_else(|| err(start_line, "unterminated tag"))?;
        let body = &text[body_start..end];
        self.line += body.matches('\n').count();
        self.pos = end + 1;

        if body.starts_with('/') {
            return Ok(None);
        }

        let body = body.strip_suffix('/').unwrap_or(body);
        let name_end = body.find(|c: char| c.is_whitespace()).unwrap_or(body.len());
        let name = local_name(&body[..name_end]);
        let attrs = parse_attrs(&body[name_end..]).map_err(|m| err(start_line, m))?;
        Ok(Some(Tag { name, attrs, line: start_line }))
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = GraphResult<Tag<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            let i = rest.find('<')?;
            self.line += rest[..i].matches('\n').count();
            self.pos += i;
            let rest = &self.text[self.pos..];

            let skipped = if rest.starts_with("<!--") {
                self.skip_past("-->")
            } else if rest.starts_with("<![CDATA[") {
                self.skip_past("]]>")
            } else if rest.starts_with("<?") {
                self.skip_past("?>")
            } else if rest.starts_with("<!") {
                self.skip_past(">")
            } else {
                match self.parse_tag() {
                    Ok(Some(tag)) => return Some(Ok(tag)),
                    Ok(None)      => continue,
                    Err(e)        => Err(e),
                }
            };
            if let Err(e) = skipped {
                // Stop after the first error.
                self.pos = self.text.len();
                return Some(Err(e));
            }
        }
    }
}

/// Strip an XML namespace prefix (`gml:node` → `node`).
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn parse_attrs(mut s: &str) -> Result<Vec<(&str, &str)>, String> {
    let mut attrs = Vec::new();
    loop {
        s = s.trim_start();
        if s.is_empty() {
            return Ok(attrs);
        }
        let eq = s.find('=').ok_or_else(|| format!("malformed attribute near {s:?}"))?;
        let key = s[..eq].trim();
        let after = s[eq + 1..].trim_start();
        let quote = after
            .chars()
            .next()
            .filter(|c| *c == '"' || *c == '\'')
            .ok_or_else(|| format!("unquoted value for attribute {key:?}"))?;
        let close = after[1..]
            .find(quote)
            .ok_or_else(|| format!("unterminated value for attribute {key:?}"))?;
        attrs.push((key, &after[1..1 + close]));
        s = &after[close + 2..];
    }
}

fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
