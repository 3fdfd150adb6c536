//! GML (Graph Modelling Language) format.
//!
//! ```text
//! graph [
//!   directed 0
//!   node [ id 0 label "alice" ]
//!   node [ id 1 label "bob" ]
//!   edge [ source 0 target 1 ]
//! ]
//! ```
//!
//! Nodes are named by their `label` when present, otherwise by `id`.
//! Edges refer to node `id`s.  Keys other than `node`/`edge` and the node and
//! edge attributes besides `id`/`label`/`source`/`target` are accepted and
//! ignored.  Directed graphs are read as undirected.

use std::io::{Read, Write};

use rustc_hash::FxHashMap;

use infl_core::Graph;

use crate::{GraphError, GraphFormat, GraphResult, LabelMap};

// ── Tokens & values ───────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Token {
    Key(String),
    Int(i64),
    Real(f64),
    Str(String),
    Open,
    Close,
}

#[derive(Debug)]
enum Value {
    Int(i64),
    Real(f64),
    Str(String),
    List(Vec<Entry>),
}

/// One `key value` pair plus the line it started on.
#[derive(Debug)]
struct Entry {
    key:   String,
    value: Value,
    line:  usize,
}

fn err(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::parse(GraphFormat::Gml, line, message)
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn read<R: Read>(mut reader: R) -> GraphResult<LabelMap> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let tokens = tokenize(&text)?;
    let mut pos = 0;
    let top = parse_list(&tokens, &mut pos, false)?;

    let graph = top
        .iter()
        .find(|e| e.key == "graph")
        .ok_or_else(|| err(1, "no `graph [ ... ]` block"))?;
    let Value::List(items) = &graph.value else {
        return Err(err(graph.line, "`graph` must be a list"));
    };

    let mut labels = LabelMap::new();
    let mut by_id: FxHashMap<i64, u32> = FxHashMap::default();

    for node in items.iter().filter(|e| e.key == "node") {
        let attrs = as_list(node)?;
        let id = int_attr(attrs, "id").ok_or_else(|| err(node.line, "node without integer `id`"))?;
        let name = match find(attrs, "label") {
            Some(Value::Str(s))  => s.clone(),
            Some(Value::Int(i))  => i.to_string(),
            Some(Value::Real(r)) => r.to_string(),
            Some(Value::List(_)) => return Err(err(node.line, "node `label` must be a scalar")),
            None                 => id.to_string(),
        };
        if labels.get(&name).is_some() {
            return Err(err(node.line, format!("duplicate node label {name:?}")));
        }
        if by_id.insert(id, labels.intern(&name)?).is_some() {
            return Err(err(node.line, format!("duplicate node id {id}")));
        }
    }

    for edge in items.iter().filter(|e| e.key == "edge") {
        let attrs = as_list(edge)?;
        let endpoint = |key: &str| -> GraphResult<u32> {
            let id = int_attr(attrs, key)
                .ok_or_else(|| err(edge.line, format!("edge without integer `{key}`")))?;
            by_id
                .get(&id)
                .copied()
                .ok_or_else(|| err(edge.line, format!("edge {key} {id} is not a declared node")))
        };
        let (a, b) = (endpoint("source")?, endpoint("target")?);
        labels.add_edge_ids(a, b);
    }

    Ok(labels)
}

pub fn write<W: Write>(graph: &Graph, mut w: W) -> GraphResult<()> {
    writeln!(w, "graph [")?;
    for node in graph.nodes() {
        writeln!(w, "  node [")?;
        writeln!(w, "    id {node}")?;
        writeln!(w, "    label \"{node}\"")?;
        writeln!(w, "  ]")?;
    }
    for (a, b) in graph.edges() {
        writeln!(w, "  edge [")?;
        writeln!(w, "    source {a}")?;
        writeln!(w, "    target {b}")?;
        writeln!(w, "  ]")?;
    }
    writeln!(w, "]")?;
    Ok(())
}

// ── Tree helpers ──────────────────────────────────────────────────────────────

fn as_list(entry: &Entry) -> GraphResult<&[Entry]> {
    match &entry.value {
        Value::List(items) => Ok(items),
        _ => Err(err(entry.line, format!("`{}` must be a list", entry.key))),
    }
}

fn find<'a>(attrs: &'a [Entry], key: &str) -> Option<&'a Value> {
    attrs.iter().find(|e| e.key == key).map(|e| &e.value)
}

fn int_attr(attrs: &[Entry], key: &str) -> Option<i64> {
    match find(attrs, key) {
        Some(Value::Int(i)) => Some(*i),
        _ => None,
    }
}

// ── Parser ────────────────────────────────────────────────────────────────────

fn parse_list(
    tokens: &[(Token, usize)],
    pos:    &mut usize,
    nested: bool,
) -> GraphResult<Vec<Entry>> {
    let mut entries = Vec::new();
    loop {
        let Some((token, line)) = tokens.get(*pos) else {
            if nested {
                let last = tokens.last().map_or(1, |t| t.1);
                return Err(err(last, "unclosed `[`"));
            }
            return Ok(entries);
        };
        *pos += 1;

        let key = match token {
            Token::Close if nested => return Ok(entries),
            Token::Key(k) => k.clone(),
            other => return Err(err(*line, format!("expected a key, found {other:?}"))),
        };

        let Some((token, vline)) = tokens.get(*pos) else {
            return Err(err(*line, format!("key `{key}` has no value")));
        };
        *pos += 1;

        let value = match token {
            Token::Int(i)  => Value::Int(*i),
            Token::Real(r) => Value::Real(*r),
            Token::Str(s)  => Value::Str(s.clone()),
            Token::Open    => Value::List(parse_list(tokens, pos, true)?),
            other => return Err(err(*vline, format!("unexpected {other:?} after `{key}`"))),
        };
        entries.push(Entry { key, value, line: *line });
    }
}

// ── Tokenizer ─────────────────────────────────────────────────────────────────

fn tokenize(text: &str) -> GraphResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
            }
            '[' => {
                chars.next();
                tokens.push((Token::Open, line));
            }
            ']' => {
                chars.next();
                tokens.push((Token::Close, line));
            }
            '"' => {
                chars.next();
                let open_line = line;
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, ch)) => {
                            if ch == '\n' {
                                line += 1;
                            }
                            s.push(ch);
                        }
                        None => return Err(err(open_line, "unterminated string")),
                    }
                }
                tokens.push((Token::Str(unescape(&s)), open_line));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some((i, ch)) = chars.next_if(|&(_, ch)| ch.is_ascii_alphanumeric() || ch == '_') {
                    end = i + ch.len_utf8();
                }
                let word = &text[start..end];
                let token = match word {
                    "INF" | "inf" => Token::Real(f64::INFINITY),
                    "NAN" | "nan" => Token::Real(f64::NAN),
                    _ => Token::Key(word.to_owned()),
                };
                tokens.push((token, line));
            }
            c if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {
                let mut end = start;
                while let Some((i, ch)) = chars.next_if(|&(_, ch)| {
                    ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.')
                }) {
                    end = i + ch.len_utf8();
                }
                let word = &text[start..end];
                let token = if let Ok(i) = word.parse::<i64>() {
                    Token::Int(i)
                } else if let Ok(r) = word.trim_start_matches('+').parse::<f64>() {
                    Token::Real(r)
                } else {
                    return Err(err(line, format!("invalid number {word:?}")));
                };
                tokens.push((token, line));
            }
            other => return Err(err(line, format!("unexpected character {other:?}"))),
        }
    }
    Ok(tokens)
}

/// Decode the character entities GML writers commonly emit.
fn unescape(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
