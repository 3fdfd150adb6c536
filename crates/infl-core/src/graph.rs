//! Undirected simple graph and its builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! adjacency[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Every undirected edge `{a, b}` with `a != b` is stored twice (once in each
//! endpoint's row); a self-loop `{a, a}` is stored once.  Rows are sorted by
//! neighbor id, so iteration over a node's neighbors is a contiguous,
//! ascending memory scan in the cascade inner loop.
//!
//! The graph is immutable once built and is shared read-only by every
//! concurrent run.

use crate::NodeId;

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected simple graph over dense node ids `0..node_count`.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    /// CSR row pointer.  Length = `node_count + 1`.
    adj_start: Vec<u32>,
    /// Concatenated, per-row sorted neighbor lists.
    adjacency: Vec<NodeId>,
    /// Distinct undirected edges, including self-loops.
    edge_count: usize,
}

impl Graph {
    /// A graph with no nodes or edges.
    pub fn empty() -> Self {
        GraphBuilder::new(0).build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.adj_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// All node ids in canonical (ascending) order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    /// Neighbors of `node`, ascending.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adj_start[node.index()] as usize;
        let end   = self.adj_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.contains(a) && self.contains(b) && self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Every undirected edge once, as `(low, high)` pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes().flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .filter(move |&&b| a <= b)
                .map(move |&b| (a, b))
        })
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Edges may be added in any order and any orientation.  `build()`
/// normalises each edge to `(low, high)`, collapses duplicates, and
/// constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use infl_core::{GraphBuilder, NodeId};
///
/// let mut b = GraphBuilder::new(3);
/// b.add_edge(NodeId(0), NodeId(1));
/// b.add_edge(NodeId(1), NodeId(0)); // duplicate, collapsed
/// b.add_edge(NodeId(1), NodeId(2));
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    node_count: usize,
    raw_edges:  Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Start a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self { node_count, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of edges.
    pub fn with_capacity(node_count: usize, edges: usize) -> Self {
        Self { node_count, raw_edges: Vec::with_capacity(edges) }
    }

    /// Append a new isolated node and return its id (sequential).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add an undirected edge.  Grows the node range if either endpoint is
    /// beyond the current count.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.node_count = self.node_count.max(a.index().max(b.index()) + 1);
        self.raw_edges.push(if a <= b { (a, b) } else { (b, a) });
    }

    pub fn node_count(&self) -> usize { self.node_count }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Time complexity: O(E log E) for the edge sort.
    pub fn build(self) -> Graph {
        let node_count = self.node_count;

        let mut edges = self.raw_edges;
        edges.sort_unstable();
        edges.dedup();

        // Row lengths: both endpoints for ordinary edges, one for self-loops.
        let mut adj_start = vec![0u32; node_count + 1];
        for &(a, b) in &edges {
            adj_start[a.index() + 1] += 1;
            if a != b {
                adj_start[b.index() + 1] += 1;
            }
        }
        for i in 1..=node_count {
            adj_start[i] += adj_start[i - 1];
        }

        let mut cursor: Vec<u32> = adj_start[..node_count].to_vec();
        let mut adjacency = vec![NodeId(0); adj_start[node_count] as usize];
        for &(a, b) in &edges {
            adjacency[cursor[a.index()] as usize] = b;
            cursor[a.index()] += 1;
            if a != b {
                adjacency[cursor[b.index()] as usize] = a;
                cursor[b.index()] += 1;
            }
        }

        for n in 0..node_count {
            let (start, end) = (adj_start[n] as usize, adj_start[n + 1] as usize);
            adjacency[start..end].sort_unstable();
        }

        Graph { adj_start, adjacency, edge_count: edges.len() }
    }
}
