//! Label interning and dense relabeling.

use rustc_hash::FxHashMap;

use infl_core::{Graph, GraphBuilder, NodeId};

use crate::{GraphError, GraphResult};

/// Collects node labels and edges while a file is parsed.
///
/// Labels get provisional ids in order of first appearance.
/// [`into_graph`](Self::into_graph) then fixes the final dense ids: numeric
/// label order when every label parses as an integer, otherwise
/// first-appearance order.
#[derive(Default)]
pub struct LabelMap {
    index: FxHashMap<String, u32>,
    names: Vec<String>,
    edges: Vec<(u32, u32)>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisional id of `label`, registering it if new.
    pub fn intern(&mut self, label: &str) -> GraphResult<u32> {
        if let Some(&id) = self.index.get(label) {
            return Ok(id);
        }
        let id = u32::try_from(self.names.len()).map_err(|_| GraphError::TooManyNodes)?;
        self.index.insert(label.to_owned(), id);
        self.names.push(label.to_owned());
        Ok(id)
    }

    /// Provisional id of an already registered label.
    pub fn get(&self, label: &str) -> Option<u32> {
        self.index.get(label).copied()
    }

    /// Record an undirected edge between two labels.
    pub fn add_edge(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let a = self.intern(a)?;
        let b = self.intern(b)?;
        self.add_edge_ids(a, b);
        Ok(())
    }

    /// Record an undirected edge between two provisional ids.
    pub fn add_edge_ids(&mut self, a: u32, b: u32) {
        self.edges.push((a, b));
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Map from provisional id to final dense id.
    fn final_ids(&self) -> Vec<u32> {
        let numeric: Option<Vec<i64>> = self.names.iter().map(|n| n.trim().parse().ok()).collect();
        let Some(values) = numeric else {
            return (0..self.names.len() as u32).collect();
        };

        let mut order: Vec<u32> = (0..self.names.len() as u32).collect();
        order.sort_by_key(|&i| values[i as usize]);

        let mut rank = vec![0u32; order.len()];
        for (final_id, &provisional) in order.iter().enumerate() {
            rank[provisional as usize] = final_id as u32;
        }
        rank
    }

    /// Build the relabeled graph.
    pub fn into_graph(self) -> Graph {
        let ids = self.final_ids();
        let mut b = GraphBuilder::with_capacity(self.names.len(), self.edges.len());
        for &(a, c) in &self.edges {
            b.add_edge(NodeId(ids[a as usize]), NodeId(ids[c as usize]));
        }
        b.build()
    }
}
