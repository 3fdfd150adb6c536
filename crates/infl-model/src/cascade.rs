//! Independent Cascade model.
//!
//! # Transition rule
//!
//! ```text
//! each iteration:
//!   ① every infected node u, in frontier order:
//!        for each susceptible neighbor v of u (ascending id):
//!          with probability p, v becomes infected for the NEXT iteration
//!   ② every node infected at the start of the iteration becomes recovered
//!   ③ iteration += 1
//! ```
//!
//! Nodes infected during ① are not part of the current frontier, so they
//! cannot spread until the following iteration.  A node is contagious for
//! exactly one iteration.  The run terminates when the frontier is empty.
//!
//! Since no node can be infected twice, a run seeded at one node performs at
//! most `node_count` iterations.

use infl_core::config::validate_probability;
use infl_core::{Graph, InflError, InflResult, NodeId, RunRng};

use crate::{DiffusionModel, NodeState, StateSummary};

/// One Independent Cascade run over a borrowed graph.
pub struct IndependentCascade<'g> {
    graph:                 &'g Graph,
    infection_probability: f64,
    states:                Vec<NodeState>,
    /// Nodes currently in `Infected`, in the order they were infected.
    frontier:              Vec<NodeId>,
    /// Scratch buffer for the next frontier, reused across iterations.
    next:                  Vec<NodeId>,
    summary:               StateSummary,
    iteration:             u32,
    rng:                   RunRng,
}

impl<'g> IndependentCascade<'g> {
    /// A run with every node susceptible.
    ///
    /// The model starts terminated; seed it with [`infect`](Self::infect).
    ///
    /// # Errors
    /// [`InflError::InvalidParameter`] if `infection_probability` is not in
    /// `[0, 1]`.
    pub fn new(graph: &'g Graph, infection_probability: f64, rng: RunRng) -> InflResult<Self> {
        validate_probability(infection_probability)?;
        let n = graph.node_count();
        Ok(Self {
            graph,
            infection_probability,
            states:    vec![NodeState::Susceptible; n],
            frontier:  Vec::new(),
            next:      Vec::new(),
            summary:   StateSummary { susceptible: n as u32, infected: 0, recovered: 0 },
            iteration: 0,
            rng,
        })
    }

    /// Mark a susceptible node as infected.
    ///
    /// Returns `Ok(false)` (and changes nothing) if the node is already
    /// infected or recovered.
    ///
    /// # Errors
    /// [`InflError::NodeOutOfRange`] if `node` is not in the graph.
    pub fn infect(&mut self, node: NodeId) -> InflResult<bool> {
        if !self.graph.contains(node) {
            return Err(InflError::NodeOutOfRange { node, count: self.graph.node_count() });
        }
        if self.states[node.index()] != NodeState::Susceptible {
            return Ok(false);
        }
        self.states[node.index()] = NodeState::Infected;
        self.frontier.push(node);
        self.summary.susceptible -= 1;
        self.summary.infected += 1;
        Ok(true)
    }

    /// Full per-node state vector, indexed by `NodeId`.
    pub fn states(&self) -> &[NodeState] {
        &self.states
    }

    /// Nodes infected right now.
    pub fn infected(&self) -> &[NodeId] {
        &self.frontier
    }
}

impl DiffusionModel for IndependentCascade<'_> {
    fn step(&mut self) {
        if self.frontier.is_empty() {
            return;
        }

        let p = self.infection_probability;
        self.next.clear();

        // ① attempts from the current frontier
        for &u in &self.frontier {
            for &v in self.graph.neighbors(u) {
                let slot = &mut self.states[v.index()];
                if *slot == NodeState::Susceptible && self.rng.gen_bool(p) {
                    *slot = NodeState::Infected;
                    self.next.push(v);
                }
            }
        }

        // ② the whole starting frontier recovers
        for &u in &self.frontier {
            self.states[u.index()] = NodeState::Recovered;
        }

        let newly = self.next.len() as u32;
        self.summary.recovered += self.summary.infected;
        self.summary.susceptible -= newly;
        self.summary.infected = newly;

        std::mem::swap(&mut self.frontier, &mut self.next);

        // ③
        self.iteration += 1;
    }

    #[inline]
    fn is_terminated(&self) -> bool {
        self.frontier.is_empty()
    }

    #[inline]
    fn iteration(&self) -> u32 {
        self.iteration
    }

    fn state(&self, node: NodeId) -> NodeState {
        self.states[node.index()]
    }

    #[inline]
    fn summary(&self) -> StateSummary {
        self.summary
    }
}
