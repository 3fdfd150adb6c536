//! The `InfluenceSimulator` trait and its Independent Cascade variant.

use std::sync::Arc;

use infl_core::{CampaignConfig, Graph, NodeId, Peak, RunRng, SimulationResult};
use infl_core::config::validate_probability;
use infl_core::draw_campaign_seed;
use infl_model::{DiffusionModel, IndependentCascade};

use crate::SimResult;

/// A family of single-seed simulations over one graph.
///
/// Implementors only need to say how a run is seeded
/// ([`init_simulation`](Self::init_simulation)); the provided
/// [`simulate_node`](Self::simulate_node) drives any [`DiffusionModel`] to
/// termination and reduces it to a [`SimulationResult`].
///
/// # Thread safety
///
/// [`Campaign`][crate::Campaign] calls `simulate_node` for many nodes in
/// parallel, so implementations must be `Send + Sync`.  Every call must
/// build its own model; the simulator itself holds only read-only data.
pub trait InfluenceSimulator: Send + Sync {
    /// Registry tag of this variant.
    fn name(&self) -> &'static str;

    /// The graph every run spreads over.
    fn graph(&self) -> &Graph;

    /// Per-attempt infection probability of every run.
    fn infection_probability(&self) -> f64;

    /// Seed from which every run's RNG is derived.
    fn campaign_seed(&self) -> u64;

    /// Build a fresh model with only `node` infected.
    fn init_simulation(&self, node: NodeId) -> SimResult<Box<dyn DiffusionModel + '_>>;

    /// Run one cascade seeded at `node` to completion.
    ///
    /// The peak starts at one infected node at iteration 0 (the seed) and
    /// moves only on strict improvement, so ties keep the earliest
    /// iteration.
    fn simulate_node(&self, node: NodeId) -> SimResult<SimulationResult> {
        let mut model = self.init_simulation(node)?;

        let mut peak = Peak::SEEDED;
        while !model.is_terminated() {
            model.step();
            peak.observe(model.summary().infected, model.iteration());
        }

        let last = model.summary();
        Ok(SimulationResult {
            node,
            simulation_length: model.iteration(),
            exposed:           last.recovered,
            not_exposed:       last.susceptible,
            peak_infected:     peak.infected,
            peak_iteration:    peak.iteration,
        })
    }
}

// ── IndependentCascadeSimulator ───────────────────────────────────────────────

/// Seeds one [`IndependentCascade`] per node.
pub struct IndependentCascadeSimulator {
    graph:                 Arc<Graph>,
    infection_probability: f64,
    campaign_seed:         u64,
}

impl IndependentCascadeSimulator {
    pub const TAG: &'static str = "IndependentCascadeSimulator";

    /// Create a simulator.  A missing `random_seed` draws one campaign seed
    /// from OS entropy now, fixed for the simulator's lifetime.
    pub fn new(
        graph:                 Arc<Graph>,
        infection_probability: f64,
        random_seed:           Option<u64>,
    ) -> SimResult<Self> {
        validate_probability(infection_probability)?;
        Ok(Self {
            graph,
            infection_probability,
            campaign_seed: random_seed.unwrap_or_else(draw_campaign_seed),
        })
    }

    /// Take the probability and seed from a campaign config.
    pub fn from_config(graph: Arc<Graph>, config: &CampaignConfig) -> SimResult<Self> {
        Self::new(graph, config.infection_probability, config.random_seed)
    }

    /// Concrete-typed variant of [`InfluenceSimulator::init_simulation`].
    pub fn seeded_model(&self, node: NodeId) -> SimResult<IndependentCascade<'_>> {
        let rng = RunRng::new(self.campaign_seed, node);
        let mut model = IndependentCascade::new(&self.graph, self.infection_probability, rng)?;
        model.infect(node)?;
        Ok(model)
    }
}

impl InfluenceSimulator for IndependentCascadeSimulator {
    fn name(&self) -> &'static str {
        Self::TAG
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn infection_probability(&self) -> f64 {
        self.infection_probability
    }

    fn campaign_seed(&self) -> u64 {
        self.campaign_seed
    }

    fn init_simulation(&self, node: NodeId) -> SimResult<Box<dyn DiffusionModel + '_>> {
        Ok(Box::new(self.seeded_model(node)?))
    }
}
