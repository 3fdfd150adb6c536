//! The `Campaign` orchestrator: one simulation per node, collected in order.

use std::time::Instant;

use tracing::info;

use infl_core::{CampaignConfig, InflError, NodeId, SimulationResult};

use crate::{CampaignObserver, InfluenceSimulator, SimError, SimResult};

/// Runs a simulator once per node and gathers the results.
///
/// The returned collection is always ordered by the node order it was given
/// (ascending `NodeId` for [`run`](Self::run)), whatever the worker count,
/// chunk size, or completion order.  Because every run derives its RNG from
/// `(campaign seed, node)` alone, sequential and parallel campaigns produce
/// identical results.
///
/// The first failing node aborts the campaign; no partial result is returned.
///
/// The config's `infection_probability` (and `random_seed`, when set) must
/// match the simulator's; a mismatch is rejected before any run starts.
#[derive(Clone, Debug)]
pub struct Campaign {
    config: CampaignConfig,
}

impl Campaign {
    /// Validate `config` and wrap it.
    ///
    /// # Errors
    /// [`InflError::InvalidParameter`] for out-of-range values.
    pub fn new(config: CampaignConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Simulate every node of the simulator's graph.
    pub fn run<S, O>(&self, sim: &S, observer: &O) -> SimResult<Vec<SimulationResult>>
    where
        S: InfluenceSimulator + ?Sized,
        O: CampaignObserver + ?Sized,
    {
        let nodes: Vec<NodeId> = sim.graph().nodes().collect();
        self.run_nodes(sim, &nodes, observer)
    }

    /// Simulate the given seed nodes; results follow the order of `nodes`.
    ///
    /// # Errors
    /// [`SimError::ConfigMismatch`] if the simulator disagrees with the
    /// config, or [`InflError::NodeOutOfRange`] if a node is not in the
    /// graph, both before any work starts; otherwise the first error raised
    /// by a node simulation.
    pub fn run_nodes<S, O>(
        &self,
        sim:      &S,
        nodes:    &[NodeId],
        observer: &O,
    ) -> SimResult<Vec<SimulationResult>>
    where
        S: InfluenceSimulator + ?Sized,
        O: CampaignObserver + ?Sized,
    {
        self.check_simulator(sim)?;

        let graph = sim.graph();
        if let Some(&node) = nodes.iter().find(|&&n| !graph.contains(n)) {
            return Err(InflError::NodeOutOfRange { node, count: graph.node_count() }.into());
        }

        let workers = self.config.resolved_workers();
        info!(
            model = sim.name(),
            nodes = nodes.len(),
            graph_nodes = graph.node_count(),
            graph_edges = graph.edge_count(),
            workers,
            chunk_size = self.config.chunk_size,
            seed = sim.campaign_seed(),
            "starting campaign"
        );

        let started = Instant::now();
        observer.on_campaign_start(nodes.len());

        let results = if workers == 1 {
            self.run_sequential(sim, nodes, observer)?
        } else {
            self.run_parallel(sim, nodes, observer, workers)?
        };

        observer.on_campaign_end(results.len());
        info!(
            completed = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "campaign finished"
        );
        Ok(results)
    }

    /// Reject a simulator whose model parameters differ from the config.
    fn check_simulator<S>(&self, sim: &S) -> SimResult<()>
    where
        S: InfluenceSimulator + ?Sized,
    {
        let p = self.config.infection_probability;
        if sim.infection_probability() != p {
            return Err(SimError::ConfigMismatch {
                field:     "infection_probability",
                campaign:  p.to_string(),
                simulator: sim.infection_probability().to_string(),
            });
        }
        match self.config.random_seed {
            Some(seed) if sim.campaign_seed() != seed => Err(SimError::ConfigMismatch {
                field:     "random_seed",
                campaign:  seed.to_string(),
                simulator: sim.campaign_seed().to_string(),
            }),
            _ => Ok(()),
        }
    }

    // ── Execution modes ───────────────────────────────────────────────────

    fn run_sequential<S, O>(
        &self,
        sim:      &S,
        nodes:    &[NodeId],
        observer: &O,
    ) -> SimResult<Vec<SimulationResult>>
    where
        S: InfluenceSimulator + ?Sized,
        O: CampaignObserver + ?Sized,
    {
        let progress = self.config.show_progress;
        nodes
            .iter()
            .map(|&node| {
                let result = sim.simulate_node(node)?;
                if progress {
                    observer.on_node_done(&result);
                }
                Ok(result)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<S, O>(
        &self,
        sim:      &S,
        nodes:    &[NodeId],
        observer: &O,
        workers:  usize,
    ) -> SimResult<Vec<SimulationResult>>
    where
        S: InfluenceSimulator + ?Sized,
        O: CampaignObserver + ?Sized,
    {
        use rayon::prelude::*;
        use tracing::debug;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("infl-worker-{i}"))
            .build()
            .map_err(|e| SimError::ThreadPool(e.to_string()))?;

        let progress = self.config.show_progress;
        let chunk_size = self.config.chunk_size;
        debug!(batches = nodes.len().div_ceil(chunk_size), "dispatching batches");

        // `par_chunks` is an indexed iterator, so `collect` reassembles the
        // batches in input order regardless of which finishes first.
        let batches: Vec<Vec<SimulationResult>> = pool.install(|| {
            nodes
                .par_chunks(chunk_size)
                .map(|batch| {
                    batch
                        .iter()
                        .map(|&node| {
                            let result = sim.simulate_node(node)?;
                            if progress {
                                observer.on_node_done(&result);
                            }
                            Ok(result)
                        })
                        .collect::<SimResult<Vec<_>>>()
                })
                .collect::<SimResult<Vec<_>>>()
        })?;

        Ok(batches.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel<S, O>(
        &self,
        sim:      &S,
        nodes:    &[NodeId],
        observer: &O,
        workers:  usize,
    ) -> SimResult<Vec<SimulationResult>>
    where
        S: InfluenceSimulator + ?Sized,
        O: CampaignObserver + ?Sized,
    {
        tracing::warn!(workers, "built without the `parallel` feature; running sequentially");
        self.run_sequential(sim, nodes, observer)
    }
}
