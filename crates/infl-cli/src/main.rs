//! `influence-sim`: simulate every node of a graph as a single-seed
//! Independent Cascade and save the per-node influence summary.
//!
//! # Example
//!
//! ```bash
//! # Results to a single CSV file, 4 workers, batches of 16 nodes
//! influence-sim karate.gml ic.json -o results/karate.csv -n 4 -c 16
//!
//! # Results plus model config zipped into ./simulation_results/, all cores
//! influence-sim karate.gml ic.json -n -1 -v
//! ```
//!
//! `ic.json`:
//!
//! ```json
//! { "type": "IndependentCascadeSimulator", "infection_probability": 0.1, "random_state": 42 }
//! ```

mod logging;
mod progress;
mod report;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use infl_core::CampaignConfig;
use infl_sim::{Campaign, CampaignObserver, ModelConfig, ModelRegistry, NoopObserver};

use crate::logging::init_logging;
use crate::progress::ProgressObserver;
use crate::report::{format_elapsed, log_memory};

/// Influence simulator
///
/// Runs one Independent Cascade per node of the graph, seeded at that node,
/// and records how far and how long each cascade spread.
#[derive(Parser, Debug)]
#[command(name = "influence-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the graph file (.adjlist, .edgelist, .gml, .graphml, .net, .pajek)
    graph: PathBuf,

    /// Path to a JSON model config with a `type` key naming the model and
    /// its parameters
    model_config: PathBuf,

    /// Output path. A path with an extension is written as one CSV file;
    /// otherwise a timestamped zip of the results and model config is
    /// created inside it.
    #[arg(short = 'o', long, default_value = "./simulation_results/")]
    output_path: PathBuf,

    /// Number of concurrent workers; 0 or negative uses every core
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    n_jobs: i64,

    /// Nodes per batch handed to a worker
    #[arg(short = 'c', long, default_value_t = 1)]
    chunksize: usize,

    /// Display a progress bar
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Logging level (trace, debug, info, warn, error), or `none` to turn
    /// logging off
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let started = Instant::now();
    run(&args)?;
    info!("Simulation time: {}", format_elapsed(started.elapsed(), Some(3)));

    log_memory();
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let model_config = ModelConfig::from_path(&args.model_config)
        .with_context(|| format!("loading model config {}", args.model_config.display()))?;
    let graph = infl_graph::load(&args.graph)
        .with_context(|| format!("loading graph {}", args.graph.display()))?;

    let config = campaign_config(args, &model_config);
    let campaign = Campaign::new(config)?;
    let simulator = ModelRegistry::default().build(&model_config, Arc::new(graph))?;
    debug!(seed = simulator.campaign_seed(), "simulator ready");

    let observer: Box<dyn CampaignObserver> = if args.verbose {
        Box::new(ProgressObserver::new())
    } else {
        Box::new(NoopObserver)
    };
    let results = campaign.run(&*simulator, &*observer)?;

    if is_file_output(&args.output_path) {
        infl_output::save_results(&results, &args.output_path)
            .with_context(|| format!("saving results to {}", args.output_path.display()))?;
    } else {
        let archive = infl_output::save_archive(
            &results,
            &args.output_path,
            &args.graph,
            &args.model_config,
        )
        .with_context(|| format!("archiving results in {}", args.output_path.display()))?;
        info!(path = %archive.display(), "results archived");
    }
    Ok(())
}

/// Merge the model parameters with the execution flags.
fn campaign_config(args: &Args, model: &ModelConfig) -> CampaignConfig {
    let mut config = CampaignConfig::default()
        .with_workers(args.n_jobs)
        .with_chunk_size(args.chunksize)
        .with_progress(args.verbose);
    model.apply_to(&mut config);
    config
}

/// A path with an extension names a file; anything else is a directory.
fn is_file_output(path: &Path) -> bool {
    path.extension().is_some()
}
