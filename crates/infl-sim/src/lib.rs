//! `infl-sim`: per-node cascade simulation and campaign orchestration.
//!
//! # Campaign loop
//!
//! ```text
//! for node in graph.nodes():                 (sequential, or batched on a
//!   model = simulator.init_simulation(node)   Rayon pool with `parallel`)
//!   peak  = (1, 0)
//!   while !model.is_terminated():
//!     model.step()
//!     peak.observe(model.summary().infected, model.iteration())
//!   emit SimulationResult
//! collect results in node order
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs batches of nodes on a Rayon thread pool (default).|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use infl_core::CampaignConfig;
//! use infl_sim::{Campaign, IndependentCascadeSimulator, NoopObserver};
//!
//! let config = CampaignConfig::new(0.1).with_seed(42).with_workers(4);
//! let sim = IndependentCascadeSimulator::from_config(graph, &config)?;
//! let results = Campaign::new(config)?.run(&sim, &NoopObserver)?;
//! ```

pub mod campaign;
pub mod error;
pub mod observer;
pub mod registry;
pub mod simulator;


pub use campaign::Campaign;
pub use error::{SimError, SimResult};
pub use observer::{CampaignObserver, NoopObserver};
pub use registry::{ModelConfig, ModelRegistry};
pub use simulator::{IndependentCascadeSimulator, InfluenceSimulator};
