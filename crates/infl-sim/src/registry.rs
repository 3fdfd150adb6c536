//! Model configuration files and the tag → simulator registry.
//!
//! # Config format
//!
//! ```json
//! {
//!   "type": "IndependentCascadeSimulator",
//!   "infection_probability": 0.1,
//!   "random_state": 42
//! }
//! ```
//!
//! `type` selects a variant from the [`ModelRegistry`]; `random_state` is
//! optional.  Unknown keys are rejected.
//!
//! | Tag                           | Variant                          |
//! |-------------------------------|----------------------------------|
//! | `IndependentCascadeSimulator` | [`IndependentCascadeSimulator`]  |
//! | `independent_cascade`         | alias                            |
//! | `InfluenceSimulator`          | legacy alias                     |

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use infl_core::config::validate_probability;
use infl_core::{CampaignConfig, Graph};

use crate::{IndependentCascadeSimulator, InfluenceSimulator, SimError, SimResult};

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Deserialized model configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Registry tag of the simulator variant.
    #[serde(rename = "type")]
    pub kind: String,

    pub infection_probability: f64,

    #[serde(default)]
    pub random_state: Option<u64>,
}

impl ModelConfig {
    /// Parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::ModelConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(text: &str) -> SimResult<Self> {
        let config: ModelConfig = serde_json::from_str(text)?;
        validate_probability(config.infection_probability)?;
        Ok(config)
    }

    /// Copy the model parameters into a campaign config.
    pub fn apply_to(&self, campaign: &mut CampaignConfig) {
        campaign.infection_probability = self.infection_probability;
        campaign.random_seed = self.random_state;
    }
}

// ── ModelRegistry ─────────────────────────────────────────────────────────────

/// Constructor stored in the registry.
pub type SimulatorCtor =
    fn(Arc<Graph>, &ModelConfig) -> SimResult<Box<dyn InfluenceSimulator>>;

/// Explicit mapping from config tags to simulator constructors.
///
/// `ModelRegistry::default()` holds every built-in variant.  Applications
/// add their own with [`register`](Self::register).
pub struct ModelRegistry {
    ctors: BTreeMap<&'static str, SimulatorCtor>,
}

impl ModelRegistry {
    /// A registry with no variants.
    pub fn empty() -> Self {
        Self { ctors: BTreeMap::new() }
    }

    /// Add (or replace) the constructor for `tag`.
    pub fn register(&mut self, tag: &'static str, ctor: SimulatorCtor) -> &mut Self {
        self.ctors.insert(tag, ctor);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.ctors.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ctors.keys().copied()
    }

    /// Construct the simulator named by `config.kind`.
    ///
    /// # Errors
    /// [`SimError::UnknownModel`] if the tag is not registered, or whatever
    /// the variant's constructor rejects.
    pub fn build(
        &self,
        config: &ModelConfig,
        graph:  Arc<Graph>,
    ) -> SimResult<Box<dyn InfluenceSimulator>> {
        let ctor = self.ctors.get(config.kind.as_str()).ok_or_else(|| SimError::UnknownModel {
            tag:   config.kind.clone(),
            known: self.tags().collect::<Vec<_>>().join(", "),
        })?;
        debug!(tag = %config.kind, "building simulator");
        ctor(graph, config)
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        let mut r = Self::empty();
        r.register(IndependentCascadeSimulator::TAG, independent_cascade)
            .register("independent_cascade", independent_cascade)
            .register("InfluenceSimulator", independent_cascade);
        r
    }
}

fn independent_cascade(
    graph:  Arc<Graph>,
    config: &ModelConfig,
) -> SimResult<Box<dyn InfluenceSimulator>> {
    let sim = IndependentCascadeSimulator::new(
        graph,
        config.infection_probability,
        config.random_state,
    )?;
    Ok(Box::new(sim))
}
