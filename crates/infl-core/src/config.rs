//! Campaign configuration.

use std::num::NonZeroUsize;

use crate::{InflError, InflResult};

/// Parameters for one campaign: a sweep of single-seed cascades over every
/// node of a graph.
///
/// Typically assembled by the application from CLI flags and a model config
/// file, then validated once before any simulation work starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CampaignConfig {
    /// Per-attempt infection probability `p`.  Must lie in `[0, 1]`.
    pub infection_probability: f64,

    /// Campaign RNG seed.  `None` draws one from OS entropy at campaign start.
    pub random_seed: Option<u64>,

    /// Worker thread count.  `1` runs sequentially; `<= 0` uses all
    /// available cores.
    pub worker_count: i64,

    /// Nodes per dispatched batch in parallel mode.  Must be `>= 1`.
    pub chunk_size: usize,

    /// Report per-node progress to the observer.
    pub show_progress: bool,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            infection_probability: 0.0,
            random_seed:           None,
            worker_count:          1,
            chunk_size:            1,
            show_progress:         false,
        }
    }
}

impl CampaignConfig {
    /// Config with the given probability and defaults for everything else.
    pub fn new(infection_probability: f64) -> Self {
        Self { infection_probability, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_workers(mut self, worker_count: i64) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Reject out-of-range values.
    pub fn validate(&self) -> InflResult<()> {
        validate_probability(self.infection_probability)?;
        if self.chunk_size == 0 {
            return Err(InflError::InvalidParameter(
                "chunk_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The concrete number of worker threads this config asks for.
    ///
    /// Non-positive values resolve to the number of available cores
    /// (falling back to 1 if that cannot be determined).
    pub fn resolved_workers(&self) -> usize {
        if self.worker_count > 0 {
            self.worker_count as usize
        } else {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        }
    }
}

/// Check that `p` is a finite probability in `[0, 1]`.
pub fn validate_probability(p: f64) -> InflResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(InflError::InvalidParameter(format!(
            "infection probability must be in [0, 1], got {p}"
        )))
    }
}
