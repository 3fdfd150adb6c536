//! Terminal progress bar driven by campaign callbacks.

use indicatif::{ProgressBar, ProgressStyle};

use infl_core::SimulationResult;
use infl_sim::CampaignObserver;

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} nodes ({per_sec}) ETA {eta}";

/// Advances an `indicatif` bar once per simulated node.
///
/// `ProgressBar` is internally synchronised, so worker threads report
/// through `&self` directly.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }
}

impl CampaignObserver for ProgressObserver {
    fn on_campaign_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn on_node_done(&self, _result: &SimulationResult) {
        self.bar.inc(1);
    }

    fn on_campaign_end(&self, _completed: usize) {
        self.bar.finish();
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}
