//! Campaign observer trait for progress reporting.

use infl_core::SimulationResult;

/// Callbacks invoked by [`Campaign::run`][crate::Campaign::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// In parallel mode `on_node_done` is called from worker threads, in
/// whatever order runs finish, hence `&self` and the `Sync` bound.  Use
/// atomics or an already thread-safe sink (e.g. a progress bar).
///
/// # Example: progress counter
///
/// ```rust,ignore
/// struct Counter(AtomicUsize);
///
/// impl CampaignObserver for Counter {
///     fn on_node_done(&self, _result: &SimulationResult) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait CampaignObserver: Sync {
    /// Called once before any node is simulated.
    fn on_campaign_start(&self, _total: usize) {}

    /// Called after each node finishes, only when the campaign was
    /// configured with `show_progress`.
    fn on_node_done(&self, _result: &SimulationResult) {}

    /// Called once after every node finished successfully.
    fn on_campaign_end(&self, _completed: usize) {}
}

/// A [`CampaignObserver`] that does nothing.
pub struct NoopObserver;

impl CampaignObserver for NoopObserver {}
