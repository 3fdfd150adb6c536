//! The `DiffusionModel` trait: one stepped run of a spreading process.

use infl_core::NodeId;

use crate::{NodeState, StateSummary};

/// A discrete-time spreading process driven one iteration at a time.
///
/// Implementations own all per-run mutable state.  Node simulators only
/// need this trait, so new spreading rules plug in without touching the
/// orchestration code.
///
/// # Example
///
/// ```rust,ignore
/// while !model.is_terminated() {
///     model.step();
///     println!("iteration {}: {:?}", model.iteration(), model.summary());
/// }
/// ```
pub trait DiffusionModel {
    /// Advance the process by one iteration.
    ///
    /// Calling `step` on a terminated model is a no-op.
    fn step(&mut self);

    /// `true` once no further transitions are possible.
    fn is_terminated(&self) -> bool;

    /// Iterations executed so far.
    fn iteration(&self) -> u32;

    /// Current state of `node`.
    ///
    /// # Panics
    /// Panics if `node` is outside the model's graph.
    fn state(&self, node: NodeId) -> NodeState;

    /// Current per-state node counts.
    fn summary(&self) -> StateSummary;
}
