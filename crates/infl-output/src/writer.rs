//! The `OutputWriter` trait implemented by result sinks.

use infl_core::SimulationResult;

use crate::OutputResult;

/// A sink for ordered simulation results.
pub trait OutputWriter {
    /// Append a batch of results, preserving their order.
    fn write_results(&mut self, results: &[SimulationResult]) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
