//! `infl-model`: cascade state machines.
//!
//! A diffusion model owns the mutable state of exactly one run: the per-node
//! state vector, the iteration counter, and a private [`RunRng`].  It borrows
//! the graph read-only, so any number of runs can share one `Graph` across
//! threads without synchronisation.
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`state`]   | `NodeState`, `StateSummary`                       |
//! | [`model`]   | `DiffusionModel` trait                            |
//! | [`cascade`] | `IndependentCascade`                              |
//!
//! [`RunRng`]: infl_core::RunRng

pub mod cascade;
pub mod model;
pub mod state;

#[cfg(test)]
mod tests;

pub use cascade::IndependentCascade;
pub use model::DiffusionModel;
pub use state::{NodeState, StateSummary};
