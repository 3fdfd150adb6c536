//! `infl-core`: foundational types for the influence simulator.
//!
//! This crate is a dependency of every other `infl-*` crate.  It has no
//! `infl-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                                |
//! | [`graph`]    | `Graph` (undirected CSR), `GraphBuilder`                |
//! | [`rng`]      | `RunRng` (per-run), `draw_campaign_seed`                |
//! | [`config`]   | `CampaignConfig`                                        |
//! | [`result`]   | `SimulationResult`, `Peak`                              |
//! | [`generate`] | Deterministic random graph generators                   |
//! | [`error`]    | `InflError`, `InflResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and result types. |

pub mod config;
pub mod error;
pub mod generate;
pub mod graph;
pub mod ids;
pub mod result;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CampaignConfig;
pub use error::{InflError, InflResult};
pub use graph::{Graph, GraphBuilder};
pub use ids::NodeId;
pub use result::{Peak, SimulationResult};
pub use rng::{RunRng, draw_campaign_seed};
