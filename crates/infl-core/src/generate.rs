//! Deterministic random graph generators for tests, demos, and benchmarks.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Graph, GraphBuilder, InflError, InflResult, NodeId};

/// Barabási–Albert preferential-attachment graph with `n` nodes.
///
/// Starts from a star on `m + 1` nodes; every later node attaches to `m`
/// distinct existing nodes chosen with probability proportional to degree.
/// The same `(n, m, seed)` always yields the same graph.
///
/// # Errors
/// [`InflError::InvalidParameter`] unless `1 <= m < n`.
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> InflResult<Graph> {
    if m < 1 || m >= n {
        return Err(InflError::InvalidParameter(format!(
            "Barabási–Albert network must have m >= 1 and m < n, got m = {m}, n = {n}"
        )));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = GraphBuilder::with_capacity(n, (n - m) * m);

    // Star: hub 0 joined to 1..=m.
    let mut repeated: Vec<NodeId> = Vec::with_capacity(2 * n * m);
    for leaf in 1..=m as u32 {
        b.add_edge(NodeId(0), NodeId(leaf));
        repeated.push(NodeId(0));
        repeated.push(NodeId(leaf));
    }

    let mut targets: Vec<NodeId> = Vec::with_capacity(m);
    for source in (m + 1) as u32..n as u32 {
        targets.clear();
        while targets.len() < m {
            // `repeated` is never empty here: the star seeded it.
            if let Some(&t) = repeated.choose(&mut rng) {
                if !targets.contains(&t) {
                    targets.push(t);
                }
            }
        }
        for &t in &targets {
            b.add_edge(NodeId(source), t);
        }
        repeated.extend_from_slice(&targets);
        repeated.extend(std::iter::repeat_n(NodeId(source), m));
    }

    Ok(b.build())
}
