//! Per-node simulation result records.

use crate::NodeId;

/// Running maximum of concurrently infected nodes.
///
/// Ties keep the earliest iteration: [`observe`](Self::observe) only moves
/// the peak on a strict improvement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    pub infected:  u32,
    pub iteration: u32,
}

impl Peak {
    /// The seed node is infected at iteration 0, so every run starts here.
    pub const SEEDED: Peak = Peak { infected: 1, iteration: 0 };

    /// Record `infected` nodes at `iteration`; returns `true` if the peak moved.
    #[inline]
    pub fn observe(&mut self, infected: u32, iteration: u32) -> bool {
        if infected > self.infected {
            *self = Peak { infected, iteration };
            true
        } else {
            false
        }
    }
}

impl Default for Peak {
    fn default() -> Self {
        Self::SEEDED
    }
}

/// Summary of one single-seed cascade run.
///
/// Invariant: `exposed + not_exposed` equals the graph's node count.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// The seed node.
    pub node:              NodeId,
    /// Iterations executed until no node was infected.
    pub simulation_length: u32,
    /// Nodes ever infected (final state `recovered`), seed included.
    pub exposed:           u32,
    /// Nodes never reached (final state `susceptible`).
    pub not_exposed:       u32,
    pub peak_infected:     u32,
    pub peak_iteration:    u32,
}

impl SimulationResult {
    /// Column names, in the order of [`to_record`](Self::to_record).
    pub const FIELD_NAMES: [&'static str; 6] = [
        "node",
        "simulation_length",
        "exposed",
        "not_exposed",
        "peak_infected",
        "peak_iteration",
    ];

    /// Field values in column order.
    pub fn to_record(&self) -> [u32; 6] {
        [
            self.node.0,
            self.simulation_length,
            self.exposed,
            self.not_exposed,
            self.peak_infected,
            self.peak_iteration,
        ]
    }

    /// Total nodes accounted for by this result.
    #[inline]
    pub fn population(&self) -> u32 {
        self.exposed + self.not_exposed
    }
}
