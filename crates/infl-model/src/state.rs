//! Per-node cascade state.

use std::fmt;

/// Lifecycle of one node within one run.
///
/// Transitions only go forward: `Susceptible → Infected → Recovered`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum NodeState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl NodeState {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeState::Susceptible => "susceptible",
            NodeState::Infected    => "infected",
            NodeState::Recovered   => "recovered",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node counts per state.  Always sums to the graph's node count.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StateSummary {
    pub susceptible: u32,
    pub infected:    u32,
    pub recovered:   u32,
}

impl StateSummary {
    pub fn total(&self) -> u32 {
        self.susceptible + self.infected + self.recovered
    }

    pub fn count(&self, state: NodeState) -> u32 {
        match state {
            NodeState::Susceptible => self.susceptible,
            NodeState::Infected    => self.infected,
            NodeState::Recovered   => self.recovered,
        }
    }
}
