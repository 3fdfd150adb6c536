//! Unit tests for infl-model.

#[cfg(test)]
mod helpers {
    use infl_core::{Graph, GraphBuilder, NodeId, RunRng};

    use crate::IndependentCascade;

    /// Path 0 - 1 - 2 - 3.
    pub fn path4() -> Graph {
        let mut b = GraphBuilder::new(4);
        b.add_edge(NodeId(0), NodeId(1));
        b.add_edge(NodeId(1), NodeId(2));
        b.add_edge(NodeId(2), NodeId(3));
        b.build()
    }

    /// Star with hub 0 and `leaves` leaves.
    pub fn star(leaves: u32) -> Graph {
        let mut b = GraphBuilder::new(leaves as usize + 1);
        for l in 1..=leaves {
            b.add_edge(NodeId(0), NodeId(l));
        }
        b.build()
    }

    pub fn seeded(graph: &Graph, p: f64, seed: NodeId) -> IndependentCascade<'_> {
        let mut m = IndependentCascade::new(graph, p, RunRng::new(42, seed)).unwrap();
        assert!(m.infect(seed).unwrap());
        m
    }
}

// ── Construction & seeding ────────────────────────────────────────────────────

#[cfg(test)]
mod init {
    use infl_core::generate::barabasi_albert;
    use infl_core::{InflError, NodeId, RunRng};

    use super::helpers::*;
    use crate::{DiffusionModel, IndependentCascade, NodeState};

    #[test]
    fn fresh_model_is_all_susceptible_and_terminated() {
        let g = path4();
        let m = IndependentCascade::new(&g, 0.5, RunRng::new(0, NodeId(0))).unwrap();
        assert!(m.is_terminated());
        assert_eq!(m.iteration(), 0);
        assert_eq!(m.summary().susceptible, 4);
        assert!(m.states().iter().all(|&s| s == NodeState::Susceptible));
    }

    #[test]
    fn seeding_infects_exactly_one_node() {
        let g = barabasi_albert(100, 3, 11).unwrap();
        for node in (0..5).map(NodeId) {
            let m = seeded(&g, 0.1, node);
            assert_eq!(m.state(node), NodeState::Infected);
            assert_eq!(m.summary().susceptible, 99);
            assert_eq!(m.summary().infected, 1);
            assert_eq!(m.infected(), &[node]);
            assert!(!m.is_terminated());
        }
    }

    #[test]
    fn infect_twice_is_noop() {
        let g = path4();
        let mut m = seeded(&g, 0.5, NodeId(1));
        assert!(!m.infect(NodeId(1)).unwrap());
        assert_eq!(m.summary().infected, 1);
    }

    #[test]
    fn infect_out_of_range_errors() {
        let g = path4();
        let mut m = IndependentCascade::new(&g, 0.5, RunRng::new(0, NodeId(0))).unwrap();
        let err = m.infect(NodeId(4)).unwrap_err();
        assert!(matches!(err, InflError::NodeOutOfRange { count: 4, .. }));
    }

    #[test]
    fn invalid_probability_rejected() {
        let g = path4();
        for p in [-0.5, 1.5, f64::NAN] {
            let r = IndependentCascade::new(&g, p, RunRng::new(0, NodeId(0)));
            assert!(matches!(r, Err(InflError::InvalidParameter(_))), "p = {p}");
        }
    }
}

// ── Transition rule ───────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use infl_core::NodeId;

    use super::helpers::*;
    use crate::{DiffusionModel, NodeState};

    #[test]
    fn zero_probability_terminates_after_one_step() {
        let g = star(5);
        let mut m = seeded(&g, 0.0, NodeId(0));
        m.step();
        assert!(m.is_terminated());
        assert_eq!(m.iteration(), 1);
        assert_eq!(m.summary().recovered, 1);
        assert_eq!(m.summary().susceptible, 5);
        assert_eq!(m.state(NodeId(0)), NodeState::Recovered);
    }

    #[test]
    fn certain_infection_walks_a_path_one_hop_per_step() {
        let g = path4();
        let mut m = seeded(&g, 1.0, NodeId(0));
        for expected in 1..=3u32 {
            m.step();
            assert_eq!(m.iteration(), expected);
            assert_eq!(m.infected(), &[NodeId(expected)]);
            // everything behind the front has recovered
            for behind in 0..expected {
                assert_eq!(m.state(NodeId(behind)), NodeState::Recovered);
            }
        }
        m.step();
        assert!(m.is_terminated());
        assert_eq!(m.iteration(), 4);
        assert_eq!(m.summary().recovered, 4);
    }

    #[test]
    fn newly_infected_do_not_spread_in_same_step() {
        // From node 1 on the path, step 1 may only reach 0 and 2, never 3.
        let g = path4();
        let mut m = seeded(&g, 1.0, NodeId(1));
        m.step();
        assert_eq!(m.infected(), &[NodeId(0), NodeId(2)]);
        assert_eq!(m.state(NodeId(3)), NodeState::Susceptible);
    }

    #[test]
    fn hub_reaches_every_leaf_at_once() {
        let g = star(6);
        let mut m = seeded(&g, 1.0, NodeId(0));
        m.step();
        assert_eq!(m.summary().infected, 6);
        m.step();
        // leaves only neighbor the recovered hub
        assert!(m.is_terminated());
        assert_eq!(m.iteration(), 2);
        assert_eq!(m.summary().recovered, 7);
    }

    #[test]
    fn step_after_termination_is_noop() {
        let g = star(2);
        let mut m = seeded(&g, 0.0, NodeId(1));
        m.step();
        let before = (m.iteration(), m.summary());
        m.step();
        assert_eq!((m.iteration(), m.summary()), before);
    }

    #[test]
    fn self_loop_does_not_reinfect() {
        let mut b = infl_core::GraphBuilder::new(1);
        b.add_edge(NodeId(0), NodeId(0));
        let g = b.build();
        let mut m = seeded(&g, 1.0, NodeId(0));
        m.step();
        assert!(m.is_terminated());
        assert_eq!(m.state(NodeId(0)), NodeState::Recovered);
    }
}

// ── Whole-run invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use infl_core::NodeId;
    use infl_core::generate::barabasi_albert;

    use super::helpers::*;
    use crate::{DiffusionModel, NodeState};

    #[test]
    fn terminates_within_node_count_steps() {
        let g = barabasi_albert(100, 3, 5).unwrap();
        for p in [0.1, 0.3, 0.7, 1.0] {
            for seed in (0..100).step_by(7).map(NodeId) {
                let mut m = seeded(&g, p, seed);
                let mut steps = 0;
                while !m.is_terminated() {
                    m.step();
                    steps += 1;
                    assert!(steps <= g.node_count(), "p = {p}, seed = {seed}");
                    assert_eq!(m.summary().total(), 100);
                }
                assert_eq!(m.summary().infected, 0);
                assert!(m.states().iter().all(|&s| s != NodeState::Infected));
            }
        }
    }

    #[test]
    fn summary_matches_state_vector() {
        let g = barabasi_albert(60, 2, 3).unwrap();
        let mut m = seeded(&g, 0.4, NodeId(10));
        while !m.is_terminated() {
            m.step();
            let recovered = m.states().iter().filter(|&&s| s == NodeState::Recovered).count();
            let infected  = m.states().iter().filter(|&&s| s == NodeState::Infected).count();
            assert_eq!(m.summary().count(NodeState::Recovered) as usize, recovered);
            assert_eq!(m.summary().count(NodeState::Infected) as usize, infected);
        }
    }

    #[test]
    fn same_seed_same_run() {
        let g = barabasi_albert(80, 3, 8).unwrap();
        let run = || {
            let mut m = seeded(&g, 0.3, NodeId(4));
            while !m.is_terminated() {
                m.step();
            }
            (m.iteration(), m.states().to_vec())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn full_probability_on_connected_graph_exposes_everyone() {
        let g = barabasi_albert(40, 2, 1).unwrap();
        let mut m = seeded(&g, 1.0, NodeId(0));
        while !m.is_terminated() {
            m.step();
        }
        assert_eq!(m.summary().recovered, 40);
    }
}
