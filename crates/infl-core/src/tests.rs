//! Unit tests for infl-core.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_and_conversions() {
        let n = NodeId(7);
        assert_eq!(n.index(), 7);
        assert_eq!(usize::from(n), 7);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(NodeId(42).to_string(), "42");
    }
}

#[cfg(test)]
mod graph {
    use crate::{Graph, GraphBuilder, NodeId};

    fn triangle_with_tail() -> Graph {
        // 0 - 1 - 2 - 0, plus 2 - 3
        let mut b = GraphBuilder::new(4);
        b.add_edge(NodeId(0), NodeId(1));
        b.add_edge(NodeId(1), NodeId(2));
        b.add_edge(NodeId(2), NodeId(0));
        b.add_edge(NodeId(3), NodeId(2));
        b.build()
    }

    #[test]
    fn empty_build() {
        let g = Graph::empty();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let g = GraphBuilder::new(5).build();
        assert_eq!(g.node_count(), 5);
        assert!(g.nodes().all(|n| g.degree(n) == 0));
    }

    #[test]
    fn neighbors_sorted_and_symmetric() {
        let g = triangle_with_tail();
        assert_eq!(g.neighbors(NodeId(2)), &[NodeId(0), NodeId(1), NodeId(3)]);
        assert_eq!(g.neighbors(NodeId(3)), &[NodeId(2)]);
        for (a, b) in g.edges() {
            assert!(g.has_edge(a, b));
            assert!(g.has_edge(b, a));
        }
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut b = GraphBuilder::new(2);
        b.add_edge(NodeId(0), NodeId(1));
        b.add_edge(NodeId(1), NodeId(0));
        b.add_edge(NodeId(0), NodeId(1));
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(NodeId(0)), 1);
        assert_eq!(g.degree(NodeId(1)), 1);
    }

    #[test]
    fn self_loop_stored_once() {
        let mut b = GraphBuilder::new(2);
        b.add_edge(NodeId(1), NodeId(1));
        b.add_edge(NodeId(0), NodeId(1));
        let g = b.build();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(NodeId(1)), &[NodeId(0), NodeId(1)]);
    }

    #[test]
    fn add_edge_grows_node_range() {
        let mut b = GraphBuilder::new(0);
        b.add_edge(NodeId(0), NodeId(4));
        let g = b.build();
        assert_eq!(g.node_count(), 5);
        assert!(g.has_edge(NodeId(4), NodeId(0)));
    }

    #[test]
    fn add_node_is_sequential() {
        let mut b = GraphBuilder::new(2);
        assert_eq!(b.add_node(), NodeId(2));
        assert_eq!(b.add_node(), NodeId(3));
        assert_eq!(b.build().node_count(), 4);
    }

    #[test]
    fn edges_listed_low_high_ascending() {
        let g = triangle_with_tail();
        let edges: Vec<_> = g.edges().map(|(a, b)| (a.0, b.0)).collect();
        assert_eq!(edges, [(0, 1), (0, 2), (1, 2), (2, 3)]);
    }

    #[test]
    fn has_edge_out_of_range_is_false() {
        let g = triangle_with_tail();
        assert!(!g.has_edge(NodeId(0), NodeId(99)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{NodeId, RunRng};

    #[test]
    fn same_seed_and_node_same_stream() {
        let mut a = RunRng::new(42, NodeId(3));
        let mut b = RunRng::new(42, NodeId(3));
        let xs: Vec<bool> = (0..64).map(|_| a.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_nodes_different_seeds() {
        assert_ne!(RunRng::derive_seed(42, NodeId(0)), RunRng::derive_seed(42, NodeId(1)));
        assert_ne!(RunRng::derive_seed(1, NodeId(5)), RunRng::derive_seed(2, NodeId(5)));
    }

    #[test]
    fn node_zero_uses_campaign_seed() {
        assert_eq!(RunRng::derive_seed(1234, NodeId(0)), 1234);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut r = RunRng::new(7, NodeId(0));
        assert!((0..100).all(|_| !r.gen_bool(0.0)));
        assert!((0..100).all(|_| r.gen_bool(1.0)));
        // Out-of-range p is clamped rather than panicking.
        assert!(r.gen_bool(2.0));
        assert!(!r.gen_bool(-1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{CampaignConfig, InflError};

    #[test]
    fn defaults() {
        let c = CampaignConfig::default();
        assert_eq!(c.worker_count, 1);
        assert_eq!(c.chunk_size, 1);
        assert!(c.random_seed.is_none());
        assert!(!c.show_progress);
        assert_eq!(c.resolved_workers(), 1);
    }

    #[test]
    fn valid_probabilities_accepted() {
        for p in [0.0, 0.25, 1.0] {
            assert!(CampaignConfig::new(p).validate().is_ok(), "p = {p}");
        }
    }

    #[test]
    fn invalid_probabilities_rejected() {
        for p in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = CampaignConfig::new(p).validate().unwrap_err();
            assert!(matches!(err, InflError::InvalidParameter(_)), "p = {p}");
        }
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let c = CampaignConfig::new(0.5).with_chunk_size(0);
        assert!(matches!(c.validate(), Err(InflError::InvalidParameter(_))));
    }

    #[test]
    fn non_positive_workers_use_all_cores() {
        let cores = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        assert_eq!(CampaignConfig::new(0.1).with_workers(0).resolved_workers(), cores);
        assert_eq!(CampaignConfig::new(0.1).with_workers(-3).resolved_workers(), cores);
        assert_eq!(CampaignConfig::new(0.1).with_workers(4).resolved_workers(), 4);
    }
}

#[cfg(test)]
mod result {
    use crate::{NodeId, Peak, SimulationResult};

    #[test]
    fn peak_moves_only_on_strict_improvement() {
        let mut p = Peak::SEEDED;
        assert!(!p.observe(1, 3)); // tie keeps iteration 0
        assert_eq!(p, Peak { infected: 1, iteration: 0 });
        assert!(p.observe(4, 2));
        assert!(!p.observe(4, 5));
        assert!(!p.observe(2, 6));
        assert_eq!(p, Peak { infected: 4, iteration: 2 });
    }

    #[test]
    fn record_matches_field_order() {
        let r = SimulationResult {
            node:              NodeId(9),
            simulation_length: 4,
            exposed:           6,
            not_exposed:       94,
            peak_infected:     3,
            peak_iteration:    2,
        };
        assert_eq!(r.to_record(), [9, 4, 6, 94, 3, 2]);
        assert_eq!(SimulationResult::FIELD_NAMES[0], "node");
        assert_eq!(r.population(), 100);
    }
}

#[cfg(test)]
mod generate {
    use crate::generate::barabasi_albert;

    #[test]
    fn ba_dimensions() {
        let g = barabasi_albert(100, 3, 1).unwrap();
        assert_eq!(g.node_count(), 100);
        // star contributes m edges, each later node m more
        assert_eq!(g.edge_count(), 3 + (100 - 4) * 3);
        assert!(g.nodes().all(|n| g.degree(n) >= 1));
    }

    #[test]
    fn ba_is_deterministic() {
        let a = barabasi_albert(50, 2, 9).unwrap();
        let b = barabasi_albert(50, 2, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ba_rejects_bad_m() {
        assert!(barabasi_albert(10, 0, 1).is_err());
        assert!(barabasi_albert(3, 3, 1).is_err());
    }
}
