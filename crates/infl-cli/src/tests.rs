//! Tests for the influence-sim binary.

use std::time::Duration;

use clap::Parser;

use crate::report::format_elapsed;
use crate::logging::log_filter;
use crate::{Args, campaign_config, is_file_output};

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("influence-sim").chain(argv.iter().copied())).unwrap()
}

// ── Elapsed-time formatting ───────────────────────────────────────────────────

#[cfg(test)]
mod elapsed_tests {
    use super::*;

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(format_elapsed(Duration::from_secs(0), Some(3)), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(3725), Some(3)), "1:02:05");
    }

    #[test]
    fn fraction_truncated_not_rounded() {
        let d = Duration::from_micros(5_123_987);
        assert_eq!(format_elapsed(d, Some(3)), "0:00:05.123");
        assert_eq!(format_elapsed(d, None), "0:00:05.123987");
        assert_eq!(format_elapsed(d, Some(0)), "0:00:05");
    }

    #[test]
    fn leading_zeros_in_fraction_kept() {
        assert_eq!(format_elapsed(Duration::from_micros(1_000_050), Some(3)), "0:00:01.000");
    }

    #[test]
    fn days_prefixed() {
        assert_eq!(format_elapsed(Duration::from_secs(86_400 + 61), None), "1 day, 0:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 86_400), None), "3 days, 0:00:00");
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod args_tests {
    use std::path::Path;

    use infl_sim::ModelConfig;

    use super::*;

    #[test]
    fn defaults() {
        let a = args(&["g.gml", "m.json"]);
        assert_eq!(a.output_path, Path::new("./simulation_results/"));
        assert_eq!(a.n_jobs, 1);
        assert_eq!(a.chunksize, 1);
        assert!(!a.verbose);
        assert_eq!(a.log_level, "info");
    }

    #[test]
    fn negative_worker_count_accepted() {
        let a = args(&["g.gml", "m.json", "-n", "-1", "-c", "8", "-v", "-l", "none"]);
        assert_eq!(a.n_jobs, -1);
        assert_eq!(a.chunksize, 8);
        assert!(a.verbose);
    }

    #[test]
    fn missing_positional_rejected() {
        assert!(Args::try_parse_from(["influence-sim", "g.gml"]).is_err());
    }

    #[test]
    fn campaign_config_merges_model_and_flags() {
        let a = args(&["g.gml", "m.json", "-n", "3", "-c", "4", "-v"]);
        let model = ModelConfig::from_json_str(
            r#"{"type": "IndependentCascadeSimulator", "infection_probability": 0.25, "random_state": 9}"#,
        )
        .unwrap();
        let c = campaign_config(&a, &model);
        assert_eq!(c.infection_probability, 0.25);
        assert_eq!(c.random_seed, Some(9));
        assert_eq!(c.worker_count, 3);
        assert_eq!(c.chunk_size, 4);
        assert!(c.show_progress);
        c.validate().unwrap();
    }

    #[test]
    fn output_kind_follows_extension() {
        assert!(is_file_output(Path::new("out/results.csv")));
        assert!(!is_file_output(Path::new("./simulation_results/")));
        assert!(!is_file_output(Path::new("out")));
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod logging_tests {
    use super::*;

    #[test]
    fn none_and_disable_turn_logging_off() {
        assert!(log_filter("none").unwrap().is_none());
        assert!(log_filter("DISABLE").unwrap().is_none());
    }

    #[test]
    fn standard_levels_accepted() {
        for level in ["trace", "debug", "info", "WARN", "error"] {
            assert!(log_filter(level).unwrap().is_some(), "{level}");
        }
    }

    #[test]
    fn lines_carry_a_level_prefix() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let sink = captured.clone();
        let filter = log_filter("info").unwrap().unwrap();
        tracing::subscriber::with_default(crate::logging::subscriber(filter, move || sink.clone()), || {
            tracing::info!("Simulation time: 0:00:01.250");
            tracing::warn!("no simulation results to save");
            tracing::debug!("filtered out");
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "[INFO] Simulation time: 0:00:01.250\n[WARNING] no simulation results to save\n"
        );
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use std::fs;

    use infl_core::generate::barabasi_albert;

    use super::*;
    use crate::run;

    fn fixture(dir: &std::path::Path) -> (String, String) {
        let graph = barabasi_albert(100, 3, 3).unwrap();
        let graph_path = dir.join("ba.edgelist");
        infl_graph::save(&graph, &graph_path).unwrap();

        let config_path = dir.join("ic.json");
        fs::write(
            &config_path,
            r#"{"type": "IndependentCascadeSimulator", "infection_probability": 0.1, "random_state": 1}"#,
        )
        .unwrap();
        (graph_path.display().to_string(), config_path.display().to_string())
    }

    #[test]
    fn file_output_written() {
        let dir = tempfile::tempdir().unwrap();
        let (graph, config) = fixture(dir.path());
        let out = dir.path().join("nested/results.csv");

        run(&args(&[graph.as_str(), config.as_str(), "-o", out.to_str().unwrap(), "-n", "2", "-c", "7"])).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 101);
        assert!(text.starts_with("node,simulation_length,exposed,not_exposed,peak_infected,peak_iteration"));
    }

    #[test]
    fn sequential_and_parallel_files_identical() {
        let dir = tempfile::tempdir().unwrap();
        let (graph, config) = fixture(dir.path());
        let seq = dir.path().join("seq.csv");
        let par = dir.path().join("par.csv");

        run(&args(&[graph.as_str(), config.as_str(), "-o", seq.to_str().unwrap()])).unwrap();
        run(&args(&[graph.as_str(), config.as_str(), "-o", par.to_str().unwrap(), "-n", "4", "-c", "3"])).unwrap();

        assert_eq!(fs::read(&seq).unwrap(), fs::read(&par).unwrap());
    }

    #[test]
    fn directory_output_archived() {
        let dir = tempfile::tempdir().unwrap();
        let (graph, config) = fixture(dir.path());
        let out = dir.path().join("runs");

        run(&args(&[graph.as_str(), config.as_str(), "-o", out.to_str().unwrap()])).unwrap();

        let runs: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(runs.len(), 1);
        let name = runs[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ba_") && name.ends_with(".zip"), "{name}");
        assert!(runs[0].is_file());
    }

    #[test]
    fn unsupported_graph_format_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let (_, config) = fixture(dir.path());
        let graph = dir.path().join("graph.txt");
        fs::write(&graph, "0 1\n").unwrap();
        let out = dir.path().join("r.csv");

        assert!(run(&args(&[graph.to_str().unwrap(), config.as_str(), "-o", out.to_str().unwrap()])).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn unknown_model_type_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (graph, _) = fixture(dir.path());
        let config = dir.path().join("bad.json");
        fs::write(&config, r#"{"type": "Nope", "infection_probability": 0.1}"#).unwrap();
        let out = dir.path().join("r.csv");

        assert!(run(&args(&[graph.as_str(), config.to_str().unwrap(), "-o", out.to_str().unwrap()])).is_err());
        assert!(!out.exists());
    }
}
