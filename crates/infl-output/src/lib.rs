//! `infl-output`: writing simulation results.
//!
//! | Item                | Purpose                                                   |
//! |---------------------|-----------------------------------------------------------|
//! | [`CsvWriter`]       | Streaming CSV writer implementing [`OutputWriter`]        |
//! | [`save_results`]    | Write a complete result set to one CSV file               |
//! | [`save_archive`]    | Zip results plus the model config into a run archive      |
//!
//! Both `save_*` functions write to a temporary location next to the target
//! and move it into place only once complete, so a failed save never leaves
//! a partial file behind.
//!
//! # Usage
//!
//! ```rust,ignore
//! let results = campaign.run(&*sim, &NoopObserver)?;
//! infl_output::save_results(&results, Path::new("out/results.csv"))?;
//! ```

pub mod archive;
pub mod csv;
pub mod error;
pub mod writer;


use std::fs;
use std::path::Path;

use tracing::{info, warn};

use infl_core::SimulationResult;

pub use archive::save_archive;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::OutputWriter;

/// Write `results` as CSV to `path`, creating parent directories.
///
/// An empty collection logs a warning and still produces a header-only file.
pub fn save_results(results: &[SimulationResult], path: &Path) -> OutputResult<()> {
    if results.is_empty() {
        warn!(path = %path.display(), "no simulation results to save");
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let staging = tempfile::NamedTempFile::new_in(dir)?;
    let mut writer = CsvWriter::from_writer(staging.as_file())?;
    writer.write_results(results)?;
    writer.finish()?;
    drop(writer);

    staging
        .persist(path)
        .map_err(|e| OutputError::Persist { path: path.to_path_buf(), source: e.error })?;

    info!(path = %path.display(), rows = results.len(), "saved simulation results");
    Ok(())
}
