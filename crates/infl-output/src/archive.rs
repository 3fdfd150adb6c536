//! Run archives: results plus the model configuration that produced them.
//!
//! ```text
//! <output_dir>/<graph_stem>_<YYYY-mm-dd-HH:MM:SS>.zip
//!   simulation_results.csv
//!   model_config.json
//! ```
//!
//! The timestamp is local time at the moment of saving.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use infl_core::SimulationResult;

use crate::csv::CsvWriter;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

pub const RESULTS_FILE: &str = "simulation_results.csv";
pub const CONFIG_FILE: &str = "model_config.json";

const STAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// Write `results` and a copy of the model config into a fresh, timestamped
/// zip archive under `output_dir`, and return the archive's path.
///
/// The archive is built in a temporary file next to its target and renamed
/// into place once complete; on error the temporary file is removed and no
/// archive appears.
pub fn save_archive(
    results:           &[SimulationResult],
    output_dir:        &Path,
    graph_path:        &Path,
    model_config_path: &Path,
) -> OutputResult<PathBuf> {
    fs::create_dir_all(output_dir)?;
    if results.is_empty() {
        warn!(dir = %output_dir.display(), "no simulation results to save");
    }

    let mut config = File::open(model_config_path).map_err(|source| OutputError::ArchiveInput {
        path: model_config_path.to_path_buf(),
        source,
    })?;

    let staging = tempfile::NamedTempFile::new_in(output_dir)?;
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(staging.as_file());

    zip.start_file(RESULTS_FILE, options)?;
    let mut writer = CsvWriter::from_writer(&mut zip)?;
    writer.write_results(results)?;
    writer.finish()?;
    drop(writer);

    zip.start_file(CONFIG_FILE, options)?;
    io::copy(&mut config, &mut zip).map_err(|source| OutputError::ArchiveInput {
        path: model_config_path.to_path_buf(),
        source,
    })?;
    zip.finish()?;

    let stamp = Local::now().format(STAMP_FORMAT).to_string();
    let target = archive_path(output_dir, graph_path, &stamp);
    staging
        .persist_noclobber(&target)
        .map_err(|e| OutputError::Persist { path: target.clone(), source: e.error })?;

    info!(path = %target.display(), rows = results.len(), "saved run archive");
    Ok(target)
}

/// `<output_dir>/<graph_stem>_<stamp>.zip`, with a numeric suffix on the
/// stem if that file already exists.
pub fn archive_path(output_dir: &Path, graph_path: &Path, stamp: &str) -> PathBuf {
    let stem = graph_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    let base = format!("{stem}_{stamp}");
    let mut candidate = output_dir.join(format!("{base}.zip"));
    let mut n = 1;
    while candidate.exists() {
        candidate = output_dir.join(format!("{base}-{n}.zip"));
        n += 1;
    }
    candidate
}
