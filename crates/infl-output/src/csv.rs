//! CSV output backend.
//!
//! One header row of [`SimulationResult::FIELD_NAMES`], then one row per
//! result in the order written.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use infl_core::SimulationResult;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes simulation results as comma-separated rows.
pub struct CsvWriter<W: Write = File> {
    inner:    Writer<W>,
    rows:     usize,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(SimulationResult::FIELD_NAMES)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &[SimulationResult]) -> OutputResult<()> {
        for r in results {
            self.inner.write_record(r.to_record().map(|v| v.to_string()))?;
        }
        self.rows += results.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
