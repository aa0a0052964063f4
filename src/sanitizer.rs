//! Sanitizer run orchestration
//!
//! A run validates the source, then classifies and writes each row in
//! source order. Any fatal error stops the run immediately; rows written
//! before the failure stay in the outputs.

use crate::classify::{classify, Classification};
use crate::error::{Result, SanitizerError};
use crate::output::{OutputLayout, OutputWriter, RunIdGenerator, TimestampRunId};
use crate::record::EXPECTED_COLUMNS;
use crate::source::SourceReader;
use csv::StringRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    pub run_id: String,
    pub source: PathBuf,
    pub cleansed_path: PathBuf,
    pub invalid_path: PathBuf,
    pub valid_count: u64,
    pub invalid_count: u64,
}

impl SanitizeReport {
    pub fn total_rows(&self) -> u64 {
        self.valid_count + self.invalid_count
    }
}

/// Splits impression CSV files into cleansed and invalid outputs
pub struct Sanitizer<G = TimestampRunId> {
    layout: OutputLayout,
    run_ids: G,
}

impl Sanitizer<TimestampRunId> {
    /// Sanitizer writing under `output_root`, naming files by local time
    pub fn new(output_root: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            layout: OutputLayout::new(output_root)?,
            run_ids: TimestampRunId,
        })
    }
}

impl<G: RunIdGenerator> Sanitizer<G> {
    /// Sanitizer with an explicit run id source
    pub fn with_run_ids(layout: OutputLayout, run_ids: G) -> Self {
        Self { layout, run_ids }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Run only the source checks, without creating any output
    pub fn validate_source(&self, source: impl AsRef<Path>) -> Result<()> {
        let reader = SourceReader::open(source)?;
        debug!("Source {} passed validation", reader.path().display());
        Ok(())
    }

    /// Validate, classify and write every row of `source`
    pub fn run(&self, source: impl AsRef<Path>) -> Result<SanitizeReport> {
        let source = source.as_ref();
        let mut reader = SourceReader::open(source)?;

        let run_id = self.run_ids.next_id();
        info!("Sanitizing {} (run {})", source.display(), run_id);

        let mut writer = OutputWriter::create(self.layout.paths_for(&run_id))?;
        let projection = reader.projection().clone();
        let mut row = StringRecord::new();

        while reader.read_row(&mut row)? {
            let record = projection.project(&row).ok_or_else(|| {
                SanitizerError::ragged_row(reader.rows_read(), EXPECTED_COLUMNS, row.len())
            })?;

            let classification = classify(&record);
            if let Classification::Invalid { rejections } = &classification {
                debug!(
                    "Row {} invalid: {}",
                    reader.rows_read(),
                    rejections
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ")
                );
            }

            writer.write(&record, &classification)?;
        }

        let (paths, counts) = writer.finish()?;
        info!(
            "Finished {}: {} valid, {} invalid",
            source.display(),
            counts.valid,
            counts.invalid
        );

        Ok(SanitizeReport {
            run_id,
            source: source.to_path_buf(),
            cleansed_path: paths.cleansed,
            invalid_path: paths.invalid,
            valid_count: counts.valid,
            invalid_count: counts.invalid,
        })
    }
}
