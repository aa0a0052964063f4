//! Source file validation and reading
//!
//! [`SourceReader::open`] runs every pre-check before handing out rows: the
//! path must be a regular file, the header must declare exactly
//! [`EXPECTED_COLUMNS`] columns that cover every canonical key, and at least
//! one data row must follow. The first data row is peeked and kept, so the
//! file is read in a single forward pass.

use crate::error::{ErrorCode, Result, SanitizerError};
use crate::record::{HeaderProjection, EXPECTED_COLUMNS};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Validated source file positioned at its first data row
#[derive(Debug)]
pub struct SourceReader {
    path: PathBuf,
    reader: Reader<File>,
    projection: HeaderProjection,
    peeked: Option<StringRecord>,
    rows_read: u64,
}

impl SourceReader {
    /// Open and validate a source file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = check_file_exists(path)?;

        if metadata.len() == 0 {
            return Err(SanitizerError::missing_header(path));
        }

        let file = File::open(path).map_err(|e| {
            SanitizerError::io(
                ErrorCode::IO_OPEN_SOURCE,
                "failed to open source file",
                path,
                e,
            )
        })?;

        // Field counts are checked per row so a ragged row surfaces as a
        // column mismatch rather than a generic parse failure.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = reader.headers()?.clone();
        let projection = check_header(path, &header)?;
        debug!(
            "Validated header of {}: {:?}",
            path.display(),
            header.iter().collect::<Vec<_>>()
        );

        let mut first = StringRecord::new();
        if !reader.read_record(&mut first)? {
            return Err(SanitizerError::empty_source(path));
        }
        trace!("Peeked first data row of {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            projection,
            peeked: Some(first),
            rows_read: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column positions of the canonical fields in this source
    pub fn projection(&self) -> &HeaderProjection {
        &self.projection
    }

    /// Number of data rows handed out so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Read the next data row into `row`
    ///
    /// Returns `Ok(false)` at end of file. A row too short to hold every
    /// header column is a fatal column mismatch; trailing extra fields are
    /// kept in `row` and ignored by the header projection.
    pub fn read_row(&mut self, row: &mut StringRecord) -> Result<bool> {
        match self.peeked.take() {
            Some(first) => *row = first,
            None => {
                if !self.reader.read_record(row)? {
                    return Ok(false);
                }
            }
        }

        self.rows_read += 1;
        if row.len() < EXPECTED_COLUMNS {
            return Err(SanitizerError::ragged_row(
                self.rows_read,
                EXPECTED_COLUMNS,
                row.len(),
            ));
        }

        Ok(true)
    }
}

/// Confirm the path resolves to an existing regular file
pub fn check_file_exists(path: &Path) -> Result<fs::Metadata> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata),
        Ok(_) => Err(SanitizerError::not_a_file(path)),
        Err(_) => Err(SanitizerError::not_found(path)),
    }
}

/// Check column count and canonical key coverage of a source header
pub fn check_header(path: &Path, header: &StringRecord) -> Result<HeaderProjection> {
    if header.is_empty() {
        return Err(SanitizerError::missing_header(path));
    }

    if header.len() != EXPECTED_COLUMNS {
        return Err(SanitizerError::column_count(
            path,
            EXPECTED_COLUMNS,
            header.len(),
        ));
    }

    HeaderProjection::from_header(header)
        .map_err(|missing| SanitizerError::missing_columns(&missing))
}
