//! Output file layout and writing
//!
//! Valid rows land in `<root>/normalized_cleansed_data/<id>_normalized.csv`
//! and invalid rows in `<root>/missing_invalid_data/<id>_invalid.csv`. The
//! run id comes from a [`RunIdGenerator`] so tests can pin file names.

use crate::classify::Classification;
use crate::error::{ErrorCode, Result, SanitizerError};
use crate::record::{Record, OUTPUT_HEADER};
use csv::{Terminator, Writer, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory for rows that pass every field check
pub const CLEANSED_DIR: &str = "normalized_cleansed_data";

/// Directory for rows that fail at least one field check
pub const INVALID_DIR: &str = "missing_invalid_data";

/// Source of the identifier embedded in output file names
pub trait RunIdGenerator {
    fn next_id(&self) -> String;
}

/// Local wall-clock time formatted as `YYYYMMDD_HHMMSS`
///
/// Two runs started within the same second share an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampRunId;

impl RunIdGenerator for TimestampRunId {
    fn next_id(&self) -> String {
        chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
    }
}

/// Always returns the same id
#[derive(Debug, Clone)]
pub struct FixedRunId(pub String);

impl FixedRunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl RunIdGenerator for FixedRunId {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}

/// Root directory under which both output directories live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Create a layout rooted at `root`, resolved to an absolute path
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|e| {
            SanitizerError::io(
                ErrorCode::IO_RESOLVE_PATH,
                "failed to resolve output directory",
                root,
                e,
            )
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cleansed_dir(&self) -> PathBuf {
        self.root.join(CLEANSED_DIR)
    }

    pub fn invalid_dir(&self) -> PathBuf {
        self.root.join(INVALID_DIR)
    }

    /// Output file paths for a given run id
    pub fn paths_for(&self, run_id: &str) -> OutputPaths {
        OutputPaths {
            cleansed: self
                .cleansed_dir()
                .join(format!("{}_normalized.csv", run_id)),
            invalid: self.invalid_dir().join(format!("{}_invalid.csv", run_id)),
        }
    }
}

/// Absolute paths of the two output files of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub cleansed: PathBuf,
    pub invalid: PathBuf,
}

/// Row counts written by an [`OutputWriter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutputCounts {
    pub valid: u64,
    pub invalid: u64,
}

/// Appends classified records to the cleansed and invalid files
///
/// Both files are opened once, in append mode, and closed when the writer is
/// dropped. Every row is flushed as soon as it is written.
pub struct OutputWriter {
    paths: OutputPaths,
    cleansed: Writer<File>,
    invalid: Writer<File>,
    counts: OutputCounts,
}

impl OutputWriter {
    /// Create output directories, open both files and write their headers
    pub fn create(paths: OutputPaths) -> Result<Self> {
        let mut cleansed = open_output(&paths.cleansed)?;
        let mut invalid = open_output(&paths.invalid)?;

        write_row(&mut cleansed, &paths.cleansed, OUTPUT_HEADER.iter())?;
        write_row(&mut invalid, &paths.invalid, OUTPUT_HEADER.iter())?;
        debug!(
            "Opened outputs {} and {}",
            paths.cleansed.display(),
            paths.invalid.display()
        );

        Ok(Self {
            paths,
            cleansed,
            invalid,
            counts: OutputCounts::default(),
        })
    }

    pub fn counts(&self) -> OutputCounts {
        self.counts
    }

    /// Append a record to the output matching its classification
    pub fn write(&mut self, record: &Record<'_>, classification: &Classification) -> Result<()> {
        if classification.is_valid() {
            self.write_valid(record)
        } else {
            self.write_invalid(record)
        }
    }

    pub fn write_valid(&mut self, record: &Record<'_>) -> Result<()> {
        write_row(&mut self.cleansed, &self.paths.cleansed, record.values())?;
        self.counts.valid += 1;
        Ok(())
    }

    pub fn write_invalid(&mut self, record: &Record<'_>) -> Result<()> {
        write_row(&mut self.invalid, &self.paths.invalid, record.values())?;
        self.counts.invalid += 1;
        Ok(())
    }

    /// Flush and close both files
    pub fn finish(mut self) -> Result<(OutputPaths, OutputCounts)> {
        flush(&mut self.cleansed, &self.paths.cleansed)?;
        flush(&mut self.invalid, &self.paths.invalid)?;
        Ok((self.paths, self.counts))
    }
}

fn open_output(path: &Path) -> Result<Writer<File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SanitizerError::io(
                ErrorCode::IO_CREATE_DIR,
                "failed to create output directory",
                parent,
                e,
            )
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SanitizerError::io(ErrorCode::IO_OPEN_OUTPUT, "failed to open output file", path, e)
        })?;

    Ok(WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(file))
}

fn write_row<I, T>(writer: &mut Writer<File>, path: &Path, fields: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer.write_record(fields).map_err(|e| {
        SanitizerError::csv(
            ErrorCode::CSV_WRITE_FAILED,
            format!("failed to write row to {}", path.display()),
            e,
        )
    })?;
    flush(writer, path)?;
    trace!("Wrote row to {}", path.display());
    Ok(())
}

fn flush(writer: &mut Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| {
        SanitizerError::io(ErrorCode::IO_WRITE_OUTPUT, "failed to flush output file", path, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: [&str; 7] = [
        "2021-01-01 10:00:00",
        "x.com",
        "NYC",
        "US",
        "1",
        "1",
        "mobile",
    ];

    #[test]
    fn test_paths_for_run_id() {
        let layout = OutputLayout::new("/data").unwrap();
        let paths = layout.paths_for("20210101_100000");

        assert_eq!(
            paths.cleansed,
            PathBuf::from("/data/normalized_cleansed_data/20210101_100000_normalized.csv")
        );
        assert_eq!(
            paths.invalid,
            PathBuf::from("/data/missing_invalid_data/20210101_100000_invalid.csv")
        );
    }

    #[test]
    fn test_relative_root_becomes_absolute() {
        let layout = OutputLayout::new("out").unwrap();
        assert!(layout.root().is_absolute());
        assert!(layout.paths_for("id").cleansed.is_absolute());
    }

    #[test]
    fn test_timestamp_run_id_format() {
        let id = TimestampRunId.next_id();
        assert_eq!(id.len(), 15);
        assert_eq!(&id[8..9], "_");
        assert!(id
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 8 { c == '_' } else { c.is_ascii_digit() }));
    }

    #[test]
    fn test_create_writes_headers_and_directories() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path()).unwrap();
        let writer = OutputWriter::create(layout.paths_for("run")).unwrap();
        let (paths, counts) = writer.finish().unwrap();

        assert_eq!(counts, OutputCounts::default());
        for path in [&paths.cleansed, &paths.invalid] {
            let content = fs::read_to_string(path).unwrap();
            assert_eq!(
                content,
                "date_time,domain,city,country,browser_version,os_version,device\r\n"
            );
        }
    }

    #[test]
    fn test_records_routed_by_classification() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path()).unwrap();
        let mut writer = OutputWriter::create(layout.paths_for("run")).unwrap();

        let valid = Record::new(VALID);
        let mut fields = VALID;
        fields[3] = "USA";
        let invalid = Record::new(fields);

        writer.write(&valid, &Classification::Valid).unwrap();
        writer
            .write(
                &invalid,
                &Classification::Invalid {
                    rejections: vec![crate::classify::Rejection::MalformedCountry],
                },
            )
            .unwrap();
        let (paths, counts) = writer.finish().unwrap();

        assert_eq!(counts, OutputCounts { valid: 1, invalid: 1 });
        let cleansed = fs::read_to_string(&paths.cleansed).unwrap();
        let invalid = fs::read_to_string(&paths.invalid).unwrap();
        assert!(cleansed.ends_with("2021-01-01 10:00:00,x.com,NYC,US,1,1,mobile\r\n"));
        assert!(invalid.ends_with("2021-01-01 10:00:00,x.com,NYC,USA,1,1,mobile\r\n"));
    }

    #[test]
    fn test_values_needing_quotes_round_trip() {
        let dir = TempDir::new().unwrap();
        let layout = OutputLayout::new(dir.path()).unwrap();
        let mut writer = OutputWriter::create(layout.paths_for("run")).unwrap();

        let mut fields = VALID;
        fields[2] = "New York, NY";
        fields[6] = "say \"hi\"";
        writer.write_valid(&Record::new(fields)).unwrap();
        let (paths, _) = writer.finish().unwrap();

        let mut reader = csv::Reader::from_path(&paths.cleansed).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "New York, NY");
        assert_eq!(&rows[0][6], "say \"hi\"");
    }
}
