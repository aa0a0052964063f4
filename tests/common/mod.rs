//! Common test utilities and helpers
#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SOURCE_HEADER: &str = "ts,domain,city,country,browser_version,os_version,device";
pub const OUTPUT_HEADER: &str = "date_time,domain,city,country,browser_version,os_version,device";

/// Path to a checked-in CSV fixture
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy a fixture into a scratch directory so relative outputs stay isolated
pub fn scratch_with_fixture(name: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let dest = temp_dir.path().join(name);
    fs::copy(fixture(name), &dest)?;
    Ok((temp_dir, dest))
}

/// Read a CSV file into its header and data rows
pub fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok((header, rows))
}

/// Number of regular files directly inside `dir`, zero if it does not exist
pub fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).count())
        .unwrap_or(0)
}
