//! Run summary rendering

use crate::sanitizer::SanitizeReport;
use anyhow::{Context, Result};

/// Human-readable summary naming both output files
pub fn format_text_summary(report: &SanitizeReport) -> String {
    format!(
        ">> The sanitized and normalized version of the impressions data can be found:\n\
         ** {} **\n\
         \n\
         >> The missing/invalid data from the impressions source file can be found:\n\
         ** {} **",
        report.cleansed_path.display(),
        report.invalid_path.display()
    )
}

/// Pretty-printed JSON form of the report
pub fn format_json_summary(report: &SanitizeReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize run summary")
}
