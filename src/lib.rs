//! # web-sanitizer
//!
//! Splits a CSV file of web impression records into a sanitized file of
//! valid rows and a file of missing/invalid rows.
//!
//! ## Usage
//!
//! ```bash
//! web-sanitizer impressions.csv [-o DIR] [--json] [--check] [-v]
//! ```
//!
//! ## Modules
//!
//! - `record` - Canonical field names, output header and header projection
//! - `source` - Source file checks and single-pass row reading
//! - `classify` - Per-row field predicates
//! - `output` - Output layout, run ids and CSV writing
//! - `sanitizer` - Orchestration of a full run
//! - `error` - Fatal error taxonomy with codes
//! - `app` - Configuration, logging and fatal error reporting
//! - `cli` - Argument parsing and summary rendering
pub mod app;
pub mod classify;
pub mod cli;
pub mod error;
pub mod output;
pub mod record;
pub mod sanitizer;
pub mod source;

pub use classify::{classify, Classification, Rejection};
pub use error::{Result, SanitizerError};
pub use output::{FixedRunId, OutputLayout, RunIdGenerator, TimestampRunId};
pub use record::Record;
pub use sanitizer::{SanitizeReport, Sanitizer};
