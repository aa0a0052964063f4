use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Fatal errors for a sanitizer run
///
/// Every variant aborts the whole run. Rows that fail field validation are
/// routed to the invalid-data output and never surface as an error.
#[derive(Error, Debug)]
pub enum SanitizerError {
    #[error("[E{code:04}] File \"{}\" not found", path.display())]
    NotFound { code: u16, path: PathBuf },

    #[error("[E{code:04}] Schema error in \"{}\": {message}", path.display())]
    Schema {
        code: u16,
        message: String,
        path: PathBuf,
    },

    #[error("[E{code:04}] File \"{}\" does not contain any data", path.display())]
    EmptySource { code: u16, path: PathBuf },

    #[error("[E{code:04}] Column mismatch: {message}")]
    ColumnMismatch {
        code: u16,
        message: String,
        row: Option<u64>,
    },

    #[error("[E{code:04}] CSV error: {message}")]
    Csv {
        code: u16,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    #[error("[E{code:04}] I/O error: {message}")]
    Io {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl SanitizerError {
    /// Create a not-found error for a source path
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            code: ErrorCode::SOURCE_NOT_FOUND,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a not-found error for a path that exists but is not a file
    pub fn not_a_file(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            code: ErrorCode::SOURCE_NOT_A_FILE,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a schema error for a source without a header row
    pub fn missing_header(path: impl AsRef<Path>) -> Self {
        Self::Schema {
            code: ErrorCode::SCHEMA_MISSING_HEADER,
            message: "no column headings found in source file".to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a schema error for a header with the wrong column count
    pub fn column_count(path: impl AsRef<Path>, expected: usize, found: usize) -> Self {
        Self::Schema {
            code: ErrorCode::SCHEMA_COLUMN_COUNT,
            message: format!("expected {} columns, but found {}", expected, found),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an empty-source error
    pub fn empty_source(path: impl AsRef<Path>) -> Self {
        Self::EmptySource {
            code: ErrorCode::EMPTY_NO_DATA_ROWS,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a column mismatch for header keys that are not present
    pub fn missing_columns(missing: &[&str]) -> Self {
        Self::ColumnMismatch {
            code: ErrorCode::COLUMN_MISSING_KEYS,
            message: format!(
                "could not find expected column heading(s) {}, please check source file",
                missing.join(", ")
            ),
            row: None,
        }
    }

    /// Create a column mismatch for a data row with the wrong field count
    pub fn ragged_row(row: u64, expected: usize, found: usize) -> Self {
        Self::ColumnMismatch {
            code: ErrorCode::COLUMN_RAGGED_ROW,
            message: format!(
                "data row {} has {} fields, expected {}",
                row, found, expected
            ),
            row: Some(row),
        }
    }

    /// Create a CSV error with a specific code
    pub fn csv(code: u16, message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            code,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an I/O error with a specific code and path
    pub fn io(
        code: u16,
        message: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            code,
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source: Some(source),
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Schema { .. } => 3,
            Self::EmptySource { .. } => 4,
            Self::ColumnMismatch { .. } => 5,
            Self::Csv { .. } => 6,
            Self::Io { .. } => 7,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::NotFound { code, .. }
            | Self::Schema { code, .. }
            | Self::EmptySource { code, .. }
            | Self::ColumnMismatch { code, .. }
            | Self::Csv { code, .. }
            | Self::Io { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path, .. } => {
                format!(">> Error: file \"{}\" not found!", path.display())
            }
            Self::Schema { message, .. } => format!(">> Error: {}!", message),
            Self::EmptySource { path, .. } => format!(
                ">> Error: file \"{}\" does not contain any data!",
                path.display()
            ),
            Self::ColumnMismatch { message, .. } => format!(">> Error: {}", message),
            Self::Csv { message, .. } => format!(">> Error: malformed CSV data: {}", message),
            Self::Io { message, path, .. } => match path {
                Some(p) => format!(">> Error: {} ({})", message, p.display()),
                None => format!(">> Error: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg.push_str(&format!(
            "\n  code: E{:04} ({})",
            self.code(),
            describe_error_code(self.code())
        ));
        msg
    }
}

/// Type alias for Results using SanitizerError
pub type Result<T> = std::result::Result<T, SanitizerError>;

impl From<csv::Error> for SanitizerError {
    fn from(err: csv::Error) -> Self {
        let code = match err.kind() {
            csv::ErrorKind::Utf8 { .. } => ErrorCode::CSV_INVALID_UTF8,
            _ => ErrorCode::CSV_READ_FAILED,
        };
        let message = err.to_string();
        SanitizerError::csv(code, message, err)
    }
}
