/// Error code registry for web-sanitizer
///
/// Error codes are organized by category:
/// - 1000-1999: Source lookup errors
/// - 2000-2999: Schema errors
/// - 3000-3999: Empty source errors
/// - 4000-4999: Column mismatch errors
/// - 5000-5999: CSV encoding/decoding errors
/// - 6000-6999: File I/O errors
pub struct ErrorCode;

impl ErrorCode {
    // Source lookup errors (1000-1999)
    pub const SOURCE_NOT_FOUND: u16 = 1001;
    pub const SOURCE_NOT_A_FILE: u16 = 1002;

    // Schema errors (2000-2999)
    pub const SCHEMA_MISSING_HEADER: u16 = 2001;
    pub const SCHEMA_COLUMN_COUNT: u16 = 2002;

    // Empty source errors (3000-3999)
    pub const EMPTY_NO_DATA_ROWS: u16 = 3001;

    // Column mismatch errors (4000-4999)
    pub const COLUMN_MISSING_KEYS: u16 = 4001;
    pub const COLUMN_RAGGED_ROW: u16 = 4002;

    // CSV errors (5000-5999)
    pub const CSV_READ_FAILED: u16 = 5001;
    pub const CSV_WRITE_FAILED: u16 = 5002;
    pub const CSV_INVALID_UTF8: u16 = 5003;

    // File I/O errors (6000-6999)
    pub const IO_CREATE_DIR: u16 = 6001;
    pub const IO_OPEN_OUTPUT: u16 = 6002;
    pub const IO_WRITE_OUTPUT: u16 = 6003;
    pub const IO_RESOLVE_PATH: u16 = 6004;
    pub const IO_OPEN_SOURCE: u16 = 6005;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Source file not found",
        1002 => "Source path is not a regular file",

        2001 => "Source file has no header row",
        2002 => "Header declares an unexpected number of columns",

        3001 => "Source file contains no data rows",

        4001 => "Header is missing expected column names",
        4002 => "Data row has fewer fields than the header",

        5001 => "Failed to read CSV record",
        5002 => "Failed to write CSV record",
        5003 => "CSV data is not valid UTF-8",

        6001 => "Failed to create output directory",
        6002 => "Failed to open output file",
        6003 => "Failed to write output file",
        6004 => "Failed to resolve an absolute path",
        6005 => "Failed to open source file",

        _ => "Unknown error code",
    }
}
