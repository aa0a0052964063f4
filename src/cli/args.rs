//! CLI argument structures
//!
//! This module defines the command-line interface used by web-sanitizer.

use clap::Parser;
use std::path::PathBuf;

/// Produce a sanitized version of web impressions data from a CSV source file
#[derive(Parser, Debug)]
#[command(name = "web-sanitizer")]
#[command(
    about = "This program produces a sanitized version of web user impressions data from a given \
             csv source file, along with a file that contains erroneous/invalid data",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to web impressions data (csv)
    pub csv_source_file: PathBuf,

    /// Directory under which the output directories are created (defaults to current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Only validate the source file; write no output
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = Cli::try_parse_from([
            "web-sanitizer",
            "data.csv",
            "-o",
            "out",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.csv_source_file, PathBuf::from("data.csv"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.json);
        assert!(!cli.check);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_source_file_is_required() {
        assert!(Cli::try_parse_from(["web-sanitizer"]).is_err());
    }
}
