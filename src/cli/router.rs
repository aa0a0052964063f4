//! Command execution
//!
//! Turns parsed arguments into a sanitizer run and prints the outcome.

use crate::app::AppConfig;
use crate::cli::args::Cli;
use crate::cli::summary::{format_json_summary, format_text_summary};
use crate::sanitizer::Sanitizer;
use anyhow::Result;
use tracing::debug;

/// Execute the CLI request described by `cli`
pub fn execute_command(cli: &Cli, config: &AppConfig) -> Result<()> {
    let source = config.resolve(&cli.csv_source_file);
    let sanitizer = Sanitizer::new(config.output_root())?;
    debug!(
        "Writing outputs under {}",
        sanitizer.layout().root().display()
    );

    if cli.check {
        sanitizer.validate_source(&source)?;
        println!(">> Source file \"{}\" is valid.", source.display());
        return Ok(());
    }

    let report = sanitizer.run(&source)?;
    if cli.json {
        println!("{}", format_json_summary(&report)?);
    } else {
        println!("{}", format_text_summary(&report));
    }

    Ok(())
}
