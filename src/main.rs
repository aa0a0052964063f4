use clap::Parser;
use web_sanitizer::app::{handle_fatal_error, init_logging, AppConfig};
use web_sanitizer::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config.with_output_dir(cli.output_dir.clone()),
        Err(e) => handle_fatal_error(e, cli.verbose),
    };

    init_logging(&config);

    if let Err(e) = execute_command(&cli, &config) {
        handle_fatal_error(e, config.verbose);
    }
}
