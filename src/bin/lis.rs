use std::io;
use std::process::ExitCode;

use clap::Parser;
use lis_dp::cli::{self, CliConfig};

fn main() -> ExitCode {
    let config = CliConfig::parse();
    cli::init_logger(config.verbose);
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli::run(&config, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "exiting with failure");
            eprintln!("lis: {err:#}");
            ExitCode::FAILURE
        }
    }
}
