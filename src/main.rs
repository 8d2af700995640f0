use std::process::ExitCode;

use color_eyre::Result;
use pca_region::cli::{parse_args, run_cli_command, CliCommand};
use pca_region::startup::{init_logging, PcaConfig};

fn main() -> Result<ExitCode> {
    let command = parse_args(std::env::args());

    color_eyre::install()?;
    init_logging();

    let config = match PcaConfig::from_env() {
        Ok(config) => config,
        Err(e) if matches!(command, CliCommand::Version | CliCommand::Help) => {
            tracing::warn!("Ignoring configuration error: {}", e);
            PcaConfig::default()
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_cli_command(command, &config))
}
