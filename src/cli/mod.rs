//! CLI module for the `pca` binary.
//!
//! - [`args`] - argument parsing into [`CliCommand`]
//! - [`commands`] - the commands themselves, run against an `App`
//! - [`version`] - version display
//!
//! # Usage
//!
//! ```ignore
//! use pca_region::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! let code = runtime.block_on(run_cli_command(command, &config))?;
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::CommandReport;
pub use version::{version_line, VERSION};

use std::process::ExitCode;

use color_eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::app::App;
use crate::cli_output::{paragraph, print_lines, step_line};
use crate::startup::PcaConfig;

/// Exit status for unusable arguments.
pub const EXIT_USAGE: u8 = 2;

/// Run `command` and print its output.
///
/// Command failures are reported on stdout and mapped to exit code 1;
/// only unexpected failures (reading stdin) surface as `Err`.
pub async fn run_cli_command(command: CliCommand, config: &PcaConfig) -> Result<ExitCode> {
    let report = match command {
        CliCommand::Version => CommandReport {
            lines: vec![version_line()],
            success: true,
        },
        CliCommand::Help => CommandReport {
            lines: vec![USAGE.to_string()],
            success: true,
        },
        CliCommand::Invalid(args) => {
            eprintln!("Unrecognized arguments: {}", args);
            eprintln!();
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        command => match App::from_config(config) {
            Ok(mut app) => run_app_command(command, &mut app, config).await?,
            Err(err) => CommandReport::from_error(&err),
        },
    };

    print_lines(&report.lines);
    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_app_command(command: CliCommand, app: &mut App, config: &PcaConfig) -> Result<CommandReport> {
    let report = match command {
        CliCommand::Status { no_prompt } => commands::status(app, no_prompt).await,
        CliCommand::Login { redirect: Some(redirect) } => commands::login(app, &redirect).await,
        CliCommand::Login { redirect: None } => {
            if app.cache().is_logged_in() {
                commands::status(app, false).await
            } else {
                let redirect = prompt_for_redirect(config).await?;
                commands::login(app, &redirect).await
            }
        }
        CliCommand::Regions { national } => commands::regions(app, national).await,
        CliCommand::Submit { region } => commands::submit(app, region.as_deref()).await,
        CliCommand::Logout => commands::logout(app),
        CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_) => CommandReport {
            lines: Vec::new(),
            success: true,
        },
    };
    Ok(report)
}

/// Show the authorize link, open it if allowed, and read back the address
/// the browser was redirected to.
async fn prompt_for_redirect(config: &PcaConfig) -> Result<String> {
    let link = config.authorize_link();
    let mut lines = vec![step_line("→", "Log in with your WCA account:")];
    lines.push(format!("    {}", link));
    lines.push(String::new());
    lines.extend(paragraph(
        "After approving, copy the address your browser lands on and paste it here.",
        2,
    ));
    print_lines(&lines);

    if config.open_browser {
        if let Err(e) = open::that(&link) {
            warn!("Could not open a browser: {}", e);
        }
    }

    let mut input = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
