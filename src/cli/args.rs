//! Command-line argument parsing for the `pca` binary.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show the session: login prompt or dashboard (default)
    Status { no_prompt: bool },
    /// Sign in, from a pasted or given redirect URL
    Login { redirect: Option<String> },
    /// List selectable regions
    Regions { national: bool },
    /// Submit a region change request; `None` means the default region
    Submit { region: Option<String> },
    /// Forget the stored credential
    Logout,
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments that match no command
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: pca [COMMAND]

Commands:
  status [--no-prompt]   Show your region and request status (default)
  login [REDIRECT_URL]   Log in with your WCA account
  regions [--national]   List the regions you can pick
  submit [REGION]        Request a region change (default NCR)
  logout                 Forget the stored login

Options:
  -h, --help             Show this help
  -V, --version          Show the version";

/// Parse command-line arguments and return the appropriate command.
///
/// `--help` and `--version` win wherever they appear.
///
/// # Examples
///
/// ```
/// use pca_region::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pca".to_string(), "submit".to_string(), "CAR".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Submit { region: Some("CAR".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Status { no_prompt: false };
    };
    let (flags, positional): (Vec<&String>, Vec<&String>) =
        rest.iter().partition(|a| a.starts_with("--"));

    let parsed = match command.as_str() {
        "status" => only_flag(&flags, "--no-prompt").map(|no_prompt| CliCommand::Status { no_prompt }),
        "regions" => only_flag(&flags, "--national").map(|national| CliCommand::Regions { national }),
        "login" if flags.is_empty() => Some(CliCommand::Login {
            redirect: positional.first().map(|s| s.to_string()),
        }),
        "submit" if flags.is_empty() => Some(CliCommand::Submit {
            region: positional.first().map(|s| s.to_string()),
        }),
        "logout" if flags.is_empty() => Some(CliCommand::Logout),
        "help" => Some(CliCommand::Help),
        "version" => Some(CliCommand::Version),
        "--no-prompt" => Some(CliCommand::Status { no_prompt: true }),
        _ => None,
    };

    let max_positional = match command.as_str() {
        "login" | "submit" => 1,
        _ => 0,
    };
    match parsed {
        Some(cmd) if positional.len() <= max_positional => cmd,
        _ => CliCommand::Invalid(args.join(" ")),
    }
}

/// `Some(true)` if `flag` is the only flag, `Some(false)` if there are none.
fn only_flag(flags: &[&String], flag: &str) -> Option<bool> {
    match flags {
        [] => Some(false),
        [f] if f.as_str() == flag => Some(true),
        _ => None,
    }
}
