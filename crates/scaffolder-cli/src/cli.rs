use std::ffi::OsString;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use crate::commands;
use crate::context::CliSession;
use crate::error::{CliError, ExitStatus};
use crate::formatter::{OutputFormat, emit_result};
use crate::util::Verbosity;

const NAME: &str = "scaffolder";

pub fn run() -> ExitCode {
    match run_cli(std::env::args()) {
        Ok(code) => code,
        Err(err) => {
            err.print();
            err.exit_code()
        }
    }
}

/// Parses CLI arguments, loads configuration, and dispatches to the matching
/// command. Returns a `sysexits`-compatible `ExitCode`.
pub fn run_cli<I, S>(args: I) -> Result<ExitCode, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let command = build_cli();
    let matches = command.try_get_matches_from(args)?;

    let verbosity = Verbosity {
        json: matches.get_flag("json"),
        verbose: matches.get_flag("verbose"),
    };
    init_tracing(verbosity);
    let output = if verbosity.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let config_override = matches.get_one::<String>("config").cloned();
    let templates_override = matches.get_one::<String>("templates").cloned();
    let session = CliSession::bootstrap(config_override, templates_override, verbosity)?;
    if session.verbosity.verbose {
        tracing::info!(
            config = %session
                .config
                .source
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<defaults>".to_string()),
            templates_root = %session.templates_root.display(),
            output_directories = session.output_directories().len(),
            "resolved scaffolder configuration"
        );
    }

    let result = dispatch(&session, &matches)?;
    emit_result(result, output)
}

fn init_tracing(verbosity: Verbosity) {
    let default_level = if verbosity.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_cli() -> Command {
    Command::new(NAME)
        .about("Generate files from name-substituted templates")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Path to scaffolder.yaml. Defaults to the nearest one in the current directory or its ancestors."),
        )
        .arg(
            Arg::new("templates")
                .long("templates")
                .value_name("PATH")
                .global(true)
                .help("Override the templates root directory."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Emit JSON instead of human-readable text."),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Log resolved configuration and template paths."),
        )
        .subcommand_required(true)
        .subcommand(commands::list::command())
        .subcommand(commands::generate::command())
        .subcommand(commands::validate::command())
        .subcommand(commands::variables::command())
}

fn dispatch(
    session: &CliSession,
    matches: &ArgMatches,
) -> Result<commands::CommandResult, CliError> {
    match matches.subcommand() {
        Some(("list", sub)) => commands::list::run(session, sub),
        Some(("generate", sub)) => commands::generate::run(session, sub),
        Some(("validate", sub)) => commands::validate::run(session, sub),
        Some(("variables", sub)) => commands::variables::run(session, sub),
        _ => Err(CliError::new("missing command", ExitStatus::Usage)),
    }
}
