use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::CliSession;
use crate::error::CliError;

#[derive(Clone, Debug, Serialize)]
pub struct ValidationReport {
    pub name: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn command() -> Command {
    Command::new("validate")
        .about("Check templates for malformed or unknown placeholders")
        .arg(
            Arg::new("template")
                .value_name("TEMPLATE")
                .help("Validate a single template. Defaults to every template."),
        )
}

pub fn run(session: &CliSession, matches: &ArgMatches) -> Result<CommandResult, CliError> {
    let validator = session.validator();
    let reports: Vec<ValidationReport> = match matches.get_one::<String>("template") {
        Some(name) => {
            let template = session.catalog().resolve(name)?;
            let result = validator.validate(&template.path);
            vec![ValidationReport {
                name: template.name,
                valid: result.valid,
                errors: result.errors,
                warnings: result.warnings,
            }]
        }
        None => validator
            .validate_all(&session.templates_root)
            .into_iter()
            .map(|(name, result)| ValidationReport {
                name,
                valid: result.valid,
                errors: result.errors,
                warnings: result.warnings,
            })
            .collect(),
    };

    if session.verbosity.verbose {
        tracing::info!(
            templates_root = %session.templates_root.display(),
            checked = reports.len(),
            "validated templates"
        );
    }

    let valid = reports.iter().all(|report| report.valid);
    Ok(CommandResult::Validation { reports, valid })
}
