use clap::{Arg, ArgMatches, Command};
use scaffolder::{CaseVariant, VariableSet};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::CliSession;
use crate::error::{CliError, ExitStatus};

#[derive(Clone, Debug, Serialize)]
pub struct VariableSummary {
    pub token: &'static str,
    pub variant: CaseVariant,
    pub value: String,
}

pub fn command() -> Command {
    Command::new("variables")
        .about("Show the placeholder values a name expands into")
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .required(true)
                .help("Name to expand, e.g. \"user profile\"."),
        )
}

pub fn run(_session: &CliSession, matches: &ArgMatches) -> Result<CommandResult, CliError> {
    let name = matches
        .get_one::<String>("name")
        .cloned()
        .ok_or_else(|| CliError::new("name required", ExitStatus::Usage))?;

    let variables = VariableSet::build(&name)
        .iter()
        .map(|(placeholder, value)| VariableSummary {
            token: placeholder.token(),
            variant: placeholder.variant(),
            value: value.to_string(),
        })
        .collect();

    Ok(CommandResult::Variables { name, variables })
}
