use clap::{ArgMatches, Command};
use scaffolder::TemplateKind;
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::CliSession;
use crate::error::CliError;
use crate::util::display_path;

#[derive(Clone, Debug, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub kind: TemplateKind,
    pub path: String,
}

pub fn command() -> Command {
    Command::new("list")
        .visible_alias("ls")
        .about("List the templates available under the templates root")
}

pub fn run(session: &CliSession, _matches: &ArgMatches) -> Result<CommandResult, CliError> {
    let templates = session
        .catalog()
        .list()
        .into_iter()
        .map(|template| TemplateSummary {
            path: display_path(&session.cwd, &template.path),
            name: template.name,
            kind: template.kind,
        })
        .collect();

    Ok(CommandResult::TemplateList {
        root: display_path(&session.cwd, &session.templates_root),
        templates,
    })
}
