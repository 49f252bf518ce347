use clap::{Arg, ArgAction, ArgMatches, Command};
use scaffolder::{GenerationAction, GenerationOptions};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::CliSession;
use crate::error::{CliError, ExitStatus};
use crate::util::display_path;

#[derive(Clone, Debug, Serialize)]
pub struct GeneratedFile {
    pub path: String,
    pub action: GenerationAction,
}

pub fn command() -> Command {
    Command::new("generate")
        .visible_alias("g")
        .about("Generate files from a template for the given name")
        .arg(
            Arg::new("template")
                .value_name("TEMPLATE")
                .required(true)
                .help("Template name under the templates root."),
        )
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .required(true)
                .help("Name substituted into the template, e.g. \"user profile\"."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("NAME|PATH")
                .help("Configured output directory name, or a path. Defaults to the first configured output directory."),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report the files that would be created or overwritten without writing."),
        )
        .arg(
            Arg::new("skip-existing")
                .long("skip-existing")
                .action(ArgAction::SetTrue)
                .help("Leave files that already exist untouched."),
        )
}

pub fn run(session: &CliSession, matches: &ArgMatches) -> Result<CommandResult, CliError> {
    let template = matches
        .get_one::<String>("template")
        .cloned()
        .ok_or_else(|| CliError::new("template name required", ExitStatus::Usage))?;
    let name = matches
        .get_one::<String>("name")
        .cloned()
        .ok_or_else(|| CliError::new("target name required", ExitStatus::Usage))?;
    let options = GenerationOptions {
        dry_run: matches.get_flag("dry-run"),
        skip_existing: matches.get_flag("skip-existing"),
    };

    let target_dir = session.output_root(matches.get_one::<String>("output").map(String::as_str))?;
    if session.verbosity.verbose {
        tracing::info!(
            template = %template,
            name = %name,
            target_dir = %target_dir.display(),
            dry_run = options.dry_run,
            "generating from template"
        );
    }

    let mut generator = session.generator();
    let results = generator.generate(&template, &name, &target_dir, options)?;
    let files = results
        .into_iter()
        .map(|result| GeneratedFile {
            path: display_path(&session.cwd, &result.path),
            action: result.action,
        })
        .collect();

    Ok(CommandResult::Generated {
        template,
        name,
        target_dir: display_path(&session.cwd, &target_dir),
        dry_run: options.dry_run,
        files,
    })
}
