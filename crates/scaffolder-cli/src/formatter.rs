use std::process::ExitCode;

use scaffolder::GenerationAction;

use crate::commands::CommandResult;
use crate::error::CliError;

pub enum OutputFormat {
    Text,
    Json,
}

/// Renders a `CommandResult` as human-readable text or a single JSON document and
/// converts the outcome into an exit code.
pub fn emit_result(result: CommandResult, format: OutputFormat) -> Result<ExitCode, CliError> {
    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => print_json(&result)?,
    };
    Ok(result.exit_status().into())
}

fn print_text(result: &CommandResult) {
    match result {
        CommandResult::TemplateList { root, templates } => {
            if templates.is_empty() {
                println!("No templates found in {root}");
                return;
            }
            println!("Templates in {root} ({}):", templates.len());
            for template in templates {
                println!("  - {} ({})", template.name, template.kind);
            }
        }
        CommandResult::Generated {
            template,
            name,
            target_dir,
            dry_run,
            files,
        } => {
            if *dry_run {
                println!("Dry run: would generate '{template}' for '{name}' in {target_dir}");
            } else {
                println!("Generated '{template}' for '{name}' in {target_dir}");
            }
            for file in files {
                println!("  [{}] {}", action_label(file.action), file.path);
            }
            if files.is_empty() {
                println!("  (no files)");
            }
        }
        CommandResult::Validation { reports, valid } => {
            if *valid {
                println!("Template validation: OK ({} templates)", reports.len());
            } else {
                println!("Template validation: FAIL ({} templates)", reports.len());
            }
            for report in reports {
                if report.valid {
                    println!("  [OK] {}", report.name);
                } else {
                    println!("  [ERR] {}:", report.name);
                }
                for error in &report.errors {
                    println!("    - {error}");
                }
                for warning in &report.warnings {
                    println!("    ! {warning}");
                }
            }
        }
        CommandResult::Variables { name, variables } => {
            println!("Variables for '{name}':");
            for variable in variables {
                println!("  {} = {}", variable.token, variable.value);
            }
        }
    }
}

fn action_label(action: GenerationAction) -> &'static str {
    match action {
        GenerationAction::Create => "create",
        GenerationAction::Overwrite => "overwrite",
        GenerationAction::Skip => "skip",
    }
}

fn print_json(result: &CommandResult) -> Result<(), CliError> {
    let payload = serde_json::to_string(result)?;
    println!("{payload}");
    Ok(())
}
