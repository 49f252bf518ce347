use serde::Serialize;

use crate::error::ExitStatus;

pub mod generate;
pub mod list;
pub mod validate;
pub mod variables;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandResult {
    TemplateList {
        root: String,
        templates: Vec<list::TemplateSummary>,
    },
    Generated {
        template: String,
        name: String,
        target_dir: String,
        dry_run: bool,
        files: Vec<generate::GeneratedFile>,
    },
    Validation {
        reports: Vec<validate::ValidationReport>,
        valid: bool,
    },
    Variables {
        name: String,
        variables: Vec<variables::VariableSummary>,
    },
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CommandResult::Validation { valid, .. } => {
                if *valid {
                    ExitStatus::Ok
                } else {
                    ExitStatus::Data
                }
            }
            _ => ExitStatus::Ok,
        }
    }
}
