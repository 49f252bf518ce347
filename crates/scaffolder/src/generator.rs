//! Recursive template expansion into a target directory.
//!
//! Generation happens in two passes. Planning walks the template depth-first in
//! listing order, substitutes names and text contents, and classifies every
//! target file without touching the store. Binary files are copied verbatim.
//! Applying then replays the plan: it creates directories and writes files in
//! the same order. A dry run stops after planning, so its results are exactly
//! what a real run would report.
//!
//! Writes are not transactional. An I/O failure aborts the remaining steps and
//! leaves files that were already written in place.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::case;
use crate::catalog::{Template, TemplateCatalog, TemplateKind};
use crate::content::decode_text;
use crate::error::ScaffoldError;
use crate::placeholder::substitute;
use crate::store::FileStore;
use crate::variables::VariableSet;

/// Longest target name accepted, in characters.
pub const MAX_TARGET_NAME_LEN: usize = 255;

const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// What generation did (or would do) to one target file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationAction {
    Create,
    Overwrite,
    Skip,
}

/// One output file of a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub path: PathBuf,
    pub action: GenerationAction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Plan and classify only; nothing is written.
    pub dry_run: bool,
    /// Leave existing files untouched and record them as [`GenerationAction::Skip`].
    pub skip_existing: bool,
}

/// Side-channel observer for file writes. Never consulted for correctness.
pub trait ProgressReporter: Send + Sync {
    /// Called once before the first write with the number of files to write.
    fn start(&self, total: usize);
    fn advance(&self, path: &Path);
    fn finish(&self) {}
}

/// Rejects target names that cannot safely become file and directory names.
pub fn validate_target_name(name: &str) -> Result<(), ScaffoldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::InvalidInput(
            "target name must not be empty".into(),
        ));
    }

    let len = trimmed.chars().count();
    if len > MAX_TARGET_NAME_LEN {
        return Err(ScaffoldError::InvalidInput(format!(
            "target name is {len} characters; the limit is {MAX_TARGET_NAME_LEN}"
        )));
    }

    if let Some(ch) = trimmed
        .chars()
        .find(|ch| ch.is_control() || FORBIDDEN_NAME_CHARS.contains(ch))
    {
        return Err(ScaffoldError::InvalidInput(format!(
            "target name '{trimmed}' contains invalid character {ch:?}"
        )));
    }

    if case::pascal_case(trimmed).is_empty() {
        return Err(ScaffoldError::InvalidInput(format!(
            "target name '{trimmed}' must contain at least one letter or digit"
        )));
    }

    Ok(())
}

#[derive(Debug)]
enum PlanStep {
    Directory(PathBuf),
    File {
        path: PathBuf,
        content: Vec<u8>,
        action: GenerationAction,
    },
}

struct Planner<'a, S: FileStore> {
    store: &'a S,
    variables: &'a VariableSet,
    options: GenerationOptions,
    planned_files: HashSet<PathBuf>,
    steps: Vec<PlanStep>,
}

impl<S: FileStore> Planner<'_, S> {
    fn plan_dir(&mut self, source: &Path, target: &Path) -> Result<(), ScaffoldError> {
        for name in self.store.list_entries(source)? {
            let source_entry = source.join(&name);
            let target_entry = target.join(&*substitute(&name, self.variables));
            if self.store.is_dir(&source_entry) {
                self.steps.push(PlanStep::Directory(target_entry.clone()));
                self.plan_dir(&source_entry, &target_entry)?;
            } else {
                self.plan_file(&source_entry, target_entry)?;
            }
        }
        Ok(())
    }

    fn plan_file(&mut self, source: &Path, target: PathBuf) -> Result<(), ScaffoldError> {
        let content = match decode_text(source, self.store.read_bytes(source)?) {
            Ok(text) => substitute(&text, self.variables).into_owned().into_bytes(),
            Err(bytes) => bytes,
        };

        let exists = self.planned_files.contains(&target) || self.store.exists(&target);
        let action = match (exists, self.options.skip_existing) {
            (false, _) => GenerationAction::Create,
            (true, true) => GenerationAction::Skip,
            (true, false) => GenerationAction::Overwrite,
        };

        self.planned_files.insert(target.clone());
        self.steps.push(PlanStep::File {
            path: target,
            content,
            action,
        });
        Ok(())
    }
}

/// Expands templates from one templates root.
pub struct Generator<S: FileStore> {
    catalog: TemplateCatalog<S>,
    progress: Option<Box<dyn ProgressReporter>>,
    generated: Vec<GenerationResult>,
}

impl<S: FileStore> Generator<S> {
    pub fn new(store: S, templates_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog: TemplateCatalog::new(store, templates_root),
            progress: None,
            generated: Vec::new(),
        }
    }

    pub fn with_progress(mut self, reporter: impl ProgressReporter + 'static) -> Self {
        self.progress = Some(Box::new(reporter));
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog<S> {
        &self.catalog
    }

    pub fn list_templates(&self) -> Vec<Template> {
        self.catalog.list()
    }

    /// Results of the most recent [`Generator::generate`] call.
    ///
    /// After a failed real run this holds the files handled before the failure.
    pub fn generated_files(&self) -> &[GenerationResult] {
        &self.generated
    }

    /// Expands `template_name` for `target_name` under `target_dir`.
    ///
    /// Directory templates land in `target_dir/<PascalCase name>`; file templates
    /// are written directly under `target_dir` with a substituted file name.
    pub fn generate(
        &mut self,
        template_name: &str,
        target_name: &str,
        target_dir: &Path,
        options: GenerationOptions,
    ) -> Result<Vec<GenerationResult>, ScaffoldError> {
        self.generated.clear();
        validate_target_name(target_name)?;
        let template = self.catalog.resolve(template_name)?;
        let variables = VariableSet::build(target_name);

        let steps = self.plan(&template, &variables, target_dir, options)?;
        if options.dry_run {
            self.generated = steps.iter().filter_map(result_for).collect();
        } else {
            self.apply(steps)?;
        }
        Ok(self.generated.clone())
    }

    fn plan(
        &self,
        template: &Template,
        variables: &VariableSet,
        target_dir: &Path,
        options: GenerationOptions,
    ) -> Result<Vec<PlanStep>, ScaffoldError> {
        let mut planner = Planner {
            store: self.catalog.store(),
            variables,
            options,
            planned_files: HashSet::new(),
            steps: Vec::new(),
        };

        match template.kind {
            TemplateKind::Directory => {
                let container = target_dir.join(&variables.pascal_case);
                planner.steps.push(PlanStep::Directory(container.clone()));
                planner.plan_dir(&template.path, &container)?;
            }
            TemplateKind::File => {
                let file_name = template
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .ok_or_else(|| {
                        ScaffoldError::InvalidInput(format!(
                            "template path {} has no file name",
                            template.path.display()
                        ))
                    })?;
                let target = target_dir.join(&*substitute(&file_name, variables));
                planner.steps.push(PlanStep::Directory(target_dir.to_path_buf()));
                planner.plan_file(&template.path, target)?;
            }
        }

        Ok(planner.steps)
    }

    fn apply(&mut self, steps: Vec<PlanStep>) -> Result<(), ScaffoldError> {
        let store = self.catalog.store();
        let total = steps
            .iter()
            .filter(|step| {
                matches!(step, PlanStep::File { action, .. } if *action != GenerationAction::Skip)
            })
            .count();
        if let Some(progress) = &self.progress {
            progress.start(total);
        }

        for step in steps {
            match step {
                PlanStep::Directory(path) => store.ensure_dir(&path)?,
                PlanStep::File {
                    path,
                    content,
                    action,
                } => {
                    if action != GenerationAction::Skip {
                        store.write_bytes(&path, &content)?;
                        if let Some(progress) = &self.progress {
                            progress.advance(&path);
                        }
                    }
                    self.generated.push(GenerationResult { path, action });
                }
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish();
        }
        Ok(())
    }
}

fn result_for(step: &PlanStep) -> Option<GenerationResult> {
    match step {
        PlanStep::Directory(_) => None,
        PlanStep::File { path, action, .. } => Some(GenerationResult {
            path: path.clone(),
            action: *action,
        }),
    }
}
