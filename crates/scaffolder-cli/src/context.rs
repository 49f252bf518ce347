use std::env;
use std::path::{Path, PathBuf};

use scaffolder::{FsStore, Generator, TemplateCatalog, TemplateValidator};

use crate::config::{self, LoadedConfig, OutputDirectory};
use crate::error::{CliError, ExitStatus};
use crate::progress::TracingProgress;
use crate::util::Verbosity;

/// Resolved configuration shared by every command of one invocation.
pub struct CliSession {
    pub cwd: PathBuf,
    pub config: LoadedConfig,
    pub templates_root: PathBuf,
    pub verbosity: Verbosity,
}

impl CliSession {
    pub fn bootstrap(
        config_override: Option<String>,
        templates_override: Option<String>,
        verbosity: Verbosity,
    ) -> Result<Self, CliError> {
        let cwd = env::current_dir()?;
        let config = config::load(config_override.as_deref().map(Path::new), &cwd)?;
        let templates_root = match templates_override {
            Some(path) => cwd.join(path),
            None => config.templates_root(),
        };

        Ok(Self {
            cwd,
            config,
            templates_root,
            verbosity,
        })
    }

    pub fn catalog(&self) -> TemplateCatalog<FsStore> {
        TemplateCatalog::new(FsStore::new(), &self.templates_root)
    }

    pub fn generator(&self) -> Generator<FsStore> {
        Generator::new(FsStore::new(), &self.templates_root)
            .with_progress(TracingProgress::default())
    }

    pub fn validator(&self) -> TemplateValidator<FsStore> {
        TemplateValidator::new(FsStore::new())
    }

    /// Picks the generation root: a configured output directory by name, else a
    /// path relative to the working directory. Without a selector the first
    /// configured output directory wins, then the working directory.
    pub fn output_root(&self, selector: Option<&str>) -> Result<PathBuf, CliError> {
        match selector {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(CliError::new(
                        "output directory must not be empty",
                        ExitStatus::Usage,
                    ));
                }
                Ok(self
                    .config
                    .output_directory(trimmed)
                    .map(|dir| dir.path)
                    .unwrap_or_else(|| self.cwd.join(trimmed)))
            }
            None => Ok(self
                .output_directories()
                .into_iter()
                .next()
                .map(|dir| dir.path)
                .unwrap_or_else(|| self.cwd.clone())),
        }
    }

    pub fn output_directories(&self) -> Vec<OutputDirectory> {
        self.config.output_directories()
    }
}
