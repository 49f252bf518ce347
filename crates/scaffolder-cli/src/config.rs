//! `scaffolder.yaml` discovery and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "scaffolder.yaml";
const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// A named destination that generated files can be written under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDirectory {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffolderConfig {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default)]
    pub output_directories: Vec<OutputDirectory>,
}

impl Default for ScaffolderConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            output_directories: Vec::new(),
        }
    }
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

/// Configuration plus the directory its relative paths resolve against.
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: ScaffolderConfig,
    pub base_dir: PathBuf,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn templates_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.templates_dir)
    }

    /// Output directories with paths resolved against the config location.
    pub fn output_directories(&self) -> Vec<OutputDirectory> {
        self.config
            .output_directories
            .iter()
            .map(|dir| OutputDirectory {
                name: dir.name.clone(),
                path: self.base_dir.join(&dir.path),
                description: dir.description.clone(),
            })
            .collect()
    }

    pub fn output_directory(&self, name: &str) -> Option<OutputDirectory> {
        self.output_directories()
            .into_iter()
            .find(|dir| dir.name == name)
    }
}

/// Finds the nearest `scaffolder.yaml` in `start` or its ancestors.
pub fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads an explicit config file, or the discovered one, or defaults rooted at `cwd`.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) if path.is_absolute() => Some(path.to_path_buf()),
        Some(path) => Some(cwd.join(path)),
        None => discover(cwd),
    };

    let Some(path) = path else {
        return Ok(LoadedConfig {
            config: ScaffolderConfig::default(),
            base_dir: cwd.to_path_buf(),
            source: None,
        });
    };

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse(&raw, &path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    Ok(LoadedConfig {
        config,
        base_dir,
        source: Some(path),
    })
}

fn parse(raw: &str, path: &Path) -> Result<ScaffolderConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(ScaffolderConfig::default());
    }

    let config: ScaffolderConfig =
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (idx, dir) in config.output_directories.iter().enumerate() {
        if dir.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("output_directories[{idx}] has an empty name"),
            });
        }
        if config.output_directories[..idx]
            .iter()
            .any(|other| other.name == dir.name)
        {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: format!("duplicate output directory name '{}'", dir.name),
            });
        }
    }

    Ok(config)
}
