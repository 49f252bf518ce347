use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// High-level error type shared across scaffolder components.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Wraps an I/O failure together with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true when the underlying failure is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        match self {
            ScaffoldError::TemplateNotFound(_) => true,
            ScaffoldError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            ScaffoldError::InvalidInput(_) => false,
        }
    }

    /// Returns true for undecodable content or entry names.
    pub fn is_invalid_data(&self) -> bool {
        matches!(
            self,
            ScaffoldError::Io { source, .. } if source.kind() == io::ErrorKind::InvalidData
        )
    }
}
