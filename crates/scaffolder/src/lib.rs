//! Template resolution and name-case substitution for project scaffolding.
//!
//! A template is a file or directory under a templates root. Generating from
//! it expands one user-supplied name into eight case variants and replaces the
//! matching `__templateName…__` tokens in every file name, directory name, and
//! file body.

pub mod case;
pub mod catalog;
mod content;
pub mod error;
pub mod generator;
pub mod placeholder;
pub mod store;
pub mod validator;
pub mod variables;

pub use case::CaseVariant;
pub use catalog::{Template, TemplateCatalog, TemplateKind, list_templates};
pub use error::ScaffoldError;
pub use generator::{
    GenerationAction, GenerationOptions, GenerationResult, Generator, MAX_TARGET_NAME_LEN,
    ProgressReporter, validate_target_name,
};
pub use placeholder::{Placeholder, TOKEN_PREFIX, substitute};
pub use store::{FileStore, FsStore, MemoryStore};
pub use validator::{LARGE_FILE_CHARS, TemplateValidator, ValidationResult};
pub use variables::VariableSet;
