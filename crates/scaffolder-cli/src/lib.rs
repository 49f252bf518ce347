mod cli;
mod commands;
mod config;
mod context;
mod error;
mod formatter;
mod progress;
mod util;

pub use cli::{run, run_cli};
pub use config::{CONFIG_FILE_NAME, LoadedConfig, OutputDirectory, ScaffolderConfig};
pub use error::{CliError, ExitStatus};
