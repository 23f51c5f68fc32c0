//! Quill CLI library.
//!
//! Drives extraction, drafting and export over a project JSON file, with
//! provider profiles kept in `~/.quill/config.toml`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod project_file;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
