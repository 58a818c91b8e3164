//! CLI module for filmdb
//!
//! Provides the command-line interface:
//! - serve: load config, seed the catalog, enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, serve};
pub use errors::{CliError, CliResult};
