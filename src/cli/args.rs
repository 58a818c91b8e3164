//! CLI argument definitions using clap
//!
//! Commands:
//! - filmdb serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filmdb - A minimal, self-hostable in-memory movie catalog service
#[derive(Parser, Debug)]
#[command(name = "filmdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the filmdb HTTP server
    Serve {
        /// Path to configuration file (defaults are used when absent)
        #[arg(long, default_value = "./filmdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_default_config_path() {
        let cli = Cli::try_parse_from(["filmdb", "serve"]).unwrap();
        let Command::Serve { config } = cli.command;
        assert_eq!(config, PathBuf::from("./filmdb.json"));
    }

    #[test]
    fn test_serve_custom_config_path() {
        let cli = Cli::try_parse_from(["filmdb", "serve", "--config", "/etc/filmdb.json"]).unwrap();
        let Command::Serve { config } = cli.command;
        assert_eq!(config, PathBuf::from("/etc/filmdb.json"));
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["filmdb"]).is_err());
    }
}
