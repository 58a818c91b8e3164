//! CLI command implementations
//!
//! `serve` loads configuration, seeds the catalog, and blocks on the HTTP
//! server inside a tokio runtime.

use std::fs;
use std::path::Path;

use crate::catalog::MovieStore;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
    }
}

/// Load configuration from a JSON file.
///
/// An absent file is not an error: the server falls back to defaults, so a
/// bare `filmdb serve` works out of the box.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let path_str = path.display().to_string();

    if !path.exists() {
        Logger::info("CONFIG_DEFAULTED", &[("path", path_str.as_str())]);
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    Logger::info("CONFIG_LOADED", &[("path", path_str.as_str())]);

    Ok(config)
}

/// Start the server over the seeded catalog and block until it exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let server = HttpServer::with_config(MovieStore::seeded(), config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}
