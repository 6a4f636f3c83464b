//! Runtime configuration for dice-server.
//!
//! Resolved from command-line flags only; the server reads no config files.
//! Log file resolution order:
//! 1. `--log-file` if provided
//! 2. <data_local_dir>/dice-server/logs/dice-server.log
//! 3. ./dice-server.log when no data directory is known

use eyre::{Context, Result};
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

use dice_server::mcp::{SERVER_NAME, SERVER_VERSION};

use crate::cli::Cli;

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name advertised in the MCP handshake
    pub name: String,
    /// Version advertised in the MCP handshake
    pub version: String,
    /// File that receives log output
    pub log_file: PathBuf,
    /// Debug-level logging
    pub verbose: bool,
}

impl Config {
    /// Build configuration from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            log_file: cli.log_file.clone().unwrap_or_else(default_log_file),
            verbose: cli.is_verbose(),
        }
    }

    /// Base log level; RUST_LOG still overrides it.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose { LevelFilter::Debug } else { LevelFilter::Info }
    }

    /// Open the log file for appending, creating parent directories.
    pub fn open_log_file(&self) -> Result<File> {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Failed to open log file {}", self.log_file.display()))
    }
}

/// Default log file location.
pub fn default_log_file() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("dice-server").join("logs").join("dice-server.log"),
        None => PathBuf::from("dice-server.log"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_from_cli_defaults() {
        let cli = Cli::try_parse_from(["dice-server"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.name, "dice-server");
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.log_file, default_log_file());
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_from_cli_overrides() {
        let cli = Cli::try_parse_from(["dice-server", "-v", "--log-file", "/tmp/x.log"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_default_log_file_name() {
        assert!(default_log_file().ends_with("dice-server.log"));
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("nested").join("logs").join("dice.log");
        let config = Config {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            log_file: log_file.clone(),
            verbose: false,
        };

        let mut file = config.open_log_file().unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = config.open_log_file().unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let content = fs::read_to_string(&log_file).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
