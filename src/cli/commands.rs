//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - serve: run the MCP server on stdio (default)
//! - tools: print the tool catalog
//! - call: invoke one tool locally

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dice-server - an MCP server that rolls dice
#[derive(Parser, Debug)]
#[command(name = "dice-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log file path (defaults to the user's local data directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve the dice tools over MCP on stdin/stdout
    Serve,

    /// Print the tool catalog as JSON
    Tools,

    /// Invoke a tool once and print its result
    Call {
        /// Tool name (e.g. roll_dice)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}
