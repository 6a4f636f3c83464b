//! CLI module for dice-server - command-line interface and subcommands.

pub mod commands;

pub use commands::{Cli, Commands};
