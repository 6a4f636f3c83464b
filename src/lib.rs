//! dice-server - dice rolling tools over the Model Context Protocol
//!
//! The tool catalog and dispatcher are plain Rust; the `mcp` module registers them
//! with the rmcp runtime, which owns framing and the handshake.

pub mod dice;
pub mod error;
pub mod mcp;
pub mod tools;

pub use error::{DiceError, ErrorKind, Result};
