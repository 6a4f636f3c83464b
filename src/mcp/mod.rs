//! MCP layer - registers the tool catalog and invocation handler with the rmcp runtime
//!
//! Framing, handshake and capability negotiation belong to rmcp; this module only
//! translates between rmcp's model types and the crate's tool types.

mod server;

pub use server::{
    DiceServer, SERVER_NAME, SERVER_VERSION, to_call_tool_result, to_error_data, to_mcp_tool,
};
